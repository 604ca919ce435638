// Input classification: name extraction, exit detection and mood keywords

/// Fallback display name when the introduction line gives nothing usable
pub const DEFAULT_NAME: &str = "Friend";

/// Typing one of these at any prompt ends the current dialogue
pub const EXIT_KEYWORDS: [&str; 2] = ["bye", "adios"];

// Self-introduction prefixes, checked in order
const NAME_PREFIXES: [&str; 3] = ["my name is ", "I'm ", "I am "];

// Sentiment keyword lists. Matching is substring based and case sensitive,
// so "ok" also matches inside longer words; the negative list is checked
// first, so an input hitting both lists counts as negative.
const NEGATIVE_KEYWORDS: [&str; 22] = [
	"bad",
	"sad",
	"down",
	"disappointed",
	"not good",
	"unhappy",
	"upset",
	"stressed",
	"frustrated",
	"tired",
	"overwhelmed",
	"depressed",
	"anxious",
	"worried",
	"angry",
	"not okay",
	"not ok",
	"hopeless",
	"exhausted",
	"burned out",
	"heartbroken",
	"devastated",
];

const POSITIVE_KEYWORDS: [&str; 20] = [
	"good",
	"happy",
	"great",
	"fantastic",
	"amazing",
	"excited",
	"joyful",
	"nice",
	"ok",
	"relaxed",
	"energetic",
	"motivated",
	"confident",
	"proud",
	"peaceful",
	"wonderful",
	"grateful",
	"hopeful",
	"strong",
	"well",
];

/// Extract a display name from the user's introduction line.
/// No trimming or validation happens here; whatever follows a matched
/// prefix (or the whole line) is taken verbatim.
pub fn extract_name(input: &str) -> String {
	if input.is_empty() {
		return DEFAULT_NAME.to_string();
	}
	for prefix in NAME_PREFIXES {
		if let Some(name) = input.strip_prefix(prefix) {
			if name.is_empty() {
				return DEFAULT_NAME.to_string();
			}
			return name.to_string();
		}
	}
	input.to_string()
}

/// Check if the user wants to end the conversation. Exact match only.
pub fn wants_to_exit(input: &str) -> bool {
	EXIT_KEYWORDS.contains(&input)
}

pub fn is_negative(input: &str) -> bool {
	NEGATIVE_KEYWORDS.iter().any(|keyword| input.contains(keyword))
}

pub fn is_positive(input: &str) -> bool {
	POSITIVE_KEYWORDS.iter().any(|keyword| input.contains(keyword))
}
