use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

/// Closed-class words excluded from keyword extraction. Only entries longer
/// than three characters can ever match, the rest are kept for completeness.
const STOP_WORDS: &[&str] = &[
	"a", "about", "an", "and", "are", "as", "at", "be", "been", "but", "by", "can", "could", "did",
	"do", "does", "during", "for", "from", "had", "has", "have", "he", "how", "i", "in", "into",
	"is", "it", "its", "may", "might", "of", "on", "or", "she", "should", "that", "the", "these",
	"they", "this", "those", "through", "to", "up", "was", "we", "were", "what", "when", "where",
	"which", "who", "why", "will", "with", "would", "you",
];

/// Lowercased tokens of length > 3 that are not stop-words, de-duplicated.
/// Deterministic for a given input, which keeps scoring reproducible.
pub fn keyword_set(text: &str) -> HashSet<String> {
	text.unicode_words().filter_map(normalize).collect()
}

/// The ordered variant used for frequency counting: duplicates are kept and
/// the run is truncated to the first `max_tokens` keywords.
pub fn keyword_run(text: &str, max_tokens: usize) -> Vec<String> {
	text.unicode_words().filter_map(normalize).take(max_tokens).collect()
}

fn normalize(word: &str) -> Option<String> {
	let token = word.to_lowercase();

	if token.chars().count() > 3 && !STOP_WORDS.contains(&token.as_str()) {
		Some(token)
	} else {
		None
	}
}
