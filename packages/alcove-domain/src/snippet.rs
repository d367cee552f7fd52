use std::sync::OnceLock;

use regex::Regex;

fn sentence_boundary() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();

	RE.get_or_init(|| Regex::new(r"[.!?]\s+").expect("Sentence boundary pattern is valid."))
}

/// The sentence of `body` containing the most distinct query terms,
/// truncated to `max_chars` at a whitespace boundary.
///
/// Only strictly greater scores replace the running best, so the earliest
/// best sentence wins ties. A body with no matching sentence falls back to
/// its first sentence.
pub fn extract(body: &str, terms: &[String], max_chars: usize) -> String {
	let sentences = sentence_boundary().split(body).collect::<Vec<_>>();
	let mut best = sentences.first().copied().unwrap_or("");
	let mut best_score = 0;

	for sentence in &sentences {
		let lower = sentence.to_lowercase();
		let score =
			terms.iter().filter(|term| lower.contains(term.to_lowercase().as_str())).count();

		if score > best_score {
			best_score = score;
			best = sentence;
		}
	}

	truncate(best, max_chars)
}

/// Wraps each query term in `**` for markdown rendering. Terms under two
/// characters are skipped to avoid over-highlighting common fragments.
pub fn highlight(text: &str, terms: &[String]) -> String {
	let mut highlighted = text.to_string();

	for term in terms {
		if term.chars().count() < 2 {
			continue;
		}

		let pattern = format!("(?i){}", regex::escape(term));
		let Ok(re) = Regex::new(&pattern) else {
			continue;
		};

		highlighted = re.replace_all(&highlighted, "**${0}**").into_owned();
	}

	highlighted
}

fn truncate(sentence: &str, max_chars: usize) -> String {
	if sentence.chars().count() <= max_chars {
		return sentence.to_string();
	}

	let cut = sentence.chars().take(max_chars).collect::<String>();
	let kept = match cut.rfind(' ') {
		Some(pos) if pos > 0 => &cut[..pos],
		_ => cut.as_str(),
	};

	format!("{kept}...")
}
