use alcove_config::SearchWeights;

/// The scoreable fields of a document. `description` is the empty string
/// when the front-matter has none.
#[derive(Debug, Clone, Copy)]
pub struct DocFields<'a> {
	pub title: &'a str,
	pub description: &'a str,
	pub tags: &'a [String],
	pub body: &'a str,
}

/// Accumulated relevance of a document for a whitespace-split query.
///
/// Each term is scored independently and summed: title substring plus an
/// exact-word bonus, tag substring plus an exact-tag bonus, description
/// substring, and body occurrences capped per term. Scores are only
/// comparable within the same query; zero means "not a match".
pub fn relevance(fields: &DocFields<'_>, terms: &[String], weights: &SearchWeights) -> u32 {
	let title = fields.title.to_lowercase();
	let description = fields.description.to_lowercase();
	let tags = fields.tags.iter().map(|tag| tag.to_lowercase()).collect::<Vec<_>>();
	let body = fields.body.to_lowercase();
	let mut score = 0;

	for term in terms {
		let term = term.to_lowercase();

		if term.is_empty() {
			continue;
		}

		if title.contains(&term) {
			score += weights.title;

			if title.split_whitespace().any(|word| word == term) {
				score += weights.title_exact_word;
			}
		}
		if tags.iter().any(|tag| tag.contains(&term)) {
			score += weights.tag;

			if tags.iter().any(|tag| *tag == term) {
				score += weights.tag_exact;
			}
		}
		if description.contains(&term) {
			score += weights.description;
		}

		let occurrences = body.matches(term.as_str()).count() as u32;

		score += (occurrences * weights.body).min(weights.body_cap_per_term);
	}

	score
}
