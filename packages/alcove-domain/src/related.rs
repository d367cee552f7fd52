use std::collections::HashSet;

use alcove_config::Related;

use crate::keywords;

/// Keyword view of the document (or activity entry) relatedness is computed
/// against. Built once, scored against every candidate.
#[derive(Debug, Clone)]
pub struct RelatedSource {
	/// Lowercased tags in their stored order; the first shared tag supplies
	/// the match reason.
	tags: Vec<String>,
	title_keywords: HashSet<String>,
	body_keywords: HashSet<String>,
	/// Only document sources carry a category; activity entries have none.
	category: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct RelatedCandidate<'a> {
	pub title: &'a str,
	pub tags: &'a [String],
	pub category: &'a str,
}

#[derive(Debug, Clone)]
pub struct RelatedMatch {
	pub score: u32,
	pub reason: String,
}

impl RelatedSource {
	pub fn new(title: &str, tags: &[String], body: &str, category: Option<&str>) -> Self {
		let mut seen = HashSet::new();
		let tags = tags
			.iter()
			.map(|tag| tag.to_lowercase())
			.filter(|tag| seen.insert(tag.clone()))
			.collect();

		Self {
			tags,
			title_keywords: keywords::keyword_set(title),
			body_keywords: keywords::keyword_set(body),
			category: category.map(str::to_string),
		}
	}
}

/// Scores a candidate against the source: shared tags, then title keyword
/// overlap, then a flat same-category bonus, then body-keyword-in-title
/// overlap (the last only once some score exists, and never supplying the
/// reason). Candidates scoring zero are not matches.
pub fn score_candidate(
	source: &RelatedSource,
	candidate: &RelatedCandidate<'_>,
	weights: &Related,
) -> Option<RelatedMatch> {
	let candidate_tags =
		candidate.tags.iter().map(|tag| tag.to_lowercase()).collect::<HashSet<_>>();
	let shared =
		source.tags.iter().filter(|tag| candidate_tags.contains(*tag)).collect::<Vec<_>>();
	let mut score = 0;
	let mut reason: Option<String> = None;

	if let Some(first) = shared.first() {
		score += shared.len() as u32 * weights.shared_tag;
		reason = Some(format!("shared tag: {first}"));
	}

	let candidate_title_keywords = keywords::keyword_set(candidate.title);
	let title_overlap =
		source.title_keywords.intersection(&candidate_title_keywords).count() as u32;

	if title_overlap > 0 {
		score += title_overlap * weights.title_overlap;

		reason.get_or_insert_with(|| "similar topic".to_string());
	}
	if let Some(category) = source.category.as_deref()
		&& candidate.category == category
	{
		score += weights.same_category;

		reason.get_or_insert_with(|| format!("same category: {category}"));
	}
	if score > 0 {
		let candidate_title = candidate.title.to_lowercase();
		let content_overlap = source
			.body_keywords
			.iter()
			.filter(|word| candidate_title.contains(word.as_str()))
			.count() as u32;

		score += content_overlap * weights.content_overlap;
	}

	if score == 0 {
		None
	} else {
		Some(RelatedMatch { score, reason: reason.unwrap_or_else(|| "related".to_string()) })
	}
}
