use alcove_domain::{score, snippet};

use crate::{AlcoveService, ServiceResult};

#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
	pub query: String,
	pub category: Option<String>,
	pub tag: Option<String>,
	pub limit: Option<usize>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
	pub slug: String,
	pub title: String,
	pub category: String,
	pub tags: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub snippet: String,
	pub score: u32,
	#[serde(with = "crate::time_serde")]
	pub last_modified: time::OffsetDateTime,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchResponse {
	pub results: Vec<SearchItem>,
	pub count: usize,
	pub total: usize,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub query: Option<String>,
}

impl AlcoveService {
	/// Scores the full candidate set, then sorts and truncates; the limit is
	/// applied after ranking so it never biases which documents are scored.
	pub fn search(&self, req: SearchRequest) -> ServiceResult<SearchResponse> {
		let docs = self.docs.get_or_refresh()?;
		let total = docs.len();
		let query = req.query.trim();

		if query.is_empty() {
			return Ok(SearchResponse { results: Vec::new(), count: 0, total, query: None });
		}

		// Raw whitespace-split terms, taken as given; only the free-text
		// keyword extractor filters by length, not the scorer.
		let terms = query.split_whitespace().map(str::to_string).collect::<Vec<_>>();
		let weights = &self.cfg.search.weights;
		let mut results = Vec::new();

		for doc in docs.iter() {
			if let Some(category) = req.category.as_deref()
				&& doc.category != category
			{
				continue;
			}
			if let Some(tag) = req.tag.as_deref()
				&& !doc.tags.iter().any(|candidate| candidate == tag)
			{
				continue;
			}

			let fields = score::DocFields {
				title: &doc.title,
				description: doc.description.as_deref().unwrap_or(""),
				tags: &doc.tags,
				body: &doc.body,
			};
			let score = score::relevance(&fields, &terms, weights);

			if score == 0 {
				continue;
			}

			let raw_snippet =
				snippet::extract(&doc.body, &terms, self.cfg.search.snippet_max_chars);

			results.push(SearchItem {
				slug: doc.slug.clone(),
				title: doc.title.clone(),
				category: doc.category.clone(),
				tags: doc.tags.clone(),
				description: doc.description.clone(),
				snippet: snippet::highlight(&raw_snippet, &terms),
				score,
				last_modified: doc.last_modified,
			});
		}

		results.sort_by(|a, b| {
			b.score.cmp(&a.score).then_with(|| b.last_modified.cmp(&a.last_modified))
		});

		let limit =
			req.limit.filter(|limit| *limit > 0).unwrap_or(self.cfg.search.default_limit);

		results.truncate(limit);

		tracing::debug!(query, scanned = total, returned = results.len(), "Search completed.");

		Ok(SearchResponse {
			count: results.len(),
			results,
			total,
			query: Some(query.to_string()),
		})
	}
}
