use alcove_domain::related::{RelatedCandidate, RelatedSource, score_candidate};

use crate::{AlcoveService, ServiceError, ServiceResult};

#[derive(Debug, Clone, Default)]
pub struct RelatedRequest {
	/// Slug of a stored document, with or without a `.md` suffix.
	pub path: Option<String>,
	/// Id of an activity-feed entry.
	pub activity_id: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedNote {
	pub title: String,
	pub path: String,
	pub category: String,
	pub score: u32,
	pub match_reason: String,
	pub tags: Vec<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RelatedResponse {
	pub related: Vec<RelatedNote>,
}

impl AlcoveService {
	/// Scores every document against a source document or activity entry.
	/// The source is agnostic to which; only document sources carry a
	/// category and exclude themselves from the results.
	pub fn related(&self, req: RelatedRequest) -> ServiceResult<RelatedResponse> {
		let path = req
			.path
			.as_deref()
			.map(|path| path.strip_suffix(".md").unwrap_or(path).to_string());
		let docs = self.docs.get_or_refresh()?;
		let source = match (path.as_deref(), req.activity_id.as_deref()) {
			(Some(slug), _) => {
				let doc = docs.iter().find(|doc| doc.slug == slug).ok_or_else(|| {
					ServiceError::NotFound { message: "Document not found".to_string() }
				})?;

				RelatedSource::new(&doc.title, &doc.tags, &doc.body, Some(&doc.category))
			},
			(None, Some(id)) => {
				let entries = self.activity.load()?;
				let entry = entries.iter().find(|entry| entry.id == id).ok_or_else(|| {
					ServiceError::NotFound { message: "Activity not found".to_string() }
				})?;

				RelatedSource::new(&entry.title, &entry.tags, &entry.summary, None)
			},
			(None, None) => {
				return Err(ServiceError::InvalidRequest {
					message: "Missing path or activity_id parameter".to_string(),
				});
			},
		};
		let mut scored = Vec::new();

		for doc in docs.iter() {
			if path.as_deref() == Some(doc.slug.as_str()) {
				continue;
			}

			let candidate =
				RelatedCandidate { title: &doc.title, tags: &doc.tags, category: &doc.category };

			if let Some(matched) = score_candidate(&source, &candidate, &self.cfg.related) {
				scored.push(RelatedNote {
					title: doc.title.clone(),
					path: doc.slug.clone(),
					category: doc.category.clone(),
					score: matched.score,
					match_reason: matched.reason,
					tags: doc.tags.clone(),
				});
			}
		}

		scored.sort_by(|a, b| b.score.cmp(&a.score));
		scored.truncate(self.cfg.related.max_results);

		Ok(RelatedResponse { related: scored })
	}
}
