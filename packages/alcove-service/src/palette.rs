use crate::{AlcoveService, ServiceResult};

/// Fixed weights of the command-palette matcher; substring hits only, no
/// per-occurrence counting.
const TITLE_WEIGHT: u32 = 10;
const TAG_WEIGHT: u32 = 7;
const DESCRIPTION_WEIGHT: u32 = 5;
const CATEGORY_WEIGHT: u32 = 3;
const MAX_RESULTS: usize = 10;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PaletteDoc {
	pub slug: String,
	pub title: String,
	pub category: String,
	pub tags: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PaletteResponse {
	pub docs: Vec<PaletteDoc>,
}

impl AlcoveService {
	/// Lightweight prefix-free matcher backing the command palette. Queries
	/// shorter than two characters return nothing rather than the whole
	/// vault.
	pub fn palette(&self, query: &str) -> ServiceResult<PaletteResponse> {
		let query = query.trim().to_lowercase();

		if query.chars().count() < 2 {
			return Ok(PaletteResponse { docs: Vec::new() });
		}

		let docs = self.docs.get_or_refresh()?;
		let mut scored = Vec::new();

		for doc in docs.iter() {
			let mut score = 0;

			if doc.title.to_lowercase().contains(&query) {
				score += TITLE_WEIGHT;
			}
			if doc.tags.iter().any(|tag| tag.to_lowercase().contains(&query)) {
				score += TAG_WEIGHT;
			}
			if let Some(description) = doc.description.as_deref()
				&& description.to_lowercase().contains(&query)
			{
				score += DESCRIPTION_WEIGHT;
			}
			if doc.category.to_lowercase().contains(&query) {
				score += CATEGORY_WEIGHT;
			}

			if score > 0 {
				scored.push((score, doc));
			}
		}

		scored.sort_by(|a, b| b.0.cmp(&a.0));
		scored.truncate(MAX_RESULTS);

		let docs = scored
			.into_iter()
			.map(|(_, doc)| PaletteDoc {
				slug: doc.slug.clone(),
				title: doc.title.clone(),
				category: doc.category.clone(),
				tags: doc.tags.clone(),
				description: doc.description.clone(),
			})
			.collect();

		Ok(PaletteResponse { docs })
	}
}
