use ahash::AHashSet;
use alcove_vault::{
	frontmatter::FrontMatter,
	write::{self, WriteOutcome},
};

use crate::{AlcoveService, ServiceError, ServiceResult};

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocFrontmatter {
	pub title: Option<String>,
	pub description: Option<String>,
	pub date: Option<String>,
	pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteDocumentRequest {
	pub slug: String,
	pub content: String,
	#[serde(default)]
	pub frontmatter: DocFrontmatter,
	#[serde(default)]
	pub create_new: bool,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct WriteDocumentResponse {
	pub success: bool,
	pub message: String,
	pub slug: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ReadDocumentResponse {
	pub slug: String,
	pub frontmatter: FrontMatter,
	pub content: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
	pub document_count: usize,
	pub total_events: usize,
	/// Count of distinct categories, not the categories themselves.
	pub categories: usize,
}

impl AlcoveService {
	/// Serializes front-matter plus body to the slug's file, then drops the
	/// document cache so the write is visible to the next read.
	pub fn write_document(&self, req: WriteDocumentRequest) -> ServiceResult<WriteDocumentResponse> {
		if req.slug.trim().is_empty() {
			return Err(ServiceError::InvalidRequest {
				message: "Slug is required".to_string(),
			});
		}

		let front_matter = FrontMatter {
			// An absent title still serializes; readers key off the field
			// being present.
			title: Some(req.frontmatter.title.unwrap_or_default()),
			description: req.frontmatter.description,
			date: req.frontmatter.date,
			tags: req.frontmatter.tags.unwrap_or_default(),
		};
		let outcome = write::write_document(
			&self.cfg.vault.root,
			&req.slug,
			&front_matter,
			&req.content,
			req.create_new,
		)?;

		match outcome {
			WriteOutcome::Saved => {
				self.docs.invalidate();

				Ok(WriteDocumentResponse {
					success: true,
					message: "Document saved successfully".to_string(),
					slug: req.slug,
				})
			},
			WriteOutcome::MissingTarget => Err(ServiceError::NotFound {
				message: "File does not exist".to_string(),
			}),
		}
	}

	pub fn read_document(&self, slug: &str) -> ServiceResult<ReadDocumentResponse> {
		if slug.trim().is_empty() {
			return Err(ServiceError::InvalidRequest {
				message: "Slug is required".to_string(),
			});
		}

		let slug = slug.strip_suffix(".md").unwrap_or(slug);
		let (frontmatter, content) = write::read_document(&self.cfg.vault.root, slug)?
			.ok_or_else(|| ServiceError::NotFound { message: "File not found".to_string() })?;

		Ok(ReadDocumentResponse { slug: slug.to_string(), frontmatter, content })
	}

	pub fn stats(&self) -> ServiceResult<StatsResponse> {
		let docs = self.docs.get_or_refresh()?;
		let categories =
			docs.iter().map(|doc| doc.category.as_str()).collect::<AHashSet<_>>().len();

		Ok(StatsResponse {
			document_count: docs.len(),
			total_events: self.activity.load()?.len(),
			categories,
		})
	}
}
