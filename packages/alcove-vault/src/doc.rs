use std::path::Path;

use time::OffsetDateTime;

/// A vault document with its front-matter resolved and its body split off.
/// Rebuilt from disk on every cold cache miss; never persisted elsewhere.
#[derive(Debug, Clone)]
pub struct Document {
	/// Path relative to the vault root, `/`-separated, without the `.md`
	/// extension.
	pub slug: String,
	pub title: String,
	/// First path component of the slug, or `root` for top-level files.
	pub category: String,
	pub tags: Vec<String>,
	pub description: Option<String>,
	pub date: Option<String>,
	pub body: String,
	pub last_modified: OffsetDateTime,
}

pub fn slug_from_rel_path(rel_path: &Path) -> String {
	let mut parts = Vec::new();

	for component in rel_path.components() {
		parts.push(component.as_os_str().to_string_lossy().into_owned());
	}
	if let Some(last) = parts.last_mut()
		&& let Some(stem) = last.strip_suffix(".md")
	{
		*last = stem.to_string();
	}

	parts.join("/")
}

pub fn category_from_slug(slug: &str) -> String {
	match slug.split_once('/') {
		Some((category, _)) => category.to_string(),
		None => "root".to_string(),
	}
}

/// Fallback title for documents without a front-matter `title`: the file
/// stem with dashes spaced out.
pub fn title_from_slug(slug: &str) -> String {
	let stem = slug.rsplit('/').next().unwrap_or(slug);

	stem.replace('-', " ")
}
