use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read {path:?}.")]
	Read { path: PathBuf, source: std::io::Error },
	#[error("Failed to write {path:?}.")]
	Write { path: PathBuf, source: std::io::Error },
	#[error("Failed to parse front-matter in {path:?}.")]
	FrontMatter { path: PathBuf, source: serde_yaml::Error },
	#[error("Failed to serialize front-matter.")]
	SerializeFrontMatter { source: serde_yaml::Error },
	#[error("Slug {slug:?} escapes the vault root.")]
	InvalidSlug { slug: String },
	#[error("Failed to parse activity log at {path:?}.")]
	ActivityParse { path: PathBuf, source: serde_json::Error },
}
