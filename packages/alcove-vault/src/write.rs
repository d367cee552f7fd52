use std::{
	fs,
	path::{Component, Path, PathBuf},
};

use crate::{
	Error, Result,
	frontmatter::{self, FrontMatter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
	Saved,
	/// The target did not exist and `create_new` was not set.
	MissingTarget,
}

/// Maps a slug to its file path, rejecting anything that could escape the
/// vault root (absolute paths, `..`, drive prefixes).
pub fn resolve_slug(root: &Path, slug: &str) -> Result<PathBuf> {
	let slug = slug.trim();

	if slug.is_empty() || slug.contains('\\') {
		return Err(Error::InvalidSlug { slug: slug.to_string() });
	}

	let relative = Path::new(slug);

	if relative.is_absolute()
		|| relative.components().any(|component| !matches!(component, Component::Normal(_)))
	{
		return Err(Error::InvalidSlug { slug: slug.to_string() });
	}

	Ok(root.join(format!("{slug}.md")))
}

/// Reads one document as raw front-matter plus body, or `None` when the
/// slug has no file.
pub fn read_document(root: &Path, slug: &str) -> Result<Option<(FrontMatter, String)>> {
	let path = resolve_slug(root, slug)?;
	let raw = match fs::read_to_string(&path) {
		Ok(raw) => raw,
		Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
		Err(err) => return Err(Error::Read { path, source: err }),
	};
	let (front_matter, body) =
		frontmatter::split(&raw).map_err(|err| Error::FrontMatter { path, source: err })?;

	Ok(Some((front_matter, body.to_string())))
}

/// Serializes front-matter plus body to `<root>/<slug>.md`, creating parent
/// directories. Unless `create_new` is set the target must already exist.
pub fn write_document(
	root: &Path,
	slug: &str,
	front_matter: &FrontMatter,
	body: &str,
	create_new: bool,
) -> Result<WriteOutcome> {
	let path = resolve_slug(root, slug)?;

	if !create_new && !path.is_file() {
		return Ok(WriteOutcome::MissingTarget);
	}

	let rendered = frontmatter::to_markdown(front_matter, body)
		.map_err(|err| Error::SerializeFrontMatter { source: err })?;

	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.map_err(|err| Error::Write { path: parent.to_path_buf(), source: err })?;
	}

	fs::write(&path, rendered).map_err(|err| Error::Write { path, source: err })?;

	Ok(WriteOutcome::Saved)
}
