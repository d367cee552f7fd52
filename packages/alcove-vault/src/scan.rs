use std::{
	fs,
	path::{Path, PathBuf},
};

use time::OffsetDateTime;

use crate::{
	Error, Result,
	doc::{self, Document},
	frontmatter,
};

/// Walks the vault and loads every markdown document, sorted by path so a
/// fixed tree always yields the same document order.
///
/// A file that cannot be read or whose front-matter does not parse is
/// skipped with a warning; one bad file must not fail every search.
pub fn scan_vault(root: &Path) -> Result<Vec<Document>> {
	let mut files = Vec::new();

	collect_markdown(root, &mut files)?;
	files.sort();

	let mut docs = Vec::with_capacity(files.len());

	for path in files {
		match load_document(root, &path) {
			Ok(doc) => docs.push(doc),
			Err(err) => {
				tracing::warn!(path = %path.display(), error = %err, "Skipping vault document.");
			},
		}
	}

	Ok(docs)
}

fn collect_markdown(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
	if !dir.is_dir() {
		return Ok(());
	}

	let entries =
		fs::read_dir(dir).map_err(|err| Error::Read { path: dir.to_path_buf(), source: err })?;

	for entry in entries {
		let entry =
			entry.map_err(|err| Error::Read { path: dir.to_path_buf(), source: err })?;
		let path = entry.path();

		if path.is_dir() {
			collect_markdown(&path, files)?;
		} else if path.extension().is_some_and(|ext| ext == "md") {
			files.push(path);
		}
	}

	Ok(())
}

fn load_document(root: &Path, path: &Path) -> Result<Document> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::Read { path: path.to_path_buf(), source: err })?;
	let (front_matter, body) = frontmatter::split(&raw)
		.map_err(|err| Error::FrontMatter { path: path.to_path_buf(), source: err })?;
	let metadata = fs::metadata(path)
		.map_err(|err| Error::Read { path: path.to_path_buf(), source: err })?;
	let modified = metadata
		.modified()
		.map_err(|err| Error::Read { path: path.to_path_buf(), source: err })?;
	let rel_path = path.strip_prefix(root).unwrap_or(path);
	let slug = doc::slug_from_rel_path(rel_path);
	let title = front_matter.title.clone().unwrap_or_else(|| doc::title_from_slug(&slug));
	let category = doc::category_from_slug(&slug);

	Ok(Document {
		title,
		category,
		tags: front_matter.tags,
		description: front_matter.description,
		date: front_matter.date,
		body: body.to_string(),
		last_modified: OffsetDateTime::from(modified),
		slug,
	})
}
