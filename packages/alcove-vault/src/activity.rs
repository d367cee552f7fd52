use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{Error, Result};

/// One entry of the JSON activity feed agents append to. `kind` and
/// `status` are open vocabularies; the listed values are conventions, not a
/// schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
	pub id: String,
	#[serde(with = "time::serde::rfc3339")]
	pub timestamp: OffsetDateTime,
	pub agent: String,
	#[serde(rename = "type")]
	pub kind: String,
	pub title: String,
	pub summary: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub output: Option<Vec<String>>,
	#[serde(default)]
	pub tags: Vec<String>,
	pub status: String,
}

/// Fields of a new entry; id and timestamp are assigned on append.
#[derive(Debug, Clone, Deserialize)]
pub struct NewActivity {
	pub agent: String,
	#[serde(rename = "type")]
	pub kind: String,
	pub title: String,
	pub summary: String,
	#[serde(default)]
	pub output: Option<Vec<String>>,
	#[serde(default)]
	pub tags: Vec<String>,
	pub status: String,
}

/// The `activity.json` store under the vault root. A missing file reads as
/// an empty log; the whole array is rewritten on append.
pub struct ActivityLog {
	path: PathBuf,
}

impl ActivityLog {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// All entries, newest first.
	pub fn load(&self) -> Result<Vec<ActivityEntry>> {
		let raw = match fs::read_to_string(&self.path) {
			Ok(raw) => raw,
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
			Err(err) => return Err(Error::Read { path: self.path.clone(), source: err }),
		};
		let mut entries: Vec<ActivityEntry> = serde_json::from_str(&raw)
			.map_err(|err| Error::ActivityParse { path: self.path.clone(), source: err })?;

		entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

		Ok(entries)
	}

	pub fn append(&self, new: NewActivity) -> Result<ActivityEntry> {
		let mut entries = self.load()?;
		let entry = ActivityEntry {
			id: format!("act-{}", Uuid::new_v4().simple()),
			timestamp: OffsetDateTime::now_utc(),
			agent: new.agent,
			kind: new.kind,
			title: new.title,
			summary: new.summary,
			output: new.output,
			tags: new.tags,
			status: new.status,
		};

		entries.push(entry.clone());

		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent)
				.map_err(|err| Error::Write { path: parent.to_path_buf(), source: err })?;
		}

		let payload = serde_json::to_string_pretty(&entries)
			.map_err(|err| Error::ActivityParse { path: self.path.clone(), source: err })?;

		fs::write(&self.path, payload)
			.map_err(|err| Error::Write { path: self.path.clone(), source: err })?;

		Ok(entry)
	}
}
