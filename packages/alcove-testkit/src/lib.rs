mod error;

pub use error::{Error, Result};

use std::{fs, path::Path};

use tempfile::TempDir;

use alcove_config::{Config, Graph, Related, Search, Service, Topics, Vault};
use alcove_vault::{activity::ActivityEntry, frontmatter::FrontMatter};

/// A throwaway on-disk vault. Dropping it removes the directory, so keep the
/// fixture alive for the whole test.
pub struct TestVault {
	dir: TempDir,
}

impl TestVault {
	pub fn new() -> Result<Self> {
		Ok(Self { dir: TempDir::new()? })
	}

	pub fn root(&self) -> &Path {
		self.dir.path()
	}

	/// Writes `<root>/<slug>.md` with a serialized front-matter block,
	/// creating intermediate directories.
	pub fn add_doc(&self, slug: &str, front_matter: &FrontMatter, body: &str) -> Result<()> {
		let path = self.dir.path().join(format!("{slug}.md"));

		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent)?;
		}

		let yaml = serde_yaml::to_string(front_matter)?;

		fs::write(path, format!("---\n{yaml}---\n\n{body}"))?;

		Ok(())
	}

	pub fn write_activity(&self, entries: &[ActivityEntry]) -> Result<()> {
		let payload = serde_json::to_string_pretty(entries)?;

		fs::write(self.dir.path().join("activity.json"), payload)?;

		Ok(())
	}

	/// A config rooted at this vault. The cache TTL is zero so every request
	/// sees the files as they are on disk, and the bind address picks a free
	/// port.
	pub fn config(&self) -> Config {
		Config {
			service: Service {
				http_bind: "127.0.0.1:0".to_string(),
				log_level: "info".to_string(),
			},
			vault: Vault {
				root: self.dir.path().to_path_buf(),
				cache_ttl_secs: 0,
				activity_file: "activity.json".to_string(),
			},
			search: Search::default(),
			related: Related::default(),
			graph: Graph::default(),
			topics: Topics::default(),
		}
	}
}
