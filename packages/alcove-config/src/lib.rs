mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Graph, Related, Search, SearchWeights, Service, Topics, Vault};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.vault.root.as_os_str().is_empty() {
		return Err(Error::Validation { message: "vault.root must be non-empty.".to_string() });
	}
	if cfg.vault.activity_file.trim().is_empty() {
		return Err(Error::Validation {
			message: "vault.activity_file must be non-empty.".to_string(),
		});
	}
	if cfg.search.default_limit == 0 {
		return Err(Error::Validation {
			message: "search.default_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.search.snippet_max_chars == 0 {
		return Err(Error::Validation {
			message: "search.snippet_max_chars must be greater than zero.".to_string(),
		});
	}
	if cfg.related.max_results == 0 {
		return Err(Error::Validation {
			message: "related.max_results must be greater than zero.".to_string(),
		});
	}
	if cfg.graph.tag_fanout_limit == 0 {
		return Err(Error::Validation {
			message: "graph.tag_fanout_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.topics.window_hours <= 0 {
		return Err(Error::Validation {
			message: "topics.window_hours must be greater than zero.".to_string(),
		});
	}
	if cfg.topics.max_topics == 0 {
		return Err(Error::Validation {
			message: "topics.max_topics must be greater than zero.".to_string(),
		});
	}
	if cfg.topics.min_mentions == 0 {
		return Err(Error::Validation {
			message: "topics.min_mentions must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.graph.skip_tags = cfg
		.graph
		.skip_tags
		.iter()
		.map(|tag| tag.trim().to_lowercase())
		.filter(|tag| !tag.is_empty())
		.collect();
}
