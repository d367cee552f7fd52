pub mod activity;
pub mod graph;
pub mod palette;
pub mod related;
pub mod search;
pub mod time_serde;
pub mod vault_ops;
pub mod what_matters;

use std::time::Duration;

use alcove_config::Config;
use alcove_vault::{activity::ActivityLog, cache::DocCache};

pub use activity::{AddActivityRequest, AddActivityResponse};
pub use alcove_vault::activity::ActivityEntry;
pub use graph::{EdgeKind, GraphEdge, GraphNode, GraphResponse};
pub use palette::{PaletteDoc, PaletteResponse};
pub use related::{RelatedNote, RelatedRequest, RelatedResponse};
pub use search::{SearchItem, SearchRequest, SearchResponse};
pub use vault_ops::{
	ReadDocumentResponse, StatsResponse, WriteDocumentRequest, WriteDocumentResponse,
};
pub use what_matters::{RecentDoc, WhatMattersResponse};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug)]
pub enum ServiceError {
	InvalidRequest { message: String },
	NotFound { message: String },
	Storage { message: String },
}

/// Request-scoped orchestration over the vault: every operation is a full
/// scan-score-sort-slice pipeline; the only shared state is the TTL-bounded
/// document cache.
pub struct AlcoveService {
	pub cfg: Config,
	pub docs: DocCache,
	pub activity: ActivityLog,
}

impl std::fmt::Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::InvalidRequest { message } => write!(f, "{message}"),
			Self::NotFound { message } => write!(f, "{message}"),
			Self::Storage { message } => write!(f, "Storage error: {message}"),
		}
	}
}

impl std::error::Error for ServiceError {}

impl From<alcove_vault::Error> for ServiceError {
	fn from(err: alcove_vault::Error) -> Self {
		match err {
			alcove_vault::Error::InvalidSlug { slug } => {
				Self::InvalidRequest { message: format!("Invalid slug: {slug}") }
			},
			err => Self::Storage { message: err.to_string() },
		}
	}
}

impl AlcoveService {
	pub fn new(cfg: Config) -> Self {
		let docs =
			DocCache::new(&cfg.vault.root, Duration::from_secs(cfg.vault.cache_ttl_secs));
		let activity = ActivityLog::new(cfg.vault.root.join(&cfg.vault.activity_file));

		Self { cfg, docs, activity }
	}
}
