use std::{
	path::{Path, PathBuf},
	sync::{Arc, Mutex},
	time::{Duration, Instant},
};

use crate::{Result, doc::Document, scan};

/// The in-process document cache: the full vault list, replaced wholesale
/// when older than the TTL. The TTL is an explicit constructor parameter so
/// the staleness window is testable rather than ambient state.
pub struct DocCache {
	root: PathBuf,
	ttl: Duration,
	state: Mutex<Option<CacheState>>,
}

struct CacheState {
	refreshed_at: Instant,
	docs: Arc<Vec<Document>>,
}

impl DocCache {
	pub fn new(root: impl Into<PathBuf>, ttl: Duration) -> Self {
		Self { root: root.into(), ttl, state: Mutex::new(None) }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// The current document list, rescanned from disk when the cached copy
	/// has expired. A zero TTL rescans on every call.
	pub fn get_or_refresh(&self) -> Result<Arc<Vec<Document>>> {
		let mut state = self.state.lock().unwrap_or_else(|err| err.into_inner());

		if let Some(cached) = state.as_ref()
			&& cached.refreshed_at.elapsed() < self.ttl
		{
			return Ok(cached.docs.clone());
		}

		let docs = Arc::new(scan::scan_vault(&self.root)?);

		*state = Some(CacheState { refreshed_at: Instant::now(), docs: docs.clone() });

		Ok(docs)
	}

	/// Drops the cached list; the next read rescans. Called after writes so
	/// a write-then-read within the TTL window observes its own write.
	pub fn invalidate(&self) {
		let mut state = self.state.lock().unwrap_or_else(|err| err.into_inner());

		*state = None;
	}
}
