use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub vault: Vault,
	#[serde(default)]
	pub search: Search,
	#[serde(default)]
	pub related: Related,
	#[serde(default)]
	pub graph: Graph,
	#[serde(default)]
	pub topics: Topics,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Vault {
	/// Root directory of the flat-file markdown store.
	pub root: PathBuf,
	/// Staleness window of the in-process document cache, in seconds. Zero
	/// disables caching and rescans on every request.
	#[serde(default = "default_cache_ttl_secs")]
	pub cache_ttl_secs: u64,
	#[serde(default = "default_activity_file")]
	pub activity_file: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Search {
	pub default_limit: usize,
	pub snippet_max_chars: usize,
	pub weights: SearchWeights,
}

/// Hand-tuned scoring constants. The defaults are load-bearing for ranking
/// compatibility; treat them as knobs, not as meaningful values.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchWeights {
	pub title: u32,
	pub title_exact_word: u32,
	pub tag: u32,
	pub tag_exact: u32,
	pub description: u32,
	pub body: u32,
	pub body_cap_per_term: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Related {
	pub max_results: usize,
	pub shared_tag: u32,
	pub title_overlap: u32,
	pub same_category: u32,
	pub content_overlap: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Graph {
	/// Tags connecting more than this many documents are skipped when
	/// building tag edges; they would produce a near-complete graph.
	pub tag_fanout_limit: usize,
	pub skip_tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Topics {
	pub window_hours: i64,
	pub max_topics: usize,
	pub min_mentions: u32,
}

impl Default for Search {
	fn default() -> Self {
		Self {
			default_limit: 20,
			snippet_max_chars: 200,
			weights: SearchWeights::default(),
		}
	}
}

impl Default for SearchWeights {
	fn default() -> Self {
		Self {
			title: 10,
			title_exact_word: 5,
			tag: 7,
			tag_exact: 3,
			description: 5,
			body: 3,
			body_cap_per_term: 15,
		}
	}
}

impl Default for Related {
	fn default() -> Self {
		Self { max_results: 5, shared_tag: 10, title_overlap: 5, same_category: 2, content_overlap: 1 }
	}
}

impl Default for Graph {
	fn default() -> Self {
		Self { tag_fanout_limit: 20, skip_tags: Vec::new() }
	}
}

impl Default for Topics {
	fn default() -> Self {
		Self { window_hours: 48, max_topics: 10, min_mentions: 2 }
	}
}

fn default_cache_ttl_secs() -> u64 {
	5
}

fn default_activity_file() -> String {
	"activity.json".to_string()
}
