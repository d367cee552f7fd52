use std::{
	collections::BTreeMap,
	sync::OnceLock,
};

use ahash::{AHashMap, AHashSet};
use regex::Regex;

use crate::{AlcoveService, ServiceResult};

fn wikilink_regex() -> &'static Regex {
	static REGEX: OnceLock<Regex> = OnceLock::new();

	REGEX.get_or_init(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("Wikilink pattern is valid."))
}

fn doc_link_regex() -> &'static Regex {
	static REGEX: OnceLock<Regex> = OnceLock::new();

	REGEX.get_or_init(|| {
		Regex::new(r"\[([^\]]*)\]\(/doc/([^)]+)\)").expect("Document link pattern is valid.")
	})
}

/// Lowercases and collapses every non-alphanumeric run into a single `-`,
/// so `[[Fortinet Rollout]]` can match a `fortinet-rollout` file name.
fn slugify(text: &str) -> String {
	let mut slug = String::with_capacity(text.len());

	for ch in text.chars() {
		if ch.is_alphanumeric() {
			slug.extend(ch.to_lowercase());
		} else if !slug.ends_with('-') {
			slug.push('-');
		}
	}

	slug.trim_matches('-').to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
	Tag,
	Reference,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GraphNode {
	pub id: String,
	pub title: String,
	pub category: String,
	pub tags: Vec<String>,
	/// Count of edges touching this node.
	pub connections: usize,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GraphEdge {
	pub source: String,
	pub target: String,
	#[serde(rename = "type")]
	pub kind: EdgeKind,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GraphResponse {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
}

impl AlcoveService {
	/// Builds the document graph: one node per document, tag edges between
	/// documents sharing a tag, and reference edges for wikilinks and
	/// `/doc/<slug>` markdown links found in bodies.
	pub fn graph(&self) -> ServiceResult<GraphResponse> {
		let docs = self.docs.get_or_refresh()?;
		// Tag index keyed by normalized tag; BTreeMap keeps edge emission
		// order independent of hash seeds.
		let mut by_tag: BTreeMap<String, Vec<&str>> = BTreeMap::new();

		for doc in docs.iter() {
			for tag in &doc.tags {
				let tag = tag.trim().to_lowercase();

				if tag.is_empty() {
					continue;
				}

				by_tag.entry(tag).or_default().push(&doc.slug);
			}
		}

		let mut edges = Vec::new();
		let mut seen: AHashSet<(String, String, EdgeKind)> = AHashSet::new();
		let mut push_edge = |source: &str, target: &str, kind: EdgeKind| {
			if source == target {
				return;
			}

			let key = if source < target {
				(source.to_string(), target.to_string(), kind)
			} else {
				(target.to_string(), source.to_string(), kind)
			};

			if seen.insert(key) {
				edges.push(GraphEdge {
					source: source.to_string(),
					target: target.to_string(),
					kind,
				});
			}
		};

		for (tag, slugs) in &by_tag {
			if slugs.len() > self.cfg.graph.tag_fanout_limit
				|| self.cfg.graph.skip_tags.iter().any(|skip| skip == tag)
			{
				continue;
			}

			for (i, source) in slugs.iter().enumerate() {
				for target in &slugs[i + 1..] {
					push_edge(source, target, EdgeKind::Tag);
				}
			}
		}

		// Link targets resolve against titles first, then bare file names;
		// insertion order makes the earliest matching document win.
		let mut link_targets: Vec<(String, &str)> = Vec::new();

		for doc in docs.iter() {
			link_targets.push((doc.title.trim().to_lowercase(), &doc.slug));
		}
		for doc in docs.iter() {
			let file_name = doc.slug.rsplit('/').next().unwrap_or(&doc.slug);

			link_targets.push((file_name.to_lowercase(), &doc.slug));
		}

		let resolve = |target: &str| {
			let target = target.trim().to_lowercase();
			let slugified = slugify(&target);

			for (key, slug) in &link_targets {
				if *key == target || *key == slugified {
					return Some(*slug);
				}
			}

			None
		};

		for doc in docs.iter() {
			for capture in wikilink_regex().captures_iter(&doc.body) {
				if let Some(target) = resolve(&capture[1]) {
					push_edge(&doc.slug, target, EdgeKind::Reference);
				}
			}
			for capture in doc_link_regex().captures_iter(&doc.body) {
				let slug = capture[2].trim_end_matches(".md");

				if docs.iter().any(|candidate| candidate.slug == slug) {
					push_edge(&doc.slug, slug, EdgeKind::Reference);
				}
			}
		}

		let mut connections: AHashMap<&str, usize> = AHashMap::new();

		for edge in &edges {
			*connections.entry(edge.source.as_str()).or_default() += 1;
			*connections.entry(edge.target.as_str()).or_default() += 1;
		}

		let nodes = docs
			.iter()
			.map(|doc| GraphNode {
				id: doc.slug.clone(),
				title: doc.title.clone(),
				category: doc.category.clone(),
				tags: doc.tags.clone(),
				connections: connections.get(doc.slug.as_str()).copied().unwrap_or(0),
			})
			.collect();

		Ok(GraphResponse { nodes, edges })
	}
}
