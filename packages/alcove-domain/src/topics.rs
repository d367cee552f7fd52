use std::collections::HashMap;

use alcove_config::Topics;

use crate::keywords;

/// Keywords per entry are capped to keep topic extraction linear in the
/// number of entries rather than their length.
const MAX_KEYWORDS_PER_ENTRY: usize = 50;

#[derive(Debug, Clone)]
pub struct TopicInput {
	pub text: String,
	pub source: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HotTopic {
	pub topic: String,
	pub count: u32,
	pub sources: Vec<String>,
}

/// Groups keyword mentions across activity entries into ranked topics.
///
/// Counts are accumulated in first-seen order so that equal counts keep a
/// stable, input-derived ordering; topics below `min_mentions` are dropped
/// after the top `max_topics` are taken.
pub fn hot_topics(inputs: &[TopicInput], cfg: &Topics) -> Vec<HotTopic> {
	let mut order = Vec::new();
	let mut grouped: HashMap<String, (u32, Vec<String>)> = HashMap::new();

	for input in inputs {
		for keyword in keywords::keyword_run(&input.text, MAX_KEYWORDS_PER_ENTRY) {
			let entry = grouped.entry(keyword.clone()).or_insert_with(|| {
				order.push(keyword);

				(0, Vec::new())
			});

			entry.0 += 1;

			if !entry.1.iter().any(|source| source == &input.source) {
				entry.1.push(input.source.clone());
			}
		}
	}

	let mut topics = order
		.into_iter()
		.filter_map(|topic| {
			grouped.remove(&topic).map(|(count, sources)| HotTopic { topic, count, sources })
		})
		.collect::<Vec<_>>();

	topics.sort_by(|a, b| b.count.cmp(&a.count));
	topics.truncate(cfg.max_topics);
	topics.retain(|topic| topic.count >= cfg.min_mentions);

	topics
}
