use alcove_domain::topics::{self, HotTopic, TopicInput};
use time::{Duration, OffsetDateTime};

use crate::{AlcoveService, ServiceResult};

const MAX_RECENT_DOCS: usize = 5;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RecentDoc {
	pub title: String,
	pub path: String,
	#[serde(with = "crate::time_serde")]
	pub modified: OffsetDateTime,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatMattersResponse {
	pub hot_topics: Vec<HotTopic>,
	pub recent_docs: Vec<RecentDoc>,
}

impl AlcoveService {
	/// Digest of the vault's current focus: topics mentioned repeatedly in
	/// recent activity, plus the most recently modified documents.
	pub fn what_matters(&self) -> ServiceResult<WhatMattersResponse> {
		let cutoff = OffsetDateTime::now_utc() - Duration::hours(self.cfg.topics.window_hours);
		let inputs = self
			.activity
			.load()?
			.into_iter()
			.filter(|entry| entry.timestamp >= cutoff)
			.map(|entry| TopicInput {
				text: format!("{} {}", entry.title, entry.summary),
				source: entry.agent,
			})
			.collect::<Vec<_>>();
		let hot_topics = topics::hot_topics(&inputs, &self.cfg.topics);
		let docs = self.docs.get_or_refresh()?;
		let mut recent = docs.iter().collect::<Vec<_>>();

		recent.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));

		let recent_docs = recent
			.into_iter()
			.take(MAX_RECENT_DOCS)
			.map(|doc| RecentDoc {
				title: doc.title.clone(),
				path: doc.slug.clone(),
				modified: doc.last_modified,
			})
			.collect();

		Ok(WhatMattersResponse { hot_topics, recent_docs })
	}
}
