use time::{Duration, OffsetDateTime};

use alcove_service::{AlcoveService, RelatedRequest, SearchRequest, ServiceError};
use alcove_testkit::TestVault;
use alcove_vault::{activity::ActivityEntry, frontmatter::FrontMatter};

fn front_matter(title: &str, tags: &[&str], description: Option<&str>) -> FrontMatter {
	FrontMatter {
		title: Some(title.to_string()),
		description: description.map(str::to_string),
		date: None,
		tags: tags.iter().map(|tag| tag.to_string()).collect(),
	}
}

fn entry(id: &str, title: &str, summary: &str, agent: &str, age: Duration) -> ActivityEntry {
	ActivityEntry {
		id: id.to_string(),
		timestamp: OffsetDateTime::now_utc() - age,
		agent: agent.to_string(),
		kind: "task".to_string(),
		title: title.to_string(),
		summary: summary.to_string(),
		output: None,
		tags: Vec::new(),
		status: "done".to_string(),
	}
}

fn service(vault: &TestVault) -> AlcoveService {
	AlcoveService::new(vault.config())
}

#[test]
fn search_scores_and_ranks_documents() {
	let vault = TestVault::new().expect("Must create vault.");

	vault
		.add_doc(
			"ops/security-fabric",
			&front_matter("Security Fabric", &["security"], None),
			"The security fabric links firewalls.",
		)
		.expect("Must write doc.");
	vault
		.add_doc(
			"ops/weekly-report",
			&front_matter("Weekly Report", &[], None),
			"fabric fabric fabric",
		)
		.expect("Must write doc.");
	vault
		.add_doc(
			"ops/notes",
			&front_matter("Network Notes", &[], None),
			"Nothing about that here.",
		)
		.expect("Must write doc.");

	let response = service(&vault)
		.search(SearchRequest { query: "fabric".to_string(), ..Default::default() })
		.expect("Must search.");

	assert_eq!(response.total, 3);
	assert_eq!(response.count, 2);
	assert_eq!(response.query.as_deref(), Some("fabric"));

	// Title substring + exact word + one body occurrence.
	assert_eq!(response.results[0].slug, "ops/security-fabric");
	assert_eq!(response.results[0].score, 18);
	assert_eq!(
		response.results[0].snippet,
		"The security **fabric** links firewalls."
	);

	// Three body occurrences only.
	assert_eq!(response.results[1].slug, "ops/weekly-report");
	assert_eq!(response.results[1].score, 9);
}

#[test]
fn blank_query_returns_empty_without_scanning() {
	let vault = TestVault::new().expect("Must create vault.");

	vault
		.add_doc("ops/notes", &front_matter("Notes", &[], None), "body")
		.expect("Must write doc.");

	let response = service(&vault)
		.search(SearchRequest { query: "   ".to_string(), ..Default::default() })
		.expect("Must search.");

	assert!(response.results.is_empty());
	assert_eq!(response.count, 0);
	assert_eq!(response.total, 1);
	assert_eq!(response.query, None);
}

#[test]
fn search_filters_by_category_and_tag() {
	let vault = TestVault::new().expect("Must create vault.");

	vault
		.add_doc("ops/fabric-plan", &front_matter("Fabric Plan", &["rollout"], None), "fabric")
		.expect("Must write doc.");
	vault
		.add_doc("hr/fabric-policy", &front_matter("Fabric Policy", &[], None), "fabric")
		.expect("Must write doc.");

	let svc = service(&vault);
	let by_category = svc
		.search(SearchRequest {
			query: "fabric".to_string(),
			category: Some("hr".to_string()),
			..Default::default()
		})
		.expect("Must search.");

	assert_eq!(by_category.count, 1);
	assert_eq!(by_category.results[0].slug, "hr/fabric-policy");

	let by_tag = svc
		.search(SearchRequest {
			query: "fabric".to_string(),
			tag: Some("rollout".to_string()),
			..Default::default()
		})
		.expect("Must search.");

	assert_eq!(by_tag.count, 1);
	assert_eq!(by_tag.results[0].slug, "ops/fabric-plan");
}

#[test]
fn search_limit_truncates_after_ranking() {
	let vault = TestVault::new().expect("Must create vault.");

	vault
		.add_doc("a/one", &front_matter("Fabric One", &[], None), "fabric")
		.expect("Must write doc.");
	vault
		.add_doc("a/two", &front_matter("Two", &[], None), "fabric")
		.expect("Must write doc.");

	let response = service(&vault)
		.search(SearchRequest {
			query: "fabric".to_string(),
			limit: Some(1),
			..Default::default()
		})
		.expect("Must search.");

	assert_eq!(response.count, 1);
	assert_eq!(response.total, 2);
	// The title match outranks the body-only match even with a limit of one.
	assert_eq!(response.results[0].slug, "a/one");
}

#[test]
fn related_scores_documents_against_a_source_document() {
	let vault = TestVault::new().expect("Must create vault.");

	vault
		.add_doc(
			"net/fortinet-rollout",
			&front_matter("Fortinet Rollout", &["fortinet"], None),
			"Deployment plan.",
		)
		.expect("Must write doc.");
	vault
		.add_doc(
			"net/fortinet-budget",
			&front_matter("Budget Review", &["fortinet"], None),
			"Numbers.",
		)
		.expect("Must write doc.");
	vault
		.add_doc("journal/gardening", &front_matter("Gardening", &[], None), "Tomatoes.")
		.expect("Must write doc.");

	// `.md` suffixes are accepted and stripped.
	let response = service(&vault)
		.related(RelatedRequest {
			path: Some("net/fortinet-rollout.md".to_string()),
			activity_id: None,
		})
		.expect("Must relate.");

	assert_eq!(response.related.len(), 1);
	// One shared tag plus the same-category bonus.
	assert_eq!(response.related[0].path, "net/fortinet-budget");
	assert_eq!(response.related[0].score, 12);
	assert_eq!(response.related[0].match_reason, "shared tag: fortinet");
}

#[test]
fn related_scores_documents_against_an_activity_entry() {
	let vault = TestVault::new().expect("Must create vault.");

	vault
		.add_doc(
			"net/fortinet-rollout",
			&front_matter("Fortinet Rollout", &["fortinet"], None),
			"Deployment plan.",
		)
		.expect("Must write doc.");
	vault
		.write_activity(&[entry(
			"act-1",
			"Fortinet Licensing",
			"Reviewing fortinet contract",
			"agent-a",
			Duration::hours(1),
		)])
		.expect("Must write activity.");

	let response = service(&vault)
		.related(RelatedRequest { path: None, activity_id: Some("act-1".to_string()) })
		.expect("Must relate.");

	assert_eq!(response.related.len(), 1);
	assert_eq!(response.related[0].path, "net/fortinet-rollout");
	// Title keyword overlap plus one content keyword in the title; no
	// category bonus for activity sources.
	assert_eq!(response.related[0].score, 6);
	assert_eq!(response.related[0].match_reason, "similar topic");
}

#[test]
fn md_suffix_is_stripped_once() {
	let vault = TestVault::new().expect("Must create vault.");

	// The file is `net/archive.md.md`, so the slug keeps one `.md`.
	vault
		.add_doc("net/archive.md", &front_matter("Archive", &[], None), "Old notes.")
		.expect("Must write doc.");

	let svc = service(&vault);
	let response = svc
		.related(RelatedRequest {
			path: Some("net/archive.md.md".to_string()),
			activity_id: None,
		})
		.expect("Slug with a .md of its own must resolve.");

	assert!(response.related.is_empty());

	let read = svc.read_document("net/archive.md.md").expect("Must read.");

	assert_eq!(read.slug, "net/archive.md");
	assert_eq!(read.content, "Old notes.");
}

#[test]
fn related_rejects_missing_and_unknown_sources() {
	let vault = TestVault::new().expect("Must create vault.");
	let svc = service(&vault);

	let err = svc.related(RelatedRequest::default()).expect_err("Must reject.");

	assert!(matches!(
		err,
		ServiceError::InvalidRequest { ref message }
			if message == "Missing path or activity_id parameter"
	));

	let err = svc
		.related(RelatedRequest { path: Some("nope".to_string()), activity_id: None })
		.expect_err("Must reject.");

	assert!(matches!(
		err,
		ServiceError::NotFound { ref message } if message == "Document not found"
	));

	let err = svc
		.related(RelatedRequest { path: None, activity_id: Some("act-0".to_string()) })
		.expect_err("Must reject.");

	assert!(matches!(
		err,
		ServiceError::NotFound { ref message } if message == "Activity not found"
	));
}

#[test]
fn graph_links_documents_by_tags_and_references() {
	let vault = TestVault::new().expect("Must create vault.");

	vault
		.add_doc(
			"net/alpha",
			&front_matter("Alpha", &["fortinet"], None),
			"See [[Beta]] for details.",
		)
		.expect("Must write doc.");
	vault
		.add_doc(
			"net/beta",
			&front_matter("Beta", &["fortinet"], None),
			"Back to [alpha](/doc/net/alpha) here.",
		)
		.expect("Must write doc.");

	let response = service(&vault).graph().expect("Must build graph.");

	assert_eq!(response.nodes.len(), 2);

	// One tag edge plus one reference edge; the reciprocal reference
	// collapses into it.
	let tags = response
		.edges
		.iter()
		.filter(|edge| edge.kind == alcove_service::EdgeKind::Tag)
		.count();
	let references = response
		.edges
		.iter()
		.filter(|edge| edge.kind == alcove_service::EdgeKind::Reference)
		.count();

	assert_eq!(tags, 1);
	assert_eq!(references, 1);

	for node in &response.nodes {
		assert_eq!(node.connections, 2);
	}
}

#[test]
fn graph_skips_configured_tags() {
	let vault = TestVault::new().expect("Must create vault.");

	vault
		.add_doc("net/alpha", &front_matter("Alpha", &["Fortinet"], None), "body")
		.expect("Must write doc.");
	vault
		.add_doc("net/beta", &front_matter("Beta", &["fortinet"], None), "body")
		.expect("Must write doc.");

	let mut cfg = vault.config();

	// Skip-tag matching happens on the normalized form.
	cfg.graph.skip_tags = vec!["fortinet".to_string()];

	let response = AlcoveService::new(cfg).graph().expect("Must build graph.");

	assert!(response.edges.is_empty());
}

#[test]
fn palette_matches_metadata_only() {
	let vault = TestVault::new().expect("Must create vault.");

	vault
		.add_doc(
			"net/fortinet-rollout",
			&front_matter("Fortinet Rollout", &["vendor"], Some("Firewall refresh")),
			"Body mentions budget.",
		)
		.expect("Must write doc.");
	vault
		.add_doc("fin/budget", &front_matter("Budget", &[], None), "fortinet everywhere")
		.expect("Must write doc.");

	let svc = service(&vault);
	let response = svc.palette("fortinet").expect("Must match.");

	// Body text never matches.
	assert_eq!(response.docs.len(), 1);
	assert_eq!(response.docs[0].slug, "net/fortinet-rollout");

	let response = svc.palette("f").expect("Must match.");

	assert!(response.docs.is_empty());
}

#[test]
fn what_matters_groups_recent_activity_into_topics() {
	let vault = TestVault::new().expect("Must create vault.");

	vault
		.add_doc("net/alpha", &front_matter("Alpha", &[], None), "body")
		.expect("Must write doc.");
	vault
		.write_activity(&[
			entry("act-1", "Fortinet rollout started", "", "agent-a", Duration::hours(1)),
			entry("act-2", "Fortinet licensing", "", "agent-b", Duration::hours(2)),
			entry("act-3", "quantum quantum", "", "agent-a", Duration::hours(100)),
		])
		.expect("Must write activity.");

	let response = service(&vault).what_matters().expect("Must digest.");

	// Only the in-window entries contribute; "quantum" is outside the 48 h
	// window despite its two mentions.
	assert_eq!(response.hot_topics.len(), 1);
	assert_eq!(response.hot_topics[0].topic, "fortinet");
	assert_eq!(response.hot_topics[0].count, 2);
	assert_eq!(response.hot_topics[0].sources.len(), 2);

	assert_eq!(response.recent_docs.len(), 1);
	assert_eq!(response.recent_docs[0].path, "net/alpha");
}

#[test]
fn write_then_read_round_trips_a_document() {
	let vault = TestVault::new().expect("Must create vault.");
	let svc = service(&vault);
	let written = svc
		.write_document(alcove_service::WriteDocumentRequest {
			slug: "net/new-doc".to_string(),
			content: "Fresh body.".to_string(),
			frontmatter: alcove_service::vault_ops::DocFrontmatter {
				title: Some("New Doc".to_string()),
				description: None,
				date: None,
				tags: Some(vec!["draft".to_string()]),
			},
			create_new: true,
		})
		.expect("Must write.");

	assert!(written.success);
	assert_eq!(written.message, "Document saved successfully");
	assert_eq!(written.slug, "net/new-doc");

	let read = svc.read_document("net/new-doc").expect("Must read.");

	assert_eq!(read.frontmatter.title.as_deref(), Some("New Doc"));
	assert_eq!(read.frontmatter.tags, vec!["draft"]);
	assert_eq!(read.content, "Fresh body.");
}

#[test]
fn write_requires_an_existing_target_by_default() {
	let vault = TestVault::new().expect("Must create vault.");
	let err = service(&vault)
		.write_document(alcove_service::WriteDocumentRequest {
			slug: "net/missing".to_string(),
			content: String::new(),
			frontmatter: Default::default(),
			create_new: false,
		})
		.expect_err("Must reject.");

	assert!(matches!(
		err,
		ServiceError::NotFound { ref message } if message == "File does not exist"
	));
}

#[test]
fn write_rejects_empty_and_escaping_slugs() {
	let vault = TestVault::new().expect("Must create vault.");
	let svc = service(&vault);
	let err = svc
		.write_document(alcove_service::WriteDocumentRequest {
			slug: "  ".to_string(),
			content: String::new(),
			frontmatter: Default::default(),
			create_new: true,
		})
		.expect_err("Must reject.");

	assert!(matches!(
		err,
		ServiceError::InvalidRequest { ref message } if message == "Slug is required"
	));

	let err = svc
		.write_document(alcove_service::WriteDocumentRequest {
			slug: "../outside".to_string(),
			content: String::new(),
			frontmatter: Default::default(),
			create_new: true,
		})
		.expect_err("Must reject.");

	assert!(matches!(err, ServiceError::InvalidRequest { .. }));
}

#[test]
fn write_invalidates_the_document_cache() {
	let vault = TestVault::new().expect("Must create vault.");
	let mut cfg = vault.config();

	cfg.vault.cache_ttl_secs = 60;

	let svc = AlcoveService::new(cfg);

	// Warm the cache on an empty vault.
	let empty = svc
		.search(SearchRequest { query: "fresh".to_string(), ..Default::default() })
		.expect("Must search.");

	assert_eq!(empty.count, 0);

	svc.write_document(alcove_service::WriteDocumentRequest {
		slug: "net/fresh".to_string(),
		content: "fresh content".to_string(),
		frontmatter: alcove_service::vault_ops::DocFrontmatter {
			title: Some("Fresh".to_string()),
			..Default::default()
		},
		create_new: true,
	})
	.expect("Must write.");

	let after = svc
		.search(SearchRequest { query: "fresh".to_string(), ..Default::default() })
		.expect("Must search.");

	assert_eq!(after.count, 1);
}

#[test]
fn stats_counts_documents_events_and_categories() {
	let vault = TestVault::new().expect("Must create vault.");

	vault
		.add_doc("net/alpha", &front_matter("Alpha", &[], None), "body")
		.expect("Must write doc.");
	vault
		.add_doc("net/beta", &front_matter("Beta", &[], None), "body")
		.expect("Must write doc.");
	vault
		.add_doc("hr/policy", &front_matter("Policy", &[], None), "body")
		.expect("Must write doc.");
	vault
		.write_activity(&[entry("act-1", "Task", "", "agent-a", Duration::hours(1))])
		.expect("Must write activity.");

	let stats = service(&vault).stats().expect("Must count.");

	assert_eq!(stats.document_count, 3);
	assert_eq!(stats.total_events, 1);
	assert_eq!(stats.categories, 2);
}

#[test]
fn activity_append_assigns_id_and_lists_newest_first() {
	let vault = TestVault::new().expect("Must create vault.");

	vault
		.write_activity(&[entry("act-old", "Old task", "", "agent-a", Duration::hours(5))])
		.expect("Must write activity.");

	let svc = service(&vault);
	let added = svc
		.add_activity(alcove_service::AddActivityRequest {
			agent: "agent-b".to_string(),
			kind: "note".to_string(),
			title: "New task".to_string(),
			summary: "Just appended".to_string(),
			output: None,
			tags: Vec::new(),
			status: "done".to_string(),
		})
		.expect("Must append.");

	assert!(added.entry.id.starts_with("act-"));

	let feed = svc.activity_feed().expect("Must list.");

	assert_eq!(feed.len(), 2);
	assert_eq!(feed[0].title, "New task");
	assert_eq!(feed[1].id, "act-old");
}
