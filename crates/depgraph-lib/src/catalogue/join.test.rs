// Tests for the catalogue join

use super::*;

// ============================================================================
// Test Utilities
// ============================================================================

fn project(id: u64, permalink: &str, uses: &[u64], used_by: &[u64]) -> ProjectRecord {
    ProjectRecord {
        id,
        permalink: permalink.to_string(),
        name: permalink.replace('-', " "),
        owner: Some(format!("team-{}", id)),
        dependent_project_dependencies_ids: uses.to_vec(),
        providing_project_dependencies_ids: used_by.to_vec(),
        ..ProjectRecord::default()
    }
}

fn link(id: u64, dependent: u64, providing: u64) -> DependencyLinkRecord {
    DependencyLinkRecord {
        id,
        providing_project_id: Some(providing),
        dependent_project_id: Some(dependent),
    }
}

/// api (1) uses db (2) via link 10 and cache (3) via link 11
fn small_catalogue() -> (Vec<ProjectRecord>, Vec<DependencyLinkRecord>) {
    let projects = vec![
        project(1, "api", &[10, 11], &[]),
        project(2, "db", &[], &[10]),
        project(3, "cache", &[], &[11]),
    ];
    let links = vec![link(10, 1, 2), link(11, 1, 3)];
    (projects, links)
}

fn ids(summaries: &[ProjectSummary]) -> Vec<u64> {
    summaries.iter().map(|s| s.id).collect()
}

// ============================================================================
// Relation resolution
// ============================================================================

#[test]
fn test_join_resolves_uses_and_used_by() {
    let (projects, links) = small_catalogue();
    let views = build_catalogue(&projects, &links, &ProjectFilter::default());

    assert_eq!(views.len(), 3);
    assert_eq!(ids(&views[0].uses), vec![2, 3]);
    assert!(views[0].used_by.is_empty());
    assert_eq!(ids(&views[1].used_by), vec![1]);
    assert_eq!(ids(&views[2].used_by), vec![1]);
}

#[test]
fn test_every_uses_entry_has_a_backing_link() {
    let (projects, links) = small_catalogue();
    let views = build_catalogue(&projects, &links, &ProjectFilter::default());

    for view in &views {
        for used in &view.uses {
            assert!(links.iter().any(|l| {
                l.dependent_project_id == Some(view.id) && l.providing_project_id == Some(used.id)
            }));
        }
        for dependent in &view.used_by {
            assert!(links.iter().any(|l| {
                l.providing_project_id == Some(view.id) && l.dependent_project_id == Some(dependent.id)
            }));
        }
    }
}

#[test]
fn test_summary_carries_metadata() {
    let (mut projects, links) = small_catalogue();
    projects[1].alias = Some("database".to_string());
    projects[1].products = vec!["Foundation".to_string()];

    let views = build_catalogue(&projects, &links, &ProjectFilter::default());
    let db = &views[0].uses[0];
    assert_eq!(db.permalink, "db");
    assert_eq!(db.alias.as_deref(), Some("database"));
    assert_eq!(db.owner, "team-2");
    assert_eq!(db.products, vec!["Foundation".to_string()]);
    assert_eq!(db.weighting, 0);
}

// ============================================================================
// Missing references
// ============================================================================

#[test]
fn test_unknown_link_id_is_skipped() {
    let (mut projects, links) = small_catalogue();
    projects[0].dependent_project_dependencies_ids.push(999);

    let views = build_catalogue(&projects, &links, &ProjectFilter::default());
    assert_eq!(ids(&views[0].uses), vec![2, 3]);
}

#[test]
fn test_link_to_unknown_project_is_skipped() {
    let (mut projects, mut links) = small_catalogue();
    links.push(link(12, 1, 404));
    projects[0].dependent_project_dependencies_ids.push(12);

    let views = build_catalogue(&projects, &links, &ProjectFilter::default());
    assert_eq!(ids(&views[0].uses), vec![2, 3]);
}

// ============================================================================
// Weighting and defaults
// ============================================================================

#[test]
fn test_link_without_endpoint_is_skipped() {
    let (projects, mut links) = small_catalogue();
    links[1].providing_project_id = None;

    let views = build_catalogue(&projects, &links, &ProjectFilter::default());
    assert_eq!(ids(&views[0].uses), vec![2]);
    assert_eq!(ids(&views[1].used_by), vec![1]);
    // The cache side still sees its consumer through the intact end
    assert_eq!(ids(&views[2].used_by), vec![1]);
}

#[test]
fn test_weighting_counts_raw_link_ids() {
    let (mut projects, links) = small_catalogue();
    // One dangling id and one filtered-out target still count
    projects[0].dependent_project_dependencies_ids.push(999);
    projects[2].products = vec!["Support".to_string()];

    let filter = ProjectFilter::new(Some("Foundation".to_string()), None);
    projects[0].products = vec!["Foundation".to_string()];
    projects[1].products = vec!["Foundation".to_string()];

    let views = build_catalogue(&projects, &links, &filter);
    let api = views.iter().find(|v| v.id == 1).unwrap();
    assert_eq!(api.weighting, 3);
    assert_eq!(ids(&api.uses), vec![2]);
}

#[test]
fn test_missing_owner_defaults_to_unknown() {
    let (mut projects, links) = small_catalogue();
    projects[1].owner = None;

    let views = build_catalogue(&projects, &links, &ProjectFilter::default());
    assert_eq!(views[1].owner, "Unknown");
    assert_eq!(views[0].uses[0].owner, "Unknown");
    assert_eq!(views[1].label(), "db [Unknown]");
}

#[test]
fn test_duplicate_link_ids_are_not_deduplicated() {
    let (mut projects, links) = small_catalogue();
    projects[0].dependent_project_dependencies_ids = vec![10, 10];

    let views = build_catalogue(&projects, &links, &ProjectFilter::default());
    assert_eq!(ids(&views[0].uses), vec![2, 2]);
}

// ============================================================================
// Filtering during the join
// ============================================================================

#[test]
fn test_filter_applies_to_relation_targets() {
    let (mut projects, links) = small_catalogue();
    projects[0].products = vec!["Foundation".to_string()];
    projects[1].products = vec!["Foundation".to_string()];
    projects[2].products = vec!["Support".to_string()];

    let filter = ProjectFilter::new(Some("Foundation".to_string()), None);
    let views = build_catalogue(&projects, &links, &filter);

    let view_ids: Vec<u64> = views.iter().map(|v| v.id).collect();
    assert_eq!(view_ids, vec![1, 2]);
    assert_eq!(ids(&views[0].uses), vec![2]);
}

#[test]
fn test_fallback_keeps_catalogue_but_nested_filter_stays_strict() {
    let (mut projects, links) = small_catalogue();
    for p in &mut projects {
        p.products = vec!["Support".to_string()];
    }

    // Nothing matches "Explore" at the top level, so every project is kept,
    // but no relation target passes the strict predicate.
    let filter = ProjectFilter::new(Some("Explore".to_string()), None);
    let views = build_catalogue(&projects, &links, &filter);

    assert_eq!(views.len(), 3);
    assert!(views.iter().all(|v| v.uses.is_empty() && v.used_by.is_empty()));
}

#[test]
fn test_empty_inputs_yield_empty_catalogue() {
    let views = build_catalogue(&[], &[], &ProjectFilter::default());
    assert!(views.is_empty());
}
