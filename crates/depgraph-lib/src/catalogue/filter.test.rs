// Tests for the product/category membership filter

use super::*;

fn project(id: u64, products: &[&str], category: Option<&str>) -> ProjectRecord {
    ProjectRecord {
        id,
        permalink: format!("project-{}", id),
        name: format!("Project {}", id),
        products: products.iter().map(|p| p.to_string()).collect(),
        category: category.map(str::to_string),
        ..ProjectRecord::default()
    }
}

fn filter(product: Option<&str>, category: Option<&str>) -> ProjectFilter {
    ProjectFilter::new(product.map(str::to_string), category.map(str::to_string))
}

// ============================================================================
// Strict predicate
// ============================================================================

#[test]
fn test_unset_filter_matches_everything() {
    let p = project(1, &["Support"], Some("Service"));
    assert!(matches(&p, &ProjectFilter::default()));
    assert!(ProjectFilter::default().is_unrestricted());
}

#[test]
fn test_wildcard_and_blank_filters_are_unrestricted() {
    let p = project(1, &["Support"], Some("Service"));
    assert!(matches(&p, &filter(Some("*"), Some("  "))));
    assert!(filter(Some("*"), Some("")).is_unrestricted());
    assert!(!filter(Some("Foundation"), None).is_unrestricted());
}

#[test]
fn test_product_containment_is_case_insensitive() {
    let p = project(1, &["Foundation"], None);
    assert!(matches(&p, &filter(Some("foundation"), None)));
    assert!(matches(&p, &filter(Some("Support,FOUNDATION"), None)));
    assert!(!matches(&p, &filter(Some("Support"), None)));
}

#[test]
fn test_product_match_is_containment_not_equality() {
    // "Found" is not a product name but the filter string contains it
    let p = project(1, &["Found"], None);
    assert!(matches(&p, &filter(Some("Foundation"), None)));

    // The reverse does not hold: the product must sit inside the filter
    let q = project(2, &["Foundation"], None);
    assert!(!matches(&q, &filter(Some("Found"), None)));
}

#[test]
fn test_any_product_is_enough() {
    let p = project(1, &["Guide", "Talk"], None);
    assert!(matches(&p, &filter(Some("talk"), None)));
}

#[test]
fn test_category_containment() {
    let p = project(1, &[], Some("Infrastructure"));
    assert!(matches(&p, &filter(None, Some("Infrastructure,Service"))));
    assert!(!matches(&p, &filter(None, Some("Service"))));
}

#[test]
fn test_both_axes_must_pass() {
    let p = project(1, &["Foundation"], Some("Library"));
    assert!(matches(&p, &filter(Some("Foundation"), Some("Library"))));
    assert!(!matches(&p, &filter(Some("Foundation"), Some("Service"))));
    assert!(!matches(&p, &filter(Some("Support"), Some("Library"))));
}

#[test]
fn test_uncategorized_project_passes_any_filter() {
    let p = project(1, &[], None);
    assert!(matches(&p, &filter(Some("Foundation"), Some("Service"))));
    assert!(matches(&p, &filter(Some("anything"), None)));
    assert!(matches(&p, &filter(None, Some("anything"))));
}

#[test]
fn test_empty_category_counts_as_uncategorized() {
    let p = project(1, &["Support"], Some(""));
    assert!(matches(&p, &filter(Some("Support"), Some("Service"))));
}

// ============================================================================
// Collection filtering with fallback
// ============================================================================

#[test]
fn test_filter_collection_returns_matching_subset() {
    let projects = vec![
        project(1, &["Foundation"], None),
        project(2, &["Support"], None),
        project(3, &["Foundation", "Talk"], None),
    ];

    let result = filter_collection(&projects, &filter(Some("Foundation"), None));
    let ids: Vec<u64> = result.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_filter_collection_falls_back_to_full_input() {
    let projects = vec![
        project(1, &["Foundation"], Some("Service")),
        project(2, &["Support"], Some("Library")),
    ];

    let outcome = filter_collection_with_outcome(&projects, &filter(Some("Explore"), None));
    assert!(outcome.fell_back);
    let ids: Vec<u64> = outcome.projects.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_filter_collection_without_fallback_reports_it() {
    let projects = vec![project(1, &["Foundation"], None)];
    let outcome = filter_collection_with_outcome(&projects, &filter(Some("Foundation"), None));
    assert!(!outcome.fell_back);
    assert_eq!(outcome.projects.len(), 1);
}

#[test]
fn test_unrestricted_filter_keeps_every_project() {
    let projects = vec![
        project(1, &["Foundation"], Some("Service")),
        project(2, &[], None),
    ];

    let outcome = filter_collection_with_outcome(&projects, &filter(Some("*"), None));
    assert!(!outcome.fell_back);
    let ids: Vec<u64> = outcome.projects.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_filter_collection_on_empty_input() {
    let projects: Vec<ProjectRecord> = Vec::new();
    let outcome = filter_collection_with_outcome(&projects, &filter(Some("Foundation"), None));
    assert!(outcome.projects.is_empty());
    assert!(!outcome.fell_back);
}

#[test]
fn test_strict_predicate_has_no_fallback() {
    let p = project(1, &["Support"], None);
    assert!(!matches(&p, &filter(Some("Foundation"), None)));
    // The same singleton through the collection filter falls back
    let singleton = vec![p];
    assert_eq!(filter_collection(&singleton, &filter(Some("Foundation"), None)).len(), 1);
}
