// Tests for the bounded traversal

use super::*;

// ============================================================================
// Test Utilities
// ============================================================================

fn summary(id: u64, permalink: &str) -> ProjectSummary {
    ProjectSummary {
        id,
        permalink: permalink.to_string(),
        name: permalink.to_string(),
        alias: None,
        owner: "Core".to_string(),
        products: Vec::new(),
        weighting: 0,
    }
}

/// Build views from `(id, permalink, uses)` triples; `used_by` is derived
fn catalogue(rows: &[(u64, &str, &[u64])]) -> Vec<ProjectView> {
    let permalink_of = |id: u64| {
        rows.iter()
            .find(|(pid, _, _)| *pid == id)
            .map(|(_, p, _)| p.to_string())
            .unwrap_or_else(|| format!("missing-{}", id))
    };

    rows.iter()
        .map(|(id, permalink, uses)| ProjectView {
            id: *id,
            permalink: permalink.to_string(),
            name: permalink.to_string(),
            alias: None,
            owner: "Core".to_string(),
            products: Vec::new(),
            category: None,
            tier: None,
            description: None,
            weighting: uses.len(),
            uses: uses.iter().map(|u| summary(*u, &permalink_of(*u))).collect(),
            used_by: rows
                .iter()
                .filter(|(_, _, deps)| deps.contains(id))
                .map(|(other, p, _)| summary(*other, p))
                .collect(),
        })
        .collect()
}

fn seed<'a>(views: &'a [ProjectView], permalink: &str) -> Vec<&'a ProjectView> {
    select_seeds(views, Some(permalink))
}

/// A(1) uses B(2), C(3); B and C use D(4)
fn diamond() -> Vec<ProjectView> {
    catalogue(&[
        (1, "a", &[2, 3]),
        (2, "b", &[4]),
        (3, "c", &[4]),
        (4, "d", &[]),
    ])
}

/// p1 -> p2 -> ... -> pN
fn chain(n: u64) -> Vec<ProjectView> {
    let names: Vec<String> = (1..=n).map(|i| format!("p{}", i)).collect();
    let deps: Vec<Vec<u64>> = (1..=n)
        .map(|i| if i < n { vec![i + 1] } else { vec![] })
        .collect();
    let rows: Vec<(u64, &str, &[u64])> = (1..=n)
        .map(|i| {
            let idx = (i - 1) as usize;
            (i, names[idx].as_str(), deps[idx].as_slice())
        })
        .collect();
    catalogue(&rows)
}

// ============================================================================
// Example scenario and dedup
// ============================================================================

#[test]
fn test_diamond_example_scenario() {
    let views = diamond();
    let graph = traverse(&views, seed(&views, "a"), GraphMode::Uses, 2);

    assert_eq!(graph.sorted_node_ids(), vec![1, 2, 3, 4]);
    assert_eq!(graph.sorted_edge_ids(), vec![(1, 2), (1, 3), (2, 4), (3, 4)]);
}

#[test]
fn test_diamond_has_single_node_and_two_edges_into_shared_dependency() {
    let views = diamond();
    let graph = traverse(&views, seed(&views, "a"), GraphMode::Uses, 5);

    let into_d = graph.edge_ids().filter(|(_, to)| *to == 4).count();
    assert_eq!(into_d, 2);
    assert_eq!(graph.nodes().filter(|n| n.id == 4).count(), 1);
    assert_eq!(graph.node_count(), 4);
}

#[test]
fn test_node_labels_use_permalink_and_owner() {
    let views = diamond();
    let graph = traverse(&views, seed(&views, "a"), GraphMode::Uses, 1);

    assert_eq!(graph.get_node(1).unwrap().label, "a [Core]");
    let edges: Vec<(&str, &str)> = graph.edges().collect();
    assert!(edges.contains(&("a [Core]", "b [Core]")));
}

// ============================================================================
// Depth bound
// ============================================================================

#[test]
fn test_chain_depth_bound() {
    let n = 6;
    let views = chain(n);

    for k in 0..9usize {
        let graph = traverse(&views, seed(&views, "p1"), GraphMode::Uses, k);
        assert_eq!(graph.node_count(), (k + 1).min(n as usize), "max_depth = {}", k);
        assert_eq!(graph.edge_count(), k.min(n as usize - 1), "max_depth = {}", k);
    }
}

#[test]
fn test_depth_zero_draws_only_seeds() {
    let views = diamond();
    let graph = traverse(&views, seed(&views, "a"), GraphMode::Uses, 0);

    assert_eq!(graph.sorted_node_ids(), vec![1]);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_default_depth_constant() {
    assert_eq!(DEFAULT_MAX_DEPTH, 2);
}

// ============================================================================
// Edge direction
// ============================================================================

#[test]
fn test_uses_mode_points_from_consumer_to_dependency() {
    let views = catalogue(&[(1, "a", &[2]), (2, "b", &[])]);
    let graph = traverse(&views, seed(&views, "a"), GraphMode::Uses, 2);

    assert_eq!(graph.sorted_edge_ids(), vec![(1, 2)]);
}

#[test]
fn test_used_by_mode_keeps_depends_on_direction() {
    let views = catalogue(&[(1, "a", &[2]), (2, "b", &[])]);
    let graph = traverse(&views, seed(&views, "b"), GraphMode::UsedBy, 2);

    // b is used by a, the edge still reads "a depends on b"
    assert_eq!(graph.sorted_edge_ids(), vec![(1, 2)]);
    assert!(!graph.has_edge(2, 1));
    assert!(!graph.has_edge(2, 2));
}

#[test]
fn test_used_by_mode_walks_used_by_not_uses() {
    let views = diamond();
    let graph = traverse(&views, seed(&views, "b"), GraphMode::UsedBy, 3);

    // b is only used by a; d (which b uses) must not appear
    assert_eq!(graph.sorted_node_ids(), vec![1, 2]);
    assert_eq!(graph.sorted_edge_ids(), vec![(1, 2)]);
}

#[test]
fn test_used_by_mode_from_shared_dependency() {
    let views = diamond();
    let graph = traverse(&views, seed(&views, "d"), GraphMode::UsedBy, 2);

    assert_eq!(graph.sorted_node_ids(), vec![1, 2, 3, 4]);
    assert_eq!(graph.sorted_edge_ids(), vec![(1, 2), (1, 3), (2, 4), (3, 4)]);
}

// ============================================================================
// Idempotence, cycles and degenerate input
// ============================================================================

#[test]
fn test_result_independent_of_catalogue_order() {
    let views = diamond();
    let mut reversed = diamond();
    reversed.reverse();

    let first = traverse(&views, views.iter(), GraphMode::Uses, 3);
    let second = traverse(&reversed, reversed.iter(), GraphMode::Uses, 3);
    let again = traverse(&views, views.iter(), GraphMode::Uses, 3);

    assert_eq!(first.sorted_node_ids(), second.sorted_node_ids());
    assert_eq!(first.sorted_edge_ids(), second.sorted_edge_ids());
    assert_eq!(first.sorted_edge_ids(), again.sorted_edge_ids());
}

#[test]
fn test_cycle_is_bounded_and_deduplicated() {
    let views = catalogue(&[(1, "a", &[2]), (2, "b", &[3]), (3, "c", &[1])]);
    let graph = traverse(&views, seed(&views, "a"), GraphMode::Uses, 50);

    assert_eq!(graph.sorted_node_ids(), vec![1, 2, 3]);
    assert_eq!(graph.sorted_edge_ids(), vec![(1, 2), (2, 3), (3, 1)]);
}

#[test]
fn test_cycle_respects_depth() {
    let views = catalogue(&[(1, "a", &[2]), (2, "b", &[3]), (3, "c", &[1])]);
    let graph = traverse(&views, seed(&views, "a"), GraphMode::Uses, 2);

    // c -> a is three hops away from the seed
    assert_eq!(graph.sorted_edge_ids(), vec![(1, 2), (2, 3)]);
}

#[test]
fn test_node_reached_shallow_later_is_still_expanded() {
    // e is reached at depth 2 via a -> b -> e and at depth 1 via a -> e;
    // the shallow path lets e's own dependency f appear at depth 2.
    let views = catalogue(&[
        (1, "a", &[2, 5]),
        (2, "b", &[5]),
        (5, "e", &[6]),
        (6, "f", &[]),
    ]);
    let graph = traverse(&views, seed(&views, "a"), GraphMode::Uses, 2);

    assert!(graph.has_edge(5, 6));
    assert_eq!(graph.sorted_node_ids(), vec![1, 2, 5, 6]);
}

#[test]
fn test_unknown_targets_are_dropped() {
    let mut views = catalogue(&[(1, "a", &[2]), (2, "b", &[])]);
    views[0].uses.push(summary(99, "ghost"));

    let graph = traverse(&views, seed(&views, "a"), GraphMode::Uses, 2);
    assert_eq!(graph.sorted_node_ids(), vec![1, 2]);
}

#[test]
fn test_empty_seeds_yield_empty_graph() {
    let views = diamond();
    let graph = traverse(&views, Vec::<&ProjectView>::new(), GraphMode::Uses, 2);
    assert!(graph.is_empty());
}

#[test]
fn test_empty_catalogue_yields_empty_graph() {
    let views = diamond();
    let graph = traverse(&[], views.iter(), GraphMode::Uses, 2);
    assert!(graph.is_empty());
}

// ============================================================================
// Seeds and independent traversals
// ============================================================================

#[test]
fn test_select_seeds_by_permalink() {
    let views = diamond();
    assert_eq!(select_seeds(&views, Some("c")).len(), 1);
    assert_eq!(select_seeds(&views, None).len(), 4);
    assert!(select_seeds(&views, Some("nope")).is_empty());
}

#[test]
fn test_parallel_traversals_merge_to_same_result() {
    let views = diamond();
    let combined = traverse(&views, views.iter(), GraphMode::Uses, 2);

    let mut merged = ProjectGraph::new();
    for view in &views {
        let partial = traverse(&views, std::iter::once(view), GraphMode::Uses, 2);
        merged.merge(&partial);
    }

    assert_eq!(merged.sorted_node_ids(), combined.sorted_node_ids());
    assert_eq!(merged.sorted_edge_ids(), combined.sorted_edge_ids());
}

#[test]
fn test_context_accumulates_across_runs() {
    let views = diamond();
    let mut context = TraversalContext::new(&views, GraphMode::Uses, 1);
    context.run(seed(&views, "b"));
    context.run(seed(&views, "c"));

    let graph = context.into_graph();
    assert_eq!(graph.sorted_edge_ids(), vec![(2, 4), (3, 4)]);
    assert_eq!(graph.node_count(), 3);
}
