// Tests for the deduplicated project graph

use super::*;

fn node(id: u64, permalink: &str) -> GraphNode {
    GraphNode::new(id, format!("{} [Core]", permalink))
}

#[test]
fn test_new_graph_is_empty() {
    let graph = ProjectGraph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_add_duplicate_node_is_idempotent() {
    let mut graph = ProjectGraph::new();
    let idx1 = graph.add_node(node(1, "api"));
    let idx2 = graph.add_node(node(1, "api"));

    assert_eq!(idx1, idx2);
    assert_eq!(graph.node_count(), 1);
    assert!(graph.contains(1));
    assert_eq!(graph.get_node(1).unwrap().label, "api [Core]");
}

#[test]
fn test_add_duplicate_edge_is_ignored() {
    let mut graph = ProjectGraph::new();
    graph.add_node(node(1, "api"));
    graph.add_node(node(2, "db"));

    assert!(graph.add_edge(1, 2));
    assert!(!graph.add_edge(1, 2));
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_edge(1, 2));
    assert!(!graph.has_edge(2, 1));
}

#[test]
fn test_edge_requires_both_endpoints() {
    let mut graph = ProjectGraph::new();
    graph.add_node(node(1, "api"));

    assert!(!graph.add_edge(1, 2));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_edges_are_exposed_as_label_pairs() {
    let mut graph = ProjectGraph::new();
    graph.add_node(node(1, "api"));
    graph.add_node(node(2, "db"));
    graph.add_edge(1, 2);

    let edges: Vec<(&str, &str)> = graph.edges().collect();
    assert_eq!(edges, vec![("api [Core]", "db [Core]")]);
    assert_eq!(graph.edge_ids().collect::<Vec<_>>(), vec![(1, 2)]);
}

#[test]
fn test_merge_is_set_union() {
    let mut left = ProjectGraph::new();
    left.add_node(node(1, "api"));
    left.add_node(node(2, "db"));
    left.add_edge(1, 2);

    let mut right = ProjectGraph::new();
    right.add_node(node(2, "db"));
    right.add_node(node(3, "cache"));
    right.add_node(node(1, "api"));
    right.add_edge(1, 2);
    right.add_edge(1, 3);

    left.merge(&right);

    assert_eq!(left.sorted_node_ids(), vec![1, 2, 3]);
    assert_eq!(left.sorted_edge_ids(), vec![(1, 2), (1, 3)]);
}
