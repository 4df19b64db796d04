use super::*;
use crate::catalogue::GraphNode;

fn two_node_graph() -> ProjectGraph {
    let mut graph = ProjectGraph::new();
    graph.add_node(GraphNode::new(1, "api [Platform]".to_string()));
    graph.add_node(GraphNode::new(2, "db [Unknown]".to_string()));
    graph.add_edge(1, 2);
    graph
}

#[test]
fn test_escape_label() {
    assert_eq!(escape_label(r#"say "hi""#), r#"say \"hi\""#);
    assert_eq!(escape_label("a\\b"), "a\\\\b");
    assert_eq!(escape_label("line\nbreak"), "line\\nbreak");
}

#[test]
fn test_node_id_is_stable() {
    assert_eq!(node_id(42), "p42");
}

#[test]
fn test_render_dot_contains_nodes_and_edges() {
    let dot = render_dot(&two_node_graph());

    assert!(dot.starts_with("strict digraph \"Component Dependency Graph\" {"));
    assert!(dot.contains("rankdir=\"LR\";"));
    assert!(dot.contains("p1[label=\"api [Platform]\"];"));
    assert!(dot.contains("p2[label=\"db [Unknown]\"];"));
    assert!(dot.contains("p1 -> p2;"));
    assert!(dot.trim_end().ends_with('}'));
}

#[test]
fn test_render_dot_styles_nodes() {
    let dot = render_dot(&two_node_graph());
    assert!(dot.contains(
        "node [shape=\"rectangle\", fontname=\"Arial\", fontsize=\"11\", style=\"filled\", color=\"lightblue\"];"
    ));
    assert!(dot.contains("edge [arrowhead=\"normal\", arrowsize=\"0.5\"];"));
}

#[test]
fn test_render_empty_graph() {
    let dot = render_dot(&ProjectGraph::new());
    assert!(!dot.contains("->"));
    assert!(dot.ends_with("}\n"));
}
