use super::*;
use crate::catalogue::GraphNode;
use tempfile::TempDir;

fn sample_graph() -> ProjectGraph {
    let mut graph = ProjectGraph::new();
    graph.add_node(GraphNode::new(1, "api [Platform]".to_string()));
    graph.add_node(GraphNode::new(2, "db [Storage]".to_string()));
    graph.add_edge(1, 2);
    graph
}

#[test]
fn test_render_without_pdf_writes_dot_only() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("renders").join("api").join("uses-dependency-graph");

    let renderer = GraphRenderer::new(RenderOptions { pdf: false });

    let rendered = renderer.render(&sample_graph(), &base).unwrap();
    assert_eq!(rendered.dot_path, base.with_extension("dot"));
    assert!(rendered.pdf_path.is_none());

    let contents = std::fs::read_to_string(&rendered.dot_path).unwrap();
    assert!(contents.contains("p1 -> p2;"));
}

#[test]
fn test_render_with_pdf_matches_graphviz_availability() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("usedby-dependency-graph");

    let renderer = GraphRenderer::new(RenderOptions::default());
    let rendered = renderer.render(&sample_graph(), &base).unwrap();

    assert!(rendered.dot_path.exists());
    let graphviz_available = crate::platform::GraphvizCapabilities::detect().available;
    match rendered.pdf_path {
        Some(pdf) => {
            assert!(graphviz_available);
            assert!(pdf.exists());
        }
        None => assert!(!graphviz_available),
    }
}

#[test]
fn test_write_failure_names_the_path() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    std::fs::write(&blocker, "file, not a directory").unwrap();

    let err = write_file(&blocker.join("graph.dot"), b"digraph {}").unwrap_err();
    assert!(matches!(err, RenderError::WriteFailed { .. }));
}
