use super::*;

#[test]
fn test_missing_program_is_unavailable() {
    let info = ProgramFinder::find_with_version("depgraph-no-such-program-4a1f", &["--version"]);
    assert_eq!(info.name, "depgraph-no-such-program-4a1f");
    assert!(!info.available);
    assert!(info.path.is_none());
    assert!(info.version.is_none());
}

#[test]
fn test_graphviz_detection_is_consistent() {
    let info = GraphvizCapabilities::detect();
    assert_eq!(info.name, "dot");
    // Either found with a path, or reported missing without one
    assert_eq!(info.available, info.path.is_some());
}

#[test]
fn test_write_with_parents_creates_directories() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("a").join("b").join("out.txt");

    write_with_parents(&path, b"hello").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
}
