use super::*;

#[test]
fn test_unseeded_layout() {
    let layout = OutputLayout::new(Path::new("renders"), Path::new("data"), None);

    assert_eq!(
        layout.graph_base(GraphMode::Uses),
        PathBuf::from("renders/uses-dependency-graph")
    );
    assert_eq!(layout.json_path(), PathBuf::from("data/project-dependency.json"));
    assert_eq!(layout.plain_text_path(), PathBuf::from("data/project-dependency.txt"));
}

#[test]
fn test_seeded_layout_uses_permalink_directory() {
    let layout = OutputLayout::new(Path::new("renders"), Path::new("data"), Some("billing"));

    assert_eq!(
        layout.graph_base(GraphMode::UsedBy),
        PathBuf::from("renders/billing/usedby-dependency-graph")
    );
    assert_eq!(layout.json_path(), PathBuf::from("data/billing/project-dependency.json"));
}

#[test]
fn test_permalink_cannot_escape_directory() {
    let layout = OutputLayout::new(Path::new("renders"), Path::new("data"), Some("../etc/passwd"));
    let base = layout.graph_base(GraphMode::Uses);

    assert!(base.starts_with("renders"));
    assert!(!base.components().any(|c| c == std::path::Component::ParentDir));
}
