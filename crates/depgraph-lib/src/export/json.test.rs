use super::*;
use crate::catalogue::ProjectRecord;
use tempfile::TempDir;

#[test]
fn test_write_json_round_trips_views() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("data").join("project-dependency.json");

    let record = ProjectRecord {
        id: 7,
        permalink: "billing".to_string(),
        name: "Billing".to_string(),
        products: vec!["Support".to_string()],
        ..Default::default()
    };
    let views = vec![ProjectView::from_record(&record)];

    write_json(&path, &views).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains('\n'), "output should be pretty-printed");

    let parsed: Vec<ProjectView> = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed, views);
    assert_eq!(parsed[0].owner, "Unknown");
}

#[test]
fn test_write_json_empty_catalogue() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.json");

    write_json(&path, &[]).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
}
