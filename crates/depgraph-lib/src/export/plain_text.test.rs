use super::*;
use crate::catalogue::ProjectRecord;
use tempfile::TempDir;

fn record(id: u64, name: &str, owner: Option<&str>, products: &[&str]) -> ProjectRecord {
    ProjectRecord {
        id,
        permalink: name.to_lowercase(),
        name: name.to_string(),
        owner: owner.map(str::to_string),
        products: products.iter().map(|p| p.to_string()).collect(),
        ..Default::default()
    }
}

fn api_view() -> ProjectView {
    let mut view = ProjectView::from_record(&record(1, "public_api-gateway", Some("Platform"), &["Foundation", "Support"]));
    view.uses
        .push(ProjectSummary::from(&record(2, "user--db", None, &[])));
    view.used_by
        .push(ProjectSummary::from(&record(3, "web_client", Some("Frontend"), &["Chat"])));
    view
}

// ============================================================================
// Helpers
// ============================================================================

#[test]
fn test_display_name_normalizes_separators() {
    assert_eq!(display_name("public_api-gateway"), "public api gateway");
    assert_eq!(display_name("  user--db  "), "user db");
}

#[test]
fn test_display_products() {
    assert_eq!(display_products(&[]), "Unknown");
    assert_eq!(
        display_products(&["A".to_string(), "B".to_string()]),
        "A,B"
    );
}

#[test]
fn test_sanitize_description() {
    let raw = "<p>Handles&nbsp;billing &amp; invoices.</p>\n See https://wiki.example/billing   for more";
    assert_eq!(
        sanitize_description(raw),
        "Handles billing & invoices. See [link removed] for more"
    );
}

#[test]
fn test_sanitize_description_strips_entity_encoded_markup() {
    assert_eq!(
        sanitize_description("&lt;script&gt;alert(1)&lt;/script&gt; and &lt;b&gt;bold&lt;/b&gt;"),
        "alert(1) and bold"
    );
}

#[test]
fn test_sanitize_description_www_links() {
    assert_eq!(sanitize_description("docs at www.example.com"), "docs at [link removed]");
}

// ============================================================================
// Sentences
// ============================================================================

#[test]
fn test_sentences_cover_every_relation() {
    let writer = PlainTextWriter::new();
    let lines = writer.sentences(&api_view()).unwrap();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        r#"The project "public api gateway" comes under the following product(s): "Foundation,Support" and is owned by the "Platform" team."#
    );
    assert_eq!(
        lines[1],
        r#"The project "public api gateway" depends on "user db". "user db" comes under the following product(s): "Unknown" and is owned by the "Unknown" team."#
    );
    assert_eq!(
        lines[2],
        r#"The project "public api gateway" is dependent on by "web client". "web client" comes under the following product(s): "Chat" and is owned by the "Frontend" team."#
    );
}

#[test]
fn test_description_sentence_follows_ownership() {
    let mut view = api_view();
    view.description = Some("Routes <b>all</b> traffic".to_string());

    let lines = PlainTextWriter::new().sentences(&view).unwrap();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[1],
        r#"The project "public api gateway" is described as: "Routes all traffic"."#
    );
}

#[test]
fn test_blank_description_is_skipped() {
    let mut view = api_view();
    view.description = Some("  <br/>  ".to_string());

    let lines = PlainTextWriter::new().sentences(&view).unwrap();
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_quotes_are_not_html_escaped() {
    let view = ProjectView::from_record(&record(9, "ops", Some("R&D"), &[]));
    let lines = PlainTextWriter::new().sentences(&view).unwrap();
    assert!(lines[0].contains(r#""R&D" team"#));
}

#[test]
fn test_write_creates_file_with_one_line_per_sentence() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("project-dependency.txt");

    PlainTextWriter::new()
        .write(&path, &[api_view()])
        .unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 3);
    assert!(contents.ends_with(".\n"));
}
