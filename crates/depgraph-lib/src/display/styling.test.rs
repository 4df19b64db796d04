use super::*;

#[test]
fn test_plain_output_without_color() {
    let styling = StyleManager::new(false);

    assert_eq!(styling.format_success("done"), "✓ done");
    assert_eq!(styling.format_error("failed"), "✗ failed");
    assert_eq!(styling.format_warning("careful"), "! careful");
    assert_eq!(styling.format_info("note"), "· note");
    assert_eq!(styling.style_subtle("quiet"), "quiet");
}

#[test]
fn test_color_adds_ansi_codes() {
    let styling = StyleManager::new(true);
    let styled = styling.format_success("done");

    assert!(styled.contains("\u{1b}["));
    assert!(styled.ends_with("done"));
}
