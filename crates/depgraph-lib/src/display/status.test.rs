use super::*;

#[test]
fn test_join_with_and_without_details() {
    assert_eq!(join("Graph rendered", ""), "Graph rendered");
    assert_eq!(join("Graph rendered", "out.pdf"), "Graph rendered: out.pdf");
}

#[test]
fn test_status_message_formatting() {
    let styling = StyleManager::new(false);
    let status = StatusDisplay::new(&styling);

    // Verify no panics
    status.success("graph", "written");
    status.error("registry", "unreachable");
    status.warning("no projects matched");
    status.info("using default configuration");
    status.message("Plain message");
    status.subtle("Secondary info");
}
