//! Tests for the depgraph binary's command line surface

use assert_cmd::Command;
use depgraph_lib::test_support::chain_snapshot;
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary with a clean environment rooted in `temp`
fn depgraph(temp: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_depgraph"));
    cmd.current_dir(temp.path())
        .env_clear()
        .env("PATH", std::env::var("PATH").unwrap_or_default())
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_version_command() {
    let temp = TempDir::new().unwrap();
    depgraph(&temp)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!("depgraph ", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_no_command_prints_usage_hint() {
    let temp = TempDir::new().unwrap();
    depgraph(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("depgraph --help"));
}

#[test]
fn test_invalid_graph_type_is_rejected() {
    let temp = TempDir::new().unwrap();
    depgraph(&temp)
        .args(["graph", "--graph-type", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_missing_graph_type_is_rejected() {
    let temp = TempDir::new().unwrap();
    depgraph(&temp)
        .args(["graph", "--api-key", "key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Graph type not set"));
}

#[test]
fn test_missing_api_key_is_rejected() {
    let temp = TempDir::new().unwrap();
    depgraph(&temp)
        .args(["graph", "--graph-type", "uses"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key not set"));
}

#[test]
fn test_api_key_read_from_dotenv_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(".env"), "CEREBRO_API_KEY=from-dotenv\n").unwrap();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/projects.json")
        .match_query(mockito::Matcher::Any)
        .match_header("authorization", "Token from-dotenv")
        .with_status(200)
        .with_body(serde_json::to_string(&chain_snapshot()).unwrap())
        .create();

    depgraph(&temp)
        .args(["graph", "--graph-type", "uses", "--no-pdf", "--registry-url"])
        .arg(server.url())
        .assert()
        .success();

    mock.assert();
}

#[test]
fn test_graph_run_writes_dot_and_exports() {
    let temp = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/projects.json")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::to_string(&chain_snapshot()).unwrap())
        .create();

    depgraph(&temp)
        .env("CEREBRO_API_KEY", "key")
        .env("DEPGRAPH_REGISTRY_URL", server.url())
        .args([
            "graph",
            "--graph-type",
            "used-by",
            "--project-filter",
            "d",
            "--max-depth",
            "1",
            "--export-json",
            "--no-pdf",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("DOT written"))
        .stdout(predicate::str::contains("2 projects, 1 dependencies"));

    let dot = std::fs::read_to_string(temp.path().join("renders/d/usedby-dependency-graph.dot")).unwrap();
    assert!(dot.contains("p3 -> p4;"));
    assert!(temp.path().join("data/d/project-dependency.json").exists());
}

#[test]
fn test_unknown_seed_is_a_notice_not_an_error() {
    let temp = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/projects.json")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(serde_json::to_string(&chain_snapshot()).unwrap())
        .create();

    depgraph(&temp)
        .args(["graph", "--graph-type", "uses", "--api-key", "key", "--project-filter", "nope"])
        .args(["--registry-url", &server.url()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No project with permalink 'nope'"));
}
