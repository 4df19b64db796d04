//! E2E tests for the graph pipeline
//!
//! Drive `run_graph` with the live registry client against a local mockito
//! server and inspect the files it writes.

use anyhow::Result;
use depgraph_lib::display::Display;
use depgraph_lib::networking::{NetworkingConfig, NetworkingManager};
use depgraph_lib::test_support::{SnapshotBuilder, chain_snapshot, diamond_snapshot};
use depgraph_lib::{CommandOutcome, GraphArgs, GraphMode, LiveRegistryClient, ProjectView, run_graph};
use depgraph_tests::fixtures::TEST_API_KEY;
use depgraph_tests::{RegistryServer, graph_args, isolated_config};
use std::sync::Arc;
use tempfile::TempDir;

fn client_for(server: &RegistryServer) -> Result<LiveRegistryClient> {
    let networking = NetworkingManager::new(NetworkingConfig::default())?;
    Ok(LiveRegistryClient::with_base_url(
        Arc::new(networking),
        server.url(),
        TEST_API_KEY.to_string(),
    ))
}

fn rendered(outcome: CommandOutcome) -> (std::path::PathBuf, usize, usize) {
    match outcome {
        CommandOutcome::Rendered {
            rendered,
            nodes,
            edges,
            ..
        } => (rendered.dot_path, nodes, edges),
        other => panic!("expected a rendered graph, got {other:?}"),
    }
}

#[tokio::test]
async fn e2e_diamond_uses_graph() -> Result<()> {
    let temp = TempDir::new()?;
    let server = RegistryServer::serving(&diamond_snapshot()).await?;
    let app = isolated_config(&temp, server.url());
    let args = GraphArgs {
        project_filter: Some("a".to_string()),
        ..graph_args(GraphMode::Uses)
    };

    let outcome = run_graph(&app, &args, &client_for(&server)?, &Display::new(false)).await?;
    let (dot_path, nodes, edges) = rendered(outcome);

    assert_eq!((nodes, edges), (4, 4));
    assert_eq!(dot_path, temp.path().join("renders/a/uses-dependency-graph.dot"));

    let dot = std::fs::read_to_string(dot_path)?;
    for edge in ["p1 -> p2;", "p1 -> p3;", "p2 -> p4;", "p3 -> p4;"] {
        assert!(dot.contains(edge), "missing {edge}");
    }
    assert_eq!(dot.matches("p4[label=").count(), 1);

    server.mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn e2e_unseeded_run_covers_whole_catalogue() -> Result<()> {
    let temp = TempDir::new()?;
    let server = RegistryServer::serving(&chain_snapshot()).await?;
    let app = isolated_config(&temp, server.url());

    let outcome = run_graph(
        &app,
        &graph_args(GraphMode::UsedBy),
        &client_for(&server)?,
        &Display::new(false),
    )
    .await?;
    let (dot_path, nodes, edges) = rendered(outcome);

    assert_eq!((nodes, edges), (4, 3));
    assert_eq!(dot_path, temp.path().join("renders/usedby-dependency-graph.dot"));
    Ok(())
}

#[tokio::test]
async fn e2e_product_filter_falls_back_when_nothing_matches() -> Result<()> {
    let temp = TempDir::new()?;
    let server = RegistryServer::serving(&chain_snapshot()).await?;
    let app = isolated_config(&temp, server.url());
    let args = GraphArgs {
        product_filter: Some("Nonexistent".to_string()),
        export_json: true,
        ..graph_args(GraphMode::Uses)
    };

    run_graph(&app, &args, &client_for(&server)?, &Display::new(false)).await?;

    let json = std::fs::read_to_string(temp.path().join("data/project-dependency.json"))?;
    let views: Vec<ProjectView> = serde_json::from_str(&json)?;
    assert_eq!(views.len(), 4);
    Ok(())
}

#[tokio::test]
async fn e2e_product_filter_narrows_exports_and_relations() -> Result<()> {
    let temp = TempDir::new()?;
    let snapshot = SnapshotBuilder::new()
        .project(1, "api", "Core", &["Support"])
        .project(2, "chat-db", "Data", &["Chat"])
        .project(3, "shared", "Core", &[])
        .uses(1, 2)
        .uses(1, 3)
        .build();
    let server = RegistryServer::serving(&snapshot).await?;
    let app = isolated_config(&temp, server.url());
    let args = GraphArgs {
        product_filter: Some("Support".to_string()),
        export_json: true,
        export_plain_english: true,
        ..graph_args(GraphMode::Uses)
    };

    let outcome = run_graph(&app, &args, &client_for(&server)?, &Display::new(false)).await?;
    let (_, nodes, edges) = rendered(outcome);

    // chat-db is outside the product and dropped; shared has no product and stays
    let json = std::fs::read_to_string(temp.path().join("data/project-dependency.json"))?;
    let views: Vec<ProjectView> = serde_json::from_str(&json)?;
    let permalinks: Vec<&str> = views.iter().map(|v| v.permalink.as_str()).collect();
    assert_eq!(permalinks, vec!["api", "shared"]);
    assert_eq!(views[0].uses.len(), 1);
    assert_eq!(views[0].uses[0].permalink, "shared");
    assert_eq!((nodes, edges), (2, 1));

    let text = std::fs::read_to_string(temp.path().join("data/project-dependency.txt"))?;
    assert!(text.contains(r#"The project "api" depends on "shared"."#));
    assert!(!text.contains("chat db"));
    Ok(())
}

#[tokio::test]
async fn e2e_rejected_api_key_is_an_error() -> Result<()> {
    let temp = TempDir::new()?;
    let server = RegistryServer::serving(&chain_snapshot()).await?;
    let app = isolated_config(&temp, server.url());

    let networking = NetworkingManager::new(NetworkingConfig::default())?;
    let client = LiveRegistryClient::with_base_url(Arc::new(networking), server.url(), "wrong".to_string());

    let result = run_graph(&app, &graph_args(GraphMode::Uses), &client, &Display::new(false)).await;
    assert!(result.is_err());
    assert!(!temp.path().join("renders").exists());
    Ok(())
}
