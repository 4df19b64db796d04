use super::*;
use crate::primitives::GraphMode;
use crate::registry::{MockRegistryClient, RegistrySnapshot};
use crate::test_support::{chain_snapshot, diamond_snapshot};
use tempfile::TempDir;

fn app_in(temp: &TempDir) -> AppConfig {
    AppConfig {
        render_dir: temp.path().join("renders"),
        data_dir: temp.path().join("data"),
        ..AppConfig::default()
    }
}

fn graph_args(mode: GraphMode) -> GraphArgs {
    GraphArgs {
        graph_type: Some(mode),
        no_pdf: true,
        ..GraphArgs::default()
    }
}

async fn run(app: &AppConfig, args: &GraphArgs, snapshot: RegistrySnapshot) -> Result<CommandOutcome> {
    let client = MockRegistryClient::new().with_snapshot(snapshot);
    run_graph(app, args, &client, &Display::new(false)).await
}

#[tokio::test]
async fn test_seeded_chain_respects_depth() {
    let temp = TempDir::new().unwrap();
    let app = app_in(&temp);
    let args = GraphArgs {
        project_filter: Some("a".to_string()),
        ..graph_args(GraphMode::Uses)
    };

    let outcome = run(&app, &args, chain_snapshot()).await.unwrap();

    let CommandOutcome::Rendered {
        rendered,
        nodes,
        edges,
        exports,
    } = outcome
    else {
        panic!("expected a rendered graph");
    };

    assert_eq!(nodes, 3);
    assert_eq!(edges, 2);
    assert!(exports.is_empty());
    assert_eq!(rendered.pdf_path, None);
    assert_eq!(
        rendered.dot_path,
        temp.path().join("renders/a/uses-dependency-graph.dot")
    );

    let dot = std::fs::read_to_string(&rendered.dot_path).unwrap();
    assert!(dot.contains("p1 -> p2;"));
    assert!(dot.contains("p2 -> p3;"));
    assert!(!dot.contains("p4"));
}

#[tokio::test]
async fn test_used_by_from_shared_dependency() {
    let temp = TempDir::new().unwrap();
    let args = GraphArgs {
        project_filter: Some("d".to_string()),
        ..graph_args(GraphMode::UsedBy)
    };

    let outcome = run(&app_in(&temp), &args, diamond_snapshot()).await.unwrap();
    let CommandOutcome::Rendered { rendered, nodes, edges, .. } = outcome else {
        panic!("expected a rendered graph");
    };

    assert_eq!((nodes, edges), (4, 4));
    let dot = std::fs::read_to_string(rendered.dot_path).unwrap();
    assert!(dot.contains("p2 -> p4;"));
    assert!(dot.contains("p3 -> p4;"));
    assert!(dot.contains("p1 -> p2;"));
}

#[tokio::test]
async fn test_exports_written_before_traversal() {
    let temp = TempDir::new().unwrap();
    let app = app_in(&temp);
    let args = GraphArgs {
        export_json: true,
        export_plain_english: true,
        sort_by_weighting: true,
        ..graph_args(GraphMode::Uses)
    };

    let outcome = run(&app, &args, diamond_snapshot()).await.unwrap();
    let CommandOutcome::Rendered { exports, .. } = outcome else {
        panic!("expected a rendered graph");
    };

    let json_path = temp.path().join("data/project-dependency.json");
    let text_path = temp.path().join("data/project-dependency.txt");
    assert_eq!(exports, vec![json_path.clone(), text_path.clone()]);

    let views: Vec<crate::catalogue::ProjectView> =
        serde_json::from_str(&std::fs::read_to_string(json_path).unwrap()).unwrap();
    assert_eq!(views[0].permalink, "a", "highest weighting first");
    assert_eq!(views.len(), 4);

    let text = std::fs::read_to_string(text_path).unwrap();
    assert!(text.contains(r#"The project "a" depends on "b"."#));
    assert!(text.contains(r#"The project "d" is dependent on by "b"."#));
}

#[tokio::test]
async fn test_unknown_seed_reports_no_seed_projects() {
    let temp = TempDir::new().unwrap();
    let args = GraphArgs {
        project_filter: Some("missing".to_string()),
        ..graph_args(GraphMode::Uses)
    };

    let outcome = run(&app_in(&temp), &args, chain_snapshot()).await.unwrap();
    assert_eq!(
        outcome,
        CommandOutcome::NoSeedProjects {
            permalink: "missing".to_string()
        }
    );
    assert!(!temp.path().join("renders").exists());
}

#[tokio::test]
async fn test_empty_registry_reports_no_matching_projects() {
    let temp = TempDir::new().unwrap();
    let args = GraphArgs {
        export_json: true,
        ..graph_args(GraphMode::Uses)
    };
    let outcome = run(&app_in(&temp), &args, RegistrySnapshot::default())
        .await
        .unwrap();

    assert_eq!(outcome, CommandOutcome::NoMatchingProjects);
    assert!(!temp.path().join("data").exists());
}

#[tokio::test]
async fn test_missing_graph_type_fails_before_fetch() {
    let temp = TempDir::new().unwrap();
    let client = MockRegistryClient::new().with_failure("must not be called");

    let err = run_graph(&app_in(&temp), &GraphArgs::default(), &client, &Display::new(false))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Graph type not set"));
}

#[tokio::test]
async fn test_registry_failure_is_reported_with_context() {
    let temp = TempDir::new().unwrap();
    let client = MockRegistryClient::new().with_failure("offline");

    let err = run_graph(&app_in(&temp), &graph_args(GraphMode::Uses), &client, &Display::new(false))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Failed to fetch projects"));
    assert!(format!("{err:#}").contains("offline"));
}

#[test]
fn test_resolve_color_intent() {
    assert!(resolve_color(ColorIntent::Always));
    assert!(!resolve_color(ColorIntent::Never));
}

#[test]
fn test_report_outcome_does_not_panic() {
    let display = Display::new(false);
    report_outcome(&display, &CommandOutcome::NoMatchingProjects);
    report_outcome(
        &display,
        &CommandOutcome::NoSeedProjects {
            permalink: "x".to_string(),
        },
    );
}
