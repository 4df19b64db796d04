// Tests for the registry client

use super::*;
use crate::networking::NetworkingConfig;
use mockito::Matcher;

const PAYLOAD: &str = r#"{
    "projects": [
        {
            "id": 1,
            "permalink": "api",
            "name": "Public API",
            "nickname": "papi",
            "project_stakeholder_owner_name": "Platform",
            "product_names": ["Foundation"],
            "category": "Service",
            "dependent_project_dependencies_ids": [10],
            "providing_project_dependencies_ids": []
        },
        {
            "id": 2,
            "permalink": "db",
            "name": "Database",
            "project_stakeholder_owner_name": null,
            "product_names": null,
            "dependent_project_dependencies_ids": null,
            "providing_project_dependencies_ids": [10]
        }
    ],
    "project_dependencies": [
        { "id": 10, "providing_project_id": 2, "dependent_project_id": 1 }
    ]
}"#;

fn networking() -> Arc<NetworkingManager> {
    Arc::new(NetworkingManager::new(NetworkingConfig::default()).unwrap())
}

// ============================================================================
// Payload parsing
// ============================================================================

#[test]
fn test_snapshot_parses_registry_fields() {
    let snapshot: RegistrySnapshot = serde_json::from_str(PAYLOAD).unwrap();

    assert_eq!(snapshot.projects.len(), 2);
    assert_eq!(snapshot.project_dependencies.len(), 1);

    let api = &snapshot.projects[0];
    assert_eq!(api.alias.as_deref(), Some("papi"));
    assert_eq!(api.owner.as_deref(), Some("Platform"));
    assert_eq!(api.products, vec!["Foundation".to_string()]);
    assert_eq!(api.category.as_deref(), Some("Service"));

    let db = &snapshot.projects[1];
    assert_eq!(db.owner_or_unknown(), "Unknown");
    assert!(db.products.is_empty());
    assert!(db.dependent_project_dependencies_ids.is_empty());
}

#[test]
fn test_snapshot_tolerates_null_link_endpoints() {
    let payload = r#"{
        "projects": [
            { "id": 1, "permalink": "api", "dependent_project_dependencies_ids": [10, 11] },
            { "id": 2, "permalink": "db", "providing_project_dependencies_ids": [10] }
        ],
        "project_dependencies": [
            { "id": 10, "providing_project_id": 2, "dependent_project_id": 1 },
            { "id": 11, "providing_project_id": null, "dependent_project_id": 1 },
            { "id": 12, "dependent_project_id": 2 }
        ]
    }"#;

    let snapshot: RegistrySnapshot = serde_json::from_str(payload).unwrap();
    assert_eq!(snapshot.project_dependencies.len(), 3);
    assert_eq!(snapshot.project_dependencies[1].providing_project_id, None);
    assert_eq!(snapshot.project_dependencies[2].providing_project_id, None);

    let views = crate::catalogue::build_catalogue(
        &snapshot.projects,
        &snapshot.project_dependencies,
        &crate::catalogue::ProjectFilter::default(),
    );
    let api_uses: Vec<u64> = views[0].uses.iter().map(|s| s.id).collect();
    assert_eq!(api_uses, vec![2]);
}

#[test]
fn test_snapshot_tolerates_missing_keys() {
    let snapshot: RegistrySnapshot = serde_json::from_str("{}").unwrap();
    assert!(snapshot.is_empty());
    assert!(snapshot.project_dependencies.is_empty());
}

// ============================================================================
// Query construction
// ============================================================================

#[test]
fn test_query_is_percent_encoded() {
    let encoded = RegistryQuery::default().encode();
    assert!(encoded.contains("search%5B%21release_state%5D=EOL"));
    assert!(encoded.contains("per_page=9999"));
    assert!(encoded.contains(
        "includes=dependent_project_dependencies,providing_project_dependencies"
    ));
}

#[test]
fn test_projects_url_trims_trailing_slash() {
    let client = LiveRegistryClient::with_base_url(
        networking(),
        "https://registry.example/".to_string(),
        "key".to_string(),
    );
    assert!(
        client
            .projects_url()
            .starts_with("https://registry.example/projects.json?")
    );
}

// ============================================================================
// Live client against a mock server
// ============================================================================

#[tokio::test]
async fn test_live_client_fetches_snapshot() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/projects.json")
        .match_header("authorization", "Token test-key")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("per_page".into(), "9999".into()),
            Matcher::UrlEncoded("search[!release_state]".into(), "EOL".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(PAYLOAD)
        .create_async()
        .await;

    let client = LiveRegistryClient::with_base_url(networking(), server.url(), "test-key".to_string());
    let snapshot = client.fetch_snapshot().await.unwrap();

    assert_eq!(snapshot.projects.len(), 2);
    assert_eq!(snapshot.project_dependencies[0].providing_project_id, Some(2));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_live_client_surfaces_auth_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/projects.json")
        .match_query(Matcher::Any)
        .with_status(403)
        .create_async()
        .await;

    let client = LiveRegistryClient::with_base_url(networking(), server.url(), "bad".to_string());
    let result = client.fetch_snapshot().await;

    assert!(matches!(
        result,
        Err(RegistryError::NetworkError {
            source: NetworkingError::UnexpectedStatus { status: 403, .. }
        })
    ));
}

#[tokio::test]
async fn test_live_client_rejects_malformed_json() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/projects.json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let client = LiveRegistryClient::with_base_url(networking(), server.url(), "key".to_string());
    let result = client.fetch_snapshot().await;

    assert!(matches!(result, Err(RegistryError::JsonError { .. })));
}

// ============================================================================
// Mock client
// ============================================================================

#[tokio::test]
async fn test_mock_client_returns_configured_snapshot() {
    let snapshot: RegistrySnapshot = serde_json::from_str(PAYLOAD).unwrap();
    let mock = MockRegistryClient::new().with_snapshot(snapshot.clone());

    assert_eq!(mock.fetch_snapshot().await.unwrap(), snapshot);
}

#[tokio::test]
async fn test_mock_client_failure() {
    let mock = MockRegistryClient::new().with_failure("offline");
    let result = mock.fetch_snapshot().await;

    assert!(matches!(result, Err(RegistryError::Unavailable { .. })));
}
