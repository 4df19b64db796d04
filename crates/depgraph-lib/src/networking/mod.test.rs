use super::*;

#[test]
fn test_networking_config_defaults() {
    let config = NetworkingConfig::default();
    assert_eq!(config.timeout_seconds, 30);
    assert!(!config.trace_requests);
}

#[test]
fn test_zero_timeout_is_rejected() {
    let result = NetworkingManager::new(NetworkingConfig {
        timeout_seconds: 0,
        trace_requests: false,
    });
    assert!(matches!(
        result,
        Err(NetworkingError::InvalidTimeout { seconds: 0 })
    ));
}

#[tokio::test]
async fn test_get_with_token_sends_authorization_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/ping")
        .match_header("authorization", "Token secret")
        .with_status(200)
        .with_body("pong")
        .create_async()
        .await;

    let manager = NetworkingManager::new(NetworkingConfig::default()).unwrap();
    let body = manager
        .get_with_token(&format!("{}/ping", server.url()), "secret")
        .await
        .unwrap();

    assert_eq!(body, b"pong");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_with_token_reports_http_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/ping")
        .with_status(401)
        .create_async()
        .await;

    let manager = NetworkingManager::new(NetworkingConfig::default()).unwrap();
    let result = manager
        .get_with_token(&format!("{}/ping", server.url()), "wrong")
        .await;

    assert!(matches!(
        result,
        Err(NetworkingError::UnexpectedStatus { status: 401, .. })
    ));
}

#[tokio::test]
async fn test_invalid_token_characters_are_rejected() {
    let manager = NetworkingManager::new(NetworkingConfig::default()).unwrap();
    let result = manager
        .get_with_token("http://127.0.0.1:9/never", "bad\ntoken")
        .await;

    assert!(matches!(result, Err(NetworkingError::InvalidCredential)));
}
