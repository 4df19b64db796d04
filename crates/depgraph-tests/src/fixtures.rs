//! Fixtures for end-to-end runs against a mock registry server

use depgraph_lib::registry::RegistrySnapshot;
use depgraph_lib::{AppConfig, GraphArgs, GraphMode};
use tempfile::TempDir;

/// API key the mock server expects
pub const TEST_API_KEY: &str = "e2e-test-key";

/// A mockito server answering `GET /projects.json` with a snapshot
pub struct RegistryServer {
    pub server: mockito::ServerGuard,
    pub mock: mockito::Mock,
}

impl RegistryServer {
    /// Serve `snapshot` to requests carrying [`TEST_API_KEY`]
    pub async fn serving(snapshot: &RegistrySnapshot) -> anyhow::Result<Self> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/projects.json")
            .match_query(mockito::Matcher::Any)
            .match_header("authorization", format!("Token {TEST_API_KEY}").as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(snapshot)?)
            .create_async()
            .await;

        Ok(Self { server, mock })
    }

    pub fn url(&self) -> String {
        self.server.url()
    }
}

/// Config writing every output under `temp`
pub fn isolated_config(temp: &TempDir, registry_url: String) -> AppConfig {
    AppConfig {
        registry_url,
        api_key: Some(TEST_API_KEY.to_string()),
        render_dir: temp.path().join("renders"),
        data_dir: temp.path().join("data"),
        ..AppConfig::default()
    }
}

/// Graph arguments for `mode` with PDF conversion off
pub fn graph_args(mode: GraphMode) -> GraphArgs {
    GraphArgs {
        graph_type: Some(mode),
        no_pdf: true,
        ..GraphArgs::default()
    }
}
