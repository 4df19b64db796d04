//! Registry API client implementation
//!
//! Provides production (Live) and test (Mock) implementations of the project
//! registry client. The registry answers one authenticated request with a
//! single JSON document holding every project and every dependency link.

use crate::catalogue::records::null_as_default;
use crate::catalogue::{DependencyLinkRecord, ProjectRecord};
use crate::networking::{NetworkingError, NetworkingManager};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Default registry host
pub const DEFAULT_REGISTRY_URL: &str = "https://cerebro.zende.sk";

/// Characters left as-is in query components
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b',');

/// Registry API errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {source}")]
    NetworkError {
        #[from]
        source: NetworkingError,
    },

    #[error("JSON parsing failed: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Registry unavailable: {message}")]
    Unavailable { message: String },
}

/// Everything one registry request returns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_dependencies: Vec<DependencyLinkRecord>,
}

impl RegistrySnapshot {
    pub fn new(projects: Vec<ProjectRecord>, project_dependencies: Vec<DependencyLinkRecord>) -> Self {
        Self {
            projects,
            project_dependencies,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Query parameters sent with the projects request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryQuery {
    pub params: Vec<(String, String)>,
}

impl Default for RegistryQuery {
    fn default() -> Self {
        let params = [
            (
                "includes",
                "dependent_project_dependencies,providing_project_dependencies",
            ),
            (
                "inlines",
                "project_stakeholder_owner_name,product_names,project_repository_urls,link_deployment_urls",
            ),
            ("search[!release_state]", "EOL"),
            ("per_page", "9999"),
        ];

        Self {
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl RegistryQuery {
    /// Percent-encoded `key=value&...` string
    pub fn encode(&self) -> String {
        self.params
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(key, QUERY_COMPONENT),
                    utf8_percent_encode(value, QUERY_COMPONENT)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Trait for registry operations
pub trait RegistryClient {
    /// Fetch all projects and dependency links in one snapshot
    fn fetch_snapshot(
        &self,
    ) -> impl std::future::Future<Output = Result<RegistrySnapshot, RegistryError>> + Send;
}

/// Live registry client (production)
pub struct LiveRegistryClient {
    networking: Arc<NetworkingManager>,
    base_url: String,
    api_key: String,
    query: RegistryQuery,
}

impl LiveRegistryClient {
    /// Create new live client against the default registry
    pub fn new(networking: Arc<NetworkingManager>, api_key: String) -> Self {
        Self::with_base_url(networking, DEFAULT_REGISTRY_URL.to_string(), api_key)
    }

    /// Create client with custom base URL (for staging/testing)
    pub fn with_base_url(networking: Arc<NetworkingManager>, base_url: String, api_key: String) -> Self {
        Self {
            networking,
            base_url,
            api_key,
            query: RegistryQuery::default(),
        }
    }

    /// Full projects URL including the query string
    pub fn projects_url(&self) -> String {
        format!(
            "{}/projects.json?{}",
            self.base_url.trim_end_matches('/'),
            self.query.encode()
        )
    }
}

impl RegistryClient for LiveRegistryClient {
    async fn fetch_snapshot(&self) -> Result<RegistrySnapshot, RegistryError> {
        let url = self.projects_url();
        debug!(url = %url, "Fetching projects from registry");

        let data = self.networking.get_with_token(&url, &self.api_key).await?;
        let snapshot: RegistrySnapshot = serde_json::from_slice(&data)?;

        info!(
            projects = snapshot.projects.len(),
            links = snapshot.project_dependencies.len(),
            "Registry snapshot received"
        );

        Ok(snapshot)
    }
}

/// Mock registry client (testing)
pub struct MockRegistryClient {
    response: Result<RegistrySnapshot, String>,
}

impl MockRegistryClient {
    /// Create new mock client returning an empty snapshot
    pub fn new() -> Self {
        Self {
            response: Ok(RegistrySnapshot::default()),
        }
    }

    /// Return `snapshot` from every fetch
    pub fn with_snapshot(mut self, snapshot: RegistrySnapshot) -> Self {
        self.response = Ok(snapshot);
        self
    }

    /// Fail every fetch with `message`
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.response = Err(message.into());
        self
    }
}

impl RegistryClient for MockRegistryClient {
    async fn fetch_snapshot(&self) -> Result<RegistrySnapshot, RegistryError> {
        match &self.response {
            Ok(snapshot) => Ok(snapshot.clone()),
            Err(message) => Err(RegistryError::Unavailable {
                message: message.clone(),
            }),
        }
    }
}

impl Default for MockRegistryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
