use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use thiserror::Error;
use tracing::trace;

/// Networking errors for registry communication
#[derive(Debug, Error)]
pub enum NetworkingError {
    #[error("HTTP request failed: {source}")]
    RequestFailed {
        #[from]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned HTTP {status}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Invalid authorization header value")]
    InvalidCredential,

    #[error("Invalid timeout: {seconds}s (must be > 0)")]
    InvalidTimeout { seconds: u64 },
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct NetworkingConfig {
    /// HTTP client timeout in seconds
    pub timeout_seconds: u64,
    /// Enable request/response tracing
    pub trace_requests: bool,
}

impl Default for NetworkingConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            trace_requests: false,
        }
    }
}

/// Shared HTTP client with the configured timeout
pub struct NetworkingManager {
    client: Client,
    config: NetworkingConfig,
}

impl NetworkingManager {
    pub fn new(config: NetworkingConfig) -> Result<Self, NetworkingError> {
        trace!("Initializing networking manager");

        if config.timeout_seconds == 0 {
            return Err(NetworkingError::InvalidTimeout {
                seconds: config.timeout_seconds,
            });
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("depgraph/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    /// GET `url` with a `Token` authorization header, returning the body
    pub async fn get_with_token(&self, url: &str, token: &str) -> Result<Vec<u8>, NetworkingError> {
        let mut auth = HeaderValue::from_str(&format!("Token {}", token))
            .map_err(|_| NetworkingError::InvalidCredential)?;
        auth.set_sensitive(true);

        if self.config.trace_requests {
            trace!(url, "Sending registry request");
        }

        let response = self.client.get(url).header(AUTHORIZATION, auth).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(NetworkingError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?.to_vec();

        if self.config.trace_requests {
            trace!(url, bytes = bytes.len(), "Registry response received");
        }

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
