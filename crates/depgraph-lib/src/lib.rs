//! # depgraph Library
//!
//! Project dependency graphs from the project registry.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types, errors, and shared coordination
//! - [`catalogue`] - Join, membership filter, and bounded traversal
//! - [`registry`] - Registry client (live and mock)
//! - [`networking`] - HTTP client with timeout and token auth
//! - [`render`] - DOT output and Graphviz PDF conversion
//! - [`export`] - JSON and plain English catalogue exports
//! - [`platform`] - External program detection
//! - [`logger`] - Structured logging with progress integration
//! - [`display`] - User-facing status lines and spinners
//! - [`application`] - CLI interface, configuration, and command execution
//!
//! ## Quick Start
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! depgraph_lib::main().await
//! # }
//! ```

pub mod application;
pub mod catalogue;
pub mod display;
pub mod export;
pub mod logger;
pub mod networking;
pub mod platform;
pub mod primitives;
pub mod registry;
pub mod render;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, CommandOutcome, Commands, GraphArgs, execute_command, run_graph};
pub use catalogue::{ProjectFilter, ProjectGraph, ProjectView, build_catalogue, traverse};
pub use logger::Logger;
pub use networking::{NetworkingConfig, NetworkingManager};
pub use primitives::{ColorIntent, ConfigError, GraphMode, LogFormat, LogLevel, LogOutput, LoggerError};
pub use registry::{LiveRegistryClient, MockRegistryClient, RegistryClient, RegistrySnapshot};

// Private imports for the main function
use anyhow::Result;
use application::CliConfig;

pub async fn main() -> Result<()> {
    // defaults -> .env -> environment -> CLI
    let config = CliConfig::load_layered()?;

    execute_command(config).await
}
