//! Application layer modules
//!
//! Organizes the CLI interface, layered configuration, output layout, and
//! command execution.

pub mod cli;
pub mod commands;
pub mod config;
pub mod env;
pub mod layout;
pub mod loader;

// Re-export main types for convenience
pub use cli::{Cli, CliConfig, Commands, GraphArgs};
pub use commands::{CommandOutcome, execute_command, run_graph};
pub use config::AppConfig;
pub use layout::OutputLayout;
