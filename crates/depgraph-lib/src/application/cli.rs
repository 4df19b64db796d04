use crate::catalogue::DEFAULT_MAX_DEPTH;
use crate::primitives::{ConfigError, GraphMode};
use clap::{Args, Parser, Subcommand};

use super::config::AppConfig;

/// depgraph CLI - project dependency graphs from the registry
#[derive(Debug, Clone, Parser)]
#[command(name = "depgraph")]
#[command(about = "Render project dependency graphs from the project registry")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// depgraph commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Load configuration from command line arguments
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::from_cli(Cli::parse()))
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self {
            app_config: cli.config,
            command: cli.command,
        }
    }
}

/// Available depgraph commands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Fetch the registry and render a dependency graph
    Graph(GraphArgs),

    /// Show version information
    Version,
}

/// Options for the `graph` command
#[derive(Debug, Clone, Args)]
pub struct GraphArgs {
    /// Keep projects whose product names appear in this string ("*" for all)
    #[arg(long, env = "DEPGRAPH_PRODUCT_FILTER")]
    pub product_filter: Option<String>,

    /// Keep projects whose category appears in this string ("*" for all)
    #[arg(long, env = "DEPGRAPH_CATEGORY_FILTER")]
    pub category_filter: Option<String>,

    /// Start the traversal from the project with this permalink
    #[arg(long, env = "DEPGRAPH_PROJECT_FILTER")]
    pub project_filter: Option<String>,

    /// Relation to follow: uses or usedby
    #[arg(long, env = "DEPGRAPH_GRAPH_TYPE", ignore_case = true)]
    pub graph_type: Option<GraphMode>,

    /// Maximum traversal depth from each seed project
    #[arg(long, env = "DEPGRAPH_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Write the filtered catalogue as JSON
    #[arg(long, env = "DEPGRAPH_EXPORT_JSON")]
    pub export_json: bool,

    /// Write the filtered catalogue as plain English sentences
    #[arg(long, env = "DEPGRAPH_EXPORT_PLAIN_ENGLISH")]
    pub export_plain_english: bool,

    /// Order exported projects by weighting, highest first
    #[arg(long, env = "DEPGRAPH_SORT_BY_WEIGHTING")]
    pub sort_by_weighting: bool,

    /// Skip PDF conversion and write DOT only
    #[arg(long, env = "DEPGRAPH_NO_PDF")]
    pub no_pdf: bool,
}

impl Default for GraphArgs {
    fn default() -> Self {
        Self {
            product_filter: None,
            category_filter: None,
            project_filter: None,
            graph_type: None,
            max_depth: DEFAULT_MAX_DEPTH,
            export_json: false,
            export_plain_english: false,
            sort_by_weighting: false,
            no_pdf: false,
        }
    }
}

impl GraphArgs {
    /// Traversal mode, or [`ConfigError::MissingGraphType`] when unset
    pub fn graph_mode(&self) -> Result<GraphMode, ConfigError> {
        self.graph_type.ok_or(ConfigError::MissingGraphType)
    }

    /// Seed permalink, ignoring blank values
    pub fn seed(&self) -> Option<&str> {
        self.project_filter
            .as_deref()
            .map(str::trim)
            .filter(|permalink| !permalink.is_empty())
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            command: None,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
