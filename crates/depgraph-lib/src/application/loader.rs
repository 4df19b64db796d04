//! Configuration loading
//!
//! Coordinates loading configuration from `.env` files, the environment,
//! and the command line into one validated [`CliConfig`].

use crate::primitives::ConfigError;
use tracing::debug;

use super::{cli::CliConfig, config::AppConfig, env::EnvironmentConfig};

/// `.env` files consulted, earlier files win
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Load `.env` files into the process environment, ignoring missing files
pub fn load_env_files() -> Result<(), ConfigError> {
    for env_file in ENV_FILES {
        match dotenvy::from_filename(env_file) {
            Ok(path) => debug!(path = %path.display(), "Loaded environment file"),
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(ConfigError::EnvFileError {
                    file: env_file.to_string(),
                    source: e,
                });
            }
        }
    }
    Ok(())
}

impl AppConfig {
    /// Layer `cli` over defaults and the standard color variables
    pub fn resolve(cli: AppConfig, env_config: &EnvironmentConfig) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.color = env_config.apply_color_config(config.color);
        config = config.merge_with(cli);
        config.validate()?;
        Ok(config)
    }
}

impl CliConfig {
    /// Load config: defaults -> .env -> env vars -> CLI
    pub fn load_layered() -> Result<Self, ConfigError> {
        load_env_files()?;

        // clap reads the DEPGRAPH_* variables, so .env values must be in place first
        let env_config = EnvironmentConfig::load()?;
        let cli_config = CliConfig::load()?;

        Ok(Self {
            app_config: AppConfig::resolve(cli_config.app_config, &env_config)?,
            command: cli_config.command,
        })
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
