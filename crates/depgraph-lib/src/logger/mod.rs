use crate::primitives::*;
use std::sync::OnceLock;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Global logger instance - ensures single initialization
static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Crates that are noisy below `warn`
const QUIET_CRATES: &[&str] = &["hyper", "hyper_util", "reqwest", "h2", "rustls", "tower", "mio", "want"];

/// Logger implementation using tracing with indicatif progress integration
#[derive(Debug)]
pub struct Logger {
    config: LoggerConfig,
}

/// Filter directives for `level`: our crates at `level`, HTTP stack at `warn`
pub fn default_directives(level: LogLevel) -> String {
    let level_str = level.as_directive();
    let mut directives = vec![
        format!("depgraph={level_str}"),
        format!("depgraph_lib={level_str}"),
    ];
    directives.extend(QUIET_CRATES.iter().map(|krate| format!("{krate}=warn")));
    directives.push(level_str.to_string());
    directives.join(",")
}

impl Logger {
    /// Initialize the global logger
    ///
    /// `RUST_LOG` overrides the configured level when set.
    pub fn init(config: LoggerConfig) -> Result<&'static Self, LoggerError> {
        if GLOBAL_LOGGER.get().is_some() {
            return Err(LoggerError::AlreadyInitialized);
        }

        let indicatif_layer = IndicatifLayer::new();

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directives(config.level)));

        let fmt_layer = match (config.output, config.format) {
            (LogOutput::Stderr, LogFormat::Text) => fmt::layer()
                .with_writer(indicatif_layer.get_stderr_writer())
                .with_ansi(config.color)
                .compact()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Json) => fmt::layer()
                .with_writer(indicatif_layer.get_stderr_writer())
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Yaml) => fmt::layer()
                .with_writer(indicatif_layer.get_stderr_writer())
                .with_ansi(config.color)
                .pretty()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Text) => fmt::layer()
                .with_writer(indicatif_layer.get_stdout_writer())
                .with_ansi(config.color)
                .compact()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Json) => fmt::layer()
                .with_writer(indicatif_layer.get_stdout_writer())
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Yaml) => fmt::layer()
                .with_writer(indicatif_layer.get_stdout_writer())
                .with_ansi(config.color)
                .pretty()
                .boxed(),
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(indicatif_layer)
            .try_init()
            .map_err(|e| LoggerError::InitializationFailed {
                reason: e.to_string(),
            })?;

        let logger = GLOBAL_LOGGER.get_or_init(|| Logger {
            config: config.clone(),
        });

        tracing::debug!(
            level = ?config.level,
            format = ?config.format,
            output = ?config.output,
            color = config.color,
            "Logger initialized"
        );

        Ok(logger)
    }

    /// Get reference to the global logger instance
    pub fn global() -> Option<&'static Self> {
        GLOBAL_LOGGER.get()
    }

    /// Check if logger is initialized
    pub fn is_initialized() -> bool {
        GLOBAL_LOGGER.get().is_some()
    }

    /// Configuration the logger was initialized with
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
