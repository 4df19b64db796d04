use super::*;

#[test]
fn test_default_directives_scope_levels() {
    let directives = default_directives(LogLevel::Debug);

    assert!(directives.starts_with("depgraph=debug,depgraph_lib=debug,"));
    assert!(directives.contains("reqwest=warn"));
    assert!(directives.contains("hyper_util=warn"));
    assert!(directives.ends_with(",debug"));
}

#[test]
fn test_default_directives_parse() {
    for level in [LogLevel::Error, LogLevel::Warning, LogLevel::Info, LogLevel::Trace] {
        assert!(EnvFilter::try_new(default_directives(level)).is_ok());
    }
}

#[test]
fn test_logger_initializes_once() {
    let config = LoggerConfig {
        level: LogLevel::Error,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        color: false,
    };

    // The only test in this crate that installs a global subscriber
    let logger = Logger::init(config.clone()).unwrap();
    assert_eq!(logger.config().level, LogLevel::Error);
    assert!(Logger::is_initialized());

    assert!(matches!(
        Logger::init(config),
        Err(LoggerError::AlreadyInitialized)
    ));
}
