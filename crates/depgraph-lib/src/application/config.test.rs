use super::*;

#[test]
fn test_defaults_match_clap_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.log_level, defaults::LOG_LEVEL.parse::<u8>().unwrap());
    assert_eq!(config.log_format, defaults::LOG_FORMAT.parse::<LogFormat>().unwrap());
    assert_eq!(config.log_output, defaults::LOG_OUTPUT.parse::<LogOutput>().unwrap());
    assert_eq!(config.color, defaults::COLOR.parse::<ColorIntent>().unwrap());
    assert_eq!(config.net_timeout, defaults::NET_TIMEOUT.parse::<u64>().unwrap());
    assert_eq!(config.registry_url, DEFAULT_REGISTRY_URL);
    assert_eq!(config.render_dir, PathBuf::from("renders"));
    assert_eq!(config.data_dir, PathBuf::from("data"));
}

#[test]
fn test_merge_takes_non_default_values() {
    let base = AppConfig {
        api_key: Some("from-env".to_string()),
        ..AppConfig::default()
    };
    let cli = AppConfig {
        log_level: 3,
        render_dir: PathBuf::from("out"),
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let merged = base.merge_with(cli);
    assert_eq!(merged.api_key.as_deref(), Some("from-env"));
    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.render_dir, PathBuf::from("out"));
    assert_eq!(merged.color, ColorIntent::Never);
    assert_eq!(merged.net_timeout, 30);
}

#[test]
fn test_merge_keeps_base_when_other_is_default() {
    let base = AppConfig {
        net_timeout: 5,
        log_format: LogFormat::Json,
        ..AppConfig::default()
    };

    let merged = base.merge_with(AppConfig::default());
    assert_eq!(merged.net_timeout, 5);
    assert_eq!(merged.log_format, LogFormat::Json);
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let config = AppConfig {
        net_timeout: 0,
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_validate_rejects_non_http_registry() {
    let config = AppConfig {
        registry_url: "ftp://registry".to_string(),
        ..AppConfig::default()
    };
    assert!(config.validate().is_err());
    assert!(AppConfig::default().validate().is_ok());
}

#[test]
fn test_require_api_key() {
    let mut config = AppConfig::default();
    assert!(matches!(config.require_api_key(), Err(ConfigError::MissingApiKey)));

    config.api_key = Some("   ".to_string());
    assert!(matches!(config.require_api_key(), Err(ConfigError::MissingApiKey)));

    config.api_key = Some("secret".to_string());
    assert_eq!(config.require_api_key().unwrap(), "secret");
}

#[test]
fn test_logger_config_from_app_config() {
    let config = AppConfig {
        log_level: 9,
        ..AppConfig::default()
    };
    let logger = config.to_logger_config(false);
    assert_eq!(logger.level, LogLevel::Trace);
    assert!(!logger.color);
}
