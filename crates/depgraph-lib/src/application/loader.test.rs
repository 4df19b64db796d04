use super::*;
use crate::primitives::ColorIntent;
use std::path::PathBuf;

#[test]
fn test_resolve_applies_environment_color() {
    let env_config = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };

    let config = AppConfig::resolve(AppConfig::default(), &env_config).unwrap();
    assert_eq!(config.color, ColorIntent::Never);
}

#[test]
fn test_resolve_cli_color_beats_environment() {
    let env_config = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };
    let cli = AppConfig {
        color: ColorIntent::Always,
        ..AppConfig::default()
    };

    let config = AppConfig::resolve(cli, &env_config).unwrap();
    assert_eq!(config.color, ColorIntent::Always);
}

#[test]
fn test_resolve_keeps_cli_values() {
    let cli = AppConfig {
        data_dir: PathBuf::from("exports"),
        api_key: Some("k".to_string()),
        ..AppConfig::default()
    };

    let config = AppConfig::resolve(cli, &EnvironmentConfig::default()).unwrap();
    assert_eq!(config.data_dir, PathBuf::from("exports"));
    assert_eq!(config.api_key.as_deref(), Some("k"));
}

#[test]
fn test_resolve_validates() {
    let cli = AppConfig {
        net_timeout: 0,
        ..AppConfig::default()
    };
    assert!(AppConfig::resolve(cli, &EnvironmentConfig::default()).is_err());
}
