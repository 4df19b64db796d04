use clap::Parser;
use depgraph_lib::application::cli::{Cli, CliConfig, Commands};
use depgraph_lib::application::config::AppConfig;
use depgraph_lib::application::env::EnvironmentConfig;
use depgraph_lib::primitives::{ColorIntent, GraphMode, LogFormat};
use std::path::PathBuf;

#[test]
fn test_config_default_creation() {
    let config = AppConfig::default();

    assert!(config.log_level <= 4);
    assert!(config.net_timeout > 0);
    assert_eq!(config.color, ColorIntent::Auto);
    assert!(config.api_key.is_none());
}

#[test]
fn test_cli_flags_layer_over_environment() {
    let cli = Cli::try_parse_from([
        "depgraph",
        "--log-format",
        "json",
        "graph",
        "--graph-type",
        "uses",
        "--data-dir",
        "exports",
    ])
    .unwrap();
    let cli_config = CliConfig::from_cli(cli);

    let env_config = EnvironmentConfig {
        clicolor: Some("0".to_string()),
        ..EnvironmentConfig::default()
    };
    let config = AppConfig::resolve(cli_config.app_config, &env_config).unwrap();

    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.data_dir, PathBuf::from("exports"));
    assert_eq!(config.color, ColorIntent::Never);
    assert_eq!(config.net_timeout, 30);

    match cli_config.command {
        Some(Commands::Graph(args)) => assert_eq!(args.graph_mode().unwrap(), GraphMode::Uses),
        other => panic!("expected graph command, got {other:?}"),
    }
}

#[test]
fn test_config_merging_integration() {
    let override_config = AppConfig {
        log_level: 3,
        net_timeout: 90,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let merged = AppConfig::default().merge_with(override_config);

    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.net_timeout, 90);
    assert_eq!(merged.color, ColorIntent::Never);
    assert_eq!(merged.render_dir, PathBuf::from("renders"));
}
