use super::*;
use clap::CommandFactory;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("depgraph").chain(args.iter().copied()))
}

fn graph_args(cli: Cli) -> GraphArgs {
    match cli.command {
        Some(Commands::Graph(args)) => args,
        other => panic!("expected graph command, got {other:?}"),
    }
}

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_graph_command_parses_all_flags() {
    let cli = parse(&[
        "graph",
        "--graph-type",
        "usedby",
        "--max-depth",
        "4",
        "--product-filter",
        "Support,Chat",
        "--category-filter",
        "Service",
        "--project-filter",
        "api",
        "--export-json",
        "--export-plain-english",
        "--sort-by-weighting",
        "--no-pdf",
    ])
    .unwrap();

    let args = graph_args(cli);
    assert_eq!(args.graph_type, Some(GraphMode::UsedBy));
    assert_eq!(args.max_depth, 4);
    assert_eq!(args.product_filter.as_deref(), Some("Support,Chat"));
    assert_eq!(args.category_filter.as_deref(), Some("Service"));
    assert_eq!(args.seed(), Some("api"));
    assert!(args.export_json);
    assert!(args.export_plain_english);
    assert!(args.sort_by_weighting);
    assert!(args.no_pdf);
}

#[test]
fn test_graph_type_aliases() {
    for value in ["usedby", "used-by", "used_by", "USEDBY"] {
        let args = graph_args(parse(&["graph", "--graph-type", value]).unwrap());
        assert_eq!(args.graph_mode().unwrap(), GraphMode::UsedBy, "{value}");
    }
}

#[test]
fn test_invalid_graph_type_is_rejected() {
    let err = parse(&["graph", "--graph-type", "sideways"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
}

#[test]
fn test_missing_graph_type() {
    let args = GraphArgs::default();
    assert!(matches!(args.graph_mode(), Err(ConfigError::MissingGraphType)));
    assert_eq!(args.max_depth, DEFAULT_MAX_DEPTH);
}

#[test]
fn test_blank_project_filter_is_no_seed() {
    let args = GraphArgs {
        project_filter: Some("  ".to_string()),
        ..GraphArgs::default()
    };
    assert_eq!(args.seed(), None);
}

#[test]
fn test_global_options_after_subcommand() {
    let cli = parse(&["graph", "--graph-type", "uses", "--log-level", "2", "--render-dir", "out"]).unwrap();
    assert_eq!(cli.config.log_level, 2);
    assert_eq!(cli.config.render_dir, std::path::PathBuf::from("out"));
}

#[test]
fn test_version_command() {
    let cli = parse(&["version"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Version)));
}
