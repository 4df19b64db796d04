use super::*;

#[test]
fn test_graph_mode_parses_both_modes() {
    assert_eq!("uses".parse::<GraphMode>().unwrap(), GraphMode::Uses);
    assert_eq!("usedby".parse::<GraphMode>().unwrap(), GraphMode::UsedBy);
    assert_eq!("used-by".parse::<GraphMode>().unwrap(), GraphMode::UsedBy);
    assert_eq!("USES".parse::<GraphMode>().unwrap(), GraphMode::Uses);
}

#[test]
fn test_graph_mode_rejects_unknown_value() {
    let err = "depends".parse::<GraphMode>().unwrap_err();
    match err {
        ConfigError::ParseError { value, reason } => {
            assert_eq!(value, "depends");
            assert!(reason.contains("uses or usedby"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_graph_mode_file_stem() {
    assert_eq!(GraphMode::Uses.to_string(), "uses");
    assert_eq!(GraphMode::UsedBy.to_string(), "usedby");
}

#[test]
fn test_log_level_from_verbosity() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(9), LogLevel::Trace);
    assert_eq!(LogLevel::Warning.as_directive(), "warn");
}

#[test]
fn test_value_enum_aliases() {
    assert_eq!("yml".parse::<LogFormat>().unwrap(), LogFormat::Yaml);
    assert_eq!("plain".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("stdout".parse::<LogOutput>().unwrap(), LogOutput::Stdout);
    assert_eq!("no".parse::<ColorIntent>().unwrap(), ColorIntent::Never);
    assert!("sometimes".parse::<ColorIntent>().is_err());
}
