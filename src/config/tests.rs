//! Tests for the config module

use super::loader::{apply_overrides, load_layered, load_with_warnings, PROJECT_CONFIG_FILE};
use super::types::*;
use crate::error::RecipeBookError;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.output.verbosity, Verbosity::Normal);
    assert!(!config.output.json);
    assert_eq!(config.display.id_prefix_len, 8);
    assert_eq!(config.display.timestamp_len, 19);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[output]
verbosity = "debug"
json = true

[display]
id_prefix_len = 12
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.output.verbosity, Verbosity::Debug);
    assert!(config.output.json);
    assert_eq!(config.display.id_prefix_len, 12);
    assert_eq!(config.display.timestamp_len, 19);
}

#[test]
fn test_empty_file_is_default() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_verbosity_log_filter() {
    assert_eq!(Verbosity::Quiet.log_filter(), "error");
    assert_eq!(Verbosity::Normal.log_filter(), "warn");
    assert_eq!(Verbosity::Verbose.log_filter(), "info");
    assert_eq!(Verbosity::Debug.log_filter(), "debug");
}

#[test]
fn test_verbosity_raised_by_flag_count() {
    assert_eq!(Verbosity::Normal.raised_by(0), Verbosity::Normal);
    assert_eq!(Verbosity::Quiet.raised_by(1), Verbosity::Verbose);
    assert_eq!(Verbosity::Debug.raised_by(1), Verbosity::Debug);
    assert_eq!(Verbosity::Normal.raised_by(3), Verbosity::Debug);
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("recipebook.toml");
    fs::write(&path, "[output]\nverbosty = \"debug\"\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert_eq!(config.output.verbosity, Verbosity::Normal);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "verbosty");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("verbosity"));
}

#[test]
fn test_load_invalid_toml_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("recipebook.toml");
    fs::write(&path, "this is not toml = = =").unwrap();

    let err = load_with_warnings(&path).unwrap_err();
    assert!(matches!(err, RecipeBookError::InvalidConfig { .. }));
}

#[test]
fn test_load_layered_prefers_explicit_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(PROJECT_CONFIG_FILE),
        "[display]\nid_prefix_len = 4\n",
    )
    .unwrap();
    let explicit = dir.path().join("other.toml");
    fs::write(&explicit, "[display]\nid_prefix_len = 6\n").unwrap();

    let (config, _) = load_layered(Some(&explicit), Some(dir.path())).unwrap();
    assert_eq!(config.display.id_prefix_len, 6);
}

#[test]
fn test_load_layered_uses_project_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(PROJECT_CONFIG_FILE),
        "[display]\ntimestamp_len = 10\n",
    )
    .unwrap();

    let (config, warnings) = load_layered(None, Some(dir.path())).unwrap();
    assert_eq!(config.display.timestamp_len, 10);
    assert!(warnings.is_empty());
}

#[test]
fn test_load_layered_missing_explicit_file_is_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = load_layered(Some(&missing), None).unwrap_err();
    assert!(matches!(err, RecipeBookError::Io(_)));
}

#[test]
fn test_env_overrides() {
    let env: HashMap<&str, &str> = [
        ("RECIPEBOOK_VERBOSITY", "Verbose"),
        ("RECIPEBOOK_JSON", "true"),
        ("RECIPEBOOK_ID_PREFIX_LEN", " 5 "),
    ]
    .into_iter()
    .collect();

    let config = apply_overrides(Config::default(), |k| env.get(k).map(|v| v.to_string()));

    assert_eq!(config.output.verbosity, Verbosity::Verbose);
    assert!(config.output.json);
    assert_eq!(config.display.id_prefix_len, 5);
}

#[test]
fn test_env_overrides_ignore_invalid_values() {
    let env: HashMap<&str, &str> = [
        ("RECIPEBOOK_VERBOSITY", "loud"),
        ("RECIPEBOOK_ID_PREFIX_LEN", "eight"),
    ]
    .into_iter()
    .collect();

    let config = apply_overrides(Config::default(), |k| env.get(k).map(|v| v.to_string()));

    assert_eq!(config, Config::default());
}
