use git_semver::config::{load_config_file, Config, ConfigOverlay};
use std::fs;

#[test]
fn test_load_custom_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gitsemver.toml");
    fs::write(
        &path,
        r#"
        branch = "main"
        tag_prefix = "v"
        major_pattern = "BREAKING CHANGE:"
        minor_pattern = "feat:"
        increment_delimiter = "dev"
        change_path = "src"
        "#,
    )
    .unwrap();

    let file = load_config_file(path.to_str()).unwrap();
    assert_eq!(file.branch.as_deref(), Some("main"));
    assert_eq!(file.change_path.as_deref(), Some("src"));

    let config = Config::resolve(ConfigOverlay::default(), file).unwrap();
    assert_eq!(config.branch, "main");
    assert_eq!(config.main_format, "${major}.${minor}.${patch}");
}

#[test]
fn test_load_missing_custom_path_fails() {
    assert!(load_config_file(Some("/nonexistent/gitsemver.toml")).is_err());
}

#[test]
fn test_invalid_toml_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gitsemver.toml");
    fs::write(&path, "branch = [not toml").unwrap();

    let err = load_config_file(path.to_str()).unwrap_err();
    assert!(err.to_string().contains("Configuration error"));
}

#[test]
fn test_cli_layer_overrides_file_layer() {
    let cli = ConfigOverlay {
        branch: Some("release".to_string()),
        major_pattern: Some("BREAKING CHANGE:".to_string()),
        minor_pattern: Some("feat:".to_string()),
        increment_delimiter: Some("dev".to_string()),
        ..ConfigOverlay::default()
    };
    let file = ConfigOverlay {
        branch: Some("main".to_string()),
        tag_prefix: Some("v".to_string()),
        ..ConfigOverlay::default()
    };

    let config = Config::resolve(cli, file).unwrap();
    assert_eq!(config.branch, "release");
    assert_eq!(config.tag_prefix, "v");
}

#[test]
fn test_missing_required_inputs_name_every_channel() {
    let err = Config::resolve(ConfigOverlay::default(), ConfigOverlay::default()).unwrap_err();
    let msg = err.to_string();

    assert!(msg.contains("branch"));
    assert!(msg.contains("--branch"));
    assert!(msg.contains("INPUT_BRANCH"));
    assert!(msg.contains("gitsemver.toml"));
}
