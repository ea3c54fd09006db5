use crate::error::{GitSemverError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Resolved configuration for a single derivation run.
///
/// Built once at startup from CLI/environment inputs layered over an
/// optional TOML file, then passed by reference into every component;
/// nothing reads configuration ambiently after this point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub branch: String,
    pub tag_prefix: String,
    pub major_pattern: String,
    pub minor_pattern: String,
    pub main_format: String,
    pub increment_format: String,
    pub increment_delimiter: String,
    pub change_path: Option<String>,
}

/// One layer of partial configuration: either the CLI/environment inputs or
/// the contents of a `gitsemver.toml` file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ConfigOverlay {
    pub branch: Option<String>,
    pub tag_prefix: Option<String>,
    pub major_pattern: Option<String>,
    pub minor_pattern: Option<String>,
    pub main_format: Option<String>,
    pub increment_format: Option<String>,
    pub increment_delimiter: Option<String>,
    pub change_path: Option<String>,
}

fn default_main_format() -> String {
    "${major}.${minor}.${patch}".to_string()
}

fn default_increment_format() -> String {
    "${increment}".to_string()
}

impl Config {
    /// Merge CLI/environment inputs over file contents and defaults.
    ///
    /// Missing required inputs and malformed templates fail here, before
    /// any git interaction is attempted.
    pub fn resolve(cli: ConfigOverlay, file: ConfigOverlay) -> Result<Config> {
        let config = Config {
            branch: cli.branch.or(file.branch).ok_or_else(|| missing("branch"))?,
            tag_prefix: cli.tag_prefix.or(file.tag_prefix).unwrap_or_default(),
            major_pattern: cli
                .major_pattern
                .or(file.major_pattern)
                .ok_or_else(|| missing("major_pattern"))?,
            minor_pattern: cli
                .minor_pattern
                .or(file.minor_pattern)
                .ok_or_else(|| missing("minor_pattern"))?,
            main_format: cli
                .main_format
                .or(file.main_format)
                .unwrap_or_else(default_main_format),
            increment_format: cli
                .increment_format
                .or(file.increment_format)
                .unwrap_or_else(default_increment_format),
            increment_delimiter: cli
                .increment_delimiter
                .or(file.increment_delimiter)
                .ok_or_else(|| missing("increment_delimiter"))?,
            change_path: cli.change_path.or(file.change_path),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.major_pattern.is_empty() {
            return Err(GitSemverError::config("major_pattern must not be empty"));
        }
        if self.minor_pattern.is_empty() {
            return Err(GitSemverError::config("minor_pattern must not be empty"));
        }
        if self.increment_delimiter.is_empty() {
            return Err(GitSemverError::config(
                "increment_delimiter must not be empty",
            ));
        }

        // major/minor/patch must always resolve; a main format missing one
        // of them would silently drop a version component
        for placeholder in ["${major}", "${minor}", "${patch}"] {
            if !self.main_format.contains(placeholder) {
                return Err(GitSemverError::config(format!(
                    "main_format must contain the {} placeholder",
                    placeholder
                )));
            }
        }

        Ok(())
    }
}

fn missing(field: &str) -> GitSemverError {
    GitSemverError::config(format!(
        "Missing required input '{field}' (pass --{flag}, set INPUT_{env}, or add it to gitsemver.toml)",
        flag = field.replace('_', "-"),
        env = field.to_uppercase(),
    ))
}

/// Loads the configuration file layer.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitsemver.toml` in current directory
/// 3. `gitsemver.toml` in the user config directory
/// 4. Empty layer if no file found
pub fn load_config_file(config_path: Option<&str>) -> Result<ConfigOverlay> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitsemver.toml").exists() {
        fs::read_to_string("./gitsemver.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("gitsemver.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(ConfigOverlay::default());
        }
    } else {
        return Ok(ConfigOverlay::default());
    };

    toml::from_str(&config_str)
        .map_err(|e| GitSemverError::config(format!("Invalid configuration file: {}", e)))
}
