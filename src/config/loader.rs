use crate::config::Config;
use crate::error::ConfigError;
use crate::utils::debug_with_context;
use anyhow::Result;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const THEME_ENV: &str = "POWERLINE_SHELL_THEME";
pub const SYMBOLS_ENV: &str = "POWERLINE_SHELL_SYMBOLS";
pub const CONFIG_ENV: &str = "POWERLINE_SHELL_CONFIG";

/// Load configuration with priority: Env vars > Config files > Defaults.
/// CLI flags are applied on top by the caller.
pub fn load_config(config_path: Option<PathBuf>) -> Result<Config> {
    let mut config = match config_path {
        Some(path) => load_config_file(&path)?,
        None => load_config_from_default_locations(),
    };

    apply_env_overrides(&mut config, |key| env::var(key).ok());

    Ok(config)
}

/// Load configuration from default locations
fn load_config_from_default_locations() -> Config {
    for path in get_config_search_paths() {
        if path.exists() {
            match load_config_file(&path) {
                Ok(config) => return config,
                Err(e) => debug_with_context("config", &format!("Skipping config: {}", e)),
            }
        }
    }

    Config::default()
}

/// Get list of paths to search for configuration files
fn get_config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(".powerline-shell.json")];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("powerline-shell").join("config.json"));
    }
    if let Some(home) = dirs::home_dir() {
        let dotted = home.join(".config").join("powerline-shell").join("config.json");
        if !paths.contains(&dotted) {
            paths.push(dotted);
        }
    }

    paths
}

/// Load configuration from a specific file
pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut config: Config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    // the two groups of the first row must never touch
    config.min_padding = config.min_padding.max(1);

    Ok(config)
}

/// Apply environment variable overrides to configuration
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(theme) = lookup(THEME_ENV) {
        config.theme = theme;
    }

    if let Some(symbols) = lookup(SYMBOLS_ENV) {
        config.symbols = symbols;
    }
}
