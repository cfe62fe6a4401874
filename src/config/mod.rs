pub mod loader;
pub mod defaults;

pub use loader::*;
pub use defaults::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub theme: String,
    pub symbols: String,
    pub segments: SegmentConfig,
    pub colors: Option<HashMap<String, ThemeColors>>,
    pub host_patterns: Option<HostPatternConfig>,
    pub min_padding: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SegmentConfig {
    pub user: ToggleConfig,
    pub host: ToggleConfig,
    pub path: PathConfig,
    pub lock: ToggleConfig,
    pub git: ToggleConfig,
    pub clock: ToggleConfig,
    pub exit_code: ToggleConfig,
    pub shell: ToggleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PathConfig {
    pub enabled: bool,
    pub style: PathStyle,
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// One part, components joined by `/`.
    #[default]
    Plain,
    /// One part per component, drawn with thin separators.
    Split,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: Option<u8>,
    pub fg: Option<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostPatternConfig {
    pub desktop: Option<String>,
    pub production: Option<String>,
    pub special: Option<String>,
}
