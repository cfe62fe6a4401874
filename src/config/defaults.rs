use crate::config::*;

/// Spaces between the left and right groups when the width is unknown or too small.
pub const DEFAULT_MIN_PADDING: usize = 5;

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            symbols: "powerline".to_string(),
            segments: SegmentConfig::default(),
            colors: None,
            host_patterns: None,
            min_padding: DEFAULT_MIN_PADDING,
        }
    }
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            user: ToggleConfig::default(),
            host: ToggleConfig::default(),
            path: PathConfig::default(),
            lock: ToggleConfig::default(),
            git: ToggleConfig::default(),
            clock: ToggleConfig::default(),
            exit_code: ToggleConfig::default(),
            shell: ToggleConfig::default(),
        }
    }
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            style: PathStyle::Plain,
            max_depth: None,
        }
    }
}
