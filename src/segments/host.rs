use crate::config::HostPatternConfig;
use crate::segments::{Segment, SegmentBuilder};
use crate::utils::debug_with_context;
use regex::Regex;

pub const DEFAULT_DESKTOP_PATTERN: &str = r"-desktop$";
pub const DEFAULT_PRODUCTION_PATTERN: &str = r"(^|[-.])(prod|prd)([-.0-9]|$)";
pub const DEFAULT_SPECIAL_PATTERN: &str = r"^(ci|build|jenkins|runner)([-.0-9]|$)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    Desktop,
    Production,
    Special,
    Other,
}

/// Hostname classifiers, checked desktop, then production, then special.
#[derive(Debug, Clone)]
pub struct HostPatterns {
    desktop: Regex,
    production: Regex,
    special: Regex,
}

impl HostPatterns {
    pub fn from_config(config: Option<&HostPatternConfig>) -> Self {
        let config = config.cloned().unwrap_or_default();
        Self {
            desktop: compile_or_default("desktop", config.desktop.as_deref(), DEFAULT_DESKTOP_PATTERN),
            production: compile_or_default(
                "production",
                config.production.as_deref(),
                DEFAULT_PRODUCTION_PATTERN,
            ),
            special: compile_or_default("special", config.special.as_deref(), DEFAULT_SPECIAL_PATTERN),
        }
    }

    pub fn classify(&self, hostname: &str) -> HostKind {
        if self.desktop.is_match(hostname) {
            HostKind::Desktop
        } else if self.production.is_match(hostname) {
            HostKind::Production
        } else if self.special.is_match(hostname) {
            HostKind::Special
        } else {
            HostKind::Other
        }
    }
}

impl Default for HostPatterns {
    fn default() -> Self {
        Self::from_config(None)
    }
}

fn compile_or_default(role: &str, pattern: Option<&str>, default: &str) -> Regex {
    if let Some(pattern) = pattern {
        match Regex::new(pattern) {
            Ok(regex) => return regex,
            Err(e) => debug_with_context(
                "host",
                &format!("Invalid {} pattern {:?}, using default: {}", role, pattern, e),
            ),
        }
    }
    Regex::new(default).expect("built-in host pattern is valid")
}

impl SegmentBuilder<'_> {
    pub fn host_segment(&self, hostname: &str) -> Segment {
        let colors = match self.hosts.classify(hostname) {
            HostKind::Desktop => self.theme.host.desktop,
            HostKind::Production => self.theme.host.production,
            HostKind::Special => self.theme.host.special,
            HostKind::Other => self.theme.host.other,
        };
        Segment::new(hostname, colors)
    }
}
