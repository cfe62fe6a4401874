pub mod user;
pub mod host;
pub mod path;
pub mod git;
pub mod exit_code;
pub mod clock;

pub use host::*;
pub use path::*;
pub use git::*;

use crate::themes::{Color, ColorPair, Symbols, Theme};

/// One colored block of the prompt.
///
/// Text and colors are plain values; escape codes are only ever produced by the
/// renderer, so a built segment is the same for every shell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Segment {
    /// Sub-parts drawn with a thin separator between them. No parts (or only
    /// empty ones) means the segment is invisible.
    pub parts: Vec<String>,
    pub bg: Color,
    pub fg: Color,
    /// Foreground of the thin separator between `parts`.
    pub separator_fg: Color,
}

impl Segment {
    pub fn new(text: impl Into<String>, colors: ColorPair) -> Self {
        let text = text.into();
        let parts = if text.is_empty() { Vec::new() } else { vec![text] };
        Self {
            parts,
            bg: colors.bg,
            fg: colors.fg,
            separator_fg: colors.fg,
        }
    }

    pub fn with_parts(parts: Vec<String>, colors: ColorPair, separator_fg: Color) -> Self {
        Self {
            parts,
            bg: colors.bg,
            fg: colors.fg,
            separator_fg,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(|part| part.is_empty())
    }

    /// Parts that actually produce output.
    pub fn visible_parts(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(String::as_str).filter(|part| !part.is_empty())
    }
}

/// Turns raw facts into segments. Holds presentation policy only; never does I/O.
pub struct SegmentBuilder<'a> {
    theme: &'a Theme,
    symbols: &'a Symbols,
    hosts: HostPatterns,
    path: PathOptions,
}

impl<'a> SegmentBuilder<'a> {
    pub fn new(theme: &'a Theme, symbols: &'a Symbols) -> Self {
        Self {
            theme,
            symbols,
            hosts: HostPatterns::default(),
            path: PathOptions::default(),
        }
    }

    pub fn with_host_patterns(mut self, hosts: HostPatterns) -> Self {
        self.hosts = hosts;
        self
    }

    pub fn with_path_options(mut self, path: PathOptions) -> Self {
        self.path = path;
        self
    }
}
