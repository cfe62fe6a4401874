pub mod symbols;

pub use symbols::*;

use crate::config::ThemeColors;
use crate::utils::debug_with_context;
use std::collections::HashMap;

/// A 256-color palette index, or the terminal's own default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Indexed(u8),
}

impl From<Option<u8>> for Color {
    fn from(code: Option<u8>) -> Self {
        code.map_or(Color::Default, Color::Indexed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorPair {
    pub bg: Color,
    pub fg: Color,
}

impl ColorPair {
    pub const fn new(bg: u8, fg: u8) -> Self {
        Self {
            bg: Color::Indexed(bg),
            fg: Color::Indexed(fg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostColors {
    pub desktop: ColorPair,
    pub production: ColorPair,
    pub special: ColorPair,
    pub other: ColorPair,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitColors {
    pub clean: ColorPair,
    pub dirty: ColorPair,
}

/// Color roles for every segment kind. Selected once at startup and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub user: ColorPair,
    pub root: ColorPair,
    pub host: HostColors,
    pub path: ColorPair,
    pub home: ColorPair,
    /// Foreground of the thin separator between path components.
    pub path_separator: Color,
    pub git: GitColors,
    pub lock: ColorPair,
    pub error: ColorPair,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            user: ColorPair::new(22, 7),
            root: ColorPair::new(1, 7),
            host: HostColors {
                desktop: ColorPair::new(34, 0),
                production: ColorPair::new(1, 7),
                special: ColorPair::new(14, 0),
                other: ColorPair::new(11, 0),
            },
            path: ColorPair::new(0, 214),
            home: ColorPair::new(82, 0),
            path_separator: Color::Indexed(244),
            git: GitColors {
                clean: ColorPair::new(0, 10),
                dirty: ColorPair::new(0, 202),
            },
            lock: ColorPair::new(1, 7),
            error: ColorPair::new(1, 7),
        }
    }

    pub fn light() -> Self {
        Self {
            user: ColorPair::new(153, 0),
            root: ColorPair::new(196, 15),
            host: HostColors {
                desktop: ColorPair::new(120, 0),
                production: ColorPair::new(196, 15),
                special: ColorPair::new(117, 0),
                other: ColorPair::new(229, 0),
            },
            path: ColorPair::new(254, 94),
            home: ColorPair::new(150, 0),
            path_separator: Color::Indexed(246),
            git: GitColors {
                clean: ColorPair::new(254, 28),
                dirty: ColorPair::new(254, 166),
            },
            lock: ColorPair::new(196, 15),
            error: ColorPair::new(196, 15),
        }
    }

    /// Replace individual roles with colors from the config file.
    pub fn with_overrides(mut self, overrides: &HashMap<String, ThemeColors>) -> Self {
        for (role, colors) in overrides {
            let pair = ColorPair {
                bg: colors.bg.into(),
                fg: colors.fg.into(),
            };
            match self.role_mut(role) {
                Some(slot) => *slot = pair,
                None => debug_with_context("theme", &format!("Ignoring unknown color role: {}", role)),
            }
        }
        self
    }

    fn role_mut(&mut self, role: &str) -> Option<&mut ColorPair> {
        let slot = match role {
            "user" => &mut self.user,
            "root" => &mut self.root,
            "hostDesktop" => &mut self.host.desktop,
            "hostProduction" => &mut self.host.production,
            "hostSpecial" => &mut self.host.special,
            "hostOther" => &mut self.host.other,
            "path" => &mut self.path,
            "home" => &mut self.home,
            "gitClean" => &mut self.git.clean,
            "gitDirty" => &mut self.git.dirty,
            "lock" => &mut self.lock,
            "error" => &mut self.error,
            _ => return None,
        };
        Some(slot)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

pub fn get_theme(name: &str) -> Theme {
    match name {
        "dark" => Theme::dark(),
        "light" => Theme::light(),
        _ => Theme::dark(), // fallback
    }
}
