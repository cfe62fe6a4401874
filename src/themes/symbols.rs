/// Glyphs used by the builder and the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    pub lock: String,
    pub branch: String,
    pub commits_ahead: String,
    pub commits_behind: String,
    pub git_dirty: String,
    pub untracked: String,
    pub no_branch: String,
    pub separator: String,
    pub separator_thin: String,
    pub separator_right: String,
    pub separator_thin_right: String,
    pub ellipsis: String,
    pub new_line: String,
}

impl Symbols {
    /// Glyphs from a powerline-patched font.
    pub fn powerline() -> Self {
        Self {
            lock: "\u{E0A2}".to_string(),
            branch: "\u{E0A0}".to_string(),
            commits_ahead: "\u{21E1}".to_string(),
            commits_behind: "\u{21E3}".to_string(),
            git_dirty: "\u{25B2}".to_string(),
            untracked: "+".to_string(),
            no_branch: "no branch".to_string(),
            separator: "\u{E0B0}".to_string(),
            separator_thin: "\u{E0B1}".to_string(),
            separator_right: "\u{E0B2}".to_string(),
            separator_thin_right: "\u{E0B3}".to_string(),
            ellipsis: "\u{2026}".to_string(),
            new_line: "\n".to_string(),
        }
    }

    /// Plain unicode for terminals without a patched font.
    pub fn compatible() -> Self {
        Self {
            lock: "RO".to_string(),
            branch: "\u{2387}".to_string(),
            commits_ahead: "\u{2191}".to_string(),
            commits_behind: "\u{2193}".to_string(),
            git_dirty: "*".to_string(),
            untracked: "+".to_string(),
            no_branch: "no branch".to_string(),
            separator: "\u{25B6}".to_string(),
            separator_thin: "\u{276F}".to_string(),
            separator_right: "\u{25C0}".to_string(),
            separator_thin_right: "\u{276E}".to_string(),
            ellipsis: "\u{2026}".to_string(),
            new_line: "\n".to_string(),
        }
    }

    /// Short ASCII markers for exact-string assertions.
    pub fn test() -> Self {
        Self {
            lock: "L".to_string(),
            branch: "ß".to_string(),
            commits_ahead: "^".to_string(),
            commits_behind: "v".to_string(),
            git_dirty: "▲".to_string(),
            untracked: "+".to_string(),
            no_branch: "no branch".to_string(),
            separator: "->".to_string(),
            separator_thin: ">".to_string(),
            separator_right: "<-".to_string(),
            separator_thin_right: "<".to_string(),
            ellipsis: "...".to_string(),
            new_line: "\n".to_string(),
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::powerline()
    }
}

pub fn get_symbols(name: &str) -> Symbols {
    match name {
        "compatible" => Symbols::compatible(),
        "test" => Symbols::test(),
        _ => Symbols::powerline(),
    }
}
