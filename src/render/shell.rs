use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

/// Which half of a cell a color code applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Foreground,
    Background,
}

impl Layer {
    fn sgr_prefix(self) -> &'static str {
        match self {
            Layer::Foreground => "38",
            Layer::Background => "48",
        }
    }
}

/// Escape encoding for the target shell.
///
/// Every color change is wrapped so the shell does not count the escape bytes
/// toward the cursor position, and each variant has exactly one wrapper shape
/// that `escape_pattern` recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shell {
    #[default]
    Bash,
    Zsh,
    /// No escapes at all; resets show up as `.R`.
    Plain,
}

impl Shell {
    /// Unknown names fall back to bash.
    pub fn from_name(name: &str) -> Self {
        match name {
            "bash" => Shell::Bash,
            "zsh" => Shell::Zsh,
            "test" | "plain" => Shell::Plain,
            _ => Shell::Bash,
        }
    }

    pub fn color(self, layer: Layer, code: u8) -> String {
        let prefix = layer.sgr_prefix();
        match self {
            Shell::Bash => format!("\\[\\e[{};5;{}m\\]", prefix, code),
            Shell::Zsh => format!("%{{\x1b[{};5;{}m%}}", prefix, code),
            Shell::Plain => String::new(),
        }
    }

    pub fn reset(self) -> &'static str {
        match self {
            Shell::Bash => "\\[\\e[0m\\]",
            Shell::Zsh => "%{\x1b[0m%}",
            Shell::Plain => ".R",
        }
    }

    /// Returns the foreground to the terminal default without touching the background.
    pub fn default_foreground(self) -> &'static str {
        match self {
            Shell::Bash => "\\[\\e[39m\\]",
            Shell::Zsh => "%{\x1b[39m%}",
            Shell::Plain => "",
        }
    }

    /// Quotes `text` so prompt expansion prints it literally.
    ///
    /// Bash expands `$(..)`, backticks and backslash sequences in `PS1`, zsh
    /// expands `%` sequences. Branch and directory names are untrusted.
    pub fn escape_text(self, text: &str) -> Cow<'_, str> {
        match self {
            Shell::Bash if text.contains(['\\', '$', '`']) => {
                let mut escaped = String::with_capacity(text.len() + 8);
                for c in text.chars() {
                    if matches!(c, '\\' | '$' | '`') {
                        escaped.push('\\');
                    }
                    escaped.push(c);
                }
                Cow::Owned(escaped)
            }
            Shell::Zsh if text.contains('%') => Cow::Owned(text.replace('%', "%%")),
            _ => Cow::Borrowed(text),
        }
    }

    /// Matches one escape wrapper, or one quoted text character from
    /// `escape_text`. Scanning left to right keeps the two apart.
    pub fn escape_pattern(self) -> &'static Regex {
        static BASH: OnceLock<Regex> = OnceLock::new();
        static ZSH: OnceLock<Regex> = OnceLock::new();
        static PLAIN: OnceLock<Regex> = OnceLock::new();

        match self {
            Shell::Bash => BASH.get_or_init(|| {
                Regex::new(r"\\([\\$`])|\\\[\\e.*?\\\]").expect("bash escape pattern")
            }),
            Shell::Zsh => ZSH.get_or_init(|| Regex::new(r"%(%)|%\{.*?%\}").expect("zsh escape pattern")),
            Shell::Plain => PLAIN.get_or_init(|| Regex::new(r"\.R").expect("plain escape pattern")),
        }
    }

    /// Number of code points left once every escape wrapper is removed and
    /// quoted characters are unquoted.
    ///
    /// The plain reset `.R` can also occur in text, so plain output is only
    /// measured exactly when its text has none. The renderer counts columns
    /// while it writes and never relies on this.
    pub fn visible_width(self, rendered: &str) -> usize {
        self.escape_pattern()
            .replace_all(rendered, |caps: &Captures<'_>| {
                caps.get(1).map_or(String::new(), |quoted| quoted.as_str().to_string())
            })
            .chars()
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_shell_names() {
        assert_eq!(Shell::from_name("bash"), Shell::Bash);
        assert_eq!(Shell::from_name("zsh"), Shell::Zsh);
        assert_eq!(Shell::from_name("test"), Shell::Plain);
        assert_eq!(Shell::from_name("fish"), Shell::Bash);
    }

    #[test]
    fn bash_wraps_colors_in_non_printing_markers() {
        assert_eq!(Shell::Bash.color(Layer::Foreground, 214), "\\[\\e[38;5;214m\\]");
        assert_eq!(Shell::Bash.color(Layer::Background, 0), "\\[\\e[48;5;0m\\]");
    }

    #[test]
    fn zsh_wraps_colors_in_percent_braces() {
        assert_eq!(Shell::Zsh.color(Layer::Background, 22), "%{\x1b[48;5;22m%}");
    }

    #[test]
    fn each_template_strips_its_own_escapes() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Plain] {
            let rendered = format!(
                "{}{} ab {}c{}",
                shell.color(Layer::Background, 1),
                shell.color(Layer::Foreground, 7),
                shell.reset(),
                shell.reset()
            );
            assert_eq!(shell.visible_width(&rendered), 5, "{:?}", shell);
        }
    }

    #[test]
    fn bash_quotes_expansion_characters() {
        assert_eq!(
            Shell::Bash.escape_text("$(touch${IFS}/tmp/x)"),
            "\\$(touch\\${IFS}/tmp/x)"
        );
        assert_eq!(Shell::Bash.escape_text("`id`\\w"), "\\`id\\`\\\\w");
        assert!(matches!(Shell::Bash.escape_text("main"), Cow::Borrowed("main")));
    }

    #[test]
    fn zsh_doubles_percent_signs() {
        assert_eq!(Shell::Zsh.escape_text("100%"), "100%%");
        assert_eq!(Shell::Zsh.escape_text("$(id)"), "$(id)");
        assert_eq!(Shell::Plain.escape_text("100% $(id)"), "100% $(id)");
    }

    #[test]
    fn quoted_text_counts_once() {
        let bash = format!("{}{}", Shell::Bash.color(Layer::Foreground, 1), Shell::Bash.escape_text("a$b\\c"));
        assert_eq!(Shell::Bash.visible_width(&bash), 5);

        // text that looks like a wrapper must not be swallowed
        let zsh = format!("{}{}", Shell::Zsh.escape_text("%{x%}"), Shell::Zsh.reset());
        assert_eq!(Shell::Zsh.visible_width(&zsh), 5);
        assert_eq!(Shell::Bash.visible_width(&Shell::Bash.escape_text("\\[\\e]")), 5);
    }

    #[test]
    fn default_foreground_is_a_stripped_escape() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Plain] {
            assert_eq!(shell.visible_width(shell.default_foreground()), 0, "{:?}", shell);
        }
        assert_eq!(Shell::Bash.default_foreground(), "\\[\\e[39m\\]");
    }

    #[test]
    fn width_counts_code_points_not_bytes() {
        assert_eq!(Shell::Plain.visible_width("\u{E0B0}ß…"), 3);
    }
}
