use crate::config::{Config, SegmentConfig};
use crate::error::SourceError;
use crate::render::{PromptLines, Renderer, Shell};
use crate::segments::{GitInfo, HostPatterns, PathOptions, SegmentBuilder};
use crate::sources;
use crate::themes::{get_symbols, get_theme};
use crate::utils::{debug, debug_with_context};
use chrono::{Local, NaiveDateTime};

/// Everything a prompt is built from, gathered once per invocation.
#[derive(Debug, Clone)]
pub struct PromptFacts {
    pub username: String,
    pub hostname: String,
    pub path: Vec<String>,
    pub writable: bool,
    pub git: GitInfo,
    pub exit_code: String,
    pub now: NaiveDateTime,
}

impl PromptFacts {
    /// Only an unresolvable working directory is an error.
    pub fn gather(config: &Config, exit_code: &str) -> Result<Self, SourceError> {
        let home = sources::home_dir();
        let (cwd, path) = sources::current_dir_parts(home.as_deref())?;

        let hostname = sources::hostname().unwrap_or_else(|e| {
            debug_with_context("env", &e.to_string());
            String::new()
        });
        let writable = !config.segments.lock.enabled || sources::is_writable_dir(&cwd);
        let git = if config.segments.git.enabled {
            sources::git_info(&cwd)
        } else {
            GitInfo::not_a_repository()
        };

        Ok(Self {
            username: sources::username(),
            hostname,
            path,
            writable,
            git,
            exit_code: exit_code.to_string(),
            now: Local::now().naive_local(),
        })
    }
}

/// Lays out enabled segments: user, host, path and lock on the left, git and
/// clock on the right, exit code and shell marker below.
pub fn build_lines(builder: &SegmentBuilder<'_>, segments: &SegmentConfig, facts: &PromptFacts) -> PromptLines {
    let mut lines = PromptLines::new();

    if segments.user.enabled {
        lines.append_left(builder.user_segment(&facts.username));
    }
    if segments.host.enabled {
        lines.append_left(builder.host_segment(&facts.hostname));
    }
    if segments.path.enabled {
        lines.append_left(builder.path_segment(&facts.path));
    }
    if segments.lock.enabled {
        lines.append_left(builder.lock_segment(facts.writable));
    }
    if segments.git.enabled {
        lines.append_right(builder.git_segment(&facts.git));
    }
    if segments.clock.enabled {
        lines.append_right(builder.clock_segment(facts.now));
    }
    if segments.exit_code.enabled {
        lines.append_down(builder.exit_code_segment(&facts.exit_code));
    }
    if segments.shell.enabled {
        lines.append_down(builder.shell_segment(&facts.username));
    }

    lines
}

/// Builds and renders the full prompt string for `shell`.
pub fn generate_prompt(config: &Config, shell: Shell, facts: &PromptFacts, width: &str) -> String {
    let mut theme = get_theme(&config.theme);
    if let Some(colors) = &config.colors {
        theme = theme.with_overrides(colors);
    }
    let symbols = get_symbols(&config.symbols);

    let builder = SegmentBuilder::new(&theme, &symbols)
        .with_host_patterns(HostPatterns::from_config(config.host_patterns.as_ref()))
        .with_path_options(PathOptions::from(&config.segments.path));
    let lines = build_lines(&builder, &config.segments, facts);
    debug(&format!(
        "Rendering for {:?}: width={:?}, theme={}, symbols={}",
        shell, width, config.theme, config.symbols
    ));

    Renderer::new(shell, &symbols)
        .with_min_padding(config.min_padding)
        .render(&lines, width)
}
