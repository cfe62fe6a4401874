use crate::segments::GitInfo;
use crate::utils::debug_with_context;
use regex::Regex;
use std::path::Path;
use std::process::Command;
use std::sync::OnceLock;

const DETACHED_HEAD: &str = "(detached)";

/// Git state for `cwd`. Any failure means "not a repository".
pub fn git_info(cwd: &Path) -> GitInfo {
    // Skip spawning git at all outside a work tree.
    if gix::discover(cwd).is_err() {
        debug_with_context("git", "Not in a git repository");
        return GitInfo::not_a_repository();
    }

    let Some(status) = run_git(cwd, &["status", "--porcelain=v2", "--branch", "--ignore-submodules"]) else {
        return GitInfo::not_a_repository();
    };

    let mut info = parse_status(&status);
    info.tag = run_git(cwd, &["describe", "--tags", "--exact-match"]).and_then(|out| parse_tag(&out));

    debug_with_context(
        "git",
        &format!(
            "branch={:?}, ahead={}, behind={}, staged={}, untracked={}, tag={:?}",
            info.branch, info.commits_ahead, info.commits_behind, info.staged, info.untracked, info.tag
        ),
    );
    info
}

/// Stdout of a successful git invocation.
fn run_git(cwd: &Path, args: &[&str]) -> Option<String> {
    match Command::new("git").args(args).current_dir(cwd).output() {
        Ok(output) if output.status.success() => Some(String::from_utf8_lossy(&output.stdout).into_owned()),
        Ok(output) => {
            debug_with_context("git", &format!("git {} exited with {}", args.join(" "), output.status));
            None
        }
        Err(e) => {
            debug_with_context("git", &format!("Failed to run git: {}", e));
            None
        }
    }
}

fn ahead_behind_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\+(\d+) -(\d+)$").expect("ahead/behind pattern"))
}

/// Parses `git status --porcelain=v2 --branch` output.
pub fn parse_status(stdout: &str) -> GitInfo {
    let mut info = GitInfo {
        no_git: false,
        ..GitInfo::not_a_repository()
    };

    for line in stdout.lines() {
        if let Some(head) = line.strip_prefix("# branch.head ") {
            if head != DETACHED_HEAD {
                info.branch = Some(head.to_string());
            }
        } else if let Some(ab) = line.strip_prefix("# branch.ab ") {
            if let Some(caps) = ahead_behind_pattern().captures(ab) {
                info.commits_ahead = caps[1].parse().unwrap_or(0);
                info.commits_behind = caps[2].parse().unwrap_or(0);
            }
        } else if line.starts_with("1 ") || line.starts_with("2 ") || line.starts_with("u ") {
            info.staged = true;
        } else if line.starts_with("? ") {
            info.untracked = true;
        }
    }

    info
}

pub fn parse_tag(stdout: &str) -> Option<String> {
    let tag = stdout.trim();
    if tag.is_empty() {
        None
    } else {
        Some(tag.to_string())
    }
}
