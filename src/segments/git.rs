use crate::segments::{Segment, SegmentBuilder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitInfo {
    /// `None` when HEAD is detached or unknown.
    pub branch: Option<String>,
    pub commits_ahead: u32,
    pub commits_behind: u32,
    /// Uncommitted changes, staged or not.
    pub staged: bool,
    pub untracked: bool,
    pub tag: Option<String>,
    pub no_git: bool,
}

impl GitInfo {
    pub fn not_a_repository() -> Self {
        Self {
            branch: None,
            commits_ahead: 0,
            commits_behind: 0,
            staged: false,
            untracked: false,
            tag: None,
            no_git: true,
        }
    }

    /// A clean repository on `branch`.
    pub fn on_branch(branch: impl Into<String>) -> Self {
        Self {
            branch: Some(branch.into()),
            no_git: false,
            ..Self::not_a_repository()
        }
    }
}

impl Default for GitInfo {
    fn default() -> Self {
        Self::not_a_repository()
    }
}

impl SegmentBuilder<'_> {
    pub fn git_segment(&self, info: &GitInfo) -> Segment {
        if info.no_git {
            return Segment::empty();
        }

        let symbols = self.symbols;
        let branch = info
            .branch
            .as_deref()
            .filter(|branch| !branch.is_empty())
            .unwrap_or(symbols.no_branch.as_str());
        let mut text = format!("{} {}", symbols.branch, branch);

        if let Some(tag) = info.tag.as_deref().filter(|tag| !tag.is_empty()) {
            text.push_str(&format!(" \"{}\"", tag));
        }
        if info.commits_behind > 0 {
            text.push_str(&format!(" {}{}", info.commits_behind, symbols.commits_behind));
        }
        if info.commits_ahead > 0 {
            text.push_str(&format!(" {}{}", info.commits_ahead, symbols.commits_ahead));
        }
        if info.untracked {
            text.push_str(&format!(" {}", symbols.untracked));
        }
        if info.staged {
            text.push_str(&format!(" {}", symbols.git_dirty));
        }

        let colors = if info.staged {
            self.theme.git.dirty
        } else {
            self.theme.git.clean
        };
        Segment::new(text, colors)
    }
}
