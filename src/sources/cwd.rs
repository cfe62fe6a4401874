use crate::error::SourceError;
use crate::segments::HOME_MARKER;
use std::env;
use std::path::{Path, PathBuf};

/// The absolute working directory and its display components.
pub fn current_dir_parts(home: Option<&Path>) -> Result<(PathBuf, Vec<String>), SourceError> {
    let cwd = env::current_dir().map_err(SourceError::CurrentDir)?;
    let parts = split_path(&cwd, home);
    Ok((cwd, parts))
}

/// Splits `path` on `/`, replacing a leading `home` with `~`.
///
/// An absolute path keeps its empty first component so that joining the parts
/// with `/` gives the path back. The root directory is the single part `/`.
pub fn split_path(path: &Path, home: Option<&Path>) -> Vec<String> {
    let display = match home.and_then(|home| path.strip_prefix(home).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => HOME_MARKER.to_string(),
        Some(rest) => format!("{}/{}", HOME_MARKER, rest.to_string_lossy()),
        None => path.to_string_lossy().into_owned(),
    };

    let trimmed = display.trim_end_matches('/');
    if trimmed.is_empty() {
        return vec!["/".to_string()];
    }
    trimmed.split('/').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_keep_leading_empty_component() {
        let parts = split_path(Path::new("/home/username/dirname"), None);
        assert_eq!(parts, vec!["", "home", "username", "dirname"]);
    }

    #[test]
    fn home_prefix_becomes_tilde() {
        let home = Path::new("/home/username");
        assert_eq!(split_path(Path::new("/home/username/dirname"), Some(home)), vec!["~", "dirname"]);
        assert_eq!(split_path(Path::new("/home/username"), Some(home)), vec!["~"]);
    }

    #[test]
    fn home_prefix_only_matches_whole_components() {
        let home = Path::new("/home/user");
        assert_eq!(
            split_path(Path::new("/home/username"), Some(home)),
            vec!["", "home", "username"]
        );
    }

    #[test]
    fn root_directory_is_a_single_slash() {
        assert_eq!(split_path(Path::new("/"), None), vec!["/"]);
    }
}
