use crate::utils::debug_with_context;
use std::path::Path;

/// Probes by creating a temporary file, which is removed again on drop.
pub fn is_writable_dir(dir: &Path) -> bool {
    match tempfile::Builder::new()
        .prefix(".powerline-write-test")
        .tempfile_in(dir)
    {
        Ok(_probe) => true,
        Err(e) => {
            debug_with_context("lock", &format!("{} is not writable: {}", dir.display(), e));
            false
        }
    }
}
