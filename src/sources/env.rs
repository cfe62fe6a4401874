use crate::error::SourceError;
use crate::utils::debug_with_context;
use std::env;
use std::path::PathBuf;

/// `$USER`, then `$LOGNAME`; empty when neither is set.
pub fn username() -> String {
    env::var("USER")
        .or_else(|_| env::var("LOGNAME"))
        .unwrap_or_else(|_| {
            debug_with_context("env", "Neither USER nor LOGNAME is set");
            String::new()
        })
}

pub fn hostname() -> Result<String, SourceError> {
    let name = ::hostname::get().map_err(SourceError::Hostname)?;
    Ok(name.to_string_lossy().into_owned())
}

/// `$HOME` when set and non-empty, otherwise the platform's notion of it.
pub fn home_dir() -> Option<PathBuf> {
    match env::var_os("HOME") {
        Some(home) if !home.is_empty() => Some(PathBuf::from(home)),
        _ => {
            let fallback = dirs::home_dir();
            if fallback.is_none() {
                debug_with_context("env", "No home directory, paths will not use ~");
            }
            fallback
        }
    }
}
