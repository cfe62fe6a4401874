use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while gathering ambient state.
#[derive(Debug, Error)]
pub enum SourceError {
    /// No prompt can be drawn without a working directory.
    #[error("cannot resolve the current working directory")]
    CurrentDir(#[source] io::Error),

    #[error("cannot read the hostname")]
    Hostname(#[source] io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
