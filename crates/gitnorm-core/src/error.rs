//! Error types shared by the normalizer and the config loader.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to normalize a Git remote URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The URL was empty or not supplied at all.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

/// Failure to locate, read, or parse `config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot resolve XDG directories: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),

    #[error("config I/O on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
