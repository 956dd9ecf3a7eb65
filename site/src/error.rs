//! Errors at the crate's I/O boundary. Rendering itself cannot fail.

use std::path::PathBuf;

/// Error type for config loading, page writing and the asset audit.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Reading or writing a file failed.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `site.toml` is not valid TOML or has a field of the wrong type.
    #[error("failed to parse config {}: {source}", path.display())]
    Config {
        /// Config file path
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A strict asset audit found files absent from the public directory.
    #[error("{} expected asset(s) missing: {}", missing.len(), missing.join(", "))]
    MissingAssets {
        /// Public URLs of the absent files
        missing: Vec<String>,
    },
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
