//! Error types.

use std::path::{Path, PathBuf};

/// Sidebar build error.
///
/// Any failure aborts the whole build; no partial tree is returned.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// Content root does not exist.
    #[error("Content directory not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Content root exists but is not a directory.
    #[error("Content path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    /// Reading a directory or one of its entries failed.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Directory being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl SidebarError {
    /// Wrap an I/O error with the directory it came from.
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Serialization error.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Watcher setup error.
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    /// Content root does not exist or is not a directory.
    #[error("Cannot watch {}: not a directory", .0.display())]
    NotADirectory(PathBuf),
    /// The platform watcher failed.
    #[error("Watcher error: {0}")]
    Notify(#[from] notify::Error),
}
