//! CLI error types.

use sidenav_config::ConfigError;
use sidenav_tree::{RenderError, SidebarError, WatchError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Sidebar(#[from] SidebarError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Watch(#[from] WatchError),
}
