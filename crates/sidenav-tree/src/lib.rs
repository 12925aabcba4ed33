//! Filesystem-driven sidebar navigation for documentation sites.
//!
//! This crate provides:
//! - [`build`] / [`SidebarBuilder`]: walk a content directory into an ordered [`Entry`] tree
//! - [`format_label`]: the filename-to-label rules used for every entry
//! - [`render`]: serialize a tree to JSON or YAML for the site configuration
//! - [`watch()`]: debounced change notification for rebuild-on-save workflows
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use sidenav_tree::{OutputFormat, build, render};
//!
//! let sidebar = build("src/content/docs")?;
//! let json = render(&sidebar, OutputFormat::Json, true)?;
//! # Ok(())
//! # }
//! ```

mod builder;
pub mod collate;
mod debouncer;
mod entry;
mod error;
mod label;
mod render;
pub mod watch;

pub use builder::{SidebarBuilder, build};
pub use entry::Entry;
pub use error::{RenderError, SidebarError, WatchError};
pub use label::format_label;
pub use render::{OutputFormat, UnknownFormat, render};
pub use watch::{Change, ChangeReceiver, WatchHandle, watch};
