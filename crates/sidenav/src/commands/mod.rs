//! CLI command implementations.

pub(crate) mod build;
mod common;
pub(crate) mod watch;

pub(crate) use build::BuildArgs;
pub(crate) use watch::WatchArgs;
