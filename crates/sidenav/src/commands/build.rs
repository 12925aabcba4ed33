//! `sidenav build` command implementation.

use std::time::Instant;

use clap::Args;
use sidenav_tree::{Entry, SidebarBuilder};

use super::common::{CommonArgs, write_sidebar};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the content directory cannot
    /// be walked, or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(None)?;

        let start = Instant::now();
        let sidebar = SidebarBuilder::new(&config.docs_resolved.source_dir).build()?;
        tracing::info!(elapsed = ?start.elapsed(), "Sidebar build finished");

        write_sidebar(&config.output_resolved, &sidebar)?;

        if let Some(path) = &config.output_resolved.path {
            output.success(&format!(
                "Wrote {} ({}) to {}",
                summary(&sidebar),
                config.output_resolved.format,
                path.display()
            ));
        }

        Ok(())
    }
}

/// Human-readable entry count, e.g. "3 groups, 12 documents".
pub(crate) fn summary(sidebar: &[Entry]) -> String {
    fn count_groups(entries: &[Entry]) -> usize {
        entries
            .iter()
            .filter_map(Entry::items)
            .map(|items| 1 + count_groups(items))
            .sum()
    }

    let groups = count_groups(sidebar);
    let documents: usize = sidebar.iter().map(Entry::leaf_count).sum();
    format!(
        "{groups} {}, {documents} {}",
        if groups == 1 { "group" } else { "groups" },
        if documents == 1 { "document" } else { "documents" }
    )
}
