//! `sidenav watch` command implementation.

use clap::Args;
use sidenav_config::Config;
use sidenav_tree::{Entry, SidebarBuilder};

use super::build::summary;
use super::common::{CommonArgs, write_sidebar};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the watch command.
#[derive(Args)]
pub(crate) struct WatchArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Quiet period in milliseconds before rebuilding (overrides config).
    #[arg(long)]
    debounce_ms: Option<u64>,
}

impl WatchArgs {
    /// Execute the watch command.
    ///
    /// Builds once, then rebuilds after every burst of changes until
    /// interrupted. Rebuild failures are reported and watching continues.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the initial build fails, or
    /// the watcher cannot be started.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(self.debounce_ms)?;
        let source_dir = &config.docs_resolved.source_dir;
        let builder = SidebarBuilder::new(source_dir);

        let mut current = builder.build()?;
        write_sidebar(&config.output_resolved, &current)?;
        report_written(&output, &config, &current);

        let (changes, _handle) = sidenav_tree::watch(source_dir, config.watch.debounce())?;
        output.info(&format!(
            "Watching {} (debounce {}ms)",
            source_dir.display(),
            config.watch.debounce_ms
        ));

        for change in changes.iter() {
            tracing::info!(paths = change.paths.len(), "Content changed");
            match builder.build() {
                Ok(sidebar) if sidebar == current => output.muted("Sidebar unchanged"),
                Ok(sidebar) => {
                    if publish(&output, &config, &sidebar) {
                        current = sidebar;
                    }
                }
                Err(err) => output.error(&format!("Error: {err}")),
            }
        }

        Ok(())
    }
}

/// Write a rebuilt sidebar, reporting failures instead of stopping the watch.
///
/// Returns whether the sidebar was written. A failed write leaves the
/// previous sidebar current, so the next change retries it.
fn publish(output: &Output, config: &Config, sidebar: &[Entry]) -> bool {
    match write_sidebar(&config.output_resolved, sidebar) {
        Ok(()) => {
            report_written(output, config, sidebar);
            true
        }
        Err(err) => {
            tracing::warn!(error = %err, "Failed to write sidebar");
            output.error(&format!("Error: {err}"));
            false
        }
    }
}

fn report_written(output: &Output, config: &Config, sidebar: &[Entry]) {
    let destination = config
        .output_resolved
        .path
        .as_ref()
        .map_or_else(|| "stdout".to_owned(), |p| p.display().to_string());
    output.success(&format!("Wrote {} to {destination}", summary(sidebar)));
}
