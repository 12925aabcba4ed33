//! Arguments and output handling shared by all commands.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use sidenav_config::{CliSettings, Config, OutputConfig};
use sidenav_tree::{Entry, OutputFormat, render};

use crate::error::CliError;

/// Options accepted by every command.
#[derive(Args)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover sidenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory to walk (overrides config).
    #[arg(short, long, env = "SIDENAV_SOURCE_DIR")]
    source_dir: Option<PathBuf>,

    /// Write the sidebar to this file instead of stdout (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: json or yaml (overrides config).
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Emit single-line JSON.
    #[arg(long)]
    compact: bool,

    /// Enable verbose output (show build timing and skipped entries).
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// CLI overrides for the loaded configuration.
    fn cli_settings(&self, debounce_ms: Option<u64>) -> CliSettings {
        CliSettings {
            source_dir: self.source_dir.clone(),
            output: self.output.clone(),
            format: self.format,
            pretty: self.compact.then_some(false),
            debounce_ms,
        }
    }

    /// Load configuration with these arguments applied on top.
    pub(crate) fn load_config(&self, debounce_ms: Option<u64>) -> Result<Config, CliError> {
        let settings = self.cli_settings(debounce_ms);
        Ok(Config::load(self.config.as_deref(), Some(&settings))?)
    }
}

/// Render the sidebar and write it to the configured destination.
pub(crate) fn write_sidebar(output: &OutputConfig, sidebar: &[Entry]) -> Result<(), CliError> {
    let rendered = render(sidebar, output.format, output.pretty)?;

    if let Some(path) = &output.path {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, rendered)?;
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}
