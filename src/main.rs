//! Linemaker - An interactive list editor for plain-text files.
//!
//! # Usage
//!
//! ```bash
//! linemaker
//! linemaker groceries
//! linemaker --debug-log linemaker.log todo.txt
//! ```

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use linemaker::app::App;
use linemaker::config::Settings;

/// An interactive list editor for plain-text files
#[derive(Parser, Debug)]
#[command(name = "linemaker", version, about, long_about = None)]
struct Cli {
    /// List file to open at startup (".txt" is appended when missing)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Write debug log events to a file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            initial_file: cli.file,
            debug_log: cli.debug_log,
        }
    }
}

fn init_logging(settings: &Settings) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(settings.log_level().into());
    if let Some(path) = &settings.debug_log {
        let file = File::create(path)
            .with_context(|| format!("Failed to create debug log {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let settings = Settings::from(Cli::parse());
    init_logging(&settings)?;
    tracing::debug!(?settings, "starting session");

    App::new()
        .with_initial_file(settings.initial_list_path())
        .run()
        .context("Application error")
}
