use std::path::PathBuf;

use tracing::Level;

use crate::list::with_list_extension;

/// Effective start-up settings, resolved from the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Settings {
    /// List file to open before the first prompt
    pub initial_file: Option<PathBuf>,
    /// File that receives debug-level log events
    pub debug_log: Option<PathBuf>,
}

impl Settings {
    /// The start-up list path with the list extension applied.
    pub fn initial_list_path(&self) -> Option<PathBuf> {
        self.initial_file.as_ref().map(with_list_extension)
    }

    /// Base log level before `RUST_LOG` directives are applied.
    pub fn log_level(&self) -> Level {
        if self.debug_log.is_some() {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}
