//! Session state and the interactive command loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete session state
//! - [`Message`]: All possible state transitions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Command loop that renders, prompts, and dispatches

mod command;
mod dialog;
mod effects;
mod event_loop;
mod model;
mod update;

pub use command::{COMMAND_LETTERS, Command};
pub use model::{Model, Notice, NoticeLevel};
pub use update::{Message, update};

use std::path::PathBuf;

/// Main application struct that runs the command loop.
#[derive(Debug, Default)]
pub struct App {
    initial_file: Option<PathBuf>,
}

impl App {
    /// Create an application that starts with an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `path` before the first prompt, as the Open command would.
    pub fn with_initial_file(mut self, path: Option<PathBuf>) -> Self {
        self.initial_file = path;
        self
    }
}
