// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. list::ListError)
    clippy::module_name_repetitions
)]

//! # Linemaker
//!
//! An interactive list editor for plain-text files.
//!
//! Linemaker keeps an ordered list of text entries in memory and lets the
//! user add, delete, insert, move, view, and clear them, saving the list to
//! and opening it from a file with one entry per line.
//!
//! ## Architecture
//!
//! Linemaker uses The Elm Architecture (TEA) pattern:
//! - **Model**: Session state (list, dirty flag, current file)
//! - **Message**: Every state transition
//! - **Update**: Pure state transitions
//! - **View**: Plain-text rendering between prompts
//!
//! ## Modules
//!
//! - [`app`]: Command loop, dialogs, and session state
//! - [`input`]: Validated, re-prompting console input
//! - [`list`]: The item list and its file format
//! - [`ui`]: List, menu, and status rendering
//! - [`config`]: Start-up settings

pub mod app;
pub mod config;
pub mod input;
pub mod list;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model, update};
    pub use crate::input::Prompter;
    pub use crate::list::ItemList;
}
