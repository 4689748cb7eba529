//! The in-memory item list and its plain-text file format.
//!
//! A list file holds one entry per line with no header and no escaping, so
//! only entries free of line breaks survive a save/open round trip.

mod file;
mod items;

pub use file::{LIST_EXTENSION, ListFileError, load_items, save_items, with_list_extension};
pub use items::{ItemList, ListError};
