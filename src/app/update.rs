use std::path::PathBuf;

use crate::app::{Model, NoticeLevel};
use crate::list::ItemList;

/// All possible state transitions of a session.
///
/// Edits carry zero-based indices; dialogs convert from the 1-based
/// positions the user types. File effects report their outcome as
/// `Loaded`/`LoadFailed` and `Saved`/`SaveFailed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Append an entry
    Add(String),
    /// Remove the entry at an index
    Delete(usize),
    /// Insert an entry before an index (`index == len` appends)
    Insert { index: usize, item: String },
    /// Move an entry; the source is removed before inserting at `to`
    Move { from: usize, to: usize },
    /// Remove every entry
    Clear,

    // Files
    /// A list file was read successfully
    Loaded { path: PathBuf, items: Vec<String> },
    /// A list file could not be read
    LoadFailed { path: PathBuf, reason: String },
    /// The list was written successfully
    Saved(PathBuf),
    /// The list could not be written
    SaveFailed { path: PathBuf, reason: String },

    // Session
    /// End the session
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// All state transitions happen here. No I/O occurs; output for the user
/// is queued on the model as notices.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::Add(item) => {
            model.items.push(item);
            model.dirty = true;
            model.show_notice(NoticeLevel::Info, "Item added to the list.");
        }
        Message::Delete(index) => match model.items.remove(index) {
            Ok(_) => {
                model.dirty = true;
                model.show_notice(NoticeLevel::Info, "Item deleted from the list.");
            }
            Err(err) => model.show_notice(NoticeLevel::Error, err.to_string()),
        },
        Message::Insert { index, item } => match model.items.insert(index, item) {
            Ok(()) => {
                model.dirty = true;
                model.show_notice(NoticeLevel::Info, "Item inserted into the list.");
            }
            Err(err) => model.show_notice(NoticeLevel::Error, err.to_string()),
        },
        Message::Move { from, to } => match model.items.move_item(from, to) {
            Ok(()) => {
                model.dirty = true;
                model.show_notice(NoticeLevel::Info, "Item moved in the list.");
            }
            Err(err) => model.show_notice(NoticeLevel::Error, err.to_string()),
        },
        Message::Clear => {
            model.items.clear();
            model.dirty = true;
            model.show_notice(NoticeLevel::Info, "List cleared.");
        }
        Message::Loaded { path, items } => {
            model.items = ItemList::from(items);
            model.dirty = false;
            model.show_notice(
                NoticeLevel::Info,
                format!("List loaded from {}", path.display()),
            );
            model.current_file = Some(path);
        }
        Message::LoadFailed { reason, .. } => {
            model.show_notice(NoticeLevel::Error, format!("Error loading file: {reason}"));
        }
        Message::Saved(path) => {
            model.dirty = false;
            model.show_notice(NoticeLevel::Info, format!("List saved to {}", path.display()));
            model.current_file = Some(path);
        }
        Message::SaveFailed { reason, .. } => {
            model.show_notice(NoticeLevel::Error, format!("Error saving file: {reason}"));
        }
        Message::Quit => {
            model.should_quit = true;
        }
    }
    model
}
