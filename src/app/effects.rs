use std::path::PathBuf;

use crate::app::Message;
use crate::list::{self, ItemList};

/// Read the list file at `path` and report the outcome as a message.
pub(super) fn load_list(path: PathBuf) -> Message {
    match list::load_items(&path) {
        Ok(items) => {
            tracing::info!(path = %path.display(), count = items.len(), "list loaded");
            Message::Loaded { path, items }
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "list load failed");
            Message::LoadFailed {
                path,
                reason: err.to_string(),
            }
        }
    }
}

/// Write `items` to `path` and report the outcome as a message.
pub(super) fn save_list(items: &ItemList, path: PathBuf) -> Message {
    match list::save_items(&path, items.as_slice()) {
        Ok(()) => {
            tracing::info!(path = %path.display(), count = items.len(), "list saved");
            Message::Saved(path)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "list save failed");
            Message::SaveFailed {
                path,
                reason: err.to_string(),
            }
        }
    }
}
