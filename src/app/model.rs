use std::path::{Path, PathBuf};

use crate::list::ItemList;

/// How a notice should be presented and logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A line of output produced by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

/// The complete session state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug, Default)]
pub struct Model {
    /// The entries being edited
    pub items: ItemList,
    /// Whether `items` has changes not yet written to disk
    pub dirty: bool,
    /// File most recently opened or saved to
    pub current_file: Option<PathBuf>,
    /// Whether the session should end
    pub should_quit: bool,
    notices: Vec<Notice>,
}

impl Model {
    /// Create an empty, clean session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clean session already holding `items`.
    pub fn with_items<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Self {
        Self {
            items: items.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    pub(super) fn show_notice(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notices.push(Notice {
            level,
            text: text.into(),
        });
    }

    /// Drain the notices queued since the last call.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Notices waiting to be shown, oldest first.
    #[cfg(test)]
    pub(crate) fn pending_notices(&self) -> &[Notice] {
        &self.notices
    }
}
