use thiserror::Error;

/// A positional edit referred to an index the list does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// `position` is 1-based, as shown to the user.
    #[error("There is no position {position}; the list has {len} item(s).")]
    OutOfRange { position: usize, len: usize },
}

/// An ordered list of text entries.
///
/// Indices are zero-based here; the command layer converts to and from the
/// 1-based positions shown on screen. Entries are never deduplicated and
/// their order is exactly the order of the edits that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<String>,
}

impl ItemList {
    /// Create an empty list.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Append an entry to the end of the list.
    pub fn push(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Insert an entry before `index`. `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] when `index > len()`.
    pub fn insert(&mut self, index: usize, item: impl Into<String>) -> Result<(), ListError> {
        if index > self.items.len() {
            return Err(self.out_of_range(index));
        }
        self.items.insert(index, item.into());
        Ok(())
    }

    /// Remove and return the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] when `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<String, ListError> {
        if index >= self.items.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.items.remove(index))
    }

    /// Move the entry at `from` so that it ends up at index `to`.
    ///
    /// Both indices are checked against the length before the move. The
    /// entry is removed first and then inserted at `to` in the shortened
    /// list, so `to == len() - 1` always moves the entry to the end.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] when either index is `>= len()`.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), ListError> {
        let len = self.items.len();
        if from >= len {
            return Err(self.out_of_range(from));
        }
        if to >= len {
            return Err(self.out_of_range(to));
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        Ok(())
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn out_of_range(&self, index: usize) -> ListError {
        ListError::OutOfRange {
            position: index.saturating_add(1),
            len: self.items.len(),
        }
    }
}

impl From<Vec<String>> for ItemList {
    fn from(items: Vec<String>) -> Self {
        Self { items }
    }
}

impl<S: Into<String>> FromIterator<S> for ItemList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
