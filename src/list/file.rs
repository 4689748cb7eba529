use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Suffix every list file name carries.
pub const LIST_EXTENSION: &str = ".txt";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

#[derive(Debug, Error)]
pub enum ListFileError {
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl ListFileError {
    /// The file the failed operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

/// Append [`LIST_EXTENSION`] unless the name already ends with it.
///
/// The check is case-sensitive, so `notes.md` becomes `notes.md.txt` and
/// `NOTES.TXT` becomes `NOTES.TXT.txt`.
pub fn with_list_extension(name: impl AsRef<Path>) -> PathBuf {
    let name = name.as_ref();
    if name.as_os_str().to_string_lossy().ends_with(LIST_EXTENSION) {
        return name.to_path_buf();
    }
    let mut raw = name.as_os_str().to_os_string();
    raw.push(LIST_EXTENSION);
    PathBuf::from(raw)
}

/// Read a list file, one entry per line.
///
/// Both `\n` and `\r\n` terminators are accepted; a missing final
/// terminator is fine.
///
/// # Errors
///
/// Returns [`ListFileError::Read`] if the file cannot be opened or a line
/// cannot be read (including lines that are not valid UTF-8).
pub fn load_items(path: &Path) -> Result<Vec<String>, ListFileError> {
    let read_error = |source| ListFileError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_error)?;
    BufReader::new(file)
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .map_err(read_error)
}

/// Write a list file, replacing any previous contents.
///
/// # Errors
///
/// Returns [`ListFileError::Write`] if the file cannot be created or any
/// write (including the final flush) fails.
pub fn save_items(path: &Path, items: &[String]) -> Result<(), ListFileError> {
    let write_error = |source| ListFileError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    for item in items {
        writer.write_all(item.as_bytes()).map_err(write_error)?;
        writer
            .write_all(LINE_ENDING.as_bytes())
            .map_err(write_error)?;
    }
    writer.flush().map_err(write_error)
}
