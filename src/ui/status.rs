use std::io::{self, Write};

use crate::app::Model;

/// One-line summary of the session: file name, size, unsaved marker.
pub fn status_line(model: &Model) -> String {
    let filename = model
        .current_file()
        .map_or_else(|| "untitled".to_string(), |path| path.display().to_string());
    let count = model.items.len();
    let noun = if count == 1 { "item" } else { "items" };
    if model.dirty {
        format!("[{filename}] {count} {noun}, unsaved changes")
    } else {
        format!("[{filename}] {count} {noun}")
    }
}

/// # Errors
///
/// Returns any error from the underlying writer.
pub fn render_status<W: Write>(out: &mut W, model: &Model) -> io::Result<()> {
    writeln!(out, "{}", status_line(model))
}
