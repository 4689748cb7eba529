use std::io::{self, Write};

use crate::app::{Command, Notice};
use crate::list::ItemList;

/// Write the list with 1-based, right-aligned position numbers.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn render_list<W: Write>(out: &mut W, items: &ItemList) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Current List:")?;
    if items.is_empty() {
        writeln!(out, "  (empty)")?;
        return Ok(());
    }
    let width = items.len().to_string().len();
    for (index, item) in items.iter().enumerate() {
        writeln!(out, "{:>width$}: {item}", index + 1)?;
    }
    Ok(())
}

/// Write the command menu.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Menu:")?;
    for command in Command::ALL {
        writeln!(out, "{} - {}", command.letter(), command.description())?;
    }
    Ok(())
}

/// Write one notice on its own line.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn render_notice<W: Write>(out: &mut W, notice: &Notice) -> io::Result<()> {
    writeln!(out, "{}", notice.text)
}
