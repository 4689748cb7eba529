//! Console output for the list editor.
//!
//! Everything here writes plain lines to any [`std::io::Write`], so the same
//! rendering serves the terminal and scripted tests:
//! - [`render_list`]: the numbered list
//! - [`render_menu`]: the command menu
//! - [`render_status`]: file name and unsaved-changes marker
//! - [`render_notice`]: one line of operation feedback

mod render;
mod status;

pub use render::{render_list, render_menu, render_notice};
pub use status::{render_status, status_line};

#[cfg(test)]
mod tests;
