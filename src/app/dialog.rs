//! Interactive flows that gather a command's parameters.
//!
//! Dialogs only talk to the user and build [`Message`]s; every state change
//! still goes through [`update`].

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::app::{Command, Message, Model, NoticeLevel, effects, update};
use crate::input::{PromptError, Prompter};
use crate::list::with_list_extension;
use crate::ui;

/// Apply a message, then print whatever notices it produced.
pub(super) fn apply<R: BufRead, W: Write>(
    model: &mut Model,
    msg: Message,
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    *model = update(std::mem::take(model), msg);
    flush_notices(model, prompter)
}

pub(super) fn flush_notices<R: BufRead, W: Write>(
    model: &mut Model,
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    for notice in model.take_notices() {
        match notice.level {
            NoticeLevel::Error => tracing::warn!(text = %notice.text, "error notice"),
            NoticeLevel::Warning | NoticeLevel::Info => {
                tracing::debug!(level = ?notice.level, text = %notice.text, "notice");
            }
        }
        ui::render_notice(prompter.writer_mut(), &notice)?;
    }
    Ok(())
}

pub(super) fn run_command<R: BufRead, W: Write>(
    model: &mut Model,
    command: Command,
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    tracing::debug!(
        ?command,
        items = model.items.len(),
        dirty = model.dirty,
        "dispatching command"
    );
    match command {
        Command::Add => add_item(model, prompter),
        Command::Delete => delete_item(model, prompter),
        Command::Insert => insert_item(model, prompter),
        Command::Move => move_item(model, prompter),
        Command::Open => open_list(model, prompter),
        Command::Save => save_list(model, prompter),
        Command::Clear => clear_list(model, prompter),
        Command::View => {
            ui::render_list(prompter.writer_mut(), &model.items)?;
            Ok(())
        }
        Command::Quit => quit(model, prompter),
    }
}

fn add_item<R: BufRead, W: Write>(
    model: &mut Model,
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    let item = prompter.non_empty_string("Enter the item to add")?;
    apply(model, Message::Add(item), prompter)
}

fn delete_item<R: BufRead, W: Write>(
    model: &mut Model,
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    if model.items.is_empty() {
        model.show_notice(NoticeLevel::Warning, "The list is empty. Nothing to delete.");
        return flush_notices(model, prompter);
    }
    let index = prompt_index(prompter, "Enter the item number to delete", model.items.len())?;
    apply(model, Message::Delete(index), prompter)
}

fn insert_item<R: BufRead, W: Write>(
    model: &mut Model,
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    let index = prompt_index(
        prompter,
        "Enter the position number to insert the item at",
        model.items.len() + 1,
    )?;
    let item = prompter.non_empty_string("Enter the item to insert")?;
    apply(model, Message::Insert { index, item }, prompter)
}

fn move_item<R: BufRead, W: Write>(
    model: &mut Model,
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    if model.items.is_empty() {
        model.show_notice(NoticeLevel::Warning, "The list is empty. Nothing to move.");
        return flush_notices(model, prompter);
    }
    let len = model.items.len();
    let from = prompt_index(prompter, "Enter the item number to move", len)?;
    let to = prompt_index(prompter, "Enter the new position number for the item", len)?;
    apply(model, Message::Move { from, to }, prompter)
}

fn open_list<R: BufRead, W: Write>(
    model: &mut Model,
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    if model.dirty {
        if prompter.confirm("You have unsaved changes. Do you want to save them first?")? {
            save_list(model, prompter)?;
        } else if !prompter.confirm("Are you sure you want to discard unsaved changes?")? {
            return Ok(());
        }
    }
    let path = prompt_filename(prompter, "Enter the filename to open")?;
    apply(model, effects::load_list(path), prompter)
}

fn save_list<R: BufRead, W: Write>(
    model: &mut Model,
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    let path = match model.current_file.clone() {
        Some(path) => path,
        None => prompt_filename(prompter, "Enter the filename to save as")?,
    };
    let msg = effects::save_list(&model.items, path);
    apply(model, msg, prompter)
}

fn clear_list<R: BufRead, W: Write>(
    model: &mut Model,
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    if prompter.confirm("Are you sure you want to clear the list?")? {
        apply(model, Message::Clear, prompter)?;
    }
    Ok(())
}

/// Both gates must pass for the session to end: unsaved changes are saved
/// or explicitly discarded, then the quit itself is confirmed.
fn quit<R: BufRead, W: Write>(
    model: &mut Model,
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    if model.dirty {
        if prompter.confirm("You have unsaved changes. Do you want to save them?")? {
            save_list(model, prompter)?;
        } else if !prompter.confirm("Are you sure you want to discard unsaved changes?")? {
            return Ok(());
        }
    }
    if prompter.confirm("Are you sure you want to quit?")? {
        apply(model, Message::Quit, prompter)?;
    }
    Ok(())
}

/// Ask for a 1-based position in `1..=max` and return it as an index.
fn prompt_index<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    prompt: &str,
    max: usize,
) -> Result<usize, PromptError> {
    let hi = i64::try_from(max).unwrap_or(i64::MAX);
    let position = prompter.ranged_int(prompt, 1, hi)?;
    Ok(usize::try_from(position - 1).unwrap_or_default())
}

fn prompt_filename<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    prompt: &str,
) -> Result<PathBuf, PromptError> {
    let name = prompter.non_empty_string(prompt)?;
    Ok(with_list_extension(name.trim()))
}
