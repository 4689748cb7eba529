use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::app::{App, Command, Model, dialog, effects};
use crate::input::{PromptError, Prompter};
use crate::ui;

impl App {
    /// Run the interactive session on the process's stdin and stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the console itself fails. End of input is not an
    /// error; it ends the session without saving.
    pub fn run(&self) -> Result<()> {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout().lock());
        self.run_with(&mut prompter)
            .context("Console I/O failed")?;
        Ok(())
    }

    /// Run a session against any prompter and return the final state.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Io`] if reading or writing the console fails.
    pub fn run_with<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Model, PromptError> {
        let mut model = Model::new();
        if let Some(path) = &self.initial_file {
            dialog::apply(&mut model, effects::load_list(path.clone()), prompter)?;
        }
        Self::event_loop(model, prompter)
    }

    pub(super) fn event_loop<R: BufRead, W: Write>(
        mut model: Model,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Model, PromptError> {
        while !model.should_quit {
            match Self::step(&mut model, prompter) {
                Ok(()) => {}
                Err(PromptError::Closed) => {
                    tracing::warn!(dirty = model.dirty, "input closed, ending session");
                    let out = prompter.writer_mut();
                    writeln!(out)?;
                    writeln!(out, "Input closed; exiting without saving.")?;
                    return Ok(model);
                }
                Err(err) => return Err(err),
            }
        }
        writeln!(prompter.writer_mut(), "Exiting program...")?;
        Ok(model)
    }

    fn step<R: BufRead, W: Write>(
        model: &mut Model,
        prompter: &mut Prompter<R, W>,
    ) -> Result<(), PromptError> {
        let out = prompter.writer_mut();
        ui::render_list(out, &model.items)?;
        ui::render_status(out, model)?;
        ui::render_menu(out)?;

        let input = prompter.matching("Enter a command", Command::pattern())?;
        if let Some(command) = Command::from_input(&input) {
            dialog::run_command(model, command, prompter)
        } else {
            tracing::debug!(%input, "unbound command letter");
            writeln!(prompter.writer_mut(), "Invalid command. Please try again.")?;
            Ok(())
        }
    }
}
