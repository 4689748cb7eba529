//! Validated console input.
//!
//! A [`Prompter`] asks a question, reads one line, and keeps asking until the
//! answer satisfies the requested constraint: a non-empty string, an integer
//! in an inclusive range, a line matching a pattern, or a yes/no answer.
//! Each constraint is also exposed as a pure `parse_*` function.

mod prompt;

pub use prompt::{
    InputError, LinePattern, PromptError, Prompter, parse_matching, parse_non_empty,
    parse_ranged_int, parse_yes_no,
};
