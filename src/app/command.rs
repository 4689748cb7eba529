use std::sync::LazyLock;

use crate::input::LinePattern;

/// Letters accepted at the command prompt, in either case.
///
/// `P` is accepted here but bound to no command; it is reported as an
/// invalid command by the loop.
pub const COMMAND_LETTERS: &str = "[AaDdIiMmOoPpQqSsCcVv]";

static COMMAND_PATTERN: LazyLock<LinePattern> = LazyLock::new(|| {
    LinePattern::new(COMMAND_LETTERS).expect("command letter class is a valid pattern")
});

/// A menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Delete,
    Insert,
    Move,
    Open,
    Save,
    Clear,
    View,
    Quit,
}

impl Command {
    /// Every command, in menu order.
    pub const ALL: [Self; 9] = [
        Self::Add,
        Self::Delete,
        Self::Insert,
        Self::Move,
        Self::Open,
        Self::Save,
        Self::Clear,
        Self::View,
        Self::Quit,
    ];

    /// Look up a command by its letter, ignoring case.
    pub fn from_input(input: &str) -> Option<Self> {
        let mut chars = input.chars();
        let letter = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match letter.to_ascii_uppercase() {
            'A' => Some(Self::Add),
            'D' => Some(Self::Delete),
            'I' => Some(Self::Insert),
            'M' => Some(Self::Move),
            'O' => Some(Self::Open),
            'S' => Some(Self::Save),
            'C' => Some(Self::Clear),
            'V' => Some(Self::View),
            'Q' => Some(Self::Quit),
            _ => None,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Self::Add => 'A',
            Self::Delete => 'D',
            Self::Insert => 'I',
            Self::Move => 'M',
            Self::Open => 'O',
            Self::Save => 'S',
            Self::Clear => 'C',
            Self::View => 'V',
            Self::Quit => 'Q',
        }
    }

    /// Menu text for the command.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Add => "Add an item to the list",
            Self::Delete => "Delete an item from the list",
            Self::Insert => "Insert an item into the list",
            Self::Move => "Move an item",
            Self::Open => "Open a list file from disk",
            Self::Save => "Save the current list file to disk",
            Self::Clear => "Clear the list",
            Self::View => "View the list",
            Self::Quit => "Quit the program",
        }
    }

    /// Pattern the command prompt validates against.
    pub fn pattern() -> &'static LinePattern {
        &COMMAND_PATTERN
    }
}
