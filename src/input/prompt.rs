use std::io::{self, BufRead, Write};

use regex::Regex;
use thiserror::Error;

/// Why a line was rejected. Shown to the user before re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("You must enter at least one character.")]
    Empty,
    #[error("\"{0}\" is not a whole number.")]
    NotAnInteger(String),
    #[error("{value} is out of range. Enter a number from {lo} to {hi}.")]
    OutOfRange { value: i64, lo: i64, hi: i64 },
    #[error("\"{0}\" is not a valid choice.")]
    NoMatch(String),
    #[error("Please answer Y or N.")]
    NotYesNo,
    #[error("That line is not valid text. Please try again.")]
    NotText,
}

/// A prompt could not produce a value at all.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The input reached end-of-file while waiting for an answer.
    #[error("input closed")]
    Closed,
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// A regular expression that must match a whole line.
#[derive(Debug, Clone)]
pub struct LinePattern {
    regex: Regex,
}

impl LinePattern {
    /// Compile `pattern`, anchored at both ends.
    ///
    /// # Errors
    ///
    /// Returns the regex error if `pattern` is not a valid expression.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(&format!("^(?:{pattern})$"))?,
        })
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

pub fn parse_non_empty(line: &str) -> Result<String, InputError> {
    if line.trim().is_empty() {
        return Err(InputError::Empty);
    }
    Ok(line.to_string())
}

pub fn parse_ranged_int(line: &str, lo: i64, hi: i64) -> Result<i64, InputError> {
    let token = line.trim();
    let value: i64 = token
        .parse()
        .map_err(|_| InputError::NotAnInteger(token.to_string()))?;
    if !(lo..=hi).contains(&value) {
        return Err(InputError::OutOfRange { value, lo, hi });
    }
    Ok(value)
}

pub fn parse_matching(line: &str, pattern: &LinePattern) -> Result<String, InputError> {
    let trimmed = line.trim();
    if pattern.is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(InputError::NoMatch(trimmed.to_string()))
    }
}

pub fn parse_yes_no(line: &str) -> Result<bool, InputError> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(InputError::NotYesNo),
    }
}

/// Line-based prompting over any reader/writer pair.
///
/// Every method blocks until the user supplies an acceptable line. Invalid
/// lines are answered with the [`InputError`] message and the prompt is
/// shown again; only end of input or a broken console end the wait early.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// The output side, for rendering between prompts.
    pub const fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Prompt for a line that is not empty or all whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if the input closes or the console fails.
    pub fn non_empty_string(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.prompt_until(prompt, parse_non_empty)
    }

    /// Prompt for an integer in `lo..=hi`.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if the input closes or the console fails.
    pub fn ranged_int(&mut self, prompt: &str, lo: i64, hi: i64) -> Result<i64, PromptError> {
        self.prompt_until(&format!("{prompt} [{lo}-{hi}]"), |line| {
            parse_ranged_int(line, lo, hi)
        })
    }

    /// Prompt for a line fully matching `pattern`. Returns the trimmed line.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if the input closes or the console fails.
    pub fn matching(&mut self, prompt: &str, pattern: &LinePattern) -> Result<String, PromptError> {
        self.prompt_until(prompt, |line| parse_matching(line, pattern))
    }

    /// Ask a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if the input closes or the console fails.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        self.prompt_until(&format!("{prompt} [Y/N]"), parse_yes_no)
    }

    fn prompt_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, PromptError> {
        loop {
            let result = self
                .read_line(prompt)?
                .and_then(|line| parse(&line).map_err(|err| (line, err)));
            match result {
                Ok(value) => return Ok(value),
                Err((line, err)) => {
                    tracing::debug!(%prompt, input = %line, error = %err, "rejected input");
                    writeln!(self.writer, "{err}")?;
                }
            }
        }
    }

    /// Read one line. The inner `Err` carries a line that is not UTF-8,
    /// decoded lossily for logging.
    fn read_line(
        &mut self,
        prompt: &str,
    ) -> Result<Result<String, (String, InputError)>, PromptError> {
        write!(self.writer, "{prompt}: ")?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(PromptError::Closed);
        }
        strip_line_ending(&mut buf);
        Ok(String::from_utf8(buf).map_err(|err| {
            (
                String::from_utf8_lossy(err.as_bytes()).into_owned(),
                InputError::NotText,
            )
        }))
    }
}

fn strip_line_ending(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
}

impl<R, W> std::fmt::Debug for Prompter<R, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prompter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    type Scripted = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

    fn scripted(input: &str) -> Scripted {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompter: &Scripted) -> String {
        String::from_utf8_lossy(prompter.writer()).into_owned()
    }

    // --- Pure parsers ---

    #[test]
    fn test_parse_non_empty_rejects_blank_lines() {
        assert_eq!(parse_non_empty(""), Err(InputError::Empty));
        assert_eq!(parse_non_empty("   \t"), Err(InputError::Empty));
        assert_eq!(parse_non_empty(" keep spaces "), Ok(" keep spaces ".to_string()));
    }

    #[test]
    fn test_parse_ranged_int_bounds_are_inclusive() {
        assert_eq!(parse_ranged_int("1", 1, 3), Ok(1));
        assert_eq!(parse_ranged_int(" 3 ", 1, 3), Ok(3));
        assert_eq!(
            parse_ranged_int("4", 1, 3),
            Err(InputError::OutOfRange { value: 4, lo: 1, hi: 3 })
        );
        assert_eq!(
            parse_ranged_int("-1", 1, 3),
            Err(InputError::OutOfRange { value: -1, lo: 1, hi: 3 })
        );
    }

    #[test]
    fn test_parse_ranged_int_rejects_non_numbers() {
        assert_eq!(
            parse_ranged_int("two", 1, 3),
            Err(InputError::NotAnInteger("two".to_string()))
        );
        assert!(parse_ranged_int("2.5", 1, 3).is_err());
        assert!(parse_ranged_int("", 1, 3).is_err());
    }

    #[test]
    fn test_parse_matching_requires_full_match() {
        let pattern = LinePattern::new("[AaBb]").unwrap();
        assert_eq!(parse_matching("a", &pattern), Ok("a".to_string()));
        assert_eq!(parse_matching(" B\t", &pattern), Ok("B".to_string()));
        assert_eq!(
            parse_matching("ab", &pattern),
            Err(InputError::NoMatch("ab".to_string()))
        );
        assert!(parse_matching("x", &pattern).is_err());
    }

    #[test]
    fn test_line_pattern_anchors_alternations() {
        let pattern = LinePattern::new("add|delete").unwrap();
        assert!(pattern.is_match("add"));
        assert!(!pattern.is_match("address"));
        assert!(!pattern.is_match("undelete"));
    }

    #[test]
    fn test_parse_yes_no_variants() {
        for yes in ["y", "Y", "yes", "YES", " Yes "] {
            assert_eq!(parse_yes_no(yes), Ok(true), "{yes:?}");
        }
        for no in ["n", "N", "no", "No"] {
            assert_eq!(parse_yes_no(no), Ok(false), "{no:?}");
        }
        assert_eq!(parse_yes_no("maybe"), Err(InputError::NotYesNo));
    }

    // --- Prompt loops ---

    #[test]
    fn test_ranged_int_reprompts_until_valid() {
        let mut prompter = scripted("abc\n0\n4\n2\n");
        let value = prompter.ranged_int("Pick", 1, 3).unwrap();
        assert_eq!(value, 2);

        let out = output(&prompter);
        assert_eq!(out.matches("Pick [1-3]: ").count(), 4);
        assert!(out.contains("\"abc\" is not a whole number."));
        assert!(out.contains("0 is out of range. Enter a number from 1 to 3."));
        assert!(out.contains("4 is out of range."));
    }

    #[test]
    fn test_non_empty_string_keeps_text_as_typed() {
        let mut prompter = scripted("\n   \n  buy milk\r\n");
        let value = prompter.non_empty_string("Item").unwrap();
        assert_eq!(value, "  buy milk");
        assert_eq!(output(&prompter).matches("You must enter").count(), 2);
    }

    #[test]
    fn test_confirm_reprompts_on_garbage() {
        let mut prompter = scripted("sure\nN\n");
        assert!(!prompter.confirm("Continue?").unwrap());
        let out = output(&prompter);
        assert!(out.contains("Continue? [Y/N]: "));
        assert!(out.contains("Please answer Y or N."));
    }

    #[test]
    fn test_matching_returns_trimmed_line() {
        let pattern = LinePattern::new("[Qq]").unwrap();
        let mut prompter = scripted("x\n q \n");
        assert_eq!(prompter.matching("Command", &pattern).unwrap(), "q");
    }

    #[test]
    fn test_closed_input_is_reported() {
        let mut prompter = scripted("nope\n");
        let err = prompter.ranged_int("Pick", 1, 3).unwrap_err();
        assert!(matches!(err, PromptError::Closed));
    }

    #[test]
    fn test_line_that_is_not_utf8_is_reprompted() {
        let mut prompter = Prompter::new(Cursor::new(vec![0xff, b'\n', b'2', b'\n']), Vec::new());
        assert_eq!(prompter.ranged_int("Pick", 1, 3).unwrap(), 2);

        let out = output(&prompter);
        assert_eq!(out.matches("Pick [1-3]: ").count(), 2);
        assert!(out.contains("That line is not valid text."));
    }

    #[test]
    fn test_last_line_without_newline_is_read() {
        let mut prompter = scripted("7");
        assert_eq!(prompter.ranged_int("Pick", 1, 9).unwrap(), 7);
    }
}
