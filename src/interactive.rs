//! Interactive check selection
//!
//! Shows the numbered menu, reads one line of input and runs the chosen
//! checks in the order given.

use crate::checks::{AuditContext, Check, section};
use crate::error::Result;
use crate::progress::run_batch;
use colored::*;
use console::Term;
use dialoguer::{Input, theme::ColorfulTheme};
use std::io::{self, BufRead, IsTerminal, Write};
use thiserror::Error;
use tracing::{info, warn};

pub const SELECTION_PROMPT: &str =
    "Enter the numbers of the checks to run (comma-separated, or 'all' for all checks)";

/// Where the selection line comes from
pub trait Prompt {
    fn ask(&mut self, message: &str) -> Result<String>;
}

/// Reads the selection from the terminal, or line by line from stdin when
/// input is piped
#[derive(Default)]
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl Prompt for TerminalPrompt {
    fn ask(&mut self, message: &str) -> Result<String> {
        if Term::stderr().is_term() && io::stdin().is_terminal() {
            let answer: String = Input::with_theme(&self.theme)
                .with_prompt(message)
                .allow_empty(true)
                .interact_text()?;
            return Ok(answer);
        }

        read_answer(&mut io::stdin().lock(), &mut io::stdout(), message)
    }
}

/// Print `message` and read one line; end of input reads as an empty answer
fn read_answer(input: &mut dyn BufRead, out: &mut dyn Write, message: &str) -> Result<String> {
    write!(out, "{message}: ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// One entry of a parsed number list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Zero-based menu position
    Entry(usize),
    /// A number outside the menu, in canonical decimal form; reported and
    /// skipped
    OutOfRange(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Choices(Vec<Choice>),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Invalid input. Please enter numbers or 'all'.")]
    InvalidInput { token: String },
}

/// Parse `all` or a comma-separated list of 1-based menu numbers.
///
/// A single token that is not an integer rejects the whole line. Integers
/// outside `1..=menu_len` are kept as [`Choice::OutOfRange`], including
/// those too large for any machine integer.
pub fn parse_selection(
    input: &str,
    menu_len: usize,
) -> std::result::Result<Selection, SelectionError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("all") {
        return Ok(Selection::All);
    }

    input
        .split(',')
        .map(|token| {
            let token = token.trim();
            if let Ok(number) = token.parse::<i64>() {
                return Ok(match usize::try_from(number) {
                    Ok(n) if (1..=menu_len).contains(&n) => Choice::Entry(n - 1),
                    _ => Choice::OutOfRange(number.to_string()),
                });
            }
            oversized_integer(token)
                .map(Choice::OutOfRange)
                .ok_or_else(|| SelectionError::InvalidInput {
                    token: token.to_string(),
                })
        })
        .collect::<std::result::Result<Vec<_>, _>>()
        .map(Selection::Choices)
}

/// Canonical form of a signed decimal literal that overflowed `i64`
fn oversized_integer(token: &str) -> Option<String> {
    let (sign, digits) = match token.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", token.strip_prefix('+').unwrap_or(token)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("{sign}{}", digits.trim_start_matches('0')))
}

/// Run the checks named by a selection, returning the zero-based positions
/// that were executed
pub fn execute_selection(
    selection: &Selection,
    menu: &[Box<dyn Check>],
    ctx: &AuditContext<'_>,
    out: &mut dyn Write,
) -> Result<Vec<usize>> {
    match selection {
        Selection::All => {
            let all: Vec<usize> = (0..menu.len()).collect();
            run_batch(menu, &all, ctx, out, "Running All Checks")?;
            Ok(all)
        }
        Selection::Choices(choices) => {
            let mut executed = Vec::new();
            crate::progress::with_progress(choices.len(), "Running Selected Checks", |bar| {
                for choice in choices {
                    match choice {
                        Choice::Entry(index) => {
                            bar.suspend(|| menu[*index].run(ctx, &mut *out))?;
                            executed.push(*index);
                        }
                        Choice::OutOfRange(number) => {
                            bar.suspend(|| writeln!(out, "Invalid choice: {number}"))?;
                        }
                    }
                    bar.inc(1);
                }
                Ok(())
            })?;
            Ok(executed)
        }
    }
}

/// Show the menu, read a selection and run it
pub fn interactive_mode(
    menu: &[Box<dyn Check>],
    ctx: &AuditContext<'_>,
    prompt: &mut dyn Prompt,
    out: &mut dyn Write,
) -> Result<Vec<usize>> {
    section(out, "Interactive Mode")?;
    for (position, check) in menu.iter().enumerate() {
        writeln!(out, "{}. {}", position + 1, check.label())?;
    }
    out.flush()?;

    let answer = match prompt.ask(SELECTION_PROMPT) {
        Ok(answer) => answer,
        Err(e) => {
            warn!("Could not read interactive selection: {}", e);
            writeln!(out, "{}", format!("Could not read selection: {e}").red())?;
            return Ok(Vec::new());
        }
    };
    match parse_selection(&answer, menu.len()) {
        Ok(selection) => {
            info!("Interactive selection: {:?}", selection);
            execute_selection(&selection, menu, ctx, out)
        }
        Err(e) => {
            writeln!(out, "{}", e.to_string().red())?;
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::Platform;
    use crate::testing::{RecordingRunner, StubLookup, recording_menu};
    use hostaudit_common::Privilege;

    struct Scripted(Vec<String>);

    impl Prompt for Scripted {
        fn ask(&mut self, _message: &str) -> Result<String> {
            Ok(self.0.remove(0))
        }
    }

    fn run_interactive(answer: &str) -> (Vec<usize>, Vec<usize>, String) {
        let (menu, log) = recording_menu(9);
        let runner = RecordingRunner::new();
        let lookup = StubLookup::none();
        let ctx = AuditContext::new(&runner, &lookup, Privilege::Sudo, Platform::Linux);
        let mut prompt = Scripted(vec![answer.to_string()]);
        let mut out = Vec::new();

        let executed = interactive_mode(&menu, &ctx, &mut prompt, &mut out).unwrap();
        let ran = log.borrow().clone();
        (executed, ran, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_all_is_case_insensitive() {
        assert_eq!(parse_selection("ALL", 9), Ok(Selection::All));
        assert_eq!(parse_selection("  all ", 9), Ok(Selection::All));
    }

    #[test]
    fn test_parse_keeps_order_duplicates_and_out_of_range() {
        assert_eq!(
            parse_selection("3, 1,3,0,-2,99", 9),
            Ok(Selection::Choices(vec![
                Choice::Entry(2),
                Choice::Entry(0),
                Choice::Entry(2),
                Choice::OutOfRange("0".to_string()),
                Choice::OutOfRange("-2".to_string()),
                Choice::OutOfRange("99".to_string()),
            ]))
        );
    }

    #[test]
    fn test_parse_huge_numbers_are_out_of_range() {
        assert_eq!(
            parse_selection("1, 99999999999999999999,-000099999999999999999999", 9),
            Ok(Selection::Choices(vec![
                Choice::Entry(0),
                Choice::OutOfRange("99999999999999999999".to_string()),
                Choice::OutOfRange("-99999999999999999999".to_string()),
            ]))
        );
        assert!(parse_selection("99999999999999999999x", 9).is_err());
        assert!(parse_selection("-", 9).is_err());
    }

    #[test]
    fn test_huge_number_does_not_block_other_entries() {
        let (executed, ran, text) = run_interactive("3,123456789012345678901234567890");
        assert_eq!(ran, vec![3]);
        assert_eq!(executed, vec![2]);
        assert!(text.contains("Invalid choice: 123456789012345678901234567890"));
    }

    #[test]
    fn test_read_answer_takes_one_line_from_piped_input() {
        let mut input = io::Cursor::new("2,5\r\nignored\n");
        let mut out = Vec::new();

        let answer = read_answer(&mut input, &mut out, SELECTION_PROMPT).unwrap();

        assert_eq!(answer, "2,5");
        assert_eq!(String::from_utf8(out).unwrap(), format!("{SELECTION_PROMPT}: "));
    }

    #[test]
    fn test_read_answer_at_end_of_input_is_empty() {
        let mut input = io::Cursor::new("");
        let answer = read_answer(&mut input, &mut Vec::<u8>::new(), SELECTION_PROMPT).unwrap();

        assert_eq!(answer, "");
        assert!(parse_selection(&answer, 9).is_err());
    }

    #[test]
    fn test_unreadable_prompt_is_reported_not_raised() {
        struct Closed;

        impl Prompt for Closed {
            fn ask(&mut self, _message: &str) -> Result<String> {
                Err(io::Error::new(io::ErrorKind::NotConnected, "not a terminal").into())
            }
        }

        let (menu, log) = recording_menu(9);
        let runner = RecordingRunner::new();
        let lookup = StubLookup::none();
        let ctx = AuditContext::new(&runner, &lookup, Privilege::Sudo, Platform::Linux);
        let mut out = Vec::new();

        let executed = interactive_mode(&menu, &ctx, &mut Closed, &mut out).unwrap();

        assert!(executed.is_empty());
        assert!(log.borrow().is_empty());
        assert!(String::from_utf8(out).unwrap().contains("Could not read selection: "));
    }

    #[test]
    fn test_parse_rejects_any_non_numeric_token() {
        assert!(parse_selection("abc", 9).is_err());
        assert!(parse_selection("1,2,x", 9).is_err());
        assert!(parse_selection("1,,2", 9).is_err());
        assert!(parse_selection("", 9).is_err());
    }

    #[test]
    fn test_menu_is_numbered_from_one() {
        let (_, _, text) = run_interactive("all");
        assert!(text.contains("1. check 1"));
        assert!(text.contains("9. check 9"));
    }

    #[test]
    fn test_selection_runs_in_given_order() {
        let (executed, ran, _) = run_interactive("1,3");
        assert_eq!(ran, vec![1, 3]);
        assert_eq!(executed, vec![0, 2]);
    }

    #[test]
    fn test_out_of_range_is_reported_and_skipped() {
        let (_, ran, text) = run_interactive("99");
        assert!(ran.is_empty());
        assert!(text.contains("Invalid choice: 99"));

        let (_, ran, text) = run_interactive("2,42,2");
        assert_eq!(ran, vec![2, 2]);
        assert!(text.contains("Invalid choice: 42"));
    }

    #[test]
    fn test_invalid_input_runs_nothing() {
        let (executed, ran, text) = run_interactive("abc");
        assert!(ran.is_empty());
        assert!(executed.is_empty());
        assert!(text.contains("Invalid input. Please enter numbers or 'all'."));

        let (_, ran, _) = run_interactive("1,abc");
        assert!(ran.is_empty());
    }

    #[test]
    fn test_all_runs_every_check_in_menu_order() {
        let (_, ran, _) = run_interactive("All");
        assert_eq!(ran, (1..=9).collect::<Vec<_>>());
    }
}
