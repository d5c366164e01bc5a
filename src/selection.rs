//! Interactive selection of scan results
//!
//! The operator answers with one line: comma-separated 1-based numbers,
//! `all`, or `q`. Numbers outside the list and fields that are not numbers
//! are dropped without complaint.

use inquire::{InquireError, Text};
use std::io::{BufRead, IsTerminal};

use crate::error::{Result, launcher as launcher_error};

const QUIT_TOKEN: &str = "q";
const ALL_TOKEN: &str = "all";

/// Parsed operator answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Stop without doing anything
    Quit,
    /// Every listed entry
    All,
    /// 0-based positions, in the order given
    Indices(Vec<usize>),
}

impl Selection {
    /// Items chosen by this selection; empty for `Quit`
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Vec<&'a T> {
        match self {
            Selection::Quit => Vec::new(),
            Selection::All => items.iter().collect(),
            Selection::Indices(indices) => indices.iter().filter_map(|&i| items.get(i)).collect(),
        }
    }
}

/// Parse an operator answer against a list of `count` entries.
///
/// Tokens are matched case-insensitively after trimming. A blank answer
/// cannot be interpreted and is rejected as an invalid selection.
pub fn parse_selection(input: &str, count: usize) -> Result<Selection> {
    let answer = input.trim();

    if answer.is_empty() {
        return Err(launcher_error::invalid_selection(input));
    }
    if answer.eq_ignore_ascii_case(QUIT_TOKEN) {
        return Ok(Selection::Quit);
    }
    if answer.eq_ignore_ascii_case(ALL_TOKEN) {
        return Ok(Selection::All);
    }

    let indices = answer
        .split(',')
        .filter_map(|field| field.trim().parse::<i64>().ok())
        .filter_map(|number| number.checked_sub(1))
        .filter_map(|index| usize::try_from(index).ok())
        .filter(|&index| index < count)
        .collect();

    Ok(Selection::Indices(indices))
}

/// Read one answer line from the operator.
///
/// Uses an `inquire` prompt on a terminal and a plain line read otherwise,
/// so answers can be piped in. Cancelling the prompt counts as quitting.
pub fn read_answer() -> Result<String> {
    let stdin = std::io::stdin();

    if stdin.is_terminal() {
        return match Text::new(">").prompt() {
            Ok(answer) => Ok(answer),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                Ok(QUIT_TOKEN.to_string())
            }
            Err(e) => Err(e.into()),
        };
    }

    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(line)
}

/// Ask the operator which of `items` to act on
pub fn select_from<T>(items: &[T]) -> Result<Vec<&T>> {
    println!();
    println!("Enter the numbers of the applications to create launchers for (comma-separated),");
    println!("or 'all' for all applications, or 'q' to quit:");

    let answer = read_answer()?;
    Ok(parse_selection(&answer, items.len())?.pick(items))
}
