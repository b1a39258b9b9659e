//! File selection
//!
//! Choosing which candidate files to process is injected behind a small
//! trait so the extraction pipeline stays free of interactive I/O and
//! fully testable. The binary wires in the console implementation; tests
//! use scripted selectors.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Chooses which candidate files to process
pub trait FileSelector {
    /// Return the chosen subset of `candidates`, in processing order
    ///
    /// # Errors
    ///
    /// Returns an error when the selection source fails (e.g. stdin
    /// closed).
    fn select(&self, candidates: &[PathBuf]) -> io::Result<Vec<PathBuf>>;
}

/// Selects every candidate, for scripted runs
pub struct SelectAll;

impl FileSelector for SelectAll {
    fn select(&self, candidates: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
        Ok(candidates.to_vec())
    }
}

/// A parsed selection answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Process every candidate
    All,
    /// Process the candidate at this index
    One(usize),
}

/// Parse one line of selection input against a candidate count
///
/// Accepts `a`/`A` for all files, or a 0-based index below `count`.
/// Anything else is `None` and the caller should prompt again.
pub fn parse_choice(input: &str, count: usize) -> Option<Choice> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("a") {
        return Some(Choice::All);
    }
    match input.parse::<usize>() {
        Ok(index) if index < count => Some(Choice::One(index)),
        _ => None,
    }
}

/// Interactive selector prompting on the console
///
/// Prints a numbered candidate list, then reads choices from stdin until
/// one parses; invalid input re-prompts.
pub struct ConsoleSelector;

impl FileSelector for ConsoleSelector {
    fn select(&self, candidates: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
        println!("Audio files found in the current directory:");
        for (index, path) in candidates.iter().enumerate() {
            println!("  [{}] {}", index, path.display());
        }
        println!("Choose a file by number, or 'A' to process all files.");

        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("Your choice: ");
            io::stdout().flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a choice was made",
                ));
            }

            match parse_choice(&line, candidates.len()) {
                Some(Choice::All) => return Ok(candidates.to_vec()),
                Some(Choice::One(index)) => return Ok(vec![candidates[index].clone()]),
                None => println!("Invalid input. Please enter a valid number or 'A'."),
            }
        }
    }
}
