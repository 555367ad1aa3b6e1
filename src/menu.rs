//! The interactive menu around a loaded table.

use grocer_core::{FrequencyTable, Reporter};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub const MENU: &str = "\n===== Corner Grocer Item Tracker =====\n\
1. Search for an item frequency\n\
2. Print all item frequencies\n\
3. Print histogram\n\
4. Exit\n\
Enter your choice (1-4): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Search,
    PrintAll,
    Histogram,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceError {
    NotANumber,
    OutOfRange(i32),
}

pub fn parse_choice(word: &str) -> Result<Choice, ChoiceError> {
    let number: i32 = word.parse().map_err(|_| ChoiceError::NotANumber)?;
    match number {
        1 => Ok(Choice::Search),
        2 => Ok(Choice::PrintAll),
        3 => Ok(Choice::Histogram),
        4 => Ok(Choice::Exit),
        other => Err(ChoiceError::OutOfRange(other)),
    }
}

/// Whitespace-separated words from a line-oriented reader.
pub struct Words<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Words<R> {
    pub fn new(reader: R) -> Words<R> {
        Words {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next word, reading further lines as needed. `None` at end of input.
    pub fn next_word(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        while self.pending.is_empty() {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Drops whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}

/// Serves menu choices until Exit or end of input.
pub fn run<R, W>(
    table: &FrequencyTable,
    marker: char,
    words: &mut Words<R>,
    out: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let reporter = Reporter::new(table).with_marker(marker);
    loop {
        write!(out, "{}", MENU)?;
        out.flush()?;

        let word = match words.next_word()? {
            Some(word) => word,
            None => {
                writeln!(out)?;
                return Ok(());
            }
        };

        match parse_choice(&word) {
            Ok(Choice::Search) => {
                write!(out, "Enter the item you want to search for: ")?;
                out.flush()?;
                let item = match words.next_word()? {
                    Some(item) => item,
                    None => {
                        writeln!(out)?;
                        return Ok(());
                    }
                };
                writeln!(
                    out,
                    "{} was purchased {} time(s).",
                    item,
                    table.lookup(&item)
                )?;
            }
            Ok(Choice::PrintAll) => reporter.frequencies(&mut *out)?,
            Ok(Choice::Histogram) => reporter.histogram(&mut *out)?,
            Ok(Choice::Exit) => {
                writeln!(out, "Exiting program. Goodbye!")?;
                return Ok(());
            }
            Err(ChoiceError::NotANumber) => {
                words.discard_line();
                writeln!(out, "Invalid input. Please enter a number 1-4.")?;
            }
            Err(ChoiceError::OutOfRange(_)) => {
                writeln!(out, "Invalid choice. Please enter 1-4.")?;
            }
        }
    }
}
