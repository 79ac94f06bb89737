//! Console command parsing.
//!
//! # Responsibility
//! - Turn one input line into a typed table command.
//!
//! # Invariants
//! - Parsing never touches the table; bad input is a `CommandError`.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One user action against the people table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add {
        first_name: String,
        last_name: String,
        birth_date: Option<NaiveDate>,
    },
    /// Zero-based row positions as shown by `list`.
    Delete(Vec<usize>),
    Restore,
    Save(usize),
    Help,
    Quit,
}

/// Input that does not form a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    InvalidRow(String),
    InvalidDate(String),
    TooManyArguments(&'static str),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty input; type `help` for commands"),
            Self::Unknown(word) => write!(f, "unknown command `{word}`; type `help` for commands"),
            Self::MissingArgument(usage) => write!(f, "missing argument; usage: {usage}"),
            Self::InvalidRow(value) => write!(f, "not a row number: `{value}`"),
            Self::InvalidDate(value) => write!(f, "not a YYYY-MM-DD date: `{value}`"),
            Self::TooManyArguments(usage) => write!(f, "too many arguments; usage: {usage}"),
        }
    }
}

impl Error for CommandError {}

pub const USAGE: &str = "\
commands:
  list                               show all rows
  add <first> <last> [YYYY-MM-DD]    append a row (use - for an empty name)
  delete <row> [<row>...]            delete the selected rows
  restore                            reset the table to the default rows
  save <row>                         validate and save one row
  help                               show this text
  quit                               exit";

const ADD_USAGE: &str = "add <first> <last> [YYYY-MM-DD]";
const SAVE_USAGE: &str = "save <row>";

/// Parses one line of console input.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err(CommandError::Empty);
    };
    let args = words.collect::<Vec<_>>();

    match verb.to_ascii_lowercase().as_str() {
        "list" | "ls" => Ok(Command::List),
        "add" => parse_add(&args),
        "delete" | "del" | "rm" => args
            .iter()
            .map(|arg| parse_row(arg))
            .collect::<Result<Vec<_>, _>>()
            .map(Command::Delete),
        "restore" => Ok(Command::Restore),
        "save" => match args.as_slice() {
            [] => Err(CommandError::MissingArgument(SAVE_USAGE)),
            [row] => parse_row(row).map(Command::Save),
            _ => Err(CommandError::TooManyArguments(SAVE_USAGE)),
        },
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_add(args: &[&str]) -> Result<Command, CommandError> {
    let (first, last, date) = match args {
        [first, last] => (*first, *last, None),
        [first, last, date] => (*first, *last, Some(*date)),
        [] | [_] => return Err(CommandError::MissingArgument(ADD_USAGE)),
        _ => return Err(CommandError::TooManyArguments(ADD_USAGE)),
    };
    let birth_date = date
        .map(|value| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .map_err(|_| CommandError::InvalidDate(value.to_string()))
        })
        .transpose()?;

    Ok(Command::Add {
        first_name: blank_marker(first),
        last_name: blank_marker(last),
        birth_date,
    })
}

fn parse_row(value: &str) -> Result<usize, CommandError> {
    value
        .parse::<usize>()
        .map_err(|_| CommandError::InvalidRow(value.to_string()))
}

// `-` stands for a name left empty in the form.
fn blank_marker(value: &str) -> String {
    if value == "-" {
        String::new()
    } else {
        value.to_string()
    }
}
