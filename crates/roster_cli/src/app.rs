//! Interactive console session over a people table.
//!
//! # Responsibility
//! - Read commands, apply them to the table, print results.
//! - Act as the table's view: re-render rows after every change event.
//!
//! # Invariants
//! - Bad input is reported and the session continues.
//! - Only `quit` or end of input ends the session.

use crate::command::{parse_command, Command, USAGE};
use crate::render::{describe_change, render_rows};
use log::debug;
use roster_core::{messages, DeleteOutcome, IdGenerator, Person, PersonTable};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

const PROMPT: &str = "roster> ";

/// Runs the session until `quit` or end of input.
pub fn run<G, R, W>(mut table: PersonTable<G>, input: R, mut output: W) -> io::Result<()>
where
    G: IdGenerator,
    R: BufRead,
    W: Write,
{
    let view = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = Rc::clone(&view);
    table.subscribe(move |change, rows| {
        let mut sink = sink.borrow_mut();
        sink.push(describe_change(change));
        sink.push(render_rows(rows));
    });

    writeln!(output, "{}", render_rows(table.items()))?;
    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "{PROMPT}")?;
            output.flush()?;
            continue;
        }

        let keep_going = match parse_command(&line) {
            Ok(command) => execute(&mut table, command, &mut output)?,
            Err(err) => {
                writeln!(output, "error: {err}")?;
                true
            }
        };
        for text in view.borrow_mut().drain(..) {
            writeln!(output, "{text}")?;
        }
        if !keep_going {
            break;
        }
        write!(output, "{PROMPT}")?;
        output.flush()?;
    }
    Ok(())
}

fn execute<G: IdGenerator, W: Write>(
    table: &mut PersonTable<G>,
    command: Command,
    output: &mut W,
) -> io::Result<bool> {
    debug!("event=command module=cli status=start command={command:?}");
    match command {
        Command::List => writeln!(output, "{}", render_rows(table.items()))?,
        Command::Add {
            first_name,
            last_name,
            birth_date,
        } => {
            let person = Person::new(table.ids(), first_name, last_name, birth_date);
            table.insert(person);
        }
        Command::Delete(rows) => match table.delete_indices(&rows) {
            DeleteOutcome::NoSelection => writeln!(output, "Please select a row to delete.")?,
            DeleteOutcome::Deleted { removed } if removed.is_empty() => {
                writeln!(output, "No matching rows.")?
            }
            DeleteOutcome::Deleted { .. } => {}
        },
        Command::Restore => table.reset_to_seed(),
        Command::Save(row) => match table.get(row) {
            None => writeln!(output, "No row {row}.")?,
            Some(person) => {
                let mut errors = Vec::new();
                if person.save(&mut errors) {
                    writeln!(output, "Saved {person} age={}", person.age_category())?;
                } else {
                    for message in messages(&errors) {
                        writeln!(output, "  {message}")?;
                    }
                }
            }
        },
        Command::Help => writeln!(output, "{USAGE}")?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}
