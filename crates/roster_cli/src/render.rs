//! Plain-text rendering of the people table.

use roster_core::{Person, TableChange};

const HEADERS: [&str; 5] = ["Row", "Id", "First Name", "Last Name", "Birth Date"];

/// Renders rows as an aligned grid with one header line.
pub fn render_rows(rows: &[Person]) -> String {
    let cells = rows
        .iter()
        .enumerate()
        .map(|(row, person)| {
            [
                row.to_string(),
                person.id().to_string(),
                person.first_name.clone(),
                person.last_name.clone(),
                person
                    .birth_date
                    .map(|date| date.to_string())
                    .unwrap_or_default(),
            ]
        })
        .collect::<Vec<_>>();

    let mut widths = HEADERS.map(str::len);
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = format_line(&HEADERS.map(str::to_string), &widths);
    for line in &cells {
        out.push('\n');
        out.push_str(&format_line(line, &widths));
    }
    if cells.is_empty() {
        out.push_str("\n(no rows)");
    }
    out
}

/// One-line summary of a table change.
pub fn describe_change(change: &TableChange) -> String {
    match change {
        TableChange::Inserted { index } => format!("row {index} added"),
        TableChange::Removed { indices } => {
            let rows = indices
                .iter()
                .rev()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("rows {rows} deleted")
        }
        TableChange::Reset { len } => format!("table restored with {len} rows"),
    }
}

fn format_line(cells: &[String; 5], widths: &[usize; 5]) -> String {
    // Trailing empty cells would leave a dangling separator.
    let filled = cells
        .iter()
        .rposition(|cell| !cell.is_empty())
        .map_or(0, |last| last + 1);
    cells[..filled]
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
