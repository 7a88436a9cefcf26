#![cfg(feature = "std")]

//! Text front-end: draws a field and reads coordinates from a terminal.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use crate::common::{Cell, FieldError};
use crate::field::TicTacToeField;
use crate::turn::Turn;

fn cell_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::PlayerOne => 'X',
        Cell::PlayerTwo => 'O',
    }
}

/// Render `field` as text: a header with column numbers, then one line per row.
pub fn render(field: &TicTacToeField) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..field.columns() {
        let _ = write!(out, " {}", c);
    }
    out.push('\n');
    for (r, row) in field.cells().chunks(field.columns()).enumerate() {
        let _ = write!(out, "{:2} ", r);
        for cell in row {
            let _ = write!(out, " {}", cell_char(*cell));
        }
        out.push('\n');
    }
    out
}

/// Parse `"row column"` (zero-based) and check it against `field`.
pub fn parse_coord(input: &str, field: &TicTacToeField) -> Result<(usize, usize), String> {
    let mut parts = input.split_whitespace();
    let row_str = parts.next().ok_or("Empty input")?;
    let col_str = parts
        .next()
        .ok_or("Need a row and a column (e.g., 1 2)")?;
    if parts.next().is_some() {
        return Err("Too many values - enter just a row and a column".to_string());
    }
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number", row_str))?;
    let column: usize = col_str
        .parse()
        .map_err(|_| format!("Invalid column '{}' - must be a number", col_str))?;
    if row >= field.rows() {
        return Err(format!(
            "Row {} out of bounds - must be 0-{}",
            row,
            field.rows() - 1
        ));
    }
    if column >= field.columns() {
        return Err(format!(
            "Column {} out of bounds - must be 0-{}",
            column,
            field.columns() - 1
        ));
    }
    Ok((row, column))
}

/// Interactive two-player game on `field`, reading moves from `input`.
///
/// The board is redrawn by a listener subscribed for the duration of the
/// game. Returns when input ends, the user types `quit`, or every cell is
/// marked.
pub fn play<R: BufRead>(field: &mut TicTacToeField, input: R) -> anyhow::Result<()> {
    let dirty = Rc::new(std::cell::Cell::new(true));
    let flag = Rc::clone(&dirty);
    let redraw = field.subscribe(move || flag.set(true));
    let result = run_turns(field, input, &dirty);
    field.unsubscribe(redraw);
    result
}

fn run_turns<R: BufRead>(
    field: &mut TicTacToeField,
    mut input: R,
    dirty: &std::cell::Cell<bool>,
) -> anyhow::Result<()> {
    let mut turn = Turn::new();
    loop {
        if dirty.replace(false) {
            print!("{}", render(field));
        }
        if field.cells().iter().all(|c| !c.is_empty()) {
            println!("Field is full.");
            return Ok(());
        }
        print!("{:?} > ", turn.current());
        io::stdout().flush()?;
        let mut buf = String::new();
        if input.read_line(&mut buf)? == 0 {
            return Ok(());
        }
        let line = buf.trim();
        if line.eq_ignore_ascii_case("quit") {
            return Ok(());
        }
        let (row, column) = match parse_coord(line, field) {
            Ok(coord) => coord,
            Err(msg) => {
                println!("{}", msg);
                continue;
            }
        };
        match turn.place(field, row, column) {
            Ok(_) => {}
            Err(e @ FieldError::CellOccupied { .. }) => println!("{}", e),
            Err(e) => return Err(e.into()),
        }
    }
}
