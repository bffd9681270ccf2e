//! Sparse sheet of cells

use std::collections::BTreeMap;
use std::io::{self, Write};

use cellcalc_core::{Error, Position, Result, Size};

use crate::cell::Cell;
use crate::options::PrintOptions;

/// A sparse grid of cells
///
/// Only occupied positions are stored, ordered row-major. The printable size is kept
/// up to date on every mutation.
///
/// # Example
/// ```rust
/// use cellcalc::{Position, Sheet, Size};
///
/// let mut sheet = Sheet::new();
/// sheet.set_cell(Position::from_a1("B2"), "=1+2").unwrap();
/// assert_eq!(sheet.printable_size(), Size::new(2, 2));
///
/// let mut out = Vec::new();
/// sheet.print_values(&mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "\t\n\t3\n");
/// ```
#[derive(Debug, Default)]
pub struct Sheet {
    cells: BTreeMap<Position, Cell>,
    size: Size,
}

impl Sheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell from user input, creating it if needed
    ///
    /// Setting an empty string stores an empty cell, which still counts toward the
    /// printable size.
    pub fn set_cell(&mut self, pos: Position, text: &str) -> Result<()> {
        validate_position(pos)?;

        match self.cells.get_mut(&pos) {
            Some(cell) => cell.set(text)?,
            None => {
                let cell = Cell::from_text(text)?;
                self.cells.insert(pos, cell);
            }
        }
        self.size.extend_to(pos);

        log::debug!("set {} to {:?}", pos, text);
        Ok(())
    }

    /// Get the cell at `pos`, `None` if it was never set
    pub fn get_cell(&self, pos: Position) -> Result<Option<&Cell>> {
        validate_position(pos)?;
        Ok(self.cells.get(&pos))
    }

    pub fn get_cell_mut(&mut self, pos: Position) -> Result<Option<&mut Cell>> {
        validate_position(pos)?;
        Ok(self.cells.get_mut(&pos))
    }

    /// Remove the cell at `pos`; clearing an unset position does nothing
    pub fn clear_cell(&mut self, pos: Position) -> Result<()> {
        validate_position(pos)?;

        if self.cells.remove(&pos).is_none() {
            return Ok(());
        }

        if self.size.is_on_boundary(pos) {
            self.size = self.occupied_size();
            log::debug!("cleared {}, printable size now {:?}", pos, self.size);
        }
        Ok(())
    }

    /// Smallest area from `A1` that covers every stored cell
    pub fn printable_size(&self) -> Size {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Iterate over stored cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> {
        self.cells.iter().map(|(pos, cell)| (*pos, cell))
    }

    /// Write cell texts as a tab separated grid
    pub fn print_texts<W: Write>(&self, out: W) -> io::Result<()> {
        self.print_texts_with(out, &PrintOptions::default())
    }

    /// Write cell values as a tab separated grid
    pub fn print_values<W: Write>(&self, out: W) -> io::Result<()> {
        self.print_values_with(out, &PrintOptions::default())
    }

    pub fn print_texts_with<W: Write>(&self, out: W, options: &PrintOptions) -> io::Result<()> {
        self.print_grid(out, options, |cell| cell.text())
    }

    pub fn print_values_with<W: Write>(&self, out: W, options: &PrintOptions) -> io::Result<()> {
        self.print_grid(out, options, |cell| cell.value().to_string())
    }

    fn print_grid<W, F>(&self, mut out: W, options: &PrintOptions, render: F) -> io::Result<()>
    where
        W: Write,
        F: Fn(&Cell) -> String,
    {
        let mut buf = [0u8; 4];
        let delimiter = options.delimiter.encode_utf8(&mut buf).as_bytes();
        let terminator = options.line_terminator.as_str().as_bytes();

        for row in 0..self.size.rows {
            for col in 0..self.size.cols {
                if col > 0 {
                    out.write_all(delimiter)?;
                }
                if let Some(cell) = self.cells.get(&Position::new(row, col)) {
                    out.write_all(render(cell).as_bytes())?;
                }
            }
            out.write_all(terminator)?;
        }

        out.flush()
    }

    fn occupied_size(&self) -> Size {
        self.cells.keys().fold(Size::default(), |mut size, pos| {
            size.extend_to(*pos);
            size
        })
    }
}

fn validate_position(pos: Position) -> Result<()> {
    if pos.is_valid() {
        Ok(())
    } else {
        Err(Error::InvalidPosition(pos))
    }
}
