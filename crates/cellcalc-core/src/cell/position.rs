//! Cell position and printable size types

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_POS_LETTER_COUNT, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

const LETTERS: i32 = 26;

/// A cell position (e.g., "A1", "J10")
///
/// Rows and columns are 0-based internally. In A1 notation the column is written as
/// bijective base-26 letters (A..Z, AA..ZZ, AAA..) and the row as a 1-based decimal number.
///
/// Ordering is lexicographic on `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Row index (0-based internally, 1-based in display)
    pub row: i32,
    /// Column index (0-based, A=0, B=1, ..., AAA=702)
    pub col: i32,
}

impl Position {
    /// Sentinel for "no position"
    pub const NONE: Position = Position { row: -1, col: -1 };

    /// Create a new position
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check that the position lies inside the sheet limits
    pub fn is_valid(&self) -> bool {
        self.row >= 0 && self.col >= 0 && self.row < MAX_ROWS && self.col < MAX_COLS
    }

    /// Parse a position from A1-style notation, returning [`Position::NONE`] on failure
    ///
    /// # Examples
    /// ```
    /// use cellcalc_core::Position;
    ///
    /// assert_eq!(Position::from_a1("B12"), Position::new(11, 1));
    /// assert_eq!(Position::from_a1("B"), Position::NONE);
    /// assert_eq!(Position::from_a1("b12"), Position::NONE);
    /// ```
    pub fn from_a1(s: &str) -> Self {
        Self::parse(s).unwrap_or(Self::NONE)
    }

    /// Parse a position from A1-style notation
    ///
    /// Only uppercase letters are accepted, at most three of them, followed by a
    /// decimal row number with nothing after it. The result is not checked against
    /// [`MAX_ROWS`]/[`MAX_COLS`]; use [`Position::is_valid`] for that.
    pub fn parse(s: &str) -> Result<Self> {
        let split = s
            .bytes()
            .position(|b| !b.is_ascii_uppercase())
            .unwrap_or(s.len());
        let (letters, digits) = s.split_at(split);

        if letters.is_empty() {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }
        if digits.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }
        if letters.len() > MAX_POS_LETTER_COUNT {
            return Err(Error::InvalidAddress(format!(
                "more than {} column letters in '{}'",
                MAX_POS_LETTER_COUNT, s
            )));
        }
        if !digits.as_bytes()[0].is_ascii_digit() {
            return Err(Error::InvalidAddress(format!(
                "row number must start with a digit in '{}'",
                s
            )));
        }

        let row: i32 = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Ok(Self {
            row: row - 1,
            col: Self::letters_to_column(letters),
        })
    }

    /// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    ///
    /// Negative columns produce an empty string.
    pub fn column_to_letters(col: i32) -> String {
        let mut result = String::new();
        let mut c = col;

        while c >= 0 {
            let letter = (b'A' + (c % LETTERS) as u8) as char;
            result.insert(0, letter);
            c = c / LETTERS - 1;
        }

        result
    }

    // Callers guarantee 1..=MAX_POS_LETTER_COUNT uppercase ASCII letters.
    fn letters_to_column(letters: &str) -> i32 {
        let col = letters
            .bytes()
            .fold(0, |acc, b| acc * LETTERS + i32::from(b - b'A') + 1);
        col - 1
    }

    /// Format as A1-style string
    ///
    /// Invalid positions (including [`Position::NONE`]) format as an empty string.
    pub fn to_a1_string(&self) -> String {
        if !self.is_valid() {
            return String::new();
        }

        let mut result = Self::column_to_letters(self.col);
        result.push_str(&(self.row + 1).to_string());
        result
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Printable area of a sheet, counted from `A1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub rows: i32,
    pub cols: i32,
}

impl Size {
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Grow to also contain `pos`
    pub fn extend_to(&mut self, pos: Position) {
        self.rows = self.rows.max(pos.row + 1);
        self.cols = self.cols.max(pos.col + 1);
    }

    /// Whether `pos` sits on the last row or the last column of this size
    pub fn is_on_boundary(&self, pos: Position) -> bool {
        pos.row + 1 == self.rows || pos.col + 1 == self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}
