//! # cellcalc-core
//!
//! Core data structures for the cellcalc spreadsheet library.
//!
//! This crate provides the fundamental types used throughout cellcalc:
//! - [`Position`] and [`Size`] - Cell addressing and the A1 codec
//! - [`CellValue`] and [`CellError`] - Values read from cells
//!
//! ## Example
//!
//! ```rust
//! use cellcalc_core::Position;
//!
//! let pos = Position::from_a1("J10");
//! assert_eq!((pos.row, pos.col), (9, 9));
//! assert_eq!(pos.to_string(), "J10");
//! ```

pub mod cell;
pub mod error;

// Re-exports for convenience
pub use cell::{CellError, CellValue, Position, Size};
pub use error::{Error, Result};

/// Maximum number of rows in a sheet
pub const MAX_ROWS: i32 = 16_384;

/// Maximum number of columns in a sheet
pub const MAX_COLS: i32 = 16_384;

/// Maximum number of column letters in an A1 address (26^3 columns)
pub const MAX_POS_LETTER_COUNT: usize = 3;
