//! Cell-related types and utilities
//!
//! This module contains:
//! - [`Position`] - A cell's location (e.g., "A1") and its A1 codec
//! - [`Size`] - The printable area of a sheet
//! - [`CellValue`] - The value read from a cell

mod position;
mod value;

pub use position::{Position, Size};
pub use value::{CellError, CellValue};
