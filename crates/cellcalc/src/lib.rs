//! # cellcalc
//!
//! A small spreadsheet model with arithmetic formulas.
//!
//! Cells hold plain text, escaped text (`'=not a formula`) or formulas (`=1+2*3`).
//! Formulas support `+ - * /`, unary signs, decimal literals and parentheses; they are
//! stored in canonical form and evaluated on every read. Division by zero or overflow
//! produces `#ARITHM!` instead of failing.
//!
//! ## Example
//!
//! ```rust
//! use cellcalc::prelude::*;
//!
//! let mut sheet = Sheet::new();
//! sheet.set_cell(Position::from_a1("A1"), "=1/0").unwrap();
//! sheet.set_cell(Position::from_a1("A2"), "meow").unwrap();
//! sheet.set_cell(Position::from_a1("B2"), "=(1)+(2)").unwrap();
//!
//! let mut texts = Vec::new();
//! sheet.print_texts(&mut texts).unwrap();
//! assert_eq!(String::from_utf8(texts).unwrap(), "=1/0\t\nmeow\t=1+2\n");
//!
//! let mut values = Vec::new();
//! sheet.print_values(&mut values).unwrap();
//! assert_eq!(String::from_utf8(values).unwrap(), "#ARITHM!\t\nmeow\t3\n");
//! ```

pub mod cell;
pub mod options;
pub mod prelude;
pub mod sheet;

pub use cell::Cell;
pub use options::{LineTerminator, PrintOptions};
pub use sheet::Sheet;

// Re-export core types
pub use cellcalc_core::{
    CellError, CellValue, Error, Position, Result, Size, MAX_COLS, MAX_POS_LETTER_COUNT,
    MAX_ROWS,
};

// Re-export formula types
pub use cellcalc_formula::{
    evaluate, parse_events, parse_formula, ArithmeticError, AstBuilder, BinaryOperator, Formula,
    FormulaError, FormulaExpr, FormulaResult, FormulaValue, ParseEvent, Precedence,
    UnaryOperator,
};
