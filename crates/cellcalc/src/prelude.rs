//! Prelude module - common imports for cellcalc users
//!
//! ```rust
//! use cellcalc::prelude::*;
//! ```

pub use crate::{
    // Sheet types
    Cell,
    // Values
    CellError,
    CellValue,
    // Error types
    Error,
    Formula,
    FormulaError,
    FormulaValue,
    LineTerminator,
    Position,
    PrintOptions,
    Result,
    Sheet,
    Size,
};
