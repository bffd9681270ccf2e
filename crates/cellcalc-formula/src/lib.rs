//! # cellcalc-formula
//!
//! Arithmetic formula engine for cellcalc.
//!
//! This crate provides:
//! - Formula parsing (text → parse events → AST)
//! - Formula evaluation (AST → number or `#ARITHM!`)
//! - Canonical printing with minimal parentheses
//!
//! ## Example
//!
//! ```rust
//! use cellcalc_formula::{Formula, FormulaValue};
//!
//! let formula = Formula::parse("1*(2+3)").unwrap();
//! assert_eq!(formula.expression(), "1*(2+3)");
//! assert_eq!(formula.evaluate(), FormulaValue::Number(5.0));
//! ```

pub mod ast;
pub mod builder;
pub mod error;
pub mod evaluator;
pub mod events;
pub mod formula;
pub mod parser;
pub mod printer;

pub use ast::{BinaryOperator, FormulaExpr, UnaryOperator};
pub use builder::{AstBuilder, MAX_NESTING};
pub use error::{ArithmeticError, FormulaError, FormulaResult};
pub use evaluator::{evaluate, FormulaValue};
pub use events::ParseEvent;
pub use formula::Formula;
pub use parser::{parse_events, parse_formula};
pub use printer::Precedence;
