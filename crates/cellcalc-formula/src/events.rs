//! Parse events
//!
//! The boundary between a tokenizer/parser and [`crate::AstBuilder`]. A source
//! reports the formula in post-order: every operand is complete before the
//! operator that consumes it, so `1+2*3` arrives as
//! `Literal("1") Literal("2") Literal("3") Binary(*) Binary(+)`.
//!
//! Grouping parentheses never appear as events; only their effect on the order does.

use crate::ast::{BinaryOperator, UnaryOperator};
use crate::error::FormulaError;

/// A single event from a formula parse
#[derive(Debug, Clone, PartialEq)]
pub enum ParseEvent<'a> {
    /// Numeric literal text, not yet validated
    Literal(&'a str),

    /// A unary operator whose operand has just been completed
    Unary(UnaryOperator),

    /// A binary operator whose two operands have just been completed
    Binary(BinaryOperator),

    /// The source rejected the input; nothing follows this event
    Error(FormulaError),
}
