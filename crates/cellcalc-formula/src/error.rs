//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur while turning formula text into an AST
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    /// The tokenizer hit a character it does not understand
    #[error("Error when lexing: {0}")]
    Lex(String),

    /// The token stream does not match the formula grammar
    #[error("Error when parsing: {0}")]
    Parse(String),

    /// A numeric literal is not a finite decimal number
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

/// Division by zero or a non-finite intermediate result
///
/// Returned by [`crate::evaluate`]; [`crate::Formula::evaluate`] turns it into an
/// in-band `#ARITHM!` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("arithmetic error")]
pub struct ArithmeticError;
