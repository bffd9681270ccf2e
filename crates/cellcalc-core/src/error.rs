//! Error types for cellcalc-core

use crate::cell::Position;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cellcalc-core and the sheet layer built on it
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Position outside of the sheet limits
    #[error("Invalid position: ({}, {})", .0.row, .0.col)]
    InvalidPosition(Position),

    /// Formula parse error
    #[error("Formula parse error: {0}")]
    FormulaParse(String),
}
