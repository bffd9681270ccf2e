//! Formula evaluator
//!
//! Evaluates formula ASTs with IEEE double precision. Division by exactly zero and
//! any non-finite operator result are reported as [`ArithmeticError`].

use crate::ast::{BinaryOperator, FormulaExpr, UnaryOperator};
use crate::error::ArithmeticError;
use cellcalc_core::{CellError, CellValue};

/// Result of evaluating a formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormulaValue {
    Number(f64),
    Error(CellError),
}

impl FormulaValue {
    /// Get the number, if evaluation succeeded
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FormulaValue::Number(n) => Some(*n),
            FormulaValue::Error(_) => None,
        }
    }

    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, FormulaValue::Error(_))
    }
}

impl From<Result<f64, ArithmeticError>> for FormulaValue {
    fn from(result: Result<f64, ArithmeticError>) -> Self {
        match result {
            Ok(n) => FormulaValue::Number(n),
            Err(ArithmeticError) => FormulaValue::Error(CellError::Arithm),
        }
    }
}

impl From<FormulaValue> for CellValue {
    fn from(value: FormulaValue) -> Self {
        match value {
            FormulaValue::Number(n) => CellValue::Number(n),
            FormulaValue::Error(e) => CellValue::Error(e),
        }
    }
}

/// Evaluate a formula expression
pub fn evaluate(expr: &FormulaExpr) -> Result<f64, ArithmeticError> {
    match expr {
        FormulaExpr::Number(n) => Ok(*n),
        FormulaExpr::UnaryOp { op, operand } => evaluate_unary_op(*op, operand),
        FormulaExpr::BinaryOp { op, left, right } => evaluate_binary_op(*op, left, right),
    }
}

fn evaluate_binary_op(
    op: BinaryOperator,
    left: &FormulaExpr,
    right: &FormulaExpr,
) -> Result<f64, ArithmeticError> {
    let l = evaluate(left)?;
    let r = evaluate(right)?;

    let result = match op {
        BinaryOperator::Add => l + r,
        BinaryOperator::Subtract => l - r,
        BinaryOperator::Multiply => l * r,
        BinaryOperator::Divide => {
            if r == 0.0 {
                return Err(ArithmeticError);
            }
            l / r
        }
    };

    finite(result)
}

fn evaluate_unary_op(op: UnaryOperator, operand: &FormulaExpr) -> Result<f64, ArithmeticError> {
    let n = evaluate(operand)?;

    let result = match op {
        UnaryOperator::Plus => n,
        UnaryOperator::Minus => -n,
    };

    finite(result)
}

fn finite(n: f64) -> Result<f64, ArithmeticError> {
    if n.is_finite() {
        Ok(n)
    } else {
        Err(ArithmeticError)
    }
}
