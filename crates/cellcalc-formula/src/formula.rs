//! Parsed formula facade

use crate::ast::FormulaExpr;
use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::{evaluate, FormulaValue};
use crate::parser::parse_formula;
use std::fmt;
use std::str::FromStr;

/// A parsed arithmetic formula
///
/// Created once from text and immutable afterwards. Parse failures are reported by
/// [`Formula::parse`]; evaluation never fails, it yields `#ARITHM!` instead.
///
/// # Example
/// ```rust
/// use cellcalc_formula::{Formula, FormulaValue};
/// use cellcalc_core::CellError;
///
/// let formula = Formula::parse("(1*2)+(3)").unwrap();
/// assert_eq!(formula.expression(), "1*2+3");
/// assert_eq!(formula.evaluate(), FormulaValue::Number(5.0));
///
/// let formula = Formula::parse("1/0").unwrap();
/// assert_eq!(formula.evaluate(), FormulaValue::Error(CellError::Arithm));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    ast: FormulaExpr,
}

impl Formula {
    /// Parse formula text without the leading `=`
    pub fn parse(expression: &str) -> FormulaResult<Self> {
        parse_formula(expression).map(Self::from_ast)
    }

    /// Wrap an already built tree
    pub fn from_ast(ast: FormulaExpr) -> Self {
        Self { ast }
    }

    /// Evaluate to a number, or `#ARITHM!` on division by zero or overflow
    pub fn evaluate(&self) -> FormulaValue {
        evaluate(&self.ast).into()
    }

    /// Canonical text of the formula, without the leading `=`
    ///
    /// Redundant parentheses are dropped and literals are re-rendered, so `(1.50)`
    /// comes back as `1.5`.
    pub fn expression(&self) -> String {
        self.ast.to_canonical_string()
    }

    /// Fully parenthesized prefix dump, for diagnostics
    pub fn debug_string(&self) -> String {
        self.ast.to_debug_string()
    }

    pub fn ast(&self) -> &FormulaExpr {
        &self.ast
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> FormulaResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ast.write_canonical(f)
    }
}
