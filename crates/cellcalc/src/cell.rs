//! Sheet cells

use cellcalc_core::{CellValue, Error, Result};
use cellcalc_formula::Formula;

/// Marks formula input
const FORMULA_SIGN: char = '=';
/// Marks literal text that would otherwise start with `=`
const ESCAPE_SIGN: char = '\'';

/// Content of a single cell
///
/// Values are computed on every read; nothing is cached.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cell {
    #[default]
    Empty,

    /// Literal text. `value` drops a leading apostrophe, `text` keeps it.
    Text { text: String, value: String },

    Formula(Formula),
}

impl Cell {
    /// Build a cell from user input
    pub fn from_text(text: &str) -> Result<Self> {
        let mut cell = Cell::Empty;
        cell.set(text)?;
        Ok(cell)
    }

    /// Replace the content from user input
    ///
    /// `=expr` (with a non-empty `expr`) becomes a formula, `'text` is stored escaped,
    /// and anything else is stored verbatim. On a formula parse error the cell is left
    /// unchanged.
    pub fn set(&mut self, text: &str) -> Result<()> {
        *self = match text.strip_prefix(FORMULA_SIGN) {
            Some(expression) if !expression.is_empty() => {
                let formula = Formula::parse(expression)
                    .map_err(|e| Error::FormulaParse(e.to_string()))?;
                Cell::Formula(formula)
            }
            _ if text.is_empty() => Cell::Empty,
            _ => {
                let value = text.strip_prefix(ESCAPE_SIGN).unwrap_or(text);
                Cell::Text {
                    text: text.to_string(),
                    value: value.to_string(),
                }
            }
        };
        Ok(())
    }

    /// Evaluated value: formula result, or the unescaped text
    pub fn value(&self) -> CellValue {
        match self {
            Cell::Empty => CellValue::default(),
            Cell::Text { value, .. } => CellValue::Text(value.clone()),
            Cell::Formula(formula) => formula.evaluate().into(),
        }
    }

    /// Display text: `=` plus the canonical expression for formulas, the input otherwise
    pub fn text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text { text, .. } => text.clone(),
            Cell::Formula(formula) => format!("{}{}", FORMULA_SIGN, formula),
        }
    }

    pub fn clear(&mut self) {
        *self = Cell::Empty;
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_formula(&self) -> bool {
        matches!(self, Cell::Formula(_))
    }

    pub fn formula(&self) -> Option<&Formula> {
        match self {
            Cell::Formula(formula) => Some(formula),
            _ => None,
        }
    }
}
