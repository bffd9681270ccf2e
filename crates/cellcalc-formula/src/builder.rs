//! AST assembly from parse events

use crate::ast::FormulaExpr;
use crate::error::{FormulaError, FormulaResult};
use crate::events::ParseEvent;

/// Most operators allowed on any root-to-leaf path of a formula tree
///
/// Evaluation, printing and dropping all recurse once per level, so trees deeper than
/// this are rejected while they are built. The parser applies the same limit to
/// parentheses.
pub const MAX_NESTING: usize = 512;

/// A completed sub-tree with the number of operators on its deepest path
#[derive(Debug)]
struct Operand {
    expr: FormulaExpr,
    depth: usize,
}

/// Folds a post-order [`ParseEvent`] stream into a [`FormulaExpr`]
///
/// Completed sub-trees are kept on an operand stack. Operators pop their operands
/// (the right one first) and push the combined node back.
#[derive(Debug, Default)]
pub struct AstBuilder {
    operands: Vec<Operand>,
}

impl AstBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from a complete event stream
    ///
    /// # Example
    /// ```rust
    /// use cellcalc_formula::{AstBuilder, BinaryOperator, ParseEvent};
    ///
    /// let ast = AstBuilder::build([
    ///     ParseEvent::Literal("1"),
    ///     ParseEvent::Literal("2"),
    ///     ParseEvent::Binary(BinaryOperator::Add),
    /// ])
    /// .unwrap();
    /// assert_eq!(ast.to_canonical_string(), "1+2");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the stream is not a well-formed post-order walk (an operator without
    /// enough operands, or anything other than one tree left at the end). That is a bug
    /// in the event source, not a problem with the formula text.
    pub fn build<'a, I>(events: I) -> FormulaResult<FormulaExpr>
    where
        I: IntoIterator<Item = ParseEvent<'a>>,
    {
        let mut builder = Self::new();
        for event in events {
            builder.push_event(event)?;
        }
        Ok(builder.finish())
    }

    /// Consume one event
    pub fn push_event(&mut self, event: ParseEvent<'_>) -> FormulaResult<()> {
        log::trace!("parse event {:?} (stack depth {})", event, self.operands.len());

        match event {
            ParseEvent::Literal(text) => {
                let value = parse_number(text)?;
                self.operands.push(Operand {
                    expr: FormulaExpr::Number(value),
                    depth: 0,
                });
            }
            ParseEvent::Unary(op) => {
                let operand = self.pop_operand(op.symbol());
                let depth = check_depth(operand.depth + 1)?;
                self.operands.push(Operand {
                    expr: FormulaExpr::unary(op, operand.expr),
                    depth,
                });
            }
            ParseEvent::Binary(op) => {
                let right = self.pop_operand(op.symbol());
                let left = self.pop_operand(op.symbol());
                let depth = check_depth(left.depth.max(right.depth) + 1)?;
                self.operands.push(Operand {
                    expr: FormulaExpr::binary(op, left.expr, right.expr),
                    depth,
                });
            }
            ParseEvent::Error(err) => return Err(err),
        }

        Ok(())
    }

    /// Take the finished tree
    ///
    /// # Panics
    ///
    /// Panics unless exactly one operand is left.
    pub fn finish(mut self) -> FormulaExpr {
        assert_eq!(
            self.operands.len(),
            1,
            "parse event stream must leave exactly one operand"
        );
        self.operands.remove(0).expr
    }

    fn pop_operand(&mut self, symbol: char) -> Operand {
        match self.operands.pop() {
            Some(operand) => operand,
            None => panic!("operator '{}' received without an operand", symbol),
        }
    }
}

fn check_depth(depth: usize) -> FormulaResult<usize> {
    if depth > MAX_NESTING {
        return Err(FormulaError::Parse(format!(
            "formula nested deeper than {} levels",
            MAX_NESTING
        )));
    }
    Ok(depth)
}

/// Parse literal text as a finite decimal number
fn parse_number(text: &str) -> FormulaResult<f64> {
    // `f64::from_str` also accepts "inf", "NaN" and signs, none of which are literals.
    let starts_like_number = text.starts_with(|c: char| c.is_ascii_digit() || c == '.');

    match text.parse::<f64>() {
        Ok(value) if starts_like_number && value.is_finite() => Ok(value),
        _ => Err(FormulaError::InvalidNumber(text.to_string())),
    }
}
