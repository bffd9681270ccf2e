//! Formula printers
//!
//! Two renderings of a [`FormulaExpr`]:
//! - canonical infix text with only the parentheses needed to rebuild the same tree
//! - a fully parenthesized prefix dump used for diagnostics, e.g. `(+ (* 1 2) 3)`

use crate::ast::{BinaryOperator, FormulaExpr};
use std::fmt::{self, Write};

/// Printing precedence of a node, loosest first
///
/// This is not the grammar precedence: `+` and `-` (and `*` and `/`) get separate
/// levels because regrouping is only safe for some of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Add,
    Sub,
    Mul,
    Div,
    Unary,
    Atom,
}

impl Precedence {
    const COUNT: usize = 6;

    fn index(self) -> usize {
        self as usize
    }

    /// Whether a child of precedence `child` printed under `self` needs parentheses
    pub fn needs_parens(self, child: Precedence, right_child: bool) -> bool {
        let side = if right_child { PAREN_RIGHT } else { PAREN_LEFT };
        PRECEDENCE_RULES[self.index()][child.index()] & side != 0
    }
}

const PAREN_NONE: u8 = 0b00;
const PAREN_LEFT: u8 = 0b01;
const PAREN_RIGHT: u8 = 0b10;
const PAREN_BOTH: u8 = PAREN_LEFT | PAREN_RIGHT;

// PRECEDENCE_RULES[parent][child]: which sides of `parent` must wrap a `child` in parentheses.
//
// A + (B + C), A + (B - C)  never need them
// A - (B + C), A - (B - C)  always need them on the right
// A * (B * C), A * (B / C)  never need them
// A / (B * C), A / (B / C)  always need them on the right
// -(A + B), -(A - B)        always need them
// -(A * B), -(A / B)        never need them
// +(A + B) only sometimes needs them (`+(A + B) / C` does not); they are always kept.
const PRECEDENCE_RULES: [[u8; Precedence::COUNT]; Precedence::COUNT] = [
    /* Add   */ [PAREN_NONE, PAREN_NONE, PAREN_NONE, PAREN_NONE, PAREN_NONE, PAREN_NONE],
    /* Sub   */ [PAREN_RIGHT, PAREN_RIGHT, PAREN_NONE, PAREN_NONE, PAREN_NONE, PAREN_NONE],
    /* Mul   */ [PAREN_BOTH, PAREN_BOTH, PAREN_NONE, PAREN_NONE, PAREN_NONE, PAREN_NONE],
    /* Div   */ [PAREN_BOTH, PAREN_BOTH, PAREN_RIGHT, PAREN_RIGHT, PAREN_NONE, PAREN_NONE],
    /* Unary */ [PAREN_BOTH, PAREN_BOTH, PAREN_NONE, PAREN_NONE, PAREN_NONE, PAREN_NONE],
    /* Atom  */ [PAREN_NONE, PAREN_NONE, PAREN_NONE, PAREN_NONE, PAREN_NONE, PAREN_NONE],
];

impl BinaryOperator {
    pub fn precedence(self) -> Precedence {
        match self {
            BinaryOperator::Add => Precedence::Add,
            BinaryOperator::Subtract => Precedence::Sub,
            BinaryOperator::Multiply => Precedence::Mul,
            BinaryOperator::Divide => Precedence::Div,
        }
    }
}

impl FormulaExpr {
    /// Printing precedence of this node
    pub fn precedence(&self) -> Precedence {
        match self {
            FormulaExpr::Number(_) => Precedence::Atom,
            FormulaExpr::UnaryOp { .. } => Precedence::Unary,
            FormulaExpr::BinaryOp { op, .. } => op.precedence(),
        }
    }

    /// Write canonical infix text (no leading `=`)
    ///
    /// # Example
    /// ```rust
    /// use cellcalc_formula::{BinaryOperator, FormulaExpr};
    ///
    /// let expr = FormulaExpr::binary(
    ///     BinaryOperator::Multiply,
    ///     FormulaExpr::number(1.0),
    ///     FormulaExpr::binary(BinaryOperator::Add, FormulaExpr::number(2.0), FormulaExpr::number(3.0)),
    /// );
    /// assert_eq!(expr.to_canonical_string(), "1*(2+3)");
    /// ```
    pub fn write_canonical<W: Write>(&self, out: &mut W) -> fmt::Result {
        // The root is printed as if under an atom, which never adds parentheses.
        self.write_with_precedence(out, Precedence::Atom, false)
    }

    /// Canonical infix text as an owned string
    pub fn to_canonical_string(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_canonical(&mut out);
        out
    }

    /// Write this node as a child of a `parent` precedence node
    pub fn write_with_precedence<W: Write>(
        &self,
        out: &mut W,
        parent: Precedence,
        right_child: bool,
    ) -> fmt::Result {
        let precedence = self.precedence();
        let parens = parent.needs_parens(precedence, right_child);

        if parens {
            out.write_char('(')?;
        }
        self.write_inorder(out, precedence)?;
        if parens {
            out.write_char(')')?;
        }
        Ok(())
    }

    fn write_inorder<W: Write>(&self, out: &mut W, precedence: Precedence) -> fmt::Result {
        match self {
            FormulaExpr::Number(value) => write!(out, "{}", value),
            FormulaExpr::UnaryOp { op, operand } => {
                out.write_char(op.symbol())?;
                operand.write_with_precedence(out, precedence, false)
            }
            FormulaExpr::BinaryOp { op, left, right } => {
                left.write_with_precedence(out, precedence, false)?;
                out.write_char(op.symbol())?;
                right.write_with_precedence(out, precedence, true)
            }
        }
    }

    /// Write the fully parenthesized prefix dump
    pub fn write_debug<W: Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            FormulaExpr::Number(value) => write!(out, "{}", value),
            FormulaExpr::UnaryOp { op, operand } => {
                write!(out, "({} ", op)?;
                operand.write_debug(out)?;
                out.write_char(')')
            }
            FormulaExpr::BinaryOp { op, left, right } => {
                write!(out, "({} ", op)?;
                left.write_debug(out)?;
                out.write_char(' ')?;
                right.write_debug(out)?;
                out.write_char(')')
            }
        }
    }

    /// Prefix dump as an owned string
    pub fn to_debug_string(&self) -> String {
        let mut out = String::new();
        let _ = self.write_debug(&mut out);
        out
    }
}

impl fmt::Display for FormulaExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_canonical(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::UnaryOperator;
    use pretty_assertions::assert_eq;

    fn num(v: f64) -> FormulaExpr {
        FormulaExpr::number(v)
    }

    fn bin(op: BinaryOperator, l: FormulaExpr, r: FormulaExpr) -> FormulaExpr {
        FormulaExpr::binary(op, l, r)
    }

    fn neg(e: FormulaExpr) -> FormulaExpr {
        FormulaExpr::unary(UnaryOperator::Minus, e)
    }

    fn pos(e: FormulaExpr) -> FormulaExpr {
        FormulaExpr::unary(UnaryOperator::Plus, e)
    }

    use BinaryOperator::{Add, Divide as Div, Multiply as Mul, Subtract as Sub};

    #[test]
    fn test_rule_table_rows() {
        use Precedence as P;
        let levels = [P::Add, P::Sub, P::Mul, P::Div, P::Unary, P::Atom];

        // Add and Atom parents never parenthesize.
        for child in levels {
            for right in [false, true] {
                assert!(!P::Add.needs_parens(child, right));
                assert!(!P::Atom.needs_parens(child, right));
            }
        }

        assert!(P::Sub.needs_parens(P::Add, true));
        assert!(P::Sub.needs_parens(P::Sub, true));
        assert!(!P::Sub.needs_parens(P::Add, false));
        assert!(!P::Sub.needs_parens(P::Mul, true));

        assert!(P::Mul.needs_parens(P::Add, false));
        assert!(P::Mul.needs_parens(P::Sub, true));
        assert!(!P::Mul.needs_parens(P::Div, true));

        assert!(P::Div.needs_parens(P::Mul, true));
        assert!(P::Div.needs_parens(P::Div, true));
        assert!(!P::Div.needs_parens(P::Div, false));
        assert!(!P::Div.needs_parens(P::Unary, true));

        assert!(P::Unary.needs_parens(P::Add, false));
        assert!(P::Unary.needs_parens(P::Sub, false));
        assert!(!P::Unary.needs_parens(P::Mul, false));
        assert!(!P::Unary.needs_parens(P::Atom, false));
    }

    #[test]
    fn test_left_assoc_chain_has_no_parens() {
        let e = bin(Sub, bin(Sub, num(1.0), num(2.0)), num(3.0));
        assert_eq!(e.to_canonical_string(), "1-2-3");
    }

    #[test]
    fn test_right_nested_subtraction_keeps_parens() {
        let e = bin(Sub, num(1.0), bin(Sub, num(2.0), num(3.0)));
        assert_eq!(e.to_canonical_string(), "1-(2-3)");

        let e = bin(Sub, num(1.0), bin(Add, num(2.0), num(3.0)));
        assert_eq!(e.to_canonical_string(), "1-(2+3)");
    }

    #[test]
    fn test_right_nested_addition_drops_parens() {
        let e = bin(Add, num(1.0), bin(Sub, num(2.0), num(3.0)));
        assert_eq!(e.to_canonical_string(), "1+2-3");
    }

    #[test]
    fn test_looser_child_under_product() {
        let e = bin(Mul, num(1.0), bin(Add, num(2.0), num(3.0)));
        assert_eq!(e.to_canonical_string(), "1*(2+3)");

        let e = bin(Div, bin(Sub, num(1.0), num(2.0)), num(3.0));
        assert_eq!(e.to_canonical_string(), "(1-2)/3");
    }

    #[test]
    fn test_products() {
        let e = bin(Mul, bin(Mul, num(1.0), num(2.0)), num(3.0));
        assert_eq!(e.to_canonical_string(), "1*2*3");

        let e = bin(Mul, num(1.0), bin(Div, num(2.0), num(3.0)));
        assert_eq!(e.to_canonical_string(), "1*2/3");

        let e = bin(Div, num(1.0), bin(Div, num(2.0), num(3.0)));
        assert_eq!(e.to_canonical_string(), "1/(2/3)");

        let e = bin(Div, num(1.0), bin(Mul, num(2.0), num(3.0)));
        assert_eq!(e.to_canonical_string(), "1/(2*3)");

        let e = bin(Div, bin(Mul, num(1.0), num(2.0)), num(3.0));
        assert_eq!(e.to_canonical_string(), "1*2/3");
    }

    #[test]
    fn test_unary_operands() {
        assert_eq!(
            neg(bin(Mul, num(1.0), num(2.0))).to_canonical_string(),
            "-1*2"
        );
        assert_eq!(
            neg(bin(Add, num(1.0), num(2.0))).to_canonical_string(),
            "-(1+2)"
        );
        assert_eq!(
            pos(bin(Sub, num(1.0), num(2.0))).to_canonical_string(),
            "+(1-2)"
        );
        assert_eq!(neg(neg(num(4.0))).to_canonical_string(), "--4");
        assert_eq!(
            bin(Sub, num(1.0), neg(num(2.0))).to_canonical_string(),
            "1--2"
        );
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(num(3.0).to_canonical_string(), "3");
        assert_eq!(num(0.25).to_canonical_string(), "0.25");
        assert_eq!(num(1e20).to_canonical_string(), "100000000000000000000");
    }

    #[test]
    fn test_debug_dump() {
        let e = bin(Add, bin(Mul, num(1.0), num(2.0)), num(3.0));
        assert_eq!(e.to_debug_string(), "(+ (* 1 2) 3)");

        let e = neg(bin(Div, num(1.0), num(0.5)));
        assert_eq!(e.to_debug_string(), "(- (/ 1 0.5))");
    }

    #[test]
    fn test_display_is_canonical() {
        let e = bin(Mul, bin(Add, num(1.0), num(2.0)), num(3.0));
        assert_eq!(format!("{}", e), "(1+2)*3");
    }
}
