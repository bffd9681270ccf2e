//! Canonical formula text as seen through cells

use cellcalc::prelude::*;
use pretty_assertions::assert_eq;

fn canonical_cell_text(input: &str) -> String {
    let mut sheet = Sheet::new();
    let pos = Position::from_a1("A1");
    sheet.set_cell(pos, input).unwrap();
    sheet.get_cell(pos).unwrap().unwrap().text()
}

#[test]
fn test_redundant_parentheses_are_dropped() {
    assert_eq!(canonical_cell_text("=1-2-3"), "=1-2-3");
    assert_eq!(canonical_cell_text("=(1*2)*3"), "=1*2*3");
    assert_eq!(canonical_cell_text("=-(1*2)"), "=-1*2");
    assert_eq!(canonical_cell_text("=((7))"), "=7");
}

#[test]
fn test_required_parentheses_are_kept() {
    assert_eq!(canonical_cell_text("=1-(2-3)"), "=1-(2-3)");
    assert_eq!(canonical_cell_text("=1*(2+3)"), "=1*(2+3)");
    assert_eq!(canonical_cell_text("=1/(2/3)"), "=1/(2/3)");
    assert_eq!(canonical_cell_text("=-(1+2)"), "=-(1+2)");
}

#[test]
fn test_literals_are_normalized() {
    assert_eq!(canonical_cell_text("= 1.50 + 02"), "=1.5+2");
}

#[test]
fn test_canonical_text_evaluates_the_same() {
    let inputs = ["=1-(2-3)", "=(1+2)*(3-4)/5", "=-(-(2))*+(3)", "=8/(4/(2/1))"];

    for input in inputs {
        let formula = Formula::parse(&input[1..]).unwrap();
        let reparsed = Formula::parse(&formula.expression()).unwrap();
        assert_eq!(formula.evaluate(), reparsed.evaluate(), "{}", input);
        assert_eq!(formula, reparsed, "{}", input);
    }
}

#[test]
fn test_arithmetic_error_flows_to_value() {
    let formula = Formula::parse("1/0").unwrap();
    assert_eq!(formula.evaluate(), FormulaValue::Error(CellError::Arithm));

    let value: CellValue = formula.evaluate().into();
    assert_eq!(value.to_string(), "#ARITHM!");
}
