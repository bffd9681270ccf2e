//! Sheet behaviour through the public API

use cellcalc::prelude::*;
use cellcalc::{MAX_COLS, MAX_ROWS};
use pretty_assertions::assert_eq;

fn print_texts(sheet: &Sheet) -> String {
    let mut out = Vec::new();
    sheet.print_texts(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn print_values(sheet: &Sheet) -> String {
    let mut out = Vec::new();
    sheet.print_values(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_empty_sheet() {
    let sheet = Sheet::new();
    assert_eq!(sheet.printable_size(), Size::new(0, 0));
    assert_eq!(print_texts(&sheet), "");
    assert_eq!(print_values(&sheet), "");
}

#[test]
fn test_invalid_positions() {
    let mut sheet = Sheet::new();
    let invalid = [
        Position::new(-1, 0),
        Position::new(0, -2),
        Position::new(MAX_ROWS, 0),
        Position::new(0, MAX_COLS),
        Position::NONE,
    ];

    for pos in invalid {
        assert!(matches!(
            sheet.set_cell(pos, "x"),
            Err(Error::InvalidPosition(p)) if p == pos
        ));
        assert!(matches!(sheet.get_cell(pos), Err(Error::InvalidPosition(_))));
        assert!(matches!(sheet.clear_cell(pos), Err(Error::InvalidPosition(_))));
    }
    assert!(sheet.is_empty());
}

#[test]
fn test_last_valid_position() {
    let mut sheet = Sheet::new();
    let pos = Position::new(MAX_ROWS - 1, MAX_COLS - 1);
    sheet.set_cell(pos, "corner").unwrap();
    assert_eq!(sheet.printable_size(), Size::new(MAX_ROWS, MAX_COLS));
    sheet.clear_cell(pos).unwrap();
    assert_eq!(sheet.printable_size(), Size::new(0, 0));
}

#[test]
fn test_plain_and_escaped_text() {
    let mut sheet = Sheet::new();
    sheet.set_cell(Position::from_a1("A1"), "hello").unwrap();
    sheet.set_cell(Position::from_a1("A2"), "'=escaped").unwrap();

    let plain = sheet.get_cell(Position::from_a1("A1")).unwrap().unwrap();
    assert_eq!(plain.text(), "hello");
    assert_eq!(plain.value(), CellValue::text("hello"));

    let escaped = sheet.get_cell(Position::from_a1("A2")).unwrap().unwrap();
    assert_eq!(escaped.text(), "'=escaped");
    assert_eq!(escaped.value(), CellValue::text("=escaped"));
}

#[test]
fn test_formula_cell() {
    let mut sheet = Sheet::new();
    sheet.set_cell(Position::from_a1("C3"), "=1+2").unwrap();

    let cell = sheet.get_cell(Position::from_a1("C3")).unwrap().unwrap();
    assert!(cell.is_formula());
    assert_eq!(cell.value(), CellValue::Number(3.0));
    assert_eq!(cell.text(), "=1+2");
}

#[test]
fn test_formula_parse_error_is_reported() {
    let mut sheet = Sheet::new();
    let err = sheet.set_cell(Position::from_a1("A1"), "=1+*").unwrap_err();
    assert!(matches!(err, Error::FormulaParse(_)));
    assert!(sheet.get_cell(Position::from_a1("A1")).unwrap().is_none());
}

#[test]
fn test_overlong_formula_is_a_parse_error() {
    let mut sheet = Sheet::new();
    let text = format!("={}1", "1+".repeat(50_000));
    let err = sheet.set_cell(Position::from_a1("A1"), &text).unwrap_err();
    assert!(matches!(err, Error::FormulaParse(_)));
    assert!(sheet.is_empty());
}

#[test]
fn test_clear_cell() {
    let mut sheet = Sheet::new();
    let pos = Position::from_a1("B2");
    sheet.set_cell(pos, "x").unwrap();
    sheet.clear_cell(pos).unwrap();

    assert!(sheet.get_cell(pos).unwrap().is_none());
    assert_eq!(sheet.printable_size(), Size::new(0, 0));

    // Clearing again is a no-op
    sheet.clear_cell(pos).unwrap();
}

#[test]
fn test_print() {
    let mut sheet = Sheet::new();
    sheet.set_cell(Position::from_a1("A2"), "meow").unwrap();
    sheet.set_cell(Position::from_a1("B2"), "=1+2").unwrap();
    sheet.set_cell(Position::from_a1("A1"), "=1/0").unwrap();

    assert_eq!(sheet.printable_size(), Size::new(2, 2));
    assert_eq!(print_texts(&sheet), "=1/0\t\nmeow\t=1+2\n");
    assert_eq!(print_values(&sheet), "#ARITHM!\t\nmeow\t3\n");

    sheet.clear_cell(Position::from_a1("B2")).unwrap();
    assert_eq!(sheet.printable_size(), Size::new(2, 1));
    assert_eq!(print_texts(&sheet), "=1/0\nmeow\n");
}
