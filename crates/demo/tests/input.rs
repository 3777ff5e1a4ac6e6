// File: crates/demo/tests/input.rs
// Purpose: Statement CSV loading: blank amounts, ordering, BOM handling and row errors.

use std::str::FromStr;

use rust_decimal::Decimal;
use statement_charts::input::{load_transactions, parse_transactions};

const HEADER: &str = "date_iso,details,withdrawn,paid_in,balance,source_pdf,source_md,source_row\n";

#[test]
fn blank_amounts_are_missing_not_zero() {
    let csv = format!("{HEADER}2024-03-02,Coffee,3.50,,96.50,mar.pdf,mar.md,4\n");
    let rows = parse_transactions(csv.as_bytes()).expect("parse");
    assert_eq!(rows.len(), 1);
    let r = &rows[0];
    assert_eq!(r.date.to_string(), "2024-03-02");
    assert_eq!(r.details, "Coffee");
    assert_eq!(r.withdrawn, Some(Decimal::from_str("3.50").unwrap()));
    assert_eq!(r.paid_in, None);
    assert_eq!(r.balance, Some(Decimal::from_str("96.50").unwrap()));
    assert_eq!((r.source_pdf.as_str(), r.source_md.as_str(), r.source_row), ("mar.pdf", "mar.md", 4));
}

#[test]
fn rows_sort_by_date_then_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("all.csv");
    let body = format!(
        "\u{feff}{HEADER}\
         2024-03-05,c,1,,,a.pdf,b.md,2\n\
         2024-03-01,a,1,,,a.pdf,b.md,9\n\
         2024-03-05,b,1,,,a.pdf,a.md,7\n\
         2024-03-05,d,1,,,a.pdf,b.md,1\n"
    );
    std::fs::write(&path, body).unwrap();

    let rows = load_transactions(&path).expect("load");
    let order: Vec<&str> = rows.iter().map(|r| r.details.as_str()).collect();
    assert_eq!(order, vec!["a", "b", "d", "c"]);
}

#[test]
fn bad_amount_names_the_line() {
    let csv = format!("{HEADER}2024-03-02,ok,1,,,,,1\n2024-03-03,bad,abc,,,,,2\n");
    let err = parse_transactions(csv.as_bytes()).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("line 3"), "{msg}");
    assert!(msg.contains("withdrawn"), "{msg}");
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_transactions(&dir.path().join("missing.csv")).is_err());
}
