// File: crates/demo/tests/export.rs
// Purpose: Per-month and combined CSV export, including the optional BOM and the loader round trip.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use statement_chart_core::{MonthKey, TransactionRecord};
use statement_charts::export::{export_csv_files, ALL_TRANSACTIONS};
use statement_charts::input::load_transactions;

fn rec(date: &str, details: &str, withdrawn: Option<&str>, paid_in: Option<&str>, row: u32) -> TransactionRecord {
    let mut r = TransactionRecord::new(
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        withdrawn.map(|v| Decimal::from_str(v).unwrap()),
        paid_in.map(|v| Decimal::from_str(v).unwrap()),
    );
    r.details = details.to_string();
    r.source_md = "stmt.md".to_string();
    r.source_row = row;
    r
}

fn records() -> Vec<TransactionRecord> {
    vec![
        rec("2024-01-30", "Rent, January", Some("900"), None, 1),
        rec("2024-02-01", "Salary", None, Some("2500.5"), 2),
        rec("2024-02-14", "Flowers", Some("19.999"), None, 3),
    ]
}

#[test]
fn one_file_per_month_plus_all() {
    let dir = tempfile::tempdir().unwrap();
    let out = export_csv_files(&records(), dir.path(), false).expect("export");

    let months: Vec<String> = out.months.keys().map(MonthKey::to_string).collect();
    assert_eq!(months, vec!["2024.01", "2024.02"]);
    assert_eq!(out.all, dir.path().join(ALL_TRANSACTIONS));

    let feb = std::fs::read_to_string(dir.path().join("2024.02.csv")).unwrap();
    let lines: Vec<&str> = feb.lines().collect();
    assert_eq!(lines[0], "date_iso,details,withdrawn,paid_in,balance,source_pdf,source_md,source_row");
    assert_eq!(lines[1], "2024-02-01,Salary,,2500.50,,,stmt.md,2");
    assert_eq!(lines[2], "2024-02-14,Flowers,20.00,,,,stmt.md,3");
    assert_eq!(lines.len(), 3);

    let jan = std::fs::read_to_string(dir.path().join("2024.01.csv")).unwrap();
    assert!(jan.contains("\"Rent, January\",900.00"), "{jan}");
}

#[test]
fn bom_is_optional_and_readable() {
    let dir = tempfile::tempdir().unwrap();
    let out = export_csv_files(&records(), dir.path(), true).expect("export");
    let bytes = std::fs::read(&out.all).unwrap();
    assert!(bytes.starts_with(b"\xEF\xBB\xBFdate_iso,"));

    let back = load_transactions(&out.all).expect("reload");
    assert_eq!(back.len(), 3);
    assert_eq!(back[0].details, "Rent, January");
    assert_eq!(back[1].paid_in, Some(Decimal::from_str("2500.50").unwrap()));
}
