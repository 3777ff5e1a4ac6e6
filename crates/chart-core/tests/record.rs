// File: crates/chart-core/tests/record.rs
// Purpose: Month keys, month grouping and inclusive date filtering.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use statement_chart_core::{filter_by_date, group_by_month, ChartError, MonthKey, TransactionRecord};

fn rec(date: &str) -> TransactionRecord {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    TransactionRecord::new(date, Some(Decimal::ONE), None)
}

#[test]
fn month_key_formats_and_parses_yyyy_mm() {
    let key = rec("2024-03-17").month_key();
    assert_eq!(key.to_string(), "2024.03");
    assert_eq!((key.year(), key.month()), (2024, 3));
    assert_eq!("2024.03".parse::<MonthKey>().unwrap(), key);
    assert_eq!(key.len_days(), 31);

    for bad in ["2024-03", "2024.13", "abcd.01", ""] {
        let err = bad.parse::<MonthKey>().unwrap_err();
        assert!(matches!(err, ChartError::InvalidMonthKey(_)), "{bad}");
    }
}

#[test]
fn groups_are_sorted_by_month_and_keep_record_order() {
    let records = vec![rec("2024-02-03"), rec("2023-12-30"), rec("2024-02-01"), rec("2024-01-15")];
    let grouped = group_by_month(&records);
    let keys: Vec<String> = grouped.keys().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["2023.12", "2024.01", "2024.02"]);

    let feb = &grouped[&"2024.02".parse::<MonthKey>().unwrap()];
    assert_eq!(feb.len(), 2);
    assert_eq!(feb[0].date.to_string(), "2024-02-03");
    assert_eq!(feb[1].date.to_string(), "2024-02-01");
}

#[test]
fn date_filter_bounds_are_inclusive_and_optional() {
    let records = vec![rec("2024-01-31"), rec("2024-02-01"), rec("2024-02-29"), rec("2024-03-01")];
    let start = NaiveDate::from_ymd_opt(2024, 2, 1);
    let end = NaiveDate::from_ymd_opt(2024, 2, 29);

    let both = filter_by_date(records.clone(), start, end);
    assert_eq!(both.len(), 2);
    assert_eq!(filter_by_date(records.clone(), start, None).len(), 3);
    assert_eq!(filter_by_date(records.clone(), None, end).len(), 3);
    assert_eq!(filter_by_date(records, None, None).len(), 4);
}

#[test]
fn month_key_serializes_as_string() {
    let key: MonthKey = "2024.11".parse().unwrap();
    let json = serde_json::to_string(&key).unwrap();
    assert_eq!(json, "\"2024.11\"");
}
