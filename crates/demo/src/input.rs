// File: crates/demo/src/input.rs
// Summary: Loads statement rows from CSV into transaction records, sorted by date then source position.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use statement_chart_core::TransactionRecord;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Deserialize)]
struct CsvRow {
    date_iso: String,
    #[serde(default)]
    details: String,
    withdrawn: Option<String>,
    paid_in: Option<String>,
    balance: Option<String>,
    #[serde(default)]
    source_pdf: String,
    #[serde(default)]
    source_md: String,
    #[serde(default)]
    source_row: u32,
}

pub fn load_transactions(path: &Path) -> Result<Vec<TransactionRecord>> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to open '{}'", path.display()))?;
    let mut records = parse_transactions(&bytes).with_context(|| format!("failed to parse '{}'", path.display()))?;
    records.sort_by(|a, b| {
        (a.date, &a.source_md, a.source_row).cmp(&(b.date, &b.source_md, b.source_row))
    });
    Ok(records)
}

/// Parse CSV bytes (header row required, optional UTF-8 BOM) in file order.
pub fn parse_transactions(bytes: &[u8]) -> Result<Vec<TransactionRecord>> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(bytes);

    let mut out = Vec::new();
    for (i, row) in rdr.deserialize::<CsvRow>().enumerate() {
        // Header is line 1.
        let line = i + 2;
        let row = row.with_context(|| format!("line {line}: malformed row"))?;
        out.push(to_record(row).with_context(|| format!("line {line}"))?);
    }
    Ok(out)
}

fn to_record(row: CsvRow) -> Result<TransactionRecord> {
    let date = NaiveDate::parse_from_str(&row.date_iso, "%Y-%m-%d")
        .with_context(|| format!("bad date '{}'", row.date_iso))?;
    Ok(TransactionRecord {
        date,
        details: row.details,
        withdrawn: amount(row.withdrawn.as_deref(), "withdrawn")?,
        paid_in: amount(row.paid_in.as_deref(), "paid_in")?,
        balance: amount(row.balance.as_deref(), "balance")?,
        source_pdf: row.source_pdf,
        source_md: row.source_md,
        source_row: row.source_row,
    })
}

/// Blank cells are missing amounts, not zero.
fn amount(raw: Option<&str>, column: &str) -> Result<Option<Decimal>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => Decimal::from_str(s)
            .map(Some)
            .with_context(|| format!("bad {column} amount '{s}'")),
    }
}
