// File: crates/demo/src/export.rs
// Summary: Per-month CSV files plus one combined file, in the same column layout the loader reads.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use statement_chart_core::aggregate::round_cents;
use statement_chart_core::{group_by_month, MonthKey, TransactionRecord};
use tracing::debug;

pub const CSV_COLUMNS: [&str; 8] =
    ["date_iso", "details", "withdrawn", "paid_in", "balance", "source_pdf", "source_md", "source_row"];
pub const ALL_TRANSACTIONS: &str = "all_transactions.csv";

#[derive(Clone, Debug, PartialEq)]
pub struct CsvExport {
    pub months: BTreeMap<MonthKey, PathBuf>,
    pub all: PathBuf,
}

/// Write `{YYYY.MM}.csv` for every month and `all_transactions.csv` into `export_dir`.
pub fn export_csv_files(records: &[TransactionRecord], export_dir: &Path, utf8_bom: bool) -> Result<CsvExport> {
    std::fs::create_dir_all(export_dir)
        .with_context(|| format!("failed to create '{}'", export_dir.display()))?;

    let mut months = BTreeMap::new();
    for (month, month_records) in group_by_month(records) {
        let path = export_dir.join(format!("{month}.csv"));
        write_csv(&path, &month_records, utf8_bom)?;
        months.insert(month, path);
    }

    let all = export_dir.join(ALL_TRANSACTIONS);
    write_csv(&all, records, utf8_bom)?;
    debug!(months = months.len(), path = %all.display(), "csv export written");
    Ok(CsvExport { months, all })
}

fn write_csv(path: &Path, records: &[TransactionRecord], utf8_bom: bool) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("failed to create '{}'", path.display()))?;
    if utf8_bom {
        file.write_all(b"\xEF\xBB\xBF")?;
    }
    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(CSV_COLUMNS)?;
    for r in records {
        wtr.write_record([
            r.date.format("%Y-%m-%d").to_string(),
            r.details.clone(),
            amount(r.withdrawn),
            amount(r.paid_in),
            amount(r.balance),
            r.source_pdf.clone(),
            r.source_md.clone(),
            r.source_row.to_string(),
        ])?;
    }
    wtr.flush().with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

fn amount(value: Option<Decimal>) -> String {
    value.map(|v| round_cents(v).to_string()).unwrap_or_default()
}
