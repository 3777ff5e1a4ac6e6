// File: crates/chart-core/src/record.rs
// Summary: Normalized transaction record, calendar month keys, month grouping and date filtering.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::error::ChartError;

/// One statement line as produced by the statement parser.
/// Only `date`, `withdrawn` and `paid_in` drive the charts.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub details: String,
    pub withdrawn: Option<Decimal>,
    pub paid_in: Option<Decimal>,
    pub balance: Option<Decimal>,
    pub source_pdf: String,
    pub source_md: String,
    pub source_row: u32,
}

impl TransactionRecord {
    /// Minimal record with only the fields the charts read.
    pub fn new(date: NaiveDate, withdrawn: Option<Decimal>, paid_in: Option<Decimal>) -> Self {
        Self {
            date,
            details: String::new(),
            withdrawn,
            paid_in,
            balance: None,
            source_pdf: String::new(),
            source_md: String::new(),
            source_row: 0,
        }
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey::of(self.date)
    }
}

/// A calendar month, shown as `YYYY.MM`. Internally the first day of the month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey(NaiveDate);

impl MonthKey {
    /// Month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self(date - Days::new(u64::from(date.day0())))
    }

    pub fn year(&self) -> i32 { self.0.year() }
    pub fn month(&self) -> u32 { self.0.month() }
    pub fn first_day(&self) -> NaiveDate { self.0 }

    /// Every calendar day of the month in ascending order. December stops at the 31st.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let month = self.0.month();
        self.0.iter_days().take_while(move |d| d.month() == month)
    }

    pub fn len_days(&self) -> usize {
        self.days().count()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::of(date) == *self
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}.{:02}", self.year(), self.month())
    }
}

impl FromStr for MonthKey {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChartError::InvalidMonthKey(s.to_string());
        let (y, m) = s.trim().split_once('.').ok_or_else(invalid)?;
        let year: i32 = y.parse().map_err(|_| invalid())?;
        let month: u32 = m.parse().map_err(|_| invalid())?;
        NaiveDate::from_ymd_opt(year, month, 1).map(Self).ok_or_else(invalid)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Split records by month, keys ascending, record order preserved within a month.
pub fn group_by_month(records: &[TransactionRecord]) -> BTreeMap<MonthKey, Vec<TransactionRecord>> {
    let mut grouped: BTreeMap<MonthKey, Vec<TransactionRecord>> = BTreeMap::new();
    for r in records {
        grouped.entry(r.month_key()).or_default().push(r.clone());
    }
    grouped
}

/// Keep records dated within `[start, end]`; either bound may be open.
pub fn filter_by_date(
    records: Vec<TransactionRecord>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<TransactionRecord> {
    records
        .into_iter()
        .filter(|r| start.map_or(true, |s| r.date >= s))
        .filter(|r| end.map_or(true, |e| r.date <= e))
        .collect()
}
