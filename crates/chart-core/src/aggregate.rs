// File: crates/chart-core/src/aggregate.rs
// Summary: Monthly totals and dense per-day income/spending series built from transaction records.
// Notes:
// - Amounts are summed exactly as decimals and rounded to cents only after
//   summation, half away from zero. Daily and monthly totals therefore agree
//   to the cent whenever the records themselves carry cent precision.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::record::{MonthKey, TransactionRecord};

/// Round to two decimals, half away from zero, always carrying scale 2.
pub fn round_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Lossy conversion used only for pixel geometry.
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    pub total_income: Decimal,
    pub total_spending: Decimal,
    pub net: Decimal,
}

impl Default for MonthlySummary {
    fn default() -> Self {
        let zero = round_cents(Decimal::ZERO);
        Self { total_income: zero, total_spending: zero, net: zero }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub income: Decimal,
    pub spending: Decimal,
}

impl DailyAggregate {
    pub fn total(&self) -> Decimal {
        self.income + self.spending
    }
}

/// Dense per-day series: `days`, `income` and `spending` are index-aligned and
/// `days` covers the whole calendar month in ascending order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DailySeries {
    pub days: Vec<NaiveDate>,
    pub income: Vec<Decimal>,
    pub spending: Vec<Decimal>,
}

impl DailySeries {
    pub fn len(&self) -> usize { self.days.len() }
    pub fn is_empty(&self) -> bool { self.days.is_empty() }

    pub fn totals(&self) -> Vec<Decimal> {
        self.income.iter().zip(&self.spending).map(|(i, s)| *i + *s).collect()
    }

    pub fn aggregates(&self) -> impl Iterator<Item = DailyAggregate> + '_ {
        self.days
            .iter()
            .zip(self.income.iter().zip(&self.spending))
            .map(|(&date, (&income, &spending))| DailyAggregate { date, income, spending })
    }

    /// Largest stacked daily total; zero for a quiet month.
    pub fn max_total(&self) -> Decimal {
        self.totals().into_iter().max().unwrap_or(Decimal::ZERO)
    }
}

/// Total income, total spending and net change for one month of records.
pub fn summarize_month(records: &[TransactionRecord]) -> MonthlySummary {
    let income: Decimal = records.iter().filter_map(|r| r.paid_in).sum();
    let spending: Decimal = records.iter().filter_map(|r| r.withdrawn).sum();
    let total_income = round_cents(income);
    let total_spending = round_cents(spending);
    MonthlySummary {
        total_income,
        total_spending,
        net: round_cents(total_income - total_spending),
    }
}

/// Per-day income and spending for the month of the first record.
///
/// Records are expected to share one month; any dated outside the inferred
/// month are ignored. An empty slice has no month and yields an empty series.
pub fn daily_series(records: &[TransactionRecord]) -> DailySeries {
    let Some(first) = records.first() else {
        return DailySeries::default();
    };
    let month = MonthKey::of(first.date);
    let days: Vec<NaiveDate> = month.days().collect();

    let mut income = vec![Decimal::ZERO; days.len()];
    let mut spending = vec![Decimal::ZERO; days.len()];
    for r in records.iter().filter(|r| month.contains(r.date)) {
        let slot = (r.date - month.first_day()).num_days() as usize;
        if let Some(v) = r.paid_in {
            income[slot] += v;
        }
        if let Some(v) = r.withdrawn {
            spending[slot] += v;
        }
    }

    DailySeries {
        days,
        income: income.into_iter().map(round_cents).collect(),
        spending: spending.into_iter().map(round_cents).collect(),
    }
}
