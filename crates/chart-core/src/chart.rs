// File: crates/chart-core/src/chart.rs
// Summary: Chart descriptions handed to backends (proportion and daily), file naming and render options.

use std::path::{Path, PathBuf};

use crate::aggregate::{DailySeries, MonthlySummary};
use crate::record::MonthKey;
use crate::theme::Theme;
use crate::types::{
    Insets, DAILY_DAY_WIDTH, DAILY_HEIGHT, DAILY_MIN_WIDTH, PIE_HEIGHT, PIE_WIDTH,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub pie_width: u32,
    pub pie_height: u32,
    pub daily_height: u32,
    pub daily_min_width: u32,
    pub daily_day_width: u32,
    pub daily_insets: Insets,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pie_width: PIE_WIDTH,
            pie_height: PIE_HEIGHT,
            daily_height: DAILY_HEIGHT,
            daily_min_width: DAILY_MIN_WIDTH,
            daily_day_width: DAILY_DAY_WIDTH,
            daily_insets: Insets::default(),
            theme: Theme::light(),
        }
    }
}

impl RenderOptions {
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Daily chart width: wide enough that every day keeps its own bucket.
    pub fn daily_width(&self, days: usize) -> u32 {
        self.daily_min_width.max(self.daily_day_width * days as u32)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Income vs spending pie.
    Proportion,
    /// Dense stacked bars, one per calendar day.
    Daily,
}

impl ChartKind {
    pub const fn suffix(self) -> &'static str {
        match self {
            ChartKind::Proportion => "income_vs_spending",
            ChartKind::Daily => "daily_income_spending",
        }
    }

    /// `{YYYY.MM}_{suffix}.{ext}`
    pub fn file_name(self, month: MonthKey, extension: &str) -> String {
        format!("{month}_{}.{extension}", self.suffix())
    }

    pub fn path_in(self, dir: &Path, month: MonthKey, extension: &str) -> PathBuf {
        dir.join(self.file_name(month, extension))
    }
}

/// Everything a backend needs to draw the income vs spending pie.
#[derive(Clone, Debug, PartialEq)]
pub struct ProportionChart {
    pub month: MonthKey,
    pub summary: MonthlySummary,
}

impl ProportionChart {
    pub fn title(&self) -> String {
        format!("{} Income vs Spending", self.month)
    }
}

/// Everything a backend needs to draw the dense daily stacked bars.
#[derive(Clone, Debug, PartialEq)]
pub struct DailyChart {
    pub month: MonthKey,
    pub series: DailySeries,
}

impl DailyChart {
    pub fn title(&self) -> String {
        format!("{} Daily Income and Spending (Every Day)", self.month)
    }
}
