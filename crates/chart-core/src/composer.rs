// File: crates/chart-core/src/composer.rs
// Summary: Per-month chart composition: summaries, file naming, output directory and backend dispatch.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::aggregate::{daily_series, summarize_month, MonthlySummary};
use crate::backend::ChartBackend;
use crate::chart::{ChartKind, DailyChart, ProportionChart, RenderOptions};
use crate::error::{ChartError, Result};
use crate::fallback::RasterBackend;
use crate::record::{group_by_month, MonthKey, TransactionRecord};

/// Charts are written to this directory below the export directory.
pub const CHARTS_SUBDIR: &str = "charts";

/// Output of one month: both chart files plus the numeric summary.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthCharts {
    pub proportion: PathBuf,
    pub daily: PathBuf,
    pub summary: MonthlySummary,
}

pub struct ChartComposer {
    backend: Box<dyn ChartBackend>,
    options: RenderOptions,
}

impl ChartComposer {
    /// Use `rich` when one was found at startup, otherwise the raster fallback.
    pub fn new(rich: Option<Box<dyn ChartBackend>>, options: RenderOptions) -> Self {
        let backend = rich.unwrap_or_else(|| Box::new(RasterBackend::new()) as Box<dyn ChartBackend>);
        info!(backend = backend.name(), theme = options.theme.name, "chart backend selected");
        Self { backend, options }
    }

    pub fn fallback(options: RenderOptions) -> Self {
        Self::new(None, options)
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render every month found in `records` into `export_dir/charts`,
    /// creating the directory if needed.
    pub fn compose(
        &self,
        records: &[TransactionRecord],
        export_dir: &Path,
    ) -> Result<BTreeMap<MonthKey, MonthCharts>> {
        let charts_dir = export_dir.join(CHARTS_SUBDIR);
        std::fs::create_dir_all(&charts_dir)
            .map_err(|source| ChartError::Configuration { path: charts_dir.clone(), source })?;

        let mut outputs = BTreeMap::new();
        for (month, month_records) in group_by_month(records) {
            let charts = self.compose_month(month, &month_records, &charts_dir)?;
            outputs.insert(month, charts);
        }
        Ok(outputs)
    }

    /// Render both charts of one month into `charts_dir`, which must exist.
    pub fn compose_month(
        &self,
        month: MonthKey,
        records: &[TransactionRecord],
        charts_dir: &Path,
    ) -> Result<MonthCharts> {
        let summary = summarize_month(records);
        let ext = self.backend.extension();

        let proportion = ChartKind::Proportion.path_in(charts_dir, month, ext);
        self.backend.render_proportion_chart(
            &ProportionChart { month, summary },
            &self.options,
            &proportion,
        )?;
        debug!(%month, path = %proportion.display(), "proportion chart written");

        let daily = ChartKind::Daily.path_in(charts_dir, month, ext);
        self.backend.render_daily_chart(
            &DailyChart { month, series: daily_series(records) },
            &self.options,
            &daily,
        )?;
        debug!(%month, path = %daily.display(), "daily chart written");

        info!(
            %month,
            income = %summary.total_income,
            spending = %summary.total_spending,
            net = %summary.net,
            "month charted"
        );
        Ok(MonthCharts { proportion, daily, summary })
    }
}
