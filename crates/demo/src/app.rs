// File: crates/demo/src/app.rs
// Summary: One run of the pipeline: load, filter, export CSV, render monthly charts, write the manifest.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use statement_chart_core::composer::CHARTS_SUBDIR;
use statement_chart_core::{filter_by_date, theme, ChartBackend, ChartComposer, MonthCharts, MonthKey, RenderOptions};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::export::{export_csv_files, CsvExport};
use crate::input::load_transactions;
use crate::manifest::Manifest;

/// Inclusive date bounds; `None` leaves that side open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub records: usize,
    pub csv: Option<CsvExport>,
    pub backend: Option<&'static str>,
    pub charts: BTreeMap<MonthKey, MonthCharts>,
    pub manifest: Option<PathBuf>,
}

pub fn run(input: &Path, range: DateRange, config: &AppConfig) -> Result<RunSummary> {
    let records = load_transactions(input)?;
    let loaded = records.len();
    let records = filter_by_date(records, range.start, range.end);
    info!(loaded, kept = records.len(), input = %input.display(), "transactions loaded");
    if records.is_empty() {
        warn!("no transactions in the selected date range");
    }

    let export_dir = &config.paths.export_dir;
    let mut summary = RunSummary { records: records.len(), ..RunSummary::default() };

    if config.reports.csv_export {
        summary.csv = Some(export_csv_files(&records, export_dir, config.reports.csv_utf8_bom)?);
    }

    if config.reports.charts_enabled {
        let options = RenderOptions::default().with_theme(theme::find(&config.charts.theme));
        let composer = ChartComposer::new(rich_backend(config), options);
        summary.backend = Some(composer.backend_name());
        summary.charts = composer
            .compose(&records, export_dir)
            .with_context(|| format!("chart generation failed under '{}'", export_dir.display()))?;

        let manifest = Manifest::build(composer.backend_name(), &summary.charts)?;
        summary.manifest = Some(manifest.write(&export_dir.join(CHARTS_SUBDIR))?);
    }

    Ok(summary)
}

/// The Skia backend when compiled in, allowed by config and usable on this machine.
pub fn rich_backend(config: &AppConfig) -> Option<Box<dyn ChartBackend>> {
    if !config.charts.prefer_rich_backend {
        return None;
    }
    #[cfg(feature = "skia")]
    {
        match statement_chart_skia::SkiaBackend::probe() {
            Some(backend) => return Some(Box::new(backend)),
            None => warn!("skia backend unavailable, using raster fallback"),
        }
    }
    None
}
