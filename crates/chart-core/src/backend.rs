// File: crates/chart-core/src/backend.rs
// Summary: Renderer-agnostic capability interface implemented by the raster fallback and rich backends.

use std::path::Path;

use crate::chart::{DailyChart, ProportionChart, RenderOptions};
use crate::error::Result;

/// A renderer able to write both monthly charts as image files.
///
/// Implementations receive fully laid-out chart descriptions and must write
/// exactly one complete file per call.
pub trait ChartBackend {
    fn name(&self) -> &'static str;

    /// File extension of the images this backend writes.
    fn extension(&self) -> &'static str {
        "png"
    }

    fn render_proportion_chart(
        &self,
        chart: &ProportionChart,
        opts: &RenderOptions,
        path: &Path,
    ) -> Result<()>;

    fn render_daily_chart(&self, chart: &DailyChart, opts: &RenderOptions, path: &Path) -> Result<()>;
}
