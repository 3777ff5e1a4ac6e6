// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; rasterizer, PNG encoder, monthly aggregation and chart composition.

pub mod aggregate;
pub mod backend;
pub mod chart;
pub mod composer;
pub mod error;
pub mod fallback;
pub mod geometry;
pub mod glyphs;
pub mod layout;
pub mod png;
pub mod raster;
pub mod record;
pub mod theme;
pub mod types;

pub use aggregate::{daily_series, summarize_month, DailyAggregate, DailySeries, MonthlySummary};
pub use backend::ChartBackend;
pub use chart::{ChartKind, DailyChart, ProportionChart, RenderOptions};
pub use composer::{ChartComposer, MonthCharts};
pub use error::ChartError;
pub use fallback::RasterBackend;
pub use raster::{RasterSurface, RectMode, Rgb};
pub use record::{filter_by_date, group_by_month, MonthKey, TransactionRecord};
pub use theme::Theme;
