// File: crates/chart-core/src/fallback.rs
// Summary: Dependency-free backend that draws both charts on a RasterSurface and encodes them as PNG.

use std::path::Path;

use crate::aggregate::to_f64;
use crate::backend::ChartBackend;
use crate::chart::{DailyChart, ProportionChart, RenderOptions};
use crate::error::Result;
use crate::geometry::{clamp, RectI32};
use crate::layout::{self, Segment};
use crate::png;
use crate::raster::{RasterSurface, RectMode, Rgb};
use crate::theme::Theme;
use crate::types::PIE_CENTER_SHIFT;

/// Value labels on bars are drawn at scale 1, one row per segment.
const BAR_LABEL_LINE: i32 = 8;
/// Rows of label headroom kept above the tallest bar.
const BAR_LABEL_ROWS: i32 = 2;
const TICK_LENGTH: i32 = 4;
const DAY_LABEL_GAP: i32 = 7;

const PIE_LABEL_SCALE: i32 = 2;
const LEGEND_SWATCH: i32 = 10;
const LEGEND_GAP: i32 = 30;

#[derive(Clone, Copy, Debug, Default)]
pub struct RasterBackend;

impl RasterBackend {
    pub fn new() -> Self {
        Self
    }

    /// Draw the income vs spending pie with in-wedge labels and a legend.
    pub fn draw_proportion(&self, chart: &ProportionChart, opts: &RenderOptions) -> RasterSurface {
        let theme = &opts.theme;
        let mut canvas = RasterSurface::new(opts.pie_width, opts.pie_height, theme.background);
        let (w, h) = (canvas.width() as i32, canvas.height() as i32);
        let cx = w / 2 - PIE_CENTER_SHIFT;
        let cy = h / 2;
        let radius = w.min(h) / 3;
        let pie = layout::pie_layout(&chart.summary);

        for y in (cy - radius)..=(cy + radius) {
            for x in (cx - radius)..=(cx + radius) {
                let (dx, dy) = (x - cx, y - cy);
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                let color = segment_color(theme, pie.segment_at(dx as f64, dy as f64));
                canvas.set_pixel(x, y, color);
            }
        }

        for wedge in pie.wedges().iter().filter(|w| w.show_label) {
            let text = layout::format_amount(wedge.value);
            let (ax, ay) = wedge.label_anchor(cx as f64, cy as f64, radius as f64);
            let tx = ax as i32 - RasterSurface::text_width(&text, PIE_LABEL_SCALE) / 2;
            let ty = ay as i32 - RasterSurface::text_height(PIE_LABEL_SCALE) / 2;
            canvas.draw_text(tx, ty, &text, theme.text, PIE_LABEL_SCALE);
        }

        // Legend: swatch + total per segment, right of the pie.
        let legend_x = cx + radius + LEGEND_GAP;
        let legend_rows = [
            (Segment::Income, chart.summary.total_income),
            (Segment::Spending, chart.summary.total_spending),
        ];
        for (row, (segment, value)) in legend_rows.iter().enumerate() {
            let y = cy - LEGEND_SWATCH - 4 + row as i32 * (LEGEND_SWATCH + 8);
            canvas.draw_rect(legend_x, y, LEGEND_SWATCH, LEGEND_SWATCH, segment_color(theme, *segment), RectMode::Fill);
            canvas.draw_rect(legend_x, y, LEGEND_SWATCH, LEGEND_SWATCH, theme.bar_outline, RectMode::Outline);
            let text = layout::format_amount(*value);
            canvas.draw_text(legend_x + LEGEND_SWATCH + 6, y + 1, &text, theme.text, PIE_LABEL_SCALE);
        }
        canvas
    }

    /// Draw the dense stacked daily bars: income at the bottom, spending on
    /// top, a tick and day label for every day of the month.
    pub fn draw_daily(&self, chart: &DailyChart, opts: &RenderOptions) -> RasterSurface {
        let theme = &opts.theme;
        let series = &chart.series;
        let width = opts.daily_width(series.len());
        let mut canvas = RasterSurface::new(width, opts.daily_height, theme.background);
        let plot = RectI32::plot_area(canvas.width(), canvas.height(), &opts.daily_insets);

        canvas.draw_line(plot.left, plot.bottom, plot.right, plot.bottom, theme.axis_line);
        canvas.draw_line(plot.left, plot.top, plot.left, plot.bottom, theme.axis_line);

        let vmax = match to_f64(series.max_total()) {
            v if v > 0.0 => v,
            _ => 1.0,
        };
        let bar_area = (plot.height() - BAR_LABEL_ROWS * BAR_LABEL_LINE).max(1);
        let geom = layout::bar_geometry(plot.width(), series.len());

        for (i, day) in series.aggregates().enumerate() {
            let bar_left = geom.bar_left(plot.left, i);
            let stack = layout::stack_heights(to_f64(day.income), to_f64(day.spending), vmax, bar_area);

            if stack.total() > 0 {
                let income_top = plot.bottom - stack.income;
                let bar_top = income_top - stack.spending;
                canvas.draw_rect(bar_left, income_top, geom.bar_width, stack.income, theme.income, RectMode::Fill);
                canvas.draw_rect(bar_left, bar_top, geom.bar_width, stack.spending, theme.spending, RectMode::Fill);
                canvas.draw_rect(bar_left, bar_top, geom.bar_width, stack.total(), theme.bar_outline, RectMode::Outline);

                if geom.labels_fit() {
                    let labels = layout::label_placements(day.income, day.spending, stack, BAR_LABEL_LINE);
                    let texts: Vec<String> = labels.iter().map(|l| layout::format_amount(l.value)).collect();
                    // A label wider than its bucket would run into the neighbouring day.
                    let fits = texts.iter().all(|t| RasterSurface::text_width(t, 1) <= geom.bucket_width);
                    if fits {
                        let block_top = (bar_top - labels.len() as i32 * BAR_LABEL_LINE).max(plot.top);
                        let center = geom.bar_center(plot.left, i);
                        for (label, text) in labels.iter().zip(&texts) {
                            let text_w = RasterSurface::text_width(text, 1);
                            let tx = clamp(center - text_w / 2, plot.left + 1, plot.right - text_w);
                            canvas.draw_text(tx, block_top + label.offset, text, theme.text, 1);
                        }
                    }
                }
            }

            let tick_x = geom.bar_center(plot.left, i);
            canvas.draw_line(tick_x, plot.bottom, tick_x, plot.bottom + TICK_LENGTH, theme.axis_line);
            let text = layout::day_label(day.date);
            let tx = tick_x - RasterSurface::text_width(&text, 1) / 2;
            canvas.draw_text(tx, plot.bottom + DAY_LABEL_GAP, &text, theme.text, 1);
        }
        canvas
    }
}

impl ChartBackend for RasterBackend {
    fn name(&self) -> &'static str {
        "raster"
    }

    fn render_proportion_chart(&self, chart: &ProportionChart, opts: &RenderOptions, path: &Path) -> Result<()> {
        png::write_png(&self.draw_proportion(chart, opts), path)
    }

    fn render_daily_chart(&self, chart: &DailyChart, opts: &RenderOptions, path: &Path) -> Result<()> {
        png::write_png(&self.draw_daily(chart, opts), path)
    }
}

fn segment_color(theme: &Theme, segment: Segment) -> Rgb {
    match segment {
        Segment::Income => theme.income,
        Segment::Spending => theme.spending,
    }
}
