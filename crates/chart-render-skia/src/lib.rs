// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia-backed rich renderer for the monthly charts (anti-aliased shapes, real fonts, legends, titles).

use std::path::Path;

use skia_safe as skia;
use statement_chart_core::aggregate::to_f64;
use statement_chart_core::chart::{DailyChart, ProportionChart, RenderOptions};
use statement_chart_core::error::{ChartError, Result};
use statement_chart_core::layout::{self, Segment};
use statement_chart_core::{ChartBackend, Rgb, Theme};

/// Proportion chart size in pixels.
pub const PIE_SIZE: (i32, i32) = (440, 260);
/// Daily chart height, and the per-day width used to size it.
pub const DAILY_HEIGHT: i32 = 320;
pub const DAILY_MIN_WIDTH: i32 = 900;
pub const DAILY_DAY_WIDTH: i32 = 30;

const BAR_FILL: f32 = 0.76;
const MAX_LABEL_FONT: f32 = 9.0;
const MIN_LABEL_FONT: f32 = 5.0;
/// Average advance of a digit relative to the font size.
const DIGIT_ADVANCE: f32 = 0.6;

pub struct SkiaBackend {
    typeface: Option<skia::Typeface>,
}

impl SkiaBackend {
    /// Returns `None` when Skia cannot allocate a CPU raster surface here.
    pub fn probe() -> Option<Self> {
        skia::surfaces::raster_n32_premul((1, 1))?;
        let typeface = skia::FontMgr::default().legacy_make_typeface(None::<&str>, skia::FontStyle::default());
        if typeface.is_none() {
            tracing::warn!("skia found no default typeface; chart text may be missing");
        }
        Some(Self { typeface })
    }

    fn font(&self, size: f32) -> skia::Font {
        match &self.typeface {
            Some(tf) => skia::Font::from_typeface(tf.clone(), size),
            None => {
                let mut font = skia::Font::default();
                font.set_size(size);
                font
            }
        }
    }

    /// Render the pie to PNG bytes.
    pub fn proportion_png(&self, chart: &ProportionChart, opts: &RenderOptions) -> Option<Vec<u8>> {
        let theme = opts.theme;
        let (w, h) = PIE_SIZE;
        render_png(w, h, color(theme.background), |canvas| {
            let pie = layout::pie_layout(&chart.summary);
            let radius = (w.min(h) as f32) * 0.36;
            let (cx, cy) = (w as f32 * 0.32, h as f32 * 0.54);

            for wedge in pie.wedges().iter().filter(|w| w.share > 0.0) {
                let mut path = skia::Path::new();
                path.move_to((cx, cy));
                let steps = ((wedge.share * 360.0).ceil() as usize).max(2);
                for k in 0..=steps {
                    let t = wedge.start + wedge.share * k as f64 / steps as f64;
                    let (c, s) = layout::turn_direction(t);
                    path.line_to((cx + c as f32 * radius, cy + s as f32 * radius));
                }
                path.close();
                canvas.draw_path(&path, &fill(segment_color(&theme, wedge.segment)));
            }

            let label_font = self.font(8.0);
            let text_paint = fill(theme.text);
            for wedge in pie.wedges().iter().filter(|w| w.show_label && w.value > rust_decimal::Decimal::ZERO) {
                let text = format!("{:.2}", wedge.value);
                let (ax, ay) = wedge.label_anchor(cx as f64, cy as f64, radius as f64);
                let (tw, _) = label_font.measure_str(&text, Some(&text_paint));
                canvas.draw_str(&text, (ax as f32 - tw / 2.0, ay as f32 + 3.0), &label_font, &text_paint);
            }

            let legend = [
                (Segment::Income, format!("Income: {:.2}", chart.summary.total_income)),
                (Segment::Spending, format!("Spending: {:.2}", chart.summary.total_spending)),
            ];
            let legend_font = self.font(11.0);
            let lx = cx + radius + 28.0;
            for (row, (segment, text)) in legend.iter().enumerate() {
                let y = cy - 12.0 + row as f32 * 20.0;
                canvas.draw_rect(skia::Rect::from_xywh(lx, y - 9.0, 10.0, 10.0), &fill(segment_color(&theme, *segment)));
                canvas.draw_str(text, (lx + 16.0, y), &legend_font, &text_paint);
            }

            draw_title(canvas, &self.font(12.0), &chart.title(), w as f32, &text_paint);
        })
    }

    /// Render the dense daily stacked bars to PNG bytes.
    pub fn daily_png(&self, chart: &DailyChart, opts: &RenderOptions) -> Option<Vec<u8>> {
        let theme = opts.theme;
        let series = &chart.series;
        let n = series.len().max(1);
        let w = DAILY_MIN_WIDTH.max(DAILY_DAY_WIDTH * n as i32);
        let h = DAILY_HEIGHT;
        render_png(w, h, color(theme.background), |canvas| {
            let (l, t, r, b) = (64.0_f32, 40.0_f32, w as f32 - 16.0, h as f32 - 48.0);
            let ymax = match to_f64(series.max_total()) {
                v if v > 0.0 => v * 1.15,
                _ => 1.0,
            };
            let sy = |v: f64| -> f32 { b - (v / ymax) as f32 * (b - t) };
            let text_paint = fill(theme.text);
            let small = self.font(8.0);

            // Horizontal grid with value captions.
            let mut grid = stroke(theme.grid, 1.0);
            grid.set_anti_alias(false);
            for k in 0..=5 {
                let v = ymax * k as f64 / 5.0;
                let y = sy(v);
                canvas.draw_line((l, y), (r, y), &grid);
                let caption = format!("{v:.0}");
                let (tw, _) = small.measure_str(&caption, Some(&text_paint));
                canvas.draw_str(&caption, (l - tw - 6.0, y + 3.0), &small, &text_paint);
            }

            let axis = stroke(theme.axis_line, 1.5);
            canvas.draw_line((l, b), (r, b), &axis);
            canvas.draw_line((l, t), (l, b), &axis);

            let bucket = (r - l) / n as f32;
            let bar_w = bucket * BAR_FILL;
            let widest = series
                .aggregates()
                .flat_map(|d| [d.income, d.spending])
                .map(|v| format!("{v:.2}").len())
                .max()
                .unwrap_or(1) as f32;
            let label_size = (bucket / (widest * DIGIT_ADVANCE)).min(MAX_LABEL_FONT);
            let label_font = self.font(label_size);
            let line = label_size + 2.0;

            for (i, day) in series.aggregates().enumerate() {
                let x_mid = l + bucket * (i as f32 + 0.5);
                let x0 = x_mid - bar_w / 2.0;
                let income_top = sy(to_f64(day.income));
                let bar_top = sy(to_f64(day.total()));
                if day.income > rust_decimal::Decimal::ZERO {
                    canvas.draw_rect(skia::Rect::from_ltrb(x0, income_top, x0 + bar_w, b), &fill(theme.income));
                }
                if day.spending > rust_decimal::Decimal::ZERO {
                    canvas.draw_rect(skia::Rect::from_ltrb(x0, bar_top, x0 + bar_w, income_top), &fill(theme.spending));
                }

                if label_size >= MIN_LABEL_FONT {
                    let drawn = layout::StackHeights {
                        income: (b - income_top).round() as i32,
                        spending: (income_top - bar_top).round() as i32,
                    };
                    let labels = layout::label_placements(day.income, day.spending, drawn, 0);
                    let first_baseline = bar_top - 3.0 - (labels.len() as f32 - 1.0) * line;
                    for (row, label) in labels.iter().enumerate() {
                        let text = format!("{:.2}", label.value);
                        let (tw, _) = label_font.measure_str(&text, Some(&text_paint));
                        let y = first_baseline + row as f32 * line;
                        canvas.draw_str(&text, (x_mid - tw / 2.0, y), &label_font, &text_paint);
                    }
                }

                canvas.draw_line((x_mid, b), (x_mid, b + 4.0), &axis);
                let day_text = layout::day_label(day.date);
                let (tw, _) = small.measure_str(&day_text, Some(&text_paint));
                canvas.draw_str(&day_text, (x_mid - tw / 2.0, b + 14.0), &small, &text_paint);
            }

            let caption = self.font(10.0);
            let (tw, _) = caption.measure_str("Day of Month", Some(&text_paint));
            canvas.draw_str("Day of Month", ((l + r - tw) / 2.0, h as f32 - 10.0), &caption, &text_paint);
            canvas.draw_str("Amount", (8.0, t - 8.0), &caption, &text_paint);

            let legend_font = self.font(10.0);
            for (k, (segment, name)) in [(Segment::Income, "Daily Income"), (Segment::Spending, "Daily Spending")]
                .iter()
                .enumerate()
            {
                let x = l + 8.0 + k as f32 * 110.0;
                canvas.draw_rect(skia::Rect::from_xywh(x, t + 4.0, 10.0, 10.0), &fill(segment_color(&theme, *segment)));
                canvas.draw_str(name, (x + 14.0, t + 13.0), &legend_font, &text_paint);
            }

            draw_title(canvas, &self.font(12.0), &chart.title(), w as f32, &text_paint);
        })
    }
}

impl ChartBackend for SkiaBackend {
    fn name(&self) -> &'static str {
        "skia"
    }

    fn render_proportion_chart(&self, chart: &ProportionChart, opts: &RenderOptions, path: &Path) -> Result<()> {
        let bytes = self.proportion_png(chart, opts).ok_or_else(|| render_failed(path))?;
        write_all(path, &bytes)
    }

    fn render_daily_chart(&self, chart: &DailyChart, opts: &RenderOptions, path: &Path) -> Result<()> {
        let bytes = self.daily_png(chart, opts).ok_or_else(|| render_failed(path))?;
        write_all(path, &bytes)
    }
}

// ---- helpers ----------------------------------------------------------------

fn render_png(width: i32, height: i32, background: skia::Color, draw: impl FnOnce(&skia::Canvas)) -> Option<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((width, height))?;
    let canvas = surface.canvas();
    canvas.clear(background);
    draw(canvas);

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image.encode_to_data(skia::EncodedImageFormat::PNG)?;
    Some(data.as_bytes().to_vec())
}

fn write_all(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).map_err(|source| ChartError::Encoding { path: path.to_path_buf(), source })
}

fn render_failed(path: &Path) -> ChartError {
    ChartError::Backend {
        backend: "skia",
        path: path.to_path_buf(),
        message: "raster surface or PNG encoding unavailable".to_string(),
    }
}

fn draw_title(canvas: &skia::Canvas, font: &skia::Font, title: &str, width: f32, paint: &skia::Paint) {
    let (tw, _) = font.measure_str(title, Some(paint));
    canvas.draw_str(title, ((width - tw) / 2.0, 20.0), font, paint);
}

fn color(c: Rgb) -> skia::Color {
    skia::Color::from_argb(255, c.r(), c.g(), c.b())
}

fn fill(c: Rgb) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color(c));
    paint
}

fn stroke(c: Rgb, width: f32) -> skia::Paint {
    let mut paint = fill(c);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn segment_color(theme: &Theme, segment: Segment) -> Rgb {
    match segment {
        Segment::Income => theme.income,
        Segment::Spending => theme.spending,
    }
}
