// File: crates/chart-core/src/layout.rs
// Summary: Backend-independent geometry for the proportion (pie) chart and the dense daily stacked bars.
// Notes:
// - Angles are expressed as "turns": fractions of a full clockwise revolution
//   starting at 12 o'clock, in screen space (y grows downward).

use std::f64::consts::{FRAC_PI_2, TAU};

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::aggregate::{round_cents, to_f64, MonthlySummary};
use crate::geometry::clamp;

/// A wedge label is drawn only when the wedge covers at least this share.
pub const MIN_LABEL_SHARE: f64 = 0.08;
/// Wedge labels sit on the bisector at this fraction of the radius.
pub const LABEL_RADIUS_FACTOR: f64 = 0.55;

pub const MIN_BUCKET_WIDTH: i32 = 3;
pub const MIN_BAR_WIDTH: i32 = 2;
pub const MAX_BAR_WIDTH: i32 = 14;
/// Narrower buckets get no value labels in the raster renderer.
pub const LABEL_MIN_BUCKET_WIDTH: i32 = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    Income,
    Spending,
}

// ---- proportion chart -------------------------------------------------------

/// Income share of income + spending; an even split when both are zero.
pub fn income_share(income: f64, spending: f64) -> f64 {
    let total = income + spending;
    if !(total > 0.0) || !total.is_finite() {
        return 0.5;
    }
    clamp(income / total, 0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wedge {
    pub segment: Segment,
    pub value: Decimal,
    /// Start of the wedge, in turns.
    pub start: f64,
    /// Angular size of the wedge, in turns.
    pub share: f64,
    pub show_label: bool,
}

impl Wedge {
    pub fn end(&self) -> f64 {
        self.start + self.share
    }

    pub fn contains(&self, turn: f64) -> bool {
        turn >= self.start && turn < self.end()
    }

    /// Screen-space point on the wedge bisector at `LABEL_RADIUS_FACTOR` of `radius`.
    pub fn label_anchor(&self, cx: f64, cy: f64, radius: f64) -> (f64, f64) {
        let (cos, sin) = turn_direction(self.start + self.share / 2.0);
        let r = radius * LABEL_RADIUS_FACTOR;
        (cx + cos * r, cy + sin * r)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieLayout {
    pub income: Wedge,
    pub spending: Wedge,
}

impl PieLayout {
    pub fn wedges(&self) -> [Wedge; 2] {
        [self.income, self.spending]
    }

    /// Wedge covering the pixel offset (`dx`, `dy`) from the pie center.
    pub fn segment_at(&self, dx: f64, dy: f64) -> Segment {
        if self.income.contains(turn_of(dx, dy)) {
            Segment::Income
        } else {
            Segment::Spending
        }
    }
}

/// Income wedge first from 12 o'clock, spending fills the remainder.
pub fn pie_layout(summary: &MonthlySummary) -> PieLayout {
    let ratio = income_share(to_f64(summary.total_income), to_f64(summary.total_spending));
    PieLayout {
        income: Wedge {
            segment: Segment::Income,
            value: summary.total_income,
            start: 0.0,
            share: ratio,
            show_label: ratio >= MIN_LABEL_SHARE,
        },
        spending: Wedge {
            segment: Segment::Spending,
            value: summary.total_spending,
            start: ratio,
            share: 1.0 - ratio,
            show_label: 1.0 - ratio >= MIN_LABEL_SHARE,
        },
    }
}

/// Clockwise turn from 12 o'clock of a screen offset, in `[0, 1)`.
pub fn turn_of(dx: f64, dy: f64) -> f64 {
    ((dy.atan2(dx) + FRAC_PI_2).rem_euclid(TAU) / TAU).min(1.0 - f64::EPSILON)
}

/// Screen-space unit vector `(cos, sin)` for a turn.
pub fn turn_direction(turn: f64) -> (f64, f64) {
    let angle = turn * TAU - FRAC_PI_2;
    (angle.cos(), angle.sin())
}

// ---- dense daily chart ------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarGeometry {
    pub bucket_width: i32,
    pub bar_width: i32,
}

impl BarGeometry {
    pub fn bucket_left(&self, plot_left: i32, index: usize) -> i32 {
        plot_left + index as i32 * self.bucket_width
    }

    /// Left edge of the bar, centered in its bucket.
    pub fn bar_left(&self, plot_left: i32, index: usize) -> i32 {
        self.bucket_left(plot_left, index) + ((self.bucket_width - self.bar_width) / 2).max(0)
    }

    pub fn bar_center(&self, plot_left: i32, index: usize) -> i32 {
        self.bar_left(plot_left, index) + self.bar_width / 2
    }

    pub fn labels_fit(&self) -> bool {
        self.bucket_width >= LABEL_MIN_BUCKET_WIDTH
    }
}

/// One bucket per day across `plot_width`; bars leave a 1px gap and are
/// clamped to `[MIN_BAR_WIDTH, MAX_BAR_WIDTH]`.
pub fn bar_geometry(plot_width: i32, days: usize) -> BarGeometry {
    let bucket_width = (plot_width / days.max(1) as i32).max(MIN_BUCKET_WIDTH);
    let bar_width = clamp(bucket_width - 1, MIN_BAR_WIDTH, MAX_BAR_WIDTH);
    BarGeometry { bucket_width, bar_width }
}

/// Pixel heights of the two stacked segments of one day's bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StackHeights {
    pub income: i32,
    pub spending: i32,
}

impl StackHeights {
    pub fn total(&self) -> i32 {
        self.income + self.spending
    }
}

/// Scale a day's stack against `vmax` over `plot_height` pixels. A non-zero
/// day is at least 1px tall; a zero day is flat.
pub fn stack_heights(income: f64, spending: f64, vmax: f64, plot_height: i32) -> StackHeights {
    let total = income + spending;
    if !(total > 0.0) || !(vmax > 0.0) || plot_height <= 0 {
        return StackHeights::default();
    }
    let total_h = clamp(((total / vmax) * plot_height as f64) as i32, 1, plot_height);
    let income_h = ((income / total) * total_h as f64) as i32;
    StackHeights { income: income_h, spending: total_h - income_h }
}

/// Visual stack from top to bottom: spending is layered above income.
pub const STACK_TOP_TO_BOTTOM: [Segment; 2] = [Segment::Spending, Segment::Income];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelPlacement {
    pub segment: Segment,
    pub value: Decimal,
    /// Distance below the top of the label block, in pixels.
    pub offset: i32,
}

/// Value labels for one bar, ordered top to bottom like the stack they
/// describe. A segment gets a label only when it was drawn, i.e. its pixel
/// height in `heights` is positive; the amounts supply the label text.
pub fn label_placements(
    income: Decimal,
    spending: Decimal,
    heights: StackHeights,
    line_height: i32,
) -> Vec<LabelPlacement> {
    STACK_TOP_TO_BOTTOM
        .iter()
        .map(|&segment| match segment {
            Segment::Income => (segment, income, heights.income),
            Segment::Spending => (segment, spending, heights.spending),
        })
        .filter(|&(_, _, height)| height > 0)
        .enumerate()
        .map(|(row, (segment, value, _))| LabelPlacement { segment, value, offset: row as i32 * line_height })
        .collect()
}

// ---- labels -------------------------------------------------------------------

/// Cents with trailing zeros dropped: `100.00 -> "100"`, `40.50 -> "40.5"`.
pub fn format_amount(value: Decimal) -> String {
    round_cents(value).normalize().to_string()
}

/// Two-digit day of month for axis ticks.
pub fn day_label(date: NaiveDate) -> String {
    format!("{:02}", date.day())
}
