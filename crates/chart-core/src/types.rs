// File: crates/chart-core/src/types.rs
// Summary: Shared chart sizes and margins for the two monthly charts.

/// Proportion (pie) chart width in pixels.
pub const PIE_WIDTH: u32 = 380;
/// Proportion (pie) chart height in pixels.
pub const PIE_HEIGHT: u32 = 210;
/// Horizontal shift of the pie center left of the surface middle, leaving room for the legend.
pub const PIE_CENTER_SHIFT: i32 = 80;

/// Daily chart height in pixels.
pub const DAILY_HEIGHT: u32 = 230;
/// Minimum daily chart width in pixels.
pub const DAILY_MIN_WIDTH: u32 = 600;
/// Width granted per calendar day so every day stays visible.
pub const DAILY_DAY_WIDTH: u32 = 30;
/// Axis margin on every side of the daily chart.
pub const DAILY_MARGIN: u32 = 44;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn uniform(margin: u32) -> Self {
        Self::new(margin, margin, margin, margin)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(DAILY_MARGIN)
    }
}
