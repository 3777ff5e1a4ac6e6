// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark palettes for the monthly charts.

use crate::raster::Rgb;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgb,
    pub grid: Rgb,
    pub axis_line: Rgb,
    pub text: Rgb,
    pub bar_outline: Rgb,
    pub income: Rgb,
    pub spending: Rgb,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgb::WHITE,
            grid: Rgb(230, 230, 235),
            axis_line: Rgb(100, 100, 100),
            text: Rgb(35, 35, 35),
            bar_outline: Rgb(65, 65, 65),
            income: Rgb(44, 127, 184),   // blue
            spending: Rgb(242, 142, 43), // orange
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgb(18, 18, 20),
            grid: Rgb(40, 40, 45),
            axis_line: Rgb(180, 180, 190),
            text: Rgb(235, 235, 245),
            bar_outline: Rgb(150, 150, 160),
            income: Rgb(64, 160, 255),
            spending: Rgb(255, 166, 77),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
