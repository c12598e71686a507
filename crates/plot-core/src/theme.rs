// File: crates/plot-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use crate::types::Rgba;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub line_stroke: Rgba,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::opaque(18, 18, 20),
            grid: Rgba::opaque(40, 40, 45),
            axis_line: Rgba::opaque(180, 180, 190),
            axis_label: Rgba::opaque(235, 235, 245),
            line_stroke: Rgba::opaque(64, 160, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::opaque(250, 250, 252),
            grid: Rgba::opaque(230, 230, 235),
            axis_line: Rgba::opaque(60, 60, 70),
            axis_label: Rgba::opaque(20, 20, 30),
            line_stroke: Rgba::opaque(32, 120, 200),
        }
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
