use plotters::prelude::*;

const WHEAT: RGBColor = RGBColor(245, 222, 179);

/// Colors for the regression chart: red samples, a green fitted line, and a
/// wheat results panel.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub scatter: RGBColor,
    pub line: RGBColor,
    pub panel: RGBAColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            scatter: RED,
            line: GREEN,
            panel: RGBAColor(WHEAT.0, WHEAT.1, WHEAT.2, 0.5),
        }
    }
}
