use plotters::style::{RGBAColor, RGBColor};

/// Chart theme configuration
pub struct ChartTheme {
    pub background_color: RGBAColor,
    pub text_color: RGBAColor,
    pub grid_color: RGBAColor,
    pub axis_color: RGBAColor,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background_color: RGBAColor(0, 0, 0, 0.94),
            text_color: RGBAColor(255, 255, 255, 0.8),
            grid_color: RGBAColor(255, 255, 255, 0.15),
            axis_color: RGBAColor(255, 255, 255, 0.8),
        }
    }
}

/// Chart style configuration
pub struct ChartStyle {
    pub line_width: u32,
    pub font_size: u32,
    pub margin: u32,
    pub label_area_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_width: 2,
            font_size: 15,
            margin: 10,
            label_area_size: 50,
        }
    }
}

/// Categorical palette for pie slices.
pub const PALETTE: [RGBColor; 10] = [
    RGBColor(255, 182, 193),
    RGBColor(255, 215, 0),
    RGBColor(135, 206, 235),
    RGBColor(152, 251, 152),
    RGBColor(255, 160, 122),
    RGBColor(255, 218, 185),
    RGBColor(173, 216, 230),
    RGBColor(255, 99, 71),
    RGBColor(255, 165, 0),
    RGBColor(32, 178, 170),
];

/// Steel blue fill for line and bar series.
pub const SERIES_COLOR: RGBColor = RGBColor(70, 130, 180);

/// Fill for treemap tiles.
pub const TREEMAP_FILL: RGBColor = RGBColor(105, 179, 162);

/// Palette color for the i-th category, cycling past the end.
pub fn palette_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}
