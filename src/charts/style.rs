//! Chart Style Module
//! Per-variant colors and markers plus the shared size/font theme.

use plotters::style::RGBColor;
use serde::Serialize;

pub const TWO_COPY_COLOR: RGBColor = RGBColor(31, 119, 180); // Blue
pub const ONE_COPY_COLOR: RGBColor = RGBColor(255, 127, 14); // Orange
pub const ZERO_COPY_COLOR: RGBColor = RGBColor(44, 160, 44); // Green

/// Footer annotation color
pub const FOOTER_COLOR: RGBColor = RGBColor(128, 128, 128);

pub const FONT_FAMILY: &str = "sans-serif";

/// Copy-path implementation being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    TwoCopy,
    OneCopy,
    ZeroCopy,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::TwoCopy, Variant::OneCopy, Variant::ZeroCopy];

    pub fn short_label(self) -> &'static str {
        match self {
            Variant::TwoCopy => "Two-Copy",
            Variant::OneCopy => "One-Copy",
            Variant::ZeroCopy => "Zero-Copy",
        }
    }

    /// Label naming the system call path as well.
    pub fn long_label(self) -> &'static str {
        match self {
            Variant::TwoCopy => "Two-Copy (send/recv)",
            Variant::OneCopy => "One-Copy (sendmsg/iovec)",
            Variant::ZeroCopy => "Zero-Copy (MSG_ZEROCOPY)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    Circle,
    Square,
    Triangle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub color: RGBColor,
    pub marker: Marker,
}

/// Color and marker per variant, identical across every chart.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    pub two_copy: SeriesStyle,
    pub one_copy: SeriesStyle,
    pub zero_copy: SeriesStyle,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            two_copy: SeriesStyle {
                color: TWO_COPY_COLOR,
                marker: Marker::Circle,
            },
            one_copy: SeriesStyle {
                color: ONE_COPY_COLOR,
                marker: Marker::Square,
            },
            zero_copy: SeriesStyle {
                color: ZERO_COPY_COLOR,
                marker: Marker::Triangle,
            },
        }
    }
}

impl StyleTable {
    pub fn get(&self, variant: Variant) -> SeriesStyle {
        match variant {
            Variant::TwoCopy => self.two_copy,
            Variant::OneCopy => self.one_copy,
            Variant::ZeroCopy => self.zero_copy,
        }
    }
}

/// Figure sizes and font sizes in pixels.
///
/// Defaults reproduce a 10x7 inch figure at 150 DPI with 12pt body text.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub figure_size: (u32, u32),
    /// Used by charts with two side-by-side panels.
    pub wide_figure_size: (u32, u32),
    pub title_font: f64,
    pub label_font: f64,
    pub tick_font: f64,
    pub legend_font: f64,
    pub footer_font: f64,
    pub footer_height: u32,
    pub line_width: u32,
    /// Marker radius.
    pub marker_size: u32,
    pub margin: u32,
    pub x_label_area: u32,
    pub y_label_area: u32,
    /// Opacity of grid lines.
    pub grid_alpha: f64,
}

impl Default for Theme {
    fn default() -> Self {
        let dpi = 150.0;
        let pt = |points: f64| points * dpi / 72.0;

        Self {
            figure_size: (1500, 1050),
            wide_figure_size: (2100, 900),
            title_font: pt(14.0),
            label_font: pt(13.0),
            tick_font: pt(11.0),
            legend_font: pt(11.0),
            footer_font: pt(9.0),
            footer_height: 45,
            line_width: pt(2.0).round() as u32,
            marker_size: pt(4.0).round() as u32,
            margin: 20,
            x_label_area: 80,
            y_label_area: 120,
            grid_alpha: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_variant_has_distinct_style() {
        let table = StyleTable::default();
        let styles: Vec<SeriesStyle> = Variant::ALL.iter().map(|&v| table.get(v)).collect();

        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a.color, b.color);
                assert_ne!(a.marker, b.marker);
            }
        }
    }

    #[test]
    fn default_theme_scales_points_to_pixels() {
        let theme = Theme::default();
        assert_eq!(theme.line_width, 4);
        assert!(theme.title_font > theme.tick_font);
        assert!(theme.wide_figure_size.0 > theme.figure_size.0);
    }
}
