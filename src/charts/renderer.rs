//! Static Chart Renderer
//! Draws a `Figure` into an in-memory RGB image with plotters, then saves it.
//!
//! Layout:
//! 1. Panels side-by-side across the figure width, each with its own
//!    caption, mesh, series and legend
//! 2. Footer strip: centered italic system-configuration annotation

use crate::charts::figure::{AxisScale, Figure, LegendPosition, Panel};
use crate::charts::style::{Marker, StyleTable, Theme, FONT_FAMILY, FOOTER_COLOR};
use crate::error::ChartError;
use image::RgbImage;
use plotters::coord::ranged1d::{
    KeyPointHint, KeyPointWeight, NoDefaultFormatting, Ranged, ValueFormatter,
};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Length of the line sample drawn next to each legend entry.
const LEGEND_LINE_HALF: i32 = 15;

/// Marker size in pixels. A triangle of the same radius covers much less area
/// than a circle or square, so it is drawn half again as large.
fn marker_radius(marker: Marker, size: i32) -> i32 {
    match marker {
        Marker::Triangle => size + size / 2,
        Marker::Circle | Marker::Square => size,
    }
}

/// Plot-space axis with fixed tick positions, labelled in data space.
#[derive(Debug, Clone)]
struct TickAxis {
    range: Range<f64>,
    ticks: Vec<f64>,
    scale: AxisScale,
}

impl TickAxis {
    fn new((lo, hi): (f64, f64), ticks: Vec<f64>, scale: AxisScale) -> Self {
        let ticks = ticks.into_iter().filter(|t| *t >= lo && *t <= hi).collect();
        Self {
            range: lo..hi,
            ticks,
            scale,
        }
    }

    /// Only bold points are real ticks. Light points would redraw the grid.
    fn ticks_for(&self, weight: KeyPointWeight) -> Vec<f64> {
        if weight.allow_light_points() {
            Vec::new()
        } else {
            self.ticks.clone()
        }
    }
}

impl Ranged for TickAxis {
    type FormatOption = NoDefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        let span = self.range.end - self.range.start;
        let pixels = limit.1 - limit.0;
        if pixels == 0 || span <= 0.0 {
            return limit.1;
        }
        let ratio = (*value - self.range.start) / span;
        limit.0 + (pixels as f64 * ratio + 1e-3).floor() as i32
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        self.ticks_for(hint.weight())
    }

    fn range(&self) -> Range<f64> {
        self.range.clone()
    }
}

impl ValueFormatter<f64> for TickAxis {
    fn format_ext(&self, value: &f64) -> String {
        self.scale.format_tick(*value)
    }
}

pub struct StaticChartRenderer<'a> {
    styles: &'a StyleTable,
    theme: &'a Theme,
}

impl<'a> StaticChartRenderer<'a> {
    pub fn new(styles: &'a StyleTable, theme: &'a Theme) -> Self {
        Self { styles, theme }
    }

    /// Draw the figure into a fresh image. Nothing touches the filesystem.
    pub fn render(&self, figure: &Figure) -> Result<RgbImage, ChartError> {
        figure.validate()?;

        let (width, height) = figure.size;
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        self.draw_figure(figure, &mut buffer)?;

        RgbImage::from_raw(width, height, buffer).ok_or_else(|| {
            ChartError::Render(format!(
                "pixel buffer does not match {}x{} for '{}'",
                width, height, figure.file_name
            ))
        })
    }

    /// Render and write `figure` under `output_dir`, returning the file path.
    pub fn render_to_file(&self, figure: &Figure, output_dir: &Path) -> Result<PathBuf, ChartError> {
        let image = self.render(figure)?;
        let path = output_dir.join(&figure.file_name);
        Self::save(&image, &path)?;
        Ok(path)
    }

    pub fn save(image: &RgbImage, path: &Path) -> Result<(), ChartError> {
        image.save(path).map_err(|source| ChartError::Save {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "chart image written");
        Ok(())
    }

    fn draw_figure(&self, figure: &Figure, buffer: &mut [u8]) -> Result<(), ChartError> {
        let (width, height) = figure.size;
        let root = BitMapBackend::with_buffer(buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        let footer_h = self.theme.footer_height.min(height / 4);
        let (plot_area, footer_area) = root.split_vertically(height - footer_h);

        let panels = plot_area.split_evenly((1, figure.panels.len()));
        for (area, panel) in panels.iter().zip(&figure.panels) {
            self.draw_panel(area, panel)?;
        }

        self.draw_footer(&footer_area, &figure.footer)?;
        root.present()?;
        Ok(())
    }

    fn draw_panel(
        &self,
        area: &DrawingArea<BitMapBackend<'_>, Shift>,
        panel: &Panel,
    ) -> Result<(), ChartError> {
        let theme = self.theme;
        let x_axis = TickAxis::new(panel.x_range(), panel.x_ticks(), panel.x_scale);
        let y_axis = TickAxis::new(panel.y_range(), panel.y_ticks(), panel.y_scale);

        let mut chart = ChartBuilder::on(area)
            .caption(&panel.title, (FONT_FAMILY, theme.title_font))
            .margin(theme.margin)
            .x_label_area_size(theme.x_label_area)
            .y_label_area_size(theme.y_label_area)
            .build_cartesian_2d(x_axis, y_axis)?;

        chart
            .configure_mesh()
            .x_desc(panel.x_label.as_str())
            .y_desc(panel.y_label.as_str())
            .label_style((FONT_FAMILY, theme.tick_font))
            .axis_desc_style((FONT_FAMILY, theme.label_font))
            .bold_line_style(BLACK.mix(theme.grid_alpha * 0.5))
            .draw()?;

        for (series, points) in panel.data.series().iter().zip(panel.plot_points()) {
            let style = self.styles.get(series.variant);
            let line = style.color.stroke_width(theme.line_width);
            let fill = style.color.filled();
            let size = marker_radius(style.marker, theme.marker_size as i32);

            chart.draw_series(LineSeries::new(points.iter().copied(), line))?;

            // Legend entries hang off the marker series so the glyph shows both
            match style.marker {
                Marker::Circle => {
                    chart
                        .draw_series(points.iter().map(|&p| Circle::new(p, size, fill)))?
                        .label(series.label.as_str())
                        .legend(move |(x, y)| {
                            EmptyElement::at((x, y))
                                + PathElement::new(
                                    vec![(-LEGEND_LINE_HALF, 0), (LEGEND_LINE_HALF, 0)],
                                    line,
                                )
                                + Circle::new((0, 0), size, fill)
                        });
                }
                Marker::Square => {
                    chart
                        .draw_series(points.iter().map(|&p| {
                            EmptyElement::at(p)
                                + Rectangle::new([(-size, -size), (size, size)], fill)
                        }))?
                        .label(series.label.as_str())
                        .legend(move |(x, y)| {
                            EmptyElement::at((x, y))
                                + PathElement::new(
                                    vec![(-LEGEND_LINE_HALF, 0), (LEGEND_LINE_HALF, 0)],
                                    line,
                                )
                                + Rectangle::new([(-size, -size), (size, size)], fill)
                        });
                }
                Marker::Triangle => {
                    chart
                        .draw_series(points.iter().map(|&p| TriangleMarker::new(p, size, fill)))?
                        .label(series.label.as_str())
                        .legend(move |(x, y)| {
                            EmptyElement::at((x, y))
                                + PathElement::new(
                                    vec![(-LEGEND_LINE_HALF, 0), (LEGEND_LINE_HALF, 0)],
                                    line,
                                )
                                + TriangleMarker::new((0, 0), size, fill)
                        });
                }
            }
        }

        let position = match panel.legend {
            LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
        };
        chart
            .configure_series_labels()
            .position(position)
            .margin(theme.margin)
            .legend_area_size(2 * LEGEND_LINE_HALF + 10)
            .label_font((FONT_FAMILY, theme.legend_font))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.3))
            .draw()?;

        Ok(())
    }

    fn draw_footer(
        &self,
        area: &DrawingArea<BitMapBackend<'_>, Shift>,
        text: &str,
    ) -> Result<(), ChartError> {
        if text.is_empty() {
            return Ok(());
        }

        let style = (FONT_FAMILY, self.theme.footer_font, FontStyle::Italic)
            .into_font()
            .color(&FOOTER_COLOR);
        let (w, h) = area.dim_in_pixel();
        let (text_w, text_h) = area.estimate_text_size(text, &style)?;
        let x = (w as i32 - text_w as i32) / 2;
        let y = (h as i32 - text_h as i32) / 2;

        area.draw_text(text, &style, (x.max(0), y.max(0)))?;
        Ok(())
    }
}
