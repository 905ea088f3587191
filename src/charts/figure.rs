//! Figure Model
//! Renderer-independent description of a chart: panels, axis scales, legends.

use crate::data::SeriesSet;
use crate::error::ChartError;
use serde::Serialize;

/// Fraction of the data span added on each side of an axis.
const AXIS_PADDING: f64 = 0.08;

/// Target number of ticks on a linear value axis.
const LINEAR_TICK_TARGET: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisScale {
    Linear,
    Log2,
    Log10,
}

impl AxisScale {
    /// Map a data value into plot space.
    pub fn forward(self, v: f64) -> f64 {
        match self {
            AxisScale::Linear => v,
            AxisScale::Log2 => v.log2(),
            AxisScale::Log10 => v.log10(),
        }
    }

    /// Map a plot-space value back to data space.
    pub fn inverse(self, t: f64) -> f64 {
        match self {
            AxisScale::Linear => t,
            AxisScale::Log2 => 2f64.powf(t),
            AxisScale::Log10 => 10f64.powf(t),
        }
    }

    pub fn is_log(self) -> bool {
        !matches!(self, AxisScale::Linear)
    }

    /// Tick label for a plot-space position.
    pub fn format_tick(self, t: f64) -> String {
        match self {
            AxisScale::Linear => trim_decimal(t),
            AxisScale::Log2 => format!("{:.0}", self.inverse(t)),
            AxisScale::Log10 => {
                if (t - t.round()).abs() < 1e-9 {
                    format!("1e{:.0}", t)
                } else {
                    format!("{:.1e}", self.inverse(t))
                }
            }
        }
    }

    /// Padded plot-space range covering `[lo, hi]` in data space.
    pub fn padded_range(self, lo: f64, hi: f64) -> (f64, f64) {
        let (lo, hi) = (self.forward(lo), self.forward(hi));
        let span = hi - lo;
        let pad = if span > 0.0 {
            span * AXIS_PADDING
        } else if lo != 0.0 {
            lo.abs() * AXIS_PADDING
        } else {
            1.0
        };
        (lo - pad, hi + pad)
    }

    /// Value-axis ticks in plot space inside `range`.
    pub fn value_ticks(self, range: (f64, f64)) -> Vec<f64> {
        let (lo, hi) = range;
        match self {
            AxisScale::Linear => {
                let step = nice_step(hi - lo, LINEAR_TICK_TARGET);
                let mut ticks = Vec::new();
                let mut t = (lo / step).ceil() * step;
                while t <= hi {
                    // Snap to avoid labels like 0.30000000000000004
                    ticks.push((t / step).round() * step);
                    t += step;
                }
                ticks
            }
            AxisScale::Log2 | AxisScale::Log10 => {
                (lo.ceil() as i64..=hi.floor() as i64).map(|e| e as f64).collect()
            }
        }
    }
}

/// Round a linear range to a 1/2/5 step.
pub fn nice_step(range: f64, target_steps: usize) -> f64 {
    if range <= 0.0 || !range.is_finite() {
        return 1.0;
    }
    let raw_step = range / target_steps.max(1) as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;

    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}

fn trim_decimal(v: f64) -> String {
    let formatted = format!("{:.2}", v);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
}

/// One set of axes with its series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,
    pub legend: LegendPosition,
    pub data: SeriesSet,
}

impl Panel {
    /// Reject values a log axis cannot place.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.x_scale.is_log() {
            if let Some(v) = self.data.axis().values.iter().find(|&&v| v <= 0.0) {
                return Err(ChartError::InvalidInput(format!(
                    "'{}': category {} cannot be shown on a log axis",
                    self.title, v
                )));
            }
        }
        if self.y_scale.is_log() {
            for s in self.data.series() {
                if let Some(v) = s.values.iter().find(|&&v| v <= 0.0) {
                    return Err(ChartError::InvalidInput(format!(
                        "'{}': series '{}' value {} cannot be shown on a log axis",
                        self.title, s.label, v
                    )));
                }
            }
        }
        Ok(())
    }

    /// Plot-space x range.
    pub fn x_range(&self) -> (f64, f64) {
        let (lo, hi) = self.data.category_bounds();
        self.x_scale.padded_range(lo, hi)
    }

    /// Plot-space y range.
    pub fn y_range(&self) -> (f64, f64) {
        let (lo, hi) = self.data.value_bounds().unwrap_or((0.0, 1.0));
        self.y_scale.padded_range(lo, hi)
    }

    /// Fixed x ticks, one per category value.
    pub fn x_ticks(&self) -> Vec<f64> {
        self.data
            .axis()
            .values
            .iter()
            .map(|&v| self.x_scale.forward(v))
            .collect()
    }

    pub fn y_ticks(&self) -> Vec<f64> {
        self.y_scale.value_ticks(self.y_range())
    }

    /// Plot-space points for each series, in series order.
    pub fn plot_points(&self) -> Vec<Vec<(f64, f64)>> {
        self.data
            .series()
            .iter()
            .map(|s| {
                self.data
                    .points(s)
                    .into_iter()
                    .map(|(x, y)| (self.x_scale.forward(x), self.y_scale.forward(y)))
                    .collect()
            })
            .collect()
    }
}

/// Everything needed to draw one image file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub file_name: String,
    pub size: (u32, u32),
    /// Drawn left to right.
    pub panels: Vec<Panel>,
    pub footer: String,
}

impl Figure {
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.panels.is_empty() {
            return Err(ChartError::InvalidInput(format!(
                "figure '{}' has no panels",
                self.file_name
            )));
        }
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(ChartError::InvalidInput(format!(
                "figure '{}' has zero size",
                self.file_name
            )));
        }
        self.panels.iter().try_for_each(Panel::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::Variant;
    use crate::data::{CategoryAxis, Series};
    use approx::assert_relative_eq;

    fn panel(x_scale: AxisScale, y_scale: AxisScale, values: Vec<f64>) -> Panel {
        let data = SeriesSet::new(
            CategoryAxis::from_counts(&[256, 1024, 4096]),
            vec![Series::new(Variant::TwoCopy, "Two-Copy", values)],
        )
        .unwrap();
        Panel {
            title: "test".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            x_scale,
            y_scale,
            legend: LegendPosition::UpperLeft,
            data,
        }
    }

    #[test]
    fn log2_ticks_sit_on_categories() {
        let p = panel(AxisScale::Log2, AxisScale::Linear, vec![1.0, 2.0, 3.0]);
        assert_eq!(p.x_ticks(), vec![8.0, 10.0, 12.0]);
        let labels: Vec<String> = p
            .x_ticks()
            .iter()
            .map(|&t| AxisScale::Log2.format_tick(t))
            .collect();
        assert_eq!(labels, vec!["256", "1024", "4096"]);

        let (lo, hi) = p.x_range();
        assert!(lo < 8.0 && hi > 12.0);
    }

    #[test]
    fn log10_ticks_are_whole_decades() {
        let p = panel(
            AxisScale::Log2,
            AxisScale::Log10,
            vec![2000.0, 65000.0, 4_500_000.0],
        );
        let ticks = p.y_ticks();
        assert_eq!(ticks, vec![4.0, 5.0, 6.0]);
        assert_eq!(AxisScale::Log10.format_tick(5.0), "1e5");
    }

    #[test]
    fn linear_ticks_use_nice_steps() {
        assert_relative_eq!(nice_step(9.0, 8), 2.0);
        assert_relative_eq!(nice_step(0.75, 8), 0.1);
        assert_relative_eq!(nice_step(40.0, 8), 5.0);

        let ticks = AxisScale::Linear.value_ticks((-0.3, 9.9));
        assert_eq!(ticks, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
        assert_eq!(AxisScale::Linear.format_tick(0.5), "0.5");
        assert_eq!(AxisScale::Linear.format_tick(4.0), "4");
    }

    #[test]
    fn log_axis_rejects_non_positive_values() {
        let p = panel(AxisScale::Log2, AxisScale::Log10, vec![1.0, 0.0, 3.0]);
        assert!(p.validate().unwrap_err().is_invalid_input());

        let linear = panel(AxisScale::Log2, AxisScale::Linear, vec![1.0, 0.0, 3.0]);
        assert!(linear.validate().is_ok());
    }

    #[test]
    fn flat_series_still_gets_a_range() {
        let p = panel(AxisScale::Linear, AxisScale::Linear, vec![0.0, 0.0, 0.0]);
        let (lo, hi) = p.y_range();
        assert!(lo < 0.0 && hi > 0.0);
    }
}
