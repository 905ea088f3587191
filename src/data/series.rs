//! Series Module
//! Category axes and the series aligned to them.

use crate::charts::Variant;
use crate::error::ChartError;
use serde::Serialize;

/// Shared independent variable (message sizes or thread counts).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAxis {
    pub values: Vec<f64>,
}

impl CategoryAxis {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// Build an axis from integer categories.
    pub fn from_counts(values: &[u64]) -> Self {
        Self::new(values.iter().map(|&v| v as f64).collect::<Vec<_>>())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Named samples for one variant, one per category value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub variant: Variant,
    pub label: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(variant: Variant, label: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            variant,
            label: label.into(),
            values: values.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A category axis paired with the series plotted against it.
///
/// Construction checks that every series has exactly one finite sample per
/// category, so renderers can zip values with categories without re-checking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSet {
    axis: CategoryAxis,
    series: Vec<Series>,
}

impl SeriesSet {
    pub fn new(axis: CategoryAxis, series: Vec<Series>) -> Result<Self, ChartError> {
        if axis.is_empty() {
            return Err(ChartError::InvalidInput(
                "category axis has no values".to_string(),
            ));
        }
        if series.is_empty() {
            return Err(ChartError::InvalidInput(
                "at least one series is required".to_string(),
            ));
        }
        if let Some(v) = axis.values.iter().find(|v| !v.is_finite()) {
            return Err(ChartError::InvalidInput(format!(
                "category axis contains non-finite value {}",
                v
            )));
        }

        for s in &series {
            if s.len() != axis.len() {
                return Err(ChartError::InvalidInput(format!(
                    "series '{}' has {} samples but the category axis has {}",
                    s.label,
                    s.len(),
                    axis.len()
                )));
            }
            if let Some(v) = s.values.iter().find(|v| !v.is_finite()) {
                return Err(ChartError::InvalidInput(format!(
                    "series '{}' contains non-finite value {}",
                    s.label, v
                )));
            }
        }

        Ok(Self { axis, series })
    }

    pub fn axis(&self) -> &CategoryAxis {
        &self.axis
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// (category, value) pairs for one series.
    pub fn points(&self, series: &Series) -> Vec<(f64, f64)> {
        self.axis
            .values
            .iter()
            .copied()
            .zip(series.values.iter().copied())
            .collect()
    }

    /// Min and max over all series values, or `None` if nothing is plotted.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in self.series.iter().flat_map(|s| s.values.iter()) {
            min = min.min(*v);
            max = max.max(*v);
        }
        if min.is_infinite() {
            None
        } else {
            Some((min, max))
        }
    }

    /// Min and max of the category axis.
    pub fn category_bounds(&self) -> (f64, f64) {
        self.axis
            .values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}
