//! Error types shared by the data and chart modules.

use plotters::drawing::DrawingAreaErrorKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Render failed: {0}")]
    Render(String),
    #[error("Failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl ChartError {
    /// True for errors caused by the plotted data rather than by drawing or writing.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ChartError::InvalidInput(_))
    }
}

impl<E> From<DrawingAreaErrorKind<E>> for ChartError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Render(err.to_string())
    }
}
