//! Report Generation
//! Renders every chart in order, keeps going past failures, and summarises.

use crate::charts::{ChartKind, Figure, StaticChartRenderer};
use crate::config::RenderConfig;
use crate::data::Measurements;
use crate::error::ChartError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

pub const MANIFEST_FILE: &str = "plot_manifest.json";

/// Result of rendering one chart.
#[derive(Debug)]
pub struct ChartOutcome {
    pub kind: ChartKind,
    pub result: Result<PathBuf, ChartError>,
}

impl ChartOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<ChartOutcome>,
    /// Manifest write result. `None` when no manifest was requested.
    pub manifest: Option<Result<PathBuf, ChartError>>,
}

impl RunSummary {
    pub fn succeeded(&self) -> impl Iterator<Item = &ChartOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &ChartOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// True when every chart and the requested manifest were written.
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(ChartOutcome::is_success) && self.manifest_error().is_none()
    }

    pub fn manifest_path(&self) -> Option<&Path> {
        match &self.manifest {
            Some(Ok(path)) => Some(path.as_path()),
            _ => None,
        }
    }

    pub fn manifest_error(&self) -> Option<&ChartError> {
        match &self.manifest {
            Some(Err(e)) => Some(e),
            _ => None,
        }
    }

    pub fn written_files(&self) -> Vec<&Path> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(PathBuf::as_path))
            .collect()
    }
}

/// Drives one full report run over the fixed chart list.
pub struct ReportGenerator<'a> {
    config: &'a RenderConfig,
    data: &'a Measurements,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(config: &'a RenderConfig, data: &'a Measurements) -> Self {
        Self { config, data }
    }

    /// Render all charts, reporting each outcome as soon as it is known.
    pub fn run<F>(&self, mut on_outcome: F) -> RunSummary
    where
        F: FnMut(&ChartOutcome),
    {
        let mut summary = RunSummary::default();
        let mut figures = Vec::new();

        for kind in ChartKind::ALL {
            let result = self.render_chart(kind).map(|(path, figure)| {
                if self.config.write_manifest {
                    figures.push(figure);
                }
                path
            });

            if let Err(e) = &result {
                error!(chart = kind.display_name(), error = %e, "chart failed");
            }

            let outcome = ChartOutcome { kind, result };
            on_outcome(&outcome);
            summary.outcomes.push(outcome);
        }

        if self.config.write_manifest {
            let result = self.write_manifest(&figures);
            if let Err(e) = &result {
                error!(error = %e, "failed to write manifest");
            }
            summary.manifest = Some(result);
        }

        summary
    }

    /// Build, draw, save and optionally present one chart.
    pub fn render_chart(&self, kind: ChartKind) -> Result<(PathBuf, Figure), ChartError> {
        let figure = kind.build(self.data, &self.config.theme, &self.config.system_config)?;

        fs::create_dir_all(&self.config.output_dir)?;
        let renderer = StaticChartRenderer::new(&self.config.styles, &self.config.theme);
        let path = renderer.render_to_file(&figure, &self.config.output_dir)?;
        info!(chart = kind.display_name(), path = %path.display(), "chart saved");

        if self.config.interactive {
            present(&path);
        }

        Ok((path, figure))
    }

    fn write_manifest(&self, figures: &[Figure]) -> Result<PathBuf, ChartError> {
        let path = self.config.output_dir.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(figures)?;
        fs::write(&path, json)?;
        info!(path = %path.display(), figures = figures.len(), "manifest written");
        Ok(path)
    }
}

/// Show a saved image in the system viewer. The file is already on disk, so
/// failures only warn.
fn present(path: &Path) {
    if let Err(e) = open::that(path) {
        warn!(path = %path.display(), error = %e, "could not open image viewer");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_data_fails_only_its_chart() {
        let dir = tempfile::tempdir().unwrap();
        let config = RenderConfig::default().with_output_dir(dir.path());
        let mut data = Measurements::sample();
        data.latency.zero_copy.push(30.0);

        let generator = ReportGenerator::new(&config, &data);
        let err = generator.render_chart(ChartKind::Latency).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(!dir.path().join(ChartKind::Latency.file_name()).exists());
    }

    #[test]
    fn summary_partitions_outcomes() {
        let summary = RunSummary {
            outcomes: vec![
                ChartOutcome {
                    kind: ChartKind::Throughput,
                    result: Ok(PathBuf::from("a.png")),
                },
                ChartOutcome {
                    kind: ChartKind::Latency,
                    result: Err(ChartError::Render("no font".to_string())),
                },
            ],
            manifest: None,
        };

        assert!(!summary.all_succeeded());
        assert_eq!(summary.succeeded().count(), 1);
        assert_eq!(summary.failed().next().unwrap().kind, ChartKind::Latency);
        assert_eq!(summary.written_files(), vec![Path::new("a.png")]);
    }

    #[test]
    fn manifest_failure_spoils_an_otherwise_clean_run() {
        let mut summary = RunSummary {
            outcomes: vec![ChartOutcome {
                kind: ChartKind::Throughput,
                result: Ok(PathBuf::from("a.png")),
            }],
            manifest: Some(Ok(PathBuf::from(MANIFEST_FILE))),
        };
        assert!(summary.all_succeeded());
        assert_eq!(summary.manifest_path(), Some(Path::new(MANIFEST_FILE)));
        assert!(summary.manifest_error().is_none());

        summary.manifest = Some(Err(ChartError::Render("disk full".to_string())));
        assert!(!summary.all_succeeded());
        assert!(summary.manifest_path().is_none());
        assert!(summary.manifest_error().is_some());
        assert_eq!(summary.failed().count(), 0);
    }
}
