//! Render Configuration
//! Output location, presentation mode and styling for a report run.

use crate::charts::{StyleTable, Theme};
use std::path::PathBuf;

/// Footer shown on every chart until replaced with real machine details.
pub const DEFAULT_SYSTEM_CONFIG: &str = "System: Linux | CPU: (update with your CPU) | \
     RAM: (update with your RAM) | Kernel: (update with kernel version)";

pub const ENV_OUTPUT_DIR: &str = "NETIO_CHARTS_OUTPUT_DIR";
pub const ENV_INTERACTIVE: &str = "NETIO_CHARTS_INTERACTIVE";
pub const ENV_SYSTEM_CONFIG: &str = "NETIO_CHARTS_SYSTEM_CONFIG";
pub const ENV_MANIFEST: &str = "NETIO_CHARTS_MANIFEST";

#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Destination for the images.
    pub output_dir: PathBuf,
    /// Open each saved image in the system viewer.
    pub interactive: bool,
    pub system_config: String,
    /// Also write `plot_manifest.json` describing the plotted data.
    pub write_manifest: bool,
    pub styles: StyleTable,
    pub theme: Theme,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            interactive: false,
            system_config: DEFAULT_SYSTEM_CONFIG.to_string(),
            write_manifest: false,
            styles: StyleTable::default(),
            theme: Theme::default(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `NETIO_CHARTS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, used by `from_env`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(dir) = lookup(ENV_OUTPUT_DIR).filter(|d| !d.trim().is_empty()) {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(flag) = lookup(ENV_INTERACTIVE) {
            config.interactive = parse_flag(&flag);
        }
        if let Some(text) = lookup(ENV_SYSTEM_CONFIG) {
            config.system_config = text;
        }
        if let Some(flag) = lookup(ENV_MANIFEST) {
            config.write_manifest = parse_flag(&flag);
        }
        config
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn with_system_config(mut self, text: impl Into<String>) -> Self {
        self.system_config = text.into();
        self
    }

    pub fn with_manifest(mut self, write_manifest: bool) -> Self {
        self.write_manifest = write_manifest;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
