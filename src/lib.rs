//! Netio Charts - static report charts for network I/O copy-path experiments
//!
//! Renders throughput, latency, cache-miss and cycles-per-byte charts comparing
//! two-copy, one-copy and zero-copy transfers, and writes them as PNG files.

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod report;

pub use config::RenderConfig;
pub use error::ChartError;
pub use report::{ChartOutcome, ReportGenerator, RunSummary};
