//! Data module - measurement tables, aligned series and derived metrics

mod derive;
mod measurements;
mod series;

pub use derive::cycles_per_byte;
pub use measurements::{Measurements, PerVariant, MSG_SIZES, THREAD_COUNTS};
pub use series::{CategoryAxis, Series, SeriesSet};
