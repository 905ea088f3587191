//! Charts module - Figure assembly and static rendering

mod catalog;
mod figure;
mod renderer;
mod style;

pub use catalog::ChartKind;
pub use figure::{nice_step, AxisScale, Figure, LegendPosition, Panel};
pub use renderer::StaticChartRenderer;
pub use style::{Marker, SeriesStyle, StyleTable, Theme, Variant};
