//! Chart Catalog
//! The four report charts and how each one is assembled from the measurements.

use crate::charts::figure::{AxisScale, Figure, LegendPosition, Panel};
use crate::charts::style::{Theme, Variant};
use crate::data::{cycles_per_byte, CategoryAxis, Measurements, PerVariant, Series, SeriesSet};
use crate::error::ChartError;

const MSG_SIZE_LABEL: &str = "Message Size (bytes)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Throughput,
    Latency,
    CacheMisses,
    CyclesPerByte,
}

impl ChartKind {
    /// Render order.
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Throughput,
        ChartKind::Latency,
        ChartKind::CacheMisses,
        ChartKind::CyclesPerByte,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::Throughput => "plot_throughput_vs_msgsize.png",
            ChartKind::Latency => "plot_latency_vs_threads.png",
            ChartKind::CacheMisses => "plot_cache_misses_vs_msgsize.png",
            ChartKind::CyclesPerByte => "plot_cycles_per_byte.png",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ChartKind::Throughput => "Throughput vs Message Size",
            ChartKind::Latency => "Latency vs Thread Count",
            ChartKind::CacheMisses => "Cache Misses vs Message Size",
            ChartKind::CyclesPerByte => "CPU Cycles per Byte",
        }
    }

    /// 1-based position in the report.
    pub fn number(self) -> usize {
        match self {
            ChartKind::Throughput => 1,
            ChartKind::Latency => 2,
            ChartKind::CacheMisses => 3,
            ChartKind::CyclesPerByte => 4,
        }
    }

    /// Assemble the figure for this chart. Fails on misaligned data.
    pub fn build(
        self,
        data: &Measurements,
        theme: &Theme,
        footer: &str,
    ) -> Result<Figure, ChartError> {
        let (size, panels) = match self {
            ChartKind::Throughput => (theme.figure_size, vec![throughput_panel(data)?]),
            ChartKind::Latency => (theme.figure_size, vec![latency_panel(data)?]),
            ChartKind::CacheMisses => (theme.wide_figure_size, cache_miss_panels(data)?),
            ChartKind::CyclesPerByte => (theme.figure_size, vec![cycles_per_byte_panel(data)?]),
        };

        let figure = Figure {
            file_name: self.file_name().to_string(),
            size,
            panels,
            footer: footer.to_string(),
        };
        figure.validate()?;
        Ok(figure)
    }
}

fn variant_series(
    axis: &CategoryAxis,
    table: &PerVariant<Vec<f64>>,
    label: fn(Variant) -> &'static str,
) -> Result<SeriesSet, ChartError> {
    let series = Variant::ALL
        .iter()
        .map(|&v| {
            let values = match v {
                Variant::TwoCopy => &table.two_copy,
                Variant::OneCopy => &table.one_copy,
                Variant::ZeroCopy => &table.zero_copy,
            };
            Series::new(v, label(v), values.clone())
        })
        .collect();

    SeriesSet::new(axis.clone(), series)
}

fn throughput_panel(data: &Measurements) -> Result<Panel, ChartError> {
    let axis = CategoryAxis::from_counts(&data.msg_sizes);
    Ok(Panel {
        title: "Throughput vs Message Size (Threads=4)".to_string(),
        x_label: MSG_SIZE_LABEL.to_string(),
        y_label: "Throughput (Gbps)".to_string(),
        x_scale: AxisScale::Log2,
        y_scale: AxisScale::Linear,
        legend: LegendPosition::UpperLeft,
        data: variant_series(&axis, &data.throughput, Variant::long_label)?,
    })
}

fn latency_panel(data: &Measurements) -> Result<Panel, ChartError> {
    let axis = CategoryAxis::from_counts(&data.thread_counts);
    Ok(Panel {
        title: "Latency vs Thread Count (Message Size=4096 B)".to_string(),
        x_label: "Thread Count".to_string(),
        y_label: "Average Latency (µs)".to_string(),
        x_scale: AxisScale::Linear,
        y_scale: AxisScale::Linear,
        legend: LegendPosition::UpperLeft,
        data: variant_series(&axis, &data.latency, Variant::long_label)?,
    })
}

fn cache_miss_panels(data: &Measurements) -> Result<Vec<Panel>, ChartError> {
    let axis = CategoryAxis::from_counts(&data.msg_sizes);
    let l1 = Panel {
        title: "L1 Cache Misses vs Message Size".to_string(),
        x_label: MSG_SIZE_LABEL.to_string(),
        y_label: "L1 Data Cache Misses".to_string(),
        x_scale: AxisScale::Log2,
        y_scale: AxisScale::Log10,
        legend: LegendPosition::UpperLeft,
        data: variant_series(&axis, &data.l1_misses, Variant::short_label)?,
    };
    let llc = Panel {
        title: "LLC Cache Misses vs Message Size".to_string(),
        x_label: MSG_SIZE_LABEL.to_string(),
        y_label: "LLC (Last Level Cache) Misses".to_string(),
        x_scale: AxisScale::Log2,
        y_scale: AxisScale::Log10,
        legend: LegendPosition::UpperLeft,
        data: variant_series(&axis, &data.llc_misses, Variant::short_label)?,
    };
    Ok(vec![l1, llc])
}

fn cycles_per_byte_panel(data: &Measurements) -> Result<Panel, ChartError> {
    let axis = CategoryAxis::from_counts(&data.msg_sizes);
    let ratios = PerVariant {
        two_copy: cycles_per_byte(&data.cycles.two_copy, &data.bytes.two_copy)?,
        one_copy: cycles_per_byte(&data.cycles.one_copy, &data.bytes.one_copy)?,
        zero_copy: cycles_per_byte(&data.cycles.zero_copy, &data.bytes.zero_copy)?,
    };

    Ok(Panel {
        title: "CPU Cycles per Byte Transferred (Threads=4)".to_string(),
        x_label: MSG_SIZE_LABEL.to_string(),
        y_label: "CPU Cycles per Byte".to_string(),
        x_scale: AxisScale::Log2,
        y_scale: AxisScale::Linear,
        legend: LegendPosition::UpperRight,
        data: variant_series(&axis, &ratios, Variant::long_label)?,
    })
}
