use netio_charts::charts::{ChartKind, StaticChartRenderer, StyleTable, Theme};
use netio_charts::data::Measurements;
use netio_charts::report::MANIFEST_FILE;
use netio_charts::{RenderConfig, ReportGenerator};
use std::fs;
use tempfile::TempDir;

fn run_into(dir: &TempDir, manifest: bool) -> netio_charts::RunSummary {
    let config = RenderConfig::default()
        .with_output_dir(dir.path())
        .with_manifest(manifest);
    let data = Measurements::sample();
    ReportGenerator::new(&config, &data).run(|_| {})
}

#[test]
fn full_run_writes_the_four_named_images() {
    let dir = TempDir::new().unwrap();
    let mut seen = Vec::new();

    let config = RenderConfig::default().with_output_dir(dir.path());
    let data = Measurements::sample();
    let summary = ReportGenerator::new(&config, &data).run(|o| seen.push(o.kind));

    assert!(summary.all_succeeded(), "{:?}", summary.outcomes);
    assert_eq!(seen, ChartKind::ALL.to_vec());
    assert!(summary.manifest.is_none());
    assert!(summary.manifest_path().is_none());

    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "plot_cache_misses_vs_msgsize.png",
            "plot_cycles_per_byte.png",
            "plot_latency_vs_threads.png",
            "plot_throughput_vs_msgsize.png",
        ]
    );
}

#[test]
fn saved_images_have_figure_dimensions() {
    let dir = TempDir::new().unwrap();
    let summary = run_into(&dir, false);
    assert!(summary.all_succeeded(), "{:?}", summary.outcomes);

    let theme = Theme::default();
    let single = image::open(dir.path().join(ChartKind::Throughput.file_name())).unwrap();
    assert_eq!((single.width(), single.height()), theme.figure_size);

    let wide = image::open(dir.path().join(ChartKind::CacheMisses.file_name())).unwrap();
    assert_eq!((wide.width(), wide.height()), theme.wide_figure_size);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    assert!(run_into(&first, true).all_succeeded());
    assert!(run_into(&second, true).all_succeeded());

    for kind in ChartKind::ALL {
        let a = fs::read(first.path().join(kind.file_name())).unwrap();
        let b = fs::read(second.path().join(kind.file_name())).unwrap();
        assert!(a == b, "{} differs between runs", kind.file_name());
    }

    let a = fs::read_to_string(first.path().join(MANIFEST_FILE)).unwrap();
    let b = fs::read_to_string(second.path().join(MANIFEST_FILE)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn manifest_records_plotted_values() {
    let dir = TempDir::new().unwrap();
    let summary = run_into(&dir, true);
    assert_eq!(
        summary.manifest_path(),
        Some(dir.path().join(MANIFEST_FILE).as_path())
    );

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap())
            .unwrap();
    let figures = json.as_array().unwrap();
    assert_eq!(figures.len(), 4);

    let throughput = &figures[0];
    assert_eq!(throughput["file_name"], "plot_throughput_vs_msgsize.png");
    let panel = &throughput["panels"][0];
    assert_eq!(panel["x_scale"], "log2");
    assert_eq!(panel["data"]["series"][2]["variant"], "zero_copy");
    assert_eq!(panel["data"]["series"][2]["values"][4], 9.2);

    assert_eq!(figures[2]["panels"].as_array().unwrap().len(), 2);
}

#[test]
fn manifest_write_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    // A directory squatting on the manifest name makes the write fail
    fs::create_dir(dir.path().join(MANIFEST_FILE)).unwrap();

    let summary = run_into(&dir, true);

    assert_eq!(summary.succeeded().count(), 4);
    assert!(summary.manifest_path().is_none());
    let err = summary.manifest_error().expect("manifest failure recorded");
    assert!(!err.is_invalid_input());
    assert!(!summary.all_succeeded());
}

#[test]
fn unwritable_output_dir_fails_every_chart_without_aborting() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, b"file").unwrap();

    let config = RenderConfig::default().with_output_dir(blocker.join("plots"));
    let data = Measurements::sample();
    let mut reported = 0;
    let summary = ReportGenerator::new(&config, &data).run(|_| reported += 1);

    assert_eq!(reported, 4);
    assert_eq!(summary.failed().count(), 4);
    assert!(summary.written_files().is_empty());
    for outcome in summary.failed() {
        let err = outcome.result.as_ref().unwrap_err();
        assert!(!err.is_invalid_input());
    }
}

#[test]
fn renderer_produces_image_in_memory() {
    let theme = Theme::default();
    let styles = StyleTable::default();
    let figure = ChartKind::CyclesPerByte
        .build(&Measurements::sample(), &theme, "System: test")
        .unwrap();

    let image = StaticChartRenderer::new(&styles, &theme)
        .render(&figure)
        .unwrap();
    assert_eq!(image.dimensions(), theme.figure_size);
    // Corner stays background white
    assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255]);
}
