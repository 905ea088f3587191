//! Netio Charts - Plot generation for network I/O primitives analysis
//!
//! Renders the four report charts from the compiled-in measurements.

use anyhow::bail;
use netio_charts::data::Measurements;
use netio_charts::logging::init_tracing;
use netio_charts::report::MANIFEST_FILE;
use netio_charts::{RenderConfig, ReportGenerator};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = RenderConfig::from_env();
    let data = Measurements::sample();

    let rule = "=".repeat(60);
    println!("{}", rule);
    println!("Network I/O Primitives - Plot Generation");
    println!("Output directory: {}", config.output_dir.display());
    println!("{}", rule);
    println!();
    println!("NOTE: Replace placeholder values with your actual");
    println!("      experimental results before generating final plots!");
    println!();

    let summary = ReportGenerator::new(&config, &data).run(|outcome| match &outcome.result {
        Ok(_) => println!(
            "[Plot {}] {} saved.",
            outcome.kind.number(),
            outcome.kind.display_name()
        ),
        Err(e) => println!(
            "[Plot {}] {} FAILED: {}",
            outcome.kind.number(),
            outcome.kind.display_name(),
            e
        ),
    });

    if let Some(path) = summary.manifest_path() {
        println!("Manifest written to {}", path.display());
    }
    println!();

    let failed: Vec<&str> = summary.failed().map(|o| o.kind.display_name()).collect();
    if !failed.is_empty() {
        bail!(
            "{} of {} plots failed: {}",
            failed.len(),
            summary.outcomes.len(),
            failed.join(", ")
        );
    }
    if let Some(e) = summary.manifest_error() {
        bail!("failed to write {}: {}", MANIFEST_FILE, e);
    }

    println!("All plots generated successfully.");
    println!("Include these plots in your report (not as separate files).");
    Ok(())
}
