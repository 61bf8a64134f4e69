use anyhow::{Context, Result};
use clap::Parser;
use std::{fs, path::PathBuf};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod config;
mod plotting;
mod workflow;

/// Shrimp farm calculators: growth, feed, aeration, water quality and
/// production cost, driven from a farm scenario file.
#[derive(Parser, Debug)]
#[command(name = "pondforge")]
#[command(about = "Run the pond management calculators over a farm scenario")]
struct Args {
    /// Farm scenario YAML file.
    #[arg(long, default_value = "pondforge-app/scenario.yaml")]
    scenario: PathBuf,

    /// Directory under which a timestamped run folder is created.
    #[arg(long, default_value = "./data/runs")]
    output_dir: PathBuf,

    /// Skip PNG chart generation.
    #[arg(long)]
    no_charts: bool,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install log subscriber")?;

    println!("--- Pondforge ---");

    let scenario = config::load_scenario(&args.scenario)?;

    let output_dir = args.output_dir.join(format!(
        "Pondforge_{}",
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    ));
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    // Copy the scenario next to its results for traceability
    fs::copy(&args.scenario, output_dir.join("scenario.yaml"))
        .with_context(|| format!("Failed to copy {}", args.scenario.display()))?;

    let report = workflow::run_wizard(scenario, &output_dir)?;
    workflow::export_json(&report, &output_dir)?;

    if !args.no_charts {
        plotting::generate_all_plots(&output_dir, &report)?;
    }

    workflow::print_summary_report(&report);

    println!("\nResults are in '{}'", output_dir.display());
    Ok(())
}
