use anyhow::{Context, Result};
use clap::Parser;
use data_inventory::{models::ScanStats, report::Reporter, scanner, utils};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "data-inventory")]
#[command(author, version, about = "Inventory of tabular data files in a folder", long_about = None)]
struct Cli {
    /// Folder to inventory
    #[arg(default_value = "data")]
    folder: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose)?;

    run_scan(cli.folder)
}

fn setup_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn run_scan(folder: PathBuf) -> Result<()> {
    info!("Data Inventory v{}", env!("CARGO_PKG_VERSION"));

    let start = Instant::now();
    let mut stats = ScanStats::default();

    let reports = scanner::scan_folder(&folder).context("Cannot scan folder")?;

    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock());
    reporter.scan_header(&folder)?;

    for report in reports {
        stats.record(&report);
        reporter.report(&report)?;
    }

    reporter.completion()?;

    stats.duration_secs = start.elapsed().as_secs_f64();

    info!(
        "Scan completed: {} file(s), {} sheet(s), {} unsupported",
        utils::format_number(stats.files_reported),
        utils::format_number(stats.sheets_parsed),
        utils::format_number(stats.unsupported_files)
    );
    info!("Duration: {:.2}s", stats.duration_secs);

    if stats.errors_encountered > 0 {
        warn!(
            "Encountered {} file(s) that could not be parsed",
            stats.errors_encountered
        );
    }

    Ok(())
}
