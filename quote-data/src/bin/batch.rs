use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use quote_data::QuoteLoader;
use tracing_subscriber::EnvFilter;

/// Price a CSV file of quote requests.
///
/// The input file should have the following columns:
/// - size: System size in kW (6, 10, 15, 20, 25)
/// - panel_brand: canadian, longi, ja (or the full brand name)
/// - inverter_brand: huawei, growatt, solis (or the full brand name)
/// - inverter_capacity: Inverter size in kW (10, 15, 20, 25)
/// - installation_type: normal or elevated
/// - meter_type: single or three
/// - name, phone, city, address: Customer contact details
/// - email: Optional customer email
#[derive(Parser, Debug)]
#[command(name = "quote-batch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing quote requests
    #[arg(short, long)]
    file: PathBuf,

    /// Where to write the priced results (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    eprintln!("Loading quote requests from: {}", args.file.display());

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let records = QuoteLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    eprintln!("Parsed {} requests from CSV", records.len());

    let quotes = QuoteLoader::build(&records)
        .with_context(|| format!("Failed to price requests in: {}", args.file.display()))?;

    let written = match &args.output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("Failed to create: {}", path.display()))?;
            QuoteLoader::write_results(out, &quotes)
                .with_context(|| format!("Failed to write results: {}", path.display()))?
        }
        None => QuoteLoader::write_results(io::stdout().lock(), &quotes)
            .context("Failed to write results to stdout")?,
    };

    eprintln!("Successfully priced {} quote requests.", written);

    Ok(())
}
