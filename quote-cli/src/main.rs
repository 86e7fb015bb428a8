use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use quote_cli::{app, config::AppConfig, logging, wizard::Wizard};
use quote_core::output::{LoggingSubmissionHook, SinkConfig};
use quote_core::{
    ContactInfo, InstallationType, InverterBrand, InverterCapacity, InverterSelection, MeterType,
    PanelBrand, QuoteSelection, SystemSize,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Solar installation quote generator.
///
/// Walks through system size, panels, inverter, installation and meter
/// choices, prices the system and prints a dated quote.
#[derive(Debug, Parser)]
#[command(name = "solar-quote", version)]
struct Cli {
    /// TOML configuration file (defaults to `solar-quote.toml` if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `quote_core=trace`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive step-by-step quote (default).
    Wizard(OutputArgs),

    /// Price a quote in one go from command-line choices.
    Quote(QuoteArgs),
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// Where printed quotes go.
    #[arg(long, default_value = "stdout")]
    output: String,

    /// Destination path for the `file` output.
    #[arg(long)]
    output_path: Option<PathBuf>,

    /// Itemize the cost breakdown in the summary.
    #[arg(long)]
    breakdown: bool,
}

impl Default for OutputArgs {
    fn default() -> Self {
        Self {
            output: "stdout".to_string(),
            output_path: None,
            breakdown: false,
        }
    }
}

impl OutputArgs {
    fn sink_config(&self) -> SinkConfig {
        SinkConfig {
            backend: self.output.to_lowercase(),
            target: self.output_path.clone(),
        }
    }
}

#[derive(Debug, Args)]
struct QuoteArgs {
    /// System size in kW: 6, 10, 15, 20 or 25.
    #[arg(long)]
    size: SystemSize,

    /// Panel brand: canadian, longi or ja.
    #[arg(long)]
    panel: PanelBrand,

    /// Inverter brand: huawei, growatt or solis.
    #[arg(long)]
    inverter: InverterBrand,

    /// Inverter capacity in kW: 10, 15, 20 or 25.
    #[arg(long)]
    capacity: InverterCapacity,

    /// Installation type: normal or elevated.
    #[arg(long, default_value = "normal")]
    installation: InstallationType,

    /// Meter type: single or three.
    #[arg(long)]
    meter: MeterType,

    #[arg(long)]
    name: String,

    #[arg(long)]
    phone: String,

    #[arg(long)]
    city: String,

    #[arg(long)]
    address: String,

    #[arg(long)]
    email: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

impl QuoteArgs {
    fn selection(&self) -> QuoteSelection {
        QuoteSelection {
            size: self.size,
            panel_brand: self.panel,
            inverter: InverterSelection::new(self.inverter, self.capacity),
            installation: self.installation,
            meter: self.meter,
        }
    }

    fn contact(&self) -> ContactInfo {
        ContactInfo {
            name: self.name.clone(),
            phone: self.phone.clone(),
            city: self.city.clone(),
            address: self.address.clone(),
            email: self.email.clone().filter(|email| !email.trim().is_empty()),
        }
    }
}

// ─── commands ────────────────────────────────────────────────────────────────

fn run_wizard(
    config: &AppConfig,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let registry = app::build_registry();
    let hook = LoggingSubmissionHook;
    let stdin = io::stdin();

    let (session, exit) = Wizard::new(
        stdin.lock(),
        io::stdout(),
        &registry,
        output.sink_config(),
        config.summary_template(output.breakdown),
        &hook,
        app::today(),
    )
    .run()?;

    debug!(?exit, step = %session.step(), "wizard closed");
    Ok(())
}

fn run_quote(
    config: &AppConfig,
    args: &QuoteArgs,
) -> anyhow::Result<()> {
    let quote = app::build_quote(&args.selection(), args.contact())?;
    info!(name = %quote.contact().name, total = %quote.total(), "quote priced");

    let target = app::deliver_quote(
        &app::build_registry(),
        &args.output.sink_config(),
        &quote,
        &config.summary_template(args.output.breakdown),
        app::today(),
    )?;
    debug!(%target, "quote delivered");
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_logging("info");

    let cli = Cli::parse();

    let config = AppConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.log_level, cli.log_file);

    logging::set_log_level(&config.log_level)?;
    if let Some(path) = &config.log_file {
        logging::enable_file_logging(path)?;
    }

    match cli.command {
        Some(Command::Quote(args)) => run_quote(&config, &args),
        Some(Command::Wizard(output)) => run_wizard(&config, &output),
        None => run_wizard(&config, &OutputArgs::default()),
    }
}
