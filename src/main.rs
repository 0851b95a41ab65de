use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use carbon_estimate::report::EstimationReport;
use carbon_estimate::telemetry::{init_tracing, LogFormat};
use carbon_estimate::{config, estimate_breakdown, EstimationConfig};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, error, info};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log line format (logs are written to stderr)
    #[arg(
        long,
        global = true,
        env = "CARBON_ESTIMATE_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Text
    )]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate CO2 emissions for an amount of CPU time
    Estimate(EstimateArgs),
    /// Print sample estimates for one hour of CPU time
    Demo,
    /// Show version information
    Version,
}

#[derive(Parser, Debug)]
struct EstimateArgs {
    /// CPU time in seconds
    #[arg(allow_negative_numbers = true)]
    cpu_seconds: f64,

    /// CPU power draw in kilowatts
    #[arg(long, env = "CARBON_ESTIMATE_CPU_POWER_KW", allow_negative_numbers = true)]
    cpu_power_kw: Option<f64>,

    /// Grid carbon intensity in gCO2/kWh
    #[arg(
        long,
        env = "CARBON_ESTIMATE_CARBON_INTENSITY",
        allow_negative_numbers = true
    )]
    carbon_intensity: Option<f64>,

    /// TOML file with cpuPowerKW / carbonIntensity overrides
    #[arg(long, env = "CARBON_ESTIMATE_CONFIG")]
    config: Option<PathBuf>,

    /// Result format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_format);

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Estimate(estimate_args) => run_estimate(estimate_args),
        Commands::Demo => run_demo(),
        Commands::Version => {
            println!("carbon-estimate v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn run_estimate(args: EstimateArgs) -> anyhow::Result<()> {
    let overrides = EstimationConfig {
        cpu_power_kw: args.cpu_power_kw,
        carbon_intensity: args.carbon_intensity,
    };

    let estimation_config = config::resolve(args.config.as_deref(), overrides)
        .with_context(|| match &args.config {
            Some(path) => format!("failed to load config {}", path.display()),
            None => "failed to resolve config".to_string(),
        })?;

    debug!(
        "Effective parameters: cpuPowerKW={}, carbonIntensity={}",
        estimation_config.effective_cpu_power_kw(),
        estimation_config.effective_carbon_intensity()
    );

    let breakdown = estimate_breakdown(args.cpu_seconds, Some(&estimation_config))?;
    info!(
        "Estimated {:.6} g CO2 for {} CPU seconds",
        breakdown.co2_grams, breakdown.cpu_seconds
    );

    let report = EstimationReport::from_breakdown(breakdown);
    match args.output {
        OutputFormat::Text => println!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}

fn run_demo() -> anyhow::Result<()> {
    let cpu_seconds = 3600.0;

    let default_report = EstimationReport::from_breakdown(estimate_breakdown(cpu_seconds, None)?);
    println!("{}", default_report.render_text());

    let custom = EstimationConfig::new()
        .with_cpu_power_kw(0.08)
        .with_carbon_intensity(300.0);
    let custom_report =
        EstimationReport::from_breakdown(estimate_breakdown(cpu_seconds, Some(&custom))?)
            .with_label("custom config");
    println!("{}", custom_report.render_text());

    Ok(())
}
