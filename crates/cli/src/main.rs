//! `fvflux`: evaluates inviscid face fluxes for the faces listed in a case file.

mod case;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use fvflux_riemann::{FaceFlux, RusanovSolver, evaluate_faces, max_wave_speed};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use crate::case::Case;

#[derive(Parser)]
#[command(name = "fvflux")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Evaluate inviscid face fluxes with Roe, AUSMPW+, or Rusanov", long_about = None)]
struct Cli {
    /// Case file with `[gas]`, `[flux]`, and `[[faces]]` tables
    #[arg(short, long)]
    case: PathBuf,

    /// Overrides the scheme named in the case file
    #[arg(short, long)]
    scheme: Option<String>,

    /// Log level
    #[arg(short, long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    run(cli)
}

/// Loads the case, evaluates every face, and prints the fluxes.
fn run(cli: Cli) -> Result<()> {
    let mut case = Case::load(&cli.case)?;
    if let Some(scheme) = cli.scheme {
        case.flux.scheme = scheme;
    }

    let gas = case.gas.build().context("invalid gas model")?;
    let solver = case.flux.solver()?;
    let faces = case.faces()?;
    info!(faces = faces.len(), scheme = %case.flux.scheme, "loaded case");

    let model = gas.model();
    let fluxes = evaluate_faces(&solver, model, &faces);
    print_fluxes(&case.flux.scheme, &fluxes);

    if case.rusanov {
        let fluxes = evaluate_faces(&RusanovSolver::default(), model, &faces);
        print_fluxes("rusanov", &fluxes);
    }

    Ok(())
}

fn print_fluxes(label: &str, fluxes: &[FaceFlux]) {
    println!("# {label}");
    for (i, face) in fluxes.iter().enumerate() {
        let values: Vec<String> = face
            .flux
            .as_slice()
            .iter()
            .map(|f| format!("{f:.10e}"))
            .collect();
        println!("{i:>6} {}", values.join(" "));
    }
    if let Some(speed) = max_wave_speed(fluxes) {
        println!("# max wave speed {speed:.10e}");
    }
}
