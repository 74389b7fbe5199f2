//! # Chain Guide CLI
//!
//! Terminal front end for the chain guide dimension engine.
//!
//! ```text
//! chain-guide calc --model 200 --shelves 16 --inch 12 --height 2500
//! chain-guide calc --model 351 --shelves 20 --inch 10 --height 3250 --json
//! chain-guide models
//! chain-guide catalog > machines.toml
//! chain-guide --catalog machines.toml session
//! ```
//!
//! Exit codes: 0 on success, 1 when the engine rejects the request, 2 on
//! usage or I/O errors.

mod session;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

use guide_core::calculations::{DimensionCalculator, GuideInput};
use guide_core::{report, CalcError, MachineCatalog};

/// Chain guide inspection-sheet calculator
#[derive(Parser, Debug)]
#[command(name = "chain-guide")]
#[command(version)]
#[command(about = "Computes chain guide A/B/C/D/H/ST dimensions")]
struct Args {
    /// Machine catalog TOML file (defaults to the built-in catalog)
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Enable verbose logging (DEBUG level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate one chain guide
    Calc {
        /// Model code (200, 201, 350, 351)
        #[arg(short, long)]
        model: String,

        /// Shelf count
        #[arg(short, long)]
        shelves: String,

        /// Diameter class ("inch" size)
        #[arg(short, long)]
        inch: String,

        /// Assembly height in mm (2500 and up, 250 mm steps)
        #[arg(long)]
        height: String,

        /// Print the result as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
    /// List catalog models and their diameter classes
    Models,
    /// Print the active catalog as TOML
    Catalog,
    /// Read requests line by line from stdin, keeping a history
    Session,
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_tracing(&args);

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let loaded;
    let catalog = match &args.catalog {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            loaded = MachineCatalog::from_path(path)
                .with_context(|| format!("loading catalog {}", path.display()))?;
            &loaded
        }
        None => MachineCatalog::standard(),
    };
    let calculator = DimensionCalculator::new(catalog);

    match &args.command {
        Command::Calc {
            model,
            shelves,
            inch,
            height,
            json,
        } => {
            let outcome = GuideInput::from_fields(model, shelves, inch, height)
                .and_then(|input| calculator.compute(&input));
            match outcome {
                Ok(result) => {
                    if *json {
                        println!("{}", serde_json::to_string_pretty(&result)?);
                    } else {
                        print!("{}", report::render(&result));
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    report_calc_error(&e);
                    Ok(ExitCode::from(1))
                }
            }
        }
        Command::Models => {
            for profile in catalog.profiles() {
                let diameters: Vec<String> =
                    profile.valid_diameters.iter().map(|d| d.to_string()).collect();
                println!(
                    "{}  {:<5}  pitch {:>5} mm  diameters {}",
                    profile.model,
                    profile.family().to_string(),
                    profile.chain_pitch_mm,
                    diameters.join(", ")
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Catalog => {
            print!("{}", catalog.to_toml_string()?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Session => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let summary = session::run(&calculator, stdin.lock(), &mut stdout)?;
            stdout.flush()?;
            debug!(recorded = summary.recorded, rejected = summary.rejected, "session ended");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn report_calc_error(e: &CalcError) {
    eprintln!("Error [{}]: {}", e.error_code(), e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

/// Setup tracing subscriber based on CLI arguments.
fn setup_tracing(args: &Args) {
    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .compact()
            .init();
    }
}
