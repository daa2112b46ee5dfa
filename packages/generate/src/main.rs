#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! CLI tool for generating the synthetic incident dataset.
//!
//! Samples incidents from the built-in patterns and writes them to
//! `data/generated/` as JSON or `GeoJSONSeq`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use safety_map_generate::export::{ExportFormat, export_to_path};
use safety_map_generate::patterns::all_patterns;
use safety_map_generate::{generate_incidents, generate_seeded, interactive, output_dir};
use safety_map_incident_models::{HOURS_PER_DAY, format_hour};

#[derive(Parser)]
#[command(name = "safety_map_generate", about = "Synthetic incident generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a dataset and write it to disk
    Export(ExportArgs),
    /// List the built-in incident patterns
    Patterns,
    /// Choose options interactively
    Interactive,
}

#[derive(Args)]
struct ExportArgs {
    /// Seed for a reproducible dataset (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    format: ExportFormat,

    /// Output file (defaults to `data/generated/incidents.<ext>`)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Export(args) => {
            let incidents = args
                .seed
                .map_or_else(generate_incidents, generate_seeded);
            let path = args
                .output
                .unwrap_or_else(|| output_dir().join(args.format.default_file_name()));
            export_to_path(&incidents, args.format, &path)?;
        }
        Commands::Patterns => {
            for pattern in all_patterns() {
                let last_hour = (pattern.hours.start + pattern.hours.span - 1) % HOURS_PER_DAY;
                println!(
                    "{:<18} {:>4} incidents  x {:>5.1}-{:<5.1} y {:>5.1}-{:<5.1} {} - {}",
                    pattern.id,
                    pattern.count,
                    pattern.x.min,
                    pattern.x.max,
                    pattern.y.min,
                    pattern.y.max,
                    format_hour(pattern.hours.start),
                    format_hour(last_hour),
                );
            }
        }
        Commands::Interactive => interactive::run()?,
    }

    Ok(())
}
