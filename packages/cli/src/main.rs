#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the safety map.
//!
//! Generates a dataset and prints the risk zones for one hour, sweeps all
//! 24 hours the way the map's time slider does, or starts the API server.
//! Run without a subcommand for an interactive menu.

mod report;

use clap::{Args, Parser, Subcommand};
use dialoguer::{Input, Select};
use safety_map_cluster::{cluster_incidents, cluster_seeded};
use safety_map_generate::{generate_incidents, generate_seeded};
use safety_map_incident_models::{HOURS_PER_DAY, Incident, RiskZone, validate_hour};

use crate::report::{HourSummary, format_sweep, format_zones};

/// Default number of zones, matching the map view.
const DEFAULT_K: usize = 5;

#[derive(Parser)]
#[command(name = "safety_map_cli", about = "Explore hourly risk zones")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the risk zones for one hour
    Zones {
        /// Hour of day (0-23)
        #[arg(long, default_value_t = 18)]
        hour: u8,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        opts: ClusterOpts,
    },
    /// Summarize the risk zones for every hour of the day
    Sweep {
        #[command(flatten)]
        opts: ClusterOpts,
    },
    /// Start the API server (configured from the environment)
    Serve,
}

#[derive(Args, Clone, Copy)]
struct ClusterOpts {
    /// Number of zones to compute
    #[arg(long, short, default_value_t = DEFAULT_K)]
    k: usize,
    /// Seed for the generated dataset
    #[arg(long)]
    seed: Option<u64>,
    /// Seed for centroid initialization
    #[arg(long)]
    cluster_seed: Option<u64>,
}

impl ClusterOpts {
    fn dataset(self) -> Vec<Incident> {
        self.seed.map_or_else(generate_incidents, generate_seeded)
    }

    fn cluster(
        self,
        incidents: &[Incident],
        hour: u8,
    ) -> Result<Vec<RiskZone>, safety_map_cluster::ClusterError> {
        match self.cluster_seed {
            Some(seed) => cluster_seeded(seed, incidents, hour, self.k),
            None => cluster_incidents(incidents, hour, self.k),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Zones { hour, json, opts }) => show_zones(opts, hour, json)?,
        Some(Commands::Sweep { opts }) => sweep(opts)?,
        Some(Commands::Serve) => serve()?,
        None => interactive()?,
    }

    Ok(())
}

fn show_zones(opts: ClusterOpts, hour: u8, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let incidents = opts.dataset();
    let zones = opts.cluster(&incidents, hour)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&zones)?);
    } else {
        print!("{}", format_zones(hour, &zones));
    }
    Ok(())
}

fn sweep(opts: ClusterOpts) -> Result<(), Box<dyn std::error::Error>> {
    let incidents = opts.dataset();
    let summaries = (0..HOURS_PER_DAY)
        .map(|hour| Ok(HourSummary::new(hour, &opts.cluster(&incidents, hour)?)))
        .collect::<Result<Vec<_>, safety_map_cluster::ClusterError>>()?;

    print!("{}", format_sweep(&summaries));
    Ok(())
}

fn serve() -> Result<(), Box<dyn std::error::Error>> {
    actix_web::rt::System::new().block_on(safety_map_server::run_server())?;
    Ok(())
}

/// Top-level actions offered by the interactive menu.
enum Action {
    Zones,
    Sweep,
    Server,
}

impl Action {
    const ALL: &[Self] = &[Self::Zones, Self::Sweep, Self::Server];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Zones => "Show risk zones for an hour",
            Self::Sweep => "Sweep all hours",
            Self::Server => "Start server",
        }
    }
}

fn interactive() -> Result<(), Box<dyn std::error::Error>> {
    println!("Safety Map");
    println!();

    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();
    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match Action::ALL[idx] {
        Action::Zones => {
            let hour: u8 = Input::new()
                .with_prompt("Hour of day (0-23)")
                .default(18)
                .validate_with(|h: &u8| validate_hour(*h).map(|_| ()))
                .interact_text()?;
            let k = prompt_k()?;
            show_zones(
                ClusterOpts {
                    k,
                    seed: None,
                    cluster_seed: None,
                },
                hour,
                false,
            )?;
        }
        Action::Sweep => {
            let k = prompt_k()?;
            sweep(ClusterOpts {
                k,
                seed: None,
                cluster_seed: None,
            })?;
        }
        Action::Server => {
            actix_web::rt::System::new().block_on(safety_map_server::interactive::run())?;
        }
    }

    Ok(())
}

fn prompt_k() -> Result<usize, dialoguer::Error> {
    Input::new()
        .with_prompt("Number of zones")
        .default(DEFAULT_K)
        .validate_with(|k: &usize| if *k > 0 { Ok(()) } else { Err("must be at least 1") })
        .interact_text()
}
