//! Interactive menu for the generate tool.
//!
//! Prompts for a seed, output format, and destination with `dialoguer`
//! instead of CLI flags.

use dialoguer::{Confirm, Input, Select};

use crate::export::{ExportFormat, export_to_path};
use crate::{generate_incidents, generate_seeded, output_dir};

/// Runs the interactive generation menu.
///
/// # Errors
///
/// Returns an error if user input fails or the dataset cannot be written.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let formats = &[ExportFormat::Json, ExportFormat::Geojsonseq];
    let labels = &["JSON array", "GeoJSONSeq (one feature per line)"];

    let selection = Select::new()
        .with_prompt("Output format")
        .items(labels)
        .default(0)
        .interact()?;
    let format = formats[selection];

    let seed_str: String = Input::new()
        .with_prompt("Seed (leave empty for random)")
        .allow_empty(true)
        .interact_text()?;

    let seed: Option<u64> = if seed_str.trim().is_empty() {
        None
    } else {
        Some(
            seed_str
                .trim()
                .parse()
                .map_err(|e| format!("Invalid seed '{seed_str}': {e}"))?,
        )
    };

    let path = output_dir().join(format.default_file_name());

    if path.exists()
        && !Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", path.display()))
            .default(true)
            .interact()?
    {
        println!("Cancelled.");
        return Ok(());
    }

    let incidents = seed.map_or_else(generate_incidents, generate_seeded);
    export_to_path(&incidents, format, &path)?;

    println!("Wrote {} incidents to {}", incidents.len(), path.display());
    Ok(())
}
