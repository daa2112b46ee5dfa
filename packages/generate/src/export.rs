//! Writes a generated dataset to disk.
//!
//! Two formats are supported: a single pretty-printed JSON array of
//! incidents, or newline-delimited `GeoJSON` point features
//! (`GeoJSONSeq`) that map tooling can load directly.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use safety_map_incident_models::Incident;

/// Errors that can occur while exporting a dataset.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// I/O error (file create/write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk dataset format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Pretty-printed JSON array of incidents.
    Json,
    /// One `GeoJSON` point feature per line.
    Geojsonseq,
}

impl ExportFormat {
    /// File name used when no explicit output path is given.
    #[must_use]
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Json => "incidents.json",
            Self::Geojsonseq => "incidents.geojsonseq",
        }
    }
}

/// Writes `incidents` to `path` in the given format, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns [`ExportError`] if the file cannot be created or written.
pub fn export_to_path(
    incidents: &[Incident],
    format: ExportFormat,
    path: &Path,
) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        ExportFormat::Json => write_json(&mut writer, incidents)?,
        ExportFormat::Geojsonseq => write_geojsonseq(&mut writer, incidents)?,
    }
    writer.flush()?;

    log::info!("Exported {} incidents to {}", incidents.len(), path.display());
    Ok(())
}

/// Writes `incidents` as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`ExportError`] if serialization or writing fails.
pub fn write_json<W: Write>(writer: &mut W, incidents: &[Incident]) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut *writer, incidents)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Writes one `GeoJSON` point feature per incident, newline-delimited.
///
/// Map coordinates become the point geometry; `id` and `hour` become
/// feature properties.
///
/// # Errors
///
/// Returns [`ExportError`] if serialization or writing fails.
pub fn write_geojsonseq<W: Write>(
    writer: &mut W,
    incidents: &[Incident],
) -> Result<(), ExportError> {
    for incident in incidents {
        let feature = serde_json::json!({
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": [incident.location.x, incident.location.y]
            },
            "properties": {
                "id": incident.id,
                "hour": incident.hour,
            }
        });

        serde_json::to_writer(&mut *writer, &feature)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
