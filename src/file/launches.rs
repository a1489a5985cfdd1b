// src/file/launches.rs
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::info;

use super::LoadError;
use crate::analysis::Dataset;
use crate::config::{LaunchRecord, Outcome};

pub const LAUNCH_SITE: &str = "Launch Site";
pub const PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const CLASS: &str = "class";
pub const BOOSTER_VERSION_CATEGORY: &str = "Booster Version Category";

const REQUIRED_COLUMNS: [&str; 4] = [LAUNCH_SITE, PAYLOAD_MASS, CLASS, BOOSTER_VERSION_CATEGORY];

#[derive(Debug, Deserialize)]
struct LaunchRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
    #[serde(rename = "Booster Version", default)]
    booster_version: Option<String>,
    #[serde(rename = "Flight Number", default)]
    flight_number: Option<u32>,
}

/// Reads the launch table CSV into a [`Dataset`].
#[derive(Debug)]
pub struct LaunchFileHandler;

impl LaunchFileHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: &Path) -> Result<Dataset, LoadError> {
        let file = fs::File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = self.load_from_reader(file, path)?;
        info!(
            path = %path.display(),
            records = dataset.len(),
            min_payload = dataset.min_payload(),
            max_payload = dataset.max_payload(),
            "loaded launch records"
        );
        Ok(dataset)
    }

    /// `source` is only used to label errors.
    pub fn load_from_reader<R: Read>(&self, reader: R, source: &Path) -> Result<Dataset, LoadError> {
        let csv_error = |e: csv::Error| LoadError::Csv {
            path: source.to_path_buf(),
            source: e,
        };

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers().map_err(csv_error)?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(LoadError::MissingColumn {
                    path: source.to_path_buf(),
                    column: column.to_string(),
                });
            }
        }

        let mut records = Vec::new();
        for (index, row) in reader.deserialize::<LaunchRow>().enumerate() {
            let row = row.map_err(csv_error)?;
            records.push(Self::to_record(row, index + 1, source)?);
        }

        Dataset::new(records).ok_or_else(|| LoadError::Empty {
            path: source.to_path_buf(),
        })
    }

    fn to_record(row: LaunchRow, row_number: usize, source: &Path) -> Result<LaunchRecord, LoadError> {
        let outcome = Outcome::from_class(row.class).ok_or_else(|| LoadError::InvalidClass {
            path: source.to_path_buf(),
            row: row_number,
            value: row.class,
        })?;

        if !row.payload_mass_kg.is_finite() || row.payload_mass_kg < 0.0 {
            return Err(LoadError::InvalidPayload {
                path: source.to_path_buf(),
                row: row_number,
                value: row.payload_mass_kg,
            });
        }

        Ok(LaunchRecord {
            launch_site: row.launch_site,
            payload_mass_kg: row.payload_mass_kg,
            outcome,
            booster_version_category: row.booster_version_category,
            booster_version: row.booster_version.filter(|v| !v.is_empty()),
            flight_number: row.flight_number,
        })
    }
}
