//! Read an exported track CSV back into a [`SimulationResult`].

use std::path::Path;

use apw_drift::SimulationResult;
use apw_sphere::GeoPoint;
use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;

/// Errors surfaced while reading a track CSV.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),
    #[error("invalid value in column '{column}' on row {row}")]
    InvalidValue { column: &'static str, row: usize },
    #[error("CSV contains no samples")]
    Empty,
}

const COLUMNS: [&str; 5] = [
    "time_myr",
    "continent_lat_deg",
    "continent_lon_deg",
    "apparent_pole_lat_deg",
    "apparent_pole_lon_deg",
];

/// Parse a CSV written by `apw_export::track` (column order may vary).
pub fn read_track<P: AsRef<Path>>(path: P) -> Result<SimulationResult, TrackError> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let mut indices = [0usize; 5];
    for (slot, name) in indices.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or(TrackError::MissingColumn(name))?;
    }

    let mut result = SimulationResult {
        time_myr: Vec::new(),
        continent: Vec::new(),
        apparent_pole: Vec::new(),
    };
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let value = |i: usize| parse_field(&rec, indices[i], COLUMNS[i], row + 1);
        result.time_myr.push(value(0)?);
        result.continent.push(GeoPoint::new(value(1)?, value(2)?));
        result.apparent_pole.push(GeoPoint::new(value(3)?, value(4)?));
    }

    if result.is_empty() {
        return Err(TrackError::Empty);
    }
    Ok(result)
}

fn parse_field(
    rec: &StringRecord,
    idx: usize,
    column: &'static str,
    row: usize,
) -> Result<f64, TrackError> {
    rec.get(idx)
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or(TrackError::InvalidValue { column, row })
}
