//! Input loading and output-file writing.
//!
//! Reading drops rows without a valid coordinate pair before they reach the
//! clustering core; the core only ever sees points with in-range numeric
//! latitude and longitude.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use tracing::warn;

use crate::cluster::CoordinatePoint;

/// Checks that a string is a valid decimal latitude.
fn parse_lat(val: &str) -> Option<f64> {
    let v: f64 = val.trim().parse().ok()?;
    (-90.0..=90.0).contains(&v).then_some(v)
}

/// Checks that a string is a valid decimal longitude.
fn parse_lon(val: &str) -> Option<f64> {
    let v: f64 = val.trim().parse().ok()?;
    (-180.0..=180.0).contains(&v).then_some(v)
}

/// Reads an input CSV file, dropping rows without valid location data.
///
/// The file must have a header row with `lat` and `lon` columns. All other
/// columns are carried through as point attributes in column order. Each
/// returned point's `index` is its position among the valid rows.
pub fn read_csv_file(path: &Path) -> Result<Vec<CoordinatePoint>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .with_context(|| format!("reading header row of {}", path.display()))?
        .clone();
    let lat_col = headers.iter().position(|h| h == "lat");
    let lon_col = headers.iter().position(|h| h == "lon");
    let (Some(lat_col), Some(lon_col)) = (lat_col, lon_col) else {
        bail!("input file must have 'lat' and 'lon' columns");
    };

    let mut points = Vec::new();
    let mut dropped = 0usize;

    for (row, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("reading {}", path.display()))?;

        let lat = record.get(lat_col).and_then(parse_lat);
        let lon = record.get(lon_col).and_then(parse_lon);
        let (Some(lat), Some(lon)) = (lat, lon) else {
            // Header is row 1, first record is row 2.
            warn!(row = row + 2, "ignoring row with invalid coordinate pair");
            dropped += 1;
            continue;
        };

        // Pad short rows to the full header width so every point carries
        // the same attribute columns; downstream encoders rely on that.
        let attributes = headers
            .iter()
            .enumerate()
            .filter(|(col, _)| *col != lat_col && *col != lon_col)
            .map(|(col, name)| (name.to_string(), record.get(col).unwrap_or("").to_string()))
            .collect();

        points.push(CoordinatePoint {
            index: points.len(),
            latitude: lat,
            longitude: lon,
            attributes,
        });
    }

    if dropped > 0 {
        warn!(dropped, "ignored rows without valid coordinates");
    }

    Ok(points)
}

/// Writes a file under `dir`, creating parent directories as needed.
pub fn write_output_file(dir: &Path, name: &str, data: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(name);
    fs::write(&path, data).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
