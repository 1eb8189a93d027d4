//! Command-line tool for clustering geolocations.
//!
//! Reads geographic points from a CSV file, groups them into spatial
//! clusters with DBSCAN or OPTICS under the haversine metric, and writes
//! the result as text, JSON, GeoJSON, CSV, and an HTML map.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cluster;
mod encoding;
mod io;

#[cfg(test)]
mod io_test;
#[cfg(test)]
mod main_test;

use cluster::{cluster_locations, Algorithm};

#[derive(Parser)]
#[command(name = "geocluster")]
#[command(
    about = "Tool to cluster geolocations",
    long_about = "Tool to cluster geolocations. A cluster is created when a certain number of \
                  points (defined with --size) each are within a given distance (defined with \
                  --distance) of at least one other point in the cluster. Input is supplied as \
                  a csv file. At a minimum, each row needs to have a 'lat' and a 'lon' column. \
                  Other columns are reflected to the output."
)]
struct Args {
    /// Max. distance between two points in a cluster, in km
    #[arg(short, long)]
    distance: f64,

    /// Min. number of points in a cluster
    #[arg(short, long)]
    size: usize,

    /// Output directory for results
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Clustering algorithm. `optics` produces tighter clusters but is slower
    #[arg(short, long, value_enum, default_value = "dbscan")]
    algorithm: AlgorithmArg,

    /// Print debug output
    #[arg(long)]
    debug: bool,

    /// Input CSV file with at least 'lat' and 'lon' columns
    filename: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Dbscan,
    Optics,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Dbscan => Algorithm::Dbscan,
            AlgorithmArg::Optics => Algorithm::Optics,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let points = io::read_csv_file(&args.filename)?;
    debug!(
        count = points.len(),
        file = %args.filename.display(),
        "read valid coordinates"
    );

    let clusters = cluster_locations(points, args.algorithm.into(), args.distance, args.size)?;
    if clusters.is_empty() {
        println!("Did not find clusters matching input parameters.");
        return Ok(());
    }
    debug!(clusters = clusters.len(), "clustering finished");

    let encoded = encoding::encode_clusters(&clusters)?;
    io::write_output_file(&args.output, "result.txt", &encoded.text)?;
    io::write_output_file(&args.output, "result.json", &encoded.json)?;
    io::write_output_file(&args.output, "result.geojson", &encoded.geojson)?;
    io::write_output_file(&args.output, "result.csv", &encoded.csv)?;
    io::write_output_file(
        &args.output,
        "result.html",
        &encoding::render_map(&encoded.geojson),
    )?;

    let shown = args
        .output
        .canonicalize()
        .unwrap_or_else(|_| args.output.clone());
    println!("Output files saved to {}", shown.display());

    Ok(())
}
