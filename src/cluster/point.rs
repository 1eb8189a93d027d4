//! Core data model for clustering: points, labels, and the clustered result.

use std::collections::BTreeMap;

/// One valid input row: a geographic coordinate plus the passthrough
/// columns of the original record.
///
/// Constructed once per valid row when the input is loaded and read-only
/// afterwards. `index` is the position among valid rows and is the point's
/// stable identity for the duration of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinatePoint {
    /// Position in the original (filtered) input sequence
    pub index: usize,
    /// Latitude in degrees, -90..90
    pub latitude: f64,
    /// Longitude in degrees, -180..180
    pub longitude: f64,
    /// Remaining columns of the input row, in column order,
    /// excluding the latitude/longitude columns
    pub attributes: Vec<(String, String)>,
}

/// Cluster assignment of a single point.
///
/// Cluster ids are assigned in the order clusters are opened within one run
/// (0, 1, 2, ...). They carry no meaning across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// The point belongs to no cluster
    Noise,
    /// The point belongs to the cluster with this id
    Cluster(usize),
}

/// Full label assignment produced by a clustering strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct Labeling {
    /// One label per point, indexed by the point's `index`
    pub labels: Vec<Label>,
    /// Member indices per cluster id, in discovery order.
    /// `clusters[c]` holds the members of `Label::Cluster(c)`.
    pub clusters: Vec<Vec<usize>>,
}

/// Cluster id mapped to its member points in discovery order.
///
/// Noise points never appear. Iteration yields clusters in id order, which
/// is the order they were opened.
pub type ClusterMap = BTreeMap<usize, Vec<CoordinatePoint>>;
