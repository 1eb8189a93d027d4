//! Density-based spatial clustering of geographic points.
//!
//! A cluster is a maximal set of points mutually reachable through chains
//! of neighbors within a distance threshold, subject to a minimum-size
//! density requirement. Points that cannot satisfy the density condition
//! are noise and excluded from the result.

pub mod aggregate;
pub mod dbscan;
pub mod distance;
pub mod error;
pub mod neighbors;
pub mod optics;
pub mod point;


pub use aggregate::aggregate;
pub use error::ClusterError;
pub use point::{ClusterMap, CoordinatePoint, Label, Labeling};

/// Clustering strategy selector. Callers pick a variant by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Fixed-radius density clustering (DBSCAN)
    Dbscan,
    /// Ordered-reachability clustering (OPTICS); produces tighter clusters
    /// under the same radius bound but is slower
    Optics,
}

impl Algorithm {
    /// Runs the selected strategy over the point set.
    ///
    /// `radius` is an angular radius in radians: the fixed neighborhood
    /// radius for [`Algorithm::Dbscan`], the maximum radius for
    /// [`Algorithm::Optics`]. `min_size` counts the point itself.
    pub fn assign_labels(
        self,
        points: &[CoordinatePoint],
        radius: f64,
        min_size: usize,
    ) -> Result<Labeling, ClusterError> {
        match self {
            Algorithm::Dbscan => dbscan::fixed_radius(points, radius, min_size),
            Algorithm::Optics => optics::ordered_reachability(points, radius, min_size),
        }
    }
}

/// Clusters a point set, taking the distance threshold in kilometers.
///
/// This is the entry point for callers: it converts the threshold to an
/// angular radius, runs the selected strategy, and groups the result by
/// cluster id. An empty point sequence yields an empty map, not an error.
pub fn cluster_locations(
    points: Vec<CoordinatePoint>,
    algorithm: Algorithm,
    radius_km: f64,
    min_cluster_size: usize,
) -> Result<ClusterMap, ClusterError> {
    if radius_km < 0.0 || radius_km.is_nan() {
        return Err(ClusterError::invalid("distance", radius_km));
    }

    let radius = distance::km_to_radians(radius_km);
    let labeling = algorithm.assign_labels(&points, radius, min_cluster_size)?;
    Ok(aggregate(points, &labeling))
}
