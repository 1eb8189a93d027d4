//! Groups labeled points into the final per-cluster result.

use super::point::{ClusterMap, CoordinatePoint, Labeling};

/// Builds the cluster id to members mapping from a label assignment.
///
/// Consumes the point set. Members are appended in discovery order and
/// noise points are dropped; a map key exists only for clusters with at
/// least one member.
pub fn aggregate(points: Vec<CoordinatePoint>, labeling: &Labeling) -> ClusterMap {
    debug_assert_eq!(points.len(), labeling.labels.len());

    let mut slots: Vec<Option<CoordinatePoint>> = points.into_iter().map(Some).collect();
    let mut map = ClusterMap::new();

    for (id, members) in labeling.clusters.iter().enumerate() {
        for &i in members {
            if let Some(point) = slots[i].take() {
                map.entry(id).or_insert_with(Vec::new).push(point);
            }
        }
    }

    map
}
