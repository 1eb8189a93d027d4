//! Radius neighbor search over the full point set.

use super::distance::haversine;
use super::point::CoordinatePoint;

/// A point found within the query radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Index of the neighbor in the point set
    pub index: usize,
    /// Angular distance to the query point, in radians
    pub distance: f64,
}

/// Finds all points within an angular radius of a query point.
///
/// Brute-force O(N) per query. Result order is part of the contract: both
/// strategies consume neighbors in this order and depend on it for
/// reproducible cluster numbering.
pub struct NeighborQuery<'a> {
    points: &'a [CoordinatePoint],
}

impl<'a> NeighborQuery<'a> {
    pub fn new(points: &'a [CoordinatePoint]) -> Self {
        NeighborQuery { points }
    }

    /// Returns every point within `radius` of point `i`, excluding `i`
    /// itself, ordered by ascending distance with ties broken by ascending
    /// index.
    pub fn neighbors(&self, i: usize, radius: f64) -> Vec<Neighbor> {
        let origin = &self.points[i];
        let mut found: Vec<Neighbor> = self
            .points
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .filter_map(|(j, p)| {
                let distance = haversine(origin, p);
                (distance <= radius).then_some(Neighbor { index: j, distance })
            })
            .collect();

        found.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.index.cmp(&b.index))
        });
        found
    }
}
