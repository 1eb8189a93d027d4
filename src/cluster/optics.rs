//! Ordered-reachability density clustering (OPTICS).
//!
//! Builds a reachability ordering of the point set, then extracts flat
//! clusters from it. Compared to the fixed-radius strategy the same run can
//! resolve clusters of different densities, bounded by `max_eps`.

use bitvec::prelude::*;

use super::dbscan::validate;
use super::error::ClusterError;
use super::neighbors::{Neighbor, NeighborQuery};
use super::point::{CoordinatePoint, Label, Labeling};

/// An undefined core- or reachability-distance. Infinity compares greater
/// than any radius, which is exactly the behavior the extraction needs.
const UNDEFINED: f64 = f64::INFINITY;

/// Clusters points via a reachability ordering bounded by `max_eps`.
///
/// # Arguments
///
/// * `points` - the full point set
/// * `max_eps` - maximum neighborhood radius in radians; also the bound
///   used when extracting flat clusters from the ordering
/// * `min_pts` - minimum neighborhood size for a core point, counting the
///   point itself
pub fn ordered_reachability(
    points: &[CoordinatePoint],
    max_eps: f64,
    min_pts: usize,
) -> Result<Labeling, ClusterError> {
    validate(max_eps, "max_eps", min_pts)?;

    let n = points.len();
    let query = NeighborQuery::new(points);

    // Neighborhoods and core-distances, both bounded by max_eps.
    let mut hoods: Vec<Vec<Neighbor>> = Vec::with_capacity(n);
    let mut core_dist = vec![UNDEFINED; n];
    for i in 0..n {
        let hood = query.neighbors(i, max_eps);
        core_dist[i] = if min_pts <= 1 {
            0.0
        } else if hood.len() + 1 >= min_pts {
            // Smallest radius holding min_pts points, the point itself
            // counted: the distance to the (min_pts - 1)-th neighbor.
            hood[min_pts - 2].distance
        } else {
            UNDEFINED
        };
        hoods.push(hood);
    }

    let ordering = reachability_ordering(n, &hoods, &core_dist);
    Ok(extract_clusters(&ordering, max_eps, &core_dist))
}

/// A point emitted by the main loop, with the reachability-distance it was
/// emitted at.
#[derive(Debug, Clone, Copy)]
struct OrderedPoint {
    index: usize,
    reachability: f64,
}

/// Emits every point exactly once, smallest known reachability first.
///
/// Ties, including the initial all-undefined state, resolve to the lowest
/// index. Whenever the emitted point is core, the reachability of its
/// still-unprocessed neighbors is lowered to `max(core_dist, distance)`
/// where that improves on the recorded value.
fn reachability_ordering(n: usize, hoods: &[Vec<Neighbor>], core_dist: &[f64]) -> Vec<OrderedPoint> {
    let mut processed = bitvec![0; n];
    let mut reach = vec![UNDEFINED; n];
    let mut ordering = Vec::with_capacity(n);

    for _ in 0..n {
        let mut cur = None;
        for i in 0..n {
            if processed[i] {
                continue;
            }
            match cur {
                Some(c) if reach[i] >= reach[c] => {}
                _ => cur = Some(i),
            }
        }
        let Some(cur) = cur else { break };

        processed.set(cur, true);
        ordering.push(OrderedPoint {
            index: cur,
            reachability: reach[cur],
        });

        if core_dist[cur].is_finite() {
            for nb in &hoods[cur] {
                if processed[nb.index] {
                    continue;
                }
                let candidate = core_dist[cur].max(nb.distance);
                if candidate < reach[nb.index] {
                    reach[nb.index] = candidate;
                }
            }
        }
    }

    ordering
}

/// Scans the reachability ordering and assigns flat cluster labels.
///
/// A point whose reachability exceeds `max_eps` either seeds a new cluster
/// (its own core-distance is within `max_eps`) or is noise and closes the
/// current cluster run. A point within `max_eps` joins the open cluster.
fn extract_clusters(ordering: &[OrderedPoint], max_eps: f64, core_dist: &[f64]) -> Labeling {
    let mut labels = vec![Label::Noise; ordering.len()];
    let mut clusters: Vec<Vec<usize>> = Vec::new();
    let mut open: Option<usize> = None;

    for pt in ordering {
        if pt.reachability > max_eps {
            if core_dist[pt.index] <= max_eps {
                let id = clusters.len();
                labels[pt.index] = Label::Cluster(id);
                clusters.push(vec![pt.index]);
                open = Some(id);
            } else {
                open = None;
            }
        } else if let Some(id) = open {
            labels[pt.index] = Label::Cluster(id);
            clusters[id].push(pt.index);
        }
    }

    Labeling { labels, clusters }
}
