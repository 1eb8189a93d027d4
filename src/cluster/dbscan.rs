//! Fixed-radius density clustering (DBSCAN).

use bitvec::prelude::*;

use super::error::ClusterError;
use super::neighbors::NeighborQuery;
use super::point::{CoordinatePoint, Label, Labeling};

// DBSCAN algorithm pseudocode (from <http://en.wikipedia.org/wiki/DBSCAN>):
//
// DBSCAN(D, eps, MinPts)
//    C = 0
//    for each unvisited point P in dataset D
//       mark P as visited
//       NeighborPts = regionQuery(P, eps)
//       if sizeof(NeighborPts) < MinPts
//          mark P as NOISE
//       else
//          C = next cluster
//          expandCluster(P, NeighborPts, C, eps, MinPts)
//
// expandCluster(P, NeighborPts, C, eps, MinPts)
//    add P to cluster C
//    for each point P' in NeighborPts
//       if P' is not visited
//          mark P' as visited
//          NeighborPts' = regionQuery(P', eps)
//          if sizeof(NeighborPts') >= MinPts
//             NeighborPts = NeighborPts joined with NeighborPts'
//       if P' is not yet member of any cluster
//          add P' to cluster C

/// Clusters points with a fixed neighborhood radius.
///
/// # Arguments
///
/// * `points` - the full point set
/// * `eps` - neighborhood radius in radians of great-circle arc
/// * `min_pts` - minimum neighborhood size for a core point, counting the
///   point itself
///
/// Points are visited in ascending index order, so cluster ids and member
/// order are reproducible for identical input. A point provisionally marked
/// noise can later be reclaimed as a border point of the cluster that first
/// reaches it; border points never expand the frontier.
pub fn fixed_radius(
    points: &[CoordinatePoint],
    eps: f64,
    min_pts: usize,
) -> Result<Labeling, ClusterError> {
    validate(eps, "eps", min_pts)?;

    let n = points.len();
    let query = NeighborQuery::new(points);

    let mut visited = bitvec![0; n];
    let mut in_frontier = bitvec![0; n];
    let mut labels = vec![Label::Noise; n];
    let mut clusters: Vec<Vec<usize>> = Vec::new();

    for i in 0..n {
        if visited[i] {
            continue;
        }
        visited.set(i, true);

        let hood = query.neighbors(i, eps);
        if hood.len() + 1 < min_pts {
            // Tentatively noise; a later expansion may reclaim it.
            continue;
        }

        let id = clusters.len();
        labels[i] = Label::Cluster(id);
        let mut members = vec![i];

        in_frontier.fill(false);
        in_frontier.set(i, true);
        let mut frontier: Vec<usize> = Vec::with_capacity(hood.len());
        for nb in &hood {
            frontier.push(nb.index);
            in_frontier.set(nb.index, true);
        }

        // Breadth-first expansion; frontier grows while core points are found.
        let mut j = 0;
        while j < frontier.len() {
            let k = frontier[j];
            j += 1;

            if !visited[k] {
                visited.set(k, true);
                let more = query.neighbors(k, eps);
                if more.len() + 1 >= min_pts {
                    for nb in &more {
                        if !in_frontier[nb.index] {
                            frontier.push(nb.index);
                            in_frontier.set(nb.index, true);
                        }
                    }
                }
            }

            // First cluster assignment wins; points of earlier clusters
            // are never relabeled.
            if labels[k] == Label::Noise {
                labels[k] = Label::Cluster(id);
                members.push(k);
            }
        }

        clusters.push(members);
    }

    Ok(Labeling { labels, clusters })
}

pub(super) fn validate(eps: f64, eps_name: &'static str, min_pts: usize) -> Result<(), ClusterError> {
    if eps < 0.0 || eps.is_nan() {
        return Err(ClusterError::invalid(eps_name, eps));
    }
    if min_pts < 1 {
        return Err(ClusterError::invalid("min_pts", min_pts));
    }
    Ok(())
}
