//! One-to-many cost matrix
//!
//! The network is immutable, so every origin row is computed on its own
//! rayon task against the same shared reference.

use rayon::prelude::*;

use super::Criterion;
use super::dijkstra::dijkstra_costs;
use crate::{Error, TransitNetwork};

/// Minimal cost from every origin to every destination
///
/// `result[i][j]` is the cost from `origins[i]` to `destinations[j]`,
/// or `None` if the destination is unreachable.
///
/// # Errors
///
/// `UnknownStation` for the first missing origin or destination.
pub fn route_matrix<S: AsRef<str> + Sync>(
    network: &TransitNetwork,
    origins: &[S],
    destinations: &[S],
    criterion: Criterion,
) -> Result<Vec<Vec<Option<f64>>>, Error> {
    let origin_nodes = origins
        .iter()
        .map(|name| network.resolve(name.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    let destination_nodes = destinations
        .iter()
        .map(|name| network.resolve(name.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let weight = criterion.weight_fn();
    Ok(origin_nodes
        .par_iter()
        .map(|&origin| {
            let costs = dijkstra_costs(&network.graph, origin, weight);
            destination_nodes
                .iter()
                .map(|node| costs.get(node).copied())
                .collect()
        })
        .collect())
}
