use hashbrown::HashMap;
use log::debug;

use super::dijkstra::{TracedPath, dijkstra_costs, dijkstra_path};
use super::{Criterion, RouteSummary};
use crate::{Error, TransitNetwork};

/// Shortest route from `start` to `end` as an ordered list of station names
///
/// # Errors
///
/// `UnknownStation` if either station is missing, `NoPath` if they
/// are not connected.
pub fn shortest_route(
    network: &TransitNetwork,
    start: &str,
    end: &str,
    criterion: Criterion,
) -> Result<Vec<String>, Error> {
    let traced = trace_route(network, start, end, criterion)?;
    Ok(traced
        .nodes
        .iter()
        .map(|&node| network.station_at(node).name().to_string())
        .collect())
}

/// Shortest route with per-leg details
///
/// # Errors
///
/// Same as [`shortest_route`].
pub fn detailed_route(
    network: &TransitNetwork,
    start: &str,
    end: &str,
    criterion: Criterion,
) -> Result<RouteSummary, Error> {
    let traced = trace_route(network, start, end, criterion)?;
    Ok(RouteSummary::from_traced(network, criterion, &traced))
}

/// Minimal cost from `start` to every reachable station
///
/// # Errors
///
/// `UnknownStation` if `start` is missing.
pub fn shortest_costs(
    network: &TransitNetwork,
    start: &str,
    criterion: Criterion,
) -> Result<HashMap<String, f64>, Error> {
    let source = network.resolve(start)?;
    let costs = dijkstra_costs(&network.graph, source, criterion.weight_fn());
    debug!(
        "Reached {} of {} stations from {start} by {criterion}",
        costs.len(),
        network.station_count()
    );

    Ok(costs
        .into_iter()
        .map(|(node, cost)| (network.station_at(node).name().to_string(), cost))
        .collect())
}

fn trace_route(
    network: &TransitNetwork,
    start: &str,
    end: &str,
    criterion: Criterion,
) -> Result<TracedPath, Error> {
    let source = network.resolve(start)?;
    let target = network.resolve(end)?;

    debug!("Routing {start} -> {end} by {criterion}");
    let traced = dijkstra_path(&network.graph, source, target, criterion.weight_fn())
        .ok_or_else(|| Error::NoPath {
            start: start.to_string(),
            end: end.to_string(),
        })?;
    debug!(
        "Found route {start} -> {end}: {} stations, {criterion} = {}",
        traced.nodes.len(),
        traced.cost
    );

    Ok(traced)
}

impl TransitNetwork {
    /// Best route between two named stations
    ///
    /// `criterion` must be one of `time`, `distance` or `transfers`.
    ///
    /// # Errors
    ///
    /// `UnknownStation` for a missing `start` or `end`, `InvalidCriterion`
    /// for any other criterion value, `NoPath` if the stations are not
    /// connected.
    pub fn find_route(&self, start: &str, end: &str, criterion: &str) -> Result<Vec<String>, Error> {
        self.resolve(start)?;
        self.resolve(end)?;
        let criterion: Criterion = criterion.parse()?;
        shortest_route(self, start, end, criterion)
    }

    /// See [`detailed_route`]
    pub fn plan_route(
        &self,
        start: &str,
        end: &str,
        criterion: Criterion,
    ) -> Result<RouteSummary, Error> {
        detailed_route(self, start, end, criterion)
    }

    /// See [`shortest_costs`]
    pub fn costs_from(&self, start: &str, criterion: Criterion) -> Result<HashMap<String, f64>, Error> {
        shortest_costs(self, start, criterion)
    }
}
