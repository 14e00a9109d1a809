//! Detailed description of a found route

use itertools::Itertools;
use serde::Serialize;

use super::Criterion;
use super::dijkstra::TracedPath;
use crate::TransitNetwork;

/// One hop of a route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
    pub line: String,
    pub distance: f64,
    pub time: f64,
}

/// Route between two stations with totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub criterion: Criterion,
    pub stations: Vec<String>,
    pub legs: Vec<RouteLeg>,
    /// Total cost under `criterion`
    pub weight: f64,
    pub total_distance: f64,
    pub total_time: f64,
    pub hops: usize,
    /// How many times the line label changes along the route.
    /// Informational only, the router never optimizes for it.
    pub line_changes: usize,
}

impl RouteSummary {
    pub(crate) fn from_traced(
        network: &TransitNetwork,
        criterion: Criterion,
        traced: &TracedPath,
    ) -> Self {
        let stations: Vec<String> = traced
            .nodes
            .iter()
            .map(|&node| network.station_at(node).name().to_string())
            .collect();

        let legs: Vec<RouteLeg> = stations
            .iter()
            .tuple_windows()
            .zip(&traced.edges)
            .map(|((from, to), &edge)| {
                let connection = &network.graph[edge];
                RouteLeg {
                    from: from.clone(),
                    to: to.clone(),
                    line: connection.line().to_string(),
                    distance: connection.distance(),
                    time: connection.time(),
                }
            })
            .collect();

        let line_changes = legs
            .iter()
            .tuple_windows()
            .filter(|(a, b)| a.line != b.line)
            .count();

        Self {
            criterion,
            weight: traced.cost,
            total_distance: legs.iter().map(|leg| leg.distance).sum(),
            total_time: legs.iter().map(|leg| leg.time).sum(),
            hops: legs.len(),
            line_changes,
            stations,
            legs,
        }
    }

    pub fn origin(&self) -> Option<&str> {
        self.stations.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.stations.last().map(String::as_str)
    }

    /// Lines used along the route, consecutive repeats collapsed
    pub fn lines(&self) -> Vec<&str> {
        self.legs.iter().map(|leg| leg.line.as_str()).dedup().collect()
    }
}
