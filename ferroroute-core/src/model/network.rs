//! Transit network graph and read-only accessors

use hashbrown::HashMap;
use itertools::Itertools;
use petgraph::graph::{NodeIndex, UnGraph};

use super::{Connection, Station};
use crate::routing::Criterion;
use crate::Error;

pub type StationGraph = UnGraph<Station, Connection>;

/// Immutable transit network
///
/// Built once by [`crate::TransitNetworkBuilder`], never mutated afterwards,
/// so a shared reference can be queried from many threads at once.
#[derive(Debug, Clone)]
pub struct TransitNetwork {
    pub(crate) graph: StationGraph,
    pub(crate) station_index: HashMap<String, NodeIndex>,
}

impl TransitNetwork {
    pub(crate) fn new(graph: StationGraph, station_index: HashMap<String, NodeIndex>) -> Self {
        Self {
            graph,
            station_index,
        }
    }

    /// Node of the station with the given name
    pub(crate) fn resolve(&self, name: &str) -> Result<NodeIndex, Error> {
        self.station_index
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownStation(name.to_string()))
    }

    pub(crate) fn station_at(&self, node: NodeIndex) -> &Station {
        &self.graph[node]
    }

    pub fn station(&self, name: &str) -> Option<&Station> {
        self.station_index.get(name).map(|&node| &self.graph[node])
    }

    pub fn contains_station(&self, name: &str) -> bool {
        self.station_index.contains_key(name)
    }

    /// All stations in insertion order
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.graph.node_weights()
    }

    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Names of the stations directly connected to `name`
    pub fn neighbors(&self, name: &str) -> Result<Vec<&str>, Error> {
        let node = self.resolve(name)?;
        Ok(self
            .graph
            .neighbors(node)
            .map(|next| self.graph[next].name())
            .unique()
            .collect())
    }

    /// Every connection joining `a` and `b`, in either direction
    pub fn connections_between(&self, a: &str, b: &str) -> Result<Vec<&Connection>, Error> {
        let a = self.resolve(a)?;
        let b = self.resolve(b)?;
        Ok(self
            .graph
            .edges_connecting(a, b)
            .map(|edge| edge.weight())
            .collect())
    }

    /// Total weight of `path` under `criterion`
    ///
    /// Each hop is charged with its cheapest connection.
    ///
    /// # Errors
    ///
    /// Fails if the path is empty, names an unknown station, or contains
    /// two consecutive stations that are not adjacent.
    pub fn path_weight<S: AsRef<str>>(&self, path: &[S], criterion: Criterion) -> Result<f64, Error> {
        if path.is_empty() {
            return Err(Error::InvalidData("Empty path".to_string()));
        }

        let nodes = path
            .iter()
            .map(|name| self.resolve(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let weight = criterion.weight_fn();
        nodes.iter().tuple_windows().try_fold(0.0, |total, (&a, &b)| {
            self.graph
                .edges_connecting(a, b)
                .map(|edge| weight(edge.weight()))
                .min_by(f64::total_cmp)
                .map(|hop| total + hop)
                .ok_or_else(|| {
                    Error::InvalidData(format!(
                        "{} and {} are not connected",
                        self.graph[a].name(),
                        self.graph[b].name()
                    ))
                })
        })
    }
}
