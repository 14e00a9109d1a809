use hashbrown::HashMap;
use itertools::Itertools;
use log::{info, trace};
use petgraph::graph::NodeIndex;

use super::config::NetworkConfig;
use crate::model::{Connection, Station, StationGraph};
use crate::{Error, LINE_TIME_FACTOR, TransitNetwork};

/// Creates a transit network based on the provided configuration
///
/// # Errors
///
/// Returns an error if the configuration is malformed or references
/// an unknown station
pub fn create_transit_network(config: &NetworkConfig) -> Result<TransitNetwork, Error> {
    validate_config(config)?;

    let mut builder = TransitNetworkBuilder::new();
    for station in &config.stations {
        builder.add_station(station.name.as_str(), station.latitude, station.longitude)?;
    }
    for line in &config.lines {
        builder.add_line(line.label.as_deref(), &line.stations)?;
    }
    for link in &config.interconnections {
        builder.add_interconnection(&link.from, &link.to, link.line.as_str(), link.time_factor)?;
    }

    Ok(builder.build())
}

fn validate_config(config: &NetworkConfig) -> Result<(), Error> {
    if config.stations.is_empty() {
        return Err(Error::InvalidData(
            "No stations provided in the configuration".to_string(),
        ));
    }

    for (idx, line) in config.lines.iter().enumerate() {
        if line.stations.len() < 2 {
            return Err(Error::InvalidData(format!(
                "Line #{idx} must have at least two stations, got {}",
                line.stations.len()
            )));
        }
    }

    for link in &config.interconnections {
        validate_time_factor(link.time_factor)?;
    }

    Ok(())
}

fn validate_time_factor(time_factor: f64) -> Result<(), Error> {
    if time_factor.is_finite() && time_factor >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidData(format!(
            "Time factor must be finite and non-negative, got {time_factor}"
        )))
    }
}

/// Incremental construction of a [`TransitNetwork`]
///
/// Stations must be added before the lines and interconnections that
/// reference them. `build` consumes the builder, so a network is built
/// exactly once.
#[derive(Debug, Default)]
pub struct TransitNetworkBuilder {
    graph: StationGraph,
    station_index: HashMap<String, NodeIndex>,
    lines: usize,
}

impl TransitNetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// `DuplicateStation` if the name is taken, `InvalidData` for
    /// non-finite coordinates
    pub fn add_station(
        &mut self,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<&mut Self, Error> {
        let name = name.into();
        if self.station_index.contains_key(&name) {
            return Err(Error::DuplicateStation(name));
        }
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(Error::InvalidData(format!(
                "Station {name} has invalid coordinates ({latitude}, {longitude})"
            )));
        }

        let node = self
            .graph
            .add_node(Station::new(name.clone(), latitude, longitude));
        self.station_index.insert(name, node);
        Ok(self)
    }

    /// Connects consecutive stations of a line with the in-line time factor
    ///
    /// The line is labelled with `label`, or with its first station name.
    ///
    /// # Errors
    ///
    /// `UnknownStation` if any station is missing, `InvalidData` if the
    /// line has fewer than two stations or repeats a station back to back.
    /// Nothing is added on error.
    pub fn add_line<S: AsRef<str>>(
        &mut self,
        label: Option<&str>,
        stations: &[S],
    ) -> Result<&mut Self, Error> {
        if stations.len() < 2 {
            return Err(Error::InvalidData(format!(
                "Line must have at least two stations, got {}",
                stations.len()
            )));
        }

        let nodes = stations
            .iter()
            .map(|name| self.resolve(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        if let Some((&a, _)) = nodes.iter().tuple_windows().find(|(a, b)| a == b) {
            return Err(Error::InvalidData(format!(
                "Line repeats station {} back to back",
                self.graph[a].name()
            )));
        }

        let label = label.unwrap_or(stations[0].as_ref()).to_string();
        for (&a, &b) in nodes.iter().tuple_windows() {
            self.connect(a, b, label.clone(), LINE_TIME_FACTOR);
        }
        self.lines += 1;
        Ok(self)
    }

    /// Adds a single edge between two lines
    ///
    /// # Errors
    ///
    /// `UnknownStation` if either end is missing, `InvalidData` for a
    /// self-loop or an invalid time factor
    pub fn add_interconnection(
        &mut self,
        from: &str,
        to: &str,
        line: impl Into<String>,
        time_factor: f64,
    ) -> Result<&mut Self, Error> {
        validate_time_factor(time_factor)?;
        let a = self.resolve(from)?;
        let b = self.resolve(to)?;
        if a == b {
            return Err(Error::InvalidData(format!(
                "Interconnection must join two distinct stations, got {from} twice"
            )));
        }

        self.connect(a, b, line.into(), time_factor);
        Ok(self)
    }

    pub fn build(self) -> TransitNetwork {
        info!(
            "Transit network created: {} stations, {} lines, {} connections",
            self.graph.node_count(),
            self.lines,
            self.graph.edge_count()
        );
        TransitNetwork::new(self.graph, self.station_index)
    }

    fn resolve(&self, name: &str) -> Result<NodeIndex, Error> {
        self.station_index
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownStation(name.to_string()))
    }

    fn connect(&mut self, a: NodeIndex, b: NodeIndex, line: String, time_factor: f64) {
        let distance = self.graph[a].planar_distance(&self.graph[b]);
        trace!(
            "{} <-> {} on {line}: distance {distance}, factor {time_factor}",
            self.graph[a].name(),
            self.graph[b].name()
        );
        self.graph
            .add_edge(a, b, Connection::new(distance, time_factor, line));
    }
}
