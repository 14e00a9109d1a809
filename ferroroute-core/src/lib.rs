//! Station-to-station route planning over a small transit network.
//!
//! A [`TransitNetwork`] is built once from a [`NetworkConfig`] (or with a
//! [`TransitNetworkBuilder`]) and then answers shortest route queries
//! by travel time, planar distance or number of hops.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{
    InterconnectionConfig, LineConfig, NetworkConfig, StationConfig, TransitNetworkBuilder,
    create_transit_network,
};
pub use model::{Connection, Station, TransitNetwork};
pub use routing::{Criterion, RouteLeg, RouteSummary, route_matrix};

/// Time factor applied to segments between consecutive stations of a line
pub const LINE_TIME_FACTOR: f64 = 1.5;

/// Default time factor of an interconnection between lines
pub const INTERCONNECTION_TIME_FACTOR: f64 = 2.0;

/// Default line label of an interconnection
pub const INTERCONNECTION_LINE: &str = "Interconexión";
