//! This module is responsible for turning a declarative network description
//! into a routable [`crate::TransitNetwork`].

mod builder;
mod config;
mod seed;

pub use builder::{TransitNetworkBuilder, create_transit_network};
pub use config::{InterconnectionConfig, LineConfig, NetworkConfig, StationConfig};
