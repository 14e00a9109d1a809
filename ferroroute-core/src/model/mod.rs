//! Data model for the transit network
//!
//! Contains the station and connection types and the graph that owns them.

pub mod connection;
pub mod network;
pub mod station;

pub use connection::Connection;
pub use network::{StationGraph, TransitNetwork};
pub use station::Station;
