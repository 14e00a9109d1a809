//! Route queries over a built [`crate::TransitNetwork`]

mod criterion;
mod dijkstra;
pub mod itinerary;
pub mod matrix;
mod router;

pub use criterion::{Criterion, WeightFn};
pub use itinerary::{RouteLeg, RouteSummary};
pub use matrix::route_matrix;
pub use router::{detailed_route, shortest_costs, shortest_route};
