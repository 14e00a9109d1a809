pub use crate::{INTERCONNECTION_LINE, INTERCONNECTION_TIME_FACTOR, LINE_TIME_FACTOR};

// Re-export key components
pub use crate::loading::{NetworkConfig, TransitNetworkBuilder, create_transit_network};
pub use crate::model::{Connection, Station, TransitNetwork};
pub use crate::routing::{
    Criterion, RouteLeg, RouteSummary, detailed_route, route_matrix, shortest_costs,
    shortest_route,
};

pub use crate::Error;
