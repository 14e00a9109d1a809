mod regular_dijkstra;
mod state;
mod traced_dijkstra;

pub(crate) use regular_dijkstra::dijkstra_costs;
pub(crate) use traced_dijkstra::{TracedPath, dijkstra_path};
