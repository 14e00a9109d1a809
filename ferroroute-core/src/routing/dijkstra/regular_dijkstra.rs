use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use super::state::State;
use crate::model::StationGraph;
use crate::routing::WeightFn;

/// Dijkstra's algorithm over the whole station graph
/// Returns a map of reachable nodes to their minimal cost from `start`
pub(crate) fn dijkstra_costs(
    graph: &StationGraph,
    start: NodeIndex,
    weight: WeightFn,
) -> HashMap<NodeIndex, f64> {
    let mut costs: HashMap<NodeIndex, f64> = HashMap::with_capacity(graph.node_count());
    let mut settled = FixedBitSet::with_capacity(graph.node_count());
    let mut heap = BinaryHeap::new();

    // Start node has cost 0
    heap.push(State {
        cost: 0.0,
        node: start,
    });
    costs.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        // Stale heap entry, node already settled with a lower cost
        if settled.put(node.index()) {
            continue;
        }

        for edge in graph.edges(node) {
            let next = if edge.source() == node {
                edge.target()
            } else {
                edge.source()
            };
            if settled.contains(next.index()) {
                continue;
            }
            let next_cost = cost + weight(edge.weight());

            match costs.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    costs
}
