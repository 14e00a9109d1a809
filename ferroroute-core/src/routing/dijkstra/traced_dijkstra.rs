use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use petgraph::{
    graph::{EdgeIndex, NodeIndex},
    visit::EdgeRef,
};

use super::state::State;
use crate::model::StationGraph;
use crate::routing::WeightFn;

/// Cheapest path found by [`dijkstra_path`]
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TracedPath {
    pub(crate) cost: f64,
    /// Nodes from start to target inclusive
    pub(crate) nodes: Vec<NodeIndex>,
    /// Edges taken between consecutive nodes
    pub(crate) edges: Vec<EdgeIndex>,
}

/// Dijkstra's algorithm from `start` to `target`
/// Returns `None` if the target is unreachable
pub(crate) fn dijkstra_path(
    graph: &StationGraph,
    start: NodeIndex,
    target: NodeIndex,
    weight: WeightFn,
) -> Option<TracedPath> {
    let mut costs: HashMap<NodeIndex, f64> = HashMap::with_capacity(graph.node_count());
    let mut predecessors: HashMap<NodeIndex, (NodeIndex, EdgeIndex)> =
        HashMap::with_capacity(graph.node_count());
    let mut settled = FixedBitSet::with_capacity(graph.node_count());
    let mut heap = BinaryHeap::new();

    heap.push(State {
        cost: 0.0,
        node: start,
    });
    costs.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        // Check if we've reached the target
        if node == target {
            return Some(trace_back(start, target, cost, &predecessors));
        }

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

            let improved = match costs.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    true
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        true
                    } else {
                        false
                    }
                }
            };

            if improved {
                predecessors.insert(next, (node, edge.id()));
                heap.push(State {
                    cost: next_cost,
                    node: next,
                });
            }
        }
    }

    None
}

/// Follow predecessors backward from target to start
fn trace_back(
    start: NodeIndex,
    target: NodeIndex,
    cost: f64,
    predecessors: &HashMap<NodeIndex, (NodeIndex, EdgeIndex)>,
) -> TracedPath {
    let mut nodes = vec![target];
    let mut edges = Vec::new();

    let mut current = target;
    while current != start {
        // Every settled node except start has a predecessor
        debug_assert!(
            predecessors.contains_key(&current),
            "missing predecessor for {current:?}"
        );
        let Some(&(prev, edge)) = predecessors.get(&current) else {
            break;
        };
        nodes.push(prev);
        edges.push(edge);
        current = prev;
    }

    nodes.reverse();
    edges.reverse();

    TracedPath { cost, nodes, edges }
}
