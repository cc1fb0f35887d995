use std::collections::BinaryHeap;

use gridpath_core::Point;

use crate::graph::Graph;
use crate::queue::{NodeRef, UNREACHABLE};

/// Single-source Dijkstra over `graph`.
///
/// Returns the cost of the cheapest path from `source` to every node, indexed
/// like [`Graph::nodes`]. Unreached nodes (and every node, if `source` is not
/// part of the graph) hold [`UNREACHABLE`].
pub fn dijkstra_costs(graph: &Graph, source: Point) -> Vec<i32> {
    let mut dist = vec![UNREACHABLE; graph.len()];
    let Some(si) = graph.index_of(source) else {
        return dist;
    };

    dist[si] = 0;
    let mut open = BinaryHeap::new();
    open.push(NodeRef { idx: si, f: 0 });

    while let Some(current) = open.pop() {
        let ci = current.idx;
        if current.f > dist[ci] {
            continue;
        }
        for &(ni, length) in graph.adjacent(ci) {
            let tentative = current.f + length;
            if tentative < dist[ni] {
                dist[ni] = tentative;
                open.push(NodeRef {
                    idx: ni,
                    f: tentative,
                });
            }
        }
    }

    dist
}

/// Cost of the cheapest path from `from` to `to`, or `None` if there is none.
pub fn shortest_cost(graph: &Graph, from: Point, to: Point) -> Option<i32> {
    let ti = graph.index_of(to)?;
    let cost = *dijkstra_costs(graph, from).get(ti)?;
    (cost != UNREACHABLE).then_some(cost)
}
