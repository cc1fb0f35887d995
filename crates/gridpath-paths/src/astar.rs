use std::collections::BinaryHeap;

use gridpath_core::Point;

use crate::graph::Graph;
use crate::queue::{NO_PARENT, NodeRef, UNREACHABLE};
use crate::traits::Heuristic;

/// Compute the shortest path from `start` to `goal` using A*.
///
/// Returns the full path (including both endpoints) or `None` if `goal`
/// cannot be reached, or if either endpoint is not a node of `graph`.
///
/// The frontier is a binary heap without decrease-key: an improved node is
/// pushed again and entries whose priority no longer matches the node's best
/// known `f` score are skipped when popped. Among equal priorities the node
/// generated first wins.
pub fn find_path<H: Heuristic + ?Sized>(
    graph: &Graph,
    start: Point,
    goal: Point,
    heuristic: &H,
) -> Option<Vec<Point>> {
    let start_idx = graph.index_of(start)?;
    let goal_idx = graph.index_of(goal)?;

    if start_idx == goal_idx {
        return Some(vec![start]);
    }

    let n = graph.len();
    let mut g_score = vec![UNREACHABLE; n];
    let mut f_score = vec![UNREACHABLE; n];
    let mut came_from = vec![NO_PARENT; n];

    g_score[start_idx] = 0;
    f_score[start_idx] = heuristic.estimate(start, goal);

    let mut open = BinaryHeap::new();
    open.push(NodeRef {
        idx: start_idx,
        f: f_score[start_idx],
    });

    let mut expanded = 0usize;

    while let Some(current) = open.pop() {
        let ci = current.idx;

        // Skip stale entries.
        if current.f != f_score[ci] {
            continue;
        }

        if ci == goal_idx {
            log::trace!("a*: reached {goal} after expanding {expanded} nodes");
            return Some(reconstruct_path(graph, &came_from, ci));
        }

        expanded += 1;
        let current_g = g_score[ci];

        for &(ni, length) in graph.adjacent(ci) {
            let tentative_g = current_g + length;
            if tentative_g >= g_score[ni] {
                continue;
            }

            came_from[ni] = ci;
            g_score[ni] = tentative_g;
            let np = graph.nodes()[ni];
            f_score[ni] = tentative_g + heuristic.estimate(np, goal);

            open.push(NodeRef {
                idx: ni,
                f: f_score[ni],
            });
        }
    }

    log::trace!("a*: {goal} unreachable from {start} ({expanded} nodes expanded)");
    None
}

fn reconstruct_path(graph: &Graph, came_from: &[usize], goal_idx: usize) -> Vec<Point> {
    let mut path = Vec::new();
    let mut ci = goal_idx;
    while ci != NO_PARENT {
        path.push(graph.nodes()[ci]);
        ci = came_from[ci];
    }
    path.reverse();
    path
}
