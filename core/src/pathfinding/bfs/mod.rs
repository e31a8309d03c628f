pub(crate) mod state;

use std::time::Instant;

use super::utils::{PathResult, SearchOutcome};
use crate::graph::Graph;
use state::BfsState;

/// Breadth-first search from `start` until `target` is dequeued or the
/// frontier drains. The outcome owns the search records; the path is
/// reconstructed from it separately.
pub fn find_target(graph: &Graph, start: &str, target: &str) -> SearchOutcome {
    BfsState::new(start).run(graph, target)
}

pub fn bfs_find_path(graph: &Graph, start: &str, target: &str) -> PathResult {
    let search_timer = Instant::now();

    let outcome = find_target(graph, start, target);
    let path = outcome.reconstruct_path();

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    (path, outcome.nodes_inspected, elapsed_time)
}
