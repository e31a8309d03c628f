use rustc_hash::FxHashSet;
use std::collections::VecDeque;

use super::super::utils::SearchOutcome;
use crate::graph::Graph;

/// One record per enqueued identifier: the identifier itself plus the arena
/// index of the record it was discovered from. The parent link is set at
/// creation and never changes, so the records form a tree rooted at the
/// start record.
pub(crate) struct SearchRecord {
    pub(crate) node: String,
    pub(crate) parent: Option<usize>,
}

pub(crate) struct BfsState {
    records: Vec<SearchRecord>,
    queue: VecDeque<usize>,
    visited: FxHashSet<String>,
}

impl BfsState {
    pub(crate) fn new(start: &str) -> Self {
        let records = vec![SearchRecord {
            node: start.to_owned(),
            parent: None,
        }];
        let mut queue = VecDeque::new();
        queue.push_back(0);

        Self {
            records,
            queue,
            visited: FxHashSet::default(),
        }
    }

    pub(crate) fn run(mut self, graph: &Graph, target: &str) -> SearchOutcome {
        while let Some(current) = self.queue.pop_front() {
            let node = self.records[current].node.clone();

            // The same identifier can sit in the queue several times when it
            // was reached through different parents; only the first dequeue
            // counts.
            if self.visited.contains(&node) {
                continue;
            }

            if node == target {
                return SearchOutcome {
                    records: self.records,
                    terminal: Some(current),
                    nodes_inspected: self.visited.len(),
                };
            }

            self.visited.insert(node.clone());
            self.enqueue_neighbors(graph, &node, current);
        }

        SearchOutcome {
            records: self.records,
            terminal: None,
            nodes_inspected: self.visited.len(),
        }
    }

    fn enqueue_neighbors(&mut self, graph: &Graph, node: &str, parent: usize) {
        for neighbor in graph.neighbors(node) {
            let index = self.records.len();
            self.records.push(SearchRecord {
                node: neighbor.clone(),
                parent: Some(parent),
            });
            self.queue.push_back(index);
        }
    }
}
