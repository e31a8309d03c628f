use super::bfs::state::SearchRecord;

pub type PathResult = (Option<Vec<String>>, usize, f64);

/// What a finished search leaves behind: the record arena, the index of the
/// record that matched the target (absent when the target is unreachable),
/// and how many identifiers were dequeued and expanded along the way.
pub struct SearchOutcome {
    pub(crate) records: Vec<SearchRecord>,
    pub(crate) terminal: Option<usize>,
    pub nodes_inspected: usize,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.terminal.is_some()
    }

    /// Walks the parent chain from the matched record back to the start
    /// record, then reverses, so the path reads start to target. `None` when
    /// the search drained its frontier without a match.
    pub fn reconstruct_path(&self) -> Option<Vec<String>> {
        let terminal = self.terminal?;

        let mut path = Vec::new();
        let mut current = Some(terminal);
        while let Some(index) = current {
            let record = &self.records[index];
            path.push(record.node.clone());
            current = record.parent;
        }
        path.reverse();

        Some(path)
    }
}
