use rustc_hash::FxHashMap;

/// Adjacency-list graph over opaque string identifiers. Neighbor order is
/// preserved exactly as inserted; it decides which of several equally short
/// paths a search discovers first.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: FxHashMap<String, Vec<String>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_person(&mut self, id: &str, neighbors: &[&str]) {
        self.adjacency.insert(
            id.to_owned(),
            neighbors.iter().map(|neighbor| (*neighbor).to_owned()).collect(),
        );
    }

    /// Neighbors of `id` in insertion order. An identifier without an entry
    /// of its own (a dangling reference) has no neighbors.
    pub fn neighbors(&self, id: &str) -> &[String] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn people(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Every identifier mentioned anywhere in the graph: keys plus neighbor
    /// entries. Dangling references show up here even though they have no
    /// entry of their own.
    pub fn referenced_ids(&self) -> impl Iterator<Item = &str> {
        self.adjacency
            .keys()
            .map(String::as_str)
            .chain(self.adjacency.values().flatten().map(String::as_str))
    }
}

impl FromIterator<(String, Vec<String>)> for Graph {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            adjacency: iter.into_iter().collect(),
        }
    }
}
