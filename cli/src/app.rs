use friendpath_core::{Graph, clean_str};

pub type NameLookup = rustc_hash::FxHashMap<String, Vec<String>>;

/// The social circle this program searches. Neighbor order is part of the
/// dataset and decides which of several equally short paths wins.
pub fn build_social_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_person("YOU", &["CLAIRE", "ALICE", "BOB"]);
    // CLAIRE lists THON, but the entry below is keyed THOH. The mismatch is
    // part of the dataset: THON never expands, THOH is referenced by nobody.
    graph.add_person("CLAIRE", &["YOU", "JONNY", "THON"]);
    graph.add_person("JONNY", &["CLAIRE"]);
    graph.add_person("THOH", &["CLAIRE"]);
    graph.add_person("ALICE", &["YOU", "PEGGY"]);
    graph.add_person("BOB", &["YOU", "PEGGY", "ANUJ"]);
    graph.add_person("PEGGY", &["BOB", "ALICE"]);
    graph.add_person("ANUJ", &["BOB"]);
    graph
}

/// Maps the cleaned form of every identifier mentioned in the graph to the
/// identifiers spelled that way. Covers dangling references too, so anything
/// that can appear in a path can also be asked about.
pub fn build_name_lookup(graph: &Graph) -> NameLookup {
    let mut lookup = NameLookup::default();

    for id in graph.referenced_ids() {
        let spellings = lookup.entry(clean_str(id)).or_insert_with(Vec::new);
        if !spellings.iter().any(|known| known == id) {
            spellings.push(id.to_owned());
        }
    }

    lookup
}
