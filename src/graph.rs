use indexmap::{IndexMap, IndexSet};

/// Undirected similarity graph over song ids. Adjacency sets keep
/// insertion order, so neighbor iteration is deterministic for a given
/// build of the graph.
#[derive(Debug, Default)]
pub struct SimilarityGraph {
    adjacency: IndexMap<String, IndexSet<String>>,
}

impl SimilarityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: &str) {
        self.adjacency.entry(id.to_string()).or_default();
    }

    /// Symmetric and idempotent. Self-loops are refused.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        if a == b {
            return;
        }
        self.add_node(a);
        self.add_node(b);
        self.adjacency[a].insert(b.to_string());
        self.adjacency[b].insert(a.to_string());
    }

    pub fn neighbors(&self, id: &str) -> impl Iterator<Item = &str> {
        self.adjacency
            .get(id)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn clear(&mut self) {
        self.adjacency.clear();
    }
}
