use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Shared co-occurrence graph: actor URL to the set of co-star URLs.
///
/// Cloning the handle shares the underlying graph. Both directions of an
/// edge are inserted under a single lock acquisition, so readers never
/// observe a half-inserted edge. Vertices are only ever added, never
/// removed.
#[derive(Clone, Default)]
pub struct ActorGraph {
    inner: Arc<Mutex<HashMap<String, HashSet<String>>>>,
}

impl ActorGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the undirected edge (a, b). Idempotent; self-loops are
    /// ignored.
    pub fn add_edge(&self, a: &str, b: &str) {
        if a == b {
            return;
        }

        let mut graph = self.inner.lock().unwrap();
        graph.entry(a.to_string()).or_default().insert(b.to_string());
        graph.entry(b.to_string()).or_default().insert(a.to_string());
    }

    /// Snapshot of a vertex's neighbor set, or `None` if the vertex was
    /// never discovered. Later mutations do not affect the returned set.
    pub fn neighbors(&self, id: &str) -> Option<HashSet<String>> {
        self.inner.lock().unwrap().get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.lock().unwrap().contains_key(id)
    }

    /// Sum of neighbor-set sizes. Each undirected edge is counted once per
    /// direction, matching the adjacency representation.
    pub fn edge_count(&self) -> usize {
        self.inner.lock().unwrap().values().map(HashSet::len).sum()
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.lock().unwrap().len()
    }
}
