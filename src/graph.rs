use indexmap::IndexMap;

pub type Weight = f64;

/// Undirected weighted graph keyed by node label.
///
/// Adjacency is stored symmetrically: whenever `b` is recorded as a neighbor
/// of `a` with weight `w`, `a` is a neighbor of `b` with the same weight.
/// Neighbors iterate in insertion order, so traversals over the same edge
/// list are reproducible. The graph is immutable once built.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: IndexMap<String, IndexMap<String, Weight>>,
}

impl RouteGraph {
    /// Build a graph from `(from, to, weight)` triples.
    ///
    /// Both endpoints of every triple become nodes even when they carry no
    /// other edges. A pair that appears more than once keeps the weight of
    /// its last occurrence. Weights are recorded as given, without
    /// validation.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S, Weight)>,
        S: Into<String>,
    {
        let mut adjacency: IndexMap<String, IndexMap<String, Weight>> = IndexMap::new();
        for (from, to, weight) in edges {
            let (from, to) = (from.into(), to.into());
            adjacency
                .entry(from.clone())
                .or_default()
                .insert(to.clone(), weight);
            adjacency.entry(to).or_default().insert(from, weight);
        }
        Self { adjacency }
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// All node labels, in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Neighbors of `node` with their edge weights, in insertion order.
    /// Unknown nodes yield an empty iterator.
    pub fn neighbors(&self, node: &str) -> impl Iterator<Item = (&str, Weight)> {
        self.adjacency
            .get(node)
            .into_iter()
            .flatten()
            .map(|(neighbor, &weight)| (neighbor.as_str(), weight))
    }

    /// Weight of the edge between `from` and `to`, if they are adjacent.
    pub fn weight(&self, from: &str, to: &str) -> Option<Weight> {
        self.adjacency
            .get(from)
            .and_then(|neighbors| neighbors.get(to))
            .copied()
    }
}
