//! Graph model: the caller-owned adjacency mapping and its compiled form.
//!
//! - [`Graph`] - the input shape: vertex label -> ordered `(neighbor, weight)`
//!   pairs, owned and populated by the caller
//! - [`CompiledGraph`] - the immutable, query-ready snapshot the engine
//!   builds from a [`Graph`] and caches

mod compiled;

pub use compiled::CompiledGraph;

use indexmap::IndexMap;

/// A weighted directed graph as an adjacency mapping.
///
/// Each vertex label maps to an ordered sequence of `(neighbor, weight)`
/// pairs. Adjacency order is insertion order, so compiling the same mapping
/// twice yields identical structures. Vertices that appear only as neighbors
/// are valid destinations with no outgoing edges; they do not need their own
/// entry.
///
/// The graph is read-only to the engine. Once a graph has been compiled under
/// a handle, mutating it has no effect on cached queries (see
/// [`PathEngine`](crate::engine::PathEngine)).
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: IndexMap<String, Vec<(String, f64)>>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from an adjacency mapping.
    ///
    /// Later entries for the same vertex replace earlier ones, matching map
    /// semantics.
    pub fn from_adjacency<V, E, I>(adjacency: I) -> Self
    where
        V: Into<String>,
        E: IntoIterator<Item = (V, f64)>,
        I: IntoIterator<Item = (V, E)>,
    {
        let adjacency = adjacency
            .into_iter()
            .map(|(vertex, edges)| {
                (
                    vertex.into(),
                    edges
                        .into_iter()
                        .map(|(neighbor, weight)| (neighbor.into(), weight))
                        .collect(),
                )
            })
            .collect();
        Self { adjacency }
    }

    /// Returns the outgoing edges of a vertex, empty if the vertex has no
    /// entry.
    #[must_use]
    pub fn edges_from(&self, vertex: &str) -> &[(String, f64)] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterates over `(vertex, outgoing edges)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[(String, f64)])> {
        self.adjacency
            .iter()
            .map(|(vertex, edges)| (vertex.as_str(), edges.as_slice()))
    }

    /// Returns the number of vertices with an adjacency entry.
    ///
    /// Neighbor-only vertices are not counted here; they surface once the
    /// graph is compiled.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Returns whether the graph has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<V, E> FromIterator<(V, E)> for Graph
where
    V: Into<String>,
    E: IntoIterator<Item = (V, f64)>,
{
    fn from_iter<I: IntoIterator<Item = (V, E)>>(iter: I) -> Self {
        Self::from_adjacency(iter)
    }
}
