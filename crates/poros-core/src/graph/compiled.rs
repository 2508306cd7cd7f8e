//! Compiled (query-ready) graph snapshots.

use std::sync::Arc;

use poros_common::utils::hash::FxHashMap;
use poros_common::{Error, Result, VertexId};

use super::Graph;
use crate::search;

/// An immutable, cache-friendly snapshot of a [`Graph`]'s adjacency lists.
///
/// Vertex labels are interned to dense [`VertexId`] indexes and adjacency is
/// flattened into one contiguous edge array with per-vertex offsets, so a
/// query touches a few flat slices instead of chasing map entries. Keyed
/// vertices are interned first, in the graph's insertion order, followed by
/// vertices that appear only as neighbors; compiling the same mapping twice
/// therefore yields identical structures.
///
/// A compiled graph never changes after construction and is shared as
/// `Arc<CompiledGraph>` across concurrent queries without further locking.
#[derive(Debug)]
pub struct CompiledGraph {
    /// Label -> dense vertex index.
    vertex_ids: FxHashMap<Arc<str>, VertexId>,
    /// Dense vertex index -> label.
    labels: Vec<Arc<str>>,
    /// Edges of vertex `v` live at `targets[offsets[v.index()]..offsets[v.index() + 1]]`.
    offsets: Vec<usize>,
    /// Edge destinations, flat.
    targets: Vec<VertexId>,
    /// Edge weights, parallel to `targets`.
    weights: Vec<f64>,
}

impl CompiledGraph {
    /// Compiles a graph, rejecting negative and non-finite edge weights.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeWeight`] or [`Error::NonFiniteWeight`] naming
    /// the first offending edge.
    pub fn compile(graph: &Graph) -> Result<Self> {
        validate_weights(graph)?;
        Ok(Self::build(graph))
    }

    /// Compiles a graph without weight validation.
    ///
    /// For callers that guarantee non-negative weights themselves; queries
    /// over a graph that does carry negative weights return unspecified
    /// costs.
    #[must_use]
    pub fn compile_unvalidated(graph: &Graph) -> Self {
        Self::build(graph)
    }

    fn build(graph: &Graph) -> Self {
        let mut vertex_ids = FxHashMap::default();
        let mut labels: Vec<Arc<str>> = Vec::with_capacity(graph.vertex_count());

        // Keyed vertices claim the first indexes, in insertion order.
        for (vertex, _) in graph.iter() {
            intern(&mut vertex_ids, &mut labels, vertex);
        }

        let mut offsets = Vec::with_capacity(graph.vertex_count() + 1);
        let mut targets = Vec::with_capacity(graph.edge_count());
        let mut weights = Vec::with_capacity(graph.edge_count());

        offsets.push(0);
        for (_, edges) in graph.iter() {
            for (neighbor, weight) in edges {
                targets.push(intern(&mut vertex_ids, &mut labels, neighbor));
                weights.push(*weight);
            }
            offsets.push(targets.len());
        }

        // Neighbor-only vertices have no outgoing edges; give every vertex a row.
        while offsets.len() <= labels.len() {
            offsets.push(targets.len());
        }

        Self {
            vertex_ids,
            labels,
            offsets,
            targets,
            weights,
        }
    }

    /// Returns the minimum total edge weight of any path from `start` to
    /// `end`, or `None` if `end` is unreachable.
    ///
    /// A start vertex unknown to the graph yields `None`, even when
    /// `start == end`. A known vertex queried against itself costs `0.0`.
    #[must_use]
    pub fn shortest_path_cost(&self, start: &str, end: &str) -> Option<f64> {
        let start = self.vertex_id(start)?;
        let end = self.vertex_id(end)?;
        search::shortest_path_cost(self, start, end)
    }

    /// Resolves a vertex label to its dense index.
    #[must_use]
    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.vertex_ids.get(label).copied()
    }

    /// Resolves a dense index back to its label.
    #[must_use]
    pub fn label(&self, vertex: VertexId) -> Option<&str> {
        self.labels.get(vertex.index()).map(AsRef::as_ref)
    }

    /// Returns whether a vertex label is known to this graph.
    #[must_use]
    pub fn contains_vertex(&self, label: &str) -> bool {
        self.vertex_ids.contains_key(label)
    }

    /// Iterates over the `(neighbor, weight)` edges of a vertex.
    ///
    /// `vertex` must have been resolved against this graph.
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        let start = self.offsets[vertex.index()];
        let end = self.offsets[vertex.index() + 1];
        self.targets[start..end]
            .iter()
            .copied()
            .zip(self.weights[start..end].iter().copied())
    }

    /// Returns the number of vertices, including neighbor-only ones.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }
}

fn validate_weights(graph: &Graph) -> Result<()> {
    for (vertex, edges) in graph.iter() {
        for (neighbor, weight) in edges {
            if *weight < 0.0 {
                return Err(Error::NegativeWeight {
                    from: vertex.to_string(),
                    to: neighbor.clone(),
                    weight: *weight,
                });
            }
            if !weight.is_finite() {
                return Err(Error::NonFiniteWeight {
                    from: vertex.to_string(),
                    to: neighbor.clone(),
                });
            }
        }
    }
    Ok(())
}

fn intern(
    vertex_ids: &mut FxHashMap<Arc<str>, VertexId>,
    labels: &mut Vec<Arc<str>>,
    label: &str,
) -> VertexId {
    if let Some(&id) = vertex_ids.get(label) {
        return id;
    }
    let id = VertexId::new(labels.len() as u32);
    let label: Arc<str> = Arc::from(label);
    labels.push(label.clone());
    vertex_ids.insert(label, id);
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Graph {
        Graph::from_adjacency([
            ("A", vec![("B", 1.0), ("C", 4.0)]),
            ("B", vec![("D", 2.0)]),
            ("C", vec![("D", 1.0)]),
        ])
    }

    #[test]
    fn test_keyed_vertices_interned_first() {
        let compiled = CompiledGraph::compile(&diamond()).unwrap();

        assert_eq!(compiled.vertex_id("A"), Some(VertexId::new(0)));
        assert_eq!(compiled.vertex_id("B"), Some(VertexId::new(1)));
        assert_eq!(compiled.vertex_id("C"), Some(VertexId::new(2)));
        // D appears only as a neighbor and interns after all keys.
        assert_eq!(compiled.vertex_id("D"), Some(VertexId::new(3)));
    }

    #[test]
    fn test_neighbor_only_vertex_has_no_edges() {
        let compiled = CompiledGraph::compile(&diamond()).unwrap();
        let d = compiled.vertex_id("D").unwrap();
        assert_eq!(compiled.neighbors(d).count(), 0);
    }

    #[test]
    fn test_counts() {
        let compiled = CompiledGraph::compile(&diamond()).unwrap();
        assert_eq!(compiled.vertex_count(), 4);
        assert_eq!(compiled.edge_count(), 4);
    }

    #[test]
    fn test_neighbors_preserve_order_and_weights() {
        let compiled = CompiledGraph::compile(&diamond()).unwrap();
        let a = compiled.vertex_id("A").unwrap();

        let edges: Vec<(&str, f64)> = compiled
            .neighbors(a)
            .map(|(target, weight)| (compiled.label(target).unwrap(), weight))
            .collect();
        assert_eq!(edges, vec![("B", 1.0), ("C", 4.0)]);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let graph = Graph::from_adjacency([("A", vec![("B", -1.0)])]);

        let err = CompiledGraph::compile(&graph).unwrap_err();
        assert_eq!(
            err,
            Error::NegativeWeight {
                from: "A".to_string(),
                to: "B".to_string(),
                weight: -1.0,
            }
        );
    }

    #[test]
    fn test_nan_weight_rejected() {
        let graph = Graph::from_adjacency([("A", vec![("B", f64::NAN)])]);

        let err = CompiledGraph::compile(&graph).unwrap_err();
        assert_eq!(
            err,
            Error::NonFiniteWeight {
                from: "A".to_string(),
                to: "B".to_string(),
            }
        );
    }

    #[test]
    fn test_unvalidated_compile_accepts_anything() {
        let graph = Graph::from_adjacency([("A", vec![("B", -1.0)])]);

        let compiled = CompiledGraph::compile_unvalidated(&graph);
        assert_eq!(compiled.edge_count(), 1);
    }

    #[test]
    fn test_unknown_label_resolution() {
        let compiled = CompiledGraph::compile(&diamond()).unwrap();
        assert_eq!(compiled.vertex_id("Z"), None);
        assert!(!compiled.contains_vertex("Z"));
        assert!(compiled.contains_vertex("D"));
    }

    #[test]
    fn test_empty_graph_compiles() {
        let compiled = CompiledGraph::compile(&Graph::new()).unwrap();
        assert_eq!(compiled.vertex_count(), 0);
        assert_eq!(compiled.edge_count(), 0);
        assert_eq!(compiled.shortest_path_cost("A", "A"), None);
    }
}
