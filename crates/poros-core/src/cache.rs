//! Compiled-graph cache.
//!
//! Compiling a graph costs one full pass over its adjacency lists; queries
//! against the same graph are expected to repeat many times. The cache maps a
//! caller-supplied [`GraphId`] handle to its [`CompiledGraph`] so the work
//! happens once per handle.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use poros_common::{GraphId, Result};

use crate::graph::{CompiledGraph, Graph};

/// A cache of compiled graphs keyed by caller-supplied handle.
///
/// Lazy initialization is write-lock guarded: under concurrent first use of
/// one handle, exactly one caller compiles and every other caller adopts the
/// winner's entry. Completed entries are immutable and shared as `Arc`, so
/// concurrent queries read them without locking.
///
/// Entries persist until evicted or the cache is dropped. With a capacity
/// bound, inserting beyond the bound evicts the oldest entries first.
pub struct CompiledGraphCache {
    /// Entries in insertion order; the front is the oldest.
    entries: RwLock<IndexMap<GraphId, Arc<CompiledGraph>>>,
    /// Maximum number of retained entries; `None` keeps everything.
    capacity: Option<usize>,
}

impl CompiledGraphCache {
    /// Creates an unbounded cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(IndexMap::new()),
            capacity: None,
        }
    }

    /// Creates a cache that retains at most `capacity` compiled graphs,
    /// evicting the oldest beyond that.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(IndexMap::new()),
            capacity: Some(capacity),
        }
    }

    /// Returns the cached compilation for a handle, if present.
    #[must_use]
    pub fn get(&self, id: GraphId) -> Option<Arc<CompiledGraph>> {
        self.entries.read().get(&id).cloned()
    }

    /// Returns the cached compilation for a handle, compiling `graph` on the
    /// first use.
    ///
    /// A failed compilation inserts nothing; the cache stays exactly as it
    /// was.
    ///
    /// # Errors
    ///
    /// Propagates weight-validation errors from [`CompiledGraph::compile`]
    /// when `validate` is set.
    pub fn get_or_compile(
        &self,
        id: GraphId,
        graph: &Graph,
        validate: bool,
    ) -> Result<Arc<CompiledGraph>> {
        if let Some(hit) = self.entries.read().get(&id) {
            return Ok(Arc::clone(hit));
        }

        let mut entries = self.entries.write();
        // Re-check: another caller may have compiled while we waited.
        if let Some(existing) = entries.get(&id) {
            return Ok(Arc::clone(existing));
        }

        let compiled = if validate {
            CompiledGraph::compile(graph)?
        } else {
            CompiledGraph::compile_unvalidated(graph)
        };
        tracing::debug!(
            "compiled graph {} ({} vertices, {} edges)",
            id,
            compiled.vertex_count(),
            compiled.edge_count()
        );

        let compiled = Arc::new(compiled);
        entries.insert(id, Arc::clone(&compiled));

        if let Some(capacity) = self.capacity {
            while entries.len() > capacity {
                entries.shift_remove_index(0);
            }
        }

        Ok(compiled)
    }

    /// Removes the entry for a handle. Returns whether one was present.
    ///
    /// Queries already holding the `Arc` keep using it; only the cache's
    /// reference is dropped.
    pub fn evict(&self, id: GraphId) -> bool {
        self.entries.write().shift_remove(&id).is_some()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Returns the number of cached compilations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for CompiledGraphCache {
    fn default() -> Self {
        Self::new()
    }
}
