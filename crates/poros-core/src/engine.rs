//! The public query surface.

use std::sync::Arc;

use poros_common::{GraphId, Result};

use crate::cache::CompiledGraphCache;
use crate::graph::{CompiledGraph, Graph};

/// Configuration for a [`PathEngine`].
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Whether to reject negative and non-finite edge weights when a graph is
    /// compiled. Disabling skips validation entirely; queries over a graph
    /// with negative weights then return unspecified costs.
    pub validate_weights: bool,
    /// Maximum number of compiled graphs to retain, oldest evicted first.
    /// `None` retains everything for the engine's lifetime.
    pub cache_capacity: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            validate_weights: true,
            cache_capacity: None,
        }
    }
}

/// A shortest-path query engine with a compiled-graph cache.
///
/// The engine owns its cache; dropping the engine drops every compiled
/// graph. Graph identity is the caller-supplied [`GraphId`]: the first query
/// under a handle compiles the supplied graph, and every later query under
/// that handle reuses the compilation without reading the supplied graph
/// again. A handle must therefore not be reused for a structurally different
/// graph — [`evict`](Self::evict) it first.
///
/// Queries may run concurrently from multiple threads; per-query state is
/// never shared and at most one compilation runs per handle.
///
/// # Examples
///
/// ```
/// use poros_core::{Graph, PathEngine};
/// use poros_common::GraphId;
///
/// let graph = Graph::from_adjacency([
///     ("A", vec![("B", 2.0), ("C", 5.0)]),
///     ("B", vec![("C", 1.0)]),
/// ]);
///
/// let engine = PathEngine::new();
/// let cost = engine.shortest_path_cost(GraphId::new(1), &graph, "A", "C")?;
/// assert_eq!(cost, Some(3.0));
/// # Ok::<(), poros_common::Error>(())
/// ```
pub struct PathEngine {
    /// Engine configuration.
    config: EngineConfig,
    /// Compiled graphs by handle.
    cache: CompiledGraphCache,
}

impl PathEngine {
    /// Creates an engine with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an engine with custom configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let cache = match config.cache_capacity {
            Some(capacity) => CompiledGraphCache::with_capacity(capacity),
            None => CompiledGraphCache::new(),
        };
        Self { config, cache }
    }

    /// Returns the minimum total edge weight of any path from `start` to
    /// `end` in `graph`, or `None` if `end` is unreachable.
    ///
    /// On the first call under `id` the graph is compiled and cached; later
    /// calls reuse the cached compilation. An unknown start vertex yields
    /// `None`; `start == end` on a known vertex costs `0.0`.
    ///
    /// # Errors
    ///
    /// Returns a weight-validation error if the graph fails to compile (only
    /// on first use of a handle, and only with
    /// [`EngineConfig::validate_weights`] set).
    pub fn shortest_path_cost(
        &self,
        id: GraphId,
        graph: &Graph,
        start: &str,
        end: &str,
    ) -> Result<Option<f64>> {
        let compiled = self.prepare(id, graph)?;
        Ok(compiled.shortest_path_cost(start, end))
    }

    /// Returns the compiled form of `graph` under `id`, compiling on first
    /// use.
    ///
    /// The returned handle answers queries directly and stays valid even
    /// after the cache entry is evicted.
    ///
    /// # Errors
    ///
    /// Returns a weight-validation error if the graph fails to compile.
    pub fn prepare(&self, id: GraphId, graph: &Graph) -> Result<Arc<CompiledGraph>> {
        self.cache
            .get_or_compile(id, graph, self.config.validate_weights)
    }

    /// Drops the compiled graph cached under `id`. Returns whether one was
    /// present.
    pub fn evict(&self, id: GraphId) -> bool {
        self.cache.evict(id)
    }

    /// Drops every cached compilation.
    pub fn clear(&self) {
        self.cache.clear();
    }

    /// Returns the number of graphs currently cached.
    #[must_use]
    pub fn cached_graphs(&self) -> usize {
        self.cache.len()
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for PathEngine {
    fn default() -> Self {
        Self::new()
    }
}
