//! # Poros
//!
//! A cached shortest-path query engine for weighted graphs.
//!
//! If you're new here, start with [`PathEngine`] - that's your entry point
//! for compiling graphs and running queries. Supply an adjacency mapping and
//! a stable [`GraphId`] handle; the engine compiles the graph once into an
//! immutable, query-ready structure and answers every later query under that
//! handle from the cached compilation.
//!
//! ## Quick Start
//!
//! ```rust
//! use poros::{Graph, GraphId, PathEngine};
//!
//! let graph = Graph::from_adjacency([
//!     ("A", vec![("B", 2.0), ("C", 5.0)]),
//!     ("B", vec![("A", 2.0), ("D", 3.0)]),
//!     ("C", vec![("D", 1.0)]),
//! ]);
//!
//! let engine = PathEngine::new();
//! let cost = engine.shortest_path_cost(GraphId::new(1), &graph, "A", "D")?;
//! assert_eq!(cost, Some(5.0));
//!
//! // Unreachable destinations are a normal outcome, not an error.
//! let cost = engine.shortest_path_cost(GraphId::new(1), &graph, "D", "A")?;
//! assert_eq!(cost, None);
//! # Ok::<(), poros::Error>(())
//! ```

// Re-export the main engine API
pub use poros_core::{CompiledGraph, CompiledGraphCache, EngineConfig, Graph, PathEngine};

// Re-export core types - you'll need these for handles and errors
pub use poros_common::{Error, GraphId, Result, VertexId};
