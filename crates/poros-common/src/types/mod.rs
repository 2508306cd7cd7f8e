//! Core type definitions for Poros.
//!
//! This module contains the identifier types used throughout the engine:
//! - [`GraphId`] - caller-supplied handle naming a graph in the cache
//! - [`VertexId`] - dense index assigned to a vertex during compilation

mod id;

pub use id::{GraphId, VertexId};
