//! Error types for Poros.

use thiserror::Error;

/// The error type shared by all Poros crates.
///
/// Reaching an unreachable destination is not an error; queries signal that
/// through their `Option` result. Errors here are reserved for inputs the
/// engine refuses to compile.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An edge carried a negative weight. Dijkstra's algorithm requires
    /// non-negative weights, so the graph is rejected at compile time.
    #[error("negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        /// Source vertex label of the offending edge.
        from: String,
        /// Destination vertex label of the offending edge.
        to: String,
        /// The rejected weight.
        weight: f64,
    },

    /// An edge carried a NaN or infinite weight.
    #[error("non-finite weight on edge {from} -> {to}")]
    NonFiniteWeight {
        /// Source vertex label of the offending edge.
        from: String,
        /// Destination vertex label of the offending edge.
        to: String,
    },
}

/// A specialized `Result` type for Poros operations.
pub type Result<T> = std::result::Result<T, Error>;
