//! Error types for triangulation operations.

use thiserror::Error;

/// Errors that can occur while building a triangulation.
///
/// Every variant is fatal to the call that produced it: a failed
/// [`Triangulator::run`](crate::triangulation::Triangulator::run) yields no
/// partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangulationError {
    /// A coordinate is NaN or infinite.
    #[error("invalid input: coordinates ({x}, {y}) are not finite")]
    InvalidInput {
        /// The offending x coordinate, widened to `f64`.
        x: f64,
        /// The offending y coordinate, widened to `f64`.
        y: f64,
    },

    /// No points were supplied.
    #[error("empty input: at least one point is required")]
    EmptyInput,

    /// Coincident points were passed where distinct points are required.
    #[error("degenerate input: coincident points")]
    DegenerateInput,

    /// The sites span a range too large for an enclosing super-triangle to be
    /// represented in the coordinate type.
    #[error("coordinates out of range: the enclosing super-triangle overflows")]
    OutOfRange,

    /// The triangulator configuration is unusable.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        reason: &'static str,
    },

    /// An insertion observer asked the triangulator to stop.
    #[error("triangulation cancelled after {inserted} insertions")]
    Cancelled {
        /// Number of sites inserted before cancellation.
        inserted: usize,
    },
}
