//! Error handling for the arcstep motion kernel
//!
//! All geometric preconditions are validated once, before a stepping loop
//! starts, and reported synchronously to the command's caller. The loop
//! itself has no internal failure path.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Motion kernel error type
///
/// Represents errors raised while validating or preparing an arc command.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    /// Start and end points coincide, so the chord normal is undefined.
    #[error("Degenerate chord: start and end coincide at ({x:.4}, {y:.4})")]
    DegenerateChord {
        /// X coordinate shared by both endpoints.
        x: f64,
        /// Y coordinate shared by both endpoints.
        y: f64,
    },

    /// The chord is longer than the arc diameter; no real center exists.
    #[error("Arc not realizable: chord length {chord:.4} exceeds diameter {diameter:.4}")]
    GeometricallyInfeasible {
        /// Straight-line distance between the endpoints.
        chord: f64,
        /// Twice the magnitude of the requested radius.
        diameter: f64,
    },

    /// A zero radius cannot describe an arc.
    #[error("Arc radius must be non-zero")]
    ZeroRadius,

    /// An axis scale was zero, negative, or non-finite.
    #[error("Axis scale for {axis} must be positive and finite, got {value}")]
    InvalidAxisScale {
        /// The offending axis, `'x'` or `'y'`.
        axis: char,
        /// The rejected scale value.
        value: f64,
    },

    /// A coordinate or radius was NaN or infinite.
    #[error("Non-finite input: {context}")]
    NonFiniteInput {
        /// Which quantity failed the finiteness check.
        context: String,
    },
}

/// Convenience result type for motion kernel operations
pub type Result<T> = std::result::Result<T, MotionError>;
