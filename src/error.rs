//! Error types for solver construction and body editing.

use thiserror::Error;

/// Errors raised by checked solver operations.
///
/// The numerical core (integration, relaxation) never fails; these cover
/// invalid configuration and handles that do not belong to the solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// The handle was issued by a different solver.
    #[error("handle belongs to solver {found}, not solver {expected}")]
    ForeignHandle { expected: u32, found: u32 },
    /// A builder link names a vertex the builder does not have.
    #[error("point index {index} out of bounds (count: {count})")]
    PointOutOfBounds { index: usize, count: usize },
    /// Every solver id has been used; a wrapped id could alias another
    /// solver's handles.
    #[error("solver ids exhausted")]
    SolverIdsExhausted,
    /// A link must join two distinct points.
    #[error("cannot link point {index} to itself")]
    SelfLink { index: usize },
    /// Friction factor must be in (0, 1].
    #[error("friction must be in (0, 1]")]
    InvalidFriction,
    /// Bounce damping must be in [0, 1].
    #[error("bounce damping must be in [0, 1]")]
    InvalidBounceDamping,
    /// Stiffness divisor must be finite and at least 1.
    #[error("stiffness divisor must be finite and >= 1")]
    InvalidStiffnessDivisor,
    /// World bounds must be positive and finite.
    #[error("world bounds must be positive and finite")]
    InvalidBounds,
    /// Gravity must be finite.
    #[error("gravity must be finite")]
    InvalidGravity,
    /// Pick radius must be finite and non-negative.
    #[error("pick radius must be finite and non-negative")]
    InvalidPickRadius,
    /// At least one relaxation pass is required.
    #[error("relaxation iteration count must be at least 1")]
    InvalidIterations,
    /// Convergence tolerance must be positive and finite.
    #[error("convergence tolerance must be positive and finite")]
    InvalidTolerance,
}
