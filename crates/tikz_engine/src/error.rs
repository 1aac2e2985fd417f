//! Geometry errors
//!
//! Every failure is raised synchronously by the call that detects it. Nothing
//! is deferred to render time.

use thiserror::Error;

/// Errors raised while building or transforming drawables
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A linear system needed to fit a curve or intersect lines is singular
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// A curve orientation selector outside {0, 1}
    #[error("Invalid axis selector: {0} (expected 0 or 1)")]
    InvalidAxisSelector(u8),

    /// The operation's inputs do not meet its preconditions
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),
}
