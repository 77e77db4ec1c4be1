//! # Footprint Errors
//!
//! Error types for boundary tracing. Bounds violations and empty grids are
//! not errors; only broken tracing invariants are.

use thiserror::Error;

/// Errors that abort tracing of the current footprint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FootprintError {
    /// The walk reached a lattice point whose neighborhood has no exit.
    #[error("No contour step for lattice code {code} at ({x}, {y})")]
    UnexpectedLatticeCode { x: i32, y: i32, code: u8 },

    /// The walk did not return to its start within the step bound.
    #[error("Boundary walk did not close after {steps} steps (limit: {limit})")]
    RunawayTrace { steps: usize, limit: usize },
}

/// Result type alias for footprint operations.
pub type FootprintResult<T> = Result<T, FootprintError>;
