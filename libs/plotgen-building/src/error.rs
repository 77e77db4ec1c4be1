//! # Building Errors
//!
//! Failures that abort one building. Each wraps the error of the stage that
//! raised it.

use config::constants::ConfigError;
use plotgen_footprint::FootprintError;
use plotgen_mesh::MeshError;
use thiserror::Error;

/// Errors raised while generating a building.
#[derive(Debug, Error, PartialEq)]
pub enum BuildingError {
    #[error("Invalid generation config: {0}")]
    Config(#[from] ConfigError),

    #[error("Footprint tracing failed: {0}")]
    Footprint(#[from] FootprintError),

    #[error("Assembled mesh is inconsistent: {0}")]
    Mesh(#[from] MeshError),
}

/// Result type alias for building operations.
pub type BuildingResult<T> = Result<T, BuildingError>;
