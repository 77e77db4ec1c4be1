//! # Config Crate
//!
//! Centralized configuration constants for the plotgen building pipeline.
//! Grid scale, default shape dimensions, material channel indices and
//! tolerances live here so the generator crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GRID_UNIT, DEFAULT_WALL_THICKNESS, CHANNEL_WALL};
//!
//! // Generator dimensions are expressed in grid units
//! let thickness_in_meters = DEFAULT_WALL_THICKNESS * GRID_UNIT;
//! assert!(thickness_in_meters > 0.0);
//! assert_eq!(CHANNEL_WALL, 0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Grid Units**: Every length is measured in grid cells, scaled to meters
//!   by [`constants::GRID_UNIT`] at the very end of generation
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
