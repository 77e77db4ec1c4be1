//! # plotgen Footprint
//!
//! Which unit cells of a plot a building occupies, and the closed outline
//! that walls are laid along.
//!
//! ## Pipeline
//!
//! ```text
//! FootprintShape ──rasterize──► OccupancyGrid ──trace_boundary──► ContourPath
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use plotgen_footprint::{trace_boundary, FootprintShape};
//!
//! let grid = FootprintShape::Rectangle.rasterize(4, 3);
//! let contour = trace_boundary(&grid).unwrap();
//! assert_eq!(contour.runs().len(), 4);
//! assert_eq!(contour.perimeter(), 14);
//! ```

pub mod contour;
pub mod error;
pub mod grid;
pub mod shape;

pub use contour::{simplify, trace_boundary, ContourPath, ContourRun, Direction};
pub use error::FootprintError;
pub use grid::OccupancyGrid;
pub use shape::{Corner, FootprintShape};
