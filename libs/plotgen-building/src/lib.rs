//! # plotgen Building
//!
//! Seeded buildings on rectangular plots. A request picks a footprint,
//! storey count and roof style, traces the footprint outline and lays
//! walls, trim and roofs along it.
//!
//! ## Usage
//!
//! ```rust
//! use plotgen_building::{generate_detail_levels, BuildingRequest, GenerationContext};
//!
//! let mut ctx = GenerationContext::default();
//! let request = BuildingRequest::new(42, 6, 4);
//! let levels = generate_detail_levels(&mut ctx, &request, 3).unwrap();
//!
//! assert_eq!(levels.len(), 3);
//! assert!(levels[0].triangle_count() >= levels[2].triangle_count());
//! ```

pub mod context;
pub mod error;
pub mod facade;
pub mod pipeline;
pub mod plan;
pub mod request;
pub mod roof;

pub use context::GenerationContext;
pub use error::{BuildingError, BuildingResult};
pub use pipeline::{
    generate_all_levels, generate_building, generate_detail_levels, plan_building,
};
pub use plan::{BuildingPlan, RoofStyle, SelectorTables};
pub use request::BuildingRequest;
