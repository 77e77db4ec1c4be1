//! # plotgen Mesh
//!
//! Triangle buffers with per-channel index lists, and the parametric part
//! generators that fill them.
//!
//! ## Pipeline
//!
//! ```text
//! ShapeParams ──generate──► MeshBuffer ──combine──► MeshBuffer
//!                  │
//!           resolve, emit, place
//! ```
//!
//! Channels are plain integers naming a material slot (wall, roof, trim,
//! glass). Vertices and UVs are shared across channels; each channel owns
//! its own triangle list.
//!
//! ## Usage
//!
//! ```rust
//! use plotgen_mesh::{combine, generate, Placement, ShapeParams, WallParams};
//! use glam::DVec3;
//!
//! let wall = ShapeParams::Wall(WallParams::default());
//! let a = generate(&wall, &Placement::IDENTITY, 1.0);
//! let b = generate(&wall, &Placement::at(DVec3::new(1.0, 0.0, 0.0)), 1.0);
//!
//! let both = combine([&a, &b]);
//! assert_eq!(both.vertex_count(), a.vertex_count() * 2);
//! assert!(both.validate().is_ok());
//! ```

pub mod aggregate;
pub mod error;
pub mod generators;
pub mod mesh;
pub mod placement;
pub mod uv;

pub use aggregate::{combine, merge};
pub use error::{MeshError, MeshResult};
pub use generators::{
    generate, ArchParams, ArchSettings, CornerRoofParams, CornerRoofSettings, GableParams,
    GableSettings, LineParams, LineSettings, PillarParams, PillarSettings, PlaneParams,
    PlaneSettings, RoofSlopeParams, RoofSlopeSettings, ShapeGenerator, ShapeParams, WallParams,
    WallSettings, WindowFrameParams, WindowFrameSettings,
};
pub use mesh::MeshBuffer;
pub use placement::Placement;
pub use uv::UvMode;
