//! # Generators
//!
//! Parametric building parts. Each kind has a parameter struct of optional
//! fields and a resolved settings struct; generation runs the same steps
//! for every kind:
//!
//! 1. resolve the parameters against the kind's defaults,
//! 2. emit local-space quads and triangles into a fresh [`MeshBuffer`],
//! 3. place every vertex (rotate, translate, scale by the grid unit).
//!
//! ## Local Frame
//!
//! X runs along the part's length, Y is up and Z is depth. Wall-like parts
//! put their outer face on `z = 0` facing +Z, with the building interior
//! towards -Z.

pub mod arch;
pub mod corner_roof;
pub mod gable;
pub mod line;
pub mod pillar;
pub mod plane;
pub mod roof;
pub mod wall;
pub mod window;

pub use arch::{ArchParams, ArchSettings};
pub use corner_roof::{CornerRoofParams, CornerRoofSettings};
pub use gable::{GableParams, GableSettings};
pub use line::{LineParams, LineSettings};
pub use pillar::{PillarParams, PillarSettings};
pub use plane::{PlaneParams, PlaneSettings};
pub use roof::{RoofSlopeParams, RoofSlopeSettings};
pub use wall::{WallParams, WallSettings};
pub use window::{WindowFrameParams, WindowFrameSettings};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::mesh::MeshBuffer;
use crate::placement::Placement;

/// One building part and its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeParams {
    Plane(PlaneParams),
    Wall(WallParams),
    RoofSlope(RoofSlopeParams),
    CornerRoof(CornerRoofParams),
    Gable(GableParams),
    Arch(ArchParams),
    Pillar(PillarParams),
    Line(LineParams),
    WindowFrame(WindowFrameParams),
}

impl ShapeParams {
    /// Short name of the part kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeParams::Plane(_) => "plane",
            ShapeParams::Wall(_) => "wall",
            ShapeParams::RoofSlope(_) => "roof_slope",
            ShapeParams::CornerRoof(_) => "corner_roof",
            ShapeParams::Gable(_) => "gable",
            ShapeParams::Arch(_) => "arch",
            ShapeParams::Pillar(_) => "pillar",
            ShapeParams::Line(_) => "line",
            ShapeParams::WindowFrame(_) => "window_frame",
        }
    }
}

/// Resolve-then-emit contract shared by every part kind.
///
/// Dispatch goes through [`ShapeParams`] and [`generate`]; the trait is
/// public so callers can inspect resolved settings.
pub trait ShapeGenerator {
    type Settings;

    /// Fills absent fields with the kind's defaults.
    fn resolve(&self) -> Self::Settings;

    /// Emits local-space geometry.
    fn emit(settings: &Self::Settings, mesh: &mut MeshBuffer);
}

fn run<G: ShapeGenerator>(params: &G, placement: &Placement, grid_unit: f64) -> MeshBuffer {
    let settings = params.resolve();
    let mut mesh = MeshBuffer::new();
    G::emit(&settings, &mut mesh);
    mesh.transform(&placement.matrix(grid_unit));
    mesh
}

/// Generates one part in world space.
///
/// Missing parameters fall back to defaults and dimensions are not
/// validated: zero or negative extents produce zero-area or inside-out
/// geometry rather than an error.
///
/// # Example
///
/// ```rust
/// use plotgen_mesh::{generate, Placement, ShapeParams, WallParams};
///
/// let params = ShapeParams::Wall(WallParams { length: Some(4.0), ..Default::default() });
/// let mesh = generate(&params, &Placement::IDENTITY, 3.0);
/// let (_, max) = mesh.bounding_box();
/// assert_eq!(max.x, 12.0);
/// ```
pub fn generate(shape: &ShapeParams, placement: &Placement, grid_unit: f64) -> MeshBuffer {
    let mesh = match shape {
        ShapeParams::Plane(p) => run(p, placement, grid_unit),
        ShapeParams::Wall(p) => run(p, placement, grid_unit),
        ShapeParams::RoofSlope(p) => run(p, placement, grid_unit),
        ShapeParams::CornerRoof(p) => run(p, placement, grid_unit),
        ShapeParams::Gable(p) => run(p, placement, grid_unit),
        ShapeParams::Arch(p) => run(p, placement, grid_unit),
        ShapeParams::Pillar(p) => run(p, placement, grid_unit),
        ShapeParams::Line(p) => run(p, placement, grid_unit),
        ShapeParams::WindowFrame(p) => run(p, placement, grid_unit),
    };
    trace!(
        kind = shape.kind(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated part"
    );
    mesh
}
