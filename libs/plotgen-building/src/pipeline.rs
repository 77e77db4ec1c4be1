//! # Building Pipeline
//!
//! ```text
//! seed ──► BuildingPlan ──► OccupancyGrid ──► ContourPath
//!                                                 │
//!                   walls, trim, façade, roof ◄───┘
//!                                │
//!                           combine + place ──► MeshBuffer
//! ```
//!
//! Each building is generated inside a substream seeded by the request, so
//! the caller's stream is left exactly where it was and equal seeds always
//! produce equal plans.

use config::constants::{GenerationConfig, MAX_FACADE_DETAIL, MAX_TRIM_DETAIL};
use plotgen_footprint::trace_boundary;
use plotgen_mesh::{combine, MeshBuffer, Placement};
use plotgen_rng::RandomContext;
use tracing::debug;

use crate::context::GenerationContext;
use crate::error::BuildingResult;
use crate::facade;
use crate::plan::{BuildingPlan, RoofStyle};
use crate::request::BuildingRequest;
use crate::roof;

/// Generates one building in world space.
///
/// An empty footprint (a zero-sized plot) yields an empty buffer.
///
/// # Example
///
/// ```rust
/// use plotgen_building::{generate_building, BuildingRequest, GenerationContext};
///
/// let mut ctx = GenerationContext::default();
/// let mesh = generate_building(&mut ctx, &BuildingRequest::new(7, 5, 4)).unwrap();
/// assert!(mesh.triangle_count() > 0);
/// assert!(mesh.validate().is_ok());
/// ```
pub fn generate_building(
    ctx: &mut GenerationContext,
    request: &BuildingRequest,
) -> BuildingResult<MeshBuffer> {
    let (rng, tables, config) = ctx.parts();
    let mut stream = rng.substream(request.seed);
    let plan = BuildingPlan::draw(&mut stream, tables, config, request);
    assemble(&plan, request, config, &mut stream)
}

/// Generates `levels` detail levels of one building, most detailed first.
///
/// Every level replays the same substream, so all levels share the
/// footprint, storey count and roof; coarser levels drop façade detail.
pub fn generate_detail_levels(
    ctx: &mut GenerationContext,
    request: &BuildingRequest,
    levels: u32,
) -> BuildingResult<Vec<MeshBuffer>> {
    (0..levels)
        .map(|level| generate_building(ctx, &request.at_detail(level)))
        .collect()
}

/// Generates as many detail levels as the context's configuration asks for.
///
/// # Example
///
/// ```rust
/// use plotgen_building::{generate_all_levels, BuildingRequest, GenerationContext};
///
/// let mut ctx = GenerationContext::configured(1, 1.0, 2, 1..=2).unwrap();
/// let levels = generate_all_levels(&mut ctx, &BuildingRequest::new(3, 4, 4)).unwrap();
/// assert_eq!(levels.len(), 2);
/// ```
pub fn generate_all_levels(
    ctx: &mut GenerationContext,
    request: &BuildingRequest,
) -> BuildingResult<Vec<MeshBuffer>> {
    let levels = ctx.config.detail_levels;
    generate_detail_levels(ctx, request, levels)
}

/// Draws the plan for `request` without building anything.
pub fn plan_building(ctx: &mut GenerationContext, request: &BuildingRequest) -> BuildingPlan {
    let (rng, tables, config) = ctx.parts();
    let mut stream = rng.substream(request.seed);
    BuildingPlan::draw(&mut stream, tables, config, request)
}

fn assemble(
    plan: &BuildingPlan,
    request: &BuildingRequest,
    config: &GenerationConfig,
    rng: &mut RandomContext,
) -> BuildingResult<MeshBuffer> {
    let grid = plan.shape.rasterize(request.plot_width, request.plot_depth);
    let contour = trace_boundary(&grid)?;
    if contour.is_empty() {
        return Ok(MeshBuffer::new());
    }

    let height = plan.wall_height();
    let trim = request.detail <= MAX_TRIM_DETAIL;
    let facade_detail = request.detail <= MAX_FACADE_DETAIL;

    let mut parts = facade::walls(&contour, height);
    if trim {
        parts.extend(facade::corner_pillars(&contour, height));
    }
    if facade_detail {
        parts.extend(rng.with_substream(plan.facade_seed, |facade_rng| {
            facade::windows(&contour, plan.storeys, facade_rng)
        }));
        parts.extend(facade::door(&contour));
    }

    match plan.roof {
        RoofStyle::Flat => {
            parts.extend(roof::flat(&grid, height));
            if trim {
                parts.extend(facade::parapets(&contour, height));
            }
        }
        RoofStyle::Gable => parts.extend(roof::gable(&contour, height, plan.roof_rise)),
        RoofStyle::Hip => parts.extend(roof::hip(&contour, height, plan.roof_rise)),
    }

    let mut mesh = combine(&parts);
    mesh.transform(&Placement::from_yaw(request.yaw, request.origin).matrix(config.grid_unit));
    mesh.validate()?;

    debug!(
        seed = request.seed,
        detail = request.detail,
        runs = contour.runs().len(),
        parts = parts.len(),
        triangles = mesh.triangle_count(),
        "assembled building"
    );
    Ok(mesh)
}
