//! # Façade
//!
//! Walls and wall-mounted detail laid along a traced contour.
//!
//! Lattice point `(x, y)` maps to the building-local point `(x, 0, y)`.
//! The tracer keeps solid cells on its left, so a wall placed with its
//! local +X along a run has its outer face (+Z) pointing out of the
//! building and its thickness reaching inside.

use config::constants::{
    DEFAULT_ARCH_HEIGHT, DEFAULT_ARCH_WIDTH, DEFAULT_DOOR_DEPTH, DEFAULT_WINDOW_HEIGHT,
    DEFAULT_WINDOW_WIDTH, STOREY_HEIGHT,
};
use glam::{DVec3, IVec2};
use plotgen_footprint::{ContourPath, ContourRun};
use plotgen_mesh::{
    generate, ArchParams, LineParams, MeshBuffer, PillarParams, Placement, ShapeParams,
    WallParams, WindowFrameParams,
};
use plotgen_rng::RandomContext;

/// Probability that a wall cell gets a window on a given storey.
pub const WINDOW_CHANCE: f64 = 0.75;

/// Building-local frame of a contour run: origin at the run's first corner,
/// lifted to `height`, local +X along the run.
pub fn run_placement(corner: IVec2, run: &ContourRun, height: f64) -> Placement {
    let step = run.direction.offset();
    Placement::from_yaw(
        Placement::yaw_towards(step.x as f64, step.y as f64),
        DVec3::new(corner.x as f64, height, corner.y as f64),
    )
}

/// Pairs each run with the lattice point it starts at.
pub fn runs_with_corners(
    contour: &ContourPath,
) -> impl Iterator<Item = (IVec2, &ContourRun)> + '_ {
    contour.corners().into_iter().zip(contour.runs())
}

/// One wall segment per contour run.
pub fn walls(contour: &ContourPath, height: f64) -> Vec<MeshBuffer> {
    runs_with_corners(contour)
        .map(|(corner, run)| {
            let wall = ShapeParams::Wall(WallParams {
                length: Some(run.length as f64),
                height: Some(height),
                ..Default::default()
            });
            generate(&wall, &run_placement(corner, run, 0.0), 1.0)
        })
        .collect()
}

/// A pillar on every contour corner.
pub fn corner_pillars(contour: &ContourPath, height: f64) -> Vec<MeshBuffer> {
    let pillar = ShapeParams::Pillar(PillarParams {
        height: Some(height),
        ..Default::default()
    });
    contour
        .corners()
        .into_iter()
        .map(|corner| {
            let at = Placement::at(DVec3::new(corner.x as f64, 0.0, corner.y as f64));
            generate(&pillar, &at, 1.0)
        })
        .collect()
}

/// Cell index of the door on the first run, if that run is long enough.
pub fn door_cell(contour: &ContourPath) -> Option<u32> {
    contour
        .runs()
        .first()
        .filter(|run| run.length >= 2)
        .map(|run| run.length / 2)
}

/// Arched door surround centered in [`door_cell`] of the first run.
///
/// The arch is lifted `DEFAULT_DOOR_DEPTH` off the wall and extruded back to
/// the outer face, so the whole surround stands in front of the wall.
pub fn door(contour: &ContourPath) -> Option<MeshBuffer> {
    let cell = door_cell(contour)?;
    let (corner, run) = runs_with_corners(contour).next()?;
    let arch = ShapeParams::Arch(ArchParams {
        width: Some(DEFAULT_ARCH_WIDTH),
        height: Some(DEFAULT_ARCH_HEIGHT),
        thickness: Some(DEFAULT_DOOR_DEPTH),
        ..Default::default()
    });
    let local = Placement::at(DVec3::new(
        cell as f64 + (1.0 - DEFAULT_ARCH_WIDTH) / 2.0,
        0.0,
        DEFAULT_DOOR_DEPTH,
    ));
    Some(generate(&arch, &local.then(&run_placement(corner, run, 0.0)), 1.0))
}

/// Window frames centered in wall cells, one chance draw per cell and
/// storey in run order. The door cell stays free on the ground floor.
pub fn windows(contour: &ContourPath, storeys: u32, rng: &mut RandomContext) -> Vec<MeshBuffer> {
    let frame = ShapeParams::WindowFrame(WindowFrameParams::default());
    let door = door_cell(contour);
    let inset = (1.0 - DEFAULT_WINDOW_WIDTH) / 2.0;
    let sill = (STOREY_HEIGHT - DEFAULT_WINDOW_HEIGHT) / 2.0;

    let mut meshes = Vec::new();
    for (index, (corner, run)) in runs_with_corners(contour).enumerate() {
        let wall = run_placement(corner, run, 0.0);
        for storey in 0..storeys {
            for cell in 0..run.length {
                let placed = rng.chance(WINDOW_CHANCE);
                if !placed || (index == 0 && storey == 0 && Some(cell) == door) {
                    continue;
                }
                let local = Placement::at(DVec3::new(
                    cell as f64 + inset,
                    storey as f64 * STOREY_HEIGHT + sill,
                    0.0,
                ));
                meshes.push(generate(&frame, &local.then(&wall), 1.0));
            }
        }
    }
    meshes
}

/// Coping along the top of every wall.
pub fn parapets(contour: &ContourPath, height: f64) -> Vec<MeshBuffer> {
    runs_with_corners(contour)
        .map(|(corner, run)| {
            let coping = ShapeParams::Line(LineParams {
                extrusion: Some(run.length as f64),
                ..Default::default()
            });
            generate(&coping, &run_placement(corner, run, height), 1.0)
        })
        .collect()
}
