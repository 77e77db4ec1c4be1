//! # Roofs
//!
//! Flat roofs follow the occupancy grid row by row and work for any
//! footprint. Gable and hip roofs are laid along the contour of a
//! rectangular footprint, reusing the wall frames of its four runs.

use config::constants::EPSILON;
use glam::DVec3;
use plotgen_footprint::{ContourPath, OccupancyGrid};
use plotgen_mesh::{
    generate, CornerRoofParams, GableParams, MeshBuffer, PlaneParams, Placement, RoofSlopeParams,
    ShapeParams,
};

use crate::facade::{run_placement, runs_with_corners};

/// One roof plane per solid row stretch, at `height`.
pub fn flat(grid: &OccupancyGrid, height: f64) -> Vec<MeshBuffer> {
    (0..grid.height())
        .flat_map(|y| {
            grid.row_runs(y).into_iter().map(move |(x0, x1)| {
                let plane = ShapeParams::Plane(PlaneParams {
                    length: Some((x1 - x0) as f64),
                    width: Some(1.0),
                    ..Default::default()
                });
                generate(
                    &plane,
                    &Placement::at(DVec3::new(x0 as f64, height, y as f64)),
                    1.0,
                )
            })
        })
        .collect()
}

/// Length of the run that follows run `index`: the span across a
/// rectangle measured from that run's wall.
fn across(contour: &ContourPath, index: usize) -> f64 {
    let runs = contour.runs();
    runs[(index + 1) % runs.len()].length as f64
}

/// Two slopes along the longer sides, gables on the shorter ones.
pub fn gable(contour: &ContourPath, height: f64, rise: f64) -> Vec<MeshBuffer> {
    let runs = contour.runs();
    if runs.len() != 4 {
        return Vec::new();
    }
    // Squares put the ridge along X
    let eave_parity = usize::from(runs[1].length >= runs[0].length);

    runs_with_corners(contour)
        .enumerate()
        .map(|(index, (corner, run))| {
            let length = run.length as f64;
            let shape = if index % 2 == eave_parity {
                ShapeParams::RoofSlope(RoofSlopeParams {
                    length: Some(length),
                    run: Some(across(contour, index) / 2.0),
                    rise: Some(rise),
                    ..Default::default()
                })
            } else {
                ShapeParams::Gable(GableParams {
                    width: Some(length),
                    rise: Some(rise),
                    ..Default::default()
                })
            };
            generate(&shape, &run_placement(corner, run, height), 1.0)
        })
        .collect()
}

/// Corner pieces on every corner and straight slopes between them.
///
/// The hips run at 45 degrees in plan, so the ridge is as long as the
/// difference between the two sides and vanishes on a square.
pub fn hip(contour: &ContourPath, height: f64, rise: f64) -> Vec<MeshBuffer> {
    let runs = contour.runs();
    if runs.len() != 4 {
        return Vec::new();
    }
    let half = runs.iter().map(|r| r.length).min().unwrap_or(0) as f64 / 2.0;
    let corner_piece = ShapeParams::CornerRoof(CornerRoofParams {
        size: Some(half),
        rise: Some(rise),
        ..Default::default()
    });

    let mut meshes = Vec::with_capacity(8);
    for (corner, run) in runs_with_corners(contour) {
        let frame = run_placement(corner, run, height);
        meshes.push(generate(&corner_piece, &frame, 1.0));

        let middle = run.length as f64 - 2.0 * half;
        if middle > EPSILON {
            let slope = ShapeParams::RoofSlope(RoofSlopeParams {
                length: Some(middle),
                run: Some(half),
                rise: Some(rise),
                overhang: Some(0.0),
                thickness: Some(0.0),
                ..Default::default()
            });
            let local = Placement::at(DVec3::new(half, 0.0, 0.0));
            meshes.push(generate(&slope, &local.then(&frame), 1.0));
        }
    }
    meshes
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use config::constants::{CHANNEL_ROOF, CHANNEL_WALL};
    use plotgen_footprint::{trace_boundary, Corner, FootprintShape};
    use plotgen_mesh::combine;

    fn rectangle(width: u32, depth: u32) -> ContourPath {
        trace_boundary(&FootprintShape::Rectangle.rasterize(width, depth)).unwrap()
    }

    fn upward(mesh: &MeshBuffer) -> bool {
        mesh.channel_triangles(CHANNEL_ROOF)
            .all(|t| (t[1] - t[0]).cross(t[2] - t[0]).y > -1e-9)
    }

    #[test]
    fn test_flat_covers_l_shape() {
        let grid = FootprintShape::LShape {
            cut_width: 2,
            cut_depth: 2,
            corner: Corner::NorthEast,
        }
        .rasterize(5, 4);
        let planes = flat(&grid, 2.0);
        assert_eq!(planes.len(), 4);
        let area: f64 = planes
            .iter()
            .map(|p| {
                let (min, max) = p.bounding_box();
                (max.x - min.x) * (max.z - min.z)
            })
            .sum();
        assert_relative_eq!(area, grid.solid_count() as f64, epsilon = 1e-9);
        assert!(planes.iter().all(upward));
    }

    #[test]
    fn test_gable_ridge_along_longer_side() {
        let contour = rectangle(6, 2);
        let pieces = gable(&contour, 1.0, 0.5);
        assert_eq!(pieces.len(), 4);
        let roof = combine(&pieces);
        assert_eq!(roof.channel_indices(CHANNEL_WALL).len(), 2 * 3);

        // Ridge points sit halfway across the depth
        let top = roof
            .vertices()
            .iter()
            .filter(|v| (v.y - 1.5).abs() < 1e-9)
            .collect::<Vec<_>>();
        assert!(!top.is_empty());
        for v in top {
            assert_relative_eq!(v.z, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_gable_on_deep_plot_turns_ridge() {
        let roof = combine(&gable(&rectangle(2, 6), 1.0, 0.5));
        for v in roof.vertices().iter().filter(|v| (v.y - 1.5).abs() < 1e-9) {
            assert_relative_eq!(v.x, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_hip_on_rectangle() {
        let contour = rectangle(6, 4);
        let pieces = hip(&contour, 1.0, 0.5);
        // Four corners, two middle slopes on the long sides
        assert_eq!(pieces.len(), 6);
        let roof = combine(&pieces);
        assert!(upward(&roof));
        let (min, max) = roof.bounding_box();
        assert_relative_eq!(min.y, 1.0, epsilon = 1e-9);
        assert_relative_eq!(max.y, 1.5, epsilon = 1e-9);
        // Ridge runs from x = 2 to x = 4 along z = 2
        for v in roof.vertices().iter().filter(|v| (v.y - 1.5).abs() < 1e-9) {
            assert_relative_eq!(v.z, 2.0, epsilon = 1e-9);
            assert!(v.x > 2.0 - 1e-9 && v.x < 4.0 + 1e-9);
        }
    }

    #[test]
    fn test_hip_on_square_is_pyramid() {
        let pieces = hip(&rectangle(4, 4), 0.0, 1.0);
        assert_eq!(pieces.len(), 4);
        let roof = combine(&pieces);
        for v in roof.vertices().iter().filter(|v| v.y > 0.5) {
            assert_relative_eq!(v.x, 2.0, epsilon = 1e-9);
            assert_relative_eq!(v.z, 2.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_pitched_roofs_need_four_runs() {
        let grid = FootprintShape::TShape {
            stem_width: 2,
            cut_depth: 1,
        }
        .rasterize(4, 3);
        let contour = trace_boundary(&grid).unwrap();
        assert!(gable(&contour, 1.0, 0.5).is_empty());
        assert!(hip(&contour, 1.0, 0.5).is_empty());
    }
}
