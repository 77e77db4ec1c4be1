//! Tests for boundary tracing and run simplification.

use super::*;
use crate::shape::{Corner, FootprintShape};
use Direction::*;

/// Builds a grid from rows of `#` (solid) and `.` (empty).
fn grid_from(rows: &[&str]) -> OccupancyGrid {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.len());
    let mut grid = OccupancyGrid::new(width, height, false);
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            grid.set(x as i32, y as i32, c == '#');
        }
    }
    grid
}

fn runs_of(path: &ContourPath) -> Vec<(Direction, u32)> {
    path.runs().iter().map(|r| (r.direction, r.length)).collect()
}

// =============================================================================
// Lattice codes
// =============================================================================

#[test]
fn lattice_code_bits() {
    let grid = grid_from(&["#.", ".#"]);
    assert_eq!(lattice_code(&grid, IVec2::new(1, 1)), 1 | 8);
    assert_eq!(lattice_code(&grid, IVec2::new(0, 0)), 8);
    assert_eq!(lattice_code(&grid, IVec2::new(2, 2)), 1);
    assert_eq!(lattice_code(&grid, IVec2::new(5, 5)), 0);
}

#[test]
fn trivial_codes_have_no_step() {
    assert_eq!(step_for(0, None), None);
    assert_eq!(step_for(15, Some(East)), None);
}

#[test]
fn saddle_rules() {
    assert_eq!(step_for(6, Some(North)), Some(West));
    assert_eq!(step_for(6, Some(South)), Some(East));
    assert_eq!(step_for(6, None), Some(East));
    assert_eq!(step_for(9, Some(East)), Some(North));
    assert_eq!(step_for(9, Some(West)), Some(South));
    assert_eq!(step_for(9, None), Some(South));
}

// =============================================================================
// Tracing
// =============================================================================

#[test]
fn trace_rectangle() {
    let grid = grid_from(&["####", "####", "####"]);
    let path = trace_boundary(&grid).unwrap();
    assert_eq!(path.start(), IVec2::new(0, 0));
    assert_eq!(
        runs_of(&path),
        vec![(South, 3), (East, 4), (North, 3), (West, 4)]
    );
    assert_eq!(path.perimeter(), 14);
    assert!(path.is_closed());
    assert_eq!(
        path.corners(),
        vec![
            IVec2::new(0, 0),
            IVec2::new(0, 3),
            IVec2::new(4, 3),
            IVec2::new(4, 0)
        ]
    );
}

#[test]
fn trace_single_cell() {
    let grid = grid_from(&["#"]);
    let path = trace_boundary(&grid).unwrap();
    assert_eq!(
        runs_of(&path),
        vec![(South, 1), (East, 1), (North, 1), (West, 1)]
    );
}

#[test]
fn trace_starts_at_first_solid_cell() {
    let grid = grid_from(&["....", "..##", ".###", "..#."]);
    let path = trace_boundary(&grid).unwrap();
    assert_eq!(path.start(), IVec2::new(2, 1));
    assert_eq!(
        runs_of(&path),
        vec![
            (South, 1),
            (West, 1),
            (South, 1),
            (East, 1),
            (South, 1),
            (East, 1),
            (North, 1),
            (East, 1),
            (North, 2),
            (West, 2)
        ]
    );
    assert_eq!(path.perimeter(), 12);
    assert!(path.is_closed());
}

#[test]
fn trace_through_saddle_point() {
    // The hole at (1,1) touches the outside only diagonally, so lattice
    // point (2,1) is a saddle visited twice.
    let grid = grid_from(&["##.", "#.#", "###"]);
    let path = trace_boundary(&grid).unwrap();
    assert_eq!(
        runs_of(&path),
        vec![
            (South, 3),
            (East, 3),
            (North, 2),
            (West, 1),
            (South, 1),
            (West, 1),
            (North, 1),
            (East, 1),
            (North, 1),
            (West, 2)
        ]
    );
    assert_eq!(path.perimeter(), 16);
    assert!(path.is_closed());
}

#[test]
fn trace_keeps_diagonal_regions_apart() {
    // The lower-left cells touch the upper-right region only at a corner;
    // the walk outlines the region holding the first solid cell.
    let grid = grid_from(&[".##", "#.#", "##."]);
    let path = trace_boundary(&grid).unwrap();
    assert_eq!(path.start(), IVec2::new(1, 0));
    assert_eq!(
        runs_of(&path),
        vec![
            (South, 1),
            (East, 1),
            (South, 1),
            (East, 1),
            (North, 2),
            (West, 2)
        ]
    );
    assert!(path.is_closed());
}

#[test]
fn trace_notched_edges() {
    let top_notch = trace_boundary(&grid_from(&["#.#", "###"])).unwrap();
    assert_eq!(top_notch.perimeter(), 12);
    assert_eq!(top_notch.runs().len(), 8);

    let bottom_notch = trace_boundary(&grid_from(&["###", "#.#"])).unwrap();
    assert_eq!(
        runs_of(&bottom_notch),
        vec![
            (South, 2),
            (East, 1),
            (North, 1),
            (East, 1),
            (South, 1),
            (East, 1),
            (North, 2),
            (West, 3)
        ]
    );
}

#[test]
fn trace_l_shape() {
    let shape = FootprintShape::LShape {
        cut_width: 2,
        cut_depth: 2,
        corner: Corner::NorthEast,
    };
    let path = trace_boundary(&shape.rasterize(6, 5)).unwrap();
    assert_eq!(
        runs_of(&path),
        vec![
            (South, 5),
            (East, 6),
            (North, 3),
            (West, 2),
            (North, 2),
            (West, 4)
        ]
    );
    assert_eq!(path.perimeter(), 22);
}

#[test]
fn trace_t_shape() {
    let shape = FootprintShape::TShape {
        stem_width: 3,
        cut_depth: 2,
    };
    let path = trace_boundary(&shape.rasterize(7, 4)).unwrap();
    assert_eq!(
        runs_of(&path),
        vec![
            (South, 2),
            (East, 2),
            (South, 2),
            (East, 3),
            (North, 2),
            (East, 2),
            (North, 2),
            (West, 7)
        ]
    );
}

#[test]
fn trace_empty_grid() {
    let grid = OccupancyGrid::new(4, 4, false);
    let path = trace_boundary(&grid).unwrap();
    assert!(path.is_empty());
    assert_eq!(path.perimeter(), 0);
    assert!(path.corners().is_empty());
}

#[test]
fn traced_shapes_close_and_match_run_counts() {
    let mut shapes = vec![FootprintShape::Rectangle];
    for corner in Corner::ALL {
        for (cut_width, cut_depth) in [(1, 1), (2, 3), (4, 2)] {
            shapes.push(FootprintShape::LShape {
                cut_width,
                cut_depth,
                corner,
            });
        }
    }
    for (stem_width, cut_depth) in [(1, 1), (2, 2), (3, 4)] {
        shapes.push(FootprintShape::TShape {
            stem_width,
            cut_depth,
        });
    }

    for shape in shapes {
        for (w, d) in [(5, 6), (8, 7), (9, 5)] {
            let grid = shape.rasterize(w, d);
            let path = trace_boundary(&grid).unwrap();
            assert!(path.is_closed(), "{shape:?} on {w}x{d}");
            assert_eq!(path.runs().len(), shape.expected_runs(), "{shape:?} on {w}x{d}");
            // Runs alternate between horizontal and vertical
            for pair in path.runs().windows(2) {
                let (a, b) = (pair[0].direction.offset(), pair[1].direction.offset());
                assert_eq!(a.dot(b), 0);
            }
            let steps = path.raw_steps().count() as u32;
            assert_eq!(steps, path.perimeter());
        }
    }
}

// =============================================================================
// Simplification
// =============================================================================

#[test]
fn simplify_merges_repeats() {
    let path = simplify(IVec2::ZERO, &[South, South, East, East, East, North, North, West, West, West]);
    assert_eq!(
        runs_of(&path),
        vec![(South, 2), (East, 3), (North, 2), (West, 3)]
    );
    assert_eq!(path.start(), IVec2::ZERO);
}

#[test]
fn simplify_joins_wrapping_run() {
    // Starting mid-edge: the trailing East run continues the leading one
    let path = simplify(IVec2::new(1, 0), &[East, South, West, West, North, East]);
    assert_eq!(
        runs_of(&path),
        vec![(East, 2), (South, 1), (West, 2), (North, 1)]
    );
    assert_eq!(path.start(), IVec2::new(0, 0));
    assert!(path.is_closed());
}

#[test]
fn simplify_single_direction_is_not_joined() {
    let path = simplify(IVec2::ZERO, &[East, East]);
    assert_eq!(runs_of(&path), vec![(East, 2)]);
    assert!(!path.is_closed());
}

#[test]
fn simplify_empty() {
    let path = simplify(IVec2::new(3, 3), &[]);
    assert!(path.is_empty());
}
