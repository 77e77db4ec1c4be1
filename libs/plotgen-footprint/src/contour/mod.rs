//! # Boundary Tracing
//!
//! Marching-squares walk over the lattice points between grid cells,
//! producing the exterior outline of a single solid region.
//!
//! ## Lattice Codes
//!
//! Each lattice point `(x, y)` sits at the top-left corner of cell `(x, y)`.
//! Its code is built from the four cells around it:
//!
//! ```text
//!   (x-1,y-1)=1 │ (x,y-1)=2
//!   ────────────┼──────────
//!   (x-1,y)  =4 │ (x,y)  =8
//! ```
//!
//! Every non-trivial code maps to one step that keeps solid cells on the
//! walker's left. Codes 6 and 9 are saddles (only diagonal neighbors
//! solid); their exit depends on the step that entered the point, which
//! keeps diagonally touching cells apart and the loop single.

use glam::IVec2;
use tracing::{trace, warn};

use crate::error::{FootprintError, FootprintResult};
use crate::grid::OccupancyGrid;

/// Unit step on the lattice. `North` is towards `y = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Lattice offset of one step.
    #[inline]
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::North => IVec2::new(0, -1),
            Direction::East => IVec2::new(1, 0),
            Direction::South => IVec2::new(0, 1),
            Direction::West => IVec2::new(-1, 0),
        }
    }
}

/// A straight stretch of the contour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContourRun {
    /// Heading of the stretch.
    pub direction: Direction,
    /// Number of unit steps.
    pub length: u32,
}

impl ContourRun {
    /// Displacement covered by the run.
    #[inline]
    pub fn vector(&self) -> IVec2 {
        self.direction.offset() * self.length as i32
    }
}

/// Closed, run-length compressed outline of a footprint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContourPath {
    start: IVec2,
    runs: Vec<ContourRun>,
}

impl ContourPath {
    /// A path with no runs ("nothing to build").
    pub fn empty() -> Self {
        Self::default()
    }

    /// Lattice point the walk starts and ends at.
    #[inline]
    pub fn start(&self) -> IVec2 {
        self.start
    }

    /// The compressed runs in walk order.
    #[inline]
    pub fn runs(&self) -> &[ContourRun] {
        &self.runs
    }

    /// Returns true when the path has no runs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Total number of unit steps.
    pub fn perimeter(&self) -> u32 {
        self.runs.iter().map(|r| r.length).sum()
    }

    /// The uncompressed unit-step sequence.
    pub fn raw_steps(&self) -> impl Iterator<Item = Direction> + '_ {
        self.runs
            .iter()
            .flat_map(|r| std::iter::repeat(r.direction).take(r.length as usize))
    }

    /// Sum of all steps; zero for a closed path.
    pub fn displacement(&self) -> IVec2 {
        self.runs.iter().map(ContourRun::vector).sum()
    }

    /// Returns true when the steps lead back to the start.
    pub fn is_closed(&self) -> bool {
        self.displacement() == IVec2::ZERO
    }

    /// Lattice point at the beginning of each run.
    pub fn corners(&self) -> Vec<IVec2> {
        let mut point = self.start;
        self.runs
            .iter()
            .map(|run| {
                let corner = point;
                point += run.vector();
                corner
            })
            .collect()
    }
}

/// Step taken out of a lattice point with the given code.
///
/// `previous` is the step that entered the point; it only matters for the
/// saddle codes 6 and 9. Codes 0 and 15 have no boundary and return `None`.
pub fn step_for(code: u8, previous: Option<Direction>) -> Option<Direction> {
    use Direction::*;
    match code {
        1 | 5 | 13 => Some(North),
        2 | 3 | 7 => Some(East),
        4 | 12 | 14 => Some(West),
        8 | 10 | 11 => Some(South),
        6 => Some(if previous == Some(North) { West } else { East }),
        9 => Some(if previous == Some(East) { North } else { South }),
        _ => None,
    }
}

/// Lattice code for point `(x, y)`.
#[inline]
pub fn lattice_code(grid: &OccupancyGrid, point: IVec2) -> u8 {
    let (x, y) = (point.x, point.y);
    let mut code = 0;
    if grid.get(x - 1, y - 1) {
        code |= 1;
    }
    if grid.get(x, y - 1) {
        code |= 2;
    }
    if grid.get(x - 1, y) {
        code |= 4;
    }
    if grid.get(x, y) {
        code |= 8;
    }
    code
}

/// Traces the exterior outline of the grid's solid region.
///
/// The walk starts at the top-left corner of the first solid cell in
/// row-major order. A grid with no solid cell yields an empty path and a
/// warning. The grid is expected to hold exactly one simply-connected
/// region; with several regions only the first one is outlined.
///
/// # Errors
///
/// Returns an error only when the walk breaks its own invariants: stepping
/// onto a point with no boundary, or failing to close within
/// [`config::constants::trace_step_limit`] steps.
pub fn trace_boundary(grid: &OccupancyGrid) -> FootprintResult<ContourPath> {
    let Some(start) = grid.first_solid() else {
        warn!(
            width = grid.width(),
            height = grid.height(),
            "contour not found: occupancy grid has no solid cell"
        );
        return Ok(ContourPath::empty());
    };

    let limit = config::constants::trace_step_limit(grid.width(), grid.height());
    let mut steps = Vec::new();
    let mut point = start;
    let mut previous = None;

    loop {
        let code = lattice_code(grid, point);
        let step = step_for(code, previous).ok_or(FootprintError::UnexpectedLatticeCode {
            x: point.x,
            y: point.y,
            code,
        })?;
        steps.push(step);
        point += step.offset();
        previous = Some(step);

        if point == start {
            break;
        }
        if steps.len() >= limit {
            return Err(FootprintError::RunawayTrace {
                steps: steps.len(),
                limit,
            });
        }
    }

    let path = simplify(start, &steps);
    trace!(
        steps = steps.len(),
        runs = path.runs().len(),
        "traced footprint boundary"
    );
    Ok(path)
}

/// Merges consecutive identical steps into runs.
///
/// When the last run continues in the first run's direction the two are
/// joined and the start moves back to where the last run began, so every
/// run boundary is a real corner.
///
/// # Example
///
/// ```rust
/// use plotgen_footprint::contour::{simplify, Direction::*};
/// use glam::IVec2;
///
/// let path = simplify(IVec2::ZERO, &[South, South, East, North, North, West]);
/// let lengths: Vec<u32> = path.runs().iter().map(|r| r.length).collect();
/// assert_eq!(lengths, vec![2, 1, 2, 1]);
/// ```
pub fn simplify(start: IVec2, steps: &[Direction]) -> ContourPath {
    let mut runs: Vec<ContourRun> = Vec::new();
    for &direction in steps {
        match runs.last_mut() {
            Some(run) if run.direction == direction => run.length += 1,
            _ => runs.push(ContourRun {
                direction,
                length: 1,
            }),
        }
    }

    let mut start = start;
    if runs.len() > 1 && runs[0].direction == runs[runs.len() - 1].direction {
        if let Some(last) = runs.pop() {
            start -= last.vector();
            runs[0].length += last.length;
        }
    }

    ContourPath { start, runs }
}

#[cfg(test)]
mod tests;
