//! # Occupancy Grid
//!
//! Dense 2D boolean grid marking which unit cells of a footprint are solid.
//!
//! Coordinates are signed so neighborhood lookups may step outside the grid:
//! reads outside the extents return `false` and writes are ignored. The
//! boundary tracer depends on this to sample the ring of cells around the
//! footprint without edge checks.

use glam::IVec2;
use std::fmt;

/// A width × height grid of solid/empty cells, row-major, `y` growing
/// "south".
///
/// # Example
///
/// ```rust
/// use plotgen_footprint::OccupancyGrid;
/// use glam::IVec2;
///
/// let mut grid = OccupancyGrid::new(10, 10, true);
/// grid.fill(IVec2::new(6, 0), IVec2::new(10, 4), false);
/// assert_eq!(grid.solid_count(), 84);
/// assert!(!grid.get(-1, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Creates a grid with every cell set to `initial`.
    pub fn new(width: usize, height: usize, initial: bool) -> Self {
        Self {
            width,
            height,
            cells: vec![initial; width * height],
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Returns whether the cell is solid; `false` outside the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map_or(false, |i| self.cells[i])
    }

    /// Vector form of [`OccupancyGrid::get`].
    #[inline]
    pub fn get_at(&self, cell: IVec2) -> bool {
        self.get(cell.x, cell.y)
    }

    /// Sets a cell; ignored outside the grid.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: bool) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = value;
        }
    }

    /// Sets every cell in the half-open rectangle `[from, to)`.
    ///
    /// The rectangle is clipped to the grid. Empty or inverted ranges do
    /// nothing.
    pub fn fill(&mut self, from: IVec2, to: IVec2, value: bool) {
        let x0 = from.x.max(0) as usize;
        let y0 = from.y.max(0) as usize;
        let x1 = (to.x.max(0) as usize).min(self.width);
        let y1 = (to.y.max(0) as usize).min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for y in y0..y1 {
            let row = y * self.width;
            self.cells[row + x0..row + x1].fill(value);
        }
    }

    /// Number of solid cells.
    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Returns true when no cell is solid.
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&c| c)
    }

    /// First solid cell in row-major order.
    pub fn first_solid(&self) -> Option<IVec2> {
        let i = self.cells.iter().position(|&c| c)?;
        Some(IVec2::new((i % self.width) as i32, (i / self.width) as i32))
    }

    /// Maximal horizontal runs of solid cells in row `y`, as half-open
    /// `(start, end)` column ranges.
    pub fn row_runs(&self, y: usize) -> Vec<(usize, usize)> {
        let mut runs = Vec::new();
        if y >= self.height {
            return runs;
        }
        let row = &self.cells[y * self.width..(y + 1) * self.width];
        let mut start = None;
        for (x, &solid) in row.iter().enumerate() {
            match (solid, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push((s, x));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push((s, self.width));
        }
        runs
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = if self.cells[y * self.width + x] { '#' } else { '.' };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid() {
        let grid = OccupancyGrid::new(3, 2, false);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(grid.is_empty());
        assert_eq!(grid.first_solid(), None);
    }

    #[test]
    fn test_out_of_bounds_reads_are_empty() {
        let grid = OccupancyGrid::new(2, 2, true);
        assert!(grid.get(0, 0));
        assert!(grid.get(1, 1));
        assert!(!grid.get(-1, 0));
        assert!(!grid.get(0, -1));
        assert!(!grid.get(2, 0));
        assert!(!grid.get(0, 2));
        assert!(!grid.get(i32::MAX, i32::MIN));
    }

    #[test]
    fn test_out_of_bounds_writes_are_ignored() {
        let mut grid = OccupancyGrid::new(2, 2, false);
        grid.set(-1, 0, true);
        grid.set(5, 5, true);
        assert!(grid.is_empty());
        grid.set(1, 0, true);
        assert_eq!(grid.solid_count(), 1);
        assert_eq!(grid.first_solid(), Some(IVec2::new(1, 0)));
    }

    #[test]
    fn test_carve_corner() {
        let mut grid = OccupancyGrid::new(10, 10, true);
        grid.fill(IVec2::new(0, 0), IVec2::new(4, 4), false);
        assert_eq!(grid.solid_count(), 10 * 10 - 4 * 4);
    }

    #[test]
    fn test_fill_is_clipped() {
        let mut grid = OccupancyGrid::new(5, 5, true);
        grid.fill(IVec2::new(-3, -3), IVec2::new(2, 2), false);
        assert_eq!(grid.solid_count(), 25 - 4);
        grid.fill(IVec2::new(4, 4), IVec2::new(100, 100), false);
        assert_eq!(grid.solid_count(), 25 - 5);
    }

    #[test]
    fn test_fill_empty_and_inverted_ranges() {
        let mut grid = OccupancyGrid::new(4, 4, true);
        grid.fill(IVec2::new(2, 2), IVec2::new(2, 4), false);
        grid.fill(IVec2::new(3, 3), IVec2::new(1, 1), false);
        grid.fill(IVec2::new(10, 0), IVec2::new(12, 4), false);
        assert_eq!(grid.solid_count(), 16);
    }

    #[test]
    fn test_row_runs() {
        let mut grid = OccupancyGrid::new(7, 1, true);
        grid.set(2, 0, false);
        grid.set(3, 0, false);
        grid.set(6, 0, false);
        assert_eq!(grid.row_runs(0), vec![(0, 2), (4, 6)]);
        assert!(grid.row_runs(1).is_empty());
    }

    #[test]
    fn test_display() {
        let mut grid = OccupancyGrid::new(3, 2, true);
        grid.set(2, 0, false);
        assert_eq!(grid.to_string(), "##.\n###\n");
    }
}
