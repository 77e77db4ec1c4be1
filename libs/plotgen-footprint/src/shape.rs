//! # Footprint Shapes
//!
//! Rectangle, L and T footprints produced by carving rectangles out of a
//! full plot grid. Cuts are clamped so at least one row and one column of
//! the plot stay solid and the result remains a single connected region.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::grid::OccupancyGrid;

/// Plot corner, with north at `y = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Corner {
    /// All corners, in clockwise order from north-west.
    pub const ALL: [Corner; 4] = [
        Corner::NorthWest,
        Corner::NorthEast,
        Corner::SouthEast,
        Corner::SouthWest,
    ];
}

/// The outline family of a building footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FootprintShape {
    /// The full plot.
    Rectangle,
    /// The plot minus a `cut_width × cut_depth` rectangle at `corner`.
    LShape {
        cut_width: u32,
        cut_depth: u32,
        corner: Corner,
    },
    /// A full-width bar along the north edge with a centered stem of
    /// `stem_width` cells; both southern flanks are cut `cut_depth` deep.
    TShape { stem_width: u32, cut_depth: u32 },
}

impl FootprintShape {
    /// Rasterizes the shape onto a fresh `width × depth` grid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use plotgen_footprint::{Corner, FootprintShape};
    ///
    /// let l = FootprintShape::LShape { cut_width: 4, cut_depth: 4, corner: Corner::NorthEast };
    /// assert_eq!(l.rasterize(10, 10).solid_count(), 84);
    /// ```
    pub fn rasterize(&self, width: u32, depth: u32) -> OccupancyGrid {
        let mut grid = OccupancyGrid::new(width as usize, depth as usize, true);
        if width == 0 || depth == 0 {
            return grid;
        }
        let (w, d) = (width as i32, depth as i32);

        match *self {
            FootprintShape::Rectangle => {}
            FootprintShape::LShape {
                cut_width,
                cut_depth,
                corner,
            } => {
                let cw = (cut_width as i32).min(w - 1);
                let cd = (cut_depth as i32).min(d - 1);
                let (x0, x1) = match corner {
                    Corner::NorthWest | Corner::SouthWest => (0, cw),
                    Corner::NorthEast | Corner::SouthEast => (w - cw, w),
                };
                let (y0, y1) = match corner {
                    Corner::NorthWest | Corner::NorthEast => (0, cd),
                    Corner::SouthWest | Corner::SouthEast => (d - cd, d),
                };
                grid.fill(IVec2::new(x0, y0), IVec2::new(x1, y1), false);
            }
            FootprintShape::TShape {
                stem_width,
                cut_depth,
            } => {
                let stem = (stem_width as i32).clamp(1, w);
                let cd = (cut_depth as i32).min(d - 1);
                let left = (w - stem) / 2;
                grid.fill(IVec2::new(0, d - cd), IVec2::new(left, d), false);
                grid.fill(IVec2::new(left + stem, d - cd), IVec2::new(w, d), false);
            }
        }

        grid
    }

    /// Returns true if a `width × depth` plot is large enough for every cut
    /// of the shape to leave a notch. L shapes need two cells each way; T
    /// shapes also need a flank on both sides of the stem.
    ///
    /// # Example
    ///
    /// ```rust
    /// use plotgen_footprint::FootprintShape;
    ///
    /// let t = FootprintShape::TShape { stem_width: 1, cut_depth: 1 };
    /// assert!(!t.fits(2, 4));
    /// assert!(t.fits(3, 2));
    /// ```
    pub fn fits(&self, width: u32, depth: u32) -> bool {
        match *self {
            FootprintShape::Rectangle => width > 0 && depth > 0,
            FootprintShape::LShape { .. } => width >= 2 && depth >= 2,
            FootprintShape::TShape { stem_width, .. } => {
                depth >= 2 && stem_width >= 1 && width >= stem_width + 2
            }
        }
    }

    /// Number of contour runs the traced outline has, assuming the cuts are
    /// non-empty.
    pub fn expected_runs(&self) -> usize {
        match self {
            FootprintShape::Rectangle => 4,
            FootprintShape::LShape { .. } => 6,
            FootprintShape::TShape { .. } => 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contour::trace_boundary;

    #[test]
    fn test_rectangle_is_full() {
        let grid = FootprintShape::Rectangle.rasterize(5, 3);
        assert_eq!(grid.solid_count(), 15);
    }

    #[test]
    fn test_l_shape_every_corner() {
        for corner in Corner::ALL {
            let shape = FootprintShape::LShape {
                cut_width: 4,
                cut_depth: 4,
                corner,
            };
            let grid = shape.rasterize(10, 10);
            assert_eq!(grid.solid_count(), 84, "corner {corner:?}");
        }
    }

    #[test]
    fn test_l_shape_cut_location() {
        let shape = FootprintShape::LShape {
            cut_width: 2,
            cut_depth: 1,
            corner: Corner::SouthWest,
        };
        let grid = shape.rasterize(4, 3);
        assert_eq!(grid.to_string(), "####\n####\n..##\n");
    }

    #[test]
    fn test_l_shape_cut_is_clamped() {
        let shape = FootprintShape::LShape {
            cut_width: 50,
            cut_depth: 50,
            corner: Corner::NorthWest,
        };
        let grid = shape.rasterize(4, 3);
        // One column and one row survive
        assert_eq!(grid.solid_count(), 4 + 3 - 1);
    }

    #[test]
    fn test_t_shape() {
        let shape = FootprintShape::TShape {
            stem_width: 3,
            cut_depth: 2,
        };
        let grid = shape.rasterize(7, 4);
        assert_eq!(grid.to_string(), "#######\n#######\n..###..\n..###..\n");
    }

    #[test]
    fn test_t_shape_full_stem_is_rectangle() {
        let shape = FootprintShape::TShape {
            stem_width: 9,
            cut_depth: 2,
        };
        assert_eq!(shape.rasterize(5, 4), FootprintShape::Rectangle.rasterize(5, 4));
    }

    #[test]
    fn test_narrow_plot_cannot_hold_t() {
        let shape = FootprintShape::TShape {
            stem_width: 1,
            cut_depth: 1,
        };
        assert!(!shape.fits(2, 5));
        // Only one flank is cut, leaving an L outline
        let runs = trace_boundary(&shape.rasterize(2, 5)).unwrap().runs().len();
        assert_eq!(runs, 6);
        assert!(!FootprintShape::Rectangle.fits(0, 3));
    }

    #[test]
    fn test_fitting_shapes_trace_expected_runs() {
        let shapes = [
            FootprintShape::Rectangle,
            FootprintShape::LShape {
                cut_width: 1,
                cut_depth: 1,
                corner: Corner::SouthEast,
            },
            FootprintShape::TShape {
                stem_width: 1,
                cut_depth: 1,
            },
        ];
        for (width, depth) in [(3, 2), (4, 4), (7, 3)] {
            for shape in shapes {
                assert!(shape.fits(width, depth));
                let contour = trace_boundary(&shape.rasterize(width, depth)).unwrap();
                assert_eq!(contour.runs().len(), shape.expected_runs(), "{shape:?} {width}x{depth}");
            }
        }
    }

    #[test]
    fn test_zero_sized_plot() {
        let grid = FootprintShape::Rectangle.rasterize(0, 4);
        assert!(grid.is_empty());
    }
}
