//! # Building Plans
//!
//! Every structural decision about a building, drawn up front from its
//! substream. Façade randomness lives in a separate child seed so that
//! skipping the façade at a coarser detail level cannot shift any of the
//! draws made here.

use config::constants::{GenerationConfig, DEFAULT_ROOF_RISE, STOREY_HEIGHT};
use plotgen_footprint::{Corner, FootprintShape};
use plotgen_rng::{RandomContext, WeightedSelector};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::request::BuildingRequest;

/// Relative likelihood of rectangle, L and T footprints.
const SHAPE_WEIGHTS: [f64; 3] = [0.5, 0.3, 0.2];
/// Relative likelihood of flat, gable and hip roofs.
const ROOF_WEIGHTS: [f64; 3] = [0.4, 0.35, 0.25];

/// How the building is covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoofStyle {
    /// Horizontal planes inside a parapet.
    Flat,
    /// Two slopes meeting at a ridge, closed by triangular gables.
    Gable,
    /// Four slopes meeting at a ridge or a point.
    Hip,
}

impl RoofStyle {
    const ALL: [RoofStyle; 3] = [RoofStyle::Flat, RoofStyle::Gable, RoofStyle::Hip];

    /// Only flat roofs fit footprints with inner corners.
    pub fn supports(self, shape: &FootprintShape) -> bool {
        matches!(self, RoofStyle::Flat) || matches!(shape, FootprintShape::Rectangle)
    }
}

/// Prepared selector tables, built on first use and reused for every
/// building of a [`GenerationContext`](crate::GenerationContext).
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorTables {
    pub shape: WeightedSelector,
    pub roof: WeightedSelector,
}

impl SelectorTables {
    pub fn new() -> Self {
        Self {
            shape: WeightedSelector::prepared(SHAPE_WEIGHTS),
            roof: WeightedSelector::prepared(ROOF_WEIGHTS),
        }
    }
}

impl Default for SelectorTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural decisions for one building.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildingPlan {
    pub shape: FootprintShape,
    pub storeys: u32,
    pub roof: RoofStyle,
    /// Roof height above the wall tops.
    pub roof_rise: f64,
    /// Seed of the façade substream.
    pub facade_seed: u32,
}

impl BuildingPlan {
    /// Draws a plan from `rng`.
    ///
    /// The number of draws does not depend on the outcome of earlier draws,
    /// so plans for neighbouring seeds never drift out of step.
    pub fn draw(
        rng: &mut RandomContext,
        tables: &SelectorTables,
        config: &GenerationConfig,
        request: &BuildingRequest,
    ) -> Self {
        let (w, d) = (request.plot_width as i32, request.plot_depth as i32);

        let shape_index = tables.shape.value(rng);
        let cut_width = rng.range_inclusive(1, (w / 2).max(1)) as u32;
        let cut_depth = rng.range_inclusive(1, (d / 2).max(1)) as u32;
        let stem_width = rng.range_inclusive(1, (w - 2).max(1)) as u32;
        let corner = Corner::ALL[rng.range_int(0, Corner::ALL.len() as i32) as usize];

        let drawn_shape = match shape_index {
            1 => FootprintShape::LShape {
                cut_width,
                cut_depth,
                corner,
            },
            2 => FootprintShape::TShape {
                stem_width,
                cut_depth,
            },
            _ => FootprintShape::Rectangle,
        };
        let shape = if drawn_shape.fits(request.plot_width, request.plot_depth) {
            drawn_shape
        } else {
            FootprintShape::Rectangle
        };

        let storeys =
            rng.range_inclusive(config.min_storeys as i32, config.max_storeys as i32) as u32;

        let drawn = RoofStyle::ALL[tables.roof.value(rng).min(RoofStyle::ALL.len() - 1)];
        let roof = if drawn.supports(&shape) {
            drawn
        } else {
            RoofStyle::Flat
        };
        let roof_rise = DEFAULT_ROOF_RISE * rng.range(0.75, 1.5);
        let facade_seed = rng.next_seed();

        let plan = Self {
            shape,
            storeys,
            roof,
            roof_rise,
            facade_seed,
        };
        debug!(seed = request.seed, ?plan, "drew building plan");
        plan
    }

    /// Height of the wall tops in grid units.
    pub fn wall_height(&self) -> f64 {
        self.storeys as f64 * STOREY_HEIGHT
    }
}
