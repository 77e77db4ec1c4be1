//! # Building Requests

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// What to build and where.
///
/// Plot dimensions and `origin` are in grid units; the plot's north-west
/// corner sits at `origin` and the footprint extends along +X (width) and
/// +Z (depth) before `yaw` is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingRequest {
    /// Seed of the building's substream. Equal seeds give equal buildings.
    pub seed: u32,
    /// Plot cells along X.
    pub plot_width: u32,
    /// Plot cells along Z.
    pub plot_depth: u32,
    pub origin: DVec3,
    /// Rotation about +Y in radians.
    pub yaw: f64,
    /// Detail level; 0 is the most detailed.
    pub detail: u32,
}

impl BuildingRequest {
    /// A request for an unrotated plot at the world origin.
    pub fn new(seed: u32, plot_width: u32, plot_depth: u32) -> Self {
        Self {
            seed,
            plot_width,
            plot_depth,
            ..Default::default()
        }
    }

    /// Same request at another detail level.
    pub fn at_detail(&self, detail: u32) -> Self {
        Self { detail, ..*self }
    }
}

impl Default for BuildingRequest {
    fn default() -> Self {
        Self {
            seed: config::constants::DEFAULT_SEED,
            plot_width: 4,
            plot_depth: 4,
            origin: DVec3::ZERO,
            yaw: 0.0,
            detail: 0,
        }
    }
}
