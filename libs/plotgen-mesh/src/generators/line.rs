//! # Line
//!
//! A 2D profile swept straight along +X: parapets, cornices, ledges.
//!
//! Profile points are `(depth, height)` pairs. Depth maps to -Z so positive
//! values go into the building, matching the wall frame. Faces point to the
//! left of the walking direction in the profile plane: walking from the
//! outer bottom up and over the top faces the strips outward.

use config::constants::{
    CHANNEL_TRIM, DEFAULT_EXTRUSION, DEFAULT_PARAPET_HEIGHT, DEFAULT_WALL_THICKNESS,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use super::ShapeGenerator;
use crate::mesh::MeshBuffer;
use crate::uv::UvMode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineParams {
    /// Profile polyline; a wall-thick coping block when absent.
    pub points: Option<Vec<DVec2>>,
    /// Sweep length along X.
    pub extrusion: Option<f64>,
    /// Connect the last profile point back to the first.
    pub closed: Option<bool>,
    /// Close both ends of a closed, convex profile.
    pub caps: Option<bool>,
    pub channel: Option<u32>,
    pub flip: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSettings {
    pub points: Vec<DVec2>,
    pub extrusion: f64,
    pub closed: bool,
    pub caps: bool,
    pub channel: u32,
    pub flip: bool,
}

/// Parapet block `DEFAULT_WALL_THICKNESS` deep and `DEFAULT_PARAPET_HEIGHT`
/// tall.
pub fn coping_profile() -> Vec<DVec2> {
    vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(0.0, DEFAULT_PARAPET_HEIGHT),
        DVec2::new(DEFAULT_WALL_THICKNESS, DEFAULT_PARAPET_HEIGHT),
        DVec2::new(DEFAULT_WALL_THICKNESS, 0.0),
    ]
}

impl ShapeGenerator for LineParams {
    type Settings = LineSettings;

    fn resolve(&self) -> LineSettings {
        LineSettings {
            points: self.points.clone().unwrap_or_else(coping_profile),
            extrusion: self.extrusion.unwrap_or(DEFAULT_EXTRUSION),
            closed: self.closed.unwrap_or(false),
            caps: self.caps.unwrap_or(false),
            channel: self.channel.unwrap_or(CHANNEL_TRIM),
            flip: self.flip.unwrap_or(false),
        }
    }

    fn emit(s: &LineSettings, mesh: &mut MeshBuffer) {
        if s.points.len() < 2 {
            return;
        }
        let start: Vec<DVec3> = s
            .points
            .iter()
            .map(|p| DVec3::new(0.0, p.y, -p.x))
            .collect();
        let sweep = DVec3::new(s.extrusion, 0.0, 0.0);

        let n = start.len();
        let segments = if s.closed { n } else { n - 1 };
        for i in 0..segments {
            let a = start[i];
            let b = start[(i + 1) % n];
            mesh.add_quad([a, a + sweep, b + sweep, b], s.channel, s.flip, UvMode::NONE);
        }

        if s.closed && s.caps && n >= 3 {
            for i in 1..n - 1 {
                mesh.add_triangle([start[0], start[i], start[i + 1]], s.channel, s.flip, UvMode::NONE);
                mesh.add_triangle(
                    [start[0] + sweep, start[i + 1] + sweep, start[i] + sweep],
                    s.channel,
                    s.flip,
                    UvMode::NONE,
                );
            }
        }
    }
}
