//! # Pillar
//!
//! Upright regular prism centered on the local Y axis. Flats are aligned so
//! a four-sided pillar is an axis-aligned square post of side `width`.

use config::constants::{
    CHANNEL_TRIM, DEFAULT_PILLAR_SIDES, DEFAULT_PILLAR_WIDTH, DEFAULT_WALL_HEIGHT,
    MIN_PILLAR_SIDES,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

use super::ShapeGenerator;
use crate::mesh::MeshBuffer;
use crate::uv::UvMode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PillarParams {
    /// Distance between opposite flats (for even side counts).
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub sides: Option<u32>,
    /// Close the top and bottom.
    pub caps: Option<bool>,
    pub channel: Option<u32>,
    pub flip: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillarSettings {
    pub width: f64,
    pub height: f64,
    pub sides: u32,
    pub caps: bool,
    pub channel: u32,
    pub flip: bool,
}

impl PillarSettings {
    /// Corner ring at `y`.
    pub fn ring(&self, y: f64) -> Vec<DVec3> {
        let n = self.sides as f64;
        let radius = self.width / 2.0 / (PI / n).cos();
        (0..self.sides)
            .map(|i| {
                let angle = PI / n + TAU * i as f64 / n;
                DVec3::new(radius * angle.cos(), y, radius * angle.sin())
            })
            .collect()
    }
}

impl ShapeGenerator for PillarParams {
    type Settings = PillarSettings;

    fn resolve(&self) -> PillarSettings {
        PillarSettings {
            width: self.width.unwrap_or(DEFAULT_PILLAR_WIDTH),
            height: self.height.unwrap_or(DEFAULT_WALL_HEIGHT),
            sides: self
                .sides
                .unwrap_or(DEFAULT_PILLAR_SIDES)
                .max(MIN_PILLAR_SIDES),
            caps: self.caps.unwrap_or(true),
            channel: self.channel.unwrap_or(CHANNEL_TRIM),
            flip: self.flip.unwrap_or(false),
        }
    }

    fn emit(s: &PillarSettings, mesh: &mut MeshBuffer) {
        let bottom = s.ring(0.0);
        let top = s.ring(s.height);
        let n = bottom.len();

        for i in 0..n {
            let j = (i + 1) % n;
            // Ring angles grow clockwise seen from above
            mesh.add_quad([bottom[j], bottom[i], top[i], top[j]], s.channel, s.flip, UvMode::NONE);
        }

        if !s.caps {
            return;
        }

        let top_center = DVec3::new(0.0, s.height, 0.0);
        for i in 0..n {
            let j = (i + 1) % n;
            mesh.add_triangle([top_center, top[j], top[i]], s.channel, s.flip, UvMode::NONE);
            mesh.add_triangle([DVec3::ZERO, bottom[i], bottom[j]], s.channel, s.flip, UvMode::NONE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn emit(params: PillarParams) -> MeshBuffer {
        let mut mesh = MeshBuffer::new();
        PillarParams::emit(&params.resolve(), &mut mesh);
        mesh
    }

    #[test]
    fn test_square_post_bounds() {
        let mesh = emit(PillarParams {
            width: Some(0.4),
            height: Some(2.0),
            ..Default::default()
        });
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.x, -0.2, epsilon = 1e-12);
        assert_relative_eq!(max.z, 0.2, epsilon = 1e-12);
        assert_relative_eq!(max.y, 2.0);
        // 4 sides + 2 × 4 cap triangles
        assert_eq!(mesh.triangle_count(), 4 * 2 + 8);
    }

    #[test]
    fn test_sides_clamped() {
        let s = PillarParams {
            sides: Some(1),
            ..Default::default()
        }
        .resolve();
        assert_eq!(s.sides, MIN_PILLAR_SIDES);
    }

    #[test]
    fn test_faces_point_outward() {
        let mesh = emit(PillarParams {
            sides: Some(7),
            height: Some(1.0),
            ..Default::default()
        });
        let center = DVec3::new(0.0, 0.5, 0.0);
        for tri in mesh.channel_triangles(CHANNEL_TRIM) {
            let normal = (tri[1] - tri[0]).cross(tri[2] - tri[0]);
            let centroid = (tri[0] + tri[1] + tri[2]) / 3.0;
            assert!(normal.dot(centroid - center) > 0.0);
        }
    }

    #[test]
    fn test_without_caps() {
        let mesh = emit(PillarParams {
            sides: Some(6),
            caps: Some(false),
            ..Default::default()
        });
        assert_eq!(mesh.triangle_count(), 12);
    }
}
