//! # Arch
//!
//! Reveal of an arched opening: two jambs and a curved head of `segments`
//! strips, each extruded `thickness` into -Z and facing into the opening.
//!
//! ```text
//!         ╭──────╮   ← elliptical head, `rise` tall
//!         │      │
//!         │      │   ← jambs up to the springing line
//!         0    width
//! ```

use config::constants::{
    approx_zero, CHANNEL_TRIM, DEFAULT_ARCH_HEIGHT, DEFAULT_ARCH_SEGMENTS, DEFAULT_ARCH_WIDTH,
    DEFAULT_WALL_THICKNESS, MIN_ARCH_SEGMENTS,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::ShapeGenerator;
use crate::mesh::MeshBuffer;
use crate::uv::UvMode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchParams {
    pub width: Option<f64>,
    /// Total opening height, crown included.
    pub height: Option<f64>,
    pub thickness: Option<f64>,
    /// Height of the curved head; a semicircle when absent.
    pub rise: Option<f64>,
    pub segments: Option<u32>,
    pub channel: Option<u32>,
    pub flip: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchSettings {
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
    pub rise: f64,
    pub segments: u32,
    pub channel: u32,
    pub flip: bool,
    /// Height where the head starts to curve.
    pub spring: f64,
}

impl ArchSettings {
    /// Opening outline, walked clockwise as seen from the front: up the left
    /// jamb, over the head, down the right jamb.
    pub fn profile(&self) -> Vec<DVec2> {
        let half = self.width / 2.0;
        let mut points = Vec::with_capacity(self.segments as usize + 3);
        points.push(DVec2::ZERO);
        for i in 0..=self.segments {
            let angle = PI * (1.0 - i as f64 / self.segments as f64);
            points.push(DVec2::new(
                half + half * angle.cos(),
                self.spring + self.rise * angle.sin(),
            ));
        }
        points.push(DVec2::new(self.width, 0.0));
        points
    }
}

impl ShapeGenerator for ArchParams {
    type Settings = ArchSettings;

    fn resolve(&self) -> ArchSettings {
        let width = self.width.unwrap_or(DEFAULT_ARCH_WIDTH);
        let height = self.height.unwrap_or(DEFAULT_ARCH_HEIGHT);
        let rise = self.rise.unwrap_or(width / 2.0).min(height).max(0.0);
        ArchSettings {
            width,
            height,
            thickness: self.thickness.unwrap_or(DEFAULT_WALL_THICKNESS),
            rise,
            segments: self
                .segments
                .unwrap_or(DEFAULT_ARCH_SEGMENTS)
                .max(MIN_ARCH_SEGMENTS),
            channel: self.channel.unwrap_or(CHANNEL_TRIM),
            flip: self.flip.unwrap_or(false),
            spring: (height - rise).max(0.0),
        }
    }

    fn emit(s: &ArchSettings, mesh: &mut MeshBuffer) {
        let depth = DVec3::new(0.0, 0.0, -s.thickness);
        for pair in s.profile().windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if approx_zero(a.distance(b)) {
                continue;
            }
            let a = DVec3::new(a.x, a.y, 0.0);
            let b = DVec3::new(b.x, b.y, 0.0);
            mesh.add_quad([a, a + depth, b + depth, b], s.channel, s.flip, UvMode::NONE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let s = ArchParams::default().resolve();
        assert_eq!(s.segments, DEFAULT_ARCH_SEGMENTS);
        assert_relative_eq!(s.rise, DEFAULT_ARCH_WIDTH / 2.0);
        assert_relative_eq!(s.spring, DEFAULT_ARCH_HEIGHT - DEFAULT_ARCH_WIDTH / 2.0);
    }

    #[test]
    fn test_segments_clamped() {
        let s = ArchParams {
            segments: Some(0),
            ..Default::default()
        }
        .resolve();
        assert_eq!(s.segments, MIN_ARCH_SEGMENTS);
    }

    #[test]
    fn test_profile_endpoints() {
        let s = ArchParams {
            width: Some(2.0),
            height: Some(3.0),
            segments: Some(4),
            ..Default::default()
        }
        .resolve();
        let profile = s.profile();
        assert_eq!(profile.len(), 4 + 3);
        assert_relative_eq!(profile[1].x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(profile[1].y, 2.0, epsilon = 1e-12);
        // Crown
        assert_relative_eq!(profile[3].x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(profile[3].y, 3.0, epsilon = 1e-12);
        assert_relative_eq!(profile[5].x, 2.0, epsilon = 1e-12);
        assert_eq!(profile[6], DVec2::new(2.0, 0.0));
    }

    #[test]
    fn test_faces_point_into_opening() {
        let params = ArchParams {
            width: Some(2.0),
            height: Some(3.0),
            segments: Some(6),
            ..Default::default()
        };
        let s = params.resolve();
        let mut mesh = MeshBuffer::new();
        ArchParams::emit(&s, &mut mesh);
        assert_eq!(mesh.triangle_count(), 2 * (6 + 2));
        let inside = DVec3::new(1.0, 1.0, -s.thickness / 2.0);
        for tri in mesh.channel_triangles(CHANNEL_TRIM) {
            let normal = (tri[1] - tri[0]).cross(tri[2] - tri[0]);
            let centroid = (tri[0] + tri[1] + tri[2]) / 3.0;
            assert!(normal.dot(inside - centroid) > 0.0);
        }
    }

    #[test]
    fn test_flat_arch_skips_jambs() {
        // Rise equals height: no straight jamb section
        let s = ArchParams {
            width: Some(2.0),
            height: Some(1.0),
            segments: Some(2),
            ..Default::default()
        }
        .resolve();
        assert_eq!(s.spring, 0.0);
        let mut mesh = MeshBuffer::new();
        ArchParams::emit(&s, &mut mesh);
        assert_eq!(mesh.triangle_count(), 2 * 2);
    }
}
