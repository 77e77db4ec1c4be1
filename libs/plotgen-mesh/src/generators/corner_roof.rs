//! # Corner Roof
//!
//! Square corner piece of a hipped roof covering `[0, size]` along X and
//! `[-size, 0]` along Z, built from two triangles that meet along the
//! diagonal from the corner at the origin to the apex at `(size, rise, -size)`.
//!
//! The outer (hip) variant slopes down towards the +Z and -X eaves. The
//! inner (valley) variant is the concave counterpart: low at the origin and
//! high along the two far edges.

use config::constants::{CHANNEL_ROOF, DEFAULT_ROOF_RISE, DEFAULT_ROOF_RUN};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::ShapeGenerator;
use crate::mesh::MeshBuffer;
use crate::uv::UvMode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CornerRoofParams {
    pub size: Option<f64>,
    pub rise: Option<f64>,
    /// Valley piece for concave corners.
    pub inner: Option<bool>,
    pub channel: Option<u32>,
    pub flip: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerRoofSettings {
    pub size: f64,
    pub rise: f64,
    pub inner: bool,
    pub channel: u32,
    pub flip: bool,
}

impl ShapeGenerator for CornerRoofParams {
    type Settings = CornerRoofSettings;

    fn resolve(&self) -> CornerRoofSettings {
        CornerRoofSettings {
            size: self.size.unwrap_or(DEFAULT_ROOF_RUN),
            rise: self.rise.unwrap_or(DEFAULT_ROOF_RISE),
            inner: self.inner.unwrap_or(false),
            channel: self.channel.unwrap_or(CHANNEL_ROOF),
            flip: self.flip.unwrap_or(false),
        }
    }

    fn emit(c: &CornerRoofSettings, mesh: &mut MeshBuffer) {
        let (s, h) = (c.size, c.rise);
        let corner = DVec3::ZERO;
        let apex = DVec3::new(s, h, -s);

        let (front, side) = if c.inner {
            (
                [corner, apex, DVec3::new(0.0, h, -s)],
                [corner, DVec3::new(s, h, 0.0), apex],
            )
        } else {
            (
                [corner, DVec3::new(s, 0.0, 0.0), apex],
                [DVec3::new(0.0, 0.0, -s), corner, apex],
            )
        };

        mesh.add_triangle(front, c.channel, c.flip, UvMode::NONE);
        // Mirrored so both halves lean the same way across the diagonal
        mesh.add_triangle(side, c.channel, c.flip, UvMode::FLIP_TOP);
    }
}
