//! # Plane
//!
//! Horizontal rectangle facing +Y; used for floors and flat roofs.

use config::constants::{CHANNEL_ROOF, DEFAULT_LENGTH, DEFAULT_WIDTH};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::ShapeGenerator;
use crate::mesh::MeshBuffer;
use crate::uv::UvMode;

/// Plane parameters. `length` runs along X, `width` along Z.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneParams {
    pub width: Option<f64>,
    pub length: Option<f64>,
    /// Also emit the downward-facing side.
    pub double_sided: Option<bool>,
    /// Center on the origin instead of spanning `[0, length] × [0, width]`.
    pub centered: Option<bool>,
    pub channel: Option<u32>,
    pub flip: Option<bool>,
    pub uv: Option<UvMode>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneSettings {
    pub width: f64,
    pub length: f64,
    pub double_sided: bool,
    pub centered: bool,
    pub channel: u32,
    pub flip: bool,
    pub uv: UvMode,
}

impl ShapeGenerator for PlaneParams {
    type Settings = PlaneSettings;

    fn resolve(&self) -> PlaneSettings {
        PlaneSettings {
            width: self.width.unwrap_or(DEFAULT_WIDTH),
            length: self.length.unwrap_or(DEFAULT_LENGTH),
            double_sided: self.double_sided.unwrap_or(false),
            centered: self.centered.unwrap_or(false),
            channel: self.channel.unwrap_or(CHANNEL_ROOF),
            flip: self.flip.unwrap_or(false),
            uv: self.uv.unwrap_or_default(),
        }
    }

    fn emit(s: &PlaneSettings, mesh: &mut MeshBuffer) {
        let (x0, z0) = if s.centered {
            (-s.length / 2.0, -s.width / 2.0)
        } else {
            (0.0, 0.0)
        };
        let (x1, z1) = (x0 + s.length, z0 + s.width);
        let corners = [
            DVec3::new(x0, 0.0, z1),
            DVec3::new(x1, 0.0, z1),
            DVec3::new(x1, 0.0, z0),
            DVec3::new(x0, 0.0, z0),
        ];
        mesh.add_quad(corners, s.channel, s.flip, s.uv);
        if s.double_sided {
            mesh.add_quad(corners, s.channel, !s.flip, s.uv);
        }
    }
}
