//! # Gable
//!
//! Triangular wall end under a pitched roof, on `z = 0` facing +Z.

use config::constants::{CHANNEL_WALL, DEFAULT_ROOF_RISE, DEFAULT_WIDTH};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::ShapeGenerator;
use crate::mesh::MeshBuffer;
use crate::uv::UvMode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GableParams {
    pub width: Option<f64>,
    pub rise: Option<f64>,
    pub channel: Option<u32>,
    pub flip: Option<bool>,
    pub uv: Option<UvMode>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GableSettings {
    pub width: f64,
    pub rise: f64,
    pub channel: u32,
    pub flip: bool,
    pub uv: UvMode,
}

impl ShapeGenerator for GableParams {
    type Settings = GableSettings;

    fn resolve(&self) -> GableSettings {
        GableSettings {
            width: self.width.unwrap_or(DEFAULT_WIDTH),
            rise: self.rise.unwrap_or(DEFAULT_ROOF_RISE),
            channel: self.channel.unwrap_or(CHANNEL_WALL),
            flip: self.flip.unwrap_or(false),
            uv: self.uv.unwrap_or_default(),
        }
    }

    fn emit(s: &GableSettings, mesh: &mut MeshBuffer) {
        mesh.add_triangle(
            [
                DVec3::ZERO,
                DVec3::new(s.width, 0.0, 0.0),
                DVec3::new(s.width / 2.0, s.rise, 0.0),
            ],
            s.channel,
            s.flip,
            s.uv,
        );
    }
}
