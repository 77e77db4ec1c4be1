//! # Wall
//!
//! Straight wall segment: outer face on `z = 0`, inner face `thickness`
//! behind it, optional top and end caps.

use config::constants::{
    CHANNEL_WALL, DEFAULT_LENGTH, DEFAULT_WALL_HEIGHT, DEFAULT_WALL_THICKNESS, EPSILON,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::ShapeGenerator;
use crate::mesh::MeshBuffer;
use crate::uv::UvMode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallParams {
    pub length: Option<f64>,
    pub height: Option<f64>,
    pub thickness: Option<f64>,
    /// Close the top and both ends.
    pub caps: Option<bool>,
    pub channel: Option<u32>,
    /// Channel for the caps; defaults to `channel`.
    pub cap_channel: Option<u32>,
    pub flip: Option<bool>,
    pub uv: Option<UvMode>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSettings {
    pub length: f64,
    pub height: f64,
    pub thickness: f64,
    pub caps: bool,
    pub channel: u32,
    pub cap_channel: u32,
    pub flip: bool,
    pub uv: UvMode,
}

impl WallSettings {
    /// A wall without thickness is a single sheet.
    pub fn is_solid(&self) -> bool {
        self.thickness > EPSILON
    }
}

impl ShapeGenerator for WallParams {
    type Settings = WallSettings;

    fn resolve(&self) -> WallSettings {
        let channel = self.channel.unwrap_or(CHANNEL_WALL);
        WallSettings {
            length: self.length.unwrap_or(DEFAULT_LENGTH),
            height: self.height.unwrap_or(DEFAULT_WALL_HEIGHT),
            thickness: self.thickness.unwrap_or(DEFAULT_WALL_THICKNESS),
            caps: self.caps.unwrap_or(true),
            channel,
            cap_channel: self.cap_channel.unwrap_or(channel),
            flip: self.flip.unwrap_or(false),
            uv: self.uv.unwrap_or_default(),
        }
    }

    fn emit(s: &WallSettings, mesh: &mut MeshBuffer) {
        let (l, h, t) = (s.length, s.height, s.thickness);

        mesh.add_quad(
            [
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(l, 0.0, 0.0),
                DVec3::new(l, h, 0.0),
                DVec3::new(0.0, h, 0.0),
            ],
            s.channel,
            s.flip,
            s.uv,
        );

        if !s.is_solid() {
            return;
        }

        mesh.add_quad(
            [
                DVec3::new(l, 0.0, -t),
                DVec3::new(0.0, 0.0, -t),
                DVec3::new(0.0, h, -t),
                DVec3::new(l, h, -t),
            ],
            s.channel,
            s.flip,
            s.uv,
        );

        if !s.caps {
            return;
        }

        // Top
        mesh.add_quad(
            [
                DVec3::new(0.0, h, 0.0),
                DVec3::new(l, h, 0.0),
                DVec3::new(l, h, -t),
                DVec3::new(0.0, h, -t),
            ],
            s.cap_channel,
            s.flip,
            UvMode::NONE,
        );
        // Start end, facing -X
        mesh.add_quad(
            [
                DVec3::new(0.0, 0.0, -t),
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(0.0, h, 0.0),
                DVec3::new(0.0, h, -t),
            ],
            s.cap_channel,
            s.flip,
            UvMode::NONE,
        );
        // Far end, facing +X
        mesh.add_quad(
            [
                DVec3::new(l, 0.0, 0.0),
                DVec3::new(l, 0.0, -t),
                DVec3::new(l, h, -t),
                DVec3::new(l, h, 0.0),
            ],
            s.cap_channel,
            s.flip,
            UvMode::NONE,
        );
    }
}
