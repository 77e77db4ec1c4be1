//! # Window Frame
//!
//! Rectangular frame standing `depth` proud of a wall face, with an optional
//! glass pane on its own channel. The local origin is the frame's outer
//! bottom-left corner on the wall surface. The pane is set a quarter of the
//! depth in front of the wall so it never shares a plane with it.

use config::constants::{
    CHANNEL_GLASS, CHANNEL_TRIM, DEFAULT_WINDOW_BORDER, DEFAULT_WINDOW_DEPTH,
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use super::ShapeGenerator;
use crate::mesh::MeshBuffer;
use crate::uv::UvMode;

/// Fraction of the frame depth between the wall face and the glass.
const GLASS_SETBACK: f64 = 0.25;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowFrameParams {
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Frame bar width.
    pub border: Option<f64>,
    /// How far the frame stands out of the wall.
    pub depth: Option<f64>,
    pub glass: Option<bool>,
    pub channel: Option<u32>,
    pub glass_channel: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowFrameSettings {
    pub width: f64,
    pub height: f64,
    /// Clamped so the bars never overlap.
    pub border: f64,
    pub depth: f64,
    pub glass: bool,
    pub channel: u32,
    pub glass_channel: u32,
}

impl ShapeGenerator for WindowFrameParams {
    type Settings = WindowFrameSettings;

    fn resolve(&self) -> WindowFrameSettings {
        let width = self.width.unwrap_or(DEFAULT_WINDOW_WIDTH);
        let height = self.height.unwrap_or(DEFAULT_WINDOW_HEIGHT);
        let border = self
            .border
            .unwrap_or(DEFAULT_WINDOW_BORDER)
            .min(width.min(height) / 2.0)
            .max(0.0);
        WindowFrameSettings {
            width,
            height,
            border,
            depth: self.depth.unwrap_or(DEFAULT_WINDOW_DEPTH),
            glass: self.glass.unwrap_or(true),
            channel: self.channel.unwrap_or(CHANNEL_TRIM),
            glass_channel: self.glass_channel.unwrap_or(CHANNEL_GLASS),
        }
    }

    fn emit(s: &WindowFrameSettings, mesh: &mut MeshBuffer) {
        let (w, h, b, d) = (s.width, s.height, s.border, s.depth);
        let front = |x: f64, y: f64| DVec3::new(x, y, d);

        // Front bars, counter-clockwise around the opening
        let outer = [front(0.0, 0.0), front(w, 0.0), front(w, h), front(0.0, h)];
        let inner = [front(b, b), front(w - b, b), front(w - b, h - b), front(b, h - b)];
        for i in 0..4 {
            let j = (i + 1) % 4;
            mesh.add_quad([outer[i], outer[j], inner[j], inner[i]], s.channel, false, UvMode::NONE);
        }

        // Outer sides face away from the frame, reveal sides into the opening
        add_sides(mesh, DVec2::ZERO, DVec2::new(w, h), d, s.channel, false);
        add_sides(mesh, DVec2::new(b, b), DVec2::new(w - b, h - b), d, s.channel, true);

        if s.glass {
            let z = d * GLASS_SETBACK;
            mesh.add_quad(
                [
                    DVec3::new(b, b, z),
                    DVec3::new(w - b, b, z),
                    DVec3::new(w - b, h - b, z),
                    DVec3::new(b, h - b, z),
                ],
                s.glass_channel,
                false,
                UvMode::NONE,
            );
        }
    }
}

/// Four sides of the box `[min, max] × [0, depth]`, facing outward unless
/// `inward`.
fn add_sides(mesh: &mut MeshBuffer, min: DVec2, max: DVec2, depth: f64, channel: u32, inward: bool) {
    let p = |x: f64, y: f64, z: f64| DVec3::new(x, y, z);
    let (x0, y0, x1, y1, d) = (min.x, min.y, max.x, max.y, depth);
    let sides = [
        // Bottom, facing -Y
        [p(x0, y0, 0.0), p(x1, y0, 0.0), p(x1, y0, d), p(x0, y0, d)],
        // Right, facing +X
        [p(x1, y0, d), p(x1, y0, 0.0), p(x1, y1, 0.0), p(x1, y1, d)],
        // Top, facing +Y
        [p(x0, y1, d), p(x1, y1, d), p(x1, y1, 0.0), p(x0, y1, 0.0)],
        // Left, facing -X
        [p(x0, y0, 0.0), p(x0, y0, d), p(x0, y1, d), p(x0, y1, 0.0)],
    ];
    for side in sides {
        mesh.add_quad(side, channel, inward, UvMode::NONE);
    }
}
