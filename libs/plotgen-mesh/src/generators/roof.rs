//! # Roof Slope
//!
//! One pitched roof plane. The eave runs along X at `z = 0`; the slope rises
//! by `rise` over a horizontal `run` towards -Z. Tapering the ridge ends
//! turns the rectangle into a hip trapezoid.
//!
//! ```text
//!        taper_start        taper_end
//!        ├──┤ ridge ├──┤
//!           ┌────────┐      y = rise, z = -run
//!          ╱          ╲
//!         └────────────┘    eave, z = 0 (pushed out by overhang)
//!        0            length
//! ```

use config::constants::{
    CHANNEL_ROOF, DEFAULT_LENGTH, DEFAULT_ROOF_OVERHANG, DEFAULT_ROOF_RISE, DEFAULT_ROOF_RUN,
    DEFAULT_ROOF_THICKNESS, EPSILON,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::ShapeGenerator;
use crate::mesh::MeshBuffer;
use crate::uv::UvMode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoofSlopeParams {
    pub length: Option<f64>,
    pub run: Option<f64>,
    pub rise: Option<f64>,
    /// Ridge inset at the start of the slope.
    pub taper_start: Option<f64>,
    /// Ridge inset at the end of the slope.
    pub taper_end: Option<f64>,
    /// Horizontal distance the eave extends past `z = 0`.
    pub overhang: Option<f64>,
    pub thickness: Option<f64>,
    pub channel: Option<u32>,
    pub flip: Option<bool>,
    pub uv: Option<UvMode>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoofSlopeSettings {
    pub length: f64,
    pub run: f64,
    pub rise: f64,
    pub taper_start: f64,
    pub taper_end: f64,
    pub overhang: f64,
    pub thickness: f64,
    pub channel: u32,
    pub flip: bool,
    pub uv: UvMode,
}

impl RoofSlopeSettings {
    /// Eave corners (start, end) with the overhang applied.
    ///
    /// The overhang continues the slope downwards and the tapers outwards,
    /// so hip edges stay straight.
    pub fn eave(&self) -> (DVec3, DVec3) {
        let (drop, spread) = if self.run > EPSILON {
            let k = self.overhang / self.run;
            (self.rise * k, k)
        } else {
            (0.0, 0.0)
        };
        (
            DVec3::new(-self.taper_start * spread, -drop, self.overhang),
            DVec3::new(self.length + self.taper_end * spread, -drop, self.overhang),
        )
    }

    /// Ridge corners (start, end).
    ///
    /// Tapers that together exceed the length meet at a single point.
    pub fn ridge(&self) -> (DVec3, DVec3) {
        let taper = self.taper_start + self.taper_end;
        let (x0, x1) = if taper > self.length && taper > EPSILON {
            let x = self.length * self.taper_start / taper;
            (x, x)
        } else {
            (self.taper_start, self.length - self.taper_end)
        };
        (
            DVec3::new(x0, self.rise, -self.run),
            DVec3::new(x1, self.rise, -self.run),
        )
    }
}

impl ShapeGenerator for RoofSlopeParams {
    type Settings = RoofSlopeSettings;

    fn resolve(&self) -> RoofSlopeSettings {
        RoofSlopeSettings {
            length: self.length.unwrap_or(DEFAULT_LENGTH),
            run: self.run.unwrap_or(DEFAULT_ROOF_RUN),
            rise: self.rise.unwrap_or(DEFAULT_ROOF_RISE),
            taper_start: self.taper_start.unwrap_or(0.0),
            taper_end: self.taper_end.unwrap_or(0.0),
            overhang: self.overhang.unwrap_or(DEFAULT_ROOF_OVERHANG),
            thickness: self.thickness.unwrap_or(DEFAULT_ROOF_THICKNESS),
            channel: self.channel.unwrap_or(CHANNEL_ROOF),
            flip: self.flip.unwrap_or(false),
            uv: self.uv.unwrap_or_default(),
        }
    }

    fn emit(s: &RoofSlopeSettings, mesh: &mut MeshBuffer) {
        let (e0, e1) = s.eave();
        let (r0, r1) = s.ridge();
        mesh.add_quad([e0, e1, r1, r0], s.channel, s.flip, s.uv);

        if s.thickness <= EPSILON {
            return;
        }

        let down = DVec3::new(0.0, -s.thickness, 0.0);
        // Underside, facing down and inwards
        mesh.add_quad(
            [e0 + down, e1 + down, r1 + down, r0 + down],
            s.channel,
            !s.flip,
            s.uv,
        );
        // Fascia along the eave
        mesh.add_quad([e0 + down, e1 + down, e1, e0], s.channel, s.flip, UvMode::NONE);
    }
}
