//! # UV Synthesis
//!
//! Texture coordinates for quads and triangles, derived from geometry alone.
//!
//! ## Projection
//!
//! The face normal picks the dominant axis, which is dropped to flatten the
//! face. The remaining horizontal axis is signed by the normal so every face
//! reads left-to-right, bottom-to-top when seen from the side it faces:
//!
//! | Dropped | Horizontal      | Vertical        |
//! |---------|-----------------|-----------------|
//! | X       | `-z · sign(nx)` | `y`             |
//! | Z       | `x · sign(nz)`  | `y`             |
//! | Y       | `x`             | `-z · sign(ny)` |
//!
//! Projected deltas only decide orientation. Magnitudes come from true 3D
//! edge lengths so textures tile at the same density on every face.

use config::constants::EPSILON;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Remapping applied after UVs are laid out, in field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UvMode {
    /// Mirror U across the face.
    pub flip_horizontal: bool,
    /// Mirror V across the face.
    pub flip_vertical: bool,
    /// Rotate a quarter turn counter-clockwise within the face bounds.
    pub rotate_90: bool,
    /// Mirror the top corners (quad corners 2 and 3, or a triangle's apex)
    /// horizontally.
    pub flip_top: bool,
    /// Mirror the bottom corners (corners 0 and 1) horizontally.
    pub flip_bottom: bool,
}

impl UvMode {
    /// No remapping.
    pub const NONE: UvMode = UvMode {
        flip_horizontal: false,
        flip_vertical: false,
        rotate_90: false,
        flip_top: false,
        flip_bottom: false,
    };

    /// Only the top corners mirrored; used by hip and valley pieces.
    pub const FLIP_TOP: UvMode = UvMode {
        flip_top: true,
        ..UvMode::NONE
    };
}

/// Projects `point` to 2D along the dominant axis of `normal`.
pub fn project(point: DVec3, normal: DVec3) -> DVec2 {
    let a = normal.abs();
    if a.x >= a.y && a.x >= a.z {
        DVec2::new(-point.z * sign(normal.x), point.y)
    } else if a.z >= a.y {
        DVec2::new(point.x * sign(normal.z), point.y)
    } else {
        DVec2::new(point.x, -point.z * sign(normal.y))
    }
}

#[inline]
fn sign(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// UVs for a quad given in counter-clockwise order.
///
/// Edge 0→1 and edge 0→3 span the UV rectangle; corner 2 takes the opposite
/// corner, so trapezoids are mapped onto a rectangle of their side lengths.
///
/// # Example
///
/// ```rust
/// use plotgen_mesh::uv::{quad_uvs, UvMode};
/// use glam::{DVec2, DVec3};
///
/// let wall = [
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(2.0, 0.0, 0.0),
///     DVec3::new(2.0, 1.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
/// ];
/// let uvs = quad_uvs(&wall, UvMode::NONE);
/// assert_eq!(uvs[2], DVec2::new(2.0, 1.0));
/// ```
pub fn quad_uvs(points: &[DVec3; 4], mode: UvMode) -> [DVec2; 4] {
    let [p0, p1, _, p3] = *points;
    let normal = (p1 - p0).cross(p3 - p0);
    let q0 = project(p0, normal);
    let along = project(p1, normal) - q0;
    let across = project(p3, normal) - q0;
    let len_a = p0.distance(p1);
    let len_b = p0.distance(p3);

    let mut uvs = if along.x.abs() >= along.y.abs() {
        // Edge 0→1 runs horizontally
        let u0 = if along.x >= 0.0 { 0.0 } else { len_a };
        let u1 = len_a - u0;
        let v0 = if across.y >= 0.0 { 0.0 } else { len_b };
        let v3 = len_b - v0;
        [
            DVec2::new(u0, v0),
            DVec2::new(u1, v0),
            DVec2::new(u1, v3),
            DVec2::new(u0, v3),
        ]
    } else {
        let v0 = if along.y >= 0.0 { 0.0 } else { len_a };
        let v1 = len_a - v0;
        let u0 = if across.x >= 0.0 { 0.0 } else { len_b };
        let u3 = len_b - u0;
        [
            DVec2::new(u0, v0),
            DVec2::new(u0, v1),
            DVec2::new(u3, v1),
            DVec2::new(u3, v0),
        ]
    };

    remap(&mut uvs, mode);
    if mode.flip_top {
        mirror_pair(&mut uvs, 2, 3);
    }
    if mode.flip_bottom {
        mirror_pair(&mut uvs, 0, 1);
    }
    uvs
}

/// UVs for a triangle given in counter-clockwise order.
///
/// The base (edge 0→1) lies on a UV axis with its true length; the apex sits
/// at its projection onto the base and its distance from it.
pub fn triangle_uvs(points: &[DVec3; 3], mode: UvMode) -> [DVec2; 3] {
    let [p0, p1, p2] = *points;
    let base = p1 - p0;
    let len = base.length();
    if len < EPSILON {
        return [DVec2::ZERO; 3];
    }
    let dir = base / len;
    let offset = p2 - p0;
    let along = offset.dot(dir);
    let height = (offset - dir * along).length();

    let normal = base.cross(offset);
    let q0 = project(p0, normal);
    let b = project(p1, normal) - q0;
    let side = b.perp_dot(project(p2, normal) - q0);

    let mut uvs = if b.x.abs() >= b.y.abs() {
        let forward = b.x >= 0.0;
        let above = (side >= 0.0) == forward;
        let u = |x: f64| if forward { x } else { len - x };
        let v = |y: f64| if above { y } else { height - y };
        [
            DVec2::new(u(0.0), v(0.0)),
            DVec2::new(u(len), v(0.0)),
            DVec2::new(u(along), v(height)),
        ]
    } else {
        // Base runs vertically; the apex goes to whichever side it projects to
        let upward = b.y >= 0.0;
        let apex_right = (side > 0.0) != upward;
        let v = |x: f64| if upward { x } else { len - x };
        let u = |y: f64| if apex_right { y } else { height - y };
        [
            DVec2::new(u(0.0), v(0.0)),
            DVec2::new(u(0.0), v(len)),
            DVec2::new(u(height), v(along)),
        ]
    };

    remap(&mut uvs, mode);
    if mode.flip_top {
        uvs[2].x = uvs[0].x + uvs[1].x - uvs[2].x;
    }
    if mode.flip_bottom {
        mirror_pair(&mut uvs, 0, 1);
    }
    uvs
}

/// Whole-face flips and rotation, within the face's UV bounds.
fn remap(uvs: &mut [DVec2], mode: UvMode) {
    if !(mode.flip_horizontal || mode.flip_vertical || mode.rotate_90) {
        return;
    }
    let (min, max) = uvs
        .iter()
        .fold((DVec2::splat(f64::MAX), DVec2::splat(f64::MIN)), |(lo, hi), uv| {
            (lo.min(*uv), hi.max(*uv))
        });

    for uv in uvs.iter_mut() {
        if mode.flip_horizontal {
            uv.x = min.x + max.x - uv.x;
        }
        if mode.flip_vertical {
            uv.y = min.y + max.y - uv.y;
        }
        if mode.rotate_90 {
            *uv = DVec2::new(min.y + max.y - uv.y, uv.x);
        }
    }
}

fn mirror_pair(uvs: &mut [DVec2], a: usize, b: usize) {
    let sum = uvs[a].x + uvs[b].x;
    uvs[a].x = sum - uvs[a].x;
    uvs[b].x = sum - uvs[b].x;
}
