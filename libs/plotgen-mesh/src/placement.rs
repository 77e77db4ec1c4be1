//! # Placement
//!
//! Rigid transform applied to every vertex a generator emits: rotate, then
//! translate, then scale by the grid unit.

use glam::{DMat4, DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Rotation and translation in grid units.
///
/// # Example
///
/// ```rust
/// use plotgen_mesh::Placement;
/// use glam::DVec3;
///
/// let placement = Placement::at(DVec3::new(1.0, 0.0, 0.0));
/// let world = placement.apply(DVec3::new(0.5, 0.0, 0.0), 2.0);
/// assert_eq!(world, DVec3::new(3.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub rotation: DQuat,
    pub translation: DVec3,
}

impl Default for Placement {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Placement {
    /// No rotation, no translation.
    pub const IDENTITY: Placement = Placement {
        rotation: DQuat::IDENTITY,
        translation: DVec3::ZERO,
    };

    pub fn new(rotation: DQuat, translation: DVec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Translation only.
    pub fn at(translation: DVec3) -> Self {
        Self::new(DQuat::IDENTITY, translation)
    }

    /// Rotation of `yaw` radians about +Y, then translation.
    pub fn from_yaw(yaw: f64, translation: DVec3) -> Self {
        Self::new(DQuat::from_rotation_y(yaw), translation)
    }

    /// Yaw that turns local +X onto the horizontal direction `(dx, dz)`.
    pub fn yaw_towards(dx: f64, dz: f64) -> f64 {
        (-dz).atan2(dx)
    }

    /// Transforms a local point to world space.
    #[inline]
    pub fn apply(&self, point: DVec3, grid_unit: f64) -> DVec3 {
        (self.rotation * point + self.translation) * grid_unit
    }

    /// Matrix form of [`Placement::apply`].
    pub fn matrix(&self, grid_unit: f64) -> DMat4 {
        DMat4::from_scale(DVec3::splat(grid_unit))
            * DMat4::from_rotation_translation(self.rotation, self.translation)
    }

    /// Places `self` inside the frame of `outer`.
    pub fn then(&self, outer: &Placement) -> Placement {
        Placement {
            rotation: outer.rotation * self.rotation,
            translation: outer.rotation * self.translation + outer.translation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn assert_vec_eq(a: DVec3, b: DVec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_then_translate_then_scale() {
        let placement = Placement::from_yaw(FRAC_PI_2, DVec3::new(1.0, 0.0, 0.0));
        // +X rotates onto -Z, is moved by +X, then scaled by 3
        let world = placement.apply(DVec3::X, 3.0);
        assert_vec_eq(world, DVec3::new(3.0, 0.0, -3.0));
    }

    #[test]
    fn test_matrix_matches_apply() {
        let placement = Placement::from_yaw(0.7, DVec3::new(2.0, 1.0, -4.0));
        let point = DVec3::new(0.3, 1.2, -0.5);
        let matrix = placement.matrix(2.5);
        assert_vec_eq(matrix.transform_point3(point), placement.apply(point, 2.5));
    }

    #[test]
    fn test_yaw_towards() {
        for (dx, dz) in [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)] {
            let rotation = DQuat::from_rotation_y(Placement::yaw_towards(dx, dz));
            assert_vec_eq(rotation * DVec3::X, DVec3::new(dx, 0.0, dz));
        }
    }

    #[test]
    fn test_then_composes() {
        let inner = Placement::from_yaw(0.4, DVec3::new(1.0, 0.0, 2.0));
        let outer = Placement::from_yaw(-1.1, DVec3::new(-3.0, 0.5, 0.0));
        let point = DVec3::new(0.2, 0.7, -0.9);
        let composed = inner.then(&outer).apply(point, 1.0);
        let nested = outer.apply(inner.apply(point, 1.0), 1.0);
        assert_vec_eq(composed, nested);
    }

    #[test]
    fn test_identity() {
        let point = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(Placement::default().apply(point, 1.0), point);
    }
}
