//! Force sources that are not springs: uniform gravity and point attractors.

use serde::{Deserialize, Serialize};

use crate::vec2::Vec2;

/// Downward gravity for screen coordinates.
///
/// This assumes the usual canvas layout:
/// - Origin is at the top-left corner
/// - Y increases downward
/// - Gravity pulls downward (positive Y)
///
/// The magnitude is one world unit per second squared, which in normalized
/// coordinates means "one viewport height".
pub const GRAVITY: Vec2 = Vec2 { x: 0.0, y: 1.0 };

/// An attractor that pulls with constant strength from a fixed point.
///
/// A negative magnitude repels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointForce {
    /// Location of the attractor.
    pub p: Vec2,
    /// Strength of the pull.
    pub magnitude: f64,
}

impl PointForce {
    #[inline]
    pub const fn new(p: Vec2, magnitude: f64) -> Self {
        Self { p, magnitude }
    }

    /// Force felt by something at `position`.
    ///
    /// Zero when `position` sits exactly on the attractor.
    #[inline]
    pub fn force_on(&self, position: Vec2) -> Vec2 {
        point_gravity(position, self.p, self.magnitude)
    }
}

/// Returns a vector of length `strength` pointing from `position` toward
/// `center`, or zero if the two coincide.
///
/// ```rust
/// use planar::{Vec2, point_gravity};
///
/// let g = point_gravity(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0), 0.5);
/// assert_eq!(g, Vec2::new(0.0, 0.5));
/// ```
#[inline]
pub fn point_gravity(position: Vec2, center: Vec2, strength: f64) -> Vec2 {
    position.point_at(center).normalize() * strength
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_points_down() {
        assert!(GRAVITY.y > 0.0);
        assert_eq!(GRAVITY.x, 0.0);
    }

    #[test]
    fn test_point_force_magnitude_is_constant() {
        let f = PointForce::new(Vec2::new(0.5, 0.25), 0.6);
        for pos in [Vec2::new(0.0, 0.0), Vec2::new(10.0, -3.0), Vec2::new(0.5, 0.3)] {
            assert!((f.force_on(pos).length() - 0.6).abs() < 1e-12);
        }
    }

    #[test]
    fn test_point_force_direction() {
        let f = PointForce::new(Vec2::new(1.0, 0.0), 2.0);
        assert_eq!(f.force_on(Vec2::new(-1.0, 0.0)), Vec2::new(2.0, 0.0));
        assert_eq!(f.force_on(Vec2::new(3.0, 0.0)), Vec2::new(-2.0, 0.0));
    }

    #[test]
    fn test_point_force_repels_when_negative() {
        let f = PointForce::new(Vec2::ZERO, -1.0);
        assert_eq!(f.force_on(Vec2::new(0.0, 2.0)), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_point_force_at_center_is_zero() {
        let f = PointForce::new(Vec2::new(0.5, 0.5), 3.0);
        assert_eq!(f.force_on(Vec2::new(0.5, 0.5)), Vec2::ZERO);
    }
}
