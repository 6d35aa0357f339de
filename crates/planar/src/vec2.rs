//! Two dimensional vectors.
//!
//! [`Vec2`] is a plain `Copy` value. Every named method is pure and returns a
//! new vector; in-place updates go through the compound assignment operators
//! (`+=`, `-=`, `*=`, `/=`), which is what the particle integrator uses in its
//! inner loop.
//!
//! # Example
//!
//! ```rust
//! use planar::Vec2;
//!
//! let p = Vec2::new(1.0, 2.0);
//! let q = Vec2::new(4.0, 6.0);
//!
//! let to_q = p.point_at(q);
//! assert_eq!(to_q, Vec2::new(3.0, 4.0));
//! assert_eq!(to_q.length(), 5.0);
//!
//! let mut v = Vec2::ZERO;
//! v += to_q * 0.5;
//! assert_eq!(v, Vec2::new(1.5, 2.0));
//! ```

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::approx::approx_eq;

/// A point or displacement in 2D space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns a unit vector pointing at `radians` from the positive x axis.
    #[inline]
    pub fn from_angle(radians: f64) -> Self {
        Self::new(radians.cos(), radians.sin())
    }

    #[inline]
    pub fn add(self, other: Vec2) -> Self {
        self + other
    }

    #[inline]
    pub fn sub(self, other: Vec2) -> Self {
        self - other
    }

    #[inline]
    pub fn scale(self, s: f64) -> Self {
        self * s
    }

    /// Component-wise product.
    #[inline]
    pub fn mult(self, other: Vec2) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Component-wise quotient.
    #[inline]
    pub fn div(self, other: Vec2) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }

    #[inline]
    pub fn div_scalar(self, s: f64) -> Self {
        self / s
    }

    #[inline]
    pub fn negate(self) -> Self {
        -self
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns a unit vector with the same direction.
    ///
    /// The zero vector has no direction and is returned unchanged.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 0.0 { self / len } else { self }
    }

    #[inline]
    pub fn distance_to(self, other: Vec2) -> f64 {
        (self - other).length()
    }

    /// Returns the vector from `self` to `other` (`other - self`).
    #[inline]
    pub fn point_at(self, other: Vec2) -> Self {
        other - self
    }

    /// Rotates the vector counter-clockwise (in y-up terms) about the origin.
    #[inline]
    pub fn rotate(self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Treats `self` as a point and rotates it about `pivot` by `degrees`.
    #[inline]
    pub fn rotate_about(self, pivot: Vec2, degrees: f64) -> Self {
        pivot + (self - pivot).rotate(degrees.to_radians())
    }

    /// Linear interpolation: `t = 0` is `self`, `t = 1` is `other`.
    #[inline]
    pub fn lerp(self, other: Vec2, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Component-wise comparison using [`approx_eq`](crate::approx_eq).
    #[inline]
    pub fn approx_eq(self, other: Vec2) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vec2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, other: Vec2) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, other: Vec2) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, scalar: f64) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    #[inline]
    fn mul(self, v: Vec2) -> Vec2 {
        v * self
    }
}

impl MulAssign<f64> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn div(self, scalar: f64) -> Vec2 {
        Vec2::new(self.x / scalar, self.y / scalar)
    }
}

impl DivAssign<f64> for Vec2 {
    #[inline]
    fn div_assign(&mut self, scalar: f64) {
        self.x /= scalar;
        self.y /= scalar;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

/// The two components of a vector relative to another direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Component parallel to the reference direction.
    pub para: Vec2,
    /// Component perpendicular to the reference direction.
    pub perp: Vec2,
}

/// Projects `p` onto `q`: `para = (p·q / |q|²) q`, `perp = p - para`.
///
/// Projecting onto the zero vector yields `para = 0` and `perp = p`.
///
/// ```rust
/// use planar::{Vec2, project_onto};
///
/// let split = project_onto(Vec2::new(3.0, 4.0), Vec2::new(1.0, 0.0));
/// assert_eq!(split.para, Vec2::new(3.0, 0.0));
/// assert_eq!(split.perp, Vec2::new(0.0, 4.0));
/// ```
pub fn project_onto(p: Vec2, q: Vec2) -> Projection {
    let len_sq = q.length_squared();
    if len_sq == 0.0 {
        return Projection {
            para: Vec2::ZERO,
            perp: p,
        };
    }
    let para = q * (p.dot(q) / len_sq);
    Projection {
        para,
        perp: p - para,
    }
}

/// Scales a per-second rate by an elapsed time in milliseconds.
#[inline]
pub fn scale_ms(v: Vec2, delta_ms: f64) -> Vec2 {
    v * (delta_ms / 1000.0)
}
