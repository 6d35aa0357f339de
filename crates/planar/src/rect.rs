//! Axis-aligned rectangles.
//!
//! A [`Rect`] is stored as its top-left corner plus a size. The far edges
//! (`x1`, `y1`), the centre and the corners are derived on demand. All
//! predicates treat the rectangle as a closed region: points on an edge are
//! inside, and rectangles that share only an edge or a corner intersect.
//!
//! Widths and heights are expected to be non-negative. [`Rect::new`] does not
//! check this; use [`Rect::try_new`] where a negative size should be rejected.
//!
//! # Example
//!
//! ```rust
//! use planar::{Rect, Vec2};
//!
//! let a = Rect::new(0.0, 0.0, 10.0, 10.0);
//! let b = Rect::new(10.0, 0.0, 10.0, 10.0);
//!
//! assert!(a.intersects(&b)); // shared edge
//! assert!(a.contains(Vec2::new(10.0, 5.0)));
//! assert_eq!(a.center(), Vec2::new(5.0, 5.0));
//! ```

use core::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::approx::{clamp, random_range};
use crate::error::{Error, Result};
use crate::vec2::Vec2;

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Like [`Rect::new`], but rejects negative sizes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeSize`] if `w` or `h` is negative or NaN.
    pub fn try_new(x: f64, y: f64, w: f64, h: f64) -> Result<Self> {
        if w.is_nan() || h.is_nan() || w < 0.0 || h < 0.0 {
            return Err(Error::NegativeSize { w, h });
        }
        Ok(Self::new(x, y, w, h))
    }

    /// The rectangle spanning `[0, 1]` on both axes.
    #[inline]
    pub const fn unit() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn square(x: f64, y: f64, size: f64) -> Self {
        Self::new(x, y, size, size)
    }

    /// Creates the rectangle with top-left `p0` and bottom-right `p1`.
    #[inline]
    pub fn from_corners(p0: Vec2, p1: Vec2) -> Self {
        Self::new(p0.x, p0.y, p1.x - p0.x, p1.y - p0.y)
    }

    #[inline]
    pub fn from_point_size(p: Vec2, w: f64, h: f64) -> Self {
        Self::new(p.x, p.y, w, h)
    }

    /// Creates a rectangle of the given size centred on `center`.
    #[inline]
    pub fn from_center(center: Vec2, w: f64, h: f64) -> Self {
        Self::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    /// Right edge.
    #[inline]
    pub fn x1(&self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge.
    #[inline]
    pub fn y1(&self) -> f64 {
        self.y + self.h
    }

    /// Top-left corner.
    #[inline]
    pub const fn p(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Bottom-right corner.
    #[inline]
    pub fn x1y1(&self) -> Vec2 {
        Vec2::new(self.x1(), self.y1())
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    /// Returns true if `point` lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.x1() && point.y >= self.y && point.y <= self.y1()
    }

    /// Returns true if `point` lies strictly outside the rectangle.
    #[inline]
    pub fn is_out_of_bounds(&self, point: Vec2) -> bool {
        !self.contains(point)
    }

    /// Returns true if the two closed rectangles share at least one point.
    ///
    /// Rectangles touching along an edge or at a corner intersect. The test
    /// is symmetric.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        let separated = self.x1() < other.x
            || self.x > other.x1()
            || self.y > other.y1()
            || self.y1() < other.y;
        !separated
    }

    /// Returns the nearest point inside the rectangle.
    #[inline]
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            clamp(point.x, self.x, self.x1()),
            clamp(point.y, self.y, self.y1()),
        )
    }

    /// Samples a point uniformly over the rectangle.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        Vec2::new(
            random_range(rng, self.x, self.x1()),
            random_range(rng, self.y, self.y1()),
        )
    }

    /// Moves the rectangle by `delta`.
    #[inline]
    pub fn translate(&mut self, delta: Vec2) -> &mut Self {
        self.x += delta.x;
        self.y += delta.y;
        self
    }

    /// Multiplies the size by `factor`.
    ///
    /// With `centered` the centre stays where it was; otherwise the top-left
    /// corner stays fixed.
    pub fn scale(&mut self, factor: f64, centered: bool) -> &mut Self {
        let center = self.center();
        self.w *= factor;
        self.h *= factor;
        if centered {
            self.x = center.x - self.w / 2.0;
            self.y = center.y - self.h / 2.0;
        }
        self
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect(x: {}, y: {}, w: {}, h: {})",
            self.x, self.y, self.w, self.h
        )
    }
}
