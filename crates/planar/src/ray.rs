//! Rays and ray queries.
//!
//! A [`Ray`] starts at `p` and extends forever along `v`. The direction does
//! not have to be unit length; parametric distances returned by the queries
//! are measured in multiples of `v`.
//!
//! A ray whose direction is exactly `(0, 0)` is degenerate. It intersects
//! nothing, not even its own origin. Queries on a degenerate ray log a
//! warning and report a miss instead of failing, since such rays show up
//! routinely when particles are spawned or recycled.
//!
//! # Example
//!
//! ```rust
//! use planar::{Ray, Rect, Vec2};
//!
//! let ray = Ray::new(Vec2::new(0.0, 25.0), Vec2::new(1.0, 0.0));
//! let rect = Rect::new(10.0, 10.0, 20.0, 30.0);
//!
//! assert!(ray.intersects_rect(&rect));
//! assert_eq!(ray.intersects_point(Vec2::new(4.0, 25.0)), Some(4.0));
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::approx::approx_eq;
use crate::rect::Rect;
use crate::vec2::Vec2;

/// A half-line with an origin and a direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Origin.
    pub p: Vec2,
    /// Direction.
    pub v: Vec2,
}

impl Ray {
    #[inline]
    pub const fn new(p: Vec2, v: Vec2) -> Self {
        Self { p, v }
    }

    /// Creates the ray starting at `p0` and passing through `p1` at `t = 1`.
    #[inline]
    pub fn from_points(p0: Vec2, p1: Vec2) -> Self {
        Self::new(p0, p0.point_at(p1))
    }

    /// Returns the same ray with a unit-length direction.
    #[inline]
    pub fn normalized(self) -> Self {
        Self::new(self.p, self.v.normalize())
    }

    /// Returns true if the direction is exactly zero.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.v.x == 0.0 && self.v.y == 0.0
    }

    /// Returns the point at parameter `t`: `p + t * v`.
    #[inline]
    pub fn get_point(&self, t: f64) -> Vec2 {
        self.p + self.v * t
    }

    /// Returns the `t >= 0` at which the ray passes through `point`.
    ///
    /// The point is moved into the ray's frame and `t` is solved per axis.
    /// When one direction component is (nearly) zero only the other axis is
    /// solved, so a vertical ray reports a hit for any point ahead of it on
    /// the y axis without re-checking the x offset, and likewise for a
    /// horizontal ray. Otherwise both axes must agree within tolerance.
    ///
    /// Returns `None` when there is no such non-negative `t` or the ray is
    /// degenerate.
    pub fn intersects_point(&self, point: Vec2) -> Option<f64> {
        if self.is_degenerate() {
            warn!(origin = %self.p, "ray has zero length, cannot intersect with point");
            return None;
        }

        let local = point - self.p;
        let tx = local.x / self.v.x;
        let ty = local.y / self.v.y;

        if approx_eq(self.v.x, 0.0) && ty >= 0.0 {
            Some(ty)
        } else if approx_eq(self.v.y, 0.0) && tx >= 0.0 {
            Some(tx)
        } else if tx < 0.0 || ty < 0.0 {
            None
        } else if approx_eq(tx, ty) {
            Some(tx)
        } else {
            None
        }
    }

    /// Returns true if [`intersects_point`](Self::intersects_point) finds a hit.
    #[inline]
    pub fn does_intersect_point(&self, point: Vec2) -> bool {
        self.intersects_point(point).is_some()
    }

    /// Returns true if the ray touches the closed rectangle.
    ///
    /// A ray starting inside or on the edge of the rectangle always hits it.
    /// Otherwise this is a slab test: the ray's parameter interval inside the
    /// x slab must overlap its interval inside the y slab at some `t >= 0`.
    /// Intervals are closed, so a ray that only grazes a corner counts as a
    /// hit. Horizontal and vertical rays only hit when their origin lies
    /// within the rectangle's extent on the other axis.
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        if self.is_degenerate() {
            warn!(origin = %self.p, "ray has zero length, cannot intersect with rectangle");
            return false;
        }

        if rect.contains(self.p) {
            return true;
        }

        let local = Rect::from_point_size(rect.p() - self.p, rect.w, rect.h);

        // Parametric hit times for the lines x = local.x, x = local.x1, y = local.y, y = local.y1
        let txa = local.x / self.v.x;
        let txb = local.x1() / self.v.x;
        let tyc = local.y / self.v.y;
        let tyd = local.y1() / self.v.y;

        let (tx_enter, tx_exit) = ordered(txa, txb, self.v.x);
        let (ty_enter, ty_exit) = ordered(tyc, tyd, self.v.y);

        if approx_eq(self.v.y, 0.0) {
            // Horizontal: origin must sit between the top and bottom edges
            if local.y > 0.0 || local.y1() < 0.0 {
                return false;
            }
            return tx_exit >= 0.0 && tx_enter <= tx_exit;
        }

        if approx_eq(self.v.x, 0.0) {
            // Vertical: origin must sit between the left and right edges
            if local.x > 0.0 || local.x1() < 0.0 {
                return false;
            }
            return ty_exit >= 0.0 && ty_enter <= ty_exit;
        }

        let enter = tx_enter.max(ty_enter).max(0.0);
        let exit = tx_exit.min(ty_exit);
        enter <= exit
    }
}

/// Orders a pair of slab hit times so the ray enters at the first one.
#[inline]
fn ordered(near_edge: f64, far_edge: f64, component: f64) -> (f64, f64) {
    if component > 0.0 {
        (near_edge, far_edge)
    } else {
        (far_edge, near_edge)
    }
}
