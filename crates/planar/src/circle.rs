//! Disks and unions of overlapping disks, used to seed particle emitters.
//!
//! # Example
//!
//! ```rust
//! use planar::{Circle, CircleUnion, Vec2};
//! use rand::SeedableRng;
//! use rand_pcg::Pcg64;
//!
//! let cloud = CircleUnion::new(vec![
//!     Circle::new(Vec2::new(0.0, 0.0), 1.0),
//!     Circle::new(Vec2::new(1.5, 0.0), 1.0),
//! ]);
//!
//! let mut rng = Pcg64::seed_from_u64(1);
//! let spawn = cloud.random_point(&mut rng)?;
//! assert!(cloud.contains(spawn));
//! # Ok::<(), planar::Error>(())
//! ```

use core::f64::consts::{PI, TAU};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rect::Rect;
use crate::vec2::Vec2;

/// A closed disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub r: f64,
}

impl Circle {
    #[inline]
    pub const fn new(center: Vec2, r: f64) -> Self {
        Self { center, r }
    }

    /// Creates a circle resting on a baseline, y-down.
    ///
    /// The lowest point of the circle is `(center_x, base_y)`.
    #[inline]
    pub fn on_baseline(center_x: f64, base_y: f64, r: f64) -> Self {
        Self::new(Vec2::new(center_x, base_y - r), r)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        PI * self.r * self.r
    }

    /// Smallest axis-aligned rectangle enclosing the circle.
    #[inline]
    pub fn bounding_rect(&self) -> Rect {
        Rect::from_center(self.center, 2.0 * self.r, 2.0 * self.r)
    }

    /// Returns true if `point` lies inside or on the circle.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        (point - self.center).length_squared() <= self.r * self.r
    }

    /// Returns true if the two disks overlap.
    ///
    /// Disks that only touch at a single point do not count.
    #[inline]
    pub fn intersects(&self, other: &Circle) -> bool {
        self.center.distance_to(other.center) < self.r + other.r
    }

    /// Samples a point uniformly over the disk.
    ///
    /// The radius is drawn as `sqrt(u) * r`; drawing it linearly would bunch
    /// samples toward the centre.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        let angle = rng.random::<f64>() * TAU;
        let radius = rng.random::<f64>().sqrt() * self.r;
        self.center + Vec2::from_angle(angle) * radius
    }
}

/// A set of mutually overlapping circles treated as one region.
///
/// Serialized as a plain list of circles. Deserializing goes through
/// [`CircleUnion::new`], so isolated circles are dropped on load too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Circle>", into = "Vec<Circle>")]
pub struct CircleUnion {
    circles: Vec<Circle>,
}

impl CircleUnion {
    /// Builds a union, dropping circles that overlap no other circle.
    ///
    /// A single circle is always kept. With two or more circles, any circle
    /// whose disk does not intersect some other input circle is discarded.
    pub fn new(circles: Vec<Circle>) -> Self {
        if circles.len() <= 1 {
            return Self { circles };
        }

        let kept = circles
            .iter()
            .enumerate()
            .filter(|(i, c)| {
                circles
                    .iter()
                    .enumerate()
                    .any(|(j, other)| *i != j && c.intersects(other))
            })
            .map(|(_, c)| *c)
            .collect();

        Self { circles: kept }
    }

    /// The circles that survived filtering, in input order.
    #[inline]
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Returns true if any circle contains `point`.
    pub fn contains(&self, point: Vec2) -> bool {
        self.circles.iter().any(|c| c.contains(point))
    }

    /// Sum of the member areas (overlaps are counted once per circle).
    pub fn total_area(&self) -> f64 {
        self.circles.iter().map(Circle::area).sum()
    }

    /// Samples a point from the union.
    ///
    /// A circle is picked with probability proportional to its area and a
    /// point is then drawn uniformly inside it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCircleUnion`] if the union has no circles.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec2> {
        let (last, rest) = self.circles.split_last().ok_or(Error::EmptyCircleUnion)?;
        if rest.is_empty() {
            return Ok(last.random_point(rng));
        }

        let mut remaining = rng.random::<f64>() * self.total_area();
        for circle in rest {
            remaining -= circle.area();
            if remaining <= 0.0 {
                return Ok(circle.random_point(rng));
            }
        }
        Ok(last.random_point(rng))
    }
}

impl From<Circle> for CircleUnion {
    fn from(circle: Circle) -> Self {
        Self::new(vec![circle])
    }
}

impl From<Vec<Circle>> for CircleUnion {
    fn from(circles: Vec<Circle>) -> Self {
        Self::new(circles)
    }
}

impl From<CircleUnion> for Vec<Circle> {
    fn from(union: CircleUnion) -> Self {
        union.circles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    const TOLERANCE: f64 = 1e-10;

    #[test]
    fn test_contains_boundary() {
        let c = Circle::new(Vec2::new(1.0, 1.0), 2.0);
        assert!(c.contains(Vec2::new(3.0, 1.0)));
        assert!(c.contains(Vec2::new(1.0, 1.0)));
        assert!(!c.contains(Vec2::new(3.01, 1.0)));
    }

    #[test]
    fn test_intersects_is_strict() {
        let a = Circle::new(Vec2::ZERO, 1.0);
        let touching = Circle::new(Vec2::new(2.0, 0.0), 1.0);
        let overlapping = Circle::new(Vec2::new(1.9, 0.0), 1.0);
        assert!(!a.intersects(&touching));
        assert!(a.intersects(&overlapping));
        assert!(overlapping.intersects(&a));
    }

    #[test]
    fn test_on_baseline() {
        let c = Circle::on_baseline(5.0, 10.0, 2.0);
        assert_eq!(c.center, Vec2::new(5.0, 8.0));
        assert!(c.contains(Vec2::new(5.0, 10.0)));
    }

    #[test]
    fn test_area_and_bounds() {
        let c = Circle::new(Vec2::new(1.0, 2.0), 3.0);
        assert!((c.area() - 9.0 * PI).abs() < TOLERANCE);
        assert_eq!(c.bounding_rect(), Rect::new(-2.0, -1.0, 6.0, 6.0));
    }

    #[test]
    fn test_random_point_inside_circle() {
        let mut rng = Pcg64::seed_from_u64(3);
        let c = Circle::new(Vec2::new(-4.0, 2.0), 0.5);
        for _ in 0..1000 {
            let p = c.random_point(&mut rng);
            assert!(c.contains(p), "{p} outside circle");
        }
    }

    #[test]
    fn test_random_point_is_area_uniform() {
        // Half the area of a unit disk lies beyond radius 1/sqrt(2).
        let mut rng = Pcg64::seed_from_u64(11);
        let c = Circle::new(Vec2::ZERO, 1.0);
        let n = 20_000;
        let outer = (0..n)
            .filter(|_| c.random_point(&mut rng).length() > core::f64::consts::FRAC_1_SQRT_2)
            .count();
        let fraction = outer as f64 / n as f64;
        assert!((fraction - 0.5).abs() < 0.02, "outer fraction {fraction}");
    }

    #[test]
    fn test_union_single_circle_kept() {
        let u = CircleUnion::new(vec![Circle::new(Vec2::ZERO, 1.0)]);
        assert_eq!(u.len(), 1);
    }

    #[test]
    fn test_union_drops_isolated_circles() {
        let u = CircleUnion::new(vec![
            Circle::new(Vec2::ZERO, 1.0),
            Circle::new(Vec2::new(1.0, 0.0), 1.0),
            Circle::new(Vec2::new(100.0, 0.0), 1.0),
        ]);
        assert_eq!(u.len(), 2);
        assert!(!u.contains(Vec2::new(100.0, 0.0)));
        assert!(u.contains(Vec2::new(1.5, 0.0)));
    }

    #[test]
    fn test_union_deserialize_drops_isolated_circles() {
        let json = r#"[
            {"center": {"x": 0.0, "y": 0.0}, "r": 1.0},
            {"center": {"x": 100.0, "y": 0.0}, "r": 1.0}
        ]"#;
        let u: CircleUnion = serde_json::from_str(json).expect("valid circles");
        assert!(u.is_empty());
    }

    #[test]
    fn test_union_serde_round_trip() {
        let u = CircleUnion::new(vec![
            Circle::new(Vec2::ZERO, 1.0),
            Circle::new(Vec2::new(1.0, 0.0), 1.0),
        ]);
        let json = serde_json::to_string(&u).expect("serializable");
        assert!(json.starts_with('['));
        let back: CircleUnion = serde_json::from_str(&json).expect("parses");
        assert_eq!(back, u);
    }

    #[test]
    fn test_union_all_isolated_is_empty() {
        let u = CircleUnion::new(vec![
            Circle::new(Vec2::ZERO, 1.0),
            Circle::new(Vec2::new(10.0, 0.0), 1.0),
        ]);
        assert!(u.is_empty());
    }

    #[test]
    fn test_union_chain_keeps_every_link() {
        // a overlaps b, b overlaps c, a does not overlap c
        let u = CircleUnion::new(vec![
            Circle::new(Vec2::ZERO, 1.0),
            Circle::new(Vec2::new(1.5, 0.0), 1.0),
            Circle::new(Vec2::new(3.0, 0.0), 1.0),
        ]);
        assert_eq!(u.len(), 3);
    }

    #[test]
    fn test_empty_union_sampling_fails() {
        let mut rng = Pcg64::seed_from_u64(0);
        let u = CircleUnion::new(Vec::new());
        assert!(matches!(
            u.random_point(&mut rng),
            Err(Error::EmptyCircleUnion)
        ));
    }

    #[test]
    fn test_union_samples_stay_inside() {
        let mut rng = Pcg64::seed_from_u64(99);
        let u = CircleUnion::new(vec![
            Circle::new(Vec2::new(0.2, 0.2), 0.1),
            Circle::new(Vec2::new(0.25, 0.2), 0.05),
            Circle::new(Vec2::new(0.35, 0.22), 0.08),
        ]);
        assert_eq!(u.len(), 3);
        for _ in 0..1000 {
            let p = u.random_point(&mut rng).expect("non-empty union");
            assert!(u.contains(p), "{p} outside union");
        }
    }

    #[test]
    fn test_union_sampling_weights_by_area() {
        let mut rng = Pcg64::seed_from_u64(5);
        let big = Circle::new(Vec2::ZERO, 3.0);
        let small = Circle::new(Vec2::new(3.5, 0.0), 1.0);
        let u = CircleUnion::new(vec![big, small]);

        let n = 20_000;
        // Only the small circle reaches past x = 3
        let in_small_only = (0..n)
            .filter(|_| {
                let p = u.random_point(&mut rng).expect("non-empty union");
                !big.contains(p)
            })
            .count();
        let fraction = in_small_only as f64 / n as f64;
        // small is picked 1/10 of the time, and most of its area lies outside big
        assert!(fraction > 0.04 && fraction < 0.1, "fraction {fraction}");
    }
}
