//! Point masses and the semi-implicit Euler integrator.
//!
//! A [`Particle`] is plain data owned by whatever system spawned it. The
//! functions here only ever borrow it. Each frame the owner must:
//!
//! 1. clear the acceleration ([`Particle::clear_acceleration`]),
//! 2. accumulate forces ([`apply_force`], [`apply_acceleration`]),
//! 3. integrate ([`integrate`] or [`Particle::step`]).
//!
//! The integrator never clears the acceleration itself. Skipping step 1 makes
//! forces from earlier frames pile up.
//!
//! # Example
//!
//! ```rust
//! use planar::{Particle, Vec2, apply_force};
//!
//! let mut particle = Particle::new(Vec2::new(0.5, 0.2), Vec2::ZERO, 1.0);
//!
//! particle.clear_acceleration();
//! apply_force(&mut particle, Vec2::new(0.0, 1.0));
//! particle.step(1000.0);
//!
//! assert_eq!(particle.v, Vec2::new(0.0, 1.0));
//! assert!((particle.p.y - 1.2).abs() < 1e-12);
//! assert_eq!(particle.age, 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::vec2::Vec2;

/// Collision radius given to particles that do not specify one.
pub const DEFAULT_RADIUS: f64 = 0.01;

/// A point mass with position, velocity and accumulated acceleration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Position.
    pub p: Vec2,
    /// Velocity, in units per second.
    pub v: Vec2,
    /// Acceleration accumulated this frame, in units per second squared.
    pub a: Vec2,
    /// Mass. Must be positive.
    pub m: f64,
    /// Collision radius in world units.
    pub r: f64,
    /// Number of frames the particle has moved.
    pub age: u64,
    /// Milliseconds the particle has moved.
    pub age_ms: f64,
}

impl Default for Particle {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::ZERO, 1.0)
    }
}

impl Particle {
    /// Creates a particle at rest acceleration-wise with zero age.
    #[inline]
    pub const fn new(p: Vec2, v: Vec2, m: f64) -> Self {
        Self {
            p,
            v,
            a: Vec2::ZERO,
            m,
            r: DEFAULT_RADIUS,
            age: 0,
            age_ms: 0.0,
        }
    }

    /// Like [`Particle::new`], but rejects masses that are not positive and
    /// finite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMass`] for a zero, negative, NaN or infinite mass.
    pub fn try_new(p: Vec2, v: Vec2, m: f64) -> Result<Self> {
        if !(m.is_finite() && m > 0.0) {
            return Err(Error::InvalidMass(m));
        }
        Ok(Self::new(p, v, m))
    }

    /// Returns the same particle with collision radius `r`.
    #[inline]
    pub const fn with_radius(self, r: f64) -> Self {
        Self { r, ..self }
    }

    /// Re-initializes every field in place, for recycling.
    ///
    /// The radius keeps its current value.
    pub fn reinit(&mut self, p: Vec2, v: Vec2, m: f64) {
        self.p = p;
        self.v = v;
        self.a = Vec2::ZERO;
        self.m = m;
        self.age = 0;
        self.age_ms = 0.0;
    }

    #[inline]
    pub fn clear_acceleration(&mut self) {
        self.a = Vec2::ZERO;
    }

    /// Advances one frame: integrate, then age.
    #[inline]
    pub fn step(&mut self, delta_ms: f64) {
        integrate(self, delta_ms);
        self.advance_age(delta_ms);
    }

    /// Moves by the current velocity and ages, ignoring acceleration.
    ///
    /// For systems that steer velocity directly instead of through forces.
    #[inline]
    pub fn move_and_age(&mut self, delta_ms: f64) {
        self.p += self.v * (delta_ms / 1000.0);
        self.advance_age(delta_ms);
    }

    #[inline]
    fn advance_age(&mut self, delta_ms: f64) {
        self.age += 1;
        self.age_ms += delta_ms;
    }
}

/// Adds `force / m` to the particle's acceleration.
#[inline]
pub fn apply_force(particle: &mut Particle, force: Vec2) {
    particle.a += force / particle.m;
}

/// Adds `accel` to the particle's acceleration regardless of mass.
///
/// Uniform gravity fields accelerate every mass equally; use this for them.
#[inline]
pub fn apply_acceleration(particle: &mut Particle, accel: Vec2) {
    particle.a += accel;
}

/// Semi-implicit Euler step over `delta_ms` milliseconds.
///
/// Velocity is updated first and the new velocity moves the position. The
/// accumulated acceleration is left untouched and age is not advanced.
#[inline]
pub fn integrate(particle: &mut Particle, delta_ms: f64) {
    let time_scale = delta_ms / 1000.0;
    particle.v += particle.a * time_scale;
    particle.p += particle.v * time_scale;
}
