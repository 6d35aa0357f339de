//! Hooke's-law springs and multiplicative velocity damping.
//!
//! A [`Spring`] turns the positions of two endpoints into a force vector. It
//! holds no per-frame state, so one spring value can drive any number of
//! particle pairs.
//!
//! # Example
//!
//! ```rust
//! use planar::{Spring, Vec2};
//!
//! let spring = Spring::new(10.0, 1.0);
//!
//! // Stretched to length 3: pulled toward the anchor with magnitude k * 2
//! let force = spring.calculate_force(Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0));
//! assert_eq!(force, Vec2::new(20.0, 0.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::vec2::Vec2;

/// A linear spring with an optional damper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    /// Spring constant.
    pub k: f64,
    /// Length at which the spring exerts no force.
    pub rest_length: f64,
    /// Scales the spring force down after it is computed.
    #[serde(default)]
    pub damper: Option<Damper>,
}

impl Spring {
    /// Creates an undamped spring.
    ///
    /// # Arguments
    ///
    /// * `k` - Spring constant. Higher values pull harder per unit of stretch.
    /// * `rest_length` - Natural length of the spring.
    #[inline]
    pub const fn new(k: f64, rest_length: f64) -> Self {
        Self {
            k,
            rest_length,
            damper: None,
        }
    }

    /// Returns the same spring with `damper` attached.
    #[inline]
    pub const fn with_damper(self, damper: Damper) -> Self {
        Self {
            damper: Some(damper),
            ..self
        }
    }

    /// Computes the force the spring exerts on `object` when its other end
    /// is held at `anchor`.
    ///
    /// The force points toward the anchor when the spring is stretched past
    /// its rest length and away from it when compressed. Its magnitude is
    /// `k * |length - rest_length|`. Coincident endpoints have no direction
    /// and produce a zero force.
    ///
    /// The attached damper, if any, is applied to the resulting force. It
    /// does not see the particles' velocities; velocity damping is a
    /// separate integration-time step.
    pub fn calculate_force(&self, object: Vec2, anchor: Vec2) -> Vec2 {
        let direction = object.point_at(anchor);
        let extension = direction.length() - self.rest_length;
        let tension = direction.normalize() * (self.k * extension);

        match self.damper {
            Some(damper) => damper.apply_damping_force(tension),
            None => tension,
        }
    }
}

/// Multiplicative decay: each application keeps `1 - damping_coefficient`
/// of its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Damper {
    /// Fraction removed per application, expected in `[0, 1]`.
    pub damping_coefficient: f64,
}

impl Damper {
    /// Creates a damper without checking the coefficient.
    ///
    /// Values outside `[0, 1]` make velocities grow or flip sign.
    #[inline]
    pub const fn new(damping_coefficient: f64) -> Self {
        Self {
            damping_coefficient,
        }
    }

    /// Creates a damper, rejecting coefficients outside `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDamping`] for a coefficient outside `[0, 1]`
    /// (including NaN).
    pub fn try_new(damping_coefficient: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&damping_coefficient) {
            return Err(Error::InvalidDamping(damping_coefficient));
        }
        Ok(Self::new(damping_coefficient))
    }

    /// Returns `velocity * (1 - damping_coefficient)`.
    #[inline]
    pub fn apply_damping_force(&self, velocity: Vec2) -> Vec2 {
        velocity * (1.0 - self.damping_coefficient)
    }
}
