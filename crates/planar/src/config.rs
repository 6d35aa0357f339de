//! Serializable settings for a [`ParticleSystem`](crate::ParticleSystem).
//!
//! [`SystemConfig`] gathers everything a frame step needs besides the
//! particles themselves. It can be built in code or loaded from JSON or TOML;
//! every field has a default, so files only list what they change.
//!
//! # Example
//!
//! ```rust
//! use planar::{SystemConfig, Vec2};
//!
//! let config = SystemConfig::from_toml(r#"
//!     velocity_damping = 0.001
//!
//!     [gravity]
//!     x = 0.0
//!     y = 0.05
//! "#)?;
//!
//! assert_eq!(config.gravity, Vec2::new(0.0, 0.05));
//! assert_eq!(config.drag_radius, 0.2);
//! # Ok::<(), planar::ConfigError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::forces::PointForce;
use crate::rect::Rect;
use crate::spring::Damper;
use crate::vec2::Vec2;

/// Default distance within which a pointer grabs a particle.
pub const DEFAULT_DRAG_RADIUS: f64 = 0.2;

/// Error loading, saving or validating a [`SystemConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("velocity damping {0} is outside [0, 1]")]
    InvalidDamping(f64),
    #[error("bounds size ({w}, {h}) is negative or NaN")]
    NegativeBounds { w: f64, h: f64 },
    #[error("drag radius {0} must be non-negative")]
    InvalidDragRadius(f64),
    #[error("max age {0}ms must be non-negative")]
    InvalidMaxAge(f64),
}

/// Per-system physics settings.
///
/// Scalar fields come before nested tables so the TOML form serializes
/// cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Fraction of velocity removed every frame, in `[0, 1]`.
    pub velocity_damping: Option<f64>,
    /// Distance within which the pointer grabs a particle.
    pub drag_radius: f64,
    /// Particles older than this are reported as expired.
    pub max_age_ms: Option<f64>,
    /// Uniform acceleration applied to every particle.
    pub gravity: Vec2,
    /// World bounds; particles leaving them are reported as out of bounds.
    pub bounds: Rect,
    /// Attractors applied to every particle.
    pub point_forces: Vec<PointForce>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            velocity_damping: None,
            drag_radius: DEFAULT_DRAG_RADIUS,
            max_age_ms: None,
            gravity: Vec2::ZERO,
            bounds: Rect::unit(),
            point_forces: Vec::new(),
        }
    }
}

impl SystemConfig {
    /// Create a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    #[must_use]
    pub fn with_velocity_damping(mut self, coefficient: f64) -> Self {
        self.velocity_damping = Some(coefficient);
        self
    }

    #[must_use]
    pub fn with_max_age_ms(mut self, max_age_ms: f64) -> Self {
        self.max_age_ms = Some(max_age_ms);
        self
    }

    #[must_use]
    pub fn with_point_force(mut self, force: PointForce) -> Self {
        self.point_forces.push(force);
        self
    }

    /// The velocity damper described by `velocity_damping`, if any.
    pub fn damper(&self) -> Option<Damper> {
        self.velocity_damping.map(Damper::new)
    }

    /// Checks that every numeric setting is in range.
    ///
    /// # Errors
    /// Returns the first out-of-range setting found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(c) = self.velocity_damping {
            if !(0.0..=1.0).contains(&c) {
                return Err(ConfigError::InvalidDamping(c));
            }
        }
        let (w, h) = (self.bounds.w, self.bounds.h);
        if w.is_nan() || h.is_nan() || w < 0.0 || h < 0.0 {
            return Err(ConfigError::NegativeBounds { w, h });
        }
        if self.drag_radius.is_nan() || self.drag_radius < 0.0 {
            return Err(ConfigError::InvalidDragRadius(self.drag_radius));
        }
        if let Some(age) = self.max_age_ms {
            if age.is_nan() || age < 0.0 {
                return Err(ConfigError::InvalidMaxAge(age));
            }
        }
        Ok(())
    }

    /// Load a config from JSON text.
    ///
    /// # Errors
    /// Returns `ConfigError` if parsing or validation fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SystemConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from TOML text.
    ///
    /// # Errors
    /// Returns `ConfigError` if parsing or validation fails.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let config: SystemConfig = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a file (format inferred by extension).
    ///
    /// # Errors
    /// Returns `ConfigError` if reading, parsing, or validation fails.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&fs::read_to_string(path)?),
            Some("toml") => Self::from_toml(&fs::read_to_string(path)?),
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.into())),
            None => Err(ConfigError::UnsupportedFormat("unknown".into())),
        }
    }

    /// Serialize this config to JSON.
    ///
    /// # Errors
    /// Returns `ConfigError` if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize this config to TOML.
    ///
    /// # Errors
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
