//! Error types.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors reported by the kernel.
///
/// Numeric degeneracy (a zero-length ray, normalizing a zero vector) is not
/// an error: those cases return "no intersection" or leave the value alone.
#[derive(Error, Debug)]
pub enum Error {
    /// Sampling was requested from a union that holds no circles.
    #[error("cannot generate a random point from an empty circle union")]
    EmptyCircleUnion,
    /// A damping coefficient outside `[0, 1]`.
    #[error("damping coefficient {0} is outside [0, 1]")]
    InvalidDamping(f64),
    /// A rectangle with a negative width or height.
    #[error("rectangle size ({w}, {h}) is negative")]
    NegativeSize { w: f64, h: f64 },
    /// A particle mass that is not strictly positive and finite.
    #[error("particle mass {0} must be positive and finite")]
    InvalidMass(f64),
    /// A spring link referenced a particle that does not exist.
    #[error("particle index {index} out of range for {len} particles")]
    ParticleIndex { index: usize, len: usize },
    /// Loading or validating a system configuration failed.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, Error>;
