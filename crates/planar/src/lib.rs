#![forbid(unsafe_code)]
// Allow these clippy lints for geometry/physics code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]

//! # Planar
//!
//! A small 2D geometry and particle physics kernel.
//!
//! Planar provides:
//! - **Vec2**: points and displacements with pure arithmetic
//! - **Rect**, **Ray**, **Circle**: axis-aligned rectangles, rays and disks
//!   with the intersection queries a particle sim needs
//! - **CircleUnion**: area-weighted sampling over overlapping disks
//! - **Spring** and **Damper**: Hooke's-law forces and velocity decay
//! - **Particle**: point masses advanced by semi-implicit Euler
//! - **ParticleSystem**: a frame-stepped system tying it all together
//!
//! Positions are in world units and time is in milliseconds. Nothing here
//! assumes a particular coordinate layout, though [`GRAVITY`] points along
//! +y as on a canvas.
//!
//! ## Geometry Example
//!
//! ```rust
//! use planar::{Ray, Rect, Vec2};
//!
//! let wall = Rect::new(2.0, -1.0, 1.0, 2.0);
//! let ray = Ray::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
//!
//! assert!(ray.intersects_rect(&wall));
//! assert!(!Ray::new(Vec2::ZERO, Vec2::new(-1.0, 0.0)).intersects_rect(&wall));
//! ```
//!
//! ## Particle Example
//!
//! ```rust
//! use planar::{Particle, Vec2, apply_force, integrate};
//!
//! let mut particle = Particle::new(Vec2::new(0.5, 0.2), Vec2::ZERO, 1.0);
//!
//! // One second of a unit downward force
//! apply_force(&mut particle, Vec2::new(0.0, 1.0));
//! integrate(&mut particle, 1000.0);
//!
//! assert_eq!(particle.v, Vec2::new(0.0, 1.0));
//! assert!((particle.p.y - 1.2).abs() < 1e-12);
//! ```
//!
//! ## Sampling
//!
//! Random sampling takes any [`rand::Rng`], so callers choose the generator.
//! Seed one for reproducible runs:
//!
//! ```rust
//! use planar::Rect;
//! use rand::SeedableRng;
//! use rand_pcg::Pcg64;
//!
//! let mut rng = Pcg64::seed_from_u64(42);
//! let area = Rect::new(0.0, 0.0, 2.0, 1.0);
//! assert!(area.contains(area.random_point(&mut rng)));
//! ```

mod approx;
mod circle;
mod config;
mod error;
mod forces;
mod particle;
mod ray;
mod rect;
mod spring;
mod system;
mod vec2;

pub use approx::{EPSILON, approx_eq, clamp, frame_ms, random_range};
pub use circle::{Circle, CircleUnion};
pub use config::{ConfigError, DEFAULT_DRAG_RADIUS, SystemConfig};
pub use error::{Error, Result};
pub use forces::{GRAVITY, PointForce, point_gravity};
pub use particle::{DEFAULT_RADIUS, Particle, apply_acceleration, apply_force, integrate};
pub use ray::Ray;
pub use rect::Rect;
pub use spring::{Damper, Spring};
pub use system::{FrameStats, ParticleSystem, SpringLink};
pub use vec2::{Projection, Vec2, project_onto, scale_ms};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::circle::{Circle, CircleUnion};
    pub use crate::config::SystemConfig;
    pub use crate::error::{Error, Result};
    pub use crate::forces::{GRAVITY, PointForce};
    pub use crate::particle::{Particle, apply_acceleration, apply_force, integrate};
    pub use crate::ray::Ray;
    pub use crate::rect::Rect;
    pub use crate::spring::{Damper, Spring};
    pub use crate::system::{FrameStats, ParticleSystem};
    pub use crate::vec2::Vec2;
}
