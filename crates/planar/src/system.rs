//! A frame-stepped particle system with springs, attractors and pointer drag.
//!
//! [`ParticleSystem::step`] runs one frame in a fixed order:
//!
//! 1. every acceleration is cleared,
//! 2. uniform gravity, point forces and spring links are accumulated from the
//!    positions at the start of the frame,
//! 3. the pointer, if any, grabs the nearest particle within reach and pins it,
//! 4. every other particle has its velocity damped and is integrated and aged,
//! 5. particles that left the bounds or outlived `max_age_ms` are reported.
//!
//! # Example
//!
//! ```rust
//! use planar::{Particle, ParticleSystem, Spring, SystemConfig, Vec2};
//!
//! let mut system = ParticleSystem::new(SystemConfig::default());
//! let a = system.add_particle(Particle::new(Vec2::new(0.4, 0.5), Vec2::ZERO, 1.0));
//! let b = system.add_particle(Particle::new(Vec2::new(0.6, 0.5), Vec2::ZERO, 1.0));
//! system.link(a, b, Spring::new(10.0, 0.1))?;
//!
//! let stats = system.step(16.0, None);
//! assert!(stats.out_of_bounds.is_empty());
//!
//! // The stretched spring pulls the pair together
//! let gap = system.particles()[a].p.distance_to(system.particles()[b].p);
//! assert!(gap < 0.2);
//! # Ok::<(), planar::Error>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::SystemConfig;
use crate::error::{Error, Result};
use crate::particle::{Particle, apply_acceleration, apply_force};
use crate::spring::Spring;
use crate::vec2::Vec2;

/// A spring connecting two particles of a system by index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringLink {
    pub a: usize,
    pub b: usize,
    pub spring: Spring,
}

impl SpringLink {
    /// Force on `a`; `b` receives its negation.
    #[inline]
    fn force(&self, particles: &[Particle]) -> Vec2 {
        self.spring
            .calculate_force(particles[self.a].p, particles[self.b].p)
    }
}

/// What happened during one [`ParticleSystem::step`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Particles whose position ended the frame outside the bounds.
    pub out_of_bounds: Vec<usize>,
    /// Particles older than `max_age_ms` at the end of the frame.
    pub expired: Vec<usize>,
    /// The particle held by the pointer this frame.
    pub dragged: Option<usize>,
    /// How many particles were handed to the recycle callback. Always zero
    /// for [`ParticleSystem::step`].
    pub recycled: usize,
}

impl FrameStats {
    /// Returns true if no particle was reported.
    pub fn is_quiet(&self) -> bool {
        self.out_of_bounds.is_empty() && self.expired.is_empty()
    }
}

/// Particles, the springs between them, and the settings that drive them.
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    config: SystemConfig,
    particles: Vec<Particle>,
    springs: Vec<SpringLink>,
    frame: u64,
}

impl ParticleSystem {
    /// Creates an empty system. The config is used as given; call
    /// [`SystemConfig::validate`] first if it came from an untrusted source.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            config,
            particles: Vec::new(),
            springs: Vec::new(),
            frame: 0,
        }
    }

    /// Creates an empty system after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a setting is out of range.
    pub fn try_new(config: SystemConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Adds a particle and returns its index.
    pub fn add_particle(&mut self, particle: Particle) -> usize {
        self.particles.push(particle);
        self.particles.len() - 1
    }

    /// Connects particles `a` and `b` with `spring`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParticleIndex`] if either index has no particle.
    pub fn link(&mut self, a: usize, b: usize, spring: Spring) -> Result<()> {
        let len = self.particles.len();
        for index in [a, b] {
            if index >= len {
                return Err(Error::ParticleIndex { index, len });
            }
        }
        self.springs.push(SpringLink { a, b, spring });
        Ok(())
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn springs(&self) -> &[SpringLink] {
        &self.springs
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Number of frames stepped so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advances every particle by `delta_ms` milliseconds.
    ///
    /// `pointer` is the position of a held pointer in world coordinates, or
    /// `None` when nothing is pressed. Reported particles are left as they
    /// are; use [`ParticleSystem::step_with_recycle`] to re-spawn them.
    pub fn step(&mut self, delta_ms: f64, pointer: Option<Vec2>) -> FrameStats {
        self.run_frame(delta_ms, pointer, None::<fn(usize, &mut Particle)>)
    }

    /// Like [`ParticleSystem::step`], but calls `recycle` once for every
    /// particle reported as out of bounds or expired.
    ///
    /// The callback receives the particle's index and a mutable reference,
    /// typically to call [`Particle::reinit`] on it.
    pub fn step_with_recycle<F>(
        &mut self,
        delta_ms: f64,
        pointer: Option<Vec2>,
        recycle: F,
    ) -> FrameStats
    where
        F: FnMut(usize, &mut Particle),
    {
        self.run_frame(delta_ms, pointer, Some(recycle))
    }

    fn run_frame<F>(
        &mut self,
        delta_ms: f64,
        pointer: Option<Vec2>,
        mut recycle: Option<F>,
    ) -> FrameStats
    where
        F: FnMut(usize, &mut Particle),
    {
        self.frame += 1;

        for particle in &mut self.particles {
            particle.clear_acceleration();
        }
        self.accumulate_forces();

        let dragged = pointer.and_then(|p| self.grab(p));
        let damper = self.config.damper();
        for (i, particle) in self.particles.iter_mut().enumerate() {
            if dragged == Some(i) {
                continue;
            }
            if let Some(damper) = damper {
                particle.v = damper.apply_damping_force(particle.v);
            }
            particle.step(delta_ms);
        }

        let mut stats = FrameStats {
            dragged,
            ..FrameStats::default()
        };
        for (i, particle) in self.particles.iter_mut().enumerate() {
            let outside = self.config.bounds.is_out_of_bounds(particle.p);
            let expired = self
                .config
                .max_age_ms
                .is_some_and(|max| particle.age_ms > max);
            if outside {
                stats.out_of_bounds.push(i);
            }
            if expired {
                stats.expired.push(i);
            }
            if outside || expired {
                if let Some(recycle) = recycle.as_mut() {
                    recycle(i, particle);
                    stats.recycled += 1;
                }
            }
        }

        debug!(
            frame = self.frame,
            particles = self.particles.len(),
            out_of_bounds = stats.out_of_bounds.len(),
            expired = stats.expired.len(),
            dragged = ?stats.dragged,
            "ParticleSystem: frame stepped"
        );
        stats
    }

    fn accumulate_forces(&mut self) {
        let gravity = self.config.gravity;
        for particle in &mut self.particles {
            apply_acceleration(particle, gravity);
            for force in &self.config.point_forces {
                apply_acceleration(particle, force.force_on(particle.p));
            }
        }

        // Every link reads positions before anything moves this frame
        for link in &self.springs {
            let force = link.force(&self.particles);
            trace!(a = link.a, b = link.b, fx = force.x, fy = force.y, "spring link");
            apply_force(&mut self.particles[link.a], force);
            apply_force(&mut self.particles[link.b], -force);
        }
    }

    /// Pins the particle nearest `pointer` to it if one is within the drag
    /// radius. A pointer outside the bounds grabs nothing.
    fn grab(&mut self, pointer: Vec2) -> Option<usize> {
        if !self.config.bounds.contains(pointer) {
            return None;
        }
        let radius = self.config.drag_radius;
        let (index, distance) = self
            .particles
            .iter()
            .enumerate()
            .map(|(i, particle)| (i, particle.p.distance_to(pointer)))
            .min_by(|(_, a), (_, b)| a.total_cmp(b))?;
        if distance > radius {
            return None;
        }

        let particle = &mut self.particles[index];
        particle.p = pointer;
        particle.v = Vec2::ZERO;
        Some(index)
    }
}
