//! Headless spring triangle.
//!
//! Three particles joined by springs, plus a fourth at their centroid tied to
//! each corner, hang under a point attractor in the middle of the world. For
//! the first few frames a scripted pointer drags the light "bouncer" corner
//! to one side, then lets go.
//!
//! ## Running
//!
//! ```bash
//! cargo run --example spring_triangle -- --frames 240 --drag-frames 30
//!
//! # Per-frame system logs
//! RUST_LOG=planar=debug cargo run --example spring_triangle
//!
//! # Settings from a file instead of the built-in ones
//! cargo run --example spring_triangle -- --config springs.toml
//! ```

use std::path::PathBuf;

use clap::Parser;
use planar::{
    Particle, ParticleSystem, PointForce, Rect, Spring, SystemConfig, Vec2, frame_ms, random_range,
};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Run the spring triangle without a renderer and log where it ends up.
#[derive(Parser, Debug)]
#[command(name = "spring_triangle", about)]
struct Args {
    /// Number of frames to simulate
    #[arg(long, short = 'n', default_value_t = 240)]
    frames: u32,

    /// Simulated frame rate
    #[arg(long, default_value_t = 60, env = "PLANAR_FPS")]
    fps: u32,

    /// Frames during which the pointer drags the bouncer
    #[arg(long, default_value_t = 30)]
    drag_frames: u32,

    /// Seed for the jitter added to the starting positions
    #[arg(long, short = 's', default_value_t = 42, env = "PLANAR_SEED")]
    seed: u64,

    /// Load system settings from a JSON or TOML file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
}

fn default_config() -> SystemConfig {
    let bounds = Rect::unit();
    SystemConfig::new()
        .with_bounds(bounds)
        .with_velocity_damping(0.001)
        .with_point_force(PointForce::new(bounds.center(), 0.05))
}

fn build(config: SystemConfig, rng: &mut Pcg64) -> planar::Result<(ParticleSystem, usize)> {
    let bounds = config.bounds;
    let mut system = ParticleSystem::try_new(config)?;
    let jitter = bounds.h * 0.01;
    let mut nudge = |p: Vec2| {
        p + Vec2::new(
            random_range(rng, -jitter, jitter),
            random_range(rng, -jitter, jitter),
        )
    };

    let center_x = bounds.x + bounds.w / 2.0;
    let anchor_p = nudge(Vec2::new(center_x, bounds.y + bounds.h * 0.1));
    let bouncer_p = nudge(Vec2::new(center_x, bounds.y + bounds.h * 0.2));
    let other_p = anchor_p.rotate_about(bouncer_p, -45.0);
    let centroid = (anchor_p + bouncer_p + other_p) / 3.0;

    let anchor = system.add_particle(Particle::try_new(anchor_p, Vec2::ZERO, 30.0)?);
    let bouncer = system.add_particle(Particle::try_new(bouncer_p, Vec2::ZERO, 1.0)?);
    let other = system.add_particle(Particle::try_new(other_p, Vec2::ZERO, 1.0)?);
    let middle = system.add_particle(Particle::try_new(centroid, Vec2::ZERO, 1.0)?);

    let k = 10.0;
    let edge = Spring::new(k, bounds.h * 0.3);
    system.link(bouncer, anchor, edge)?;
    system.link(bouncer, other, edge)?;
    system.link(other, anchor, edge)?;
    for corner in [anchor, bouncer, other] {
        let rest = centroid.distance_to(system.particles()[corner].p);
        system.link(middle, corner, Spring::new(k, rest))?;
    }

    Ok((system, bouncer))
}

fn main() -> planar::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => SystemConfig::from_file(path)?,
        None => default_config(),
    };

    let mut rng = Pcg64::seed_from_u64(args.seed);
    let (mut system, bouncer) = build(config, &mut rng)?;
    let dt = frame_ms(args.fps);

    let start = system.particles()[bouncer].p;
    let drag_to = start + Vec2::new(0.25, 0.1);
    info!(frames = args.frames, fps = args.fps, seed = args.seed, "starting simulation");

    for frame in 0..args.frames {
        let pointer = (frame < args.drag_frames).then(|| {
            let t = f64::from(frame + 1) / f64::from(args.drag_frames);
            start.lerp(drag_to, t)
        });
        let stats = system.step(dt, pointer);

        if !stats.out_of_bounds.is_empty() {
            info!(frame, particles = ?stats.out_of_bounds, "left the world bounds");
        }
        if frame % args.fps.max(1) == 0 {
            let p = system.particles()[bouncer].p;
            info!(frame, x = p.x, y = p.y, dragged = stats.dragged.is_some(), "bouncer");
        }
    }

    for (i, particle) in system.particles().iter().enumerate() {
        info!(index = i, position = %particle.p, velocity = %particle.v, "final state");
    }
    Ok(())
}
