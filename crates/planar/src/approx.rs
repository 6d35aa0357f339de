//! Floating point helpers shared by the geometry and physics modules.

use rand::Rng;

/// Relative tolerance used by [`approx_eq`].
pub const EPSILON: f64 = 1e-9;

/// Returns true if `a` and `b` are equal within a relative tolerance.
///
/// The tolerance scales with the larger magnitude of the two operands and
/// never drops below [`EPSILON`] in absolute terms, so values near zero
/// compare sensibly.
///
/// ```rust
/// use planar::approx_eq;
///
/// assert!(approx_eq(0.1 + 0.2, 0.3));
/// assert!(approx_eq(1e12 + 1.0, 1e12));
/// assert!(!approx_eq(1.0, 1.001));
/// ```
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    let scale = 1.0_f64.max(a.abs()).max(b.abs());
    (a - b).abs() < EPSILON * scale
}

/// Returns the frame length in milliseconds for a given frame rate.
///
/// Use this as `delta_ms` when driving a system from a fixed-rate loop.
/// Hosts that measure real elapsed time should pass that instead.
///
/// ```rust
/// use planar::frame_ms;
///
/// assert!((frame_ms(60) - 16.666_666_666_666_668).abs() < 1e-12);
/// ```
#[inline]
pub fn frame_ms(fps: u32) -> f64 {
    1000.0 / fps as f64
}

/// Clamps `n` into `[min, max]`.
#[inline]
pub fn clamp(n: f64, min: f64, max: f64) -> f64 {
    if n < min {
        min
    } else if n > max {
        max
    } else {
        n
    }
}

/// Samples a value in `[min, max)`.
///
/// `min == max` yields `min`. An inverted range is sampled as-is rather than
/// rejected, matching how rectangles with negative sizes are left alone.
#[inline]
pub fn random_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.random::<f64>() * (max - min) + min
}
