//! Parametric curve sampling

use log::trace;

use crate::foundation::math::Vec3;
use crate::scene::{Figure, ShapeKind};

/// Samples taken when a curve is built without an explicit count
pub const DEFAULT_SAMPLES: usize = 500;

/// Evaluate `parametric` at `count` evenly spaced values starting at `start`.
///
/// The step is `(end - start) / count`, so `end` itself is never evaluated.
/// Closed curves over a full turn rely on this to avoid repeating the seam
/// point.
pub fn sample<F>(parametric: F, start: f64, end: f64, count: usize) -> Vec<Vec3>
where
    F: Fn(f64) -> Vec3,
{
    if count == 0 {
        return Vec::new();
    }

    let step = (end - start) / count as f64;
    trace!("Sampling {count} points over [{start}, {end}) with step {step}");
    (0..count)
        .map(|k| parametric(start + k as f64 * step))
        .collect()
}

impl Figure {
    /// Open curve sampled from `parametric` with [`DEFAULT_SAMPLES`] points
    pub fn curve<F>(parametric: F, start: f64, end: f64) -> Self
    where
        F: Fn(f64) -> Vec3,
    {
        Self::curve_with_samples(parametric, start, end, DEFAULT_SAMPLES)
    }

    /// Open curve sampled from `parametric` with `samples` points
    pub fn curve_with_samples<F>(parametric: F, start: f64, end: f64, samples: usize) -> Self
    where
        F: Fn(f64) -> Vec3,
    {
        Self::from_parts(
            sample(parametric, start, end, samples),
            ShapeKind::Curve { start, end, samples },
            false,
        )
    }
}
