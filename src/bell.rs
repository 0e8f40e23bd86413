//! Bell-curve primitive
//!
//! Growth is built on a bell-shaped response: exactly `1.0` at the mean and
//! falling toward `0.0` as `|x - mean|` grows. Any such curve can drive the
//! step; [`Gaussian`] is the standard Lenia choice.

/// A bell-shaped response curve with output in `(0, 1]`.
///
/// Implementations must return `1.0` when `x == mean` and approach `0.0`
/// far from the mean. `stdev` is always finite and positive.
pub trait BellCurve: Send + Sync {
    /// Evaluate the curve at `x`.
    fn eval(&self, x: f32, mean: f32, stdev: f32) -> f32;
}

/// Gaussian bell: `exp(-((x - mean) / stdev)^2 / 2)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gaussian;

impl BellCurve for Gaussian {
    #[inline]
    fn eval(&self, x: f32, mean: f32, stdev: f32) -> f32 {
        bell(x, mean, stdev)
    }
}

/// Function-based bell curve for custom shapes
pub struct FnBell<F: Fn(f32, f32, f32) -> f32 + Send + Sync>(pub F);

impl<F: Fn(f32, f32, f32) -> f32 + Send + Sync> BellCurve for FnBell<F> {
    #[inline]
    fn eval(&self, x: f32, mean: f32, stdev: f32) -> f32 {
        (self.0)(x, mean, stdev)
    }
}

/// Gaussian bell curve.
#[inline]
pub fn bell(x: f32, mean: f32, stdev: f32) -> f32 {
    let z = (x - mean) / stdev;
    (-z * z / 2.0).exp()
}
