//! Growth-and-integrate step
//!
//! One step of the automaton:
//!
//! ```text
//! g_k  = growth(perception, mean, stdev) * weight      (y, x, k)
//! g    = g_k reduced per source channel               (y, x, c)
//! next = clip(state + g / T, 0, 1)                    (y, x, c)
//! ```
//!
//! Every cell is independent within a step, so the step is a pure function
//! of its inputs. With the `parallel` feature cells are evaluated on the
//! rayon pool; the result is identical to the serial path.

use crate::bell::{BellCurve, Gaussian};
use crate::config::LeniaConfig;
use crate::error::{LeniaError, Result};
use crate::growth::accumulate_cell;
use crate::params::KernelParams;
use ndarray::{Array3, ArrayView1, ArrayView3, ArrayViewMut1, Axis, Zip};
use std::sync::Arc;
use tracing::trace;

/// A state transition rule: `(state, perception, input) -> next_state`.
pub trait Update {
    /// Compute the next state. `input` is an optional external drive.
    fn update(
        &self,
        state: ArrayView3<'_, f32>,
        perception: ArrayView3<'_, f32>,
        input: Option<ArrayView3<'_, f32>>,
    ) -> Result<Array3<f32>>;
}

/// Run one growth-and-integrate step with the Gaussian bell.
pub fn step(
    params: &KernelParams,
    state: ArrayView3<'_, f32>,
    perception: ArrayView3<'_, f32>,
    input: Option<ArrayView3<'_, f32>>,
) -> Result<Array3<f32>> {
    step_with(&Gaussian, params, state, perception, input)
}

/// Run one growth-and-integrate step under a custom bell curve.
///
/// Fails with [`LeniaError::ShapeMismatch`] when `state` does not have
/// `channel_size` channels, `perception` does not have `k` kernels, or the
/// two disagree on `(height, width)`. The external input is reserved for
/// variants driven by an outside signal and has no effect here.
pub fn step_with<B: BellCurve + ?Sized>(
    bell: &B,
    params: &KernelParams,
    state: ArrayView3<'_, f32>,
    perception: ArrayView3<'_, f32>,
    _input: Option<ArrayView3<'_, f32>>,
) -> Result<Array3<f32>> {
    let (height, width, channels) = state.dim();
    let (p_height, p_width, kernels) = perception.dim();
    params.check_channels("state", channels)?;
    params.check_kernels("perception", kernels)?;
    if p_height != height {
        return Err(LeniaError::ShapeMismatch {
            what: "perception height",
            expected: height,
            got: p_height,
        });
    }
    if p_width != width {
        return Err(LeniaError::ShapeMismatch {
            what: "perception width",
            expected: width,
            got: p_width,
        });
    }

    trace!(height, width, channels, kernels, "lenia step");

    let mut next = Array3::<f32>::zeros(state.raw_dim());
    let cells = Zip::from(next.lanes_mut(Axis(2)))
        .and(state.lanes(Axis(2)))
        .and(perception.lanes(Axis(2)));

    #[cfg(feature = "parallel")]
    cells.par_for_each(|out, s, p| integrate_cell(bell, params, out, s, p));

    #[cfg(not(feature = "parallel"))]
    cells.for_each(|out, s, p| integrate_cell(bell, params, out, s, p));

    Ok(next)
}

#[inline]
fn integrate_cell<B: BellCurve + ?Sized>(
    bell: &B,
    params: &KernelParams,
    mut out: ArrayViewMut1<'_, f32>,
    state: ArrayView1<'_, f32>,
    perception: ArrayView1<'_, f32>,
) {
    accumulate_cell(bell, params, out.view_mut(), perception);

    let t = params.time_constant();
    for (next, &s) in out.iter_mut().zip(state.iter()) {
        // max/min rather than clamp so a NaN intermediate lands on 0.0
        *next = (s + *next / t).max(0.0).min(1.0);
    }
}

/// Lenia update rule bound to a shared set of kernel parameters.
///
/// Cloning is cheap; clones share the same parameters.
#[derive(Clone, Debug)]
pub struct LeniaUpdate<B: BellCurve = Gaussian> {
    params: Arc<KernelParams>,
    bell: B,
}

impl LeniaUpdate<Gaussian> {
    /// Create an update rule from built parameters.
    pub fn new(params: Arc<KernelParams>) -> Self {
        Self::with_bell(params, Gaussian)
    }

    /// Build parameters from a configuration and wrap them.
    pub fn from_config(config: &LeniaConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(KernelParams::build(config)?)))
    }
}

impl<B: BellCurve> LeniaUpdate<B> {
    /// Create an update rule with a custom bell curve.
    pub fn with_bell(params: Arc<KernelParams>, bell: B) -> Self {
        Self { params, bell }
    }

    /// Shared kernel parameters.
    pub fn params(&self) -> &Arc<KernelParams> {
        &self.params
    }

    /// Bell curve growth is derived from.
    pub fn bell(&self) -> &B {
        &self.bell
    }
}

impl<B: BellCurve> Update for LeniaUpdate<B> {
    fn update(
        &self,
        state: ArrayView3<'_, f32>,
        perception: ArrayView3<'_, f32>,
        input: Option<ArrayView3<'_, f32>>,
    ) -> Result<Array3<f32>> {
        step_with(&self.bell, &self.params, state, perception, input)
    }
}
