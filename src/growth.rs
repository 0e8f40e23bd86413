//! Growth function and growth fields
//!
//! `growth(x) = 2 * bell(x) - 1` maps a perception value into `(-1, 1]`:
//! full growth when the neighbourhood sits at the kernel's mean, full decay
//! far from it.
//!
//! The per-kernel parameters are indexed by the last (kernel) axis of the
//! perception field. The kernel-to-channel reduction is a direct
//! accumulation keyed by each kernel's source channel, which matches the
//! product with the one-hot matrix without materialising it.

use crate::bell::{BellCurve, Gaussian};
use crate::error::Result;
use crate::params::KernelParams;
use ndarray::{Array3, ArrayView1, ArrayView3, ArrayViewMut1, Axis, Zip};

/// Growth value for one perception sample, using the Gaussian bell.
#[inline]
pub fn growth(x: f32, mean: f32, stdev: f32) -> f32 {
    growth_with(&Gaussian, x, mean, stdev)
}

/// Growth value for one perception sample under a custom bell curve.
#[inline]
pub fn growth_with<B: BellCurve + ?Sized>(bell: &B, x: f32, mean: f32, stdev: f32) -> f32 {
    2.0 * bell.eval(x, mean, stdev) - 1.0
}

/// Weighted per-kernel growth `g_k`, shape `(height, width, k)`.
pub fn weighted_growth(params: &KernelParams, perception: ArrayView3<'_, f32>) -> Result<Array3<f32>> {
    weighted_growth_with(&Gaussian, params, perception)
}

/// [`weighted_growth`] under a custom bell curve.
pub fn weighted_growth_with<B: BellCurve + ?Sized>(
    bell: &B,
    params: &KernelParams,
    perception: ArrayView3<'_, f32>,
) -> Result<Array3<f32>> {
    params.check_kernels("perception", perception.len_of(Axis(2)))?;

    let (mean, stdev, weight) = (params.mean(), params.stdev(), params.weight());
    let mut g_k = Array3::<f32>::zeros(perception.raw_dim());
    Zip::indexed(&mut g_k)
        .and(&perception)
        .for_each(|(_, _, i), g, &x| {
            *g = growth_with(bell, x, mean[i], stdev[i]) * weight[i];
        });

    Ok(g_k)
}

/// Per-channel growth `g`, shape `(height, width, channel_size)`.
pub fn channel_growth(params: &KernelParams, perception: ArrayView3<'_, f32>) -> Result<Array3<f32>> {
    channel_growth_with(&Gaussian, params, perception)
}

/// [`channel_growth`] under a custom bell curve.
pub fn channel_growth_with<B: BellCurve + ?Sized>(
    bell: &B,
    params: &KernelParams,
    perception: ArrayView3<'_, f32>,
) -> Result<Array3<f32>> {
    params.check_kernels("perception", perception.len_of(Axis(2)))?;

    let (height, width, _) = perception.dim();
    let mut g = Array3::<f32>::zeros((height, width, params.channel_size()));
    Zip::from(g.lanes_mut(Axis(2)))
        .and(perception.lanes(Axis(2)))
        .for_each(|out, p| accumulate_cell(bell, params, out, p));

    Ok(g)
}

/// Sum the weighted growth of every kernel into its channel slot of `out`.
///
/// `out` must be zeroed and have length `channel_size`; `perception` has
/// length `k`. Kernels are added in declaration order.
#[inline]
pub(crate) fn accumulate_cell<B: BellCurve + ?Sized>(
    bell: &B,
    params: &KernelParams,
    mut out: ArrayViewMut1<'_, f32>,
    perception: ArrayView1<'_, f32>,
) {
    let (mean, stdev, weight) = (params.mean(), params.stdev(), params.weight());
    for (i, (&x, &c)) in perception.iter().zip(params.source_channels()).enumerate() {
        out[c] += growth_with(bell, x, mean[i], stdev[i]) * weight[i];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bell::FnBell;
    use crate::config::{KernelSpec, LeniaConfig};
    use crate::error::LeniaError;
    use ndarray::Array;

    fn params(channels: usize, kernels: Vec<KernelSpec>) -> KernelParams {
        KernelParams::build(&LeniaConfig::new(channels, 1.0, kernels)).unwrap()
    }

    #[test]
    fn test_growth_peak() {
        assert_eq!(growth(0.15, 0.15, 0.015), 1.0);
        assert_eq!(growth(0.5, 0.5, 0.1), 1.0);
    }

    #[test]
    fn test_growth_below_peak_off_mean() {
        for x in [0.49, 0.51, 0.0, 1.0] {
            let g = growth(x, 0.5, 0.1);
            assert!(g < 1.0 && g > -1.0, "growth({x}) = {g}");
        }
    }

    #[test]
    fn test_growth_far() {
        let g = growth(100.0, 0.5, 0.1);
        assert!((g - -1.0).abs() < 1e-6);
    }

    #[test]
    fn test_weighted_growth_broadcasts_over_kernels() {
        let params = params(
            1,
            vec![
                KernelSpec::new(0.5, 0.1, 1.0, 0),
                KernelSpec::new(0.2, 0.1, 0.5, 0),
            ],
        );
        // Every cell sees perception equal to kernel 0's mean
        let perception = Array3::from_elem((2, 3, 2), 0.5);
        let g_k = weighted_growth(&params, perception.view()).unwrap();

        assert_eq!(g_k.dim(), (2, 3, 2));
        let expected_second = growth(0.5, 0.2, 0.1) * 0.5;
        for cell in g_k.lanes(Axis(2)) {
            assert_eq!(cell[0], 1.0);
            assert!((cell[1] - expected_second).abs() < 1e-6);
        }
    }

    #[test]
    fn test_channel_growth_matches_matrix_product() {
        let params = params(
            3,
            vec![
                KernelSpec::new(0.27, 0.06, 0.14, 0),
                KernelSpec::new(0.16, 0.02, 1.0, 2),
                KernelSpec::new(0.30, 0.04, 0.5, 0),
                KernelSpec::new(0.10, 0.05, -0.3, 1),
            ],
        );
        let perception = Array::linspace(0.0, 0.6, 4 * 5 * 4)
            .into_shape((4, 5, 4))
            .unwrap();

        let g = channel_growth(&params, perception.view()).unwrap();
        let g_k = weighted_growth(&params, perception.view()).unwrap();

        let flat = g_k.into_shape((20, 4)).unwrap();
        let via_matrix = flat
            .dot(params.kernel_to_channel())
            .into_shape((4, 5, 3))
            .unwrap();

        assert_eq!(g.dim(), (4, 5, 3));
        Zip::from(&g).and(&via_matrix).for_each(|&a, &b| {
            assert!((a - b).abs() < 1e-6, "{a} != {b}");
        });
    }

    #[test]
    fn test_shared_channel_is_additive() {
        let params = params(
            2,
            vec![
                KernelSpec::new(0.5, 0.1, 0.25, 1),
                KernelSpec::new(0.5, 0.1, 0.5, 1),
            ],
        );
        let perception = Array3::from_elem((1, 1, 2), 0.5);
        let g = channel_growth(&params, perception.view()).unwrap();

        assert_eq!(g[[0, 0, 0]], 0.0);
        assert_eq!(g[[0, 0, 1]], 0.75);
    }

    #[test]
    fn test_custom_bell() {
        let params = params(1, vec![KernelSpec::new(0.5, 0.1, 1.0, 0)]);
        let flat = FnBell(|_: f32, _: f32, _: f32| 0.5);
        let perception = Array3::from_elem((2, 2, 1), 7.0);

        let g = channel_growth_with(&flat, &params, perception.view()).unwrap();
        assert!(g.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_kernel_dimension_mismatch() {
        let params = params(1, vec![KernelSpec::new(0.5, 0.1, 1.0, 0)]);
        let perception = Array3::<f32>::zeros((2, 2, 3));

        assert_eq!(
            weighted_growth(&params, perception.view()).unwrap_err(),
            LeniaError::ShapeMismatch {
                what: "perception",
                expected: 1,
                got: 3
            }
        );
        assert!(channel_growth(&params, perception.view()).is_err());
    }
}
