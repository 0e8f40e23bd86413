//! Kernel parameter vectors - the numeric form of a configuration
//!
//! Built once from a [`LeniaConfig`] and read-only afterwards. Wrap it in an
//! `Arc` to share one set of parameters across any number of automata.

use crate::config::LeniaConfig;
use crate::error::{LeniaError, Result};
use ndarray::{Array1, Array2};
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Per-kernel growth parameters and the kernel-to-channel mapping.
///
/// Invariants (established by [`KernelParams::build`]):
/// - `mean`, `stdev`, `weight` and `source_channels` all have length `k`
/// - every `stdev` is finite and strictly positive
/// - row `i` of the kernel-to-channel matrix is one-hot at `source_channels[i]`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct KernelParams {
    mean: Array1<f32>,
    stdev: Array1<f32>,
    weight: Array1<f32>,
    source_channels: Vec<usize>,
    kernel_to_channel: Array2<f32>,
    channel_size: usize,
    time_constant: f32,
}

impl KernelParams {
    /// Build parameter vectors from a configuration, in declaration order.
    pub fn build(config: &LeniaConfig) -> Result<Self> {
        if let Err(err) = config.validate() {
            warn!(%err, "rejected lenia configuration");
            return Err(err);
        }

        let k = config.kernel_count();
        let kernels = &config.kernel_params;

        let mean: Array1<f32> = kernels.iter().map(|kp| kp.mean).collect();
        let stdev: Array1<f32> = kernels.iter().map(|kp| kp.stdev).collect();
        let weight: Array1<f32> = kernels.iter().map(|kp| kp.weight).collect();
        let source_channels: Vec<usize> = kernels.iter().map(|kp| kp.source_channel).collect();

        let mut kernel_to_channel = Array2::zeros((k, config.channel_size));
        for (i, &c) in source_channels.iter().enumerate() {
            kernel_to_channel[[i, c]] = 1.0;
        }

        debug!(
            kernels = k,
            channels = config.channel_size,
            time_constant = config.time_constant,
            "built kernel parameters"
        );

        Ok(Self {
            mean,
            stdev,
            weight,
            source_channels,
            kernel_to_channel,
            channel_size: config.channel_size,
            time_constant: config.time_constant,
        })
    }

    /// Bell centers, one per kernel.
    pub fn mean(&self) -> &Array1<f32> {
        &self.mean
    }

    /// Bell widths, one per kernel.
    pub fn stdev(&self) -> &Array1<f32> {
        &self.stdev
    }

    /// Growth weights, one per kernel.
    pub fn weight(&self) -> &Array1<f32> {
        &self.weight
    }

    /// Target channel of each kernel.
    pub fn source_channels(&self) -> &[usize] {
        &self.source_channels
    }

    /// One-hot `(k, channel_size)` matrix mapping kernels to channels.
    pub fn kernel_to_channel(&self) -> &Array2<f32> {
        &self.kernel_to_channel
    }

    /// Number of kernels `k`.
    pub fn kernel_count(&self) -> usize {
        self.source_channels.len()
    }

    /// Number of state channels.
    pub fn channel_size(&self) -> usize {
        self.channel_size
    }

    /// Step-size divisor T.
    pub fn time_constant(&self) -> f32 {
        self.time_constant
    }

    pub(crate) fn check_kernels(&self, what: &'static str, got: usize) -> Result<()> {
        if got != self.kernel_count() {
            return Err(LeniaError::ShapeMismatch {
                what,
                expected: self.kernel_count(),
                got,
            });
        }
        Ok(())
    }

    pub(crate) fn check_channels(&self, what: &'static str, got: usize) -> Result<()> {
        if got != self.channel_size {
            return Err(LeniaError::ShapeMismatch {
                what,
                expected: self.channel_size,
                got,
            });
        }
        Ok(())
    }
}
