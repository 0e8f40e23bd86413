//! Automaton configuration

use crate::error::{LeniaError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Growth parameters for one convolution kernel.
///
/// The short aliases (`m`, `s`, `h`, `c1`) match the kernel tables used by
/// existing Lenia parameter sets. Keys meant for the perception stage
/// (radius, ring weights, source channel `c0`) are ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KernelSpec {
    /// Center of the growth bell.
    #[cfg_attr(feature = "serde", serde(alias = "m"))]
    pub mean: f32,

    /// Width of the growth bell (must be > 0).
    #[cfg_attr(feature = "serde", serde(alias = "s"))]
    pub stdev: f32,

    /// Scale applied to this kernel's growth.
    #[cfg_attr(feature = "serde", serde(alias = "h"))]
    pub weight: f32,

    /// State channel that receives this kernel's growth.
    #[cfg_attr(feature = "serde", serde(alias = "c1"))]
    pub source_channel: usize,
}

impl KernelSpec {
    /// Create a kernel entry.
    pub fn new(mean: f32, stdev: f32, weight: f32, source_channel: usize) -> Self {
        Self {
            mean,
            stdev,
            weight,
            source_channel,
        }
    }
}

/// Configuration for a Lenia growth step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LeniaConfig {
    /// Number of state channels.
    pub channel_size: usize,

    /// Step-size divisor T (must be > 0).
    #[cfg_attr(feature = "serde", serde(alias = "T"))]
    pub time_constant: f32,

    /// One entry per perception kernel, in kernel order.
    pub kernel_params: Vec<KernelSpec>,
}

impl LeniaConfig {
    /// Create a configuration.
    pub fn new(channel_size: usize, time_constant: f32, kernel_params: Vec<KernelSpec>) -> Self {
        Self {
            channel_size,
            time_constant,
            kernel_params,
        }
    }

    /// Append a kernel entry.
    pub fn with_kernel(mut self, kernel: KernelSpec) -> Self {
        self.kernel_params.push(kernel);
        self
    }

    /// Number of kernels (the `k` dimension of perception).
    pub fn kernel_count(&self) -> usize {
        self.kernel_params.len()
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if self.channel_size == 0 {
            return Err(LeniaError::config("channel_size must be > 0"));
        }
        if !(self.time_constant.is_finite() && self.time_constant > 0.0) {
            return Err(LeniaError::config(format!(
                "time_constant must be finite and > 0, got {}",
                self.time_constant
            )));
        }
        if self.kernel_params.is_empty() {
            return Err(LeniaError::config("kernel_params must not be empty"));
        }
        for (i, kernel) in self.kernel_params.iter().enumerate() {
            if !(kernel.stdev.is_finite() && kernel.stdev > 0.0) {
                return Err(LeniaError::config(format!(
                    "kernel {i}: stdev must be finite and > 0, got {}",
                    kernel.stdev
                )));
            }
            if kernel.source_channel >= self.channel_size {
                return Err(LeniaError::config(format!(
                    "kernel {i}: source_channel {} outside [0, {})",
                    kernel.source_channel, self.channel_size
                )));
            }
        }
        Ok(())
    }
}
