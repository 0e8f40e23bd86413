//! Lenia Growth - one discrete step of a continuous cellular automaton
//!
//! A Lenia step does not look at neighbours itself. An external perception
//! stage convolves the state with `k` kernels; this crate turns that
//! perception into growth and integrates it into the state.
//!
//! # Core Types
//!
//! - **LeniaConfig**: Declarative kernel list (`mean`, `stdev`, `weight`, `source_channel`)
//! - **KernelParams**: Immutable numeric form, built once and shared
//! - **BellCurve**: The bell-shaped response growth is derived from
//! - **LeniaUpdate**: The update rule bound to shared parameters
//!
//! # Step
//!
//! For every cell `(y, x)`:
//!
//! 1. Each kernel `i` contributes `growth(perception[i]) * weight[i]`
//! 2. Contributions are summed into the kernel's source channel
//! 3. `next = clip(state + growth / T, 0, 1)`
//!
//! Growth is `2 * bell - 1`, so it ranges over `(-1, 1]`: cells whose
//! neighbourhood sits at a kernel's mean grow, all others decay.
//!
//! # Sharing
//!
//! Parameters are built once and never mutated. One `Arc<KernelParams>` can
//! drive any number of automata concurrently; cells within a step are
//! independent (enable the `parallel` feature to spread them over rayon).
//!
//! # Example
//!
//! ```rust
//! use lenia_growth::{KernelSpec, LeniaConfig, LeniaUpdate, Update};
//! use ndarray::Array3;
//!
//! // 1. Describe the kernels (one per perception kernel)
//! let config = LeniaConfig::new(1, 10.0, vec![KernelSpec::new(0.15, 0.015, 1.0, 0)]);
//!
//! // 2. Build once
//! let rule = LeniaUpdate::from_config(&config)?;
//!
//! // 3. Step: perception comes from the external convolution stage
//! let state = Array3::from_elem((64, 64, 1), 0.2);
//! let perception = Array3::from_elem((64, 64, 1), 0.15);
//! let next = rule.update(state.view(), perception.view(), None)?;
//!
//! // Perception at the bell's mean: full growth of 1 / T
//! assert!((next[[0, 0, 0]] - 0.3).abs() < 1e-6);
//! # Ok::<(), lenia_growth::LeniaError>(())
//! ```

mod bell;
mod config;
mod error;
mod growth;
mod params;
mod update;

pub use bell::{bell, BellCurve, FnBell, Gaussian};
pub use config::{KernelSpec, LeniaConfig};
pub use error::{LeniaError, Result};
pub use growth::{
    channel_growth, channel_growth_with, growth, growth_with, weighted_growth,
    weighted_growth_with,
};
pub use params::KernelParams;
pub use update::{step, step_with, LeniaUpdate, Update};
