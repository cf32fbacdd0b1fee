//! Benchmark profiles for the Quench simulation state.
//!
//! - [`reference_grid`]: 256×256 planar grid with default physics
//! - [`volume_grid`]: 64×64×64 grid for 3-D operator and transform paths
//! - [`seeded_state`]: deterministic complex data for transform benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use quench_core::Complex64;
use quench_grid::{ConfigError, Grid, GridConfig};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Planar reference profile: 256×256 (65K points).
pub fn reference_grid() -> Result<Grid, ConfigError> {
    GridConfig::planar(256, 256).build()
}

/// 3-D profile: 64×64×64 (262K points).
pub fn volume_grid() -> Result<Grid, ConfigError> {
    GridConfig::volume(64, 64, 64).build()
}

/// `len` complex values with components uniform in `[-1, 1)`.
pub fn seeded_state(len: usize, seed: u64) -> Vec<Complex64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let re = rng.random::<f64>() * 2.0 - 1.0;
            let im = rng.random::<f64>() * 2.0 - 1.0;
            Complex64::new(re, im)
        })
        .collect()
}
