//! Built-in initial states.

use std::f64::consts::PI;

use quench_core::{Axis, Complex64};
use quench_grid::Grid;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::init::WavefunctionInit;
use crate::registry::Wave;

/// Built-in generators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Profile {
    /// Planar Gaussian of Thomas–Fermi width.
    Planar,
    /// Gaussian including the z axis.
    Volume,
    /// Gaussian ring of radius `torus_radius` in the xy-plane.
    Torus,
    /// Random amplitude and phase, reproducible from `seed`.
    Noise,
}

impl Profile {
    /// All generators.
    pub const ALL: [Profile; 4] = [Self::Planar, Self::Volume, Self::Torus, Self::Noise];

    fn noise(seed: u64, index: usize, phase: f64) -> Complex64 {
        // Per-point stream: seed XOR a scrambled linear index.
        let mix = (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let mut rng = ChaCha8Rng::seed_from_u64(seed ^ mix);
        let amplitude: f64 = rng.random();
        let angle: f64 = rng.random::<f64>() * 2.0 * PI;
        Complex64::from_polar(amplitude, angle + phase)
    }
}

fn at(values: &[f64], index: usize) -> f64 {
    values.get(index).copied().unwrap_or(0.0)
}

impl WavefunctionInit for Profile {
    fn name(&self) -> &str {
        match self {
            Self::Planar => "2d",
            Self::Volume => "3d",
            Self::Torus => "torus",
            Self::Noise => "noise",
        }
    }

    fn evaluate(
        &self,
        grid: &Grid,
        wave: &Wave,
        phase: f64,
        i: usize,
        j: usize,
        k: usize,
    ) -> Complex64 {
        let Ok(p) = wave.params() else {
            return Complex64::new(f64::NAN, f64::NAN);
        };
        if let Self::Noise = self {
            return Self::noise(p.seed, p.extents.linear_index(i, j, k), phase);
        }
        let c = grid.coords();
        let x = at(c.position(Axis::X), i);
        let y = at(c.position(Axis::Y), j);
        let z = at(c.position(Axis::Z), k);
        let [wx, wy, wz] = p.width;
        let exponent = match self {
            Self::Planar => (x / wx).powi(2) + (y / wy).powi(2),
            Self::Volume => (x / wx).powi(2) + (y / wy).powi(2) + (z / wz).powi(2),
            Self::Torus => ((x.hypot(y) - p.torus_radius) / wx).powi(2) + (z / wz).powi(2),
            Self::Noise => 0.0,
        };
        let theta = phase + p.winding * y.atan2(x);
        Complex64::from_polar((-0.5 * exponent).exp(), theta)
    }
}
