//! First-class grid coordinate arrays.

use std::f64::consts::PI;

use quench_core::{Axis, Extents};

/// Position-space and momentum-space coordinate arrays.
///
/// Owned by the [`Grid`](crate::Grid) for its whole lifetime. Momentum
/// arrays use transform frequency order: non-negative frequencies first,
/// then negative ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Coordinates {
    /// Position along x.
    pub x: Vec<f64>,
    /// Position along y.
    pub y: Vec<f64>,
    /// Position along z (`[0.0]` for planar grids).
    pub z: Vec<f64>,
    /// Momentum along x.
    pub xp: Vec<f64>,
    /// Momentum along y.
    pub yp: Vec<f64>,
    /// Momentum along z (`[0.0]` for planar grids).
    pub zp: Vec<f64>,
}

impl Coordinates {
    /// Generate coordinates for a box spanning `[-max, max)` on each axis.
    ///
    /// An axis with a single point collapses to the origin.
    pub fn generate(extents: Extents, max: [f64; 3]) -> Self {
        let (x, xp) = axis_arrays(extents.x, max[0]);
        let (y, yp) = axis_arrays(extents.y, max[1]);
        let (z, zp) = axis_arrays(extents.z, max[2]);
        Self { x, y, z, xp, yp, zp }
    }

    /// Position array along `axis`.
    pub fn position(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Momentum array along `axis`.
    pub fn momentum(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.xp,
            Axis::Y => &self.yp,
            Axis::Z => &self.zp,
        }
    }
}

/// Grid spacing for `n` points over `[-max, max)`.
pub fn spacing(n: usize, max: f64) -> f64 {
    2.0 * max / n as f64
}

/// Momentum spacing for a box of half-width `max`.
pub fn momentum_spacing(max: f64) -> f64 {
    PI / max
}

fn axis_arrays(n: usize, max: f64) -> (Vec<f64>, Vec<f64>) {
    if n <= 1 {
        return (vec![0.0; n], vec![0.0; n]);
    }
    let dx = spacing(n, max);
    let dp = momentum_spacing(max);
    let half = n / 2;
    let pos = (0..n).map(|i| -max + i as f64 * dx).collect();
    let mom = (0..n)
        .map(|i| {
            if i < half {
                i as f64 * dp
            } else {
                (i as f64 - n as f64) * dp
            }
        })
        .collect();
    (pos, mom)
}
