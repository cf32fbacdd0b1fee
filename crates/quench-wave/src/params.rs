//! Generator parameters, read from the grid before evaluation.

use quench_core::{Extents, StoreError};
use quench_grid::Grid;

/// Parameters shared by the built-in generators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParams {
    /// Lattice extents.
    pub extents: Extents,
    /// Gaussian widths per axis: `Rxy · a0x`, `Rxy · a0y`, `Rxy · a0z`.
    pub width: [f64; 3],
    /// Phase winding about the z axis (`winding`, default 0).
    pub winding: f64,
    /// Ring radius for the torus state (`torus_radius`, default `xMax / 2`).
    pub torus_radius: f64,
    /// RNG seed for the noise state (`seed`, default 0).
    pub seed: u64,
}

impl WaveParams {
    /// Read from `grid`. `Rxy`, `a0x` and `a0y` are required; `a0z`
    /// defaults to `a0x`.
    pub fn from_grid(grid: &Grid) -> Result<Self, StoreError> {
        let rxy = grid.dval("Rxy")?;
        let a0x = grid.dval("a0x")?;
        let a0y = grid.dval("a0y")?;
        let a0z = grid.dval_or("a0z", a0x)?;
        let seed = if grid.contains("seed") {
            grid.ival("seed")?
        } else {
            0
        };
        Ok(Self {
            extents: grid.extents()?,
            width: [rxy * a0x, rxy * a0y, rxy * a0z],
            winding: grid.dval_or("winding", 0.0)?,
            torus_radius: grid.dval_or("torus_radius", 0.5 * grid.dval_or("xMax", 0.0)?)?,
            seed: seed as u64,
        })
    }
}
