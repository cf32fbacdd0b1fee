//! Scalar operator parameters, read from the grid before evaluation.

use quench_core::{Extents, StoreError};
use quench_grid::Grid;

/// Parameters the built-in operators read at every lattice point.
///
/// `mass`, `omegaX` and `omegaY` are required. The remaining keys fall
/// back to the documented default when absent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OperatorParams {
    /// Lattice extents.
    pub extents: Extents,
    /// Particle mass (`mass`).
    pub mass: f64,
    /// Rotation rate as a fraction of the trap frequency (`omega`, default 0).
    pub omega: f64,
    /// Trap frequencies (`omegaX`, `omegaY`, `omegaZ`; z defaults to 0).
    pub trap: [f64; 3],
    /// Trap anisotropy along y (`gammaY`, default 1).
    pub gamma_y: f64,
    /// Trap centre offsets (`x0_shift`, `y0_shift`, `z0_shift`, default 0).
    pub shift: [f64; 3],
    /// Ring radius of the toroidal trap (`torus_radius`, default `xMax / 2`).
    pub torus_radius: f64,
    /// Uniform vector potential (`Ax_const`, `Ay_const`, `Az_const`, default 0).
    pub a_const: [f64; 3],
}

impl OperatorParams {
    /// Read every parameter from `grid`.
    pub fn from_grid(grid: &Grid) -> Result<Self, StoreError> {
        let x_max = grid.dval_or("xMax", 0.0)?;
        Ok(Self {
            extents: grid.extents()?,
            mass: grid.dval("mass")?,
            omega: grid.dval_or("omega", 0.0)?,
            trap: [
                grid.dval("omegaX")?,
                grid.dval("omegaY")?,
                grid.dval_or("omegaZ", 0.0)?,
            ],
            gamma_y: grid.dval_or("gammaY", 1.0)?,
            shift: [
                grid.dval_or("x0_shift", 0.0)?,
                grid.dval_or("y0_shift", 0.0)?,
                grid.dval_or("z0_shift", 0.0)?,
            ],
            torus_radius: grid.dval_or("torus_radius", 0.5 * x_max)?,
            a_const: [
                grid.dval_or("Ax_const", 0.0)?,
                grid.dval_or("Ay_const", 0.0)?,
                grid.dval_or("Az_const", 0.0)?,
            ],
        })
    }
}
