//! Kinetic energy operators, evaluated on the momentum grid.

use quench_core::{Axis, HBAR};
use quench_grid::Grid;

use super::at;
use crate::operator::LatticeOperator;
use crate::registry::Op;

/// Built-in kinetic terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kinetic {
    /// `ħ²(px² + py²) / 2m`.
    Rotation,
    /// `ħ²(px² + py² + pz²) / 2m`.
    Rotation3d,
    /// `(px² + py²) / 2` in oscillator units.
    Dimensionless,
}

impl Kinetic {
    /// All variants.
    pub const ALL: [Kinetic; 3] = [Self::Rotation, Self::Rotation3d, Self::Dimensionless];
}

impl LatticeOperator for Kinetic {
    fn name(&self) -> &str {
        match self {
            Self::Rotation => "rotation_K",
            Self::Rotation3d => "rotation_K3d",
            Self::Dimensionless => "rotation_K_dimensionless",
        }
    }

    fn evaluate(&self, grid: &Grid, op: &Op, i: usize, j: usize, k: usize) -> f64 {
        let c = grid.coords();
        let px = at(c.momentum(Axis::X), i);
        let py = at(c.momentum(Axis::Y), j);
        let planar = px * px + py * py;
        let Ok(params) = op.params() else {
            return f64::NAN;
        };
        let mass = params.mass;
        match self {
            Self::Rotation => HBAR * HBAR * planar / (2.0 * mass),
            Self::Rotation3d => {
                let pz = at(c.momentum(Axis::Z), k);
                HBAR * HBAR * (planar + pz * pz) / (2.0 * mass)
            }
            Self::Dimensionless => 0.5 * planar,
        }
    }
}
