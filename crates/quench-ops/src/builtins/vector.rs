//! Vector-potential components.
//!
//! Each kind is registered once per component in both representations.
//! The momentum-space entry is the position-space value scaled by the
//! conjugate momentum along the same axis: `pA_c = A_c · p_c`.

use quench_core::Axis;
use quench_grid::Grid;

use super::at;
use crate::operator::LatticeOperator;
use crate::registry::Op;

/// Source of the vector-potential field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VectorKind {
    /// Rigid rotation about z: `A = ω (-ωx y, ωy x, 0)`.
    Rotation,
    /// Uniform field from `Ax_const`, `Ay_const`, `Az_const`.
    Constant,
    /// Values read from the read-only arrays `Ax_file`, `Ay_file`,
    /// `Az_file`. A missing array reads as zero.
    File,
}

impl VectorKind {
    /// All kinds.
    pub const ALL: [VectorKind; 3] = [Self::Rotation, Self::Constant, Self::File];

    /// Registered name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rotation => "rotation",
            Self::Constant => "constant",
            Self::File => "file",
        }
    }
}

/// Key of the read-only array holding file-loaded values for `axis`.
pub fn file_key(axis: Axis) -> &'static str {
    match axis {
        Axis::X => "Ax_file",
        Axis::Y => "Ay_file",
        Axis::Z => "Az_file",
    }
}

/// One component of a vector potential in one representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VectorPotential {
    kind: VectorKind,
    component: Axis,
    momentum: bool,
}

impl VectorPotential {
    /// Position-space component.
    pub fn position(kind: VectorKind, component: Axis) -> Self {
        Self {
            kind,
            component,
            momentum: false,
        }
    }

    /// Momentum-space component.
    pub fn momentum(kind: VectorKind, component: Axis) -> Self {
        Self {
            kind,
            component,
            momentum: true,
        }
    }

    fn field(&self, grid: &Grid, op: &Op, i: usize, j: usize, k: usize) -> f64 {
        let Ok(p) = op.params() else {
            return f64::NAN;
        };
        match self.kind {
            VectorKind::Rotation => {
                let c = grid.coords();
                match self.component {
                    Axis::X => -p.omega * p.trap[0] * at(c.position(Axis::Y), j),
                    Axis::Y => p.omega * p.trap[1] * at(c.position(Axis::X), i),
                    Axis::Z => 0.0,
                }
            }
            VectorKind::Constant => p.a_const[usize::from(self.component.index())],
            VectorKind::File => op
                .const_get(file_key(self.component))
                .map_or(0.0, |values| at(values, p.extents.linear_index(i, j, k))),
        }
    }
}

impl LatticeOperator for VectorPotential {
    fn name(&self) -> &str {
        self.kind.name()
    }

    fn evaluate(&self, grid: &Grid, op: &Op, i: usize, j: usize, k: usize) -> f64 {
        let a = self.field(grid, op, i, j, k);
        if !self.momentum {
            return a;
        }
        let index = match self.component {
            Axis::X => i,
            Axis::Y => j,
            Axis::Z => k,
        };
        a * at(grid.coords().momentum(self.component), index)
    }
}
