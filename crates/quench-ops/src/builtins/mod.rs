//! Built-in operators registered by [`Op::set_fns`](crate::Op::set_fns).
//!
//! | family | names |
//! |--------|-------|
//! | kinetic | `rotation_K`, `rotation_K3d`, `rotation_K_dimensionless` |
//! | potential | `harmonic_V`, `harmonic_V3d`, `harmonic_V_dimensionless`, `torus_V` |
//! | A, pA (each component) | `rotation`, `constant`, `file` |

use std::sync::Arc;

use quench_core::Axis;

use crate::family::OperatorFamily;
use crate::operator::LatticeOperator;

pub mod kinetic;
pub mod potential;
pub mod vector;

pub use kinetic::Kinetic;
pub use potential::Potential;
pub use vector::{VectorKind, VectorPotential};

/// Every built-in operator with the family it belongs to.
pub fn all() -> Vec<(OperatorFamily, Arc<dyn LatticeOperator>)> {
    let mut out: Vec<(OperatorFamily, Arc<dyn LatticeOperator>)> = Vec::new();
    for k in Kinetic::ALL {
        out.push((OperatorFamily::Kinetic, Arc::new(k)));
    }
    for v in Potential::ALL {
        out.push((OperatorFamily::Potential, Arc::new(v)));
    }
    let components = [
        (Axis::X, OperatorFamily::Ax, OperatorFamily::PAx),
        (Axis::Y, OperatorFamily::Ay, OperatorFamily::PAy),
        (Axis::Z, OperatorFamily::Az, OperatorFamily::PAz),
    ];
    for (axis, position, momentum) in components {
        for kind in VectorKind::ALL {
            out.push((position, Arc::new(VectorPotential::position(kind, axis))));
            out.push((momentum, Arc::new(VectorPotential::momentum(kind, axis))));
        }
    }
    out
}

/// Coordinate lookup that reads past-the-end indices as the origin.
pub(crate) fn at(values: &[f64], index: usize) -> f64 {
    values.get(index).copied().unwrap_or(0.0)
}
