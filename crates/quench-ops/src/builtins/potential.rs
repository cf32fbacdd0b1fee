//! External trapping potentials, evaluated on the position grid.

use quench_core::Axis;
use quench_grid::Grid;

use super::at;
use crate::operator::LatticeOperator;
use crate::registry::Op;

/// Built-in scalar potentials.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Potential {
    /// Planar harmonic trap, `m[(ωx x)² + (γ ωy y)²] / 2`.
    Harmonic,
    /// Harmonic trap including `(ωz z)²`.
    Harmonic3d,
    /// Harmonic trap with unit mass.
    Dimensionless,
    /// Ring trap of radius `torus_radius` in the xy-plane.
    Torus,
}

impl Potential {
    /// All variants.
    pub const ALL: [Potential; 4] = [
        Self::Harmonic,
        Self::Harmonic3d,
        Self::Dimensionless,
        Self::Torus,
    ];
}

impl LatticeOperator for Potential {
    fn name(&self) -> &str {
        match self {
            Self::Harmonic => "harmonic_V",
            Self::Harmonic3d => "harmonic_V3d",
            Self::Dimensionless => "harmonic_V_dimensionless",
            Self::Torus => "torus_V",
        }
    }

    fn evaluate(&self, grid: &Grid, op: &Op, i: usize, j: usize, k: usize) -> f64 {
        let Ok(p) = op.params() else {
            return f64::NAN;
        };
        let c = grid.coords();
        let x = at(c.position(Axis::X), i) - p.shift[0];
        let y = at(c.position(Axis::Y), j) - p.shift[1];
        let z = at(c.position(Axis::Z), k) - p.shift[2];
        let [wx, wy, wz] = p.trap;
        let planar = (wx * x).powi(2) + (p.gamma_y * wy * y).powi(2);
        match self {
            Self::Harmonic => 0.5 * p.mass * planar,
            Self::Harmonic3d => 0.5 * p.mass * (planar + (wz * z).powi(2)),
            Self::Dimensionless => 0.5 * (planar + (wz * z).powi(2)),
            Self::Torus => {
                let r = x.hypot(y) - p.torus_radius;
                0.5 * p.mass * ((wx * r).powi(2) + (wz * z).powi(2))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quench_test_utils::assert_close;
    use quench_test_utils::fixtures::dimensionless_grid;

    fn setup() -> (Grid, Op) {
        let grid = dimensionless_grid(8, 8, 0.0);
        let mut op = Op::new();
        op.load_params(&grid).unwrap();
        (grid, op)
    }

    #[test]
    fn harmonic_minimum_at_centre() {
        let (grid, op) = setup();
        // x[4] = -4 + 4 * 1 = 0 on an 8-point box of half-width 4.
        assert_eq!(Potential::Harmonic.evaluate(&grid, &op, 4, 4, 0), 0.0);
        assert_close(Potential::Harmonic.evaluate(&grid, &op, 0, 4, 0), 8.0, 1e-12);
    }

    #[test]
    fn planar_grid_matches_3d_variant() {
        let (grid, op) = setup();
        for (i, j) in [(0, 0), (3, 5), (7, 1)] {
            assert_eq!(
                Potential::Harmonic.evaluate(&grid, &op, i, j, 0),
                Potential::Harmonic3d.evaluate(&grid, &op, i, j, 0)
            );
        }
    }

    #[test]
    fn shift_moves_minimum() {
        let (mut grid, mut op) = setup();
        grid.store_double("x0_shift", 1.0);
        op.load_params(&grid).unwrap();
        assert_eq!(Potential::Dimensionless.evaluate(&grid, &op, 5, 4, 0), 0.0);
    }

    #[test]
    fn torus_vanishes_on_ring() {
        let (mut grid, mut op) = setup();
        grid.store_double("torus_radius", 2.0);
        op.load_params(&grid).unwrap();
        // (x, y) = (2, 0)
        assert_close(Potential::Torus.evaluate(&grid, &op, 6, 4, 0), 0.0, 1e-12);
        assert!(Potential::Torus.evaluate(&grid, &op, 4, 4, 0) > 0.0);
    }
}
