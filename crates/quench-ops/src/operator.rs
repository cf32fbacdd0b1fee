//! The operator capability and lattice evaluation.

use std::fmt;

use quench_core::StoreError;
use quench_grid::Grid;

use crate::registry::Op;

/// A physical operator evaluated at one lattice point.
///
/// Every operator in a family shares this signature, so any registered
/// name can stand in for any other without touching the evolution loop.
pub trait LatticeOperator: Send + Sync {
    /// Name the operator is registered under.
    fn name(&self) -> &str;

    /// Value at lattice point `(i, j, k)`.
    ///
    /// Scalar parameters come from [`Op::params`], loaded before the loop.
    /// Coordinates come from [`Grid::coords`].
    fn evaluate(&self, grid: &Grid, op: &Op, i: usize, j: usize, k: usize) -> f64;
}

impl fmt::Debug for dyn LatticeOperator + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LatticeOperator({})", self.name())
    }
}

/// Operator backed by a closure.
pub struct FnOperator<F> {
    name: String,
    f: F,
}

impl<F> FnOperator<F>
where
    F: Fn(&Grid, &Op, usize, usize, usize) -> f64 + Send + Sync,
{
    /// Wrap `f` under `name`.
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> LatticeOperator for FnOperator<F>
where
    F: Fn(&Grid, &Op, usize, usize, usize) -> f64 + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, grid: &Grid, op: &Op, i: usize, j: usize, k: usize) -> f64 {
        (self.f)(grid, op, i, j, k)
    }
}

impl<F> fmt::Debug for FnOperator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOperator").field("name", &self.name).finish()
    }
}

/// Evaluate `operator` at every lattice point, in x-fastest linear order.
///
/// Fails if the grid has no extents or `op` has no parameters loaded.
pub fn evaluate_on_lattice(
    grid: &Grid,
    op: &Op,
    operator: &dyn LatticeOperator,
) -> Result<Vec<f64>, StoreError> {
    let extents = grid.extents()?;
    op.params()?;
    let mut out = Vec::with_capacity(extents.len());
    for k in 0..extents.z {
        for j in 0..extents.y {
            for i in 0..extents.x {
                out.push(operator.evaluate(grid, op, i, j, k));
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quench_core::Extents;

    fn box_grid() -> Grid {
        let mut grid = Grid::new();
        grid.store_int("xDim", 3);
        grid.store_int("yDim", 2);
        grid.store_int("zDim", 2);
        grid.store_double("mass", 1.0);
        grid.store_double("omegaX", 1.0);
        grid.store_double("omegaY", 1.0);
        grid
    }

    #[test]
    fn lattice_order_is_x_fastest() {
        let grid = box_grid();
        let mut op = Op::new();
        op.load_params(&grid).unwrap();
        let index = FnOperator::new("index", |_: &Grid, _: &Op, i, j, k| {
            Extents::new_3d(3, 2, 2).linear_index(i, j, k) as f64
        });
        let values = evaluate_on_lattice(&grid, &op, &index).unwrap();
        let expected: Vec<f64> = (0..12).map(|n| n as f64).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn unloaded_params_fail_before_evaluation() {
        let zero = FnOperator::new("zero", |_: &Grid, _: &Op, _, _, _| 0.0);
        let err = evaluate_on_lattice(&box_grid(), &Op::new(), &zero).unwrap_err();
        assert_eq!(err, StoreError::ParamsNotLoaded { registry: "operator" });
    }

    #[test]
    fn missing_extents_fail_before_evaluation() {
        let zero = FnOperator::new("zero", |_: &Grid, _: &Op, _, _, _| 0.0);
        let err = evaluate_on_lattice(&Grid::new(), &Op::new(), &zero).unwrap_err();
        assert_eq!(err, StoreError::missing("xDim", "int"));
    }
}
