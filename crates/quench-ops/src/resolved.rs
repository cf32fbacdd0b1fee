//! Operators resolved once for a run.

use std::sync::Arc;

use quench_core::StoreError;
use quench_grid::Grid;

use crate::family::OperatorFamily;
use crate::operator::{evaluate_on_lattice, LatticeOperator};
use crate::registry::Op;

/// One resolved operator per family, produced by
/// [`Op::resolve_selected`]. Lookups by name are finished; the
/// evolution loop only dispatches.
#[derive(Clone, Debug)]
pub struct ResolvedOperators {
    /// Kinetic term.
    pub kinetic: Arc<dyn LatticeOperator>,
    /// Scalar potential.
    pub potential: Arc<dyn LatticeOperator>,
    /// Position-space vector potential, x/y/z.
    pub a: [Arc<dyn LatticeOperator>; 3],
    /// Momentum-space vector potential, x/y/z.
    pub pa: [Arc<dyn LatticeOperator>; 3],
}

impl ResolvedOperators {
    /// The operator for `family`.
    pub fn get(&self, family: OperatorFamily) -> &Arc<dyn LatticeOperator> {
        match family {
            OperatorFamily::Kinetic => &self.kinetic,
            OperatorFamily::Potential => &self.potential,
            OperatorFamily::Ax => &self.a[0],
            OperatorFamily::Ay => &self.a[1],
            OperatorFamily::Az => &self.a[2],
            OperatorFamily::PAx => &self.pa[0],
            OperatorFamily::PAy => &self.pa[1],
            OperatorFamily::PAz => &self.pa[2],
        }
    }

    /// Evaluate the operator for `family` over the whole lattice.
    pub fn evaluate_family(
        &self,
        grid: &Grid,
        op: &Op,
        family: OperatorFamily,
    ) -> Result<Vec<f64>, StoreError> {
        evaluate_on_lattice(grid, op, self.get(family).as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quench_test_utils::fixtures::small_planar_grid;

    #[test]
    fn default_selection_resolves() {
        let grid = small_planar_grid();
        let mut op = Op::with_builtins();
        let r = op.prepare(&grid).unwrap();
        assert_eq!(r.kinetic.name(), "rotation_K");
        assert_eq!(r.potential.name(), "harmonic_V");
        for family in OperatorFamily::ALL {
            assert_eq!(r.evaluate_family(&grid, &op, family).unwrap().len(), 64);
        }
    }

    #[test]
    fn unknown_selection_fails_before_loop() {
        let mut grid = small_planar_grid();
        grid.selection_mut().kinetic = "nonexistent_K".into();
        let err = Op::with_builtins().prepare(&grid).unwrap_err();
        assert_eq!(err, StoreError::unknown_operator("kinetic", "nonexistent_K"));
    }

    #[test]
    fn unknown_vector_potential_names_first_component() {
        let mut grid = small_planar_grid();
        grid.selection_mut().vector_potential = "bogus".into();
        let err = Op::with_builtins().prepare(&grid).unwrap_err();
        assert_eq!(err, StoreError::unknown_operator("Ax", "bogus"));
    }

    #[test]
    fn resolving_without_params_fails() {
        let grid = small_planar_grid();
        let mut op = Op::with_builtins();
        assert_eq!(
            op.resolve_selected(&grid).unwrap_err(),
            StoreError::ParamsNotLoaded { registry: "operator" }
        );
        op.load_params(&grid).unwrap();
        assert!(op.resolve_selected(&grid).is_ok());
    }

    #[test]
    fn builtins_yield_nan_without_params() {
        let grid = small_planar_grid();
        let op = Op::with_builtins();
        let v = op.v_fn("harmonic_V").unwrap();
        assert!(v.evaluate(&grid, &op, 1, 1, 0).is_nan());
    }
}
