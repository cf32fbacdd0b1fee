//! Whole-lattice evaluation through the registry.

use std::sync::Arc;

use proptest::prelude::*;
use quench_grid::Grid;
use quench_ops::{evaluate_on_lattice, FnOperator, Op, OperatorFamily};
use quench_test_utils::fixtures::{dimensionless_grid, small_volume_grid};

#[test]
fn volume_grid_uses_3d_defaults() {
    let grid = small_volume_grid();
    let mut op = Op::with_builtins();
    let resolved = op.prepare(&grid).unwrap();
    assert_eq!(resolved.kinetic.name(), "rotation_K3d");
    assert_eq!(resolved.potential.name(), "harmonic_V3d");

    let v = resolved
        .evaluate_family(&grid, &op, OperatorFamily::Potential)
        .unwrap();
    assert_eq!(v.len(), 8 * 4 * 4);
    assert!(v.iter().all(|x| *x >= 0.0));
}

#[test]
fn swapping_a_name_swaps_the_operator() {
    let mut grid = dimensionless_grid(8, 8, 0.0);
    let mut op = Op::with_builtins();
    op.load_params(&grid).unwrap();

    grid.selection_mut().potential = "harmonic_V_dimensionless".into();
    let a = op.resolve_selected(&grid).unwrap();
    grid.selection_mut().potential = "torus_V".into();
    let b = op.resolve_selected(&grid).unwrap();

    let va = a.evaluate_family(&grid, &op, OperatorFamily::Potential).unwrap();
    let vb = b.evaluate_family(&grid, &op, OperatorFamily::Potential).unwrap();
    assert_ne!(va, vb);
}

#[test]
fn user_operator_reads_registry_arrays() {
    let grid = dimensionless_grid(4, 4, 0.0);
    let mut op = Op::with_builtins();
    op.load_params(&grid).unwrap();
    op.store_const("V_table", vec![2.5; 16]);
    op.register(
        OperatorFamily::Potential,
        Arc::new(FnOperator::new("table_V", |_: &Grid, op: &Op, i, j, _| {
            let Ok(p) = op.params() else {
                return f64::NAN;
            };
            op.const_get("V_table").map_or(0.0, |t| t[p.extents.linear_index(i, j, 0)])
        })),
    );
    let v = op.v_fn("table_V").unwrap();
    let values = evaluate_on_lattice(&grid, &op, v.as_ref()).unwrap();
    assert!(values.iter().all(|x| *x == 2.5));
}

proptest! {
    #[test]
    fn harmonic_potential_is_non_negative(omega in 0.0f64..2.0, n in 1usize..5) {
        let grid = dimensionless_grid(2 * n, 2 * n, omega);
        let mut op = Op::with_builtins();
        op.load_params(&grid).unwrap();
        for name in ["harmonic_V", "harmonic_V3d", "harmonic_V_dimensionless", "torus_V"] {
            let v = op.v_fn(name).unwrap();
            let values = evaluate_on_lattice(&grid, &op, v.as_ref()).unwrap();
            prop_assert!(values.iter().all(|x| *x >= 0.0));
        }
    }

    #[test]
    fn unregistered_names_fail_in_every_family(name in "[a-z_]{1,16}") {
        let op = Op::with_builtins();
        for family in OperatorFamily::ALL {
            let registered = op.names(family).any(|n| n == name);
            prop_assert_eq!(op.resolve(family, &name).is_ok(), registered);
        }
    }
}
