//! Test fixtures and helpers for Quench development.
//!
//! Provides small, fast grid fixtures built from a
//! [`GridConfig`](quench_grid::GridConfig) and float comparison helpers.
//! File-output tests use the `tempfile` crate directly.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{dimensionless_grid, small_planar_grid, small_volume_grid};

use quench_core::Complex64;

/// Assert two reals agree to a relative tolerance.
pub fn assert_close(a: f64, b: f64, rel: f64) {
    let scale = a.abs().max(b.abs()).max(1e-300);
    assert!(
        (a - b).abs() <= rel * scale,
        "values differ: {a} vs {b} (rel tol {rel})"
    );
}

/// Assert two complex slices agree element-wise to an absolute tolerance.
pub fn assert_complex_close(a: &[Complex64], b: &[Complex64], tol: f64) {
    assert_eq!(a.len(), b.len(), "length mismatch");
    for (idx, (x, y)) in a.iter().zip(b).enumerate() {
        assert!(
            (x - y).norm() <= tol,
            "element {idx} differs: {x} vs {y} (tol {tol})"
        );
    }
}
