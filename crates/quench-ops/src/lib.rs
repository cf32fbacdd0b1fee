//! Runtime-selected physics operators for Quench.
//!
//! [`Op`] maps operator names to [`LatticeOperator`] implementations, one
//! table per [`OperatorFamily`]. Names come from the grid's operator
//! selection and are resolved once, before the per-point loop, into a
//! [`ResolvedOperators`] set.
//!
//! ```
//! use quench_grid::GridConfig;
//! use quench_ops::{Op, OperatorFamily};
//!
//! let grid = GridConfig::planar(8, 8).build().unwrap();
//! let mut op = Op::with_builtins();
//! let resolved = op.prepare(&grid).unwrap();
//! let v = resolved.evaluate_family(&grid, &op, OperatorFamily::Potential).unwrap();
//! assert_eq!(v.len(), 64);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builtins;
pub mod family;
pub mod operator;
pub mod params;
pub mod registry;
pub mod resolved;

pub use family::OperatorFamily;
pub use operator::{evaluate_on_lattice, FnOperator, LatticeOperator};
pub use params::OperatorParams;
pub use registry::Op;
pub use resolved::ResolvedOperators;
