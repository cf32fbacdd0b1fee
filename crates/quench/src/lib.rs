//! Quench: typed simulation state and runtime-selected physics operators
//! for spectral Gross–Pitaevskii solvers.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Quench sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use quench::prelude::*;
//!
//! // An 8×8 planar run with default physics.
//! let grid = GridConfig::planar(8, 8).build().unwrap();
//!
//! // Resolve the selected operators once, then evaluate.
//! let mut op = Op::with_builtins();
//! let ops = op.prepare(&grid).unwrap();
//! let v = ops.evaluate_family(&grid, &op, OperatorFamily::Potential).unwrap();
//!
//! // Initial state onto the device, FFT plan into the resource directory.
//! let mut wave = Wave::with_builtins();
//! let psi = wave.generate(&grid, 0.0).unwrap();
//! let mut device = Device::new();
//! let wfc = device.upload_complex(&psi).unwrap();
//! wave.store_complex("wfc", wfc);
//!
//! let streams = [
//!     device.create_stream(),
//!     device.create_stream(),
//!     device.create_stream(),
//!     device.create_stream(),
//! ];
//! let mut resources = DeviceResources::new(streams);
//! resources.store_plan("plan_other2d", generate_plan_other2d(&grid).unwrap());
//! assert_eq!(v.len(), device.complex(wfc).unwrap().len());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `quench-core` | Handles, parameter values, lattice geometry, errors |
//! | [`grid`] | `quench-grid` | Typed state store, coordinates, configuration |
//! | [`device`] | `quench-device` | Device memory, resource directory, transform plans |
//! | [`ops`] | `quench-ops` | Operator registry and built-in operators |
//! | [`wave`] | `quench-wave` | Initial-wavefunction registry |
//! | [`io`] | `quench-io` | Data file output and input |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, handles, and errors (`quench-core`).
pub use quench_core as types;

/// Typed simulation state store (`quench-grid`).
///
/// [`grid::Grid`] holds every named parameter; [`grid::GridConfig`]
/// validates and builds one.
pub use quench_grid as grid;

/// Device memory and per-run device resources (`quench-device`).
pub use quench_device as device;

/// Operator registry (`quench-ops`).
///
/// The [`ops::LatticeOperator`] trait is the extension point for
/// user-defined physics terms.
pub use quench_ops as ops;

/// Initial-wavefunction registry (`quench-wave`).
pub use quench_wave as wave;

/// Data file output and input (`quench-io`).
pub use quench_io as io;

/// Common imports for typical Quench usage.
///
/// ```rust
/// use quench::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use quench_core::{
        Axis, Complex64, ComplexBuffer, Extents, ParamValue, RealBuffer, StoreError, ValueKind,
        VortexRecord,
    };

    // State store
    pub use quench_grid::{Grid, GridConfig, OperatorSelection};

    // Device
    pub use quench_device::{
        generate_plan_other2d, generate_plan_other3d, Device, DeviceResources, DeviceStatus,
        StreamSlot, TransformDirection, TransformPlan, TransformResult,
    };

    // Operators
    pub use quench_ops::{LatticeOperator, Op, OperatorFamily, ResolvedOperators};

    // Wavefunctions
    pub use quench_wave::{Wave, WavefunctionInit};

    // I/O
    pub use quench_io::{DataWriter, IoError, ParamFile, Quantity};
}
