//! Core types for the Quench simulation state.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the state store, the device layer, and the operator
//! registries: handle identifiers, non-owning buffer handles, the closed set
//! of parameter categories, lattice geometry, vortex records, and the error
//! taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod error;
pub mod id;
pub mod lattice;
pub mod text;
pub mod value;
pub mod vortex;

pub use buffer::{ComplexBuffer, DeviceBuffer, RealBuffer};
pub use error::StoreError;
pub use id::{BufferId, PlanHandle, StreamHandle};
pub use lattice::{Axis, Extents, InvalidAxis};
pub use num_complex::Complex64;
pub use text::{escape_text, format_real, unescape_text};
pub use value::{ParamValue, ValueKind};
pub use vortex::{sort_vortices, VortexRecord};

/// Reduced Planck constant in J·s.
pub const HBAR: f64 = 1.054_571_48e-34;
