//! Initial-wavefunction generators for Quench.
//!
//! [`Wave`] is a registry of [`WavefunctionInit`] implementations keyed by
//! name, independent of the operator registry: a wavefunction named
//! `"rotation"` never collides with the vector potential of that name.
//! It also records the real and complex device arrays that hold the
//! generated state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builtins;
pub mod init;
pub mod params;
pub mod registry;

pub use builtins::Profile;
pub use init::{evaluate_on_lattice, FnInit, WavefunctionInit};
pub use params::WaveParams;
pub use registry::Wave;
