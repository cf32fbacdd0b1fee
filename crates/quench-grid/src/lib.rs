//! The typed simulation-state store.
//!
//! [`Grid`] holds every named parameter of a simulation run, the
//! first-class coordinate arrays, and the names of the operators selected
//! for the run. [`GridConfig`] is the validated entry point that builds a
//! populated store.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod coords;
pub mod param_file;
pub mod selection;
pub mod store;

pub use config::{ConfigError, GridConfig};
pub use coords::Coordinates;
pub use selection::OperatorSelection;
pub use store::Grid;
