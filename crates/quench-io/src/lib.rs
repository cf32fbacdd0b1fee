//! Plain-text output and input for Quench simulation data.
//!
//! Every data file holds one value per line. Real values use the
//! shortest representation that parses back to the same `f64`, so a
//! written array reads back bit-for-bit. File names carry the step index:
//! `{name}_{step}`, with complex arrays split into `{name}_{step}` (real
//! parts) and `{name}i_{step}` (imaginary parts).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod params;
pub mod reader;
pub mod writer;

pub use error::IoError;
pub use params::ParamFile;
pub use reader::{read_complex, read_real};
pub use writer::{DataWriter, Quantity};
