//! Device-side resources for Quench simulations.
//!
//! - [`Device`]: CPU reference device memory. It owns every array; stores
//!   elsewhere hold only [`DeviceBuffer`](quench_core::DeviceBuffer) handles.
//! - [`DeviceResources`]: the per-run directory of status codes, transform
//!   results, plans, streams, and launch configurations.
//! - [`generate_plan_other2d`] / [`generate_plan_other3d`]: transform plan
//!   construction from a grid's extents.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod launch;
pub mod memory;
pub mod plan;
pub mod resources;
pub mod status;

pub use launch::{Dim3, LaunchConfig};
pub use memory::{Device, DeviceElement};
pub use plan::{
    full_plan, generate_plan_other2d, generate_plan_other3d, FullTransform, LineLayout,
    TransformDirection, TransformPlan,
};
pub use resources::{DeviceResources, StreamSlot};
pub use status::{DeviceFault, DeviceStatus, Fault, TransformResult};
