//! Device and transform status codes.
//!
//! Status codes are data, not errors: the resource directory records them
//! as they are produced and callers decide when a failure must stop the
//! run. [`DeviceFault`] is the error raised by that decision.

use std::error::Error;
use std::fmt;

/// Outcome of a device memory or kernel operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceStatus {
    /// Completed without error.
    Success,
    /// Allocation failed.
    MemoryAllocation,
    /// An argument was rejected.
    InvalidValue,
    /// A kernel failed to launch.
    LaunchFailure,
    /// Asynchronous work has not finished.
    NotReady,
    /// A backend code with no named variant.
    Other(i32),
}

impl DeviceStatus {
    /// Whether this status reports success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::MemoryAllocation => write!(f, "memory allocation failed"),
            Self::InvalidValue => write!(f, "invalid value"),
            Self::LaunchFailure => write!(f, "launch failure"),
            Self::NotReady => write!(f, "not ready"),
            Self::Other(code) => write!(f, "device status {code}"),
        }
    }
}

/// Outcome of a transform plan operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformResult {
    /// Completed without error.
    Success,
    /// The plan handle was invalid.
    InvalidPlan,
    /// Plan workspace could not be allocated.
    AllocFailed,
    /// An argument was rejected.
    InvalidValue,
    /// Data length does not match the plan's layout.
    InvalidSize,
    /// Execution failed.
    ExecFailed,
    /// A backend code with no named variant.
    Other(i32),
}

impl TransformResult {
    /// Whether this result reports success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for TransformResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::InvalidPlan => write!(f, "invalid plan"),
            Self::AllocFailed => write!(f, "plan allocation failed"),
            Self::InvalidValue => write!(f, "invalid value"),
            Self::InvalidSize => write!(f, "invalid size"),
            Self::ExecFailed => write!(f, "execution failed"),
            Self::Other(code) => write!(f, "transform result {code}"),
        }
    }
}

/// The failing code carried by a [`DeviceFault`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fault {
    /// A device status.
    Status(DeviceStatus),
    /// A transform result.
    Transform(TransformResult),
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(s) => write!(f, "{s}"),
            Self::Transform(r) => write!(f, "{r}"),
        }
    }
}

/// A recorded status code that indicates failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceFault {
    /// Key the code was recorded under.
    pub key: String,
    /// The failing code.
    pub fault: Fault,
}

impl fmt::Display for DeviceFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "device operation '{}' failed: {}", self.key, self.fault)
    }
}

impl Error for DeviceFault {}
