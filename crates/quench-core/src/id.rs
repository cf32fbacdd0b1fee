//! Strongly-typed identifiers for device-side objects.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies a buffer slot inside a device memory pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(pub u32);

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for BufferId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Counter for unique [`PlanHandle`] allocation.
static PLAN_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Counter for unique [`StreamHandle`] allocation.
static STREAM_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Opaque handle for a transform execution plan.
///
/// Allocated from a monotonic atomic counter via [`PlanHandle::next`], so
/// two plans built from identical arguments still receive distinct handles
/// and remain independently usable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlanHandle(u64);

impl PlanHandle {
    /// Allocate a fresh, unique plan handle. Thread-safe.
    pub fn next() -> Self {
        Self(PLAN_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw handle value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlanHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plan#{}", self.0)
    }
}

/// Opaque handle for an execution stream.
///
/// Operations submitted to one stream execute in submission order; no
/// ordering is implied across streams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StreamHandle(u64);

impl StreamHandle {
    /// Allocate a fresh, unique stream handle. Thread-safe.
    pub fn next() -> Self {
        Self(STREAM_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw handle value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for StreamHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stream#{}", self.0)
    }
}
