//! Non-owning handles to device-resident arrays.
//!
//! A [`DeviceBuffer`] names an allocation inside a device memory pool. It
//! is `Copy` and carries no ownership: stores record which logical
//! quantity occupies which buffer, but only the pool that issued the handle
//! may allocate or free the memory behind it. The `generation` field lets
//! the pool reject handles to slots that have since been freed and reused.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use num_complex::Complex64;

use crate::id::BufferId;

/// Handle to a typed device array.
#[must_use]
pub struct DeviceBuffer<T> {
    id: BufferId,
    generation: u32,
    len: usize,
    _marker: PhantomData<fn() -> T>,
}

/// Handle to a device array of real values.
pub type RealBuffer = DeviceBuffer<f64>;

/// Handle to a device array of complex values.
pub type ComplexBuffer = DeviceBuffer<Complex64>;

impl<T> DeviceBuffer<T> {
    /// Create a handle. Called by the owning memory pool.
    pub fn new(id: BufferId, generation: u32, len: usize) -> Self {
        Self {
            id,
            generation,
            len,
            _marker: PhantomData,
        }
    }

    /// Slot identifier within the owning pool.
    pub fn id(&self) -> BufferId {
        self.id
    }

    /// Slot generation at the time of allocation.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Number of elements in the allocation.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this is a zero-length allocation.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Clone for DeviceBuffer<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DeviceBuffer<T> {}

impl<T> PartialEq for DeviceBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.generation == other.generation && self.len == other.len
    }
}

impl<T> Eq for DeviceBuffer<T> {}

impl<T> Hash for DeviceBuffer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.generation.hash(state);
        self.len.hash(state);
    }
}

impl<T> fmt::Debug for DeviceBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceBuffer")
            .field("id", &self.id)
            .field("generation", &self.generation)
            .field("len", &self.len)
            .finish()
    }
}

impl<T> fmt::Display for DeviceBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DeviceBuffer(id={}, gen={}, len={})",
            self.id, self.generation, self.len
        )
    }
}
