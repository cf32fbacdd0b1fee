//! CPU reference device memory.
//!
//! [`Device`] owns every array in a run. Callers receive `Copy`
//! [`DeviceBuffer`] handles; the pool validates each handle's slot and
//! generation on every access, so a handle kept past `free` is rejected
//! instead of aliasing whatever reuses the slot.

use quench_core::{
    BufferId, Complex64, ComplexBuffer, DeviceBuffer, RealBuffer, StoreError, StreamHandle,
};
use tracing::{debug, warn};

use crate::status::{DeviceFault, DeviceStatus, Fault};

/// Slot contents, tagged by element type.
#[derive(Debug)]
pub enum SlotData {
    /// Real-valued array.
    Real(Vec<f64>),
    /// Complex-valued array.
    Complex(Vec<Complex64>),
}

/// Element types the device can hold.
pub trait DeviceElement: Copy + Default + 'static {
    /// Wrap an owned vector in its slot tag.
    fn wrap(data: Vec<Self>) -> SlotData;
    /// View slot contents as this element type, if the tag matches.
    fn view(data: &SlotData) -> Option<&[Self]>;
    /// Mutable view of slot contents, if the tag matches.
    fn view_mut(data: &mut SlotData) -> Option<&mut [Self]>;
}

impl DeviceElement for f64 {
    fn wrap(data: Vec<Self>) -> SlotData {
        SlotData::Real(data)
    }

    fn view(data: &SlotData) -> Option<&[Self]> {
        match data {
            SlotData::Real(v) => Some(v),
            SlotData::Complex(_) => None,
        }
    }

    fn view_mut(data: &mut SlotData) -> Option<&mut [Self]> {
        match data {
            SlotData::Real(v) => Some(v),
            SlotData::Complex(_) => None,
        }
    }
}

impl DeviceElement for Complex64 {
    fn wrap(data: Vec<Self>) -> SlotData {
        SlotData::Complex(data)
    }

    fn view(data: &SlotData) -> Option<&[Self]> {
        match data {
            SlotData::Complex(v) => Some(v),
            SlotData::Real(_) => None,
        }
    }

    fn view_mut(data: &mut SlotData) -> Option<&mut [Self]> {
        match data {
            SlotData::Complex(v) => Some(v),
            SlotData::Real(_) => None,
        }
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    data: Option<SlotData>,
}

/// Device memory pool.
#[derive(Debug, Default)]
pub struct Device {
    slots: Vec<Slot>,
    free_slots: Vec<u32>,
    streams: Vec<StreamHandle>,
}

impl Device {
    /// Create an empty device.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Allocation ─────────────────────────────────────────────────

    /// Allocate `len` default-initialised elements.
    ///
    /// Fails with [`DeviceStatus::MemoryAllocation`] once every slot index
    /// a [`BufferId`] can name is in use.
    pub fn alloc<T: DeviceElement>(&mut self, len: usize) -> Result<DeviceBuffer<T>, DeviceFault> {
        self.insert(vec![T::default(); len])
    }

    /// Allocate and fill from host memory.
    pub fn upload<T: DeviceElement>(&mut self, host: &[T]) -> Result<DeviceBuffer<T>, DeviceFault> {
        self.insert(host.to_vec())
    }

    /// Allocate a zeroed real array.
    pub fn alloc_real(&mut self, len: usize) -> Result<RealBuffer, DeviceFault> {
        self.alloc(len)
    }

    /// Allocate a zeroed complex array.
    pub fn alloc_complex(&mut self, len: usize) -> Result<ComplexBuffer, DeviceFault> {
        self.alloc(len)
    }

    /// Upload a real array.
    pub fn upload_real(&mut self, host: &[f64]) -> Result<RealBuffer, DeviceFault> {
        self.upload(host)
    }

    /// Upload a complex array.
    pub fn upload_complex(&mut self, host: &[Complex64]) -> Result<ComplexBuffer, DeviceFault> {
        self.upload(host)
    }

    fn insert<T: DeviceElement>(&mut self, data: Vec<T>) -> Result<DeviceBuffer<T>, DeviceFault> {
        let len = data.len();
        let packed = T::wrap(data);
        let index = match self.free_slots.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.data = Some(packed);
                index
            }
            None => {
                let index = next_slot_index(self.slots.len())?;
                self.slots.push(Slot {
                    generation: 0,
                    data: Some(packed),
                });
                index
            }
        };
        let generation = self.slots[index as usize].generation;
        debug!(id = index, generation, len, "device buffer allocated");
        Ok(DeviceBuffer::new(BufferId(index), generation, len))
    }

    /// Release an allocation. The slot's generation advances, invalidating
    /// every copy of `handle`.
    pub fn free<T: DeviceElement>(&mut self, handle: DeviceBuffer<T>) -> Result<(), StoreError> {
        self.get::<T>(handle)?;
        let index = handle.id().0;
        let slot = &mut self.slots[index as usize];
        slot.data = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_slots.push(index);
        debug!(id = index, "device buffer freed");
        Ok(())
    }

    // ── Access ─────────────────────────────────────────────────────

    /// Borrow the contents of a live allocation.
    pub fn get<T: DeviceElement>(&self, handle: DeviceBuffer<T>) -> Result<&[T], StoreError> {
        let id = handle.id();
        let data = self
            .slots
            .get(id.0 as usize)
            .filter(|slot| slot.generation == handle.generation())
            .and_then(|slot| slot.data.as_ref())
            .ok_or(StoreError::StaleBuffer { id })?;
        T::view(data).ok_or(StoreError::BufferTypeMismatch { id })
    }

    /// Mutably borrow the contents of a live allocation.
    pub fn get_mut<T: DeviceElement>(
        &mut self,
        handle: DeviceBuffer<T>,
    ) -> Result<&mut [T], StoreError> {
        let id = handle.id();
        let data = self
            .slots
            .get_mut(id.0 as usize)
            .filter(|slot| slot.generation == handle.generation())
            .and_then(|slot| slot.data.as_mut())
            .ok_or(StoreError::StaleBuffer { id })?;
        T::view_mut(data).ok_or(StoreError::BufferTypeMismatch { id })
    }

    /// Real array contents.
    pub fn real(&self, handle: RealBuffer) -> Result<&[f64], StoreError> {
        self.get(handle)
    }

    /// Mutable real array contents.
    pub fn real_mut(&mut self, handle: RealBuffer) -> Result<&mut [f64], StoreError> {
        self.get_mut(handle)
    }

    /// Complex array contents.
    pub fn complex(&self, handle: ComplexBuffer) -> Result<&[Complex64], StoreError> {
        self.get(handle)
    }

    /// Mutable complex array contents.
    pub fn complex_mut(&mut self, handle: ComplexBuffer) -> Result<&mut [Complex64], StoreError> {
        self.get_mut(handle)
    }

    /// Copy a real array back to host memory.
    pub fn download_real(&self, handle: RealBuffer) -> Result<Vec<f64>, StoreError> {
        self.real(handle).map(<[f64]>::to_vec)
    }

    /// Copy a complex array back to host memory.
    pub fn download_complex(&self, handle: ComplexBuffer) -> Result<Vec<Complex64>, StoreError> {
        self.complex(handle).map(<[Complex64]>::to_vec)
    }

    /// Overwrite an allocation from host memory of the same length.
    pub fn copy_from_host<T: DeviceElement>(
        &mut self,
        handle: DeviceBuffer<T>,
        host: &[T],
    ) -> Result<(), StoreError> {
        let dst = self.get_mut(handle)?;
        if dst.len() != host.len() {
            return Err(StoreError::LengthMismatch {
                expected: dst.len(),
                actual: host.len(),
            });
        }
        dst.copy_from_slice(host);
        Ok(())
    }

    /// Number of live allocations.
    pub fn live_buffers(&self) -> usize {
        self.slots.iter().filter(|s| s.data.is_some()).count()
    }

    // ── Streams ────────────────────────────────────────────────────

    /// Create an execution stream.
    pub fn create_stream(&mut self) -> StreamHandle {
        let handle = StreamHandle::next();
        self.streams.push(handle);
        handle
    }

    /// Streams created on this device, in creation order.
    pub fn streams(&self) -> &[StreamHandle] {
        &self.streams
    }
}

/// Index for a slot appended after `len` existing ones.
fn next_slot_index(len: usize) -> Result<u32, DeviceFault> {
    u32::try_from(len).map_err(|_| {
        warn!(slots = len, "device slot indices exhausted");
        DeviceFault {
            key: "device_alloc".into(),
            fault: Fault::Status(DeviceStatus::MemoryAllocation),
        }
    })
}
