//! Per-run directory of device resources keyed by name.
//!
//! The directory records handles and codes; it never allocates device
//! resources itself. Plans come from the plan factory, streams from
//! [`Device::create_stream`](crate::Device::create_stream).

use indexmap::IndexMap;
use quench_core::{StoreError, StreamHandle};
use tracing::warn;

use crate::launch::LaunchConfig;
use crate::plan::TransformPlan;
use crate::status::{DeviceFault, DeviceStatus, Fault, TransformResult};

/// One of the four fixed streams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StreamSlot {
    /// First stream.
    A,
    /// Second stream.
    B,
    /// Third stream.
    C,
    /// Fourth stream.
    D,
}

impl StreamSlot {
    /// All slots in order.
    pub const ALL: [StreamSlot; 4] = [Self::A, Self::B, Self::C, Self::D];

    fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }
}

/// Named device statuses, transform results, plans, streams and launch
/// configurations, plus four fixed streams.
#[derive(Debug)]
pub struct DeviceResources {
    statuses: IndexMap<String, DeviceStatus>,
    results: IndexMap<String, TransformResult>,
    plans: IndexMap<String, TransformPlan>,
    streams: IndexMap<String, StreamHandle>,
    launches: IndexMap<String, LaunchConfig>,
    fixed: [StreamHandle; 4],
    last_status: Option<String>,
    last_result: Option<String>,
}

impl DeviceResources {
    /// Create a directory around four externally created streams.
    pub fn new(fixed: [StreamHandle; 4]) -> Self {
        Self {
            statuses: IndexMap::new(),
            results: IndexMap::new(),
            plans: IndexMap::new(),
            streams: IndexMap::new(),
            launches: IndexMap::new(),
            fixed,
            last_status: None,
            last_result: None,
        }
    }

    // ── Status codes ───────────────────────────────────────────────

    /// Record a device status under `key`.
    pub fn store_status(&mut self, key: &str, status: DeviceStatus) {
        if !status.is_success() {
            warn!(key, %status, "device operation reported failure");
        }
        self.statuses.insert(key.to_string(), status);
        self.last_status = Some(key.to_string());
    }

    /// Device status recorded under `key`.
    pub fn status_val(&self, key: &str) -> Result<DeviceStatus, StoreError> {
        self.statuses
            .get(key)
            .copied()
            .ok_or_else(|| StoreError::missing(key, "device status"))
    }

    /// Record a transform result under `key`.
    pub fn store_result(&mut self, key: &str, result: TransformResult) {
        if !result.is_success() {
            warn!(key, %result, "transform reported failure");
        }
        self.results.insert(key.to_string(), result);
        self.last_result = Some(key.to_string());
    }

    /// Transform result recorded under `key`.
    pub fn result_val(&self, key: &str) -> Result<TransformResult, StoreError> {
        self.results
            .get(key)
            .copied()
            .ok_or_else(|| StoreError::missing(key, "transform result"))
    }

    /// The most recently stored device status, with its key.
    pub fn last_status(&self) -> Option<(&str, DeviceStatus)> {
        let key = self.last_status.as_deref()?;
        self.statuses.get(key).map(|s| (key, *s))
    }

    /// The most recently stored transform result, with its key.
    pub fn last_result(&self) -> Option<(&str, TransformResult)> {
        let key = self.last_result.as_deref()?;
        self.results.get(key).map(|r| (key, *r))
    }

    /// Fail if either the last stored status or the last stored result
    /// indicates failure.
    pub fn check_last(&self) -> Result<(), DeviceFault> {
        if let Some((key, status)) = self.last_status() {
            if !status.is_success() {
                return Err(DeviceFault {
                    key: key.to_string(),
                    fault: Fault::Status(status),
                });
            }
        }
        if let Some((key, result)) = self.last_result() {
            if !result.is_success() {
                return Err(DeviceFault {
                    key: key.to_string(),
                    fault: Fault::Transform(result),
                });
            }
        }
        Ok(())
    }

    /// Every recorded failure, statuses first.
    pub fn failures(&self) -> Vec<DeviceFault> {
        let statuses = self
            .statuses
            .iter()
            .filter(|(_, s)| !s.is_success())
            .map(|(k, s)| DeviceFault {
                key: k.clone(),
                fault: Fault::Status(*s),
            });
        let results = self
            .results
            .iter()
            .filter(|(_, r)| !r.is_success())
            .map(|(k, r)| DeviceFault {
                key: k.clone(),
                fault: Fault::Transform(*r),
            });
        statuses.chain(results).collect()
    }

    // ── Plans ──────────────────────────────────────────────────────

    /// Record a plan under `key`, replacing any earlier plan.
    pub fn store_plan(&mut self, key: &str, plan: TransformPlan) {
        self.plans.insert(key.to_string(), plan);
    }

    /// Plan recorded under `key`.
    pub fn plan_val(&self, key: &str) -> Result<&TransformPlan, StoreError> {
        self.plans
            .get(key)
            .ok_or_else(|| StoreError::missing(key, "plan"))
    }

    // ── Streams ────────────────────────────────────────────────────

    /// Record a named stream.
    pub fn store_stream(&mut self, key: &str, stream: StreamHandle) {
        self.streams.insert(key.to_string(), stream);
    }

    /// Stream recorded under `key`.
    pub fn stream_val(&self, key: &str) -> Result<StreamHandle, StoreError> {
        self.streams
            .get(key)
            .copied()
            .ok_or_else(|| StoreError::missing(key, "stream"))
    }

    /// One of the fixed streams.
    pub fn stream(&self, slot: StreamSlot) -> StreamHandle {
        self.fixed[slot.index()]
    }

    /// Replace one of the fixed streams.
    pub fn set_stream(&mut self, slot: StreamSlot, stream: StreamHandle) {
        self.fixed[slot.index()] = stream;
    }

    // ── Launch configurations ──────────────────────────────────────

    /// Record a launch configuration.
    pub fn store_launch(&mut self, key: &str, config: LaunchConfig) {
        self.launches.insert(key.to_string(), config);
    }

    /// Launch configuration recorded under `key`.
    pub fn launch_val(&self, key: &str) -> Result<LaunchConfig, StoreError> {
        self.launches
            .get(key)
            .copied()
            .ok_or_else(|| StoreError::missing(key, "launch configuration"))
    }
}
