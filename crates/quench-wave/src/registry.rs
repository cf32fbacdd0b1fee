//! The wavefunction registry.

use std::sync::Arc;

use indexmap::IndexMap;
use quench_core::{Complex64, ComplexBuffer, RealBuffer, StoreError};
use quench_grid::Grid;
use tracing::debug;

use crate::builtins::Profile;
use crate::init::{evaluate_on_lattice, WavefunctionInit};
use crate::params::WaveParams;

/// Registry of initial-state generators plus the arrays they fill.
///
/// Parameters start unloaded; lattice evaluation fails until
/// [`load_params`](Self::load_params) or [`set_params`](Self::set_params).
#[derive(Debug, Default)]
pub struct Wave {
    real: IndexMap<String, RealBuffer>,
    complex: IndexMap<String, ComplexBuffer>,
    fns: IndexMap<String, Arc<dyn WavefunctionInit>>,
    params: Option<WaveParams>,
}

impl Wave {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the built-in generators registered.
    pub fn with_builtins() -> Self {
        let mut wave = Self::new();
        wave.set_fns();
        wave
    }

    /// Register `2d`, `3d`, `torus` and `noise`.
    pub fn set_fns(&mut self) {
        for profile in Profile::ALL {
            self.register(Arc::new(profile));
        }
        debug!(generators = self.fns.len(), "built-in wavefunctions registered");
    }

    /// Register `init` under its own name, replacing a generator of the
    /// same name.
    pub fn register(&mut self, init: Arc<dyn WavefunctionInit>) {
        self.fns.insert(init.name().to_string(), init);
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fns.keys().map(String::as_str)
    }

    /// Generator by name.
    pub fn wfc_fn(&self, name: &str) -> Result<Arc<dyn WavefunctionInit>, StoreError> {
        self.fns
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::unknown_operator("wavefunction", name))
    }

    /// Load parameters and resolve the grid's selected generator.
    pub fn prepare(&mut self, grid: &Grid) -> Result<Arc<dyn WavefunctionInit>, StoreError> {
        self.load_params(grid)?;
        self.wfc_fn(&grid.selection().wavefunction)
    }

    /// Evaluate the grid's selected generator over the whole lattice.
    pub fn generate(&mut self, grid: &Grid, phase: f64) -> Result<Vec<Complex64>, StoreError> {
        let init = self.prepare(grid)?;
        debug!(generator = init.name(), phase, "generating initial state");
        evaluate_on_lattice(grid, self, init.as_ref(), phase)
    }

    // ── Parameters ─────────────────────────────────────────────────

    /// Read [`WaveParams`] from `grid`.
    pub fn load_params(&mut self, grid: &Grid) -> Result<(), StoreError> {
        self.params = Some(WaveParams::from_grid(grid)?);
        Ok(())
    }

    /// Replace the parameters directly.
    pub fn set_params(&mut self, params: WaveParams) {
        self.params = Some(params);
    }

    /// Parameters currently loaded.
    pub fn params(&self) -> Result<&WaveParams, StoreError> {
        self.params
            .as_ref()
            .ok_or(StoreError::ParamsNotLoaded { registry: "wavefunction" })
    }

    // ── Arrays ─────────────────────────────────────────────────────

    /// Store a real device array.
    pub fn store_real(&mut self, key: &str, value: RealBuffer) {
        self.real.insert(key.to_string(), value);
    }

    /// Store a complex device array.
    pub fn store_complex(&mut self, key: &str, value: ComplexBuffer) {
        self.complex.insert(key.to_string(), value);
    }

    /// Real array handle.
    pub fn dsval(&self, key: &str) -> Result<RealBuffer, StoreError> {
        self.real
            .get(key)
            .copied()
            .ok_or_else(|| StoreError::missing(key, "double_array"))
    }

    /// Complex array handle.
    pub fn cval(&self, key: &str) -> Result<ComplexBuffer, StoreError> {
        self.complex
            .get(key)
            .copied()
            .ok_or_else(|| StoreError::missing(key, "complex_array"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::FnInit;
    use quench_core::{BufferId, DeviceBuffer};

    #[test]
    fn empty_registry_has_no_generators() {
        assert_eq!(
            Wave::new().wfc_fn("2d").unwrap_err(),
            StoreError::unknown_operator("wavefunction", "2d")
        );
    }

    #[test]
    fn builtins_resolve() {
        let wave = Wave::with_builtins();
        for name in ["2d", "3d", "torus", "noise"] {
            assert_eq!(wave.wfc_fn(name).unwrap().name(), name);
        }
        assert_eq!(wave.names().count(), 4);
    }

    #[test]
    fn registration_replaces() {
        let mut wave = Wave::with_builtins();
        wave.register(Arc::new(FnInit::new(
            "2d",
            |_: &Grid, _: &Wave, _, _, _, _| Complex64::new(1.0, 0.0),
        )));
        let init = wave.wfc_fn("2d").unwrap();
        assert_eq!(
            init.evaluate(&Grid::new(), &wave, 0.0, 0, 0, 0),
            Complex64::new(1.0, 0.0)
        );
        assert_eq!(wave.names().count(), 4);
    }

    #[test]
    fn lattice_evaluation_needs_params() {
        let mut grid = Grid::new();
        grid.store_int("xDim", 2);
        grid.store_int("yDim", 2);
        let wave = Wave::with_builtins();
        let init = wave.wfc_fn("2d").unwrap();
        assert_eq!(
            evaluate_on_lattice(&grid, &wave, init.as_ref(), 0.0).unwrap_err(),
            StoreError::ParamsNotLoaded { registry: "wavefunction" }
        );
        assert!(init.evaluate(&grid, &wave, 0.0, 0, 0, 0).re.is_nan());
    }

    #[test]
    fn array_maps() {
        let mut wave = Wave::new();
        let r: RealBuffer = DeviceBuffer::new(BufferId(0), 0, 4);
        let c: ComplexBuffer = DeviceBuffer::new(BufferId(1), 0, 4);
        wave.store_real("phi", r);
        wave.store_complex("wfc", c);
        assert_eq!(wave.dsval("phi"), Ok(r));
        assert_eq!(wave.cval("wfc"), Ok(c));
        assert_eq!(
            wave.cval("wfc0"),
            Err(StoreError::missing("wfc0", "complex_array"))
        );
    }
}
