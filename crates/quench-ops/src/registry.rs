//! The operator registry.

use std::sync::Arc;

use indexmap::IndexMap;
use quench_core::{ComplexBuffer, RealBuffer, StoreError};
use quench_grid::Grid;
use tracing::debug;

use crate::builtins;
use crate::family::OperatorFamily;
use crate::operator::LatticeOperator;
use crate::params::OperatorParams;
use crate::resolved::ResolvedOperators;

type Table = IndexMap<String, Arc<dyn LatticeOperator>>;

/// Operator registry plus the arrays operators work on.
///
/// Holds three array maps (mutable device arrays, read-only host arrays,
/// complex device arrays), one name table per [`OperatorFamily`], and the
/// scalar [`OperatorParams`] the built-ins read. Parameters start unloaded;
/// evaluation and [`resolve_selected`](Self::resolve_selected) fail until
/// [`load_params`](Self::load_params) or [`set_params`](Self::set_params).
#[derive(Default)]
pub struct Op {
    arrays: IndexMap<String, RealBuffer>,
    const_arrays: IndexMap<String, Arc<[f64]>>,
    complex_arrays: IndexMap<String, ComplexBuffer>,
    tables: [Table; 8],
    params: Option<OperatorParams>,
}

impl Op {
    /// An empty registry. No operator name resolves until
    /// [`set_fns`](Self::set_fns) or [`register`](Self::register).
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in operator registered.
    pub fn with_builtins() -> Self {
        let mut op = Self::new();
        op.set_fns();
        op
    }

    /// Register every built-in operator.
    pub fn set_fns(&mut self) {
        for (family, operator) in builtins::all() {
            self.register(family, operator);
        }
        debug!(
            operators = self.tables.iter().map(IndexMap::len).sum::<usize>(),
            "built-in operators registered"
        );
    }

    /// Register `operator` in `family` under its own name, replacing any
    /// operator of the same name.
    pub fn register(&mut self, family: OperatorFamily, operator: Arc<dyn LatticeOperator>) {
        let name = operator.name().to_string();
        self.tables[family.index()].insert(name, operator);
    }

    /// Names registered in `family`, in registration order.
    pub fn names(&self, family: OperatorFamily) -> impl Iterator<Item = &str> {
        self.tables[family.index()].keys().map(String::as_str)
    }

    // ── Lookup ─────────────────────────────────────────────────────

    /// Resolve `name` in `family`.
    pub fn resolve(
        &self,
        family: OperatorFamily,
        name: &str,
    ) -> Result<Arc<dyn LatticeOperator>, StoreError> {
        self.tables[family.index()]
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::unknown_operator(family.label(), name))
    }

    /// Kinetic operator by name.
    pub fn k_fn(&self, name: &str) -> Result<Arc<dyn LatticeOperator>, StoreError> {
        self.resolve(OperatorFamily::Kinetic, name)
    }

    /// Potential operator by name.
    pub fn v_fn(&self, name: &str) -> Result<Arc<dyn LatticeOperator>, StoreError> {
        self.resolve(OperatorFamily::Potential, name)
    }

    /// Position-space `Ax` by name.
    pub fn ax_fn(&self, name: &str) -> Result<Arc<dyn LatticeOperator>, StoreError> {
        self.resolve(OperatorFamily::Ax, name)
    }

    /// Position-space `Ay` by name.
    pub fn ay_fn(&self, name: &str) -> Result<Arc<dyn LatticeOperator>, StoreError> {
        self.resolve(OperatorFamily::Ay, name)
    }

    /// Position-space `Az` by name.
    pub fn az_fn(&self, name: &str) -> Result<Arc<dyn LatticeOperator>, StoreError> {
        self.resolve(OperatorFamily::Az, name)
    }

    /// Momentum-space `pAx` by name.
    pub fn pax_fn(&self, name: &str) -> Result<Arc<dyn LatticeOperator>, StoreError> {
        self.resolve(OperatorFamily::PAx, name)
    }

    /// Momentum-space `pAy` by name.
    pub fn pay_fn(&self, name: &str) -> Result<Arc<dyn LatticeOperator>, StoreError> {
        self.resolve(OperatorFamily::PAy, name)
    }

    /// Momentum-space `pAz` by name.
    pub fn paz_fn(&self, name: &str) -> Result<Arc<dyn LatticeOperator>, StoreError> {
        self.resolve(OperatorFamily::PAz, name)
    }

    /// Resolve every family from the grid's operator selection. The
    /// vector-potential name is shared by all six A tables.
    ///
    /// Fails with [`StoreError::ParamsNotLoaded`] if parameters were never
    /// loaded, since the resolved operators could not be evaluated.
    pub fn resolve_selected(&self, grid: &Grid) -> Result<ResolvedOperators, StoreError> {
        self.params()?;
        let sel = grid.selection();
        let a = sel.vector_potential.as_str();
        let resolved = ResolvedOperators {
            kinetic: self.k_fn(&sel.kinetic)?,
            potential: self.v_fn(&sel.potential)?,
            a: [self.ax_fn(a)?, self.ay_fn(a)?, self.az_fn(a)?],
            pa: [self.pax_fn(a)?, self.pay_fn(a)?, self.paz_fn(a)?],
        };
        debug!(
            kinetic = %sel.kinetic,
            potential = %sel.potential,
            vector_potential = a,
            "operators resolved"
        );
        Ok(resolved)
    }

    /// Load parameters from `grid`, then resolve the selection.
    pub fn prepare(&mut self, grid: &Grid) -> Result<ResolvedOperators, StoreError> {
        self.load_params(grid)?;
        self.resolve_selected(grid)
    }

    // ── Parameters ─────────────────────────────────────────────────

    /// Read [`OperatorParams`] from `grid`. Call before evaluating.
    pub fn load_params(&mut self, grid: &Grid) -> Result<(), StoreError> {
        self.params = Some(OperatorParams::from_grid(grid)?);
        Ok(())
    }

    /// Replace the parameters directly.
    pub fn set_params(&mut self, params: OperatorParams) {
        self.params = Some(params);
    }

    /// Parameters currently loaded.
    pub fn params(&self) -> Result<&OperatorParams, StoreError> {
        self.params
            .as_ref()
            .ok_or(StoreError::ParamsNotLoaded { registry: "operator" })
    }

    // ── Arrays ─────────────────────────────────────────────────────

    /// Store a mutable real device array.
    pub fn store_mut(&mut self, key: &str, value: RealBuffer) {
        self.arrays.insert(key.to_string(), value);
    }

    /// Store a read-only real array.
    pub fn store_const(&mut self, key: &str, value: impl Into<Arc<[f64]>>) {
        self.const_arrays.insert(key.to_string(), value.into());
    }

    /// Store a complex device array.
    pub fn store_complex(&mut self, key: &str, value: ComplexBuffer) {
        self.complex_arrays.insert(key.to_string(), value);
    }

    /// Mutable real array handle.
    pub fn dsval(&self, key: &str) -> Result<RealBuffer, StoreError> {
        self.arrays
            .get(key)
            .copied()
            .ok_or_else(|| StoreError::missing(key, "double_array"))
    }

    /// Read-only real array.
    pub fn const_val(&self, key: &str) -> Result<&[f64], StoreError> {
        self.const_arrays
            .get(key)
            .map(|a| &a[..])
            .ok_or_else(|| StoreError::missing(key, "const_array"))
    }

    /// Read-only real array, if present.
    pub fn const_get(&self, key: &str) -> Option<&[f64]> {
        self.const_arrays.get(key).map(|a| &a[..])
    }

    /// Complex array handle.
    pub fn cval(&self, key: &str) -> Result<ComplexBuffer, StoreError> {
        self.complex_arrays
            .get(key)
            .copied()
            .ok_or_else(|| StoreError::missing(key, "complex_array"))
    }
}
