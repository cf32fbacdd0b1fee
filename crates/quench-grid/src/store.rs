//! The [`Grid`] state store.
//!
//! One map from key to [`ParamValue`], with typed store and accessor pairs
//! per category. A key lives in exactly one category at a time: storing it
//! again under another category replaces the previous entry, so the
//! category queries always agree with the most recent store. Accessors
//! never coerce between categories.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use indexmap::IndexMap;
use quench_core::{ComplexBuffer, Extents, ParamValue, RealBuffer, StoreError, ValueKind};
use tracing::{debug, info};

use crate::coords::Coordinates;
use crate::param_file::write_params;
use crate::selection::OperatorSelection;

/// Per-run store of named parameters, coordinate arrays, and the
/// operator selection.
///
/// Array categories hold [`DeviceBuffer`](quench_core::DeviceBuffer)
/// handles. The store never allocates or frees the memory they name.
///
/// # Examples
///
/// ```
/// use quench_grid::Grid;
/// use quench_core::{StoreError, ValueKind};
///
/// let mut grid = Grid::new();
/// grid.store_int("xDim", 256);
/// grid.store_double("dx", 0.1);
///
/// assert_eq!(grid.ival("xDim"), Ok(256));
/// assert!(grid.is_double("dx"));
/// assert!(matches!(
///     grid.ival("dx"),
///     Err(StoreError::CategoryMismatch { found: ValueKind::Double, .. })
/// ));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Grid {
    params: IndexMap<String, ParamValue>,
    coords: Coordinates,
    selection: OperatorSelection,
}

impl Grid {
    /// Create an empty store with the default operator selection.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Storing ────────────────────────────────────────────────────

    /// Insert or replace `key`, dispatching on the value's category.
    pub fn store(&mut self, key: &str, value: impl Into<ParamValue>) {
        let value = value.into();
        if let Some(old) = self.params.get(key) {
            if old.kind() != value.kind() {
                debug!(
                    key,
                    from = %old.kind(),
                    to = %value.kind(),
                    "parameter category replaced"
                );
            }
        }
        self.params.insert(key.to_string(), value);
    }

    /// Store an integer parameter.
    pub fn store_int(&mut self, key: &str, value: i64) {
        self.store(key, ParamValue::Int(value));
    }

    /// Store a real scalar parameter.
    pub fn store_double(&mut self, key: &str, value: f64) {
        self.store(key, ParamValue::Double(value));
    }

    /// Store a handle to a real device array.
    pub fn store_array(&mut self, key: &str, value: RealBuffer) {
        self.store(key, ParamValue::DoubleArray(value));
    }

    /// Store a boolean flag.
    pub fn store_bool(&mut self, key: &str, value: bool) {
        self.store(key, ParamValue::Bool(value));
    }

    /// Store a string value.
    pub fn store_string(&mut self, key: &str, value: impl Into<String>) {
        self.store(key, ParamValue::Str(value.into()));
    }

    /// Store a handle to a complex device array.
    pub fn store_complex_array(&mut self, key: &str, value: ComplexBuffer) {
        self.store(key, ParamValue::ComplexArray(value));
    }

    /// Remove `key` from whichever category holds it.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.params.shift_remove(key)
    }

    // ── Typed retrieval ────────────────────────────────────────────

    /// Retrieve an integer parameter.
    pub fn ival(&self, key: &str) -> Result<i64, StoreError> {
        match self.params.get(key) {
            Some(ParamValue::Int(v)) => Ok(*v),
            other => Err(absent_or_mismatch(key, ValueKind::Int, other)),
        }
    }

    /// Retrieve a real scalar parameter.
    pub fn dval(&self, key: &str) -> Result<f64, StoreError> {
        match self.params.get(key) {
            Some(ParamValue::Double(v)) => Ok(*v),
            other => Err(absent_or_mismatch(key, ValueKind::Double, other)),
        }
    }

    /// Retrieve a real device-array handle.
    pub fn dsval(&self, key: &str) -> Result<RealBuffer, StoreError> {
        match self.params.get(key) {
            Some(ParamValue::DoubleArray(v)) => Ok(*v),
            other => Err(absent_or_mismatch(key, ValueKind::DoubleArray, other)),
        }
    }

    /// Retrieve a boolean flag.
    pub fn bval(&self, key: &str) -> Result<bool, StoreError> {
        match self.params.get(key) {
            Some(ParamValue::Bool(v)) => Ok(*v),
            other => Err(absent_or_mismatch(key, ValueKind::Bool, other)),
        }
    }

    /// Retrieve a string value.
    pub fn sval(&self, key: &str) -> Result<&str, StoreError> {
        match self.params.get(key) {
            Some(ParamValue::Str(v)) => Ok(v.as_str()),
            other => Err(absent_or_mismatch(key, ValueKind::Str, other)),
        }
    }

    /// Retrieve a complex device-array handle.
    pub fn cval(&self, key: &str) -> Result<ComplexBuffer, StoreError> {
        match self.params.get(key) {
            Some(ParamValue::ComplexArray(v)) => Ok(*v),
            other => Err(absent_or_mismatch(key, ValueKind::ComplexArray, other)),
        }
    }

    /// Real parameter, or `default` when the key was never stored.
    ///
    /// A key stored under another category is still an error.
    pub fn dval_or(&self, key: &str, default: f64) -> Result<f64, StoreError> {
        if self.params.contains_key(key) {
            self.dval(key)
        } else {
            Ok(default)
        }
    }

    // ── Category queries ────────────────────────────────────────────

    /// Category of `key`, or `None` if it was never stored.
    pub fn kind(&self, key: &str) -> Option<ValueKind> {
        self.params.get(key).map(ParamValue::kind)
    }

    /// Whether `key` is stored in any category.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Whether `key` is stored as a real scalar.
    pub fn is_double(&self, key: &str) -> bool {
        self.kind(key) == Some(ValueKind::Double)
    }

    /// Whether `key` is stored as a real-array handle.
    pub fn is_array(&self, key: &str) -> bool {
        self.kind(key) == Some(ValueKind::DoubleArray)
    }

    /// Whether `key` is stored as an integer.
    pub fn is_int(&self, key: &str) -> bool {
        self.kind(key) == Some(ValueKind::Int)
    }

    /// Whether `key` is stored as a boolean.
    pub fn is_bool(&self, key: &str) -> bool {
        self.kind(key) == Some(ValueKind::Bool)
    }

    /// Whether `key` is stored as a string.
    pub fn is_string(&self, key: &str) -> bool {
        self.kind(key) == Some(ValueKind::Str)
    }

    /// Whether `key` is stored as a complex-array handle.
    pub fn is_complex_array(&self, key: &str) -> bool {
        self.kind(key) == Some(ValueKind::ComplexArray)
    }

    /// Iterate over all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries of one category, in insertion order.
    pub fn entries_of(&self, kind: ValueKind) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.iter().filter(move |(_, v)| v.kind() == kind)
    }

    /// Number of stored parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether no parameters are stored.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    // ── Grid geometry ──────────────────────────────────────────────

    /// Coordinate arrays.
    pub fn coords(&self) -> &Coordinates {
        &self.coords
    }

    /// Mutable coordinate arrays.
    pub fn coords_mut(&mut self) -> &mut Coordinates {
        &mut self.coords
    }

    /// Replace the coordinate arrays.
    pub fn set_coords(&mut self, coords: Coordinates) {
        self.coords = coords;
    }

    /// Lattice extents from `xDim`, `yDim` and `zDim`.
    ///
    /// `zDim` defaults to 1 when absent; `xDim` and `yDim` are required.
    pub fn extents(&self) -> Result<Extents, StoreError> {
        let x = self.dim("xDim")?;
        let y = self.dim("yDim")?;
        let z = if self.contains("zDim") {
            self.dim("zDim")?
        } else {
            1
        };
        Ok(Extents::new_3d(x, y, z))
    }

    fn dim(&self, key: &str) -> Result<usize, StoreError> {
        let v = self.ival(key)?;
        match usize::try_from(v) {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(StoreError::InvalidValue {
                key: key.to_string(),
                reason: format!("grid extent must be positive, got {v}"),
            }),
        }
    }

    // ── Operator selection ─────────────────────────────────────────

    /// Names of the operators active for this run.
    pub fn selection(&self) -> &OperatorSelection {
        &self.selection
    }

    /// Mutable operator selection.
    pub fn selection_mut(&mut self) -> &mut OperatorSelection {
        &mut self.selection
    }

    /// Replace the operator selection.
    pub fn set_selection(&mut self, selection: OperatorSelection) {
        self.selection = selection;
    }

    // ── Output ─────────────────────────────────────────────────────

    /// Write every scalar parameter to `path` in the INI-like
    /// parameter-file format.
    pub fn write(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        write_params(self, &mut out)?;
        out.flush()?;
        info!(path = %path.display(), entries = self.len(), "parameter file written");
        Ok(())
    }
}

fn absent_or_mismatch(key: &str, expected: ValueKind, found: Option<&ParamValue>) -> StoreError {
    match found {
        None => StoreError::missing(key, expected.label()),
        Some(v) => StoreError::CategoryMismatch {
            key: key.to_string(),
            expected,
            found: v.kind(),
        },
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            match value {
                ParamValue::Int(v) => writeln!(f, "{key} (int) = {v}")?,
                ParamValue::Double(v) => writeln!(f, "{key} (double) = {v}")?,
                ParamValue::Bool(v) => writeln!(f, "{key} (bool) = {v}")?,
                ParamValue::Str(v) => writeln!(f, "{key} (string) = {v}")?,
                ParamValue::DoubleArray(b) => writeln!(f, "{key} (double_array) = {b}")?,
                ParamValue::ComplexArray(b) => writeln!(f, "{key} (complex_array) = {b}")?,
            }
        }
        for (key, name) in self.selection.entries() {
            writeln!(f, "{key} (selection) = {name}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use quench_core::{BufferId, DeviceBuffer};

    fn real_handle(id: u32) -> RealBuffer {
        DeviceBuffer::new(BufferId(id), 0, 16)
    }

    fn complex_handle(id: u32) -> ComplexBuffer {
        DeviceBuffer::new(BufferId(id), 0, 16)
    }

    #[test]
    fn round_trip_every_category() {
        let mut g = Grid::new();
        g.store_int("xDim", 256);
        g.store_double("dx", 0.1);
        g.store_array("V", real_handle(1));
        g.store_bool("gpe", true);
        g.store_string("data_dir", "data/");
        g.store_complex_array("wfc", complex_handle(2));

        assert_eq!(g.ival("xDim"), Ok(256));
        assert_eq!(g.dval("dx"), Ok(0.1));
        assert_eq!(g.dsval("V"), Ok(real_handle(1)));
        assert_eq!(g.bval("gpe"), Ok(true));
        assert_eq!(g.sval("data_dir"), Ok("data/"));
        assert_eq!(g.cval("wfc"), Ok(complex_handle(2)));
        assert_eq!(g.len(), 6);
    }

    #[test]
    fn missing_key_reports_category() {
        let g = Grid::new();
        assert_eq!(
            g.dval("omega"),
            Err(StoreError::MissingKey {
                key: "omega".into(),
                category: "double",
            })
        );
    }

    #[test]
    fn wrong_category_is_a_mismatch() {
        let mut g = Grid::new();
        g.store_int("xDim", 64);
        assert_eq!(
            g.dval("xDim"),
            Err(StoreError::CategoryMismatch {
                key: "xDim".into(),
                expected: ValueKind::Double,
                found: ValueKind::Int,
            })
        );
        assert!(g.sval("xDim").is_err());
        assert!(g.dsval("xDim").is_err());
    }

    #[test]
    fn every_accessor_names_its_category() {
        let mut g = Grid::new();
        g.store_double("dx", 0.1);
        let errors = [
            (g.ival("k").unwrap_err(), g.ival("dx").unwrap_err(), ValueKind::Int),
            (g.bval("k").unwrap_err(), g.bval("dx").unwrap_err(), ValueKind::Bool),
            (g.sval("k").unwrap_err(), g.sval("dx").unwrap_err(), ValueKind::Str),
            (
                g.dsval("k").unwrap_err(),
                g.dsval("dx").unwrap_err(),
                ValueKind::DoubleArray,
            ),
            (
                g.cval("k").unwrap_err(),
                g.cval("dx").unwrap_err(),
                ValueKind::ComplexArray,
            ),
        ];
        for (missing, mismatch, kind) in errors {
            assert_eq!(missing, StoreError::missing("k", kind.label()));
            assert_eq!(
                mismatch,
                StoreError::CategoryMismatch {
                    key: "dx".into(),
                    expected: kind,
                    found: ValueKind::Double,
                }
            );
        }
    }

    #[test]
    fn restore_replaces_without_duplicates() {
        let mut g = Grid::new();
        g.store_double("omega", 0.0);
        g.store_double("omega", 0.5);
        assert_eq!(g.dval("omega"), Ok(0.5));
        assert_eq!(g.entries_of(ValueKind::Double).count(), 1);
    }

    #[test]
    fn category_queries_follow_latest_store() {
        let mut g = Grid::new();
        g.store_double("K", 1.0);
        assert!(g.is_double("K"));
        g.store_array("K", real_handle(4));
        assert!(!g.is_double("K"));
        assert!(g.is_array("K"));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn category_queries_cover_all_kinds() {
        let mut g = Grid::new();
        g.store_bool("write", false);
        g.store_string("name", "run");
        g.store_complex_array("psi", complex_handle(9));
        assert!(g.is_bool("write"));
        assert!(g.is_string("name"));
        assert!(g.is_complex_array("psi"));
        assert_eq!(g.kind("absent"), None);
    }

    #[test]
    fn dval_or_defaults_only_when_absent() {
        let mut g = Grid::new();
        assert_eq!(g.dval_or("x0_shift", 0.0), Ok(0.0));
        g.store_int("x0_shift", 1);
        assert!(g.dval_or("x0_shift", 0.0).is_err());
    }

    #[test]
    fn extents_default_planar() {
        let mut g = Grid::new();
        g.store_int("xDim", 8);
        g.store_int("yDim", 4);
        assert_eq!(g.extents(), Ok(Extents::new_2d(8, 4)));
        g.store_int("zDim", 2);
        assert_eq!(g.extents(), Ok(Extents::new_3d(8, 4, 2)));
    }

    #[test]
    fn extents_reject_non_positive() {
        let mut g = Grid::new();
        g.store_int("xDim", 0);
        g.store_int("yDim", 4);
        assert!(matches!(g.extents(), Err(StoreError::InvalidValue { .. })));
    }

    #[test]
    fn remove_clears_every_category() {
        let mut g = Grid::new();
        g.store_int("n", 1);
        assert!(g.remove("n").is_some());
        assert!(!g.contains("n"));
    }

    fn arb_value() -> impl Strategy<Value = ParamValue> {
        prop_oneof![
            any::<i64>().prop_map(ParamValue::Int),
            (-1e12f64..1e12).prop_map(ParamValue::Double),
            any::<bool>().prop_map(ParamValue::Bool),
            "[a-z]{0,12}".prop_map(ParamValue::Str),
            (0u32..64).prop_map(|id| ParamValue::DoubleArray(real_handle(id))),
            (0u32..64).prop_map(|id| ParamValue::ComplexArray(complex_handle(id))),
        ]
    }

    proptest! {
        #[test]
        fn stored_value_reads_back(key in "[a-zA-Z]{1,8}", value in arb_value()) {
            let mut g = Grid::new();
            g.store(&key, value.clone());
            let back = match value.kind() {
                ValueKind::Int => g.ival(&key).map(ParamValue::Int),
                ValueKind::Double => g.dval(&key).map(ParamValue::Double),
                ValueKind::DoubleArray => g.dsval(&key).map(ParamValue::DoubleArray),
                ValueKind::Bool => g.bval(&key).map(ParamValue::Bool),
                ValueKind::Str => g.sval(&key).map(ParamValue::from),
                ValueKind::ComplexArray => g.cval(&key).map(ParamValue::ComplexArray),
            };
            prop_assert_eq!(back, Ok(value));
        }

        #[test]
        fn other_categories_fail(key in "[a-z]{1,8}", value in arb_value()) {
            let mut g = Grid::new();
            let kind = value.kind();
            g.store(&key, value);
            prop_assert_eq!(g.kind(&key), Some(kind));
            let results = [
                (ValueKind::Int, g.ival(&key).is_ok()),
                (ValueKind::Double, g.dval(&key).is_ok()),
                (ValueKind::DoubleArray, g.dsval(&key).is_ok()),
                (ValueKind::Bool, g.bval(&key).is_ok()),
                (ValueKind::Str, g.sval(&key).is_ok()),
                (ValueKind::ComplexArray, g.cval(&key).is_ok()),
            ];
            for (k, ok) in results {
                prop_assert_eq!(ok, k == kind);
            }
        }
    }
}
