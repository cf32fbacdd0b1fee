//! Error taxonomy shared by the stores and registries.
//!
//! Accessor failures indicate a configuration or programming defect and
//! are surfaced immediately; nothing is silently defaulted. Device status
//! codes are not errors in this sense and live with the device layer.

use std::error::Error;
use std::fmt;

use crate::id::BufferId;
use crate::value::ValueKind;

/// Errors from store, registry, and device-memory accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The key was never stored in this category.
    MissingKey {
        /// The requested key.
        key: String,
        /// Category the accessor reads from.
        category: &'static str,
    },
    /// The key exists, but under a different category.
    CategoryMismatch {
        /// The requested key.
        key: String,
        /// Category the accessor reads from.
        expected: ValueKind,
        /// Category the key is actually stored under.
        found: ValueKind,
    },
    /// No operator of this name is registered in the family.
    UnknownOperator {
        /// Operator family label (e.g. `"kinetic"`).
        family: &'static str,
        /// The unresolved name.
        name: String,
    },
    /// A buffer handle does not refer to a live allocation.
    StaleBuffer {
        /// Slot the handle points at.
        id: BufferId,
    },
    /// A buffer handle refers to an allocation of another element type.
    BufferTypeMismatch {
        /// Slot the handle points at.
        id: BufferId,
    },
    /// A stored value is outside the range its consumer accepts.
    InvalidValue {
        /// The offending key.
        key: String,
        /// What was wrong with it.
        reason: String,
    },
    /// Parameters a registry evaluates with were never loaded.
    ParamsNotLoaded {
        /// Which registry (e.g. `"operator"`).
        registry: &'static str,
    },
    /// Supplied data does not match the expected length.
    LengthMismatch {
        /// Expected element count.
        expected: usize,
        /// Actual element count.
        actual: usize,
    },
}

impl StoreError {
    /// Shorthand for [`StoreError::MissingKey`].
    pub fn missing(key: &str, category: &'static str) -> Self {
        Self::MissingKey {
            key: key.to_string(),
            category,
        }
    }

    /// Shorthand for [`StoreError::UnknownOperator`].
    pub fn unknown_operator(family: &'static str, name: &str) -> Self {
        Self::UnknownOperator {
            family,
            name: name.to_string(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey { key, category } => {
                write!(f, "missing key '{key}' in {category} storage")
            }
            Self::CategoryMismatch {
                key,
                expected,
                found,
            } => {
                write!(f, "key '{key}' is stored as {found}, not {expected}")
            }
            Self::UnknownOperator { family, name } => {
                write!(f, "unknown {family} operator '{name}'")
            }
            Self::StaleBuffer { id } => write!(f, "buffer {id} is not a live allocation"),
            Self::BufferTypeMismatch { id } => {
                write!(f, "buffer {id} holds a different element type")
            }
            Self::InvalidValue { key, reason } => write!(f, "invalid value for '{key}': {reason}"),
            Self::ParamsNotLoaded { registry } => {
                write!(f, "{registry} parameters not loaded; call load_params first")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "length mismatch: expected {expected} elements, got {actual}")
            }
        }
    }
}

impl Error for StoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_key() {
        let e = StoreError::missing("xDim", "int");
        assert_eq!(e.to_string(), "missing key 'xDim' in int storage");

        let e = StoreError::CategoryMismatch {
            key: "dx".into(),
            expected: ValueKind::Int,
            found: ValueKind::Double,
        };
        assert_eq!(e.to_string(), "key 'dx' is stored as double, not int");
    }

    #[test]
    fn params_not_loaded_display() {
        let e = StoreError::ParamsNotLoaded { registry: "operator" };
        assert_eq!(
            e.to_string(),
            "operator parameters not loaded; call load_params first"
        );
    }

    #[test]
    fn unknown_operator_display() {
        let e = StoreError::unknown_operator("kinetic", "nonexistent_K");
        assert_eq!(e.to_string(), "unknown kinetic operator 'nonexistent_K'");
    }
}
