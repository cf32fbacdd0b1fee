//! Parameter value categories.
//!
//! [`ParamValue`] is the closed sum stored by the state store: one variant
//! per category, with typed accessors on the store pattern-matching the
//! tag. [`ValueKind`] names the category without carrying the value.

use std::fmt;

use crate::buffer::{ComplexBuffer, RealBuffer};

/// Category of a stored parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Integer parameter.
    Int,
    /// Real scalar parameter.
    Double,
    /// Handle to a real device array.
    DoubleArray,
    /// Boolean flag.
    Bool,
    /// String value (paths, operator names).
    Str,
    /// Handle to a complex device array.
    ComplexArray,
}

impl ValueKind {
    /// All categories, in parameter-file section order followed by the
    /// array categories.
    pub const ALL: [ValueKind; 6] = [
        ValueKind::Int,
        ValueKind::Double,
        ValueKind::Bool,
        ValueKind::Str,
        ValueKind::DoubleArray,
        ValueKind::ComplexArray,
    ];

    /// Short lowercase label, also used as the parameter-file section name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Double => "double",
            Self::DoubleArray => "double_array",
            Self::Bool => "bool",
            Self::Str => "string",
            Self::ComplexArray => "complex_array",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A stored parameter value, tagged by category.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    /// Integer parameter.
    Int(i64),
    /// Real scalar parameter.
    Double(f64),
    /// Non-owning handle to a real device array.
    DoubleArray(RealBuffer),
    /// Boolean flag.
    Bool(bool),
    /// String value.
    Str(String),
    /// Non-owning handle to a complex device array.
    ComplexArray(ComplexBuffer),
}

impl ParamValue {
    /// The category of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Double(_) => ValueKind::Double,
            Self::DoubleArray(_) => ValueKind::DoubleArray,
            Self::Bool(_) => ValueKind::Bool,
            Self::Str(_) => ValueKind::Str,
            Self::ComplexArray(_) => ValueKind::ComplexArray,
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<RealBuffer> for ParamValue {
    fn from(v: RealBuffer) -> Self {
        Self::DoubleArray(v)
    }
}

impl From<ComplexBuffer> for ParamValue {
    fn from(v: ComplexBuffer) -> Self {
        Self::ComplexArray(v)
    }
}
