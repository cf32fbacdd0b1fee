//! Parameter-file writer.
//!
//! The format is line-oriented and INI-like:
//!
//! ```text
//! [int]
//! xDim = 256
//! [double]
//! dx = 0.1
//! [bool]
//! [string]
//! data_dir = data
//! Kfn = rotation_K
//! ```
//!
//! Sections appear in the order `int`, `double`, `bool`, `string`, always
//! present even when empty. Keys within a section keep insertion order.
//! The operator selection is appended to `[string]` as `Kfn`, `Vfn`,
//! `Afn` and `Wfcfn`. String values are written through [`escape_text`],
//! so newlines, backslashes and edge spaces survive a re-read. Array
//! handles are not written.

use std::io::{self, Write};

use quench_core::{escape_text, format_real, ParamValue, ValueKind};

use crate::store::Grid;

/// Sections written to the parameter file, in order.
pub const SECTIONS: [ValueKind; 4] = [
    ValueKind::Int,
    ValueKind::Double,
    ValueKind::Bool,
    ValueKind::Str,
];

/// Write every scalar entry of `grid` to `out`.
pub fn write_params(grid: &Grid, out: &mut dyn Write) -> io::Result<()> {
    for kind in SECTIONS {
        writeln!(out, "[{}]", kind.label())?;
        for (key, value) in grid.entries_of(kind) {
            match value {
                ParamValue::Int(v) => writeln!(out, "{key} = {v}")?,
                ParamValue::Double(v) => writeln!(out, "{key} = {}", format_real(*v))?,
                ParamValue::Bool(v) => writeln!(out, "{key} = {v}")?,
                ParamValue::Str(v) => writeln!(out, "{key} = {}", escape_text(v))?,
                ParamValue::DoubleArray(_) | ParamValue::ComplexArray(_) => {}
            }
        }
        if kind == ValueKind::Str {
            for (key, name) in grid.selection().entries() {
                // An explicit string entry with the same key wins.
                if !grid.contains(key) {
                    writeln!(out, "{key} = {}", escape_text(name))?;
                }
            }
        }
    }
    Ok(())
}

/// Render the parameter file into a `String`.
pub fn render_params(grid: &Grid) -> io::Result<String> {
    let mut buf = Vec::new();
    write_params(grid, &mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
