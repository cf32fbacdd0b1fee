//! Re-reading parameter files.
//!
//! Parses the `[int]` / `[double]` / `[bool]` / `[string]` format written
//! by [`Grid::write`] and [`DataWriter::write_params`](crate::DataWriter::write_params).

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use quench_core::unescape_text;
use quench_grid::{Grid, OperatorSelection};

use crate::error::IoError;

/// Typed contents of a parameter file, in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamFile {
    /// `[int]` entries.
    pub ints: IndexMap<String, i64>,
    /// `[double]` entries.
    pub doubles: IndexMap<String, f64>,
    /// `[bool]` entries.
    pub bools: IndexMap<String, bool>,
    /// `[string]` entries.
    pub strings: IndexMap<String, String>,
}

#[derive(Clone, Copy)]
enum Section {
    Int,
    Double,
    Bool,
    Str,
}

impl ParamFile {
    /// Read and parse the file at `path`.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| IoError::io(path, e))?;
        Self::parse(&text, path)
    }

    /// Parse `text`; `path` is only used in error reports.
    ///
    /// Blank lines and lines starting with `#` are skipped. Keys appearing
    /// twice keep the last value. `[string]` values are unescaped with
    /// [`unescape_text`].
    pub fn parse(text: &str, path: impl AsRef<Path>) -> Result<Self, IoError> {
        let path = path.as_ref();
        let mut out = Self::default();
        let mut section = None;
        for (n, raw) in text.lines().enumerate() {
            let line_no = n + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                section = Some(match name {
                    "int" => Section::Int,
                    "double" => Section::Double,
                    "bool" => Section::Bool,
                    "string" => Section::Str,
                    other => {
                        return Err(IoError::parse(
                            path,
                            line_no,
                            format!("unknown section '{other}'"),
                        ))
                    }
                });
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(IoError::parse(path, line_no, "expected 'key = value'"));
            };
            let (key, value) = (key.trim().to_string(), value.trim());
            let bad =
                |what: &str| IoError::parse(path, line_no, format!("'{value}' is not {what}"));
            match section {
                None => {
                    return Err(IoError::parse(path, line_no, "entry before any section"));
                }
                Some(Section::Int) => {
                    let v = value.parse().map_err(|_| bad("an integer"))?;
                    out.ints.insert(key, v);
                }
                Some(Section::Double) => {
                    let v = value.parse().map_err(|_| bad("a real number"))?;
                    out.doubles.insert(key, v);
                }
                Some(Section::Bool) => {
                    let v = value.parse().map_err(|_| bad("a boolean"))?;
                    out.bools.insert(key, v);
                }
                Some(Section::Str) => {
                    let v = unescape_text(value).ok_or_else(|| {
                        IoError::parse(path, line_no, format!("invalid escape in '{value}'"))
                    })?;
                    out.strings.insert(key, v);
                }
            }
        }
        Ok(out)
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.ints.len() + self.doubles.len() + self.bools.len() + self.strings.len()
    }

    /// Whether the file held no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store every entry into `grid`. The selection keys (`Kfn`, `Vfn`,
    /// `Afn`, `Wfcfn`) update the grid's operator selection instead of
    /// becoming string entries.
    pub fn apply(&self, grid: &mut Grid) {
        for (k, v) in &self.ints {
            grid.store_int(k, *v);
        }
        for (k, v) in &self.doubles {
            grid.store_double(k, *v);
        }
        for (k, v) in &self.bools {
            grid.store_bool(k, *v);
        }
        let [kfn, vfn, afn, wfcfn] = OperatorSelection::KEYS;
        for (k, v) in &self.strings {
            let slot = if k == kfn {
                &mut grid.selection_mut().kinetic
            } else if k == vfn {
                &mut grid.selection_mut().potential
            } else if k == afn {
                &mut grid.selection_mut().vector_potential
            } else if k == wfcfn {
                &mut grid.selection_mut().wavefunction
            } else {
                grid.store_string(k, v.as_str());
                continue;
            };
            slot.clone_from(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
[int]
xDim = 256
[double]
dx = 0.1
[bool]
gpe = true
[string]
data_dir = data
Kfn = rotation_K
";

    #[test]
    fn parses_typed_sections() {
        let p = ParamFile::parse(SAMPLE, "params.ini").unwrap();
        assert_eq!(p.ints["xDim"], 256);
        assert_eq!(p.doubles["dx"], 0.1);
        assert!(p.bools["gpe"]);
        assert_eq!(p.strings["data_dir"], "data");
        assert_eq!(p.len(), 5);
    }

    #[test]
    fn rejects_entry_before_section() {
        let err = ParamFile::parse("xDim = 4\n", "p").unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 1, .. }));
    }

    #[test]
    fn rejects_unknown_section_and_bad_values() {
        assert!(ParamFile::parse("[float]\n", "p").is_err());
        let err = ParamFile::parse("[int]\nxDim = 2.5\n", "p").unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 2, .. }));
        assert!(ParamFile::parse("[bool]\nflag = yes\n", "p").is_err());
        assert!(ParamFile::parse("[int]\nnoequals\n", "p").is_err());
    }

    #[test]
    fn escaped_strings_are_restored() {
        let p = ParamFile::parse(
            "[string]\ntitle = line one\\nline two\nlabel = \\s\\spadded\\s\\s\n",
            "p",
        )
        .unwrap();
        assert_eq!(p.strings["title"], "line one\nline two");
        assert_eq!(p.strings["label"], "  padded  ");

        let err = ParamFile::parse("[string]\npath = C:\\qux\n", "p").unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 2, .. }));
    }

    #[test]
    fn apply_routes_selection_keys() {
        let p = ParamFile::parse(
            "[string]\nKfn = rotation_K3d\nWfcfn = noise\nlabel = run1\n",
            "p",
        )
        .unwrap();
        let mut grid = Grid::new();
        p.apply(&mut grid);
        assert_eq!(grid.selection().kinetic, "rotation_K3d");
        assert_eq!(grid.selection().wavefunction, "noise");
        assert_eq!(grid.sval("label").unwrap(), "run1");
        assert!(!grid.contains("Kfn"));
    }
}
