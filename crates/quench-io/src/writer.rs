//! Step-indexed data file output.

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use quench_core::{format_real, sort_vortices, Complex64, VortexRecord};
use quench_grid::param_file::write_params;
use quench_grid::Grid;
use tracing::{debug, info};

use crate::error::IoError;

/// File name of the parameter dump.
pub const PARAMS_FILE: &str = "Params.dat";

/// Header line of a vortex file.
pub const VORTEX_HEADER: &str = "#X,Xd,Y,Yd,WINDING";

/// Real-valued lattice quantities with a fixed output name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Scalar potential.
    V,
    /// Kinetic operator.
    K,
    /// Edge-detection field.
    Edges,
    /// Vector potential, x component.
    Ax,
    /// Vector potential, y component.
    Ay,
    /// Vector potential, z component.
    Az,
    /// Position coordinates along x.
    X,
    /// Position coordinates along y.
    Y,
    /// Position coordinates along z.
    Z,
}

impl Quantity {
    /// Base file name.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::V => "V",
            Self::K => "K",
            Self::Edges => "Edges",
            Self::Ax => "Ax",
            Self::Ay => "Ay",
            Self::Az => "Az",
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

/// Writes data files into one output directory.
///
/// Each call writes its files independently and flushes them before
/// returning.
#[derive(Clone, Debug)]
pub struct DataWriter {
    dir: PathBuf,
}

impl DataWriter {
    /// Writer for `dir`, creating it if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, IoError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| IoError::io(&dir, e))?;
        Ok(Self { dir })
    }

    /// Writer for the grid's `data_dir`.
    pub fn from_grid(grid: &Grid) -> Result<Self, IoError> {
        Self::new(grid.sval("data_dir")?)
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of `{name}_{step}` in the output directory.
    pub fn step_path(&self, name: &str, step: u64) -> PathBuf {
        self.dir.join(format!("{name}_{step}"))
    }

    fn write_file<F>(&self, path: &Path, body: F) -> Result<(), IoError>
    where
        F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
    {
        let file = File::create(path).map_err(|e| IoError::io(path, e))?;
        let mut out = BufWriter::new(file);
        body(&mut out)
            .and_then(|()| out.flush())
            .map_err(|e| IoError::io(path, e))?;
        debug!(path = %path.display(), "data file written");
        Ok(())
    }

    fn write_lines<T: Display>(
        &self,
        name: &str,
        values: impl IntoIterator<Item = T>,
        step: u64,
    ) -> Result<PathBuf, IoError> {
        let path = self.step_path(name, step);
        self.write_file(&path, |out| {
            for v in values {
                writeln!(out, "{v}")?;
            }
            Ok(())
        })?;
        Ok(path)
    }

    // ── Arrays ─────────────────────────────────────────────────────

    /// Write a complex array as `{name}_{step}` and `{name}i_{step}`.
    /// Returns both paths.
    pub fn write_complex(
        &self,
        name: &str,
        data: &[Complex64],
        step: u64,
    ) -> Result<(PathBuf, PathBuf), IoError> {
        let re = self.write_lines(name, data.iter().map(|c| format_real(c.re)), step)?;
        let im = self.write_lines(
            &format!("{name}i"),
            data.iter().map(|c| format_real(c.im)),
            step,
        )?;
        Ok((re, im))
    }

    /// Write a real array.
    pub fn write_real(&self, name: &str, data: &[f64], step: u64) -> Result<PathBuf, IoError> {
        self.write_lines(name, data.iter().map(|v| format_real(*v)), step)
    }

    /// Write an integer array.
    pub fn write_int(&self, name: &str, data: &[i32], step: u64) -> Result<PathBuf, IoError> {
        self.write_lines(name, data, step)
    }

    /// Write a flag array as `0`/`1`.
    pub fn write_bool(&self, name: &str, data: &[bool], step: u64) -> Result<PathBuf, IoError> {
        self.write_lines(name, data.iter().map(|b| u8::from(*b)), step)
    }

    /// Write integer pairs as `a,b`.
    pub fn write_int2(
        &self,
        name: &str,
        data: &[(i32, i32)],
        step: u64,
    ) -> Result<PathBuf, IoError> {
        self.write_lines(name, data.iter().map(|(a, b)| format!("{a},{b}")), step)
    }

    // ── Named quantities ───────────────────────────────────────────

    /// Write the wavefunction as `wfc_{step}` and `wfci_{step}`.
    pub fn write_wfc(&self, data: &[Complex64], step: u64) -> Result<(PathBuf, PathBuf), IoError> {
        self.write_complex("wfc", data, step)
    }

    /// Write a real lattice quantity under its fixed name.
    pub fn write_quantity(
        &self,
        quantity: Quantity,
        data: &[f64],
        step: u64,
    ) -> Result<PathBuf, IoError> {
        self.write_real(quantity.file_name(), data, step)
    }

    /// Write the grid's position coordinates as `x_0`, `y_0` and `z_0`.
    pub fn write_coords(&self, grid: &Grid) -> Result<(), IoError> {
        let c = grid.coords();
        self.write_quantity(Quantity::X, &c.x, 0)?;
        self.write_quantity(Quantity::Y, &c.y, 0)?;
        self.write_quantity(Quantity::Z, &c.z, 0)?;
        Ok(())
    }

    /// Write every scalar parameter of `grid` to `Params.dat`.
    pub fn write_params(&self, grid: &Grid) -> Result<PathBuf, IoError> {
        let path = self.dir.join(PARAMS_FILE);
        self.write_file(&path, |out| write_params(grid, out))?;
        info!(path = %path.display(), entries = grid.len(), "parameters written");
        Ok(path)
    }

    // ── Graph and vortex output ────────────────────────────────────

    /// Write a `dim × dim` integer adjacency matrix in Mathematica list
    /// form, preceded by a comment line listing the vertex uids.
    pub fn write_adj_mat_int(
        &self,
        name: &str,
        mat: &[i32],
        uids: &[u32],
        dim: usize,
        step: u64,
    ) -> Result<PathBuf, IoError> {
        self.write_adj_mat(name, mat, uids, dim, step)
    }

    /// Write a `dim × dim` real adjacency matrix.
    pub fn write_adj_mat_real(
        &self,
        name: &str,
        mat: &[f64],
        uids: &[u32],
        dim: usize,
        step: u64,
    ) -> Result<PathBuf, IoError> {
        let text: Vec<String> = mat.iter().map(|v| format_real(*v)).collect();
        self.write_adj_mat(name, &text, uids, dim, step)
    }

    fn write_adj_mat<T: Display>(
        &self,
        name: &str,
        mat: &[T],
        uids: &[u32],
        dim: usize,
        step: u64,
    ) -> Result<PathBuf, IoError> {
        let path = self.step_path(name, step);
        if mat.len() != dim * dim {
            return Err(IoError::LengthMismatch {
                path,
                expected: dim * dim,
                actual: mat.len(),
            });
        }
        self.write_file(&path, |out| {
            let ids: Vec<String> = uids.iter().map(u32::to_string).collect();
            writeln!(out, "(*{}*)", ids.join(","))?;
            writeln!(out, "{{")?;
            for row in 0..dim {
                let cells: Vec<String> = mat[row * dim..(row + 1) * dim]
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                let sep = if row + 1 < dim { "," } else { "" };
                writeln!(out, "{{{}}}{sep}", cells.join(","))?;
            }
            writeln!(out, "}}")
        })?;
        Ok(path)
    }

    /// Write vortex records, sorted, under the `#X,Xd,Y,Yd,WINDING`
    /// header.
    pub fn write_vortices(
        &self,
        name: &str,
        vortices: &[VortexRecord],
        step: u64,
    ) -> Result<PathBuf, IoError> {
        let mut sorted = vortices.to_vec();
        sort_vortices(&mut sorted);
        let path = self.step_path(name, step);
        self.write_file(&path, |out| {
            writeln!(out, "{VORTEX_HEADER}")?;
            for v in &sorted {
                writeln!(
                    out,
                    "{},{},{},{},{}",
                    v.coords.0,
                    format_real(v.coords_continuous.0),
                    v.coords.1,
                    format_real(v.coords_continuous.1),
                    v.winding
                )?;
            }
            Ok(())
        })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn writer() -> (TempDir, DataWriter) {
        let dir = tempfile::tempdir().unwrap();
        let w = DataWriter::new(dir.path().join("out")).unwrap();
        (dir, w)
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn complex_split_into_two_files() {
        let (_dir, w) = writer();
        let data = [Complex64::new(1.5, -2.0), Complex64::new(0.0, 1e-7)];
        let (re, im) = w.write_complex("wfc", &data, 3).unwrap();
        assert_eq!(re.file_name().unwrap(), "wfc_3");
        assert_eq!(im.file_name().unwrap(), "wfci_3");
        assert_eq!(read(&re), "1.5\n0\n");
        assert_eq!(read(&im), "-2\n1e-7\n");
    }

    #[test]
    fn scalar_array_formats() {
        let (_dir, w) = writer();
        assert_eq!(read(&w.write_int("charge", &[1, -1], 0).unwrap()), "1\n-1\n");
        assert_eq!(read(&w.write_bool("mask", &[true, false], 0).unwrap()), "1\n0\n");
        assert_eq!(
            read(&w.write_int2("pos", &[(3, 4), (-1, 0)], 0).unwrap()),
            "3,4\n-1,0\n"
        );
    }

    #[test]
    fn quantities_use_fixed_names() {
        let (_dir, w) = writer();
        let p = w.write_quantity(Quantity::Edges, &[0.25], 10).unwrap();
        assert_eq!(p.file_name().unwrap(), "Edges_10");
        let p = w.write_quantity(Quantity::X, &[0.25], 0).unwrap();
        assert_eq!(p.file_name().unwrap(), "x_0");
    }

    #[test]
    fn adjacency_matrix_layout() {
        let (_dir, w) = writer();
        let p = w
            .write_adj_mat_int("graph", &[0, 1, 1, 0], &[7, 9], 2, 5)
            .unwrap();
        assert_eq!(read(&p), "(*7,9*)\n{\n{0,1},\n{1,0}\n}\n");
    }

    #[test]
    fn adjacency_matrix_checks_size() {
        let (_dir, w) = writer();
        let err = w.write_adj_mat_real("graph", &[0.0; 3], &[1, 2], 2, 0).unwrap_err();
        assert!(matches!(err, IoError::LengthMismatch { expected: 4, actual: 3, .. }));
    }

    #[test]
    fn vortices_sorted_under_header() {
        let (_dir, w) = writer();
        let vortices = [
            VortexRecord::new((5, 2), (5.25, 2.5), -1),
            VortexRecord::new((1, 3), (1.5, 3.0), 1),
        ];
        let text = read(&w.write_vortices("vort", &vortices, 0).unwrap());
        let expected = {
            let mut sorted = vortices.to_vec();
            sort_vortices(&mut sorted);
            let mut s = format!("{VORTEX_HEADER}\n");
            for v in sorted {
                s.push_str(&format!(
                    "{},{},{},{},{}\n",
                    v.coords.0,
                    format_real(v.coords_continuous.0),
                    v.coords.1,
                    format_real(v.coords_continuous.1),
                    v.winding
                ));
            }
            s
        };
        assert_eq!(text, expected);
        assert!(text.starts_with("#X,Xd,Y,Yd,WINDING\n"));
    }

    #[test]
    fn unwritable_directory_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        let err = DataWriter::new(blocker.join("sub")).unwrap_err();
        assert!(matches!(err, IoError::Io { .. }));
    }
}
