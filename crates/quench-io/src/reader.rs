//! Reading data files back into memory.

use std::fs;
use std::path::Path;

use quench_core::Complex64;

use crate::error::IoError;

/// Read `len` real values, one per line. Blank lines are ignored.
pub fn read_real(path: impl AsRef<Path>, len: usize) -> Result<Vec<f64>, IoError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| IoError::io(path, e))?;
    let mut values = Vec::with_capacity(len);
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let v = line
            .parse::<f64>()
            .map_err(|e| IoError::parse(path, n + 1, format!("'{line}': {e}")))?;
        values.push(v);
    }
    if values.len() != len {
        return Err(IoError::LengthMismatch {
            path: path.to_path_buf(),
            expected: len,
            actual: values.len(),
        });
    }
    Ok(values)
}

/// Read a complex array from its real-part and imaginary-part files.
pub fn read_complex(
    file_r: impl AsRef<Path>,
    file_i: impl AsRef<Path>,
    len: usize,
) -> Result<Vec<Complex64>, IoError> {
    let re = read_real(file_r, len)?;
    let im = read_real(file_i, len)?;
    Ok(re
        .into_iter()
        .zip(im)
        .map(|(re, im)| Complex64::new(re, im))
        .collect())
}
