//! The generator capability and lattice evaluation.

use std::fmt;

use quench_core::{Complex64, StoreError};
use quench_grid::Grid;

use crate::registry::Wave;

/// Produces the initial wavefunction value at one lattice point.
///
/// `phase` is a caller-supplied real parameter, usually a phase offset
/// imprinted on the whole state.
pub trait WavefunctionInit: Send + Sync {
    /// Name the generator is registered under.
    fn name(&self) -> &str;

    /// Value at lattice point `(i, j, k)`. Parameters come from
    /// [`Wave::params`].
    fn evaluate(&self, grid: &Grid, wave: &Wave, phase: f64, i: usize, j: usize, k: usize)
        -> Complex64;
}

impl fmt::Debug for dyn WavefunctionInit + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WavefunctionInit({})", self.name())
    }
}

/// Generator backed by a closure.
pub struct FnInit<F> {
    name: String,
    f: F,
}

impl<F> FnInit<F>
where
    F: Fn(&Grid, &Wave, f64, usize, usize, usize) -> Complex64 + Send + Sync,
{
    /// Wrap `f` under `name`.
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> WavefunctionInit for FnInit<F>
where
    F: Fn(&Grid, &Wave, f64, usize, usize, usize) -> Complex64 + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(
        &self,
        grid: &Grid,
        wave: &Wave,
        phase: f64,
        i: usize,
        j: usize,
        k: usize,
    ) -> Complex64 {
        (self.f)(grid, wave, phase, i, j, k)
    }
}

/// Evaluate `init` at every lattice point, x-fastest. Fails if `wave`
/// has no parameters loaded.
pub fn evaluate_on_lattice(
    grid: &Grid,
    wave: &Wave,
    init: &dyn WavefunctionInit,
    phase: f64,
) -> Result<Vec<Complex64>, StoreError> {
    let extents = grid.extents()?;
    wave.params()?;
    let mut out = Vec::with_capacity(extents.len());
    for k in 0..extents.z {
        for j in 0..extents.y {
            for i in 0..extents.x {
                out.push(init.evaluate(grid, wave, phase, i, j, k));
            }
        }
    }
    Ok(out)
}
