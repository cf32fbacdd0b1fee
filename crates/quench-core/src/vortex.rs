//! Detected vortex records.

use std::cmp::Ordering;

/// A single detected vortex: its lattice position, the sub-grid position
/// refined by interpolation, and the signed winding number of the phase
/// around the core.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VortexRecord {
    /// Integer lattice coordinate `(x, y)`.
    pub coords: (i32, i32),
    /// Interpolated continuous coordinate `(x, y)`.
    pub coords_continuous: (f64, f64),
    /// Signed winding number.
    pub winding: i32,
}

impl VortexRecord {
    /// Create a record.
    pub fn new(coords: (i32, i32), coords_continuous: (f64, f64), winding: i32) -> Self {
        Self {
            coords,
            coords_continuous,
            winding,
        }
    }

    /// Ordering by lattice coordinate, then winding, then continuous
    /// coordinate (total order via `f64::total_cmp`).
    pub fn cmp_lattice(&self, other: &Self) -> Ordering {
        self.coords
            .cmp(&other.coords)
            .then(self.winding.cmp(&other.winding))
            .then(self.coords_continuous.0.total_cmp(&other.coords_continuous.0))
            .then(self.coords_continuous.1.total_cmp(&other.coords_continuous.1))
    }
}

/// Sort records into the canonical output order, so that serialising the
/// same detection results always produces the same file.
pub fn sort_vortices(records: &mut [VortexRecord]) {
    records.sort_by(VortexRecord::cmp_lattice);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_is_independent_of_input_order() {
        let a = VortexRecord::new((3, 1), (3.2, 1.1), 1);
        let b = VortexRecord::new((1, 5), (1.4, 5.0), -1);
        let c = VortexRecord::new((1, 2), (0.9, 2.3), 1);

        let mut first = vec![a, b, c];
        let mut second = vec![c, a, b];
        sort_vortices(&mut first);
        sort_vortices(&mut second);
        assert_eq!(first, second);
        assert_eq!(first[0], c);
        assert_eq!(first[2], a);
    }

    #[test]
    fn ties_break_on_winding() {
        let pos = VortexRecord::new((2, 2), (2.0, 2.0), 1);
        let neg = VortexRecord::new((2, 2), (2.0, 2.0), -1);
        let mut v = vec![pos, neg];
        sort_vortices(&mut v);
        assert_eq!(v[0].winding, -1);
    }
}
