//! Lattice geometry: grid extents, linear ordering, and transform axes.

use std::fmt;

/// Number of lattice points along each axis.
///
/// Linear order is x-fastest: `index = i + x * (j + y * k)`. A 2-D grid
/// has `z == 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extents {
    /// Points along x.
    pub x: usize,
    /// Points along y.
    pub y: usize,
    /// Points along z (1 for 2-D grids).
    pub z: usize,
}

impl Extents {
    /// Extents of a 2-D grid.
    pub fn new_2d(x: usize, y: usize) -> Self {
        Self { x, y, z: 1 }
    }

    /// Extents of a 3-D grid.
    pub fn new_3d(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Total number of lattice points.
    pub fn len(&self) -> usize {
        self.x * self.y * self.z
    }

    /// Whether the lattice has no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 2 for planar grids, 3 otherwise.
    pub fn dimensionality(&self) -> u32 {
        if self.z == 1 {
            2
        } else {
            3
        }
    }

    /// Extent along one axis.
    pub fn along(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Linear index of lattice point `(i, j, k)`.
    #[inline]
    pub fn linear_index(&self, i: usize, j: usize, k: usize) -> usize {
        i + self.x * (j + self.y * k)
    }

    /// Inverse of [`linear_index`](Self::linear_index).
    pub fn lattice_coord(&self, index: usize) -> (usize, usize, usize) {
        let i = index % self.x;
        let j = (index / self.x) % self.y;
        let k = index / (self.x * self.y);
        (i, j, k)
    }
}

impl fmt::Display for Extents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

/// Spatial axis along which a transform is taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// The x axis (index 0).
    X,
    /// The y axis (index 1).
    Y,
    /// The z axis (index 2).
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Numeric axis index.
    pub fn index(&self) -> u8 {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(name)
    }
}

/// An axis index outside `0..=2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidAxis(pub u8);

impl fmt::Display for InvalidAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid axis index {} (expected 0, 1 or 2)", self.0)
    }
}

impl std::error::Error for InvalidAxis {}

impl TryFrom<u8> for Axis {
    type Error = InvalidAxis;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Self::X),
            1 => Ok(Self::Y),
            2 => Ok(Self::Z),
            other => Err(InvalidAxis(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn planar_grid_is_two_dimensional() {
        let e = Extents::new_2d(16, 8);
        assert_eq!(e.len(), 128);
        assert_eq!(e.dimensionality(), 2);
        assert_eq!(Extents::new_3d(4, 4, 4).dimensionality(), 3);
    }

    #[test]
    fn x_is_fastest() {
        let e = Extents::new_3d(4, 3, 2);
        assert_eq!(e.linear_index(1, 0, 0), 1);
        assert_eq!(e.linear_index(0, 1, 0), 4);
        assert_eq!(e.linear_index(0, 0, 1), 12);
    }

    #[test]
    fn axis_from_index() {
        assert_eq!(Axis::try_from(0), Ok(Axis::X));
        assert_eq!(Axis::try_from(2), Ok(Axis::Z));
        assert_eq!(Axis::try_from(3), Err(InvalidAxis(3)));
        for axis in Axis::ALL {
            assert_eq!(Axis::try_from(axis.index()), Ok(axis));
        }
    }

    proptest! {
        #[test]
        fn lattice_coord_inverts_linear_index(
            x in 1usize..16, y in 1usize..16, z in 1usize..8,
            seed in 0usize..10_000,
        ) {
            let e = Extents::new_3d(x, y, z);
            let idx = seed % e.len();
            let (i, j, k) = e.lattice_coord(idx);
            prop_assert_eq!(e.linear_index(i, j, k), idx);
        }
    }
}
