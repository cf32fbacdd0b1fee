//! Kernel launch geometry.

use std::fmt;

use quench_core::Extents;

/// A three-component launch dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dim3 {
    /// X component.
    pub x: u32,
    /// Y component.
    pub y: u32,
    /// Z component.
    pub z: u32,
}

impl Dim3 {
    /// Construct from components.
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Product of the components.
    pub fn volume(&self) -> u64 {
        u64::from(self.x) * u64::from(self.y) * u64::from(self.z)
    }
}

impl Default for Dim3 {
    fn default() -> Self {
        Self::new(1, 1, 1)
    }
}

impl fmt::Display for Dim3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Block grid and per-block thread counts for a kernel launch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LaunchConfig {
    /// Number of blocks along each axis.
    pub grid: Dim3,
    /// Threads per block along each axis.
    pub threads: Dim3,
}

impl LaunchConfig {
    /// One thread per lattice point: blocks of `threads_per_block` along
    /// x (rounded up), one block row per y and z index.
    ///
    /// `threads_per_block` is clamped to `1..=extents.x`.
    pub fn cover(extents: Extents, threads_per_block: u32) -> Self {
        let x = to_u32(extents.x).max(1);
        let threads = threads_per_block.clamp(1, x);
        Self {
            grid: Dim3::new(x.div_ceil(threads), to_u32(extents.y), to_u32(extents.z)),
            threads: Dim3::new(threads, 1, 1),
        }
    }

    /// Total threads launched.
    pub fn total_threads(&self) -> u64 {
        self.grid.volume() * self.threads.volume()
    }
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn exact_cover() {
        let cfg = LaunchConfig::cover(Extents::new_2d(256, 128), 128);
        assert_eq!(cfg.grid, Dim3::new(2, 128, 1));
        assert_eq!(cfg.threads, Dim3::new(128, 1, 1));
    }

    #[test]
    fn rounds_up_along_x() {
        let cfg = LaunchConfig::cover(Extents::new_3d(100, 4, 2), 32);
        assert_eq!(cfg.grid, Dim3::new(4, 4, 2));
    }

    #[test]
    fn threads_clamped_to_extent() {
        let cfg = LaunchConfig::cover(Extents::new_2d(8, 8), 512);
        assert_eq!(cfg.threads.x, 8);
        assert_eq!(cfg.grid.x, 1);

        let cfg = LaunchConfig::cover(Extents::new_2d(8, 8), 0);
        assert_eq!(cfg.threads.x, 1);
        assert_eq!(cfg.grid.x, 8);
    }

    proptest! {
        #[test]
        fn cover_reaches_every_point(
            x in 1usize..300,
            y in 1usize..8,
            z in 1usize..4,
            tpb in 1u32..256,
        ) {
            let e = Extents::new_3d(x, y, z);
            let cfg = LaunchConfig::cover(e, tpb);
            prop_assert!(cfg.total_threads() >= e.len() as u64);
            let per_row = u64::from(cfg.grid.x) * u64::from(cfg.threads.x);
            prop_assert!(per_row - (x as u64) < u64::from(cfg.threads.x));
        }
    }
}
