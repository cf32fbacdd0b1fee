//! Ready-built grids for tests.

use quench_grid::{Grid, GridConfig};

/// An 8×8 planar grid with default physical parameters.
pub fn small_planar_grid() -> Grid {
    GridConfig::planar(8, 8)
        .build()
        .expect("fixture config is valid")
}

/// An 8×4×4 grid with default physical parameters.
pub fn small_volume_grid() -> Grid {
    GridConfig::volume(8, 4, 4)
        .build()
        .expect("fixture config is valid")
}

/// A planar grid in dimensionless units: unit mass and trap frequency,
/// box half-width 4, uniform rotation `omega`.
pub fn dimensionless_grid(x: usize, y: usize, omega: f64) -> Grid {
    let cfg = GridConfig {
        x_max: 4.0,
        y_max: 4.0,
        z_max: 4.0,
        mass: 1.0,
        omega_x: 1.0,
        omega_y: 1.0,
        omega_z: 1.0,
        omega,
        ..GridConfig::planar(x, y)
    };
    cfg.build().expect("fixture config is valid")
}
