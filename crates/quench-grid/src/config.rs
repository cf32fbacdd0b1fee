//! Grid configuration, validation, and store construction.
//!
//! [`GridConfig`] is the builder input for a simulation's state store.
//! [`validate()`](GridConfig::validate) checks structural invariants;
//! [`build()`](GridConfig::build) validates and then produces a [`Grid`]
//! with every derived parameter stored under its conventional key.

use std::error::Error;
use std::f64::consts::PI;
use std::fmt;

use quench_core::{Extents, HBAR};
use tracing::info;

use crate::coords::{momentum_spacing, spacing, Coordinates};
use crate::selection::OperatorSelection;
use crate::store::Grid;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`GridConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `dimensions` is not 2 or 3, or a planar grid has `z_dim != 1`.
    InvalidDimensions {
        /// The configured dimensionality.
        dimensions: u32,
        /// The configured z extent.
        z_dim: usize,
    },
    /// An axis has zero points.
    ZeroExtent {
        /// Which axis.
        axis: &'static str,
    },
    /// An axis with more than one point has an odd point count.
    OddExtent {
        /// Which axis.
        axis: &'static str,
        /// The configured extent.
        value: usize,
    },
    /// A box half-width is NaN, infinite, zero, or negative.
    InvalidLength {
        /// Which parameter.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// The particle mass is NaN, infinite, zero, or negative.
    InvalidMass {
        /// The invalid value.
        value: f64,
    },
    /// A physical parameter is NaN or infinite.
    NonFinite {
        /// Which parameter.
        name: &'static str,
    },
    /// An operator-selection name is empty.
    EmptySelection {
        /// Which selection.
        family: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { dimensions, z_dim } => {
                write!(
                    f,
                    "invalid dimensionality {dimensions} with z_dim {z_dim} \
                     (expected 2 with z_dim 1, or 3)"
                )
            }
            Self::ZeroExtent { axis } => write!(f, "{axis} has zero grid points"),
            Self::OddExtent { axis, value } => {
                write!(f, "{axis} must be even for spectral transforms, got {value}")
            }
            Self::InvalidLength { name, value } => {
                write!(f, "{name} must be finite and positive, got {value}")
            }
            Self::InvalidMass { value } => {
                write!(f, "mass must be finite and positive, got {value}")
            }
            Self::NonFinite { name } => write!(f, "{name} must be finite"),
            Self::EmptySelection { family } => {
                write!(f, "{family} operator selection is empty")
            }
        }
    }
}

impl Error for ConfigError {}

// ── GridConfig ─────────────────────────────────────────────────────

/// Configuration for a simulation's state store.
///
/// Defaults describe a planar 256×256 rubidium-87 condensate in an
/// isotropic harmonic trap, without rotation.
#[derive(Clone, Debug)]
pub struct GridConfig {
    /// 2 or 3.
    pub dimensions: u32,
    /// Points along x. Default: 256.
    pub x_dim: usize,
    /// Points along y. Default: 256.
    pub y_dim: usize,
    /// Points along z. Must be 1 for planar grids.
    pub z_dim: usize,
    /// Box half-width along x, in metres.
    pub x_max: f64,
    /// Box half-width along y, in metres.
    pub y_max: f64,
    /// Box half-width along z, in metres.
    pub z_max: f64,
    /// Rotation rate as a fraction of the trap frequency.
    pub omega: f64,
    /// Trap angular frequency along x.
    pub omega_x: f64,
    /// Trap angular frequency along y.
    pub omega_y: f64,
    /// Trap angular frequency along z.
    pub omega_z: f64,
    /// Trap anisotropy factor applied to y.
    pub gamma_y: f64,
    /// Particle mass, in kg.
    pub mass: f64,
    /// Number of condensed atoms.
    pub atoms: f64,
    /// s-wave scattering length, in metres.
    pub scattering_length: f64,
    /// Trap centre offsets `(x, y, z)`, in metres.
    pub shift: [f64; 3],
    /// Phase winding imprinted by initial-state generators.
    pub winding: f64,
    /// Seed for stochastic initial states.
    pub seed: i64,
    /// Output directory for data files.
    pub data_dir: String,
    /// Active operator names.
    pub selection: OperatorSelection,
}

impl GridConfig {
    /// Default trap frequency: 2π rad/s.
    pub const DEFAULT_OMEGA: f64 = 2.0 * PI;

    /// Mass of a rubidium-87 atom, in kg.
    pub const RB87_MASS: f64 = 1.443_160_7e-25;

    /// A default planar configuration with the given extents.
    pub fn planar(x_dim: usize, y_dim: usize) -> Self {
        Self {
            x_dim,
            y_dim,
            ..Self::default()
        }
    }

    /// A default 3-D configuration with the given extents.
    pub fn volume(x_dim: usize, y_dim: usize, z_dim: usize) -> Self {
        Self {
            dimensions: 3,
            x_dim,
            y_dim,
            z_dim,
            selection: OperatorSelection::for_dimensions(3),
            ..Self::default()
        }
    }

    /// Lattice extents described by this configuration.
    pub fn extents(&self) -> Extents {
        Extents::new_3d(self.x_dim, self.y_dim, self.z_dim)
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let planar_ok = self.dimensions == 2 && self.z_dim == 1;
        if !(planar_ok || self.dimensions == 3) {
            return Err(ConfigError::InvalidDimensions {
                dimensions: self.dimensions,
                z_dim: self.z_dim,
            });
        }
        for (axis, value) in [
            ("x_dim", self.x_dim),
            ("y_dim", self.y_dim),
            ("z_dim", self.z_dim),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroExtent { axis });
            }
            if value > 1 && value % 2 != 0 {
                return Err(ConfigError::OddExtent { axis, value });
            }
        }
        for (name, value) in [
            ("x_max", self.x_max),
            ("y_max", self.y_max),
            ("z_max", self.z_max),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidLength { name, value });
            }
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(ConfigError::InvalidMass { value: self.mass });
        }
        for (name, value) in [
            ("omega", self.omega),
            ("omega_x", self.omega_x),
            ("omega_y", self.omega_y),
            ("omega_z", self.omega_z),
            ("gamma_y", self.gamma_y),
            ("atoms", self.atoms),
            ("scattering_length", self.scattering_length),
            ("winding", self.winding),
            ("shift", self.shift[0]),
            ("shift", self.shift[1]),
            ("shift", self.shift[2]),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name });
            }
        }
        for (family, name) in [
            ("kinetic", &self.selection.kinetic),
            ("potential", &self.selection.potential),
            ("vector potential", &self.selection.vector_potential),
            ("wavefunction", &self.selection.wavefunction),
        ] {
            if name.is_empty() {
                return Err(ConfigError::EmptySelection { family });
            }
        }
        Ok(())
    }

    /// Validate and build the populated state store.
    ///
    /// Stores the extents (`xDim`, `yDim`, `zDim`, `dimnum`, `gSize`), box
    /// geometry (`xMax`, `dx`, `dpx`, …), trap and condensate parameters,
    /// oscillator lengths (`a0x`, `a0y`, `a0z`), the Thomas–Fermi scale
    /// `Rxy`, the interaction constant `gDenConst`, and `data_dir`; then
    /// generates the coordinate arrays and records the selection.
    pub fn build(&self) -> Result<Grid, ConfigError> {
        self.validate()?;
        let extents = self.extents();
        let mut grid = Grid::new();

        grid.store_int("dimnum", i64::from(self.dimensions));
        grid.store_int("xDim", self.x_dim as i64);
        grid.store_int("yDim", self.y_dim as i64);
        grid.store_int("zDim", self.z_dim as i64);
        grid.store_int("gSize", extents.len() as i64);
        grid.store_int("seed", self.seed);

        let maxes = [self.x_max, self.y_max, self.z_max];
        for (axis, (&n, &max)) in ["x", "y", "z"]
            .iter()
            .zip([self.x_dim, self.y_dim, self.z_dim].iter().zip(maxes.iter()))
        {
            grid.store_double(&format!("{axis}Max"), max);
            grid.store_double(&format!("d{axis}"), spacing(n, max));
            grid.store_double(&format!("dp{axis}"), momentum_spacing(max));
        }

        grid.store_double("omega", self.omega);
        grid.store_double("omegaX", self.omega_x);
        grid.store_double("omegaY", self.omega_y);
        grid.store_double("omegaZ", self.omega_z);
        grid.store_double("gammaY", self.gamma_y);
        grid.store_double("mass", self.mass);
        grid.store_double("atoms", self.atoms);
        grid.store_double("a_s", self.scattering_length);
        grid.store_double("x0_shift", self.shift[0]);
        grid.store_double("y0_shift", self.shift[1]);
        grid.store_double("z0_shift", self.shift[2]);
        grid.store_double("winding", self.winding);

        let a0 = |omega: f64| (HBAR / (self.mass * omega.abs().max(f64::MIN_POSITIVE))).sqrt();
        grid.store_double("a0x", a0(self.omega_x));
        grid.store_double("a0y", a0(self.omega_y));
        grid.store_double("a0z", a0(self.omega_z));

        let rxy = (15.0
            * self.atoms
            * self.scattering_length
            * (self.mass * self.omega_z / HBAR).abs().sqrt())
        .abs()
        .powf(0.2);
        grid.store_double("Rxy", rxy);
        grid.store_double(
            "gDenConst",
            4.0 * PI * HBAR * HBAR * self.scattering_length * self.atoms / self.mass,
        );

        grid.store_string("data_dir", self.data_dir.as_str());
        grid.set_coords(Coordinates::generate(extents, maxes));
        grid.set_selection(self.selection.clone());

        info!(
            extents = %extents,
            dimensions = self.dimensions,
            kinetic = %self.selection.kinetic,
            potential = %self.selection.potential,
            "grid built"
        );
        Ok(grid)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            dimensions: 2,
            x_dim: 256,
            y_dim: 256,
            z_dim: 1,
            x_max: 1e-4,
            y_max: 1e-4,
            z_max: 1e-4,
            omega: 0.0,
            omega_x: Self::DEFAULT_OMEGA,
            omega_y: Self::DEFAULT_OMEGA,
            omega_z: Self::DEFAULT_OMEGA,
            gamma_y: 1.0,
            mass: Self::RB87_MASS,
            atoms: 1e5,
            scattering_length: 4.76e-9,
            shift: [0.0; 3],
            winding: 0.0,
            seed: 0,
            data_dir: "data".to_string(),
            selection: OperatorSelection::default(),
        }
    }
}
