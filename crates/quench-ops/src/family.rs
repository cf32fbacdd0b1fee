//! Operator families.

use std::fmt;

use quench_core::Axis;

/// The eight operator families, each with its own name table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperatorFamily {
    /// Kinetic energy term.
    Kinetic,
    /// External scalar potential.
    Potential,
    /// Vector potential, x component, position representation.
    Ax,
    /// Vector potential, y component, position representation.
    Ay,
    /// Vector potential, z component, position representation.
    Az,
    /// Vector potential, x component, momentum representation.
    PAx,
    /// Vector potential, y component, momentum representation.
    PAy,
    /// Vector potential, z component, momentum representation.
    PAz,
}

impl OperatorFamily {
    /// All families in table order.
    pub const ALL: [OperatorFamily; 8] = [
        Self::Kinetic,
        Self::Potential,
        Self::Ax,
        Self::Ay,
        Self::Az,
        Self::PAx,
        Self::PAy,
        Self::PAz,
    ];

    /// Table index, `0..8`.
    pub fn index(self) -> usize {
        match self {
            Self::Kinetic => 0,
            Self::Potential => 1,
            Self::Ax => 2,
            Self::Ay => 3,
            Self::Az => 4,
            Self::PAx => 5,
            Self::PAy => 6,
            Self::PAz => 7,
        }
    }

    /// Label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Kinetic => "kinetic",
            Self::Potential => "potential",
            Self::Ax => "Ax",
            Self::Ay => "Ay",
            Self::Az => "Az",
            Self::PAx => "pAx",
            Self::PAy => "pAy",
            Self::PAz => "pAz",
        }
    }

    /// Vector-potential component axis, if this is an A-family.
    pub fn component(self) -> Option<Axis> {
        match self {
            Self::Ax | Self::PAx => Some(Axis::X),
            Self::Ay | Self::PAy => Some(Axis::Y),
            Self::Az | Self::PAz => Some(Axis::Z),
            Self::Kinetic | Self::Potential => None,
        }
    }

    /// Whether this family is in the momentum representation.
    pub fn is_momentum(self) -> bool {
        matches!(self, Self::PAx | Self::PAy | Self::PAz)
    }
}

impl fmt::Display for OperatorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense() {
        for (i, fam) in OperatorFamily::ALL.into_iter().enumerate() {
            assert_eq!(fam.index(), i);
        }
    }

    #[test]
    fn components() {
        assert_eq!(OperatorFamily::PAy.component(), Some(Axis::Y));
        assert_eq!(OperatorFamily::Kinetic.component(), None);
        assert!(OperatorFamily::PAz.is_momentum());
        assert!(!OperatorFamily::Az.is_momentum());
    }
}
