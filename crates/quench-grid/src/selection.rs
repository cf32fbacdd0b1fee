//! Names of the operators selected for a simulation run.

/// The active function name for each operator family.
///
/// The vector-potential name is shared by the position-space components
/// (`Ax`, `Ay`, `Az`) and their momentum-space counterparts (`pAx`, `pAy`,
/// `pAz`); a selection of `"rotation"` resolves all six from their
/// respective families.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperatorSelection {
    /// Kinetic-energy operator name.
    pub kinetic: String,
    /// Scalar potential name.
    pub potential: String,
    /// Vector-potential name, shared across components.
    pub vector_potential: String,
    /// Initial-wavefunction generator name.
    pub wavefunction: String,
}

impl OperatorSelection {
    /// Parameter-file keys for the four selections, in output order.
    pub const KEYS: [&'static str; 4] = ["Kfn", "Vfn", "Afn", "Wfcfn"];

    /// The default selection for a grid of the given dimensionality.
    pub fn for_dimensions(dimensions: u32) -> Self {
        if dimensions == 3 {
            Self {
                kinetic: "rotation_K3d".to_string(),
                potential: "harmonic_V3d".to_string(),
                vector_potential: "rotation".to_string(),
                wavefunction: "3d".to_string(),
            }
        } else {
            Self {
                kinetic: "rotation_K".to_string(),
                potential: "harmonic_V".to_string(),
                vector_potential: "rotation".to_string(),
                wavefunction: "2d".to_string(),
            }
        }
    }

    /// `(key, name)` pairs in parameter-file order.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            (Self::KEYS[0], self.kinetic.as_str()),
            (Self::KEYS[1], self.potential.as_str()),
            (Self::KEYS[2], self.vector_potential.as_str()),
            (Self::KEYS[3], self.wavefunction.as_str()),
        ]
    }
}

impl Default for OperatorSelection {
    fn default() -> Self {
        Self::for_dimensions(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_dimensionality() {
        assert_eq!(OperatorSelection::default().kinetic, "rotation_K");
        assert_eq!(OperatorSelection::for_dimensions(3).potential, "harmonic_V3d");
    }

    #[test]
    fn entries_follow_key_order() {
        let sel = OperatorSelection::default();
        let keys: Vec<_> = sel.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, OperatorSelection::KEYS);
    }
}
