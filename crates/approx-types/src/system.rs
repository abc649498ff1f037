// ─────────────────────────────────────────────────────────────────────
// SCPN Approx Core — Linear Systems
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

//! Dense square linear systems `A x = b`.

use ndarray::{Array1, Array2};

/// A square system assembled by the fitting routines and handed to the
/// Gauss solver.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    pub matrix: Array2<f64>,
    pub rhs: Array1<f64>,
}

impl LinearSystem {
    /// An all-zero `m x m` system, filled in row by row by the caller.
    pub fn zeros(m: usize) -> Self {
        Self {
            matrix: Array2::zeros((m, m)),
            rhs: Array1::zeros(m),
        }
    }

    pub fn size(&self) -> usize {
        self.rhs.len()
    }

    /// Matrix shape matches the right-hand side.
    pub fn is_consistent(&self) -> bool {
        let (rows, cols) = self.matrix.dim();
        rows == cols && rows == self.rhs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_builds_consistent_square_system() {
        let system = LinearSystem::zeros(5);
        assert_eq!(system.size(), 5);
        assert!(system.is_consistent());
        assert_eq!(system.matrix.dim(), (5, 5));
        assert!(system.matrix.iter().all(|&v| v == 0.0));
        assert!(system.rhs.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn inconsistent_shapes_are_detected() {
        let system = LinearSystem {
            matrix: Array2::zeros((3, 4)),
            rhs: Array1::zeros(3),
        };
        assert!(!system.is_consistent());

        let system = LinearSystem {
            matrix: Array2::zeros((3, 3)),
            rhs: Array1::zeros(4),
        };
        assert!(!system.is_consistent());
    }
}
