// ─────────────────────────────────────────────────────────────────────
// SCPN Approx Core — Sample Tables
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

//! Tabulated function values `(x, f(x))` on an increasing grid.

use serde::{Deserialize, Serialize};

use crate::error::{ApproxError, ApproxResult};

/// One tabulated point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

/// An ordered table of samples. Every fitting routine consumes one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleTable {
    pub samples: Vec<Sample>,
}

impl SampleTable {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self {
            samples: pairs.iter().map(|&(x, y)| Sample { x, y }).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.samples.push(Sample { x, y });
    }

    /// First and last abscissa, or `None` for an empty table.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => Some((first.x, last.x)),
            _ => None,
        }
    }

    /// A table is usable for fitting when it holds at least two samples
    /// on a strictly increasing grid.
    pub fn validate(&self) -> ApproxResult<()> {
        if self.samples.len() < 2 {
            return Err(ApproxError::InvalidTable(format!(
                "need at least 2 samples, got {}",
                self.samples.len()
            )));
        }
        for pair in self.samples.windows(2) {
            if pair[1].x <= pair[0].x {
                return Err(ApproxError::InvalidTable(format!(
                    "abscissae must be strictly increasing, found {} after {}",
                    pair[1].x, pair[0].x
                )));
            }
        }
        Ok(())
    }
}

impl Default for SampleTable {
    fn default() -> Self {
        Self::new()
    }
}
