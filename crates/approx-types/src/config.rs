// ─────────────────────────────────────────────────────────────────────
// SCPN Approx Core — Run Configuration
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

//! JSON-backed configuration for approximation runs.
//!
//! A single `ApproxConfig` drives every pipeline: the interval and
//! subdivision count feed the sampler, the optional `spline` section
//! selects boundary conditions for cubic-spline fits and the optional
//! `solver` section parameterises the fixed-point root finder. Missing
//! sections fall back to defaults so the same file format serves all
//! three run kinds.

use serde::{Deserialize, Serialize};

use crate::error::{ApproxError, ApproxResult};

// ───────────────────────────── boundary kind ─────────────────────────

/// Which pair of closing equations a cubic-spline system uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryKind {
    /// Prescribe the second derivative at both interval ends.
    SecondDerivative,
    /// Prescribe the first derivative at both interval ends.
    FirstDerivative,
}

// ───────────────────────────── sections ──────────────────────────────

/// Closed sampling interval `[lower, upper]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
}

/// Boundary-condition settings for cubic-spline fits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplineConfig {
    #[serde(default = "default_boundary")]
    pub boundary: BoundaryKind,
    /// Prescribed derivative value at the left interval end.
    #[serde(default)]
    pub left: f64,
    /// Prescribed derivative value at the right interval end.
    #[serde(default)]
    pub right: f64,
    /// When set, estimate end slopes numerically instead of using
    /// `left`/`right`. Only meaningful for first-derivative closure.
    #[serde(default)]
    pub estimate_slopes: bool,
    #[serde(default = "default_slope_step")]
    pub slope_step: f64,
}

/// Settings for the piecewise fixed-point root finder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default = "default_domain_lower")]
    pub domain_lower: f64,
    #[serde(default = "default_domain_upper")]
    pub domain_upper: f64,
    /// Grid step of the bracketing scan that seeds the iteration.
    #[serde(default = "default_scan_step")]
    pub scan_step: f64,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

// ───────────────────────────── defaults ──────────────────────────────

fn default_boundary() -> BoundaryKind {
    BoundaryKind::SecondDerivative
}

fn default_slope_step() -> f64 {
    1e-3
}

fn default_domain_lower() -> f64 {
    -10.0
}

fn default_domain_upper() -> f64 {
    10.0
}

fn default_scan_step() -> f64 {
    0.5
}

fn default_tolerance() -> f64 {
    1e-3
}

fn default_max_iterations() -> usize {
    10_000
}

impl Default for SplineConfig {
    fn default() -> Self {
        Self {
            boundary: default_boundary(),
            left: 0.0,
            right: 0.0,
            estimate_slopes: false,
            slope_step: default_slope_step(),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            domain_lower: default_domain_lower(),
            domain_upper: default_domain_upper(),
            scan_step: default_scan_step(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

// ───────────────────────────── top level ─────────────────────────────

/// Top-level run configuration shared by all pipelines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproxConfig {
    pub run_name: String,
    pub interval: Interval,
    /// Number of sampling subdivisions of the interval.
    pub subdivisions: usize,
    #[serde(default)]
    pub spline: SplineConfig,
    #[serde(default)]
    pub solver: SolverConfig,
}

impl ApproxConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file(path: &str) -> ApproxResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Reject configurations no pipeline could run on.
    pub fn validate(&self) -> ApproxResult<()> {
        if !self.interval.lower.is_finite() || !self.interval.upper.is_finite() {
            return Err(ApproxError::ConfigError(
                "interval bounds must be finite".into(),
            ));
        }
        if self.interval.lower >= self.interval.upper {
            return Err(ApproxError::ConfigError(format!(
                "interval lower bound {} must lie below upper bound {}",
                self.interval.lower, self.interval.upper
            )));
        }
        if self.subdivisions == 0 {
            return Err(ApproxError::ConfigError(
                "subdivisions must be at least 1".into(),
            ));
        }
        if self.solver.scan_step <= 0.0 {
            return Err(ApproxError::ConfigError(
                "solver scan_step must be positive".into(),
            ));
        }
        if self.solver.tolerance <= 0.0 {
            return Err(ApproxError::ConfigError(
                "solver tolerance must be positive".into(),
            ));
        }
        if self.solver.max_iterations == 0 {
            return Err(ApproxError::ConfigError(
                "solver max_iterations must be at least 1".into(),
            ));
        }
        if self.solver.domain_lower >= self.solver.domain_upper {
            return Err(ApproxError::ConfigError(format!(
                "solver domain lower bound {} must lie below upper bound {}",
                self.solver.domain_lower, self.solver.domain_upper
            )));
        }
        if self.spline.slope_step <= 0.0 {
            return Err(ApproxError::ConfigError(
                "spline slope_step must be positive".into(),
            ));
        }
        Ok(())
    }
}
