// ─────────────────────────────────────────────────────────────────────
// SCPN Approx Core — Polynomial Approximation Pipeline
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

//! Samples a function, fits the Lagrange interpolant and reports how
//! well the fit tracks the original: peak deviation, a side-by-side
//! comparison table and the composite integral over the interval.

use serde::Serialize;

use approx_math::deviation::{comparison_rows, max_deviation, ComparisonRow, Deviation};
use approx_math::lagrange::build_polynomial;
use approx_math::quadrature::integrate;
use approx_math::sampler::{build_table, NonFinitePolicy};
use approx_types::config::ApproxConfig;
use approx_types::error::ApproxResult;

/// One polynomial-approximation run over a configured interval.
pub struct ApproximationRun {
    pub config: ApproxConfig,
}

/// Everything a run produces, ready for rendering or serialization.
#[derive(Debug, Clone, Serialize)]
pub struct ApproximationReport {
    pub run_name: String,
    /// Fitted coefficients in ascending power order.
    pub polynomial: Vec<f64>,
    pub max_deviation: Deviation,
    pub comparison: Vec<ComparisonRow>,
    pub integral: f64,
}

/// Integral of the same function at one panel count of the scan.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PanelScanPoint {
    pub panels: usize,
    pub integral: f64,
}

impl ApproximationRun {
    pub fn new(config: ApproxConfig) -> Self {
        Self { config }
    }

    pub fn from_file(path: &str) -> ApproxResult<Self> {
        Ok(Self::new(ApproxConfig::from_file(path)?))
    }

    /// Run the full pipeline on `f`.
    pub fn execute<F>(&self, f: F) -> ApproxResult<ApproximationReport>
    where
        F: Fn(f64) -> f64,
    {
        self.config.validate()?;

        let n = self.config.subdivisions;
        let lower = self.config.interval.lower;
        let upper = self.config.interval.upper;

        let table = build_table(n, lower, upper, &f, NonFinitePolicy::Keep);
        let polynomial = build_polynomial(&table)?;

        let approx = |x: f64| polynomial.eval(x);
        let deviation = max_deviation(&f, approx, n, lower, upper);
        let comparison = comparison_rows(&f, approx, n, lower, upper);
        let integral = integrate(&f, lower, upper, n, &table);

        Ok(ApproximationReport {
            run_name: self.config.run_name.clone(),
            polynomial: polynomial.coeffs,
            max_deviation: deviation,
            comparison,
            integral,
        })
    }
}

/// Re-integrate `f` at every panel count from 1 to `max_panels`,
/// showing how the composite rule settles as the table densifies.
pub fn panel_scan<F>(f: F, a: f64, b: f64, max_panels: usize) -> Vec<PanelScanPoint>
where
    F: Fn(f64) -> f64,
{
    assert!(max_panels >= 1, "panel scan needs at least one panel");

    (1..=max_panels)
        .map(|panels| {
            let table = build_table(panels, a, b, &f, NonFinitePolicy::Keep);
            PanelScanPoint {
                panels,
                integral: integrate(&f, a, b, panels, &table),
            }
        })
        .collect()
}
