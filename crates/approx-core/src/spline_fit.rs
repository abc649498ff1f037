// ─────────────────────────────────────────────────────────────────────
// SCPN Approx Core — Spline Fit Pipeline
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

//! Samples a function with non-finite values dropped, fits a cubic
//! spline under the configured boundary closure and reports the
//! per-segment coefficients with the peak deviation from the original.

use serde::Serialize;

use approx_math::derivative::central;
use approx_math::deviation::{max_deviation, Deviation};
use approx_math::sampler::{build_table, NonFinitePolicy};
use approx_math::spline::{BoundaryKind, CubicSpline};
use approx_types::config::ApproxConfig;
use approx_types::error::ApproxResult;

/// One spline-fit run over a configured interval.
pub struct SplineRun {
    pub config: ApproxConfig,
}

/// One fitted segment in knot order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SegmentRow {
    pub index: usize,
    pub lower: f64,
    pub upper: f64,
    /// Descending-power cubic coefficients `(a, b, c, d)`.
    pub coefficients: [f64; 4],
}

#[derive(Debug, Clone, Serialize)]
pub struct SplineReport {
    pub run_name: String,
    pub boundary: BoundaryKind,
    /// Boundary derivative actually used at the left end, whether
    /// configured or estimated.
    pub left_boundary: f64,
    pub right_boundary: f64,
    pub segments: Vec<SegmentRow>,
    pub max_deviation: Deviation,
}

impl SplineRun {
    pub fn new(config: ApproxConfig) -> Self {
        Self { config }
    }

    pub fn from_file(path: &str) -> ApproxResult<Self> {
        Ok(Self::new(ApproxConfig::from_file(path)?))
    }

    /// Run the full pipeline on `f`.
    pub fn execute<F>(&self, f: F) -> ApproxResult<SplineReport>
    where
        F: Fn(f64) -> f64,
    {
        self.config.validate()?;

        let n = self.config.subdivisions;
        let lower = self.config.interval.lower;
        let upper = self.config.interval.upper;
        let spline_cfg = &self.config.spline;

        let table = build_table(n, lower, upper, &f, NonFinitePolicy::Skip);

        let (left, right) = if spline_cfg.estimate_slopes {
            let h = spline_cfg.slope_step;
            (central(&f, lower, h), central(&f, upper, h))
        } else {
            (spline_cfg.left, spline_cfg.right)
        };

        let spline = CubicSpline::fit(&table, left, right, spline_cfg.boundary)?;
        let deviation = max_deviation(&f, |x| spline.evaluate(x), n, lower, upper);

        let segments = table
            .samples
            .windows(2)
            .enumerate()
            .map(|(index, pair)| {
                let base = 4 * index;
                SegmentRow {
                    index,
                    lower: pair[0].x,
                    upper: pair[1].x,
                    coefficients: [
                        spline.coeffs[base],
                        spline.coeffs[base + 1],
                        spline.coeffs[base + 2],
                        spline.coeffs[base + 3],
                    ],
                }
            })
            .collect();

        Ok(SplineReport {
            run_name: self.config.run_name.clone(),
            boundary: spline_cfg.boundary,
            left_boundary: left,
            right_boundary: right,
            segments,
            max_deviation: deviation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_types::config::{Interval, SolverConfig, SplineConfig};

    fn config(spline: SplineConfig) -> ApproxConfig {
        ApproxConfig {
            run_name: "spline-test".into(),
            interval: Interval {
                lower: 0.0,
                upper: 6.0,
            },
            subdivisions: 6,
            spline,
            solver: SolverConfig::default(),
        }
    }

    #[test]
    fn natural_fit_reports_all_segments() {
        let run = SplineRun::new(config(SplineConfig::default()));
        let report = run.execute(|x: f64| x.sin()).expect("pipeline should run");

        assert_eq!(report.boundary, BoundaryKind::SecondDerivative);
        assert_eq!(report.segments.len(), 6);
        for (i, seg) in report.segments.iter().enumerate() {
            assert_eq!(seg.index, i);
            assert!(seg.lower < seg.upper);
        }
        assert!(
            report.max_deviation.value < 0.1,
            "sine should be tracked closely, got {}",
            report.max_deviation.value
        );
    }

    #[test]
    fn segment_cubics_match_the_sampled_values_at_knots() {
        let run = SplineRun::new(config(SplineConfig::default()));
        let f = |x: f64| x.sqrt() + x.sin();
        let report = run.execute(f).expect("pipeline should run");

        for seg in &report.segments {
            let [a, b, c, d] = seg.coefficients;
            let value = ((a * seg.lower + b) * seg.lower + c) * seg.lower + d;
            assert!(
                (value - f(seg.lower)).abs() < 1e-6,
                "segment {} should interpolate its left knot",
                seg.index
            );
        }
    }

    #[test]
    fn estimated_slopes_feed_the_boundary_rows() {
        let spline_cfg = SplineConfig {
            boundary: BoundaryKind::FirstDerivative,
            estimate_slopes: true,
            ..SplineConfig::default()
        };
        let run = SplineRun::new(config(spline_cfg));
        let report = run.execute(|x: f64| x * x).expect("pipeline should run");

        // Central differences are exact on quadratics: f'(0) = 0, f'(6) = 12.
        assert!(report.left_boundary.abs() < 1e-9);
        assert!((report.right_boundary - 12.0).abs() < 1e-9);
    }

    #[test]
    fn configured_boundary_values_are_echoed() {
        let spline_cfg = SplineConfig {
            left: 1.5,
            right: -2.5,
            ..SplineConfig::default()
        };
        let run = SplineRun::new(config(spline_cfg));
        let report = run.execute(|x: f64| x.sin()).expect("pipeline should run");
        assert_eq!(report.left_boundary, 1.5);
        assert_eq!(report.right_boundary, -2.5);
    }

    #[test]
    fn report_serializes_with_snake_case_boundary() {
        let run = SplineRun::new(config(SplineConfig::default()));
        let report = run.execute(|x: f64| x.sin()).expect("pipeline should run");
        let json = serde_json::to_string(&report).expect("report should serialize");
        assert!(json.contains("\"boundary\":\"second_derivative\""));
        assert!(json.contains("\"segments\""));
    }
}
