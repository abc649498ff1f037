// ─────────────────────────────────────────────────────────────────────
// SCPN Approx Core — Cubic Splines
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

//! Piecewise cubic interpolation via one dense linear system.
//!
//! Each of the `s = len − 1` table segments carries four unknowns
//! `(a, b, c, d)` with `p_i(x) = a x³ + b x² + c x + d` in the global
//! coordinate. The assembled system stacks, in this order: `2s`
//! interpolation rows, `s − 1` first-derivative continuity rows,
//! `s − 1` second-derivative continuity rows and 2 boundary rows, for
//! `4s` equations in `4s` unknowns. Solving it in one shot keeps the
//! assembly transparent at the table sizes involved; the classic
//! tridiagonal reduction is an optimisation this walkthrough forgoes.

use ndarray::Array1;

use approx_types::error::ApproxResult;
use approx_types::system::LinearSystem;
use approx_types::table::SampleTable;

pub use approx_types::config::BoundaryKind;

use crate::gauss::gauss_solve;

/// Assemble the `4s × 4s` spline system for the given table.
///
/// `left` and `right` prescribe the boundary derivative selected by
/// `boundary` at the first and last knot.
pub fn build_system(
    table: &SampleTable,
    left: f64,
    right: f64,
    boundary: BoundaryKind,
) -> ApproxResult<LinearSystem> {
    table.validate()?;

    let s = table.len() - 1;
    let m = 4 * s;
    let mut system = LinearSystem::zeros(m);
    let mut row = 0;

    // Interpolation: every segment matches both of its knots.
    for i in 0..s {
        for knot in [&table.samples[i], &table.samples[i + 1]] {
            for j in 0..4 {
                system.matrix[[row, 4 * i + j]] = knot.x.powi(3 - j as i32);
            }
            system.rhs[row] = knot.y;
            row += 1;
        }
    }

    // First-derivative continuity at interior knots.
    for i in 0..s.saturating_sub(1) {
        let x = table.samples[i + 1].x;
        for j in 0..3 {
            let slope = (3 - j) as f64 * x.powi(2 - j as i32);
            system.matrix[[row, 4 * i + j]] = slope;
            system.matrix[[row, 4 * (i + 1) + j]] = -slope;
        }
        row += 1;
    }

    // Second-derivative continuity: p'' = 6 a x + 2 b on both sides.
    for i in 0..s.saturating_sub(1) {
        let x = table.samples[i + 1].x;
        system.matrix[[row, 4 * i]] = 6.0 * x;
        system.matrix[[row, 4 * i + 1]] = 2.0;
        system.matrix[[row, 4 * (i + 1)]] = -6.0 * x;
        system.matrix[[row, 4 * (i + 1) + 1]] = -2.0;
        row += 1;
    }

    // Boundary closure at the outermost knots.
    let x0 = table.samples[0].x;
    let xs = table.samples[s].x;
    match boundary {
        BoundaryKind::SecondDerivative => {
            system.matrix[[row, 0]] = 6.0 * x0;
            system.matrix[[row, 1]] = 2.0;
            system.rhs[row] = left;
            row += 1;
            system.matrix[[row, 4 * (s - 1)]] = 6.0 * xs;
            system.matrix[[row, 4 * (s - 1) + 1]] = 2.0;
            system.rhs[row] = right;
            row += 1;
        }
        BoundaryKind::FirstDerivative => {
            system.matrix[[row, 0]] = 3.0 * x0 * x0;
            system.matrix[[row, 1]] = 2.0 * x0;
            system.matrix[[row, 2]] = 1.0;
            system.rhs[row] = left;
            row += 1;
            system.matrix[[row, 4 * (s - 1)]] = 3.0 * xs * xs;
            system.matrix[[row, 4 * (s - 1) + 1]] = 2.0 * xs;
            system.matrix[[row, 4 * (s - 1) + 2]] = 1.0;
            system.rhs[row] = right;
            row += 1;
        }
    }

    assert_eq!(row, m, "assembled {row} equations for {m} unknowns");
    Ok(system)
}

/// A fitted piecewise cubic over `[lower, upper]`.
///
/// `coeffs` holds four descending-power coefficients per segment in
/// knot order, exactly as solved from [`build_system`].
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    pub coeffs: Array1<f64>,
    pub lower: f64,
    pub upper: f64,
}

impl CubicSpline {
    /// Fit a spline through the table with the given boundary closure.
    pub fn fit(
        table: &SampleTable,
        left: f64,
        right: f64,
        boundary: BoundaryKind,
    ) -> ApproxResult<CubicSpline> {
        let system = build_system(table, left, right, boundary)?;
        let coeffs = gauss_solve(&system)?;
        // build_system validated the table, so it has at least two rows.
        Ok(CubicSpline {
            coeffs,
            lower: table.samples[0].x,
            upper: table.samples[table.len() - 1].x,
        })
    }

    pub fn segments(&self) -> usize {
        self.coeffs.len() / 4
    }

    /// Evaluate the spline, clamping out-of-range arguments onto the
    /// first or last segment.
    ///
    /// Segment lookup assumes the knots subdivide `[lower, upper]`
    /// uniformly, which holds for sampler-built tables.
    pub fn evaluate(&self, x: f64) -> f64 {
        let n = self.segments();
        let t = (x - self.lower) / (self.upper - self.lower) * n as f64;
        // The float-to-usize cast saturates, so arguments below the
        // interval (and NaN) land on segment 0.
        let seg = (t as usize).min(n - 1);

        let base = 4 * seg;
        let a = self.coeffs[base];
        let b = self.coeffs[base + 1];
        let c = self.coeffs[base + 2];
        let d = self.coeffs[base + 3];
        ((a * x + b) * x + c) * x + d
    }

    /// Evaluate one segment's cubic directly, ignoring the locator.
    fn segment_value(&self, seg: usize, x: f64) -> f64 {
        let base = 4 * seg;
        ((self.coeffs[base] * x + self.coeffs[base + 1]) * x + self.coeffs[base + 2]) * x
            + self.coeffs[base + 3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::{build_table, NonFinitePolicy};

    fn fit_sine(points: usize) -> (SampleTable, CubicSpline) {
        let table = build_table(
            points - 1,
            0.0,
            3.0,
            |x| x.sin(),
            NonFinitePolicy::Skip,
        );
        let spline = CubicSpline::fit(&table, 0.0, 0.0, BoundaryKind::SecondDerivative)
            .expect("sine table should fit");
        (table, spline)
    }

    #[test]
    fn system_shape_matches_segment_count() {
        let table = SampleTable::from_pairs(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.0)]);
        let system = build_system(&table, 0.0, 0.0, BoundaryKind::SecondDerivative)
            .expect("valid table assembles");
        assert_eq!(system.size(), 12, "3 segments need 12 equations");
        assert!(system.is_consistent());
    }

    #[test]
    fn natural_spline_through_two_points_is_the_chord() {
        let table = SampleTable::from_pairs(&[(0.0, 0.0), (1.0, 1.0)]);
        let spline = CubicSpline::fit(&table, 0.0, 0.0, BoundaryKind::SecondDerivative)
            .expect("single segment should fit");
        assert_eq!(spline.segments(), 1);
        for &x in &[0.0, 0.25, 0.5, 0.75, 1.0] {
            assert!(
                (spline.evaluate(x) - x).abs() < 1e-9,
                "natural spline of a line should be the line at {x}"
            );
        }
    }

    #[test]
    fn spline_passes_through_every_knot() {
        let (table, spline) = fit_sine(7);
        for s in &table.samples {
            assert!(
                (spline.evaluate(s.x) - s.y).abs() < 1e-6,
                "spline({}) = {} should be {}",
                s.x,
                spline.evaluate(s.x),
                s.y
            );
        }
    }

    #[test]
    fn value_and_slope_are_continuous_across_knots() {
        let (table, spline) = fit_sine(7);
        let h = 1e-6;
        for i in 1..spline.segments() {
            let x = table.samples[i].x;

            let value_gap = spline.evaluate(x - h) - spline.evaluate(x + h);
            assert!(value_gap.abs() < 1e-4, "value jump {value_gap} at knot {x}");

            // Symmetric quotients taken wholly inside each neighbouring
            // segment; a slope mismatch at the knot would survive h → 0.
            let left_slope = (spline.evaluate(x) - spline.evaluate(x - 2.0 * h)) / (2.0 * h);
            let right_slope = (spline.evaluate(x + 2.0 * h) - spline.evaluate(x)) / (2.0 * h);
            assert!(
                (left_slope - right_slope).abs() < 1e-4,
                "slope jump {} at knot {x}",
                left_slope - right_slope
            );
        }
    }

    #[test]
    fn curvature_matches_across_interior_knots() {
        let (table, spline) = fit_sine(7);
        for i in 0..spline.segments() - 1 {
            let x = table.samples[i + 1].x;
            let d2 = |base: usize| 6.0 * spline.coeffs[base] * x + 2.0 * spline.coeffs[base + 1];
            let gap = d2(4 * i) - d2(4 * (i + 1));
            assert!(gap.abs() < 1e-6, "curvature jump {gap} at knot {x}");
        }
    }

    #[test]
    fn clamped_fit_reproduces_a_cubic_exactly() {
        // x³ satisfies every constraint when the end slopes are exact,
        // so each segment must solve to the same cubic.
        let f = |x: f64| x * x * x;
        let table = build_table(3, 0.0, 3.0, f, NonFinitePolicy::Keep);
        let spline = CubicSpline::fit(&table, 0.0, 27.0, BoundaryKind::FirstDerivative)
            .expect("cubic table should fit");
        for &x in &[0.1, 0.9, 1.5, 2.2, 2.95] {
            assert!(
                (spline.evaluate(x) - f(x)).abs() < 1e-7,
                "spline({x}) = {} should be {}",
                spline.evaluate(x),
                f(x)
            );
        }
    }

    #[test]
    fn out_of_range_arguments_clamp_to_edge_segments() {
        let (_, spline) = fit_sine(7);
        let below = spline.evaluate(-1.0);
        assert!(
            (below - spline.segment_value(0, -1.0)).abs() < 1e-12,
            "left overrun should extrapolate segment 0"
        );
        let above = spline.evaluate(4.0);
        let last = spline.segments() - 1;
        assert!(
            (above - spline.segment_value(last, 4.0)).abs() < 1e-12,
            "right overrun should extrapolate the last segment"
        );
    }
}
