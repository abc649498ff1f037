// ─────────────────────────────────────────────────────────────────────
// SCPN Approx Core — Interval Sampler
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

//! Uniform sampling of a function over a closed interval.
//!
//! The grid is produced by repeated addition of the step, so the walk
//! accumulates floating-point error and may stop short of, or overshoot,
//! the upper bound. An endpoint correction keeps the guarantee that the
//! last sample sits exactly at `upper`.

use approx_types::table::SampleTable;

/// Absolute slack allowed between the last accumulated abscissa and the
/// interval's upper bound before the correction appends instead of
/// replacing.
pub const ENDPOINT_EPS: f64 = 1e-3;

/// What to do with grid points where the sampled function is not finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonFinitePolicy {
    /// Record the sample as produced, NaN and infinities included.
    Keep,
    /// Drop the offending grid point from the table.
    Skip,
}

/// Sample `f` at `n + 1` nominally uniform points over `[lower, upper]`.
///
/// The final table always ends exactly at `upper`: if the accumulated
/// walk lands within `ENDPOINT_EPS` of the bound its last sample is
/// replaced by `(upper, f(upper))`, otherwise that pair is appended.
/// Under `NonFinitePolicy::Skip` interior non-finite values are dropped
/// but the endpoint correction is applied regardless, so the table is
/// never empty.
pub fn build_table<F>(
    n: usize,
    lower: f64,
    upper: f64,
    f: F,
    policy: NonFinitePolicy,
) -> SampleTable
where
    F: Fn(f64) -> f64,
{
    assert!(n >= 1, "subdivision count must be at least 1");
    assert!(
        lower < upper,
        "lower bound {lower} must lie below upper bound {upper}"
    );

    let dx = (upper - lower) / n as f64;
    let mut table = SampleTable::new();

    let mut x = lower;
    while x <= upper {
        let y = f(x);
        if policy == NonFinitePolicy::Keep || y.is_finite() {
            table.push(x, y);
        }
        x += dx;
    }

    match table.samples.last().map(|s| s.x) {
        Some(end) if end == upper => {}
        Some(end) if (end - upper).abs() < ENDPOINT_EPS => {
            let fixed = table.samples.len() - 1;
            table.samples[fixed].x = upper;
            table.samples[fixed].y = f(upper);
        }
        _ => table.push(upper, f(upper)),
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_grid_needs_no_correction() {
        // dx = 0.25 is exact in binary, so the walk hits 1.0 itself.
        let table = build_table(4, 0.0, 1.0, |x| x * x, NonFinitePolicy::Keep);
        assert_eq!(table.len(), 5);
        let last = table.samples[4];
        assert_eq!(last.x, 1.0);
        assert_eq!(last.y, 1.0);
        table.validate().expect("sampler output should validate");
    }

    #[test]
    fn drifted_walk_replaces_final_sample() {
        // dx = 0.3 drifts low: the walk ends at 0.8999999999999999 and
        // the correction snaps it back onto the bound.
        let table = build_table(3, 0.0, 0.9, |x| x, NonFinitePolicy::Keep);
        assert_eq!(table.len(), 4);
        let last = table.samples[3];
        assert_eq!(last.x, 0.9);
        assert!((last.y - 0.9).abs() < 1e-12);
        table.validate().expect("sampler output should validate");
    }

    #[test]
    fn overshoot_appends_final_sample() {
        // Over [0.3, 0.9] with dx = 0.2 the walk drifts high, exits at
        // ~0.9000000000000001 without sampling the bound, and the last
        // pushed abscissa (~0.7) is far outside ENDPOINT_EPS, so the
        // correction appends the bound.
        let table = build_table(3, 0.3, 0.9, |x| x, NonFinitePolicy::Keep);
        assert_eq!(table.len(), 4);
        let last = table.samples[3];
        assert_eq!(last.x, 0.9);
        assert!((last.y - 0.9).abs() < 1e-12);
        assert!(table.samples[2].x < 0.9 - ENDPOINT_EPS);
        table.validate().expect("sampler output should validate");
    }

    #[test]
    fn keep_policy_records_non_finite_values() {
        let table = build_table(4, -1.0, 1.0, |x| 1.0 / x, NonFinitePolicy::Keep);
        assert_eq!(table.len(), 5);
        assert!(table.samples[2].y.is_infinite(), "pole at x = 0 kept");
    }

    #[test]
    fn skip_policy_drops_non_finite_values() {
        let table = build_table(4, -1.0, 1.0, |x| 1.0 / x, NonFinitePolicy::Skip);
        assert_eq!(table.len(), 4);
        assert!(table.samples.iter().all(|s| s.y.is_finite()));
        assert_eq!(table.samples[3].x, 1.0);
    }

    #[test]
    fn skip_policy_still_materialises_the_endpoint() {
        // ln is non-finite over most of the scan, yet the corrected
        // table must still end at the bound.
        let table = build_table(4, -2.0, 1.0, |x| x.ln(), NonFinitePolicy::Skip);
        assert!(!table.is_empty());
        let last = table.samples[table.len() - 1];
        assert_eq!(last.x, 1.0);
        assert!((last.y - 0.0).abs() < 1e-12, "ln(1) should be 0");
    }
}
