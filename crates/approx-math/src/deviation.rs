// ─────────────────────────────────────────────────────────────────────
// SCPN Approx Core — Deviation Scans
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

//! Error scans between an approximation and the function it mimics.

use serde::Serialize;

use crate::sampler::ENDPOINT_EPS;

/// Drift slack for deciding whether the scan's exit point still counts
/// as the upper bound.
const EXIT_EPS: f64 = 1e-4;

/// Location and size of the largest observed deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Deviation {
    pub x: f64,
    pub value: f64,
}

/// One row of a side-by-side comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub x: f64,
    pub exact: f64,
    pub approximate: f64,
    pub difference: f64,
    /// Difference as a percentage of the exact value. The denominator
    /// keeps its sign, so rows with negative exact values report
    /// negative percentages.
    pub percent: f64,
}

/// Scan `[lower, upper]` at four points per subdivision for the largest
/// absolute gap between `f` and `approx`.
///
/// NaN gaps never win the comparison, so an undefined point in either
/// function cannot poison the result. When the walk drifts past `upper`
/// without sampling it, the bound itself is checked as well.
pub fn max_deviation<F, G>(f: F, approx: G, n: usize, lower: f64, upper: f64) -> Deviation
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    assert!(n >= 1, "subdivision count must be at least 1");

    let h = (upper - lower) / (4.0 * n as f64);
    let mut best = Deviation {
        x: lower,
        value: 0.0,
    };

    let mut x = lower;
    while x <= upper {
        let gap = (f(x) - approx(x)).abs();
        if gap > best.value {
            best = Deviation { x, value: gap };
        }
        x += h;
    }

    if x - upper < EXIT_EPS {
        let gap = (f(upper) - approx(upper)).abs();
        if gap > best.value {
            best = Deviation {
                x: upper,
                value: gap,
            };
        }
    }

    best
}

/// Tabulate `f` against `approx` on `[lower − dx, upper + dx]`,
/// one subdivision beyond each end, at four points per subdivision.
///
/// Rows where `f` is non-finite are skipped. The walk's endpoint drift
/// is corrected the same way the sampler corrects its tables: the final
/// row is replaced by, or an extra row appended at, the widened upper
/// bound, provided `f` is finite there.
pub fn comparison_rows<F, G>(
    f: F,
    approx: G,
    n: usize,
    lower: f64,
    upper: f64,
) -> Vec<ComparisonRow>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    assert!(n >= 1, "subdivision count must be at least 1");

    let dx = (upper - lower) / n as f64;
    let a = lower - dx;
    let b = upper + dx;
    let h = (upper - lower) / (4.0 * n as f64);

    let row_at = |x: f64| {
        let exact = f(x);
        let approximate = approx(x);
        let difference = (exact - approximate).abs();
        ComparisonRow {
            x,
            exact,
            approximate,
            difference,
            percent: difference * 100.0 / exact,
        }
    };

    let mut rows = Vec::new();
    let mut x = a;
    while x <= b {
        if f(x).is_finite() {
            rows.push(row_at(x));
        }
        x += h;
    }

    if f(b).is_finite() {
        match rows.last().map(|r| r.x) {
            Some(end) if end == b => {}
            Some(end) if (end - b).abs() < ENDPOINT_EPS => {
                let fixed = rows.len() - 1;
                rows[fixed] = row_at(b);
            }
            _ => rows.push(row_at(b)),
        }
    }

    rows
}
