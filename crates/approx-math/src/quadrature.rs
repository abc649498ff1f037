//! Fixed-order composite quadrature over a sample table.

use approx_types::table::SampleTable;

/// Closed 9-point Newton–Cotes weights. They sum to 28350, the
/// denominator of [`SCALE`].
pub const WEIGHTS: [f64; 9] = [
    989.0, 5888.0, -928.0, 10496.0, -4540.0, 10496.0, -928.0, 5888.0, 989.0,
];

/// Overall rule scale; one panel integrates `step * SCALE * Σ w_j f_j`.
pub const SCALE: f64 = 8.0 / 28350.0;

/// Integrate `f` over `[a, b]` with one 8-panel rule per consecutive
/// table pair.
///
/// The inner step is `(b − a) / (8 n)` and each pair's left `x` is the
/// panel origin, so for a table built with the same `n` over `[a, b]`
/// the panels tile the interval exactly. The rule order is fixed;
/// accuracy is bought with table density alone. Tables with fewer than
/// two samples integrate to zero.
pub fn integrate<F>(f: F, a: f64, b: f64, n: usize, table: &SampleTable) -> f64
where
    F: Fn(f64) -> f64,
{
    assert!(n >= 1, "subdivision count must be at least 1");

    let step = (b - a) / (8.0 * n as f64);
    let mut total = 0.0;

    for pair in table.samples.windows(2) {
        let origin = pair[0].x;
        let mut weighted = 0.0;
        for (j, w) in WEIGHTS.iter().enumerate() {
            weighted += w * f(origin + step * j as f64);
        }
        total += weighted * step * SCALE;
    }

    total
}
