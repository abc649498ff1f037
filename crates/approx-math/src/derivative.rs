//! Finite-difference first derivatives.

/// One-sided forward difference, first-order accurate.
pub fn forward<F>(f: F, x: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (f(x + h) - f(x)) / h
}

/// Symmetric central difference, second-order accurate.
///
/// Returns 0.0 when either neighbour value is non-finite, so slope
/// estimates taken next to a pole stay usable as boundary data.
pub fn central<F>(f: F, x: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let ahead = f(x + h);
    let behind = f(x - h);
    if !ahead.is_finite() || !behind.is_finite() {
        return 0.0;
    }
    (ahead - behind) / (2.0 * h)
}

/// Four-point one-sided stencil, exact through cubics.
pub fn four_point<F>(f: F, x: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (-2.0 * f(x - h) - 3.0 * f(x) + 6.0 * f(x + h) - f(x + 2.0 * h)) / (6.0 * h)
}
