// ─────────────────────────────────────────────────────────────────────
// SCPN Approx Core — Lagrange Interpolation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

//! Global Lagrange interpolation in the monomial basis.
//!
//! For `n` samples the interpolant is
//! `p(x) = Σ_i y_i · Π_{j≠i} (x − x_j) / (x_i − x_j)`,
//! expanded here into ascending monomial coefficients. The O(n²)
//! expansion is fine at the table sizes the sampler produces; past a
//! few dozen nodes the monomial basis itself is the limit, not the cost.

use approx_types::error::ApproxResult;
use approx_types::polynomial::Polynomial;
use approx_types::table::SampleTable;

/// Interpolate the table exactly with a polynomial of degree `len − 1`.
pub fn build_polynomial(table: &SampleTable) -> ApproxResult<Polynomial> {
    table.validate()?;

    let n = table.len();
    let mut coeffs = vec![0.0; n];

    for i in 0..n {
        let xi = table.samples[i].x;

        // Expand Π_{j≠i} (x − x_j) and the denominator Π_{j≠i} (x_i − x_j).
        let mut basis = vec![1.0];
        let mut denom = 1.0;
        for j in 0..n {
            if j == i {
                continue;
            }
            let xj = table.samples[j].x;
            denom *= xi - xj;

            basis.push(0.0);
            for m in (1..basis.len()).rev() {
                basis[m] = basis[m - 1] - xj * basis[m];
            }
            basis[0] = -xj * basis[0];
        }

        let scale = table.samples[i].y / denom;
        for (k, &b) in basis.iter().enumerate() {
            coeffs[k] += scale * b;
        }
    }

    Ok(Polynomial::new(coeffs))
}
