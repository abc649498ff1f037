//! Gaussian elimination with on-demand row pivoting.

use ndarray::Array1;

use approx_types::error::{ApproxError, ApproxResult};
use approx_types::system::LinearSystem;

/// Pivots smaller than this are treated as zero and trigger a row swap.
pub const PIVOT_EPS: f64 = 1e-4;

/// Solve `A x = b` by forward elimination and back-substitution.
///
/// The system is copied before elimination, so the caller's matrix and
/// right-hand side are left untouched. A row swap is performed only when
/// the current pivot falls below [`PIVOT_EPS`]; if no later row offers a
/// usable pivot either, the system is reported singular at that column.
pub fn gauss_solve(system: &LinearSystem) -> ApproxResult<Array1<f64>> {
    assert!(
        system.is_consistent(),
        "system must be square with a matching right-hand side"
    );

    let m = system.size();
    let mut a = system.matrix.clone();
    let mut b = system.rhs.clone();

    for i in 0..m {
        if a[[i, i]].abs() < PIVOT_EPS {
            let swap = (i + 1..m).find(|&k| a[[k, i]].abs() > PIVOT_EPS);
            match swap {
                Some(k) => {
                    for col in 0..m {
                        a.swap([i, col], [k, col]);
                    }
                    b.swap(i, k);
                }
                None => return Err(ApproxError::SingularSystem { column: i }),
            }
        }

        for j in i + 1..m {
            let multiplier = a[[j, i]] / a[[i, i]];
            for k in i..m {
                a[[j, k]] -= multiplier * a[[i, k]];
            }
            b[j] -= multiplier * b[i];
        }
    }

    let mut x = Array1::zeros(m);
    for i in (0..m).rev() {
        let mut acc = b[i];
        for j in i + 1..m {
            acc -= a[[i, j]] * x[j];
        }
        x[i] = acc / a[[i, i]];
    }

    Ok(x)
}
