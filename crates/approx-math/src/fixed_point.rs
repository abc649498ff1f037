// ─────────────────────────────────────────────────────────────────────
// SCPN Approx Core — Fixed-Point Root Solver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

//! Root finding by piecewise fixed-point iteration.
//!
//! A root of `f` is rewritten as a fixed point `x = g(x)` of one or
//! more algebraic rearrangements, each contracting only on part of the
//! axis. The solver carries an ordered list of `(accepts, map)` pairs
//! and at every step applies the first map that accepts the current
//! iterate, so a single solver can chase roots in different regions
//! with differently rearranged maps.

use serde::Serialize;

use approx_types::error::{ApproxError, ApproxResult};
use approx_types::table::SampleTable;

/// Iteration cap used when the caller does not override it.
pub const DEFAULT_MAX_ITERS: usize = 10_000;

/// One rearranged iteration map together with its validity test.
pub struct MapPiece {
    pub accepts: Box<dyn Fn(f64) -> bool>,
    pub map: Box<dyn Fn(f64) -> f64>,
}

impl MapPiece {
    pub fn new<A, M>(accepts: A, map: M) -> Self
    where
        A: Fn(f64) -> bool + 'static,
        M: Fn(f64) -> f64 + 'static,
    {
        Self {
            accepts: Box::new(accepts),
            map: Box::new(map),
        }
    }
}

/// Converged iteration outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IterationResult {
    /// Final iterate.
    pub x: f64,
    /// Tolerance the run was asked to meet.
    pub eps: f64,
    pub iterations: usize,
}

/// A fixed-point solver over a declared domain.
pub struct FixedPointSolver {
    pub pieces: Vec<MapPiece>,
    /// Closed interval of admissible start points.
    pub domain: (f64, f64),
    pub max_iters: usize,
}

impl FixedPointSolver {
    pub fn new(pieces: Vec<MapPiece>, domain: (f64, f64)) -> Self {
        Self {
            pieces,
            domain,
            max_iters: DEFAULT_MAX_ITERS,
        }
    }

    /// Iterate from `x0` until `|f(x)| < tolerance` or the cap is hit.
    ///
    /// Convergence is checked after every application, so a run that
    /// meets the tolerance on exactly the cap-th step still succeeds.
    pub fn solve<F>(&self, x0: f64, f: F, tolerance: f64) -> ApproxResult<IterationResult>
    where
        F: Fn(f64) -> f64,
    {
        let (lower, upper) = self.domain;
        if x0 < lower || x0 > upper {
            return Err(ApproxError::DomainError {
                x: x0,
                message: format!("start point outside solver domain [{lower}, {upper}]"),
            });
        }

        let mut x = x0;
        let mut iterations = 0;
        loop {
            let piece = self
                .pieces
                .iter()
                .find(|p| (p.accepts)(x))
                .ok_or_else(|| ApproxError::DomainError {
                    x,
                    message: "no iteration map accepts the current iterate".into(),
                })?;

            x = (piece.map)(x);
            iterations += 1;

            if f(x).abs() < tolerance {
                return Ok(IterationResult {
                    x,
                    eps: tolerance,
                    iterations,
                });
            }
            if iterations >= self.max_iters {
                return Err(ApproxError::NonConvergence { x, iterations });
            }
        }
    }
}

/// Midpoints of consecutive table pairs whose `y` values strictly
/// change sign. Samples sitting exactly on zero bracket nothing.
pub fn locate_brackets(table: &SampleTable) -> Vec<f64> {
    table
        .samples
        .windows(2)
        .filter(|pair| {
            (pair[0].y > 0.0 && pair[1].y < 0.0) || (pair[0].y < 0.0 && pair[1].y > 0.0)
        })
        .map(|pair| (pair[0].x + pair[1].x) / 2.0)
        .collect()
}
