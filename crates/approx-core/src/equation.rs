// ─────────────────────────────────────────────────────────────────────
// SCPN Approx Core — Equation Pipeline
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

//! Hunts every real root of a function over the configured domain:
//! a bracketing scan seeds one fixed-point iteration per sign change,
//! and a tolerance study shows how iteration cost grows as the
//! tolerance tightens decade by decade.

use serde::Serialize;

use approx_math::fixed_point::{locate_brackets, FixedPointSolver, MapPiece};
use approx_math::sampler::{build_table, NonFinitePolicy};
use approx_types::config::ApproxConfig;
use approx_types::error::ApproxResult;

/// Starting tolerance of [`tolerance_study`].
pub const STUDY_START_EPS: f64 = 0.1;

/// Number of ÷10 tolerance steps the study walks through.
pub const STUDY_DECADES: usize = 5;

/// One root-hunting run over a configured domain.
pub struct EquationRun {
    pub config: ApproxConfig,
}

/// A converged root together with the seed that found it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RootRecord {
    pub seed: f64,
    pub x: f64,
    pub eps: f64,
    pub iterations: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct EquationReport {
    pub run_name: String,
    /// Bracket midpoints the scan produced, in domain order.
    pub seeds: Vec<f64>,
    pub roots: Vec<RootRecord>,
}

/// Iteration cost at one tolerance of the study.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ToleranceStep {
    pub eps: f64,
    pub iterations: usize,
}

impl EquationRun {
    pub fn new(config: ApproxConfig) -> Self {
        Self { config }
    }

    pub fn from_file(path: &str) -> ApproxResult<Self> {
        Ok(Self::new(ApproxConfig::from_file(path)?))
    }

    /// Scan the domain for sign changes and iterate each seed to a
    /// root. Any seed that fails to converge fails the whole run.
    pub fn execute<F>(&self, f: F, pieces: Vec<MapPiece>) -> ApproxResult<EquationReport>
    where
        F: Fn(f64) -> f64,
    {
        self.config.validate()?;

        let solver_cfg = &self.config.solver;
        let domain = (solver_cfg.domain_lower, solver_cfg.domain_upper);
        let span = domain.1 - domain.0;
        let steps = (span / solver_cfg.scan_step).round().max(1.0) as usize;

        let table = build_table(steps, domain.0, domain.1, &f, NonFinitePolicy::Keep);
        let seeds = locate_brackets(&table);

        let mut solver = FixedPointSolver::new(pieces, domain);
        solver.max_iters = solver_cfg.max_iterations;

        let mut roots = Vec::with_capacity(seeds.len());
        for &seed in &seeds {
            let result = solver.solve(seed, &f, solver_cfg.tolerance)?;
            roots.push(RootRecord {
                seed,
                x: result.x,
                eps: result.eps,
                iterations: result.iterations,
            });
        }

        Ok(EquationReport {
            run_name: self.config.run_name.clone(),
            seeds,
            roots,
        })
    }
}

/// Re-solve from the same seed at tolerances `0.1, 0.01, …`, one
/// decade per step, and record the iteration cost of each.
pub fn tolerance_study<F>(
    solver: &FixedPointSolver,
    f: F,
    seed: f64,
) -> ApproxResult<Vec<ToleranceStep>>
where
    F: Fn(f64) -> f64,
{
    let mut eps = STUDY_START_EPS;
    let mut study = Vec::with_capacity(STUDY_DECADES);
    for _ in 0..STUDY_DECADES {
        let result = solver.solve(seed, &f, eps)?;
        study.push(ToleranceStep {
            eps,
            iterations: result.iterations,
        });
        eps /= 10.0;
    }
    Ok(study)
}
