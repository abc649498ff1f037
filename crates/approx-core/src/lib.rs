//! End-to-end approximation pipelines: polynomial fits with error
//! tables and integrals, cubic-spline fits, and fixed-point root
//! hunts, each driven by one [`approx_types::ApproxConfig`].

pub mod approximation;
pub mod equation;
pub mod spline_fit;

pub use approximation::{ApproximationReport, ApproximationRun};
pub use equation::{EquationReport, EquationRun};
pub use spline_fit::{SplineReport, SplineRun};
