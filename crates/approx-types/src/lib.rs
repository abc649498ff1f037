// ─────────────────────────────────────────────────────────────────────
// SCPN Approx Core — Shared Types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

//! Shared data model for the approximation toolkit: error taxonomy,
//! run configuration, sample tables, polynomials and linear systems.

pub mod config;
pub mod error;
pub mod polynomial;
pub mod system;
pub mod table;

pub use config::{ApproxConfig, BoundaryKind, Interval, SolverConfig, SplineConfig};
pub use error::{ApproxError, ApproxResult};
pub use polynomial::Polynomial;
pub use system::LinearSystem;
pub use table::{Sample, SampleTable};
