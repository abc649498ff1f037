//! Numerical kernels for the approximation toolkit: interval sampling,
//! Gaussian elimination, Lagrange and spline interpolation, composite
//! quadrature, fixed-point root finding and deviation scans.

pub mod derivative;
pub mod deviation;
pub mod fixed_point;
pub mod gauss;
pub mod lagrange;
pub mod quadrature;
pub mod sampler;
pub mod spline;
