//! Numerical solvers for the Amoeba toolkit.
//!
//! - [`optimization::nelder_mead`] — Nelder-Mead simplex minimization with a
//!   caller-driven [`Optimizer`](optimization::nelder_mead::Optimizer) and an
//!   observed driving loop ([`minimize`](optimization::nelder_mead::minimize))

pub mod optimization;
