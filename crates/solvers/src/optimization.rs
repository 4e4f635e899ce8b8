//! Solvers for minimization problems.
//!
//! A [`MinimizationProblem`] maps solver variables `x: [f64; N]` to model
//! inputs, calls the model, and extracts a scalar objective. Solvers in this
//! module search for the `x` that minimizes that objective.
//!
//! # Solvers
//!
//! - [`nelder_mead`] — derivative-free simplex search in `N` dimensions
//!
//! [`MinimizationProblem`]: amoeba_core::MinimizationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod nelder_mead;
