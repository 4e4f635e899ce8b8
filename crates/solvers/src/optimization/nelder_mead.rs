//! Nelder-Mead simplex search for multi-variable minimization.
//!
//! # Algorithm
//!
//! The solver keeps a simplex of `N + 1` vertices for an `N`-variable
//! problem. Each update reflects the worst vertex through the centroid of the
//! others and, depending on how the reflected point compares with the current
//! vertices, accepts it, expands past it, or contracts toward the centroid.
//! The run converges when the spread of objective values across the simplex
//! (its [norm](Simplex::norm)) falls below the configured tolerance.
//!
//! # When to Use
//!
//! Nelder-Mead is appropriate when:
//! - Derivative information is unavailable or the objective is noisy
//! - The objective is expensive or external, such as a simulation run as a
//!   separate process
//! - The number of variables is small
//!
//! # Limitations
//!
//! - **Unconstrained**: There are no bounds or constraints on `x`
//! - **Local**: The search may settle on a local minimum
//! - **Serial**: Exactly one evaluation is in flight at a time
//!
//! # Two ways to drive it
//!
//! [`minimize`] owns the loop: it evaluates candidates through a [`Model`] and
//! a [`MinimizationProblem`] and reports progress to an observer.
//!
//! [`Optimizer`] hands the loop to the caller. Each [`Optimizer::step`] returns
//! one candidate, and control comes back to the caller until the next call, so
//! evaluation can happen anywhere (another process, a job queue) and a run can
//! be abandoned between any two steps.
//!
//! # Observer Events
//!
//! - [`Event::Proposed`] — one per step
//! - [`Event::Evaluated`] — evaluation succeeded
//! - [`Event::ModelFailed`] — model returned an error
//! - [`Event::ProblemFailed`] — problem returned an error (input or objective)
//! - [`Event::Accepted`] — a vertex entered the simplex, with the updated norm
//!
//! Observers can return [`Action::StopEarly`] to halt immediately, or
//! [`Action::AssumeWorse`] on an evaluation or failure event to treat the point
//! as having an objective of `+∞`.
//!
//! [`Model`]: amoeba_core::Model
//! [`MinimizationProblem`]: amoeba_core::MinimizationProblem

mod action;
mod best;
mod config;
mod error;
mod event;
mod optimizer;
mod search;
mod simplex;
mod solution;
mod step;
mod vector;
mod vertex;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Event, Progress};
pub use optimizer::Optimizer;
pub use simplex::{Entry, Key, Simplex, SimplexError};
pub use solution::{Solution, Status};
pub use step::{Objective, Phase, Step};
pub use vector::Vector;
pub use vertex::Vertex;

use amoeba_core::{MinimizationProblem, Model, Observer};

use search::search;

/// Finds a minimum of the objective using Nelder-Mead simplex search.
///
/// `start_points` must hold exactly `N + 1` points; together they form the
/// initial simplex. The observer receives an [`Event`] for every step,
/// evaluation, and accepted vertex. See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if `start_points` does not hold `N + 1` points, or if the
/// model or problem fails during evaluation and the observer does not return
/// [`Action::AssumeWorse`] to recover.
pub fn minimize<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    start_points: &[[f64; N]],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    search(model, problem, start_points, config, observer)
}

/// Finds a minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `start_points` does not hold `N + 1` points, or if the
/// model or problem fails during evaluation.
pub fn minimize_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    start_points: &[[f64; N]],
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, start_points, config, ())
}
