use thiserror::Error;

use amoeba_core::{MinimizationProblem, Model, Snapshot};

/// One completed objective evaluation.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    /// The solver variables that were evaluated.
    pub x: [f64; N],

    /// The objective value at `x`.
    pub objective: f64,

    /// The model input built from `x` and the output the model returned.
    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur while evaluating a candidate.
///
/// The two sides are kept apart so observers can tell a failed model run from
/// a problem that could not map `x` or score the result.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),

    /// Failed to construct input or compute the objective.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Result of [`evaluate`] for a model and problem pair.
pub type EvaluateResult<M, P, const N: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N>,
    EvalError<<M as Model>::Error, <P as MinimizationProblem<N>>::Error>,
>;

/// Runs the model once at `x` and scores the result.
///
/// The problem builds the model input from `x`, the model runs, and the
/// objective is computed from the captured [`Snapshot`].
///
/// # Errors
///
/// Returns [`EvalError::Problem`] if the input or objective cannot be built,
/// and [`EvalError::Model`] if the model call fails.
pub fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;

    let snapshot = Snapshot::new(input, output);
    let objective = problem
        .objective_from_snapshot(&snapshot)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        objective,
        snapshot,
    })
}
