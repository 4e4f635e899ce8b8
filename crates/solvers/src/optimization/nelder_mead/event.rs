use std::fmt;

use amoeba_core::{MinimizationProblem, Model, Observer};

use crate::optimization::EvalError;

use super::{Action, Objective, Phase, Step, Vector, Vertex};

/// Progress report for a vertex inserted into the simplex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress<const N: usize> {
    /// Simplex updates completed after the initial fill (0 while filling).
    pub iter: usize,

    /// The inserted vertex.
    pub vertex: Vertex<N>,

    /// The phase that produced the vertex.
    pub phase: Phase,

    /// The simplex norm after insertion, or `None` while filling.
    pub norm: Option<f64>,
}

impl<const N: usize> fmt::Display for Progress<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (iter, phase, vertex) = (self.iter, self.phase, self.vertex);
        write!(f, "{iter:>5} {phase:<19} {vertex:.6}  norm: ")?;
        match self.norm {
            Some(norm) => write!(f, "{norm:.6e}"),
            None => f.write_str("undefined"),
        }
    }
}

/// Events emitted by the Nelder-Mead solver.
///
/// Every step emits [`Event::Proposed`]. Candidates that need evaluating then
/// emit [`Event::Evaluated`] or a failure event, and every vertex inserted into
/// the simplex emits [`Event::Accepted`]. The trial reflection is evaluated
/// but not inserted, so it never produces an `Accepted` event.
pub enum Event<'a, M, P, const N: usize>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// The optimizer proposed a candidate.
    Proposed(Step<N>),

    /// Successful evaluation of a candidate.
    Evaluated {
        /// The evaluated point.
        point: Vector<N>,

        /// The phase that proposed the point.
        phase: Phase,

        /// The objective value at `point`.
        objective: f64,

        /// The model input at this point.
        input: &'a M::Input,

        /// The model output at this point.
        output: &'a M::Output,
    },

    /// Model evaluation failed.
    ModelFailed {
        /// The point where evaluation failed.
        point: Vector<N>,

        /// The phase that proposed the point.
        phase: Phase,

        /// The model error.
        error: &'a M::Error,
    },

    /// Problem method failed (input construction or objective computation).
    ProblemFailed {
        /// The point where evaluation failed.
        point: Vector<N>,

        /// The phase that proposed the point.
        phase: Phase,

        /// The problem error.
        error: &'a P::Error,
    },

    /// A vertex was inserted into the simplex.
    Accepted(Progress<N>),
}

impl<M, P, const N: usize> Event<'_, M, P, N>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// Returns the point this event concerns.
    #[must_use]
    pub fn point(&self) -> Vector<N> {
        match self {
            Self::Proposed(step) => step.point,
            Self::Evaluated { point, .. }
            | Self::ModelFailed { point, .. }
            | Self::ProblemFailed { point, .. } => *point,
            Self::Accepted(progress) => progress.vertex.point,
        }
    }

    /// Returns the phase that produced the point.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Self::Proposed(step) => step.phase,
            Self::Evaluated { phase, .. }
            | Self::ModelFailed { phase, .. }
            | Self::ProblemFailed { phase, .. } => *phase,
            Self::Accepted(progress) => progress.phase,
        }
    }

    /// Returns the objective value, if this event carries one.
    #[must_use]
    pub fn objective(&self) -> Option<f64> {
        match self {
            Self::Proposed(Step {
                objective: Objective::Evaluated(value),
                ..
            }) => Some(*value),
            Self::Evaluated { objective, .. } => Some(*objective),
            Self::Accepted(progress) => Some(progress.vertex.value),
            Self::Proposed(_) | Self::ModelFailed { .. } | Self::ProblemFailed { .. } => None,
        }
    }

    /// Emits a failure event and returns the observer's action.
    pub(super) fn emit_failure<Obs>(
        point: Vector<N>,
        phase: Phase,
        error: &EvalError<M::Error, P::Error>,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
    {
        match error {
            EvalError::Model(e) => {
                let event = Event::ModelFailed {
                    point,
                    phase,
                    error: e,
                };
                observer.observe(&event)
            }
            EvalError::Problem(e) => {
                let event = Event::ProblemFailed {
                    point,
                    phase,
                    error: e,
                };
                observer.observe(&event)
            }
        }
    }
}

impl<M, P, const N: usize> fmt::Display for Event<'_, M, P, N>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Proposed(step) => write!(f, "proposed {} {}", step.phase, step.point),
            Self::Evaluated {
                point,
                phase,
                objective,
                ..
            } => write!(f, "evaluated {phase} {point} -> {objective}"),
            Self::ModelFailed {
                point,
                phase,
                error,
            } => write!(f, "model failed at {phase} {point}: {error}"),
            Self::ProblemFailed {
                point,
                phase,
                error,
            } => write!(f, "problem failed at {phase} {point}: {error}"),
            Self::Accepted(progress) => write!(f, "{progress}"),
        }
    }
}
