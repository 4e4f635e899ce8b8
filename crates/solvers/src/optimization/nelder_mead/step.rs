use std::fmt;

use super::Vector;

/// The optimizer's current phase.
///
/// `Filling` consumes the start points; every later phase is one of the
/// classic Nelder-Mead moves. There is no terminal phase: the run ends when the
/// caller observes convergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Evaluating the caller-supplied start points.
    #[default]
    Filling,

    /// Probing the reflected point, or accepting it.
    Reflecting,

    /// Stepping past the reflected point.
    Expansion,

    /// Contracting between the centroid and the highest vertex.
    ContractionOutside,

    /// Contracting just past the centroid, away from the highest vertex.
    ContractionInside,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Filling => "filling",
            Self::Reflecting => "reflecting",
            Self::Expansion => "expansion",
            Self::ContractionOutside => "contraction-outside",
            Self::ContractionInside => "contraction-inside",
        })
    }
}

/// Whether a candidate's objective is already known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Objective {
    /// The caller must evaluate the candidate.
    NeedsEvaluation,

    /// The objective is known; no evaluation is needed.
    Evaluated(f64),
}

/// A candidate proposed by [`Optimizer::step`](super::Optimizer::step).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step<const N: usize> {
    /// The candidate point.
    pub point: Vector<N>,

    /// The phase that produced the candidate.
    pub phase: Phase,

    /// Whether the candidate still needs evaluating.
    pub objective: Objective,
}

impl<const N: usize> Step<N> {
    pub(super) fn evaluate(point: Vector<N>, phase: Phase) -> Self {
        Self {
            point,
            phase,
            objective: Objective::NeedsEvaluation,
        }
    }

    /// Returns true if the caller must evaluate [`point`](Self::point).
    #[must_use]
    pub fn needs_evaluation(&self) -> bool {
        matches!(self.objective, Objective::NeedsEvaluation)
    }

    /// Returns true if this is the trial reflection.
    ///
    /// Its value is not inserted into the simplex. It must be passed
    /// to the next [`Optimizer::step`](super::Optimizer::step) call instead.
    #[must_use]
    pub fn feeds_back(&self) -> bool {
        self.phase == Phase::Reflecting && self.needs_evaluation()
    }
}
