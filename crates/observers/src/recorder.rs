//! Trace recording.

use amoeba_core::{MinimizationProblem, Model, Observer};
use amoeba_solvers::optimization::nelder_mead::{Action, Event, Phase, Progress, Vector};

/// Records every candidate the optimizer proposes and every vertex it accepts.
///
/// Useful for inspecting the path a search took after it finishes, or for
/// asserting on it in tests.
#[derive(Debug, Clone, Default)]
pub struct Recorder<const N: usize> {
    proposals: Vec<(Vector<N>, Phase)>,
    accepted: Vec<Progress<N>>,
}

impl<const N: usize> Recorder<N> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidates in the order they were proposed, with the proposing phase.
    #[must_use]
    pub fn proposals(&self) -> &[(Vector<N>, Phase)] {
        &self.proposals
    }

    /// Vertices in the order they entered the simplex.
    #[must_use]
    pub fn accepted(&self) -> &[Progress<N>] {
        &self.accepted
    }

    /// Discards everything recorded so far.
    pub fn clear(&mut self) {
        self.proposals.clear();
        self.accepted.clear();
    }
}

impl<M, P, const N: usize> Observer<Event<'_, M, P, N>, Action> for Recorder<N>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    fn observe(&mut self, event: &Event<'_, M, P, N>) -> Option<Action> {
        match event {
            Event::Proposed(step) => self.proposals.push((step.point, step.phase)),
            Event::Accepted(progress) => self.accepted.push(*progress),
            _ => {}
        }
        None
    }
}

impl<M, P, const N: usize> Observer<Event<'_, M, P, N>, Action> for &mut Recorder<N>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    fn observe(&mut self, event: &Event<'_, M, P, N>) -> Option<Action> {
        (**self).observe(event)
    }
}
