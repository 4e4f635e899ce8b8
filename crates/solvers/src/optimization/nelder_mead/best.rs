use crate::optimization::Evaluation;

use super::{Error, Solution, Status};

/// Tracks the best evaluation encountered so far.
///
/// The best evaluation is defined by minimum objective. A NaN objective is
/// replaced by any number and never replaces one.
pub(super) struct Best<I, O, const N: usize> {
    eval: Option<Evaluation<I, O, N>>,
}

impl<I, O, const N: usize> Best<I, O, N> {
    /// Creates an empty best tracker.
    pub(super) fn empty() -> Self {
        Self { eval: None }
    }

    /// Updates the best evaluation if the objective improves.
    pub(super) fn update(&mut self, eval: Evaluation<I, O, N>) {
        if let Some(best) = self.eval.as_ref()
            && !is_better(eval.objective, best.objective)
        {
            return;
        }
        self.eval = Some(eval);
    }

    /// Finalizes the solver using the best available evaluation.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoSuccessfulEvaluation` if no successful evaluation is stored.
    pub(super) fn finish(
        self,
        status: Status,
        iters: usize,
        evals: usize,
        norm: Option<f64>,
    ) -> Result<Solution<I, O, N>, Error> {
        let eval = self.eval.ok_or(Error::NoSuccessfulEvaluation)?;
        Ok(Solution {
            status,
            x: eval.x,
            objective: eval.objective,
            norm,
            snapshot: eval.snapshot,
            iters,
            evals,
        })
    }
}

fn is_better(candidate: f64, best: f64) -> bool {
    candidate < best || (best.is_nan() && !candidate.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use amoeba_core::Snapshot;

    fn eval(x: f64, objective: f64) -> Evaluation<(), (), 1> {
        Evaluation {
            x: [x],
            objective,
            snapshot: Snapshot::new((), ()),
        }
    }

    #[test]
    fn update_keeps_lowest_objective() {
        let mut best = Best::empty();
        best.update(eval(1.0, 2.0));
        best.update(eval(2.0, -1.5));
        best.update(eval(3.0, 1.0));

        let solution = best
            .finish(Status::StoppedByObserver, 0, 3, None)
            .expect("best eval");

        assert_relative_eq!(solution.x[0], 2.0);
        assert_relative_eq!(solution.objective, -1.5);
    }

    #[test]
    fn nan_never_wins() {
        let mut best = Best::empty();
        best.update(eval(1.0, f64::NAN));
        best.update(eval(2.0, 5.0));
        best.update(eval(3.0, f64::NAN));

        let solution = best
            .finish(Status::StoppedByObserver, 0, 3, None)
            .expect("best eval");

        assert_relative_eq!(solution.x[0], 2.0);
        assert_relative_eq!(solution.objective, 5.0);
    }

    #[test]
    fn finish_errors_without_eval() {
        let best: Best<(), (), 1> = Best::empty();
        let err = best.finish(Status::StoppedByObserver, 0, 0, None);
        assert!(matches!(err, Err(Error::NoSuccessfulEvaluation)));
    }

    #[test]
    fn finish_builds_solution() {
        let mut best = Best::empty();
        best.update(eval(2.0, -1.25));

        let solution = best
            .finish(Status::Converged, 4, 9, Some(1e-4))
            .expect("best eval");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 4);
        assert_eq!(solution.evals, 9);
        assert_eq!(solution.norm, Some(1e-4));
        assert_relative_eq!(solution.x[0], 2.0);
        assert_relative_eq!(solution.objective, -1.25);
    }
}
