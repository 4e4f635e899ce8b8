use amoeba_core::{MinimizationProblem, Model, Observer};

use crate::optimization::{Evaluation, evaluate};

use super::{
    Action, Config, Error, Event, Objective, Optimizer, Phase, Progress, Solution, Status, Step,
    Vector, Vertex, best::Best,
};

/// Core Nelder-Mead driving loop.
///
/// Repeatedly asks the optimizer for a candidate, evaluates it when needed,
/// and either feeds the value back (the trial reflection) or inserts it as a
/// vertex. Convergence and the iteration limit are checked between simplex
/// updates, never while a reflected value is pending.
pub(super) fn search<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    start_points: &[[f64; N]],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    let start_points = start_points.iter().copied().map(Vector::new).collect();
    let mut optimizer = Optimizer::with_start_points(*config, start_points)?;

    let mut best = Best::empty();
    let mut iters = 0;
    let mut evals = 0;
    let mut pending = None;

    loop {
        if pending.is_none() {
            if optimizer.is_converged() {
                return best.finish(Status::Converged, iters, evals, optimizer.norm());
            }
            if optimizer.remaining_start_points() == 0 && iters >= config.max_iters() {
                return best.finish(Status::MaxIters, iters, evals, optimizer.norm());
            }
        }

        let step = optimizer.step(pending.take())?;
        if let Some(Action::StopEarly) = observer.observe(&Event::<M, P, N>::Proposed(step)) {
            return best.finish(Status::StoppedByObserver, iters, evals, optimizer.norm());
        }

        let value = match step.objective {
            Objective::Evaluated(value) => value,
            Objective::NeedsEvaluation => {
                evals += 1;
                match eval_and_observe(model, problem, &step, &mut observer)? {
                    EvalOutcome::Continue(eval) => {
                        let value = eval.objective;
                        best.update(eval);
                        value
                    }
                    EvalOutcome::AssumeWorse => f64::INFINITY,
                    EvalOutcome::StopEarly(eval) => {
                        if let Some(eval) = eval {
                            best.update(eval);
                        }
                        return best.finish(
                            Status::StoppedByObserver,
                            iters,
                            evals,
                            optimizer.norm(),
                        );
                    }
                }
            }
        };

        if step.feeds_back() {
            pending = Some(value);
            continue;
        }

        optimizer.insert(step.point, value);
        if step.phase != Phase::Filling {
            iters += 1;
        }

        let progress = Progress {
            iter: iters,
            vertex: Vertex {
                point: step.point,
                value,
            },
            phase: step.phase,
            norm: optimizer.norm(),
        };
        if let Some(Action::StopEarly) = observer.observe(&Event::<M, P, N>::Accepted(progress)) {
            return best.finish(Status::StoppedByObserver, iters, evals, optimizer.norm());
        }
    }
}

// ============================================================================
// Eval + observe helper
// ============================================================================

enum EvalOutcome<I, O, const N: usize> {
    Continue(Evaluation<I, O, N>),
    AssumeWorse,
    StopEarly(Option<Evaluation<I, O, N>>),
}

/// Evaluate the step's candidate, emit event, and handle observer action.
fn eval_and_observe<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    step: &Step<N>,
    observer: &mut Obs,
) -> Result<EvalOutcome<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    match evaluate(model, problem, step.point.into_coords()) {
        Ok(eval) => {
            let event = Event::Evaluated {
                point: step.point,
                phase: step.phase,
                objective: eval.objective,
                input: &eval.snapshot.input,
                output: &eval.snapshot.output,
            };
            match observer.observe(&event) {
                Some(Action::StopEarly) => Ok(EvalOutcome::StopEarly(Some(eval))),
                Some(Action::AssumeWorse) => Ok(EvalOutcome::AssumeWorse),
                None => Ok(EvalOutcome::Continue(eval)),
            }
        }
        Err(e) => {
            let action = Event::emit_failure(step.point, step.phase, &e, observer);
            match action {
                Some(Action::StopEarly) => Ok(EvalOutcome::StopEarly(None)),
                Some(Action::AssumeWorse) => Ok(EvalOutcome::AssumeWorse),
                None => Err(e.into()),
            }
        }
    }
}
