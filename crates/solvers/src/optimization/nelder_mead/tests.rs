use std::{convert::Infallible, fmt};

use approx::assert_relative_eq;

use amoeba_core::{MinimizationProblem, Model, Observer};

use super::{
    Action, Config, Error, Event, Phase, Solution, Status, Vector, minimize, minimize_unobserved,
};

/// The reference simplex with values 1469, 53, and 3625 under `x² + y²`.
const START: [[f64; 2]; 3] = [[10.0, 37.0], [7.0, 2.0], [51.0, 32.0]];

/// Passes solver variables through as the model output.
struct Passthrough;

impl Model for Passthrough {
    type Input = [f64; 2];
    type Output = [f64; 2];
    type Error = Infallible;

    fn call(&self, input: &[f64; 2]) -> Result<[f64; 2], Self::Error> {
        Ok(*input)
    }
}

/// Objective: `x² + y²`.
struct Paraboloid;

impl MinimizationProblem<2> for Paraboloid {
    type Input = [f64; 2];
    type Output = [f64; 2];
    type Error = Infallible;

    fn input(&self, x: &[f64; 2]) -> Result<Self::Input, Self::Error> {
        Ok(*x)
    }

    fn objective(&self, _input: &[f64; 2], output: &[f64; 2]) -> Result<f64, Self::Error> {
        Ok(output[0].powi(2) + output[1].powi(2))
    }
}

/// Minimizes the paraboloid from [`START`].
fn solve<Obs>(
    tolerance: f64,
    max_iters: usize,
    observer: Obs,
) -> Result<Solution<[f64; 2], [f64; 2], 2>, Error>
where
    Obs: for<'a> Observer<Event<'a, Passthrough, Paraboloid, 2>, Action>,
{
    let config = Config::new(tolerance, max_iters).unwrap();
    minimize(&Passthrough, &Paraboloid, &START, &config, observer)
}

#[test]
fn minimizes_paraboloid() {
    let solution = solve(1e-5, 1000, ()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.norm.expect("simplex is full") < 1e-5);
    assert!(solution.objective < 1e-5);
    assert_relative_eq!(solution.x[0], 0.0, epsilon = 1e-2);
    assert_relative_eq!(solution.x[1], 0.0, epsilon = 1e-2);
    assert_relative_eq!(solution.snapshot.output[0], solution.x[0]);
    assert!(solution.iters < 100);
    assert!(solution.evals <= 3 + 2 * solution.iters);
}

#[test]
fn tighter_tolerance_gets_closer() {
    let loose = solve(1e-3, 1000, ()).expect("should converge");
    let tight = solve(1e-5, 1000, ()).expect("should converge");

    assert_eq!(loose.status, Status::Converged);
    assert_eq!(tight.status, Status::Converged);
    assert!(tight.objective < loose.objective);
    assert!(tight.iters > loose.iters);
}

#[test]
fn stops_at_max_iters() {
    let solution = solve(1e-5, 10, ()).expect("should complete");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 10);
    assert!(solution.norm.is_some());
}

#[test]
fn zero_max_iters_only_fills() {
    let solution = solve(1e-5, 0, ()).expect("should complete");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.evals, 3);

    // Best start point is [7, 2].
    assert_eq!(solution.x, [7.0, 2.0]);
    assert_relative_eq!(solution.objective, 53.0);
}

#[test]
fn rejects_wrong_number_of_start_points() {
    let config = Config::default();
    let result = minimize_unobserved(&Passthrough, &Paraboloid, &START[..2], &config);
    let err = result.unwrap_err();

    assert!(matches!(
        err,
        Error::ArityMismatch {
            expected: 3,
            found: 2
        }
    ));
}

#[test]
fn events_follow_the_step_protocol() {
    let mut log = Vec::new();
    let observer = |event: &Event<'_, _, _, 2>| {
        let kind = match event {
            Event::Proposed(_) => "proposed",
            Event::Evaluated { .. } => "evaluated",
            Event::Accepted(_) => "accepted",
            Event::ModelFailed { .. } | Event::ProblemFailed { .. } => "failed",
        };
        log.push((kind, event.phase()));
        None
    };

    solve(1e-5, 1, observer).expect("should complete");

    let filling = [
        ("proposed", Phase::Filling),
        ("evaluated", Phase::Filling),
        ("accepted", Phase::Filling),
    ];
    assert_eq!(log[..3], filling);
    assert_eq!(log[3..6], filling);
    assert_eq!(log[6..9], filling);

    // Reflection [-34, 7] scores 1205: between 53 and 1469, so it is accepted as-is.
    assert_eq!(
        log[9..],
        [
            ("proposed", Phase::Reflecting),
            ("evaluated", Phase::Reflecting),
            ("proposed", Phase::Reflecting),
            ("accepted", Phase::Reflecting),
        ]
    );
}

#[test]
fn accepted_events_report_progress() {
    let mut progress = Vec::new();
    let observer = |event: &Event<'_, _, _, 2>| {
        if let Event::Accepted(p) = event {
            progress.push(*p);
        }
        None
    };

    let solution = solve(1e-5, 1000, observer).expect("should converge");

    assert_eq!(progress.len(), 3 + solution.iters);
    assert!(progress[..2].iter().all(|p| p.norm.is_none()));
    assert!(progress[2..].iter().all(|p| p.norm.is_some()));
    assert_eq!(progress[3].vertex.point, Vector::new([-34.0, 7.0]));
    assert_relative_eq!(progress[3].vertex.value, 1205.0);

    let last = progress.last().expect("at least one vertex");
    assert_eq!(last.iter, solution.iters);
    assert_eq!(last.norm, solution.norm);
}

#[test]
fn stop_early_returns_best_so_far() {
    let mut accepted = 0;
    let observer = |event: &Event<'_, _, _, 2>| {
        if let Event::Accepted(_) = event {
            accepted += 1;
            if accepted == 3 {
                return Some(Action::StopEarly);
            }
        }
        None
    };

    let solution = solve(1e-3, 1000, observer).expect("should stop");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.x, [7.0, 2.0]);
}

#[test]
fn stop_early_on_first_evaluation_keeps_it() {
    let observer = |event: &Event<'_, _, _, 2>| match event {
        Event::Evaluated { .. } => Some(Action::StopEarly),
        _ => None,
    };

    let solution = solve(1e-3, 1000, observer).expect("should stop");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.evals, 1);
    assert_eq!(solution.x, [10.0, 37.0]);
    assert_eq!(solution.norm, None);
}

#[test]
fn stop_early_before_any_evaluation_is_an_error() {
    let observer = |_event: &Event<'_, _, _, 2>| Some(Action::StopEarly);

    let err = solve(1e-3, 1000, observer).unwrap_err();

    assert!(matches!(err, Error::NoSuccessfulEvaluation));
}

/// Error returned by [`LeftWall`].
#[derive(Debug)]
struct OutOfRange(f64);

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x = {} is out of range", self.0)
    }
}

impl std::error::Error for OutOfRange {}

/// Passthrough model that fails for `x < -20`, like a simulation that crashes.
struct LeftWall;

impl Model for LeftWall {
    type Input = [f64; 2];
    type Output = [f64; 2];
    type Error = OutOfRange;

    fn call(&self, input: &[f64; 2]) -> Result<[f64; 2], Self::Error> {
        if input[0] < -20.0 {
            return Err(OutOfRange(input[0]));
        }
        Ok(*input)
    }
}

/// The same paraboloid with a fallible error type.
struct WalledParaboloid;

impl MinimizationProblem<2> for WalledParaboloid {
    type Input = [f64; 2];
    type Output = [f64; 2];
    type Error = OutOfRange;

    fn input(&self, x: &[f64; 2]) -> Result<Self::Input, Self::Error> {
        Ok(*x)
    }

    fn objective(&self, _input: &[f64; 2], output: &[f64; 2]) -> Result<f64, Self::Error> {
        Ok(output[0].powi(2) + output[1].powi(2))
    }
}

#[test]
fn model_errors_propagate() {
    let config = Config::default();

    // The first reflected point, [-34, 7], hits the wall.
    match minimize_unobserved(&LeftWall, &WalledParaboloid, &START, &config) {
        Err(Error::Model(source)) => assert_eq!(source.to_string(), "x = -34 is out of range"),
        other => panic!("expected a model error, got {other:?}"),
    }
}

#[test]
fn assume_worse_recovers_from_model_errors() {
    let mut failures = Vec::new();
    let observer = |event: &Event<'_, LeftWall, WalledParaboloid, 2>| match event {
        Event::ModelFailed { point, .. } => {
            failures.push(*point);
            Some(Action::AssumeWorse)
        }
        _ => None,
    };

    let solution = minimize(
        &LeftWall,
        &WalledParaboloid,
        &START,
        &Config::new(1e-5, 1000).unwrap(),
        observer,
    )
    .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(failures[0], Vector::new([-34.0, 7.0]));
    assert!(failures.iter().all(|p| p[0] < -20.0));
    assert_relative_eq!(solution.x[0], 0.0, epsilon = 1e-2);
    assert_relative_eq!(solution.x[1], 0.0, epsilon = 1e-2);
}

#[test]
fn assume_worse_keeps_point_out_of_best() {
    // Every evaluation from the second on is treated as +∞, so the only real
    // evaluation is the first start point.
    let mut evaluated = 0;
    let observer = |event: &Event<'_, _, _, 2>| {
        if let Event::Evaluated { .. } = event {
            evaluated += 1;
            if evaluated > 1 {
                return Some(Action::AssumeWorse);
            }
        }
        None
    };

    let solution = solve(1e-5, 3, observer).expect("should complete");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.x, [10.0, 37.0]);
    assert_relative_eq!(solution.objective, 1469.0);
}

/// Objective `(x - 3)²` over a single variable.
struct Shifted;

impl Model for Shifted {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok((x - 3.0).powi(2))
    }
}

impl MinimizationProblem<1> for Shifted {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn objective(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

#[test]
fn minimizes_single_variable() {
    let config = Config::new(1e-8, 1000).unwrap();
    let result = minimize_unobserved(&Shifted, &Shifted, &[[0.0], [1.0]], &config);
    let solution = result.expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x[0], 3.0, epsilon = 1e-3);
    assert_relative_eq!(solution.snapshot.input, solution.x[0]);
}
