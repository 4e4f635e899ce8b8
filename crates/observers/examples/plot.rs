//! Interactive visualizations of a Nelder-Mead search.
//!
//! Each mode minimizes a simple function of two variables and opens an
//! interactive plot window showing what the search did.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- progress
//! cargo run --example plot --features plot -- path
//! cargo run --example plot --features plot -- path 1e-8
//! ```
//!
//! # Modes
//!
//! - **progress** — Minimize x² + y² from a wide starting simplex. Shows the
//!   objective of each accepted vertex and the simplex norm on a log scale,
//!   both falling until the norm drops below the tolerance.
//!
//! - **path [tolerance]** — Minimize the Rosenbrock function from (−1.2, 1).
//!   Shows every evaluated point, tracing the simplex as it crawls along the
//!   curved valley toward (1, 1). Tighter tolerances run longer.

use std::{convert::Infallible, error::Error};

use amoeba_core::{MinimizationProblem, Model, Observer};
use amoeba_observers::{PlotObserver, Printer, ShowConfig};
use amoeba_solvers::optimization::nelder_mead::{self, Action, Config, Event};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "progress".into());
    match mode.as_str() {
        "progress" => progress(),
        "path" => {
            let tolerance = std::env::args()
                .nth(2)
                .as_deref()
                .map(str::parse::<f64>)
                .transpose()
                .unwrap_or_else(|_| {
                    eprintln!("Invalid tolerance, expected a number such as 1e-6");
                    std::process::exit(1);
                })
                .unwrap_or(1e-6);
            path(tolerance)
        }
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [progress|path [tolerance]]");
            std::process::exit(1);
        }
    }
}

/// A model that passes its input through unchanged.
struct Passthrough;

impl Model for Passthrough {
    type Input = [f64; 2];
    type Output = [f64; 2];
    type Error = Infallible;

    fn call(&self, input: &[f64; 2]) -> Result<[f64; 2], Infallible> {
        Ok(*input)
    }
}

// --- Progress ----------------------------------------------------------------

/// Objective: x² + y².
struct Paraboloid;

impl MinimizationProblem<2> for Paraboloid {
    type Input = [f64; 2];
    type Output = [f64; 2];
    type Error = Infallible;

    fn input(&self, x: &[f64; 2]) -> Result<[f64; 2], Infallible> {
        Ok(*x)
    }

    fn objective(&self, _input: &[f64; 2], output: &[f64; 2]) -> Result<f64, Infallible> {
        Ok(output[0].powi(2) + output[1].powi(2))
    }
}

fn progress() -> Result<(), Box<dyn Error>> {
    let start = [[10.0, 37.0], [7.0, 2.0], [51.0, 32.0]];
    let config = Config::new(1e-5, 1000)?;

    let mut obs = PlotObserver::<2>::new(["Objective", "Norm"]);
    let mut printer = Printer::stdout();

    let solution = nelder_mead::minimize(
        &Passthrough,
        &Paraboloid,
        &start,
        &config,
        |event: &Event<'_, _, _, 2>| {
            let _: Option<Action> = obs.observe(event);
            printer.observe(event)
        },
    )?;

    println!(
        "{} after {} iterations: f({:.6}, {:.6}) = {:.3e}",
        solution.status, solution.iters, solution.x[0], solution.x[1], solution.objective
    );

    obs.show(
        ShowConfig::new()
            .title("Nelder-Mead: objective and norm (log₁₀)")
            .legend()
            .log_y(),
    )?;
    Ok(())
}

// --- Path --------------------------------------------------------------------

/// Objective: the Rosenbrock function (1 − x)² + 100 (y − x²)².
struct Rosenbrock;

impl MinimizationProblem<2> for Rosenbrock {
    type Input = [f64; 2];
    type Output = [f64; 2];
    type Error = Infallible;

    fn input(&self, x: &[f64; 2]) -> Result<[f64; 2], Infallible> {
        Ok(*x)
    }

    fn objective(&self, _input: &[f64; 2], output: &[f64; 2]) -> Result<f64, Infallible> {
        let [x, y] = *output;
        Ok((1.0 - x).powi(2) + 100.0 * (y - x * x).powi(2))
    }
}

fn path(tolerance: f64) -> Result<(), Box<dyn Error>> {
    let start = [[-1.2, 1.0], [-1.0, 1.0], [-1.2, 1.2]];
    let config = Config::new(tolerance, 2000)?;

    // A single trace of (x, y) pairs; the plot x-axis is the first variable.
    let mut obs = PlotObserver::<1>::new(["Evaluated points"]);

    let solution = nelder_mead::minimize(
        &Passthrough,
        &Rosenbrock,
        &start,
        &config,
        |event: &Event<'_, _, _, 2>| {
            if let Event::Evaluated { point, .. } = event {
                obs.record(point[0], [Some(point[1])]);
            }
            None
        },
    )?;

    println!(
        "{} after {} evaluations: best ({:.6}, {:.6}) with f = {:.3e}",
        solution.status, solution.evals, solution.x[0], solution.x[1], solution.objective
    );

    obs.show(
        ShowConfig::new()
            .title("Nelder-Mead: Rosenbrock search path")
            .markers(),
    )?;
    Ok(())
}
