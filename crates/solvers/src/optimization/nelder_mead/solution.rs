use std::fmt;

use amoeba_core::Snapshot;

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The simplex norm fell below the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Converged => "converged",
            Self::MaxIters => "reached iteration limit",
            Self::StoppedByObserver => "stopped by observer",
        })
    }
}

/// The result of a Nelder-Mead minimization.
#[derive(Debug, Clone)]
pub struct Solution<I, O, const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// Best point evaluated during the run.
    pub x: [f64; N],

    /// Objective value at the reported x.
    pub objective: f64,

    /// Simplex norm when the solver finished, or `None` if it never filled.
    pub norm: Option<f64>,

    /// Snapshot at the reported x.
    pub snapshot: Snapshot<I, O>,

    /// Simplex updates completed after the initial fill.
    pub iters: usize,

    /// Number of objective evaluations requested.
    pub evals: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_displays_as_text() {
        assert_eq!(Status::Converged.to_string(), "converged");
        assert_eq!(Status::MaxIters.to_string(), "reached iteration limit");
        assert_eq!(format!("[{:<10}]", Status::Converged), "[converged ]");
    }
}
