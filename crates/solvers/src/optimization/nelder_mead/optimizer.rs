use std::collections::VecDeque;

use super::{Config, Error, Objective, Phase, Simplex, Step, Vector};

/// The Nelder-Mead decision state machine.
///
/// The optimizer never evaluates the objective itself. Each call to
/// [`step`](Self::step) proposes one candidate; the caller evaluates it (however
/// slowly), then either feeds the value back or inserts the vertex:
///
/// 1. While start points remain, `step` returns them in order ([`Phase::Filling`]).
///    Insert each with its value.
/// 2. `step(None)` returns the reflected point ([`Phase::Reflecting`]). Evaluate
///    it and pass the value to the next `step` call; do not insert it.
/// 3. `step(Some(vr))` picks a move from `vr`. Expansion and contraction
///    candidates need evaluating and inserting. An accepted reflection comes
///    back as [`Objective::Evaluated`] and is inserted with that value.
///
/// Repeat until [`is_converged`](Self::is_converged). [`Step::feeds_back`]
/// tells the two evaluated cases apart.
#[derive(Debug, Clone)]
pub struct Optimizer<const N: usize> {
    config: Config,
    start_points: VecDeque<Vector<N>>,
    phase: Phase,
    simplex: Simplex<N>,
}

impl<const N: usize> Optimizer<N> {
    /// Creates an optimizer with an empty simplex of `N + 1` vertices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `N` is zero.
    pub fn new(config: Config) -> Result<Self, Error> {
        if N + 1 < 2 {
            return Err(Error::InvalidDimension { dimension: N + 1 });
        }

        Ok(Self {
            config,
            start_points: VecDeque::with_capacity(N + 1),
            phase: Phase::Filling,
            simplex: Simplex::new(),
        })
    }

    /// Creates an optimizer and queues its start points.
    ///
    /// # Errors
    ///
    /// Returns an error if `N` is zero or `points` does not hold `N + 1` points.
    pub fn with_start_points(config: Config, points: Vec<Vector<N>>) -> Result<Self, Error> {
        let mut optimizer = Self::new(config)?;
        optimizer.set_start_points(points)?;
        Ok(optimizer)
    }

    /// Queues the start points that fill the simplex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArityMismatch`] unless exactly `N + 1` points are given.
    pub fn set_start_points(&mut self, points: Vec<Vector<N>>) -> Result<(), Error> {
        if points.len() != self.dimension() {
            return Err(Error::ArityMismatch {
                expected: self.dimension(),
                found: points.len(),
            });
        }
        self.start_points = points.into();
        Ok(())
    }

    /// Queues start points given as untyped coordinate slices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArityMismatch`] unless exactly `N + 1` points are given,
    /// and [`Error::TypeMismatch`] if any point lacks exactly `N` coordinates.
    pub fn try_set_start_points<P: AsRef<[f64]>>(&mut self, points: &[P]) -> Result<(), Error> {
        if points.len() != self.dimension() {
            return Err(Error::ArityMismatch {
                expected: self.dimension(),
                found: points.len(),
            });
        }

        let points = points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let coords = point.as_ref();
                Vector::try_from(coords).map_err(|_| Error::TypeMismatch {
                    index,
                    expected: N,
                    found: coords.len(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.set_start_points(points)
    }

    /// Proposes the next candidate.
    ///
    /// `previous` is the value of the last reflected point, or `None` if no
    /// reflected value is pending. It is ignored while start points remain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Simplex`] if no start points remain and the simplex
    /// has too few vertices to reflect.
    pub fn step(&mut self, previous: Option<f64>) -> Result<Step<N>, Error> {
        if let Some(point) = self.start_points.pop_front() {
            self.phase = Phase::Filling;
            return Ok(Step::evaluate(point, Phase::Filling));
        }

        let Some(vr) = previous else {
            self.phase = Phase::Reflecting;
            return Ok(Step::evaluate(self.simplex.reflected()?, Phase::Reflecting));
        };

        let lowest = self.simplex.lowest()?;
        let second_highest = self.simplex.second_highest()?;
        let highest = self.simplex.highest()?;
        let centroid = self.simplex.centroid()?;

        let expansion = self.config.expansion_factor();
        let contraction = self.config.contraction_factor();

        // A NaN reflection is never an improvement, so it falls into outside contraction.
        let (phase, point) = if vr < lowest.value {
            let point = centroid * (1.0 + expansion) - highest.point;
            (Phase::Expansion, point)
        } else if !(vr < highest.value) {
            let point = centroid * (1.0 - contraction) + highest.point * contraction;
            (Phase::ContractionOutside, point)
        } else if vr > second_highest.value {
            let point = centroid * (1.0 + contraction) - highest.point;
            (Phase::ContractionInside, point)
        } else {
            self.phase = Phase::Reflecting;
            return Ok(Step {
                point: self.simplex.reflected()?,
                phase: Phase::Reflecting,
                objective: Objective::Evaluated(vr),
            });
        };

        self.phase = phase;
        Ok(Step::evaluate(point, phase))
    }

    /// Inserts an evaluated candidate, replacing the highest vertex once full.
    pub fn insert(&mut self, point: Vector<N>, value: f64) {
        self.simplex.insert_or_replace(point, value);
    }

    /// Returns true once the simplex is full and its norm is below tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.simplex
            .norm()
            .is_some_and(|norm| norm < self.config.tolerance())
    }

    /// Returns the simplex norm, or `None` while the simplex is filling.
    #[must_use]
    pub fn norm(&self) -> Option<f64> {
        self.simplex.norm()
    }

    /// Returns the phase of the most recent step.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the number of start points not yet proposed.
    #[must_use]
    pub fn remaining_start_points(&self) -> usize {
        self.start_points.len()
    }

    /// Returns the vertex count of a full simplex, `N + 1`.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        N + 1
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a read-only view of the simplex.
    #[must_use]
    pub fn simplex(&self) -> &Simplex<N> {
        &self.simplex
    }
}
