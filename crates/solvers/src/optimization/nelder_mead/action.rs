/// Actions an observer can take during Nelder-Mead minimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best solution found so far.
    StopEarly,

    /// Treat this point as having an objective of `+∞`.
    ///
    /// Honored on [`Event::Evaluated`], [`Event::ModelFailed`], and
    /// [`Event::ProblemFailed`]; ignored on other events. The evaluation (if
    /// successful) is not considered for the best solution.
    ///
    /// Use this for:
    /// - Recovering from model or problem errors when domain knowledge suggests
    ///   the failed region is suboptimal but the search should continue.
    /// - Steering the search away from a region even when evaluation succeeded.
    ///
    /// [`Event::Evaluated`]: super::Event::Evaluated
    /// [`Event::ModelFailed`]: super::Event::ModelFailed
    /// [`Event::ProblemFailed`]: super::Event::ProblemFailed
    AssumeWorse,
}
