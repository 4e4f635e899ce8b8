//! Core traits and types for the Amoeba toolkit.
//!
//! This crate defines the shared abstractions that solvers and observers build
//! on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output, such as a
//!   wrapper around an external simulation
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`MinimizationProblem`] — adapts solver variables to model inputs and
//!   extracts a scalar objective from model outputs

mod model;
mod observer;
mod problem;

pub use observer::Observer;
pub use problem::MinimizationProblem;
pub use {model::Model, model::Snapshot};
