//! Reusable observers for Nelder-Mead searches.
//!
//! This crate provides [`Observer`] implementations and capability traits for
//! the solvers in `amoeba-solvers`.
//!
//! # Contents
//!
//! - [`Printer`] — writes one line per accepted vertex
//! - [`Recorder`] — keeps every proposal and accepted vertex for later inspection
//! - [`traits`] — capability traits for generic observers
//!   ([`HasObjective`], [`CanStopEarly`], [`CanAssumeWorse`])
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for visualizing a search via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: amoeba_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

mod printer;
mod recorder;

pub mod traits;

#[cfg(feature = "plot")]
mod plot;

pub use printer::Printer;
pub use recorder::Recorder;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
