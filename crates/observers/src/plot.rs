//! Plotting observer for visualizing a search.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use amoeba_core::{MinimizationProblem, Model, Observer};
use amoeba_solvers::optimization::nelder_mead;

/// How [`PlotObserver::show`] renders the collected traces.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Nelder-Mead").legend().log_y())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    log_y: bool,
    markers: bool,
}

impl ShowConfig {
    /// Untitled, no legend, linear y-axis, traces drawn as lines.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Labels each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Plots log₁₀ of each y value. Non-positive values are dropped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }

    /// Draws each recorded point as a marker instead of joining them with lines.
    ///
    /// Suits traces whose x values are not ordered, such as a search path.
    #[must_use]
    pub fn markers(mut self) -> Self {
        self.markers = true;
        self
    }
}

/// Extracts plottable data from a solver event.
///
/// Return `None` from [`x`][Plottable::x] to skip the event entirely, or
/// `None` in a trace slot to skip only that trace.
///
/// [`nelder_mead::Event`] implements `Plottable<2>`: every accepted vertex is
/// plotted against its iteration, with the vertex objective as the first trace
/// and the simplex norm as the second.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["Objective", "Norm"]);
/// nelder_mead::minimize(&model, &problem, &start, &config, &mut obs)?;
/// obs.show(ShowConfig::new().title("Nelder-Mead").legend().log_y())?;
/// ```
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip it.
    fn x(&self) -> Option<f64>;

    /// The y-axis value of each trace for this event.
    fn traces(&self) -> [Option<f64>; N];
}

impl<M, P, const N: usize> Plottable<2> for nelder_mead::Event<'_, M, P, N>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    fn x(&self) -> Option<f64> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Accepted(progress) => Some(progress.iter as f64),
            _ => None,
        }
    }

    fn traces(&self) -> [Option<f64>; 2] {
        match self {
            Self::Accepted(progress) => [Some(progress.vertex.value), progress.norm],
            _ => [None, None],
        }
    }
}

/// A named series of `[x, y]` points.
#[derive(Debug, Clone)]
struct Trace {
    name: String,
    points: Vec<[f64; 2]>,
}

/// Collects `N` traces during a search and displays them in an egui window.
///
/// Pass `&mut PlotObserver` straight to the solver when the events are
/// [`Plottable`], or call [`record`][PlotObserver::record] from a closure to
/// plot anything else.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["x", "y"]);
/// let mut evals = 0u32;
///
/// let observer = |event: &nelder_mead::Event<'_, _, _, 2>| {
///     if let nelder_mead::Event::Evaluated { point, .. } = event {
///         evals += 1;
///         obs.record(f64::from(evals), [Some(point[0]), Some(point[1])]);
///     }
///     None
/// };
/// nelder_mead::minimize(&model, &problem, &start, &config, observer)?;
///
/// obs.show(ShowConfig::new().title("Evaluated points").legend())?;
/// ```
#[derive(Debug, Clone)]
pub struct PlotObserver<const N: usize> {
    traces: [Trace; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates an observer with one empty trace per name.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            traces: names.map(|name| Trace {
                name: name.to_owned(),
                points: Vec::new(),
            }),
        }
    }

    /// Adds a point at `x` to every trace whose slot is `Some`.
    pub fn record(&mut self, x: f64, ys: [Option<f64>; N]) {
        for (trace, y) in self.traces.iter_mut().zip(ys) {
            if let Some(y) = y {
                trace.points.push([x, y]);
            }
        }
    }

    /// Returns the points recorded for the trace at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[must_use]
    pub fn points(&self, index: usize) -> &[[f64; 2]] {
        &self.traces[index].points
    }

    /// Opens a window showing every trace and blocks until it is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let title = config.title.clone().unwrap_or_default();
        let app = PlotApp {
            traces: self.traces.into(),
            config,
        };

        eframe::run_native(
            &title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| Ok(Box::new(app))),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Lets the observer be lent to a solver and shown afterwards.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

struct PlotApp {
    traces: Vec<Trace>,
    config: ShowConfig,
}

impl PlotApp {
    fn plot_points(&self, trace: &Trace) -> PlotPoints {
        if self.config.log_y {
            trace
                .points
                .iter()
                .filter(|[_, y]| *y > 0.0)
                .map(|&[x, y]| [x, y.log10()])
                .collect()
        } else {
            trace.points.iter().copied().collect()
        }
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("amoeba_plot");
            if self.config.legend {
                plot = plot.legend(Legend::default());
            }
            if self.config.log_y {
                plot = plot.y_axis_label("log₁₀");
            }

            plot.show(ui, |plot_ui| {
                for trace in &self.traces {
                    let points = self.plot_points(trace);
                    if self.config.markers {
                        plot_ui.points(Points::new(points).radius(2.0).name(&trace.name));
                    } else {
                        plot_ui.line(Line::new(points).name(&trace.name));
                    }
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use nelder_mead::{Config, Status};

    struct Sample {
        x: Option<f64>,
        ys: [Option<f64>; 2],
    }

    impl Plottable<2> for Sample {
        fn x(&self) -> Option<f64> {
            self.x
        }

        fn traces(&self) -> [Option<f64>; 2] {
            self.ys
        }
    }

    fn feed(obs: &mut PlotObserver<2>, x: Option<f64>, ys: [Option<f64>; 2]) -> Option<()> {
        obs.observe(&Sample { x, ys })
    }

    #[test]
    fn records_plottable_events_and_never_acts() {
        let mut obs = PlotObserver::new(["a", "b"]);

        assert!(feed(&mut obs, Some(1.0), [Some(10.0), Some(20.0)]).is_none());
        feed(&mut obs, None, [Some(11.0), Some(21.0)]);
        feed(&mut obs, Some(3.0), [None, Some(22.0)]);

        assert_eq!(obs.points(0), [[1.0, 10.0]]);
        assert_eq!(obs.points(1), [[1.0, 20.0], [3.0, 22.0]]);
    }

    struct Parabola;

    impl Model for Parabola {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, x: &f64) -> Result<f64, Self::Error> {
            Ok(x * x + 1.0)
        }
    }

    impl MinimizationProblem<1> for Parabola {
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
    fn nelder_mead_events_plot_accepted_vertices() {
        let mut obs = PlotObserver::<2>::new(["Objective", "Norm"]);
        let config = Config::new(1e-6, 25).unwrap();
        let start = [[2.0], [-1.0]];
        let result = nelder_mead::minimize(&Parabola, &Parabola, &start, &config, &mut obs);
        let solution = result.expect("should complete");
        assert_ne!(solution.status, Status::StoppedByObserver);

        let objective = obs.points(0);
        let norm = obs.points(1);

        // Two fills plus one point per update; the first fill has no norm.
        assert_eq!(objective.len(), 2 + solution.iters);
        assert_eq!(norm.len(), objective.len() - 1);
        assert_eq!(objective[..2], [[0.0, 5.0], [0.0, 2.0]]);
        assert!(objective.iter().all(|p| p[1] >= 1.0));

        #[allow(clippy::cast_precision_loss)]
        let last_iter = solution.iters as f64;
        assert_eq!(norm.last().map(|p| p[0]), Some(last_iter));
    }
}
