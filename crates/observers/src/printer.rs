//! Line-oriented progress output.

use std::io::{self, Write};

use amoeba_core::{MinimizationProblem, Model, Observer};
use amoeba_solvers::optimization::nelder_mead::{Action, Event};

/// Writes one line per vertex accepted into the simplex.
///
/// Each line shows the iteration, the phase that produced the vertex, the
/// vertex itself, and the simplex norm:
///
/// ```text
///     1 contraction-outside [1.500000] -> 0.250000  norm: 5.303301e-1
/// ```
///
/// Write failures never interrupt the solver. The first failure is kept and
/// can be inspected with [`Printer::error`].
///
/// Set [`verbose`](Printer::verbose) to also print proposals, evaluations, and
/// failures.
#[derive(Debug)]
pub struct Printer<W = io::Stdout> {
    writer: W,
    verbose: bool,
    error: Option<io::Error>,
}

impl Printer {
    /// Creates a printer that writes to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> Printer<W> {
    /// Creates a printer that writes to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            verbose: false,
            error: None,
        }
    }

    /// Prints every event, not just accepted vertices.
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Returns the first write error, if any.
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    /// Consumes the printer and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, line: impl std::fmt::Display) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.writer, "{line}") {
            self.error = Some(e);
        }
    }
}

impl<M, P, W, const N: usize> Observer<Event<'_, M, P, N>, Action> for Printer<W>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
    W: Write,
{
    fn observe(&mut self, event: &Event<'_, M, P, N>) -> Option<Action> {
        match event {
            Event::Accepted(progress) => self.write_line(progress),
            _ if self.verbose => self.write_line(event),
            _ => {}
        }
        None
    }
}

/// Allows `&mut Printer` to be passed to solvers that take an observer by
/// value, so the writer can be recovered after the solve completes.
impl<M, P, W, const N: usize> Observer<Event<'_, M, P, N>, Action> for &mut Printer<W>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
    W: Write,
{
    fn observe(&mut self, event: &Event<'_, M, P, N>) -> Option<Action> {
        (**self).observe(event)
    }
}
