use std::fmt;

use super::Vector;

/// A simplex vertex: a point with its evaluated objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex<const N: usize> {
    /// The coordinates of the vertex.
    pub point: Vector<N>,

    /// The objective value at `point`.
    pub value: f64,
}

impl<const N: usize> Vertex<N> {
    /// Creates a new vertex.
    #[must_use]
    pub fn new(point: [f64; N], value: f64) -> Self {
        Self {
            point: Vector::new(point),
            value,
        }
    }
}

impl<const N: usize> fmt::Display for Vertex<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.p$} -> {:.p$}", self.point, self.value),
            None => write!(f, "{} -> {}", self.point, self.value),
        }
    }
}
