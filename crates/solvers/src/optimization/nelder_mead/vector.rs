use std::{
    fmt,
    ops::{Add, Div, Index, Mul, Sub},
};

use nalgebra::SVector;

use super::simplex::SimplexError;

/// A point in the `N`-dimensional search space.
///
/// Arithmetic follows value semantics: every operation returns a new vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<const N: usize>(SVector<f64, N>);

impl<const N: usize> Vector<N> {
    /// Creates a vector from its coordinates.
    #[must_use]
    pub fn new(coords: [f64; N]) -> Self {
        Self(SVector::from(coords))
    }

    /// Returns the vector with every coordinate set to zero.
    #[must_use]
    pub fn zero() -> Self {
        Self(SVector::zeros())
    }

    /// Returns the coordinates.
    #[must_use]
    pub fn coords(&self) -> &[f64; N] {
        &self.0.data.0[0]
    }

    /// Consumes the vector and returns its coordinates.
    #[must_use]
    pub fn into_coords(self) -> [f64; N] {
        self.0.into()
    }

    /// Returns the underlying `nalgebra` column vector.
    #[must_use]
    pub fn as_svector(&self) -> &SVector<f64, N> {
        &self.0
    }
}

impl<const N: usize> From<[f64; N]> for Vector<N> {
    fn from(coords: [f64; N]) -> Self {
        Self::new(coords)
    }
}

impl<const N: usize> From<Vector<N>> for [f64; N] {
    fn from(vector: Vector<N>) -> Self {
        vector.into_coords()
    }
}

impl<const N: usize> From<SVector<f64, N>> for Vector<N> {
    fn from(vector: SVector<f64, N>) -> Self {
        Self(vector)
    }
}

impl<const N: usize> TryFrom<&[f64]> for Vector<N> {
    type Error = SimplexError;

    fn try_from(coords: &[f64]) -> Result<Self, Self::Error> {
        if coords.len() != N {
            return Err(SimplexError::DimensionMismatch {
                expected: N,
                found: coords.len(),
            });
        }
        Ok(Self(SVector::from_column_slice(coords)))
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<const N: usize> Mul<f64> for Vector<N> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl<const N: usize> Div<f64> for Vector<N> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match f.precision() {
                Some(p) => write!(f, "{x:.p$}")?,
                None => write!(f, "{x}")?,
            }
        }
        f.write_str("]")
    }
}
