use std::{cell::OnceCell, cmp::Ordering, fmt, str::FromStr};

use thiserror::Error;

use super::{Vector, Vertex};

/// Errors raised by [`Simplex`] accessors and insertion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimplexError {
    #[error("invalid simplex key: {0:?}")]
    InvalidKey(String),

    #[error("need at least {required} vertices, simplex has {present}")]
    InsufficientVertices { required: usize, present: usize },

    #[error("expected a point with {expected} coordinates, got {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

/// Named views into an analysed simplex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// The vertex with the smallest objective value.
    Lowest,

    /// The vertex with the largest objective value.
    Highest,

    /// The vertex ranked just below [`Key::Highest`].
    SecondHighest,

    /// The mean of every vertex except the highest.
    Centroid,

    /// The highest vertex reflected through the centroid.
    Reflected,
}

impl FromStr for Key {
    type Err = SimplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lowest" => Ok(Self::Lowest),
            "highest" => Ok(Self::Highest),
            "second_highest" => Ok(Self::SecondHighest),
            "centroid" => Ok(Self::Centroid),
            "reflected" => Ok(Self::Reflected),
            other => Err(SimplexError::InvalidKey(other.to_owned())),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lowest => "lowest",
            Self::Highest => "highest",
            Self::SecondHighest => "second_highest",
            Self::Centroid => "centroid",
            Self::Reflected => "reflected",
        })
    }
}

/// The value stored under a [`Key`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entry<const N: usize> {
    /// A stored vertex (`Lowest`, `Highest`, `SecondHighest`).
    Vertex(Vertex<N>),

    /// A derived point (`Centroid`, `Reflected`).
    Point(Vector<N>),
}

/// A vertex tagged with its insertion sequence number.
#[derive(Debug, Clone, Copy)]
struct Slot<const N: usize> {
    vertex: Vertex<N>,
    seq: u64,
}

/// Derived state, valid until the next insertion.
#[derive(Debug, Clone)]
struct Analysis<const N: usize> {
    /// Slot indices in ascending order of value.
    order: Vec<usize>,

    /// Centroid and reflection, present once two or more vertices exist.
    centroid: Option<Vector<N>>,
    reflected: Option<Vector<N>>,
}

/// The Nelder-Mead simplex for an `N`-parameter problem.
///
/// Holds at most `D = N + 1` vertices. While it is filling, insertions append;
/// once full, every insertion replaces the current highest vertex.
///
/// Sorting, the centroid, and the reflected point are computed lazily on the
/// first read after a mutation and cached until the next one. Ties in value
/// keep insertion order.
#[derive(Debug, Clone)]
pub struct Simplex<const N: usize> {
    slots: Vec<Slot<N>>,
    next_seq: u64,
    analysis: OnceCell<Analysis<N>>,
}

impl<const N: usize> Default for Simplex<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Simplex<N> {
    /// Creates an empty simplex.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(N + 1),
            next_seq: 0,
            analysis: OnceCell::new(),
        }
    }

    /// Returns the vertex count of a full simplex, `N + 1`.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        N + 1
    }

    /// Returns the number of stored vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no vertices are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns true once all `N + 1` vertices are stored.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.dimension()
    }

    /// Returns true if derived state must be recomputed before the next read.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.analysis.get().is_none()
    }

    /// Appends a vertex, or replaces the highest one if the simplex is full.
    pub fn insert_or_replace(&mut self, point: Vector<N>, value: f64) {
        let slot = Slot {
            vertex: Vertex { point, value },
            seq: self.next_seq,
        };
        self.next_seq += 1;

        if self.is_full() {
            let worst = self.analysed().order[N];
            self.slots[worst] = slot;
        } else {
            self.slots.push(slot);
        }
        self.analysis.take();
    }

    /// Like [`insert_or_replace`](Self::insert_or_replace) for untyped coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`SimplexError::DimensionMismatch`] unless `point` has exactly
    /// `N` coordinates.
    pub fn try_insert_or_replace(&mut self, point: &[f64], value: f64) -> Result<(), SimplexError> {
        let point = Vector::try_from(point)?;
        self.insert_or_replace(point, value);
        Ok(())
    }

    /// Sorts the vertices and computes the centroid and reflected point.
    ///
    /// Does nothing if the cached state is still valid.
    pub fn analyse(&self) {
        self.analysed();
    }

    /// Returns the entry stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SimplexError::InsufficientVertices`] if the simplex has too
    /// few vertices for `key`.
    pub fn at(&self, key: Key) -> Result<Entry<N>, SimplexError> {
        match key {
            Key::Lowest => self.lowest().map(Entry::Vertex),
            Key::Highest => self.highest().map(Entry::Vertex),
            Key::SecondHighest => self.second_highest().map(Entry::Vertex),
            Key::Centroid => self.centroid().map(Entry::Point),
            Key::Reflected => self.reflected().map(Entry::Point),
        }
    }

    /// Returns the vertex with the smallest value.
    ///
    /// # Errors
    ///
    /// Returns [`SimplexError::InsufficientVertices`] if the simplex is empty.
    pub fn lowest(&self) -> Result<Vertex<N>, SimplexError> {
        self.ranked(0, 1)
    }

    /// Returns the vertex with the largest value.
    ///
    /// # Errors
    ///
    /// Returns [`SimplexError::InsufficientVertices`] if the simplex is empty.
    pub fn highest(&self) -> Result<Vertex<N>, SimplexError> {
        self.require(1)?;
        self.ranked(self.len() - 1, 1)
    }

    /// Returns the vertex ranked just below the highest.
    ///
    /// # Errors
    ///
    /// Returns [`SimplexError::InsufficientVertices`] with fewer than two vertices.
    pub fn second_highest(&self) -> Result<Vertex<N>, SimplexError> {
        self.require(2)?;
        self.ranked(self.len() - 2, 2)
    }

    /// Returns the mean of every vertex except the highest.
    ///
    /// # Errors
    ///
    /// Returns [`SimplexError::InsufficientVertices`] with fewer than two vertices.
    pub fn centroid(&self) -> Result<Vector<N>, SimplexError> {
        self.require(2)?;
        self.analysed().centroid.ok_or_else(|| self.insufficient(2))
    }

    /// Returns `2 * centroid - highest`.
    ///
    /// # Errors
    ///
    /// Returns [`SimplexError::InsufficientVertices`] with fewer than two vertices.
    pub fn reflected(&self) -> Result<Vector<N>, SimplexError> {
        self.require(2)?;
        self.analysed()
            .reflected
            .ok_or_else(|| self.insufficient(2))
    }

    /// Returns the stored vertices in ascending order of value.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex<N>> + '_ {
        self.analysed().order.iter().map(|&i| self.slots[i].vertex)
    }

    /// Returns the spread of objective values across a full simplex.
    ///
    /// The spread is `sqrt(sum((v_i - v_j)^2 for i < j) / D)` over all pairs of
    /// stored values. Returns `None` until the simplex is full.
    #[must_use]
    pub fn norm(&self) -> Option<f64> {
        if !self.is_full() {
            return None;
        }

        let values: Vec<f64> = self.slots.iter().map(|s| s.vertex.value).collect();
        let sum: f64 = values
            .iter()
            .enumerate()
            .flat_map(|(i, a)| values[i + 1..].iter().map(move |b| (a - b).powi(2)))
            .sum();

        #[allow(clippy::cast_precision_loss)]
        Some((sum / self.dimension() as f64).sqrt())
    }

    fn analysed(&self) -> &Analysis<N> {
        self.analysis.get_or_init(|| Analysis::of(&self.slots))
    }

    fn ranked(&self, rank: usize, required: usize) -> Result<Vertex<N>, SimplexError> {
        self.require(required)?;
        let index = self.analysed().order[rank];
        Ok(self.slots[index].vertex)
    }

    fn require(&self, required: usize) -> Result<(), SimplexError> {
        if self.len() < required {
            return Err(self.insufficient(required));
        }
        Ok(())
    }

    fn insufficient(&self, required: usize) -> SimplexError {
        SimplexError::InsufficientVertices {
            required,
            present: self.len(),
        }
    }
}

impl<const N: usize> Analysis<N> {
    fn of(slots: &[Slot<N>]) -> Self {
        let mut order: Vec<usize> = (0..slots.len()).collect();
        order.sort_by(|&a, &b| {
            compare_values(slots[a].vertex.value, slots[b].vertex.value)
                .then(slots[a].seq.cmp(&slots[b].seq))
        });

        let (centroid, reflected) = match order.split_last() {
            Some((&worst, rest)) if !rest.is_empty() => {
                let sum = rest
                    .iter()
                    .fold(Vector::zero(), |acc, &i| acc + slots[i].vertex.point);

                #[allow(clippy::cast_precision_loss)]
                let centroid = sum / rest.len() as f64;
                let reflected = centroid * 2.0 - slots[worst].vertex.point;
                (Some(centroid), Some(reflected))
            }
            _ => (None, None),
        };

        Self {
            order,
            centroid,
            reflected,
        }
    }
}

/// Orders objective values ascending, with NaN of either sign after every number.
fn compare_values(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (nan_a, nan_b) => nan_a.cmp(&nan_b),
    }
}
