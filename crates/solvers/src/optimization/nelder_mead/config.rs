use thiserror::Error;

/// Configuration for the Nelder-Mead solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    expansion_factor: f64,
    contraction_factor: f64,
    tolerance: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a Nelder-Mead solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("expansion factor must be finite and positive")]
    ExpansionFactor,

    #[error("contraction factor must lie strictly between 0 and 1")]
    ContractionFactor,

    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-3, 1000).unwrap()
    }
}

impl Config {
    /// Default expansion factor.
    pub const EXPANSION_FACTOR: f64 = 1.5;

    /// Default contraction factor.
    pub const CONTRACTION_FACTOR: f64 = 0.5;

    /// Creates a config with the default expansion and contraction factors.
    ///
    /// `tolerance` bounds the spread of objective values across the simplex at
    /// convergence, and `max_iters` caps the number of simplex updates after
    /// the initial fill.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is non-positive or non-finite.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            expansion_factor: Self::EXPANSION_FACTOR,
            contraction_factor: Self::CONTRACTION_FACTOR,
            tolerance,
            max_iters,
        })
    }

    /// Sets the expansion factor.
    ///
    /// # Errors
    ///
    /// Returns an error if the factor is non-positive or non-finite.
    pub fn with_expansion_factor(mut self, factor: f64) -> Result<Self, ConfigError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ConfigError::ExpansionFactor);
        }
        self.expansion_factor = factor;
        Ok(self)
    }

    /// Sets the contraction factor.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < factor < 1`.
    pub fn with_contraction_factor(mut self, factor: f64) -> Result<Self, ConfigError> {
        if !(factor > 0.0 && factor < 1.0) {
            return Err(ConfigError::ContractionFactor);
        }
        self.contraction_factor = factor;
        Ok(self)
    }

    /// Returns the expansion factor.
    #[must_use]
    pub fn expansion_factor(&self) -> f64 {
        self.expansion_factor
    }

    /// Returns the contraction factor.
    #[must_use]
    pub fn contraction_factor(&self) -> f64 {
        self.contraction_factor
    }

    /// Returns the convergence tolerance on the simplex norm.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of simplex updates.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
