use thiserror::Error;

/// Configuration for the Lambert W solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and non-negative")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 0.0,
            max_iters: Self::DEFAULT_MAX_ITERS,
        }
    }
}

impl Config {
    /// Iteration limit used unless a caller asks for another.
    ///
    /// Every supported argument converges in at most four Halley steps.
    pub const DEFAULT_MAX_ITERS: usize = 10;

    /// Creates a new config with a validated tolerance.
    ///
    /// The tolerance is an absolute bound on the final step `|w_{n+1} - w_n|`.
    /// A tolerance of zero asks for full double precision.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            tolerance,
            max_iters,
        })
    }

    /// Creates a config with the given tolerance and the default iteration limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite.
    pub fn with_tolerance(tolerance: f64) -> Result<Self, ConfigError> {
        Self::new(tolerance, Self::DEFAULT_MAX_ITERS)
    }

    /// Returns the absolute step tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of refinement iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
