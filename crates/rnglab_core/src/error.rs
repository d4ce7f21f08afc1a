//! Error types for structured error handling.
//!
//! This module provides:
//! - `GeneratorError`: Rejected generator construction parameters
//! - `HistogramError`: Rejected histogram range or interval count
//! - `LabError`: Errors from the laboratory and generator catalogue
//!
//! Sampling itself never fails: every `Generator::next` is total over a
//! well-formed configuration, so errors only arise at construction time.

use thiserror::Error;

/// Invalid generator construction parameters.
///
/// # Examples
/// ```
/// use rnglab_core::error::GeneratorError;
///
/// let err = GeneratorError::ZeroModulus { generator: "linear" };
/// assert_eq!(format!("{}", err), "linear generator requires a non-zero modulus");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneratorError {
    /// The recurrence modulus was zero.
    #[error("{generator} generator requires a non-zero modulus")]
    ZeroModulus {
        /// Name of the generator being constructed
        generator: &'static str,
    },

    /// Standard deviation must be finite and non-negative.
    #[error("Invalid standard deviation: {0}")]
    InvalidStdDev(f64),

    /// Mean must be finite.
    #[error("Non-finite mean: {0}")]
    NonFiniteMean(f64),
}

/// Invalid histogram parameters.
///
/// # Examples
/// ```
/// use rnglab_core::error::HistogramError;
///
/// let err = HistogramError::InvalidRange { min: 1.0, max: 0.0 };
/// assert_eq!(format!("{}", err), "Invalid histogram range [1; 0]");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HistogramError {
    /// At least one interval is required.
    #[error("Histogram requires at least one interval")]
    ZeroIntervals,

    /// Range bounds must be finite with `min < max`.
    #[error("Invalid histogram range [{min}; {max}]")]
    InvalidRange {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
}

/// Laboratory-level errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LabError {
    /// Generator construction failed
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    /// Histogram construction failed
    #[error(transparent)]
    Histogram(#[from] HistogramError),

    /// Generator name not recognised
    #[error("Unknown generator '{0}'")]
    UnknownGenerator(String),

    /// Generator ordinal outside 1..=7
    #[error("Invalid generator ordinal {0}; expected 1..=7")]
    InvalidOrdinal(usize),

    /// Requested more values than a single draw allows
    #[error("Sample count {count} exceeds the maximum of {max}")]
    SampleCountTooLarge {
        /// Requested count
        count: usize,
        /// Largest accepted count
        max: usize,
    },
}
