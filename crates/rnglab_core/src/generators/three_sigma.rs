//! Irwin-Hall ("three sigma") approximation of a normal variate.

use super::Generator;
use crate::error::GeneratorError;
use crate::source::SharedSource;

/// Number of uniform draws summed per value.
///
/// Twelve uniforms on [0, 1) sum to mean 6 and variance 1.
pub const IRWIN_HALL_TERMS: usize = 12;

/// Normal approximation via the central limit theorem.
///
/// Each value is `mean + (sum of 12 uniforms - 6) * std_dev`. This is an
/// approximation, not exact Gaussian sampling: the underlying sum is bounded
/// to [0, 12], so values never leave `mean ± 6 * std_dev` and the tails are
/// thinner than a true normal.
///
/// Draws come from a [`SharedSource`]; other generators holding a clone of
/// the same handle interleave with this one.
///
/// # Examples
///
/// ```rust
/// use rnglab_core::generators::{Generator, ThreeSigma};
/// use rnglab_core::source::SharedSource;
///
/// let mut generator = ThreeSigma::new(10.0, 2.0, SharedSource::from_seed(1)).unwrap();
/// let value = generator.next();
/// assert!((-2.0..22.0).contains(&value));
/// ```
#[derive(Debug, Clone)]
pub struct ThreeSigma {
    mean: f64,
    std_dev: f64,
    source: SharedSource,
}

impl ThreeSigma {
    /// Creates a generator targeting `mean` and `std_dev`.
    ///
    /// # Errors
    ///
    /// - `GeneratorError::NonFiniteMean` when `mean` is NaN or infinite
    /// - `GeneratorError::InvalidStdDev` when `std_dev` is negative or not finite
    pub fn new(mean: f64, std_dev: f64, source: SharedSource) -> Result<Self, GeneratorError> {
        if !mean.is_finite() {
            return Err(GeneratorError::NonFiniteMean(mean));
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(GeneratorError::InvalidStdDev(std_dev));
        }
        Ok(Self {
            mean,
            std_dev,
            source,
        })
    }
}

impl Generator for ThreeSigma {
    fn next(&mut self) -> f64 {
        let sum: f64 = (0..IRWIN_HALL_TERMS)
            .map(|_| self.source.gen_uniform())
            .sum();
        self.mean + (sum - 6.0) * self.std_dev
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RandomSource;
    use approx::assert_relative_eq;

    #[test]
    fn test_value_is_scaled_centred_sum() {
        let mut generator = ThreeSigma::new(1.5, 3.0, SharedSource::from_seed(77)).unwrap();
        let mut reference = RandomSource::from_seed(77);

        for _ in 0..20 {
            let sum: f64 = (0..12).map(|_| reference.gen_uniform()).sum();
            assert_relative_eq!(generator.next(), 1.5 + (sum - 6.0) * 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_bounded_support() {
        let mut generator = ThreeSigma::new(0.0, 1.0, SharedSource::from_seed(5)).unwrap();
        for _ in 0..10_000 {
            let value = generator.next();
            assert!((-6.0..6.0).contains(&value));
        }
    }

    #[test]
    fn test_moments() {
        let mut generator = ThreeSigma::new(0.0, 1.0, SharedSource::from_seed(2024)).unwrap();
        let samples = generator.sample(20_000);
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

        assert!(mean.abs() < 0.05, "mean {}", mean);
        assert!((variance - 1.0).abs() < 0.05, "variance {}", variance);
    }

    #[test]
    fn test_zero_std_dev_is_constant() {
        let mut generator = ThreeSigma::new(4.0, 0.0, SharedSource::from_seed(1)).unwrap();
        assert_eq!(generator.next(), 4.0);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let source = SharedSource::from_seed(1);
        assert_eq!(
            ThreeSigma::new(0.0, -1.0, source.clone()).unwrap_err(),
            GeneratorError::InvalidStdDev(-1.0)
        );
        assert!(ThreeSigma::new(f64::NAN, 1.0, source.clone()).is_err());
        assert!(ThreeSigma::new(0.0, f64::INFINITY, source).is_err());
    }
}
