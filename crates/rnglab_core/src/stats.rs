//! Descriptive statistics of a sample sequence.

use std::fmt;

/// Count, mean, population variance and extremes of a sample sequence.
///
/// Purely descriptive; no significance testing is attempted.
///
/// ```rust
/// use rnglab_core::stats::SampleStats;
///
/// let stats = SampleStats::from_samples(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(stats.mean, 2.5);
/// assert_eq!(stats.variance, 1.25);
/// assert!(SampleStats::from_samples(&[]).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStats {
    /// Number of samples
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Population variance (divides by `count`)
    pub variance: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
}

impl SampleStats {
    /// Computes the statistics, or `None` for an empty sequence.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            count: samples.len(),
            mean,
            variance,
            min,
            max,
        })
    }

    /// Standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}

impl fmt::Display for SampleStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n = {}, mean = {:.6}, variance = {:.6}, std dev = {:.6}, min = {:.6}, max = {:.6}",
            self.count,
            self.mean,
            self.variance,
            self.std_dev(),
            self.min,
            self.max
        )
    }
}
