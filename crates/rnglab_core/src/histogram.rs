//! Equal-width histogram of a finite sample sequence.
//!
//! [`Histogram::build`] splits `[min, max]` into `intervals` bins of width
//! `(max - min) / intervals` and counts every sample inside the closed range.
//! Samples outside the range (including NaN) are dropped without error.
//!
//! Frequencies are `count / total`, where `total` is the number of samples
//! passed in, not the number that landed in a bin. If anything was dropped
//! the frequencies sum to less than one. An empty input reports zero for
//! every bin.

use std::fmt;

use tracing::debug;

use crate::error::HistogramError;

/// One histogram interval with its sample count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Lower bound of the interval
    pub start: f64,
    /// Upper bound of the interval
    pub end: f64,
    /// Number of samples counted in this interval
    pub count: usize,
}

/// One row of the histogram report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinRow {
    /// Lower bound of the interval
    pub start: f64,
    /// Upper bound of the interval
    pub end: f64,
    /// `count / total`, or `0` for an empty input
    pub frequency: f64,
}

/// Binned sample counts over a closed range.
///
/// # Examples
///
/// ```rust
/// use rnglab_core::histogram::Histogram;
///
/// let samples = [0.0, 0.25, 0.5, 0.75, 1.0];
/// let histogram = Histogram::build(&samples, 0.0, 1.0, 4).unwrap();
///
/// let counts: Vec<usize> = histogram.bins().iter().map(|b| b.count).collect();
/// // 1.0 sits on the upper edge and is clamped into the last bin.
/// assert_eq!(counts, vec![1, 1, 1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    min: f64,
    max: f64,
    width: f64,
    bins: Vec<Bin>,
    total: usize,
    dropped: usize,
}

impl Histogram {
    /// Bins `samples` into `intervals` equal-width bins over `[min, max]`.
    ///
    /// # Errors
    ///
    /// - `HistogramError::ZeroIntervals` when `intervals == 0`
    /// - `HistogramError::InvalidRange` unless `min` and `max` are finite
    ///   with `min < max` and the bin width is finite and positive
    pub fn build(
        samples: &[f64],
        min: f64,
        max: f64,
        intervals: usize,
    ) -> Result<Self, HistogramError> {
        if intervals == 0 {
            return Err(HistogramError::ZeroIntervals);
        }
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(HistogramError::InvalidRange { min, max });
        }

        let width = (max - min) / intervals as f64;
        if !(width.is_finite() && width > 0.0) {
            return Err(HistogramError::InvalidRange { min, max });
        }
        let mut bins: Vec<Bin> = (0..intervals)
            .map(|i| Bin {
                start: min + i as f64 * width,
                end: min + (i + 1) as f64 * width,
                count: 0,
            })
            .collect();

        let mut dropped = 0;
        for &value in samples {
            if value >= min && value <= max {
                // The upper edge maps to `intervals`, which is out of bounds.
                let index = (((value - min) / width) as usize).min(intervals - 1);
                bins[index].count += 1;
            } else {
                dropped += 1;
            }
        }

        if dropped > 0 {
            debug!(
                dropped,
                total = samples.len(),
                min,
                max,
                "samples outside histogram range"
            );
        }

        Ok(Self {
            min,
            max,
            width,
            bins,
            total: samples.len(),
            dropped,
        })
    }

    /// Lower bound of the range.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the range.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width shared by every bin.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Bins in increasing order.
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Number of input samples.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of input samples outside `[min, max]`.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Frequency of bin `index`, or `None` if out of range.
    pub fn frequency(&self, index: usize) -> Option<f64> {
        self.bins.get(index).map(|bin| self.frequency_of(bin))
    }

    /// Interval bounds and frequency for every bin, in increasing order.
    pub fn rows(&self) -> Vec<BinRow> {
        self.bins
            .iter()
            .map(|bin| BinRow {
                start: bin.start,
                end: bin.end,
                frequency: self.frequency_of(bin),
            })
            .collect()
    }

    fn frequency_of(&self, bin: &Bin) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            bin.count as f64 / self.total as f64
        }
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Interval   Frequency")?;
        for row in self.rows() {
            writeln!(f, "[{}; {}]    {}", row.start, row.end, row.frequency)?;
        }
        Ok(())
    }
}
