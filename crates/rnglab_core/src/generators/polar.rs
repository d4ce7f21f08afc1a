//! Marsaglia polar method for exact standard normal variates.

use super::Generator;
use crate::source::SharedSource;

/// How the cached second variate of each pair is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SparePolicy {
    /// Every cached spare is returned on the following call.
    #[default]
    Tagged,
    /// Legacy behaviour: a spare `<= 0` is indistinguishable from "no spare",
    /// so it is discarded and a fresh pair is generated instead.
    ///
    /// Retained for parity with the historical sentinel-based cache. It skews
    /// the output towards positive values.
    PositiveOnly,
}

/// Marsaglia polar method.
///
/// Draws `(v1, v2)` uniformly in [-1, 1)², rejecting until
/// `0 < s = v1² + v2² < 1`, then returns `v1 * f` and caches `v2 * f` where
/// `f = sqrt(-2 ln(s) / s)`. Both are independent standard normals, so the
/// logarithm and square root are paid once per two values.
///
/// # Examples
///
/// ```rust
/// use rnglab_core::generators::{Generator, Polar};
/// use rnglab_core::source::SharedSource;
///
/// let mut polar = Polar::new(SharedSource::from_seed(3));
/// let first = polar.next();
/// assert!(polar.has_spare());
/// let second = polar.next();
/// assert!(!polar.has_spare());
/// assert!(first.is_finite() && second.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct Polar {
    source: SharedSource,
    spare: Option<f64>,
    policy: SparePolicy,
}

impl Polar {
    /// Creates a generator with the [`SparePolicy::Tagged`] cache.
    pub fn new(source: SharedSource) -> Self {
        Self::with_policy(source, SparePolicy::default())
    }

    /// Creates a generator with an explicit spare policy.
    pub fn with_policy(source: SharedSource, policy: SparePolicy) -> Self {
        Self {
            source,
            spare: None,
            policy,
        }
    }

    /// Whether a cached spare is waiting to be returned.
    pub fn has_spare(&self) -> bool {
        self.spare.is_some()
    }

    /// Generates a fresh pair, returning the first and caching the second.
    fn next_pair(&mut self) -> f64 {
        let (v1, v2, s) = loop {
            let v1 = self.source.gen_symmetric();
            let v2 = self.source.gen_symmetric();
            let s = v1 * v1 + v2 * v2;
            if s < 1.0 && s > 0.0 {
                break (v1, v2, s);
            }
        };

        let factor = (-2.0 * s.ln() / s).sqrt();
        self.spare = Some(v2 * factor);
        v1 * factor
    }
}

impl Generator for Polar {
    fn next(&mut self) -> f64 {
        if let Some(spare) = self.spare.take() {
            match self.policy {
                SparePolicy::Tagged => return spare,
                SparePolicy::PositiveOnly if spare > 0.0 => return spare,
                SparePolicy::PositiveOnly => {}
            }
        }
        self.next_pair()
    }
}
