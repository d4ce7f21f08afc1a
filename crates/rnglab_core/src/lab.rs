//! Generator catalogue and the wired-up laboratory.
//!
//! [`GeneratorKind`] names the seven generators by menu ordinal (1..=7).
//! [`Laboratory`] constructs one instance of each from [`LabParameters`]:
//!
//! - Linear, Quadratic and Fibonacci are seeded with the laboratory seed
//! - Inverse is seeded from its own parameters (`1` by default)
//! - Combine reads the laboratory's own Linear and Quadratic instances
//! - Three-sigma and Polar share one [`SharedSource`] seeded with the
//!   laboratory seed, so their draws interleave
//!
//! Sampling Linear or Quadratic directly therefore moves the Combine stream
//! along too, and vice versa.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::LabError;
use crate::generators::{
    shared, CombineGenerator, Fibonacci, Generator, InverseCongruential, LinearCongruential,
    Polar, QuadraticCongruential, SharedGenerator, ThreeSigma,
};
use crate::source::{wall_clock_seed, SharedSource};

/// Largest number of values [`Laboratory::sample`] draws in one call.
pub const MAX_SAMPLE_COUNT: usize = 10_000_000;

/// The seven generators, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeneratorKind {
    /// Linear congruential
    Linear,
    /// Quadratic congruential
    Quadratic,
    /// Additive Fibonacci
    Fibonacci,
    /// Inverse congruential
    Inverse,
    /// Subtraction-combine of Linear and Quadratic
    Combine,
    /// Irwin-Hall normal approximation
    ThreeSigma,
    /// Marsaglia polar method
    Polar,
}

impl GeneratorKind {
    /// All kinds in ordinal order.
    pub const ALL: [GeneratorKind; 7] = [
        GeneratorKind::Linear,
        GeneratorKind::Quadratic,
        GeneratorKind::Fibonacci,
        GeneratorKind::Inverse,
        GeneratorKind::Combine,
        GeneratorKind::ThreeSigma,
        GeneratorKind::Polar,
    ];

    /// Menu ordinal, 1-based.
    pub fn ordinal(self) -> usize {
        match self {
            GeneratorKind::Linear => 1,
            GeneratorKind::Quadratic => 2,
            GeneratorKind::Fibonacci => 3,
            GeneratorKind::Inverse => 4,
            GeneratorKind::Combine => 5,
            GeneratorKind::ThreeSigma => 6,
            GeneratorKind::Polar => 7,
        }
    }

    /// Looks a kind up by its menu ordinal.
    ///
    /// ```rust
    /// use rnglab_core::lab::GeneratorKind;
    ///
    /// assert_eq!(GeneratorKind::from_ordinal(6).unwrap(), GeneratorKind::ThreeSigma);
    /// assert!(GeneratorKind::from_ordinal(0).is_err());
    /// ```
    pub fn from_ordinal(ordinal: usize) -> Result<Self, LabError> {
        ordinal
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(LabError::InvalidOrdinal(ordinal))
    }

    /// Machine name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            GeneratorKind::Linear => "linear",
            GeneratorKind::Quadratic => "quadratic",
            GeneratorKind::Fibonacci => "fibonacci",
            GeneratorKind::Inverse => "inverse",
            GeneratorKind::Combine => "combine",
            GeneratorKind::ThreeSigma => "three-sigma",
            GeneratorKind::Polar => "polar",
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            GeneratorKind::Linear => "Linear",
            GeneratorKind::Quadratic => "Quadratic",
            GeneratorKind::Fibonacci => "Fibonacci",
            GeneratorKind::Inverse => "Inverse",
            GeneratorKind::Combine => "Combine",
            GeneratorKind::ThreeSigma => "Three sigma",
            GeneratorKind::Polar => "Polar coordinates",
        }
    }

    /// Whether the generator approximates a normal rather than a uniform
    /// distribution.
    pub fn is_normal(self) -> bool {
        matches!(self, GeneratorKind::ThreeSigma | GeneratorKind::Polar)
    }

    /// Default histogram range: `[0, 1]` for uniform generators, `[-3, 3]`
    /// for normal ones.
    pub fn default_range(self) -> (f64, f64) {
        if self.is_normal() {
            (-3.0, 3.0)
        } else {
            (0.0, 1.0)
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GeneratorKind {
    type Err = LabError;

    /// Accepts a machine name (`three-sigma`, case-insensitive, `_` allowed)
    /// or a menu ordinal (`6`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(ordinal) = trimmed.parse::<usize>() {
            return Self::from_ordinal(ordinal);
        }

        let normalised = trimmed.to_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == normalised)
            .ok_or_else(|| LabError::UnknownGenerator(s.to_string()))
    }
}

/// Linear congruential parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearParams {
    /// Modulus `m`
    pub modulus: u64,
    /// Multiplier `a`
    pub multiplier: u64,
    /// Increment `c`
    pub increment: u64,
}

impl Default for LinearParams {
    fn default() -> Self {
        Self {
            modulus: 2_147_483_647,
            multiplier: 16_807,
            increment: 0,
        }
    }
}

/// Quadratic congruential parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadraticParams {
    /// Modulus `m`
    pub modulus: u64,
    /// Linear coefficient `a`
    pub multiplier: u64,
    /// Increment `c`
    pub increment: u64,
    /// Quadratic coefficient `d`
    pub quadratic: u64,
}

impl Default for QuadraticParams {
    fn default() -> Self {
        Self {
            modulus: 2_147_483_647,
            multiplier: 40_014,
            increment: 0,
            quadratic: 53_668,
        }
    }
}

/// Fibonacci parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FibonacciParams {
    /// Modulus `m`
    pub modulus: u64,
}

impl Default for FibonacciParams {
    fn default() -> Self {
        Self {
            modulus: 2_147_483_647,
        }
    }
}

/// Inverse congruential parameters. The seed is fixed, not time-derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InverseParams {
    /// Prime modulus `p`
    pub modulus: u64,
    /// Multiplier `a`
    pub multiplier: u64,
    /// Increment `c`
    pub increment: u64,
    /// Initial state
    pub seed: u64,
}

impl Default for InverseParams {
    fn default() -> Self {
        Self {
            modulus: 2_147_483_647,
            multiplier: 16_805,
            increment: 10,
            seed: 1,
        }
    }
}

/// Three-sigma parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreeSigmaParams {
    /// Target mean
    pub mean: f64,
    /// Target standard deviation
    pub std_dev: f64,
}

impl Default for ThreeSigmaParams {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }
}

/// Constructor parameters for every generator in the laboratory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabParameters {
    /// Linear congruential parameters
    pub linear: LinearParams,
    /// Quadratic congruential parameters
    pub quadratic: QuadraticParams,
    /// Fibonacci parameters
    pub fibonacci: FibonacciParams,
    /// Inverse congruential parameters
    pub inverse: InverseParams,
    /// Three-sigma parameters
    pub three_sigma: ThreeSigmaParams,
}

type SharedLinear = SharedGenerator<LinearCongruential>;
type SharedQuadratic = SharedGenerator<QuadraticCongruential>;

/// One instance of each generator, constructed once and kept for the
/// lifetime of the laboratory.
///
/// # Examples
///
/// ```rust
/// use rnglab_core::lab::{GeneratorKind, LabParameters, Laboratory};
///
/// let mut lab = Laboratory::new(&LabParameters::default(), 1).unwrap();
/// let samples = lab.sample(GeneratorKind::Linear, 2).unwrap();
/// assert_eq!(samples[0], 16_807.0 / 2_147_483_647.0);
/// ```
pub struct Laboratory {
    seed: u64,
    linear: SharedLinear,
    quadratic: SharedQuadratic,
    fibonacci: Fibonacci,
    inverse: InverseCongruential,
    combine: CombineGenerator<SharedLinear, SharedQuadratic>,
    three_sigma: ThreeSigma,
    polar: Polar,
}

impl Laboratory {
    /// Constructs every generator from `params`, seeding the time-seeded
    /// generators and the shared source with `seed`.
    ///
    /// # Errors
    ///
    /// Propagates the first `GeneratorError` raised by a constructor.
    pub fn new(params: &LabParameters, seed: u64) -> Result<Self, LabError> {
        let linear = shared(LinearCongruential::new(
            params.linear.modulus,
            params.linear.multiplier,
            params.linear.increment,
            seed,
        )?);
        let quadratic = shared(QuadraticCongruential::new(
            params.quadratic.modulus,
            params.quadratic.multiplier,
            params.quadratic.increment,
            params.quadratic.quadratic,
            seed,
        )?);
        let fibonacci = Fibonacci::new(params.fibonacci.modulus, seed)?;
        let inverse = InverseCongruential::new(
            params.inverse.modulus,
            params.inverse.multiplier,
            params.inverse.increment,
            params.inverse.seed,
        )?;
        let combine = CombineGenerator::new(linear.clone(), quadratic.clone());

        let source = SharedSource::from_seed(seed);
        let three_sigma = ThreeSigma::new(
            params.three_sigma.mean,
            params.three_sigma.std_dev,
            source.clone(),
        )?;
        let polar = Polar::new(source);

        info!(seed, inverse_seed = params.inverse.seed, "Laboratory initialised");

        Ok(Self {
            seed,
            linear,
            quadratic,
            fibonacci,
            inverse,
            combine,
            three_sigma,
            polar,
        })
    }

    /// Constructs the laboratory with a seed taken from the wall clock.
    pub fn from_wall_clock(params: &LabParameters) -> Result<Self, LabError> {
        Self::new(params, wall_clock_seed())
    }

    /// Seed shared by the time-seeded generators.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Mutable access to one generator.
    pub fn generator_mut(&mut self, kind: GeneratorKind) -> &mut dyn Generator {
        match kind {
            GeneratorKind::Linear => &mut self.linear,
            GeneratorKind::Quadratic => &mut self.quadratic,
            GeneratorKind::Fibonacci => &mut self.fibonacci,
            GeneratorKind::Inverse => &mut self.inverse,
            GeneratorKind::Combine => &mut self.combine,
            GeneratorKind::ThreeSigma => &mut self.three_sigma,
            GeneratorKind::Polar => &mut self.polar,
        }
    }

    /// Draws `n` values from the chosen generator.
    ///
    /// # Errors
    ///
    /// `LabError::SampleCountTooLarge` when `n` exceeds [`MAX_SAMPLE_COUNT`].
    pub fn sample(&mut self, kind: GeneratorKind, n: usize) -> Result<Vec<f64>, LabError> {
        if n > MAX_SAMPLE_COUNT {
            return Err(LabError::SampleCountTooLarge {
                count: n,
                max: MAX_SAMPLE_COUNT,
            });
        }
        debug!(generator = kind.name(), n, "Sampling");
        Ok(self.generator_mut(kind).sample(n))
    }
}

impl fmt::Debug for Laboratory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Laboratory")
            .field("seed", &self.seed)
            .field("linear", &self.linear)
            .field("quadratic", &self.quadratic)
            .field("fibonacci", &self.fibonacci)
            .field("inverse", &self.inverse)
            .field("three_sigma", &self.three_sigma)
            .field("polar", &self.polar)
            .finish_non_exhaustive()
    }
}
