//! Linear congruential generator.

use super::modular::{add_mod, mul_mod};
use super::Generator;
use crate::error::GeneratorError;

/// Linear congruential generator: `x = (a*x + c) mod m`, returning `x / m`.
///
/// No period validation is performed; full period depends on the caller
/// choosing `a`, `c` and `m` accordingly. With `c == 0` a zero seed stays at
/// zero forever.
///
/// # Examples
///
/// ```rust
/// use rnglab_core::generators::{Generator, LinearCongruential};
///
/// let mut lcg = LinearCongruential::new(11, 2, 0, 1).unwrap();
/// assert_eq!(lcg.next(), 2.0 / 11.0);
/// assert_eq!(lcg.next(), 4.0 / 11.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearCongruential {
    modulus: u64,
    multiplier: u64,
    increment: u64,
    state: u64,
}

impl LinearCongruential {
    /// Park-Miller modulus `2^31 - 1`.
    pub const PARK_MILLER_MODULUS: u64 = 2_147_483_647;
    /// Park-Miller "minimal standard" multiplier.
    pub const PARK_MILLER_MULTIPLIER: u64 = 16_807;

    /// Creates a generator from its recurrence parameters and seed.
    ///
    /// # Errors
    ///
    /// `GeneratorError::ZeroModulus` when `modulus == 0`.
    pub fn new(
        modulus: u64,
        multiplier: u64,
        increment: u64,
        seed: u64,
    ) -> Result<Self, GeneratorError> {
        if modulus == 0 {
            return Err(GeneratorError::ZeroModulus { generator: "linear" });
        }
        Ok(Self {
            modulus,
            multiplier,
            increment,
            state: seed,
        })
    }

    /// Park-Miller configuration (`m = 2^31 - 1`, `a = 16807`, `c = 0`).
    pub fn park_miller(seed: u64) -> Self {
        Self {
            modulus: Self::PARK_MILLER_MODULUS,
            multiplier: Self::PARK_MILLER_MULTIPLIER,
            increment: 0,
            state: seed,
        }
    }

    /// Current raw state `x`.
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl Generator for LinearCongruential {
    #[inline]
    fn next(&mut self) -> f64 {
        let m = self.modulus;
        self.state = add_mod(mul_mod(self.multiplier, self.state, m), self.increment, m);
        self.state as f64 / m as f64
    }
}
