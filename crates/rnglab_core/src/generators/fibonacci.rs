//! Additive (Fibonacci) generator.

use super::modular::add_mod;
use super::Generator;
use crate::error::GeneratorError;

/// Fibonacci generator: `next = (x1 + x2) mod m`, then shift the pair.
///
/// The trailing terms start at `(0, 1)`. A non-zero seed replaces `x1`; a
/// zero seed cannot be told apart from "no seed" and keeps `x1 = 0`.
///
/// # Examples
///
/// ```rust
/// use rnglab_core::generators::{Fibonacci, Generator};
///
/// let mut fib = Fibonacci::new(10, 0).unwrap();
/// let values: Vec<f64> = fib.sample(5);
/// assert_eq!(values, vec![0.1, 0.2, 0.3, 0.5, 0.8]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fibonacci {
    modulus: u64,
    x1: u64,
    x2: u64,
}

impl Fibonacci {
    /// Creates a generator over `modulus`, optionally seeding the first term.
    ///
    /// # Errors
    ///
    /// `GeneratorError::ZeroModulus` when `modulus == 0`.
    pub fn new(modulus: u64, seed: u64) -> Result<Self, GeneratorError> {
        if modulus == 0 {
            return Err(GeneratorError::ZeroModulus {
                generator: "fibonacci",
            });
        }
        // x1 defaults to 0, so a zero seed is the same as no seed.
        Ok(Self {
            modulus,
            x1: seed,
            x2: 1,
        })
    }

    /// The two trailing terms `(x1, x2)`.
    pub fn terms(&self) -> (u64, u64) {
        (self.x1, self.x2)
    }
}

impl Generator for Fibonacci {
    #[inline]
    fn next(&mut self) -> f64 {
        let next = add_mod(self.x1, self.x2, self.modulus);
        self.x1 = self.x2;
        self.x2 = next;
        next as f64 / self.modulus as f64
    }
}
