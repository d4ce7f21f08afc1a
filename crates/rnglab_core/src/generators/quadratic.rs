//! Quadratic congruential generator.

use super::modular::{add_mod, mul_mod};
use super::Generator;
use crate::error::GeneratorError;

/// Quadratic congruential generator: `x = (d*x^2 + a*x + c) mod m`.
///
/// Every term is reduced modulo `m` before it is combined, so the recurrence
/// is evaluated exactly for any `u64` parameters.
///
/// # Examples
///
/// ```rust
/// use rnglab_core::generators::{Generator, QuadraticCongruential};
///
/// let mut qcg = QuadraticCongruential::new(7, 1, 0, 1, 2).unwrap();
/// // 4 + 2 = 6
/// assert_eq!(qcg.next(), 6.0 / 7.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadraticCongruential {
    modulus: u64,
    multiplier: u64,
    increment: u64,
    quadratic: u64,
    state: u64,
}

impl QuadraticCongruential {
    /// Creates a generator with linear coefficient `a`, increment `c` and
    /// quadratic coefficient `d`.
    ///
    /// # Errors
    ///
    /// `GeneratorError::ZeroModulus` when `modulus == 0`.
    pub fn new(
        modulus: u64,
        multiplier: u64,
        increment: u64,
        quadratic: u64,
        seed: u64,
    ) -> Result<Self, GeneratorError> {
        if modulus == 0 {
            return Err(GeneratorError::ZeroModulus {
                generator: "quadratic",
            });
        }
        Ok(Self {
            modulus,
            multiplier,
            increment,
            quadratic,
            state: seed,
        })
    }

    /// Current raw state `x`.
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl Generator for QuadraticCongruential {
    fn next(&mut self) -> f64 {
        let m = self.modulus;
        let x = self.state % m;

        let square = mul_mod(self.quadratic % m, mul_mod(x, x, m), m);
        let linear = mul_mod(self.multiplier % m, x, m);
        self.state = add_mod(add_mod(square, linear, m), self.increment, m);

        self.state as f64 / m as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_recurrence() {
        // x = (2x^2 + 3x + 1) mod 13, seed 1
        let mut qcg = QuadraticCongruential::new(13, 3, 1, 2, 1).unwrap();
        let mut x: u64 = 1;
        for _ in 0..20 {
            x = (2 * x * x + 3 * x + 1) % 13;
            assert_eq!(qcg.next(), x as f64 / 13.0);
        }
    }

    #[test]
    fn test_zero_quadratic_degenerates_to_linear() {
        let mut qcg = QuadraticCongruential::new(11, 2, 0, 0, 1).unwrap();
        assert_eq!(qcg.next(), 2.0 / 11.0);
        assert_eq!(qcg.next(), 4.0 / 11.0);
    }

    #[test]
    fn test_large_state_is_exact() {
        let m = 2_147_483_647u64;
        let seed = m - 1;
        let mut qcg = QuadraticCongruential::new(m, 40_014, 0, 53_668, seed).unwrap();

        let x = u128::from(seed);
        let expected = (53_668 * x * x + 40_014 * x) % u128::from(m);
        qcg.next();
        assert_eq!(u128::from(qcg.state()), expected);
    }

    #[test]
    fn test_zero_modulus_rejected() {
        assert!(QuadraticCongruential::new(0, 1, 1, 1, 1).is_err());
    }
}
