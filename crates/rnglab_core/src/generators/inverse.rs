//! Inverse congruential generator.

use super::modular::{add_mod, mod_inverse, mul_mod};
use super::Generator;
use crate::error::GeneratorError;

/// Inverse congruential generator: `x = (a * inv(x) + c) mod p`.
///
/// `p` is treated as prime. The inverse is computed by [`mod_inverse`],
/// which assumes `gcd(x, p) == 1`.
///
/// # Known gap
///
/// No coprimality check is made. If the state shares a factor with `p`
/// (always true of `x == 0`) the inverse is not a true inverse: `inv(0)`
/// evaluates to `1`, and other shared factors yield an unspecified value.
/// Sampling still continues without error. With a prime `p` only the zero
/// state is affected.
///
/// # Examples
///
/// ```rust
/// use rnglab_core::generators::{Generator, InverseCongruential};
///
/// let mut icg = InverseCongruential::new(11, 2, 3, 1).unwrap();
/// // inv(1) = 1, so x = 2*1 + 3 = 5
/// assert_eq!(icg.next(), 5.0 / 11.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InverseCongruential {
    prime: u64,
    multiplier: u64,
    increment: u64,
    state: u64,
}

impl InverseCongruential {
    /// Creates a generator over the (assumed prime) modulus `prime`.
    ///
    /// # Errors
    ///
    /// `GeneratorError::ZeroModulus` when `prime == 0`.
    pub fn new(
        prime: u64,
        multiplier: u64,
        increment: u64,
        seed: u64,
    ) -> Result<Self, GeneratorError> {
        if prime == 0 {
            return Err(GeneratorError::ZeroModulus { generator: "inverse" });
        }
        Ok(Self {
            prime,
            multiplier,
            increment,
            state: seed,
        })
    }

    /// Current raw state `x`.
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl Generator for InverseCongruential {
    fn next(&mut self) -> f64 {
        let p = self.prime;
        let inverse = mod_inverse(self.state, p);
        self.state = add_mod(mul_mod(self.multiplier, inverse, p), self.increment, p);
        self.state as f64 / p as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_step(x: u64, a: u64, c: u64, p: u64) -> u64 {
        let inv = (1..p).find(|&y| (x * y) % p == 1).unwrap_or(1);
        (a * inv + c) % p
    }

    #[test]
    fn test_matches_brute_force_inverse() {
        let (p, a, c) = (31, 5, 7);
        let mut icg = InverseCongruential::new(p, a, c, 3).unwrap();
        let mut x = 3;

        for _ in 0..60 {
            x = reference_step(x, a, c, p);
            assert_eq!(icg.next(), x as f64 / p as f64);
        }
    }

    #[test]
    fn test_zero_state_uses_unit_inverse() {
        // x = 0 has no inverse; the routine falls back to 1.
        let mut icg = InverseCongruential::new(11, 2, 3, 0).unwrap();
        assert_eq!(icg.next(), 5.0 / 11.0);
    }

    #[test]
    fn test_default_configuration_stays_in_range() {
        let mut icg = InverseCongruential::new(2_147_483_647, 16_805, 10, 1).unwrap();
        for _ in 0..10_000 {
            let value = icg.next();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_zero_modulus_rejected() {
        assert!(InverseCongruential::new(0, 1, 1, 1).is_err());
    }
}
