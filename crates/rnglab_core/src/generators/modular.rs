//! Modular arithmetic shared by the congruential generators.
//!
//! Products are formed in `u128` so no intermediate overflows for any `u64`
//! modulus.

/// `(a * b) mod m`. `m` must be non-zero.
#[inline]
pub(crate) fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

/// `(a + b) mod m`. `m` must be non-zero.
#[inline]
pub(crate) fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) + u128::from(b)) % u128::from(m)) as u64
}

/// Modular inverse of `a` modulo `m` via the extended Euclidean algorithm.
///
/// Correct whenever `gcd(a, m) == 1` and `m > 1`. For any other input the
/// result is unspecified but the routine still returns: `a == 0` yields `1`,
/// and a shared factor ends the loop early on a zero divisor. Callers that
/// need to detect the degenerate case should use [`checked_mod_inverse`].
///
/// The Bezout coefficient can go negative mid-loop, so the bookkeeping runs
/// in `i128` and a negative result is corrected by adding `m` once.
///
/// ```rust
/// use rnglab_core::generators::mod_inverse;
///
/// assert_eq!(mod_inverse(3, 11), 4);
/// assert_eq!((16_807 * mod_inverse(16_807, 2_147_483_647)) % 2_147_483_647, 1);
/// ```
pub fn mod_inverse(a: u64, m: u64) -> u64 {
    let m0 = i128::from(m);
    let mut a = i128::from(a);
    let mut m = m0;
    let mut x0: i128 = 0;
    let mut x1: i128 = 1;

    while a > 1 && m != 0 {
        let q = a / m;
        let t = m;
        m = a % m;
        a = t;
        let t = x0;
        x0 = x1 - q * x0;
        x1 = t;
    }

    if x1 < 0 {
        x1 += m0;
    }

    x1 as u64
}

/// Modular inverse that reports the non-coprime case.
///
/// Returns `None` when `m < 2` or `gcd(a, m) != 1`.
///
/// ```rust
/// use rnglab_core::generators::checked_mod_inverse;
///
/// assert_eq!(checked_mod_inverse(3, 11), Some(4));
/// assert_eq!(checked_mod_inverse(4, 6), None);
/// assert_eq!(checked_mod_inverse(0, 7), None);
/// ```
pub fn checked_mod_inverse(a: u64, m: u64) -> Option<u64> {
    if m < 2 || gcd(a, m) != 1 {
        return None;
    }
    Some(mod_inverse(a % m, m))
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
