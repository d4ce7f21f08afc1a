//! Process-wide shared random source for the normal generators.
//!
//! This module provides [`RandomSource`], a seeded PRNG wrapper, and
//! [`SharedSource`], a cloneable handle onto one `RandomSource`. Every clone
//! of a `SharedSource` draws from the same underlying stream, so two
//! generators constructed over clones of one handle are *not* independent:
//! their draws interleave. The wiring is explicit at construction time rather
//! than hidden behind global state.
//!
//! The handle is `Rc`-based and therefore single-threaded. A concurrent
//! driver would need to serialise access behind a lock instead.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

/// Returns a seed derived from the wall clock, in whole seconds.
///
/// Two calls within the same second return the same seed.
pub fn wall_clock_seed() -> u64 {
    chrono::Utc::now().timestamp().unsigned_abs()
}

/// Seeded uniform random source.
///
/// # Examples
///
/// ```rust
/// use rnglab_core::source::RandomSource;
///
/// let mut source = RandomSource::from_seed(42);
/// let u = source.gen_uniform();
/// assert!((0.0..1.0).contains(&u));
///
/// let v = source.gen_symmetric();
/// assert!((-1.0..1.0).contains(&v));
/// ```
#[derive(Debug, Clone)]
pub struct RandomSource {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// Distribution over [-1, 1) for the polar method.
    symmetric: Uniform<f64>,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl RandomSource {
    /// Creates a new source initialised with the given seed.
    ///
    /// The same seed always produces the same sequence.
    ///
    /// ```rust
    /// use rnglab_core::source::RandomSource;
    ///
    /// let mut a = RandomSource::from_seed(12345);
    /// let mut b = RandomSource::from_seed(12345);
    /// assert_eq!(a.gen_uniform(), b.gen_uniform());
    /// ```
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            symmetric: Uniform::new(-1.0, 1.0),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single uniform value in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Generates a single uniform value in [-1, 1).
    #[inline]
    pub fn gen_symmetric(&mut self) -> f64 {
        self.symmetric.sample(&mut self.inner)
    }
}

/// Cloneable handle onto one [`RandomSource`].
///
/// Clones share the stream:
///
/// ```rust
/// use rnglab_core::source::{RandomSource, SharedSource};
///
/// let shared = SharedSource::from_seed(7);
/// let other = shared.clone();
///
/// let mut reference = RandomSource::from_seed(7);
/// assert_eq!(shared.gen_uniform(), reference.gen_uniform());
/// // The clone continues where the first handle left off.
/// assert_eq!(other.gen_uniform(), reference.gen_uniform());
/// ```
#[derive(Debug, Clone)]
pub struct SharedSource {
    inner: Rc<RefCell<RandomSource>>,
}

impl SharedSource {
    /// Wraps an existing source.
    pub fn new(source: RandomSource) -> Self {
        Self {
            inner: Rc::new(RefCell::new(source)),
        }
    }

    /// Creates a shared source from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(RandomSource::from_seed(seed))
    }

    /// Returns the seed of the underlying source.
    pub fn seed(&self) -> u64 {
        self.inner.borrow().seed()
    }

    /// Draws a uniform value in [0, 1) from the shared stream.
    #[inline]
    pub fn gen_uniform(&self) -> f64 {
        self.inner.borrow_mut().gen_uniform()
    }

    /// Draws a uniform value in [-1, 1) from the shared stream.
    #[inline]
    pub fn gen_symmetric(&self) -> f64 {
        self.inner.borrow_mut().gen_symmetric()
    }

    /// Returns `true` when both handles refer to the same stream.
    pub fn same_stream(&self, other: &SharedSource) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
