//! # Generator Family
//!
//! This module defines the [`Generator`] capability and its seven classical
//! implementations:
//!
//! - [`LinearCongruential`]: `x = (a*x + c) mod m`
//! - [`QuadraticCongruential`]: `x = (d*x^2 + a*x + c) mod m`
//! - [`Fibonacci`]: additive recurrence over the two trailing terms
//! - [`InverseCongruential`]: `x = (a*inv(x) + c) mod p`
//! - [`CombineGenerator`]: subtraction-combine of two generators, mod 1
//! - [`ThreeSigma`]: Irwin-Hall approximation of a normal variate
//! - [`Polar`]: Marsaglia's polar method, exact standard normals in pairs
//!
//! ## Composition
//!
//! `Generator` is implemented for `&mut G`, `Box<G>` and `Rc<RefCell<G>>`.
//! A combiner over borrows cannot outlive the generators it reads from (the
//! borrow checker enforces it); a combiner over [`SharedGenerator`] handles
//! lets the owner keep sampling the underlying generators directly.
//!
//! ```rust
//! use rnglab_core::generators::{CombineGenerator, Generator, LinearCongruential};
//!
//! let mut x = LinearCongruential::new(11, 2, 0, 1).unwrap();
//! let mut y = LinearCongruential::new(13, 2, 0, 1).unwrap();
//!
//! let mut combined = CombineGenerator::new(&mut x, &mut y);
//! let value = combined.next();
//! assert!((0.0..1.0).contains(&value));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

mod combine;
mod fibonacci;
mod inverse;
mod linear;
mod modular;
mod polar;
mod quadratic;
mod three_sigma;

pub use combine::CombineGenerator;
pub use fibonacci::Fibonacci;
pub use inverse::InverseCongruential;
pub use linear::LinearCongruential;
pub use modular::{checked_mod_inverse, mod_inverse};
pub use polar::{Polar, SparePolicy};
pub use quadratic::QuadraticCongruential;
pub use three_sigma::{ThreeSigma, IRWIN_HALL_TERMS};

/// Capability shared by every generator: produce the next value.
///
/// Calls are not idempotent; each call advances internal state. Uniform
/// generators return values in [0, 1); normal generators return values on
/// the real line.
pub trait Generator {
    /// Advances the recurrence and returns the next value.
    fn next(&mut self) -> f64;

    /// Fills the buffer with successive values.
    ///
    /// Empty buffers are a no-op.
    fn fill(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next();
        }
    }

    /// Draws `n` successive values in insertion order.
    fn sample(&mut self, n: usize) -> Vec<f64> {
        let mut samples = vec![0.0; n];
        self.fill(&mut samples);
        samples
    }
}

/// Generator handle that several owners can sample in turn.
pub type SharedGenerator<G> = Rc<RefCell<G>>;

/// Wraps a generator in a [`SharedGenerator`] handle.
pub fn shared<G: Generator>(generator: G) -> SharedGenerator<G> {
    Rc::new(RefCell::new(generator))
}

impl<G: Generator + ?Sized> Generator for &mut G {
    #[inline]
    fn next(&mut self) -> f64 {
        G::next(&mut **self)
    }
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    #[inline]
    fn next(&mut self) -> f64 {
        G::next(&mut **self)
    }
}

impl<G: Generator + ?Sized> Generator for Rc<RefCell<G>> {
    #[inline]
    fn next(&mut self) -> f64 {
        self.borrow_mut().next()
    }
}
