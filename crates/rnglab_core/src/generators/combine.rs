//! Subtraction-combine of two generators.

use super::Generator;

/// Combines two generators: `d = X.next() - Y.next()`, plus `1.0` if negative.
///
/// Both inputs are drawn once per call, `X` first. For inputs in [0, 1) the
/// output is in [0, 1).
///
/// The combiner does not decide ownership. Over `&mut G` borrows it cannot
/// outlive the generators it reads from; over
/// [`SharedGenerator`](super::SharedGenerator) handles the underlying
/// generators remain sampleable by their other owners, and every such draw
/// advances the same state the combiner reads.
#[derive(Debug, Clone)]
pub struct CombineGenerator<X, Y> {
    x: X,
    y: Y,
}

impl<X: Generator, Y: Generator> CombineGenerator<X, Y> {
    /// Combines `x` and `y`.
    pub fn new(x: X, y: Y) -> Self {
        Self { x, y }
    }
}

impl<X: Generator, Y: Generator> Generator for CombineGenerator<X, Y> {
    #[inline]
    fn next(&mut self) -> f64 {
        let x = self.x.next();
        let y = self.y.next();
        let mut difference = x - y;
        if difference < 0.0 {
            difference += 1.0;
        }
        difference
    }
}
