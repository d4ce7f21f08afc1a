//! Integration tests for the generator family and histogram reporter.
//!
//! Exercises the public API end to end: deterministic sequences, output
//! ranges, the combine identity, normal moments and histogram edge cases.

use approx::assert_relative_eq;
use proptest::prelude::*;
use rnglab_core::generators::{
    checked_mod_inverse, mod_inverse, CombineGenerator, Fibonacci, Generator, InverseCongruential,
    LinearCongruential, Polar, QuadraticCongruential, ThreeSigma,
};
use rnglab_core::histogram::Histogram;
use rnglab_core::lab::{GeneratorKind, LabParameters, Laboratory};
use rnglab_core::source::{RandomSource, SharedSource};
use rnglab_core::stats::SampleStats;

const M: u64 = 2_147_483_647;

fn in_unit_interval(value: f64) -> bool {
    (0.0..1.0).contains(&value)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_linear_range(seed in 0u64..M) {
        let mut generator = LinearCongruential::new(M, 16_807, 0, seed).unwrap();
        for _ in 0..50 {
            prop_assert!(in_unit_interval(generator.next()));
        }
    }

    #[test]
    fn test_quadratic_range(seed in 0u64..M) {
        let mut generator = QuadraticCongruential::new(M, 40_014, 0, 53_668, seed).unwrap();
        for _ in 0..50 {
            prop_assert!(in_unit_interval(generator.next()));
        }
    }

    #[test]
    fn test_fibonacci_range(seed in 0u64..M) {
        let mut generator = Fibonacci::new(M, seed).unwrap();
        for _ in 0..50 {
            prop_assert!(in_unit_interval(generator.next()));
        }
    }

    #[test]
    fn test_inverse_range(seed in 0u64..M) {
        let mut generator = InverseCongruential::new(M, 16_805, 10, seed).unwrap();
        for _ in 0..50 {
            prop_assert!(in_unit_interval(generator.next()));
        }
    }

    #[test]
    fn test_mod_inverse_identity(x in 1u64..M) {
        let inv = mod_inverse(x, M);
        prop_assert_eq!((u128::from(x) * u128::from(inv)) % u128::from(M), 1);
        prop_assert_eq!(checked_mod_inverse(x, M), Some(inv));
    }
}

#[test]
fn test_linear_reference_sequence() {
    let mut generator = LinearCongruential::new(11, 2, 0, 1).unwrap();
    let values = generator.sample(5);
    let expected: Vec<f64> = [2.0, 4.0, 8.0, 5.0, 10.0].iter().map(|x| x / 11.0).collect();
    assert_eq!(values, expected);
}

#[test]
fn test_fibonacci_reference_sequence() {
    let mut generator = Fibonacci::new(10, 0).unwrap();
    let values = generator.sample(8);
    let expected: Vec<f64> = [1.0, 2.0, 3.0, 5.0, 8.0, 3.0, 1.0, 4.0]
        .iter()
        .map(|x| x / 10.0)
        .collect();
    assert_eq!(values, expected);
}

#[test]
fn test_combine_equals_difference_mod_one() {
    let mut x_ref = LinearCongruential::park_miller(2024);
    let mut y_ref = Fibonacci::new(M, 2024).unwrap();
    let mut combined = CombineGenerator::new(
        LinearCongruential::park_miller(2024),
        Fibonacci::new(M, 2024).unwrap(),
    );

    for _ in 0..100 {
        let d = x_ref.next() - y_ref.next();
        let expected = if d < 0.0 { d + 1.0 } else { d };
        assert_eq!(combined.next(), expected);
    }
}

#[test]
fn test_polar_moments() {
    let mut polar = Polar::new(SharedSource::from_seed(31_337));
    let samples = polar.sample(10_000);
    let stats = SampleStats::from_samples(&samples).unwrap();

    assert!(stats.mean.abs() < 0.05, "mean {}", stats.mean);
    assert!((stats.variance - 1.0).abs() < 0.05, "variance {}", stats.variance);
}

#[test]
fn test_shared_source_interleaves_normal_generators() {
    let source = SharedSource::from_seed(5);
    let mut three_sigma = ThreeSigma::new(0.0, 1.0, source.clone()).unwrap();
    let mut polar = Polar::new(source);

    let mut reference = RandomSource::from_seed(5);
    let sum: f64 = (0..12).map(|_| reference.gen_uniform()).sum();
    assert_relative_eq!(three_sigma.next(), sum - 6.0, epsilon = 1e-12);

    // Polar starts where Three-sigma stopped.
    let mut skipped = RandomSource::from_seed(5);
    for _ in 0..12 {
        skipped.gen_uniform();
    }
    let mut fresh = Polar::new(SharedSource::new(skipped));
    assert_eq!(polar.next(), fresh.next());
}

#[test]
fn test_histogram_reference_samples() {
    let histogram = Histogram::build(&[0.0, 0.25, 0.5, 0.75, 1.0], 0.0, 1.0, 4).unwrap();
    let frequencies: Vec<f64> = histogram.rows().iter().map(|r| r.frequency).collect();

    assert_relative_eq!(frequencies[0], 0.2);
    assert_relative_eq!(frequencies[1], 0.2);
    assert_relative_eq!(frequencies[2], 0.2);
    assert_relative_eq!(frequencies[3], 0.4);
    assert_relative_eq!(frequencies.iter().sum::<f64>(), 1.0);
}

#[test]
fn test_histogram_empty_samples() {
    let histogram = Histogram::build(&[], -3.0, 3.0, 7).unwrap();
    assert!(histogram.rows().iter().all(|r| r.frequency == 0.0));
}

#[test]
fn test_laboratory_histograms_cover_samples() {
    let mut lab = Laboratory::new(&LabParameters::default(), 1_700_000_000).unwrap();

    for kind in GeneratorKind::ALL {
        let samples = lab.sample(kind, 1_000).unwrap();
        let (min, max) = kind.default_range();
        let histogram = Histogram::build(&samples, min, max, 10).unwrap();
        let binned: usize = histogram.bins().iter().map(|b| b.count).sum();

        assert_eq!(histogram.total(), 1_000);
        if kind.is_normal() {
            // Roughly 0.27% of a standard normal lies outside [-3, 3].
            assert!(histogram.dropped() < 20, "{} dropped {}", kind, histogram.dropped());
        } else {
            assert_eq!(binned, 1_000, "{} dropped samples", kind);
        }
    }
}
