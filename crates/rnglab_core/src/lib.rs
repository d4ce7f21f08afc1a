//! # rnglab_core: Pseudo-Random Generator Laboratory
//!
//! ## Layer 1 (Kernel) Role
//!
//! rnglab_core provides everything with non-trivial numeric logic:
//! - The [`Generator`] capability and seven classical algorithms (`generators`)
//! - The process-wide shared random source (`source`)
//! - Histogram binning of a finite sample sequence (`histogram`)
//! - Summary statistics of a sample sequence (`stats`)
//! - The generator catalogue and the wired-up laboratory (`lab`)
//!
//! The crate performs no console I/O; the `rnglab_cli` crate owns the menu.
//!
//! ## Usage Examples
//!
//! ```rust
//! use rnglab_core::generators::{Generator, LinearCongruential};
//! use rnglab_core::histogram::Histogram;
//!
//! let mut lcg = LinearCongruential::new(11, 2, 0, 1).unwrap();
//! let samples = lcg.sample(10);
//!
//! let histogram = Histogram::build(&samples, 0.0, 1.0, 4).unwrap();
//! assert_eq!(histogram.bins().len(), 4);
//! assert_eq!(histogram.total(), 10);
//! ```
//!
//! ## British English Convention
//!
//! Documentation uses British English spelling ("initialise", "behaviour").

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod generators;
pub mod histogram;
pub mod lab;
pub mod source;
pub mod stats;

pub use error::{GeneratorError, HistogramError, LabError};
pub use generators::Generator;
pub use histogram::Histogram;
pub use lab::{GeneratorKind, LabParameters, Laboratory, MAX_SAMPLE_COUNT};
pub use source::{RandomSource, SharedSource};
pub use stats::SampleStats;
