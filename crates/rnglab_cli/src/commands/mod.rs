//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. The shared sample
//! report lives here.

pub mod interactive;
pub mod list;
pub mod sample;

use std::io::Write;

use rnglab_core::{Histogram, SampleStats};

/// Writes the generated values, the histogram table and summary statistics.
pub(crate) fn write_report<W: Write>(
    out: &mut W,
    samples: &[f64],
    histogram: &Histogram,
    show_values: bool,
) -> std::io::Result<()> {
    if show_values {
        let values: Vec<String> = samples.iter().map(|v| v.to_string()).collect();
        writeln!(out, "Random Values: {}", values.join(", "))?;
    }

    write!(out, "{}", histogram)?;
    if histogram.dropped() > 0 {
        writeln!(
            out,
            "({} of {} values outside [{}; {}])",
            histogram.dropped(),
            histogram.total(),
            histogram.min(),
            histogram.max()
        )?;
    }

    match SampleStats::from_samples(samples) {
        Some(stats) => writeln!(out, "Statistics: {}", stats),
        None => writeln!(out, "Statistics: no samples"),
    }
}
