//! One-shot sampling command.

use std::io::{self, Write};

use rnglab_core::{GeneratorKind, Histogram, LabError, Laboratory};
use tracing::info;

use crate::config::LabConfig;
use crate::Result;

/// Parameters of a one-shot sampling run.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRequest {
    /// Generator to draw from
    pub generator: GeneratorKind,
    /// Number of values
    pub count: usize,
    /// Number of histogram intervals
    pub intervals: usize,
    /// Histogram lower bound override
    pub min: Option<f64>,
    /// Histogram upper bound override
    pub max: Option<f64>,
    /// Omit the list of generated values
    pub quiet: bool,
}

/// Runs the sample command against stdout.
pub fn run(lab: &mut Laboratory, config: &LabConfig, request: &SampleRequest) -> Result<()> {
    let stdout = io::stdout();
    execute(lab, config, request, &mut stdout.lock())
}

/// Draws the samples, bins them and writes the report to `out`.
pub fn execute<W: Write>(
    lab: &mut Laboratory,
    config: &LabConfig,
    request: &SampleRequest,
    out: &mut W,
) -> Result<()> {
    let (default_min, default_max) = config.histogram_range(request.generator);
    let min = request.min.unwrap_or(default_min);
    let max = request.max.unwrap_or(default_max);

    info!(
        generator = request.generator.name(),
        count = request.count,
        intervals = request.intervals,
        min,
        max,
        "Sampling"
    );

    let samples = lab.sample(request.generator, request.count)?;
    let histogram =
        Histogram::build(&samples, min, max, request.intervals).map_err(LabError::from)?;

    super::write_report(out, &samples, &histogram, !request.quiet)?;
    out.flush()?;
    Ok(())
}
