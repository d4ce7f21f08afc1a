//! List command: the generator catalogue with histogram ranges.

use std::io::{self, Write};

use rnglab_core::GeneratorKind;

use crate::config::LabConfig;
use crate::Result;

/// Runs the list command against stdout.
pub fn run(config: &LabConfig) -> Result<()> {
    let stdout = io::stdout();
    execute(config, &mut stdout.lock())
}

/// Writes one line per generator.
pub fn execute<W: Write>(config: &LabConfig, out: &mut W) -> Result<()> {
    writeln!(out, "{:<3} {:<18} {:<12} {:<9} Range", "#", "Generator", "Name", "Kind")?;
    for kind in GeneratorKind::ALL {
        let (min, max) = config.histogram_range(kind);
        let family = if kind.is_normal() { "normal" } else { "uniform" };
        writeln!(
            out,
            "{:<3} {:<18} {:<12} {:<9} [{}; {}]",
            kind.ordinal(),
            kind.label(),
            kind.name(),
            family,
            min,
            max
        )?;
    }
    Ok(())
}
