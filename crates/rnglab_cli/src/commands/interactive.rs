//! Interactive menu session.
//!
//! Loop: print the menu, read a generator ordinal (`0` exits), read the
//! number of values and the number of histogram intervals, then print the
//! report over the generator's configured range. Invalid input prints a
//! message and returns to the menu; end of input ends the session.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

use rnglab_core::{GeneratorKind, Histogram, LabError, Laboratory, MAX_SAMPLE_COUNT};
use tracing::{debug, warn};

use crate::config::LabConfig;
use crate::Result;

/// Runs the interactive session on stdin/stdout.
pub fn run(lab: &mut Laboratory, config: &LabConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(lab, config, stdin.lock(), &mut stdout.lock())
}

/// Runs the interactive session on arbitrary reader/writer.
pub fn run_session<R: BufRead, W: Write>(
    lab: &mut Laboratory,
    config: &LabConfig,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    loop {
        write_menu(out)?;
        let Some(choice) = read_token(&mut input)? else {
            debug!("End of input at menu");
            break;
        };

        let kind = match choice.parse::<usize>() {
            Ok(0) => break,
            Ok(ordinal) => GeneratorKind::from_ordinal(ordinal),
            Err(_) => Err(LabError::UnknownGenerator(choice.clone())),
        };
        let kind = match kind {
            Ok(kind) => kind,
            Err(err) => {
                warn!(input = %choice, error = %err, "Invalid menu choice");
                writeln!(
                    out,
                    "Invalid choice. Please select a valid generator or 0 to exit."
                )?;
                continue;
            }
        };

        let count = match prompt_number(
            &mut input,
            out,
            "Enter the number of random values to generate: ",
            0..=MAX_SAMPLE_COUNT,
        )? {
            Answer::Value(n) => n,
            Answer::Invalid => continue,
            Answer::EndOfInput => break,
        };
        let intervals = match prompt_number(
            &mut input,
            out,
            "Enter the number of intervals for histogram: ",
            1..=usize::MAX,
        )? {
            Answer::Value(n) => n,
            Answer::Invalid => continue,
            Answer::EndOfInput => break,
        };

        let samples = lab.sample(kind, count)?;
        let (min, max) = config.histogram_range(kind);
        let histogram = Histogram::build(&samples, min, max, intervals).map_err(LabError::from)?;
        super::write_report(out, &samples, &histogram, true)?;
    }

    out.flush()?;
    Ok(())
}

fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Choose a generator")?;
    for kind in GeneratorKind::ALL {
        writeln!(out, "{}: {}", kind.ordinal(), kind.label())?;
    }
    writeln!(out, "0: Exit")?;
    out.flush()
}

/// Outcome of a numeric prompt.
enum Answer {
    Value(usize),
    Invalid,
    EndOfInput,
}

/// Prompts for a number within `bounds`.
fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    bounds: RangeInclusive<usize>,
) -> io::Result<Answer> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let Some(token) = read_token(input)? else {
        return Ok(Answer::EndOfInput);
    };
    match token.parse::<usize>() {
        Ok(n) if bounds.contains(&n) => Ok(Answer::Value(n)),
        _ => {
            let (minimum, maximum) = (*bounds.start(), *bounds.end());
            warn!(input = %token, minimum, maximum, "Invalid number");
            if maximum == usize::MAX {
                writeln!(out, "Invalid number '{}': expected an integer >= {}.", token, minimum)?;
            } else {
                writeln!(
                    out,
                    "Invalid number '{}': expected an integer between {} and {}.",
                    token, minimum, maximum
                )?;
            }
            Ok(Answer::Invalid)
        }
    }
}

/// Reads the next non-blank line, trimmed. `None` at end of input.
fn read_token<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let token = line.trim();
        if !token.is_empty() {
            return Ok(Some(token.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rnglab_core::LabParameters;
    use std::io::Cursor;

    fn session(script: &str) -> String {
        let mut lab = Laboratory::new(&LabParameters::default(), 1).unwrap();
        let mut out = Vec::new();
        run_session(&mut lab, &LabConfig::default(), Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let text = session("0\n");
        assert!(text.starts_with("Choose a generator\n1: Linear\n"));
        assert!(text.contains("7: Polar coordinates\n0: Exit\n"));
        assert_eq!(text.matches("Choose a generator").count(), 1);
    }

    #[test]
    fn test_linear_run() {
        let text = session("1\n3\n2\n0\n");
        let expected = format!(
            "Random Values: {}, {}, {}",
            16_807.0 / 2_147_483_647.0,
            282_475_249.0 / 2_147_483_647.0,
            1_622_650_073.0 / 2_147_483_647.0
        );

        assert!(text.contains(&expected), "missing values in:\n{}", text);
        assert!(text.contains("Interval   Frequency\n[0; 0.5]    0.6666666666666666\n"));
        assert_eq!(text.matches("Choose a generator").count(), 2);
    }

    #[test]
    fn test_normal_generator_uses_symmetric_range() {
        let text = session("7\n10\n6\n0\n");
        assert!(text.contains("[-3; -2]"));
        assert!(text.contains("[2; 3]"));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let text = session("9\nabc\n0\n");
        assert_eq!(
            text.matches("Invalid choice. Please select a valid generator or 0 to exit.")
                .count(),
            2
        );
        assert_eq!(text.matches("Choose a generator").count(), 3);
    }

    #[test]
    fn test_zero_intervals_rejected_before_sampling() {
        let text = session("2\n5\n0\n0\n");
        assert!(text.contains("Invalid number '0': expected an integer >= 1."));
        assert!(!text.contains("Random Values"));
    }

    #[test]
    fn test_oversized_count_rejected_before_sampling() {
        let script = format!("1\n{}\n0\n", usize::MAX);
        let text = session(&script);
        assert!(text.contains(&format!(
            "expected an integer between 0 and {}.",
            MAX_SAMPLE_COUNT
        )));
        assert!(!text.contains("Random Values"));
        assert_eq!(text.matches("Choose a generator").count(), 2);
    }

    #[test]
    fn test_zero_count_is_allowed() {
        let text = session("3\n0\n2\n0\n");
        assert!(text.contains("Random Values: \n"));
        assert!(text.contains("[0; 0.5]    0\n"));
    }

    #[test]
    fn test_end_of_input_mid_prompt() {
        let text = session("1\n5\n");
        assert!(text.ends_with("Enter the number of intervals for histogram: "));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let text = session("\n\n0\n");
        assert!(!text.contains("Invalid choice"));
    }
}
