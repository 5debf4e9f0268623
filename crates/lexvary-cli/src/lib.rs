// lexvary-cli: shared utilities for the command-line front end.

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process;

use clap::ValueEnum;

use lexvary::{OptionFlag, OutputFormat, VariationError, VariationOptions};

/// Answers accepted as "yes" by the interactive prompts (after trimming
/// and lowercasing).
const YES_ANSWERS: &[&str] = &["oui", "o", "yes", "y"];

// ---------------------------------------------------------------------------
// Argument value types
// ---------------------------------------------------------------------------

/// Parse an option flag by its snake_case key (`--without leet`).
pub fn parse_flag(name: &str) -> Result<OptionFlag, String> {
    OptionFlag::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = OptionFlag::ALL.iter().map(|flag| flag.name()).collect();
        format!("unknown option {name:?} (expected one of: {})", known.join(", "))
    })
}

/// Output file format as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Python,
    Json,
    Lines,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Python => OutputFormat::Python,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Lines => OutputFormat::Lines,
        }
    }
}

/// Options used when the input comes from the command line: every flag
/// enabled except those listed with `--without`.
pub fn options_without(disabled: &[OptionFlag]) -> VariationOptions {
    VariationOptions::all().without(disabled)
}

// ---------------------------------------------------------------------------
// Interactive prompts
// ---------------------------------------------------------------------------

/// Interpret a free-form yes/no answer. Anything not recognized as yes is
/// no.
pub fn parse_answer(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    YES_ANSWERS.contains(&answer.as_str())
}

/// Print `question` and read one line. Returns `None` at end of input.
///
/// The trailing newline is stripped; other whitespace is kept.
pub fn prompt_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
) -> io::Result<Option<String>> {
    write!(writer, "{question} ")?;
    writer.flush()?;
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(Some(trimmed.to_string()))
}

/// Ask one yes/no question per flag, in [`OptionFlag::ALL`] order.
///
/// End of input answers "no" to the remaining questions.
pub fn prompt_options<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> io::Result<VariationOptions> {
    let mut options = VariationOptions::none();
    for flag in OptionFlag::ALL {
        let question = format!("{} (yes/no):", flag.question());
        let answer = prompt_line(reader, writer, &question)?;
        let enabled = answer.as_deref().is_some_and(parse_answer);
        tracing::debug!(flag = flag.name(), enabled, "option answered");
        options.set(flag, enabled);
    }
    Ok(options)
}

// ---------------------------------------------------------------------------
// Batch input
// ---------------------------------------------------------------------------

/// Read batch inputs, one per line, from `path` (`-` for stdin).
///
/// Blank lines are skipped and trailing carriage returns removed; other
/// whitespace is part of the input.
pub fn read_batch_inputs(path: &str) -> io::Result<Vec<String>> {
    let reader: Box<dyn BufRead> = if path == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        Box::new(BufReader::new(File::open(path)?))
    };
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.trim().is_empty() {
            continue;
        }
        inputs.push(line.to_string());
    }
    Ok(inputs)
}

/// Merge per-input results into one deduplicated list, keeping first-seen
/// order. Failed inputs are logged and skipped.
pub fn merge_results(
    inputs: &[String],
    results: Vec<Result<Vec<String>, VariationError>>,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(variations) => {
                for variation in variations {
                    if seen.insert(variation.clone()) {
                        merged.push(variation);
                    }
                }
            }
            Err(e) => tracing::warn!(input = input.as_str(), "skipping input: {e}"),
        }
    }
    merged
}

/// Log `err` at error level and exit with code 1. Every failing exit of
/// the binary goes through here.
pub fn fail(err: &dyn fmt::Display) -> ! {
    tracing::error!("{err}");
    process::exit(1);
}
