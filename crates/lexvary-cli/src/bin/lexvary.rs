// lexvary: Generate lexical variations of a word or sentence.
//
// With an INPUT argument every option is enabled except those passed with
// --without. Without INPUT (and without --batch) the text and each option
// are asked for interactively.
//
// Usage:
//   lexvary [INPUT] [-o PATH] [-n NAME] [-f FORMAT] [--without FLAG]...
//           [--seed N] [--sort] [--batch FILE|-] [-q] [-v]
//
// Logging goes to stderr; RUST_LOG overrides the level chosen by -v.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lexvary::output::{check_list_name, display_variations, save_variations};
use lexvary::variation::{NumberSource, SeededSource, ThreadRngSource};
use lexvary::{
    DEFAULT_LIST_NAME, OptionFlag, OutputFormat, VariationOptions, generate_batch,
    generate_batch_seeded, generate_variations_with_source,
};
use lexvary_cli::FormatArg;

#[derive(Parser, Debug)]
#[command(name = "lexvary", version, about = "Generate lexical variations of a word or sentence")]
struct Cli {
    /// Word or sentence to vary. Prompted for when omitted.
    input: Option<String>,

    /// Save the variations to this file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Identifier of the saved list.
    #[arg(short, long, default_value = DEFAULT_LIST_NAME)]
    name: String,

    /// Format of the saved file.
    #[arg(short, long, value_enum, default_value_t = FormatArg::Python)]
    format: FormatArg,

    /// Disable an option (repeatable).
    #[arg(long, value_name = "FLAG", value_parser = lexvary_cli::parse_flag)]
    without: Vec<OptionFlag>,

    /// Seed the decoration numbers for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Sort the variations before printing and saving.
    #[arg(long)]
    sort: bool,

    /// Read one input per line from FILE (`-` for stdin).
    #[arg(long, value_name = "FILE", conflicts_with = "input")]
    batch: Option<String>,

    /// Do not print the variation listing.
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Run one input through the dispatcher. Invalid input ends the process.
fn generate_single(text: &str, options: &VariationOptions, seed: Option<u64>) -> Vec<String> {
    let mut numbers: Box<dyn NumberSource> = match seed {
        Some(seed) => Box::new(SeededSource::new(seed)),
        None => Box::new(ThreadRngSource),
    };
    generate_variations_with_source(text, options, numbers.as_mut())
        .unwrap_or_else(|e| lexvary_cli::fail(&e))
}

fn generate_from_batch(path: &str, options: &VariationOptions, seed: Option<u64>) -> Vec<String> {
    let inputs = lexvary_cli::read_batch_inputs(path)
        .unwrap_or_else(|e| lexvary_cli::fail(&format!("cannot read {path}: {e}")));
    tracing::debug!(inputs = inputs.len(), "batch loaded");
    let results = match seed {
        Some(seed) => generate_batch_seeded(&inputs, options, seed),
        None => generate_batch(&inputs, options),
    };
    lexvary_cli::merge_results(&inputs, results)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let format = OutputFormat::from(cli.format);
    if cli.output.is_some() {
        if let Err(e) = check_list_name(format, &cli.name) {
            lexvary_cli::fail(&e);
        }
    }

    let mut variations = if let Some(path) = cli.batch.as_deref() {
        let options = lexvary_cli::options_without(&cli.without);
        tracing::info!("starting variation generation");
        generate_from_batch(path, &options, cli.seed)
    } else {
        let (text, options) = match cli.input {
            Some(text) => (text, lexvary_cli::options_without(&cli.without)),
            None => {
                let stdin = io::stdin();
                let mut reader = stdin.lock();
                let mut stdout = io::stdout();
                let text = lexvary_cli::prompt_line(&mut reader, &mut stdout, "Text to vary:")
                    .unwrap_or_else(|e| lexvary_cli::fail(&e))
                    .unwrap_or_default();
                let options = lexvary_cli::prompt_options(&mut reader, &mut stdout)
                    .unwrap_or_else(|e| lexvary_cli::fail(&e));
                (text, options)
            }
        };
        tracing::info!("starting variation generation");
        generate_single(&text, &options, cli.seed)
    };
    tracing::info!("generation finished ({} variations)", variations.len());

    if cli.sort {
        variations.sort();
    }

    if !cli.quiet {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = display_variations(&mut out, &variations).and_then(|()| out.flush()) {
            lexvary_cli::fail(&e);
        }
    }

    if let Some(path) = cli.output.as_deref() {
        if let Err(e) = save_variations(path, format, &cli.name, &variations) {
            lexvary_cli::fail(&e);
        }
        tracing::info!("variations written to {}", path.display());
    }
}
