// Entry points: word and phrase generation, dispatch, and batch fan-out.
//
// Every entry point validates its input first, so each is safe to call
// directly. A generation owns its status; the only shared data are the
// static tables, which makes batch fan-out lock-free.

use rayon::prelude::*;

use lexvary_core::{VariationError, VariationOptions, validate_input};

use crate::variation::random::{NumberSource, SeededSource, ThreadRngSource};
use crate::variation::status::VariationStatus;
use crate::variation::strategy::{VariationStrategy, sentence_strategy, word_strategy};

/// Which generator an input is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// No space character: word rules.
    Word,
    /// At least one space character: phrase rules.
    Sentence,
}

impl InputKind {
    /// Route on the presence of a space (U+0020). Tabs and newlines do not
    /// make a phrase.
    pub fn detect(text: &str) -> Self {
        if text.contains(' ') {
            InputKind::Sentence
        } else {
            InputKind::Word
        }
    }
}

fn run(strategy: VariationStrategy, text: &str, numbers: &mut dyn NumberSource) -> Vec<String> {
    let mut status = VariationStatus::new(text, numbers);
    strategy.generate(&mut status);
    tracing::debug!(variations = status.len(), "generation finished");
    status.into_variations()
}

// ---------------------------------------------------------------------------
// Word
// ---------------------------------------------------------------------------

/// Generate variations of a single word.
///
/// The numeric decoration uses the thread-local generator, so two calls
/// may return different sets.
pub fn generate_word_variations(
    word: &str,
    options: &VariationOptions,
) -> Result<Vec<String>, VariationError> {
    generate_word_variations_with_source(word, options, &mut ThreadRngSource)
}

/// Like [`generate_word_variations`], drawing the decoration number from
/// `numbers`.
pub fn generate_word_variations_with_source(
    word: &str,
    options: &VariationOptions,
    numbers: &mut dyn NumberSource,
) -> Result<Vec<String>, VariationError> {
    let word = validate_input(Some(word))?;
    Ok(run(word_strategy(options), word, numbers))
}

// ---------------------------------------------------------------------------
// Sentence
// ---------------------------------------------------------------------------

/// Generate variations of a phrase. The result is deterministic.
pub fn generate_sentence_variations(
    sentence: &str,
    options: &VariationOptions,
) -> Result<Vec<String>, VariationError> {
    generate_sentence_variations_with_source(sentence, options, &mut ThreadRngSource)
}

/// Like [`generate_sentence_variations`]. No phrase rule draws numbers;
/// the source is accepted so both generators share one signature.
pub fn generate_sentence_variations_with_source(
    sentence: &str,
    options: &VariationOptions,
    numbers: &mut dyn NumberSource,
) -> Result<Vec<String>, VariationError> {
    let sentence = validate_input(Some(sentence))?;
    Ok(run(sentence_strategy(options), sentence, numbers))
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Validate `text`, then run exactly one of the two generators depending
/// on [`InputKind::detect`]. The chosen generator's result is returned
/// unmodified.
pub fn generate_variations(
    text: &str,
    options: &VariationOptions,
) -> Result<Vec<String>, VariationError> {
    generate_variations_with_source(text, options, &mut ThreadRngSource)
}

/// Like [`generate_variations`], drawing numbers from `numbers`.
pub fn generate_variations_with_source(
    text: &str,
    options: &VariationOptions,
    numbers: &mut dyn NumberSource,
) -> Result<Vec<String>, VariationError> {
    let text = validate_input(Some(text))?;
    let kind = InputKind::detect(text);
    tracing::debug!(?kind, "dispatching");
    match kind {
        InputKind::Word => generate_word_variations_with_source(text, options, numbers),
        InputKind::Sentence => generate_sentence_variations_with_source(text, options, numbers),
    }
}

/// Generate variations for many inputs in parallel, one task per input.
///
/// Results are returned in input order. Each task has its own status and
/// its own unseeded number source.
pub fn generate_batch<S>(
    inputs: &[S],
    options: &VariationOptions,
) -> Vec<Result<Vec<String>, VariationError>>
where
    S: AsRef<str> + Sync,
{
    inputs
        .par_iter()
        .map(|input| generate_variations(input.as_ref(), options))
        .collect()
}

/// Like [`generate_batch`], with one seeded source per input derived from
/// `seed` and the input's position, so the whole batch is reproducible.
pub fn generate_batch_seeded<S>(
    inputs: &[S],
    options: &VariationOptions,
    seed: u64,
) -> Vec<Result<Vec<String>, VariationError>>
where
    S: AsRef<str> + Sync,
{
    inputs
        .par_iter()
        .enumerate()
        .map(|(i, input)| {
            let mut numbers = SeededSource::new(seed.wrapping_add(i as u64));
            generate_variations_with_source(input.as_ref(), options, &mut numbers)
        })
        .collect()
}
