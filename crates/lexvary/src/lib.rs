//! Lexical variation generator.
//!
//! Given a word or a short phrase and a set of [`VariationOptions`], this
//! crate produces a deduplicated, unordered list of mutated strings for
//! wordlist-style enumeration: case variants, leet speak, accent toggling,
//! symbol wrapping, whitespace padding, delimiter and camel-case forms,
//! abbreviation and synonym substitution, and numeric decoration.
//!
//! # Architecture
//!
//! - [`variation`] -- rules, the per-generation status, strategies and
//!   number sources
//! - [`generator`] -- validated entry points, dispatch and batch fan-out
//! - [`output`] -- list serialization and display
//!
//! ```
//! use lexvary::{VariationOptions, generate_variations};
//!
//! let variations = generate_variations("test", &VariationOptions::all()).unwrap();
//! assert!(variations.iter().any(|v| v == "TEST"));
//! ```

pub mod generator;
pub mod output;
pub mod variation;

pub use generator::{
    InputKind, generate_batch, generate_batch_seeded, generate_sentence_variations,
    generate_sentence_variations_with_source, generate_variations,
    generate_variations_with_source, generate_word_variations,
    generate_word_variations_with_source,
};
pub use lexvary_core::{OptionFlag, VariationError, VariationOptions, validate_input};
pub use output::{DEFAULT_LIST_NAME, OutputError, OutputFormat};
