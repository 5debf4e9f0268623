// Variation generation
//
// Produces lexical variants of a word or phrase by running a list of
// independent rules over one shared, deduplicated set.
//
// Architecture:
//   - `rules`: individual transformations (VariationRule trait)
//   - `status`: the input, the number source and the variation set
//   - `strategy`: word and phrase pipelines built from options
//   - `random`: number sources for numeric decoration

pub mod random;
pub mod rules;
pub mod status;
pub mod strategy;

pub use random::{FixedSource, MAX_DECORATION, NumberSource, SeededSource, ThreadRngSource};
pub use rules::VariationRule;
pub use status::VariationStatus;
pub use strategy::{VariationStrategy, sentence_strategy, word_strategy};
