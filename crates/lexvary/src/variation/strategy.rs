// Variation strategies: the word and phrase rule pipelines

use lexvary_core::VariationOptions;
use lexvary_core::tables::{
    ABBREVIATIONS, ACCENT_PAIRS, COLLAPSIBLE_LETTERS, PADDING, SENTENCE_DELIMITERS, SYNONYMS,
    WORD_SYMBOLS,
};

use super::rules::*;
use super::status::VariationStatus;

// =========================================================================
// VariationStrategy
// =========================================================================

/// An ordered list of rules run against one status.
///
/// Gating by options happens when the strategy is built: a disabled rule
/// is simply not in the list.
pub struct VariationStrategy {
    rules: Vec<Box<dyn VariationRule>>,
}

impl VariationStrategy {
    pub fn new(rules: Vec<Box<dyn VariationRule>>) -> Self {
        Self { rules }
    }

    /// Run every rule against `status`.
    pub fn generate(&self, status: &mut VariationStatus<'_>) {
        for rule in &self.rules {
            let before = status.len();
            rule.apply(status);
            tracing::trace!(rule = rule.name(), added = status.len() - before, "rule applied");
        }
    }

    /// Names of the rules in this strategy, in run order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }
}

// =========================================================================
// Factory functions
// =========================================================================

/// Build the word strategy.
///
/// Padding, repeated-letter collapsing, letter doubling and numeric
/// decoration always run; the rest follow `options`.
pub fn word_strategy(options: &VariationOptions) -> VariationStrategy {
    let mut rules: Vec<Box<dyn VariationRule>> = vec![Box::new(Padding { affixes: PADDING })];

    if options.case {
        rules.push(Box::new(CaseChange));
    }
    rules.push(Box::new(CollapseRuns {
        letters: COLLAPSIBLE_LETTERS,
    }));
    if options.special_chars {
        rules.push(Box::new(SymbolWrap {
            symbols: WORD_SYMBOLS,
        }));
    }
    rules.push(Box::new(LetterDoubling));
    if options.remove_vowels {
        rules.push(Box::new(VowelRemoval));
    }
    rules.push(Box::new(NumericDecoration));
    if options.accents {
        rules.push(Box::new(AccentToggle {
            pairs: ACCENT_PAIRS,
        }));
    }
    if options.leet {
        rules.push(Box::new(LeetSpeak));
        rules.push(Box::new(PartialLeet));
    }

    VariationStrategy::new(rules)
}

/// Build the phrase strategy.
///
/// Padding and camel-case collapsing always run; the rest follow
/// `options`. Accent toggling and vowel removal are word-only and ignored
/// here.
pub fn sentence_strategy(options: &VariationOptions) -> VariationStrategy {
    let mut rules: Vec<Box<dyn VariationRule>> = vec![Box::new(Padding { affixes: PADDING })];

    if options.case {
        rules.push(Box::new(CaseChange));
    }
    if options.abbreviations {
        rules.push(Box::new(PhraseSubstitution {
            name: "abbreviations",
            table: ABBREVIATIONS,
        }));
    }
    if options.special_chars {
        rules.push(Box::new(DelimiterReplace {
            delimiters: SENTENCE_DELIMITERS,
        }));
    }
    if options.synonyms {
        rules.push(Box::new(PhraseSubstitution {
            name: "synonyms",
            table: SYNONYMS,
        }));
    }
    rules.push(Box::new(CamelCase));
    if options.leet {
        rules.push(Box::new(LeetSpeak));
        rules.push(Box::new(TokenLeet));
    }

    VariationStrategy::new(rules)
}
