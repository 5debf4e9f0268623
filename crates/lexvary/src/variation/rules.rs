// Individual variation rules: each applies one class of transformation to
// the input and adds the resulting candidates to the status.

use lexvary_core::case::{CaseVariant, upper_first};
use lexvary_core::character::{
    collapse_runs, double_last, leet_speak, remove_vowels, substitute_chars, toggle_letter,
};
use lexvary_core::tables::LEET_MAP;

use super::status::VariationStatus;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// A single transformation applied to the input of a [`VariationStatus`].
///
/// Rules are independent: none reads what another added, so the order in
/// which a strategy runs them does not change the resulting set.
pub trait VariationRule: Send + Sync {
    /// Short name used in trace output.
    fn name(&self) -> &'static str;

    /// Add this rule's candidates for `status.text()` to `status`.
    fn apply(&self, status: &mut VariationStatus<'_>);
}

// =========================================================================
// Rules shared by words and phrases
// =========================================================================

// ---------------------------------------------------------------------------
// Padding
// ---------------------------------------------------------------------------

/// Surround the input with every prefix/suffix pair from `affixes`.
///
/// With the empty string among the affixes the unmodified input is always
/// produced.
pub struct Padding {
    pub affixes: &'static [&'static str],
}

impl VariationRule for Padding {
    fn name(&self) -> &'static str {
        "padding"
    }

    fn apply(&self, status: &mut VariationStatus<'_>) {
        let text = status.text();
        for prefix in self.affixes {
            for suffix in self.affixes {
                status.add(format!("{prefix}{text}{suffix}"));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// CaseChange
// ---------------------------------------------------------------------------

/// Lowercase, uppercase, capitalized and title-cased forms.
pub struct CaseChange;

impl VariationRule for CaseChange {
    fn name(&self) -> &'static str {
        "case"
    }

    fn apply(&self, status: &mut VariationStatus<'_>) {
        let text = status.text();
        status.extend(CaseVariant::ALL.iter().map(|variant| variant.apply(text)));
    }
}

// ---------------------------------------------------------------------------
// LeetSpeak
// ---------------------------------------------------------------------------

/// The whole input with the leet map applied in one pass.
pub struct LeetSpeak;

impl VariationRule for LeetSpeak {
    fn name(&self) -> &'static str {
        "leet"
    }

    fn apply(&self, status: &mut VariationStatus<'_>) {
        let text = status.text();
        status.add(leet_speak(text));
    }
}

// =========================================================================
// Word rules
// =========================================================================

// ---------------------------------------------------------------------------
// CollapseRuns
// ---------------------------------------------------------------------------

/// For each letter present in the word, collapse its runs of consecutive
/// occurrences to one. Each letter yields its own candidate.
pub struct CollapseRuns {
    pub letters: &'static [char],
}

impl VariationRule for CollapseRuns {
    fn name(&self) -> &'static str {
        "collapse_runs"
    }

    fn apply(&self, status: &mut VariationStatus<'_>) {
        let text = status.text();
        for &letter in self.letters {
            if text.contains(letter) {
                status.add(collapse_runs(text, letter));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// SymbolWrap
// ---------------------------------------------------------------------------

/// Prepend and append each symbol separately.
pub struct SymbolWrap {
    pub symbols: &'static [char],
}

impl VariationRule for SymbolWrap {
    fn name(&self) -> &'static str {
        "symbol_wrap"
    }

    fn apply(&self, status: &mut VariationStatus<'_>) {
        let text = status.text();
        for symbol in self.symbols {
            status.add(format!("{symbol}{text}"));
            status.add(format!("{text}{symbol}"));
        }
    }
}

// ---------------------------------------------------------------------------
// LetterDoubling
// ---------------------------------------------------------------------------

/// Repeat the last character twice more. Words of a single character are
/// left alone.
pub struct LetterDoubling;

impl VariationRule for LetterDoubling {
    fn name(&self) -> &'static str {
        "letter_doubling"
    }

    fn apply(&self, status: &mut VariationStatus<'_>) {
        let text = status.text();
        if text.chars().nth(1).is_none() {
            return;
        }
        if let Some(doubled) = double_last(text) {
            status.add(doubled);
        }
    }
}

// ---------------------------------------------------------------------------
// VowelRemoval
// ---------------------------------------------------------------------------

pub struct VowelRemoval;

impl VariationRule for VowelRemoval {
    fn name(&self) -> &'static str {
        "remove_vowels"
    }

    fn apply(&self, status: &mut VariationStatus<'_>) {
        let text = status.text();
        status.add(remove_vowels(text));
    }
}

// ---------------------------------------------------------------------------
// NumericDecoration
// ---------------------------------------------------------------------------

/// Draw one number and add it both after and before the word.
pub struct NumericDecoration;

impl VariationRule for NumericDecoration {
    fn name(&self) -> &'static str {
        "numeric_decoration"
    }

    fn apply(&self, status: &mut VariationStatus<'_>) {
        let text = status.text();
        let number = status.draw_number();
        status.add(format!("{text}{number}"));
        status.add(format!("{number}{text}"));
    }
}

// ---------------------------------------------------------------------------
// AccentToggle
// ---------------------------------------------------------------------------

/// For each (plain, accented) pair: if the plain letter occurs, add the
/// word with all of them accented; if the accented letter occurs, add the
/// word with all of them plain. A word with both forms yields both.
pub struct AccentToggle {
    pub pairs: &'static [(char, char)],
}

impl VariationRule for AccentToggle {
    fn name(&self) -> &'static str {
        "accents"
    }

    fn apply(&self, status: &mut VariationStatus<'_>) {
        let text = status.text();
        for &(plain, accented) in self.pairs {
            if let Some(v) = toggle_letter(text, plain, accented) {
                status.add(v);
            }
            if let Some(v) = toggle_letter(text, accented, plain) {
                status.add(v);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// PartialLeet
// ---------------------------------------------------------------------------

/// One candidate per leet-map entry, with only that entry applied
/// ("test" gives "t3st" and "te$t").
pub struct PartialLeet;

impl VariationRule for PartialLeet {
    fn name(&self) -> &'static str {
        "partial_leet"
    }

    fn apply(&self, status: &mut VariationStatus<'_>) {
        let text = status.text();
        for entry in LEET_MAP {
            if text.contains(entry.0) {
                status.add(substitute_chars(text, std::slice::from_ref(entry)));
            }
        }
    }
}

// =========================================================================
// Phrase rules
// =========================================================================

// ---------------------------------------------------------------------------
// PhraseSubstitution
// ---------------------------------------------------------------------------

/// Replace every occurrence of a table key with its value. Each key found
/// in the phrase yields its own candidate; there is no word-boundary
/// check.
pub struct PhraseSubstitution {
    pub name: &'static str,
    pub table: &'static [(&'static str, &'static str)],
}

impl VariationRule for PhraseSubstitution {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, status: &mut VariationStatus<'_>) {
        let text = status.text();
        for &(phrase, replacement) in self.table {
            if text.contains(phrase) {
                status.add(text.replace(phrase, replacement));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// DelimiterReplace
// ---------------------------------------------------------------------------

/// Replace every space with each delimiter in turn.
pub struct DelimiterReplace {
    pub delimiters: &'static [char],
}

impl VariationRule for DelimiterReplace {
    fn name(&self) -> &'static str {
        "delimiters"
    }

    fn apply(&self, status: &mut VariationStatus<'_>) {
        let text = status.text();
        for &delimiter in self.delimiters {
            status.add(text.replace(' ', &delimiter.to_string()));
        }
    }
}

// ---------------------------------------------------------------------------
// CamelCase
// ---------------------------------------------------------------------------

/// Split on whitespace, uppercase the first letter of every token and join
/// without separators. The rest of each token keeps its case.
pub struct CamelCase;

impl VariationRule for CamelCase {
    fn name(&self) -> &'static str {
        "camel_case"
    }

    fn apply(&self, status: &mut VariationStatus<'_>) {
        let text = status.text();
        let camel: String = text.split_whitespace().map(upper_first).collect();
        status.add(camel);
    }
}

// ---------------------------------------------------------------------------
// TokenLeet
// ---------------------------------------------------------------------------

/// One candidate per space-separated token, with the leet map applied to
/// that token only ("bonjour le monde" gives "b0nj0ur le monde").
///
/// Tokens are split on single spaces so the original spacing is kept.
pub struct TokenLeet;

impl VariationRule for TokenLeet {
    fn name(&self) -> &'static str {
        "token_leet"
    }

    fn apply(&self, status: &mut VariationStatus<'_>) {
        let text = status.text();
        let tokens: Vec<&str> = text.split(' ').collect();
        for (i, token) in tokens.iter().enumerate() {
            let leet = leet_speak(token);
            if leet == *token {
                continue;
            }
            let mut parts: Vec<&str> = tokens.clone();
            parts[i] = &leet;
            status.add(parts.join(" "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variation::random::FixedSource;
    use lexvary_core::tables::{
        ABBREVIATIONS, ACCENT_PAIRS, COLLAPSIBLE_LETTERS, PADDING, SENTENCE_DELIMITERS, SYNONYMS,
        WORD_SYMBOLS,
    };

    /// Run a single rule on `text` and return the sorted candidates.
    fn run(rule: &dyn VariationRule, text: &str) -> Vec<String> {
        let mut numbers = FixedSource(7);
        let mut status = VariationStatus::new(text, &mut numbers);
        rule.apply(&mut status);
        let mut out = status.into_variations();
        out.sort();
        out
    }

    fn sorted(items: &[&str]) -> Vec<String> {
        let mut out: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        out.sort();
        out
    }

    // -- Padding --

    #[test]
    fn padding_sixteen_combinations() {
        let out = run(&Padding { affixes: PADDING }, "mot");
        assert_eq!(out.len(), 16);
        assert!(out.contains(&"mot".to_string()));
        assert!(out.contains(&" mot\n".to_string()));
        assert!(out.contains(&"\tmot\t".to_string()));
    }

    // -- CaseChange --

    #[test]
    fn case_change_merges_equal_forms() {
        // capitalized and title-cased forms coincide for a plain word
        assert_eq!(run(&CaseChange, "test"), sorted(&["test", "TEST", "Test"]));
    }

    #[test]
    fn case_change_on_phrase() {
        let out = run(&CaseChange, "bonjour le monde");
        assert!(out.contains(&"Bonjour Le Monde".to_string()));
        assert!(out.contains(&"Bonjour le monde".to_string()));
        assert!(out.contains(&"BONJOUR LE MONDE".to_string()));
    }

    // -- LeetSpeak / PartialLeet / TokenLeet --

    #[test]
    fn leet_full_pass() {
        assert_eq!(run(&LeetSpeak, "test"), sorted(&["t3$t"]));
    }

    #[test]
    fn partial_leet_one_entry_at_a_time() {
        assert_eq!(run(&PartialLeet, "test"), sorted(&["t3st", "te$t"]));
        assert!(run(&PartialLeet, "xyz").is_empty());
    }

    #[test]
    fn token_leet_one_token_at_a_time() {
        assert_eq!(
            run(&TokenLeet, "bonjour le monde"),
            sorted(&["b0nj0ur le monde", "bonjour l3 monde", "bonjour le m0nd3"])
        );
    }

    #[test]
    fn token_leet_keeps_double_spaces() {
        assert_eq!(run(&TokenLeet, "ok  xy"), sorted(&["0k  xy"]));
    }

    // -- CollapseRuns --

    #[test]
    fn collapse_runs_each_letter() {
        let rule = CollapseRuns { letters: COLLAPSIBLE_LETTERS };
        assert_eq!(run(&rule, "ballonnet"), sorted(&["balonnet", "ballonet"]));
        assert!(run(&rule, "test").is_empty());
    }

    #[test]
    fn collapse_runs_single_letter_still_adds() {
        let rule = CollapseRuns { letters: COLLAPSIBLE_LETTERS };
        assert_eq!(run(&rule, "lune"), sorted(&["lune"]));
    }

    // -- SymbolWrap --

    #[test]
    fn symbol_wrap_eight_candidates() {
        let out = run(&SymbolWrap { symbols: WORD_SYMBOLS }, "test");
        assert_eq!(out.len(), 8);
        assert!(out.contains(&"*test".to_string()));
        assert!(out.contains(&"test!".to_string()));
        assert!(out.contains(&"#test".to_string()));
        assert!(out.contains(&"test@".to_string()));
    }

    // -- LetterDoubling --

    #[test]
    fn letter_doubling() {
        assert_eq!(run(&LetterDoubling, "cat"), sorted(&["cattt"]));
        assert!(run(&LetterDoubling, "a").is_empty());
    }

    // -- VowelRemoval --

    #[test]
    fn vowel_removal() {
        assert_eq!(run(&VowelRemoval, "test"), sorted(&["tst"]));
    }

    // -- NumericDecoration --

    #[test]
    fn numeric_decoration_both_sides() {
        assert_eq!(run(&NumericDecoration, "hello"), sorted(&["hello7", "7hello"]));
    }

    // -- AccentToggle --

    #[test]
    fn accent_toggle_plain_to_accented() {
        let rule = AccentToggle { pairs: ACCENT_PAIRS };
        // a -> à, c -> ç, e -> é
        assert_eq!(
            run(&rule, "facade"),
            sorted(&["f\u{00E0}c\u{00E0}de", "fa\u{00E7}ade", "facad\u{00E9}"])
        );
    }

    #[test]
    fn accent_toggle_both_forms_present() {
        let rule = AccentToggle { pairs: &[('e', '\u{00E9}')] };
        // only the accented form present
        assert_eq!(run(&rule, "\u{00E9}t\u{00E9}"), sorted(&["ete"]));
        // both forms present; è is not part of the pair
        let out = run(&rule, "\u{00E9}l\u{00E8}ve");
        assert_eq!(out, sorted(&["\u{00E9}l\u{00E8}v\u{00E9}", "el\u{00E8}ve"]));
    }

    // -- PhraseSubstitution --

    #[test]
    fn abbreviations_each_match() {
        let rule = PhraseSubstitution { name: "abbreviations", table: ABBREVIATIONS };
        assert_eq!(
            run(&rule, "par exemple, s'il vous pla\u{00EE}t"),
            sorted(&["p.ex., s'il vous pla\u{00EE}t", "par exemple, svp"])
        );
    }

    #[test]
    fn substitution_no_match_adds_nothing() {
        let rule = PhraseSubstitution { name: "synonyms", table: SYNONYMS };
        assert!(run(&rule, "bonjour le monde").is_empty());
    }

    #[test]
    fn substitution_has_no_word_boundary() {
        let rule = PhraseSubstitution { name: "synonyms", table: SYNONYMS };
        assert_eq!(run(&rule, "informations utiles"), sorted(&["donn\u{00E9}es utiles"]));
    }

    // -- DelimiterReplace --

    #[test]
    fn delimiters_replace_spaces_only() {
        let rule = DelimiterReplace { delimiters: SENTENCE_DELIMITERS };
        assert_eq!(
            run(&rule, "a b\tc"),
            sorted(&["a_b\tc", "a-b\tc", "a|b\tc"])
        );
    }

    // -- CamelCase --

    #[test]
    fn camel_case_collapses() {
        assert_eq!(run(&CamelCase, "bonsoir tout le monde"), sorted(&["BonsoirToutLeMonde"]));
        assert_eq!(run(&CamelCase, "mon iPhone  neuf"), sorted(&["MonIPhoneNeuf"]));
    }
}
