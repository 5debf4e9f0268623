//! End-to-end checks of the public generators against known inputs.
//!
//! Word generation draws a random decoration number; tests that need an
//! exact set use `FixedSource`.

use lexvary::variation::FixedSource;
use lexvary::{
    VariationError, VariationOptions, generate_sentence_variations, generate_variations,
    generate_word_variations, generate_word_variations_with_source, validate_input,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Options used by most word tests: everything but the phrase tables.
fn word_options() -> VariationOptions {
    VariationOptions {
        leet: true,
        abbreviations: false,
        synonyms: false,
        special_chars: true,
        case: true,
        accents: true,
        remove_vowels: true,
    }
}

fn assert_has(variations: &[String], expected: &str) {
    assert!(
        variations.iter().any(|v| v == expected),
        "{expected:?} missing from {variations:?}"
    );
}

fn assert_lacks(variations: &[String], unexpected: &str) {
    assert!(
        variations.iter().all(|v| v != unexpected),
        "{unexpected:?} unexpectedly present in {variations:?}"
    );
}

// ---------------------------------------------------------------------------
// Words
// ---------------------------------------------------------------------------

#[test]
fn word_basic() {
    let variations = generate_word_variations("test", &word_options()).unwrap();
    assert_has(&variations, "Test");
    assert_has(&variations, "TEST");
    assert_has(&variations, "t3st");
    assert_has(&variations, "tst");
    assert_has(&variations, "*test");
}

#[test]
fn word_full_leet_pass() {
    let variations = generate_word_variations("test", &word_options()).unwrap();
    assert_has(&variations, "t3$t");
}

#[test]
fn word_exact_set_with_fixed_number() {
    let options = VariationOptions::none();
    let mut variations =
        generate_word_variations_with_source("ab", &options, &mut FixedSource(3)).unwrap();
    variations.sort();

    let mut expected: Vec<String> = Vec::new();
    for prefix in ["", " ", "\t", "\n"] {
        for suffix in ["", " ", "\t", "\n"] {
            expected.push(format!("{prefix}ab{suffix}"));
        }
    }
    expected.push("abbb".to_string());
    expected.push("ab3".to_string());
    expected.push("3ab".to_string());
    expected.sort();

    assert_eq!(variations, expected);
}

#[test]
fn word_accents() {
    let variations = generate_word_variations("facade", &word_options()).unwrap();
    assert_has(&variations, "fa\u{00E7}ade"); // façade
    assert_has(&variations, "facade");
}

#[test]
fn word_accents_both_directions() {
    // café contains plain 'a', 'c' and accented 'é'
    let variations = generate_word_variations("caf\u{00E9}", &word_options()).unwrap();
    assert_has(&variations, "cafe");
    assert_has(&variations, "c\u{00E0}f\u{00E9}");
    assert_has(&variations, "\u{00E7}af\u{00E9}");
}

#[test]
fn word_with_numbers() {
    let variations = generate_word_variations("hello", &word_options()).unwrap();
    let is_number = |s: &str| !s.is_empty() && s.len() <= 2 && s.chars().all(|c| c.is_ascii_digit());
    assert!(
        variations
            .iter()
            .any(|v| v.strip_prefix("hello").is_some_and(is_number))
    );
    assert!(
        variations
            .iter()
            .any(|v| v.strip_suffix("hello").is_some_and(is_number))
    );
}

#[test]
fn word_collapse_and_doubling() {
    let variations = generate_word_variations("balloon", &VariationOptions::none()).unwrap();
    assert_has(&variations, "baloon");
    assert_has(&variations, "balloonnn");
}

#[test]
fn word_options_gate_rules() {
    let variations = generate_word_variations("test", &VariationOptions::none()).unwrap();
    assert_lacks(&variations, "TEST");
    assert_lacks(&variations, "t3st");
    assert_lacks(&variations, "tst");
    assert_lacks(&variations, "*test");
    assert_has(&variations, "test");
    assert_has(&variations, "testtt");
}

#[test]
fn word_has_no_phrase_rules() {
    let variations = generate_word_variations("exemple", &VariationOptions::all()).unwrap();
    assert_lacks(&variations, "illustration");
    assert_has(&variations, "3x3mpl3");
}

// ---------------------------------------------------------------------------
// Sentences
// ---------------------------------------------------------------------------

#[test]
fn sentence_basic() {
    let variations = generate_sentence_variations("bonjour le monde", &word_options()).unwrap();
    assert_has(&variations, "Bonjour Le Monde");
    assert_has(&variations, "b0nj0ur le monde");
    assert_has(&variations, "bonjour_le_monde");
    assert_has(&variations, "b0nj0ur l3 m0nd3");
}

#[test]
fn sentence_abbreviations() {
    let mut options = VariationOptions::none();
    options.abbreviations = true;
    let variations =
        generate_sentence_variations("par exemple, s'il vous pla\u{00EE}t", &options).unwrap();
    assert_has(&variations, "p.ex., s'il vous pla\u{00EE}t");
    assert_has(&variations, "par exemple, svp");
    assert_has(&variations, "par exemple, s'il vous pla\u{00EE}t");
}

#[test]
fn sentence_synonyms() {
    let mut options = VariationOptions::none();
    options.synonyms = true;
    let variations = generate_sentence_variations("donne moi un exemple", &options).unwrap();
    assert_has(&variations, "donne moi une illustration");
    assert_has(&variations, "donne moi un illustration");
    assert_has(&variations, "donne moi un exemple");
}

#[test]
fn sentence_camel_case() {
    let variations = generate_sentence_variations("bonsoir tout le monde", &word_options()).unwrap();
    assert_has(&variations, "BonsoirToutLeMonde");
}

#[test]
fn sentence_camel_case_is_unconditional() {
    let variations =
        generate_sentence_variations("bonsoir tout le monde", &VariationOptions::none()).unwrap();
    assert_has(&variations, "BonsoirToutLeMonde");
    assert_lacks(&variations, "bonsoir_tout_le_monde");
}

#[test]
fn sentence_delimiters() {
    let mut options = VariationOptions::none();
    options.special_chars = true;
    let variations = generate_sentence_variations("mot de passe", &options).unwrap();
    assert_has(&variations, "mot_de_passe");
    assert_has(&variations, "mot-de-passe");
    assert_has(&variations, "mot|de|passe");
}

#[test]
fn sentence_is_deterministic() {
    let options = VariationOptions::all();
    let mut a = generate_sentence_variations("c'est-\u{00E0}-dire oui", &options).unwrap();
    let mut b = generate_sentence_variations("c'est-\u{00E0}-dire oui", &options).unwrap();
    a.sort();
    b.sort();
    assert_eq!(a, b);
    assert_has(&a, "c.-\u{00E0}-d. oui");
}

// ---------------------------------------------------------------------------
// Dispatch and validation
// ---------------------------------------------------------------------------

#[test]
fn dispatch_routes_on_space() {
    let options = VariationOptions::all();
    let word = generate_variations("motdepasse", &options).unwrap();
    assert_has(&word, "#motdepasse");

    let sentence = generate_variations("mot de passe", &options).unwrap();
    assert_has(&sentence, "MotDePasse");
    assert_lacks(&sentence, "#mot de passe");
}

#[test]
fn invalid_input() {
    let options = word_options();
    assert_eq!(generate_word_variations("", &options), Err(VariationError::InvalidInput));
    assert_eq!(generate_variations("  ", &options), Err(VariationError::InvalidInput));
    assert_eq!(validate_input(None), Err(VariationError::InvalidInput));
}
