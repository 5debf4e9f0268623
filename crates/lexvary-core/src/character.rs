// Character-level transformations used by the variation rules.
//
// Every function here is total: it accepts any string, including the
// empty string, and returns a new owned string.

use crate::tables::{LEET_MAP, VOWELS};

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Check whether a character is one of the removable vowels
/// (a, e, i, o, u, case-insensitive).
///
/// Accented vowels are not included.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// Check whether a character has case (upper or lower).
///
/// Digits, punctuation and whitespace are uncased; they start a new word
/// for title casing.
pub fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase()
}

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

/// Replace every character that is a key of `table` with its value, in a
/// single left-to-right pass. Unmatched characters are copied unchanged.
pub fn substitute_chars(text: &str, table: &[(char, char)]) -> String {
    text.chars()
        .map(|c| {
            table
                .iter()
                .find(|&&(from, _)| from == c)
                .map_or(c, |&(_, to)| to)
        })
        .collect()
}

/// Apply the leet-speak map to `text`.
pub fn leet_speak(text: &str) -> String {
    substitute_chars(text, LEET_MAP)
}

/// Remove every vowel from `text`.
pub fn remove_vowels(text: &str) -> String {
    text.chars().filter(|&c| !is_vowel(c)).collect()
}

// ---------------------------------------------------------------------------
// Repetition
// ---------------------------------------------------------------------------

/// Collapse every run of consecutive `letter` to a single occurrence,
/// anywhere in the text ("balloon" with 'l' gives "baloon").
///
/// Matching is case-sensitive.
pub fn collapse_runs(text: &str, letter: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if c == letter && prev == Some(letter) {
            continue;
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Append the last character of `text` twice more ("cat" gives "cattt").
///
/// Returns `None` for the empty string.
pub fn double_last(text: &str) -> Option<String> {
    let last = text.chars().next_back()?;
    let mut out = String::with_capacity(text.len() + 2 * last.len_utf8());
    out.push_str(text);
    out.push(last);
    out.push(last);
    Some(out)
}

// ---------------------------------------------------------------------------
// Accents
// ---------------------------------------------------------------------------

/// Replace every occurrence of `from` with `to`, or return `None` when
/// `from` does not occur.
pub fn toggle_letter(text: &str, from: char, to: char) -> Option<String> {
    if !text.contains(from) {
        return None;
    }
    Some(text.replace(from, &to.to_string()))
}
