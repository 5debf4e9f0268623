// Case conversion for words and phrases

use crate::character::is_cased;

/// Case transformation produced by the case rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseVariant {
    /// Every letter lowercased: "bonjour le monde".
    Lower,
    /// Every letter uppercased: "BONJOUR LE MONDE".
    Upper,
    /// First character uppercased, the rest lowercased: "Bonjour le monde".
    Capitalized,
    /// Every word capitalized: "Bonjour Le Monde".
    Title,
}

impl CaseVariant {
    /// All variants, in the order the case rule emits them.
    pub const ALL: [CaseVariant; 4] = [
        CaseVariant::Lower,
        CaseVariant::Upper,
        CaseVariant::Capitalized,
        CaseVariant::Title,
    ];

    /// Apply this case transformation to `text`.
    pub fn apply(self, text: &str) -> String {
        match self {
            CaseVariant::Lower => text.to_lowercase(),
            CaseVariant::Upper => text.to_uppercase(),
            CaseVariant::Capitalized => capitalize(text),
            CaseVariant::Title => title_case(text),
        }
    }
}

/// Uppercase the first character and lowercase the rest.
///
/// Characters with multi-character case mappings expand ("ß" becomes "SS").
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// Uppercase the first character and leave the rest untouched.
///
/// Used when collapsing a phrase to camel case, where internal capitals of
/// a token are preserved.
pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Title-case `text`: a cased character that follows an uncased one (or
/// starts the text) is uppercased, every other cased character is
/// lowercased.
///
/// Word boundaries are any uncased character, so "c'est" becomes "C'Est"
/// and "3d" becomes "3D".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_cased = false;
    for c in text.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = is_cased(c);
    }
    out
}
