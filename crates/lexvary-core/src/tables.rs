// Static lookup tables shared by the word and sentence rules.
//
// All tables are immutable and total: a rule that finds no matching key
// simply contributes nothing.

// ---------------------------------------------------------------------------
// Whitespace padding
// ---------------------------------------------------------------------------

/// Prefixes and suffixes combined around the input by the padding rule.
///
/// Every prefix is paired with every suffix, giving 16 candidates. The
/// empty/empty pair reproduces the input unchanged.
pub const PADDING: &[&str] = &["", " ", "\t", "\n"];

// ---------------------------------------------------------------------------
// Character substitution
// ---------------------------------------------------------------------------

/// Plain letter and its accented counterpart.
///
/// The accent rule toggles in both directions: plain letters are replaced
/// by the accented form, accented letters by the plain form.
pub const ACCENT_PAIRS: &[(char, char)] = &[
    ('e', '\u{00E9}'), // é
    ('a', '\u{00E0}'), // à
    ('u', '\u{00F9}'), // ù
    ('c', '\u{00E7}'), // ç
];

/// Leet-speak substitutions, applied to every matching character in a
/// single pass.
///
/// No replacement is itself a key, so applying the map twice is the same
/// as applying it once.
pub const LEET_MAP: &[(char, char)] = &[('a', '4'), ('e', '3'), ('s', '$'), ('o', '0')];

/// Vowels removed by the vowel-removal rule (matched case-insensitively).
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Letters whose consecutive runs are collapsed to a single occurrence.
pub const COLLAPSIBLE_LETTERS: &[char] = &['l', 'n'];

// ---------------------------------------------------------------------------
// Symbols and delimiters
// ---------------------------------------------------------------------------

/// Symbols prepended and appended to single words.
pub const WORD_SYMBOLS: &[char] = &['#', '*', '@', '!'];

/// Delimiters that replace every space of a phrase.
pub const SENTENCE_DELIMITERS: &[char] = &['_', '-', '|'];

// ---------------------------------------------------------------------------
// Phrase tables
// ---------------------------------------------------------------------------

/// Phrase to abbreviation. Matching is by exact substring.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("par exemple", "p.ex."),
    ("c'est-\u{00E0}-dire", "c.-\u{00E0}-d."), // c'est-à-dire -> c.-à-d.
    ("s'il vous pla\u{00EE}t", "svp"),         // s'il vous plaît -> svp
];

/// Word to synonym. Matching is by exact substring.
///
/// "un exemple" has its own entry so the feminine article agrees with
/// "illustration"; the bare "exemple" entry still fires on its own.
pub const SYNONYMS: &[(&str, &str)] = &[
    ("information", "donn\u{00E9}e"), // donnée
    ("exemple", "illustration"),
    ("un exemple", "une illustration"),
];
