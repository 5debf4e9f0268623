// Variation options: one boolean per optional rule family

use serde::{Deserialize, Serialize};

/// Flags selecting which optional rules run.
///
/// Every field is required and no flag implies another. There is no
/// `Default` impl; call sites pick [`VariationOptions::all`] or
/// [`VariationOptions::none`] and adjust from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariationOptions {
    /// Leet-speak substitution (words and phrases).
    pub leet: bool,
    /// Abbreviation substitution (phrases only).
    pub abbreviations: bool,
    /// Synonym substitution (phrases only).
    pub synonyms: bool,
    /// Symbol wrapping for words, delimiter replacement for phrases.
    pub special_chars: bool,
    /// Lower/upper/capitalized/title case variants.
    pub case: bool,
    /// Accent toggling (words only).
    pub accents: bool,
    /// Vowel removal (words only).
    pub remove_vowels: bool,
}

impl VariationOptions {
    /// Every flag enabled. This is what the command line uses when the
    /// input is passed as an argument.
    pub const fn all() -> Self {
        Self {
            leet: true,
            abbreviations: true,
            synonyms: true,
            special_chars: true,
            case: true,
            accents: true,
            remove_vowels: true,
        }
    }

    /// Every flag disabled. Only the unconditional rules run.
    pub const fn none() -> Self {
        Self {
            leet: false,
            abbreviations: false,
            synonyms: false,
            special_chars: false,
            case: false,
            accents: false,
            remove_vowels: false,
        }
    }

    /// Return the state of a single flag.
    pub fn is_enabled(&self, flag: OptionFlag) -> bool {
        match flag {
            OptionFlag::Leet => self.leet,
            OptionFlag::Abbreviations => self.abbreviations,
            OptionFlag::Synonyms => self.synonyms,
            OptionFlag::SpecialChars => self.special_chars,
            OptionFlag::Case => self.case,
            OptionFlag::Accents => self.accents,
            OptionFlag::RemoveVowels => self.remove_vowels,
        }
    }

    /// Set a single flag.
    pub fn set(&mut self, flag: OptionFlag, enabled: bool) {
        let field = match flag {
            OptionFlag::Leet => &mut self.leet,
            OptionFlag::Abbreviations => &mut self.abbreviations,
            OptionFlag::Synonyms => &mut self.synonyms,
            OptionFlag::SpecialChars => &mut self.special_chars,
            OptionFlag::Case => &mut self.case,
            OptionFlag::Accents => &mut self.accents,
            OptionFlag::RemoveVowels => &mut self.remove_vowels,
        };
        *field = enabled;
    }

    /// Copy of these options with the given flags turned off.
    pub fn without(mut self, flags: &[OptionFlag]) -> Self {
        for &flag in flags {
            self.set(flag, false);
        }
        self
    }
}

/// Name of a single option flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionFlag {
    Leet,
    Abbreviations,
    Synonyms,
    SpecialChars,
    Case,
    Accents,
    RemoveVowels,
}

impl OptionFlag {
    /// All flags, in the order they are asked interactively.
    pub const ALL: [OptionFlag; 7] = [
        OptionFlag::Leet,
        OptionFlag::Abbreviations,
        OptionFlag::Synonyms,
        OptionFlag::SpecialChars,
        OptionFlag::Case,
        OptionFlag::Accents,
        OptionFlag::RemoveVowels,
    ];

    /// The snake_case key of the flag, identical to the serialized field
    /// name of [`VariationOptions`].
    pub fn name(self) -> &'static str {
        match self {
            OptionFlag::Leet => "leet",
            OptionFlag::Abbreviations => "abbreviations",
            OptionFlag::Synonyms => "synonyms",
            OptionFlag::SpecialChars => "special_chars",
            OptionFlag::Case => "case",
            OptionFlag::Accents => "accents",
            OptionFlag::RemoveVowels => "remove_vowels",
        }
    }

    /// Look up a flag by its snake_case key.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.name() == name)
    }

    /// Question put to the user when options are collected interactively.
    pub fn question(self) -> &'static str {
        match self {
            OptionFlag::Leet => "Generate leet speak (1337) variations?",
            OptionFlag::Abbreviations => "Use common abbreviations?",
            OptionFlag::Synonyms => "Use synonyms?",
            OptionFlag::SpecialChars => "Add special characters?",
            OptionFlag::Case => "Generate case variations?",
            OptionFlag::Accents => "Toggle accents?",
            OptionFlag::RemoveVowels => "Remove vowels for some variations?",
        }
    }
}
