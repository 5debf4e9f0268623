// Variation status: the input being varied, the number source, and the
// deduplicated set of candidates collected so far.

use hashbrown::HashSet;

use super::random::NumberSource;

/// Per-generation state shared by every rule of a strategy.
///
/// A status is created empty for one input, filled by the rules, and
/// consumed by [`into_variations`](VariationStatus::into_variations).
/// Nothing survives between generations.
pub struct VariationStatus<'a> {
    /// The validated input.
    text: &'a str,
    /// Source for numeric decoration.
    numbers: &'a mut dyn NumberSource,
    /// Collected variations, unique by exact value.
    variations: HashSet<String>,
}

impl<'a> VariationStatus<'a> {
    pub fn new(text: &'a str, numbers: &'a mut dyn NumberSource) -> Self {
        Self {
            text,
            numbers,
            variations: HashSet::new(),
        }
    }

    /// The input being varied.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Add a candidate. Returns `false` if it was already present.
    pub fn add(&mut self, variation: String) -> bool {
        self.variations.insert(variation)
    }

    /// Add every candidate from `variations`.
    pub fn extend<I: IntoIterator<Item = String>>(&mut self, variations: I) {
        self.variations.extend(variations);
    }

    /// Draw one decoration number from the number source.
    pub fn draw_number(&mut self) -> u32 {
        self.numbers.draw()
    }

    pub fn contains(&self, variation: &str) -> bool {
        self.variations.contains(variation)
    }

    pub fn len(&self) -> usize {
        self.variations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variations.is_empty()
    }

    /// Consume the status and return the variations in arbitrary order.
    pub fn into_variations(self) -> Vec<String> {
        self.variations.into_iter().collect()
    }
}
