// Input validation and the core error type

/// Error returned when generation cannot start.
///
/// Input validation is the only way the core can fail; every rule is
/// total over any non-empty string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VariationError {
    /// The input was absent, empty, or whitespace-only.
    #[error("input must be a non-empty string")]
    InvalidInput,
}

/// Check that `input` is present and not blank after trimming.
///
/// On success the input is returned unchanged (it is not trimmed), so
/// surrounding whitespace still takes part in generation.
pub fn validate_input(input: Option<&str>) -> Result<&str, VariationError> {
    match input {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(VariationError::InvalidInput),
    }
}
