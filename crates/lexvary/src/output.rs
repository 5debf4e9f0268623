// Serialization of a variation list to text, JSON or a named list literal.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

/// List name used when the caller does not give one.
pub const DEFAULT_LIST_NAME: &str = "variations";

/// Error type for writing variation lists.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to write variations: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode variations as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The list name is not a valid identifier.
    #[error("invalid list name: {0:?}")]
    InvalidListName(String),
}

/// File format for a saved variation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// `name = ['a', 'b']`, a named list literal.
    Python,
    /// `{"name": "...", "variations": [...]}`, pretty-printed.
    Json,
    /// One variation per line, written verbatim.
    Lines,
}

#[derive(Serialize)]
struct JsonList<'a> {
    name: &'a str,
    variations: &'a [String],
}

/// Check that `name` can be used as the list identifier: a letter or `_`
/// followed by letters, digits or `_`.
pub fn is_valid_list_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Render `text` as a single-line string literal.
///
/// Single quotes are used unless the text contains a single quote and no
/// double quote. Backslashes, the chosen quote and control characters are
/// escaped; other characters, including non-ASCII letters, are kept.
pub fn string_literal(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            // control characters are all below U+00A0
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Render the whole assignment `name = [...]`.
pub fn list_literal(name: &str, variations: &[String]) -> String {
    let items: Vec<String> = variations.iter().map(|v| string_literal(v)).collect();
    format!("{name} = [{}]", items.join(", "))
}

/// Reject `name` if `format` writes it and it is not a valid identifier.
/// The `Lines` format ignores the name.
pub fn check_list_name(format: OutputFormat, name: &str) -> Result<(), OutputError> {
    match format {
        OutputFormat::Lines => Ok(()),
        OutputFormat::Python | OutputFormat::Json if is_valid_list_name(name) => Ok(()),
        OutputFormat::Python | OutputFormat::Json => {
            Err(OutputError::InvalidListName(name.to_string()))
        }
    }
}

/// Write `variations` to `writer` in `format`.
///
/// `name` is used by the Python and JSON formats, where it must pass
/// [`is_valid_list_name`]. Nothing is written when it does not.
pub fn write_variations<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    name: &str,
    variations: &[String],
) -> Result<(), OutputError> {
    check_list_name(format, name)?;
    match format {
        OutputFormat::Python => {
            writeln!(writer, "{}", list_literal(name, variations))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, &JsonList { name, variations })?;
            writeln!(writer)?;
        }
        OutputFormat::Lines => {
            for variation in variations {
                writeln!(writer, "{variation}")?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) the file at `path` and write `variations` to it.
///
/// The list name is checked first; a rejected name leaves any existing
/// file untouched.
pub fn save_variations(
    path: &Path,
    format: OutputFormat,
    name: &str,
    variations: &[String],
) -> Result<(), OutputError> {
    check_list_name(format, name)?;
    let mut writer = BufWriter::new(File::create(path)?);
    write_variations(&mut writer, format, name, variations)
}

/// Print a human-readable listing: a header, then one `- variation` line
/// per entry.
pub fn display_variations<W: Write>(writer: &mut W, variations: &[String]) -> io::Result<()> {
    writeln!(writer, "Generated variations:")?;
    for variation in variations {
        writeln!(writer, "- {variation}")?;
    }
    Ok(())
}
