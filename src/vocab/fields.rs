//! Splitting packed note fields

/// Separator Anki stores between the fields of a note
pub const FIELD_SEPARATOR: char = '\x1f';

/// Split a packed field string into trimmed values.
///
/// A string without separators is a single field.
pub fn split_fields(raw: &str) -> Vec<String> {
    raw.split(FIELD_SEPARATOR)
        .map(|field| field.trim().to_string())
        .collect()
}
