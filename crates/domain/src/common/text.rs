//! String helpers.

/// Returns `None` for empty or whitespace-only input, otherwise the trimmed text.
pub fn none_if_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
