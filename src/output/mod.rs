// Output: CSV frequency tables and terminal display.

pub mod csv;
pub mod terminal;
pub mod traits;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Counts characters, not bytes, so Cyrillic text and URLs with percent-encoded
/// segments never get cut mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
