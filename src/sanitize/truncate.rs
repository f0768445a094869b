// Sanitize-then-truncate wrapper

use super::text::sanitize_str;

/// Keep the first `max_chars` characters of `text`
fn truncate_chars(text: String, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text,
    }
}

/// Sanitize the full input, then cap the safe output at `max_length`
/// characters. Output that already fits is returned unmodified.
pub fn sanitize_and_truncate(input: Option<&str>, max_length: usize) -> Option<String> {
    input.map(|raw| truncate_chars(sanitize_str(raw), max_length))
}
