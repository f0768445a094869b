// Context-specific encoders

/// Escape a value for use inside a single- or double-quoted script string
/// literal. Closing-tag and line-terminator sequences are escaped as well so
/// the literal cannot end the surrounding `<script>` element.
pub fn escape_javascript(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '<' => out.push_str("\\x3C"),
            '>' => out.push_str("\\x3E"),
            '/' => out.push_str("\\/"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}

/// Null-preserving script-literal encoder
pub fn sanitize_javascript(input: Option<&str>) -> Option<String> {
    input.map(escape_javascript)
}

/// Encode a value for a quoted or unquoted HTML attribute
pub fn escape_attribute(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '`' => out.push_str("&#x60;"),
            '=' => out.push_str("&#x3D;"),
            '/' => out.push_str("&#x2F;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(c),
        }
    }
    out
}

/// Null-preserving attribute encoder
pub fn encode_attribute(input: Option<&str>) -> Option<String> {
    input.map(escape_attribute)
}
