// Plain-text sanitizer: pattern removal followed by entity encoding

use super::patterns::strip_dangerous;

/// Entity-encode the five characters that can open markup or break out of
/// an attribute value. `&` is deliberately left alone so already-encoded
/// text is not double-encoded.
pub fn encode_special_chars(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

/// Sanitize text destined for a plain-text or attribute-value context.
///
/// Every pattern rule runs before encoding so leftover angle brackets from a
/// partially stripped construct are neutralized by the encoding pass.
pub fn sanitize_str(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let stripped = strip_dangerous(input);
    encode_special_chars(&stripped)
}

/// Null-preserving plain-text sanitizer
pub fn sanitize(input: Option<&str>) -> Option<String> {
    input.map(sanitize_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_none_and_empty() {
        assert_eq!(sanitize(None), None);
        assert_eq!(sanitize(Some("")), Some(String::new()));
    }

    #[test]
    fn test_encode_special_chars() {
        assert_eq!(
            encode_special_chars(r#"<a href="x/y">'q'</a>"#),
            "&lt;a href=&quot;x&#x2F;y&quot;&gt;&#x27;q&#x27;&lt;&#x2F;a&gt;"
        );
        assert_eq!(encode_special_chars("Tom & Jerry"), "Tom & Jerry");
    }

    #[test]
    fn test_sanitize_plain_text_unchanged() {
        assert_eq!(sanitize_str("John Smith"), "John Smith");
        assert_eq!(sanitize_str("123 Main St, Apt 4B"), "123 Main St, Apt 4B");
    }

    #[test]
    fn test_sanitize_script() {
        assert_eq!(sanitize_str("Hi <script>alert('xss')</script>there"), "Hi there");
    }

    #[test]
    fn test_sanitize_leftover_brackets_encoded() {
        assert_eq!(
            sanitize_str("<img src=x onerror=alert(1)>"),
            "&lt;img src=x &gt;"
        );
        assert_eq!(sanitize_str("<iframe src=evil></iframe>"), "&lt;&#x2F;iframe&gt;");
    }

    #[test]
    fn test_sanitize_unicode() {
        assert_eq!(sanitize_str("Hello 你好 مرحبا"), "Hello 你好 مرحبا");
        assert_eq!(sanitize_str("Café <b>"), "Café &lt;b&gt;");
    }
}
