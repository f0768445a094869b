// Input sanitization
//
// Two independent layers: the pattern/encoding path (`text`, `truncate`) for
// output that is never interpreted as live HTML, and the parse-and-filter
// path (`markup`) for limited rich text. Neither relies on the other.
pub mod encode;
pub mod markup;
pub mod patterns;
pub mod text;
pub mod truncate;

pub use encode::{encode_attribute, escape_attribute, escape_javascript, sanitize_javascript};
pub use markup::{
    sanitize_html, sanitize_html_opt, sanitize_stripped_text, sanitize_stripped_text_opt,
};
pub use patterns::{is_dangerous, scan, RuleKind};
pub use text::{sanitize, sanitize_str};
pub use truncate::sanitize_and_truncate;

use serde::{Deserialize, Serialize};

/// Syntactic destination of a string, selecting the matching sanitizer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum OutputContext {
    /// Plain text or attribute value, pattern removal plus entity encoding
    #[default]
    PlainText,
    /// Limited rich text through the allow-list parser
    Markup,
    /// All markup removed, text content kept
    StrippedText,
    /// Inside a quoted script string literal
    ScriptLiteral,
    /// Inside an HTML attribute value
    Attribute,
}

impl OutputContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputContext::PlainText => "plain_text",
            OutputContext::Markup => "markup",
            OutputContext::StrippedText => "stripped_text",
            OutputContext::ScriptLiteral => "script_literal",
            OutputContext::Attribute => "attribute",
        }
    }

    /// Sanitize `input` for this context
    pub fn apply(&self, input: &str) -> String {
        match self {
            OutputContext::PlainText => sanitize_str(input),
            OutputContext::Markup => sanitize_html(input),
            OutputContext::StrippedText => sanitize_stripped_text(input),
            OutputContext::ScriptLiteral => escape_javascript(input),
            OutputContext::Attribute => escape_attribute(input),
        }
    }

    pub fn apply_opt(&self, input: Option<&str>) -> Option<String> {
        input.map(|text| self.apply(text))
    }
}

impl std::fmt::Display for OutputContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_context_dispatch() {
        let input = "<b>it's</b>";
        assert_eq!(OutputContext::PlainText.apply(input), "&lt;b&gt;it&#x27;s&lt;&#x2F;b&gt;");
        assert_eq!(OutputContext::Markup.apply(input), "<b>it's</b>");
        assert_eq!(OutputContext::StrippedText.apply(input), "it's");
        assert_eq!(OutputContext::ScriptLiteral.apply(input), "\\x3Cb\\x3Eit\\'s\\x3C\\/b\\x3E");
        assert_eq!(
            OutputContext::Attribute.apply(input),
            "&lt;b&gt;it&#x27;s&lt;&#x2F;b&gt;"
        );
    }

    #[test]
    fn test_output_context_null_preserving() {
        for context in [
            OutputContext::PlainText,
            OutputContext::Markup,
            OutputContext::StrippedText,
            OutputContext::ScriptLiteral,
            OutputContext::Attribute,
        ] {
            assert_eq!(context.apply_opt(None), None);
        }
    }

    #[test]
    fn test_output_context_serde() {
        let context: OutputContext = serde_json::from_str("\"script_literal\"").unwrap();
        assert_eq!(context, OutputContext::ScriptLiteral);
        assert_eq!(
            serde_json::to_string(&OutputContext::PlainText).unwrap(),
            "\"plain_text\""
        );
        assert_eq!(OutputContext::default(), OutputContext::PlainText);
    }
}
