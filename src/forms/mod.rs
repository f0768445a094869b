// Write-path request types
//
// Every free-text field a user can submit is validated here and passed
// through the sanitizer before it is handed to persistence.
pub mod profile;
pub mod saved_resource;

pub use profile::ProfileUpdate;
pub use saved_resource::SavedResourceRequest;

use crate::sanitize::{sanitize_and_truncate, scan, OutputContext};
use crate::utils::validation::validate_field_size;
use crate::{Error, Result};
use tracing::warn;

/// Validate the raw size of an optional field, then sanitize and cap it
pub(crate) fn clean_field(
    field: &str,
    value: Option<&str>,
    max_input_bytes: usize,
    max_length: usize,
) -> Result<Option<String>> {
    let Some(raw) = value else {
        return Ok(None);
    };

    validate_field_size(field, raw, max_input_bytes)?;

    let findings = scan(raw);
    if !findings.is_empty() {
        let rules: Vec<&str> = findings.iter().map(|kind| kind.as_str()).collect();
        warn!(
            "Security: Neutralized markup in field {} (rules: {})",
            field,
            rules.join(", ")
        );
    }

    Ok(sanitize_and_truncate(Some(raw), max_length))
}

/// Sanitize free text for `context`.
///
/// A length cap is only meaningful for plain text; truncating markup or an
/// escaped literal could cut it mid-construct, so that combination is rejected.
pub fn sanitize_for_context(
    text: Option<&str>,
    context: OutputContext,
    max_length: Option<usize>,
) -> Result<Option<String>> {
    match (context, max_length) {
        (OutputContext::PlainText, Some(max_length)) => Ok(sanitize_and_truncate(text, max_length)),
        (_, Some(_)) => Err(Error::Validation(
            "max_length is only supported for the plain_text context".to_string(),
        )),
        (context, None) => Ok(context.apply_opt(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_for_context_truncates_plain_text() {
        let text = "A".repeat(20);
        let out = sanitize_for_context(Some(&text), OutputContext::PlainText, Some(5)).unwrap();
        assert_eq!(out.as_deref(), Some("AAAAA"));
    }

    #[test]
    fn test_sanitize_for_context_rejects_capped_markup() {
        let result = sanitize_for_context(Some("<b>x</b>"), OutputContext::Markup, Some(5));
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_sanitize_for_context_null_preserving() {
        let out = sanitize_for_context(None, OutputContext::Attribute, None).unwrap();
        assert_eq!(out, None);
    }

    #[test]
    fn test_clean_field_passes_none_through() {
        assert_eq!(clean_field("notes", None, 100, 10).unwrap(), None);
    }

    #[test]
    fn test_clean_field_rejects_oversized_raw_input() {
        let raw = "x".repeat(101);
        assert!(clean_field("notes", Some(&raw), 100, 10).is_err());
    }

    #[test]
    fn test_clean_field_sanitizes_then_caps() {
        let cleaned = clean_field("notes", Some("<script>x</script>hello world"), 100, 5)
            .unwrap()
            .unwrap();
        assert_eq!(cleaned, "hello");
    }
}
