// Allow-list markup sanitizer
//
// Parses the input with ammonia (html5ever) and re-serializes only the
// allow-listed tree, so it cannot be bypassed by malformed markup the way
// the pattern rules can.
use ammonia::Builder;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Formatting tags that survive `sanitize_html`
pub const ALLOWED_TAGS: &[&str] = &["b", "i", "em", "strong", "p", "br", "ul", "ol", "li", "a"];

/// Attributes permitted on `<a>`; no other tag carries attributes
pub const ALLOWED_LINK_ATTRIBUTES: &[&str] = &["href", "target", "rel"];

/// `rel` tokens kept on links; anything else (`opener` in particular) is dropped
pub const ALLOWED_REL_VALUES: &[&str] = &["noopener", "noreferrer", "nofollow"];

/// Schemes accepted in `href`. Relative URLs pass through.
pub const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Tags removed together with their contents
const CLEAN_CONTENT_TAGS: &[&str] = &["script", "style"];

fn base_builder() -> Builder<'static> {
    let mut builder = Builder::default();
    builder
        .generic_attributes(HashSet::new())
        .url_schemes(ALLOWED_URL_SCHEMES.iter().copied().collect())
        .clean_content_tags(CLEAN_CONTENT_TAGS.iter().copied().collect())
        .strip_comments(true)
        // `rel` is user-controlled here, which ammonia forbids alongside link_rel
        .link_rel(None);
    builder
}

static MARKUP_CLEANER: LazyLock<Builder<'static>> = LazyLock::new(markup_builder);
static STRIP_CLEANER: LazyLock<Builder<'static>> = LazyLock::new(strip_builder);

/// Reduce `rel` on links to the allow-listed tokens, removing it when none remain
fn filter_link_rel<'u>(element: &str, attribute: &str, value: &'u str) -> Option<Cow<'u, str>> {
    if element != "a" || attribute != "rel" {
        return Some(Cow::Borrowed(value));
    }
    let kept: Vec<String> = value
        .split_ascii_whitespace()
        .map(str::to_ascii_lowercase)
        .filter(|token| ALLOWED_REL_VALUES.contains(&token.as_str()))
        .collect();
    if kept.is_empty() {
        None
    } else {
        Some(Cow::Owned(kept.join(" ")))
    }
}

fn markup_builder() -> Builder<'static> {
    let mut builder = base_builder();
    let tag_attributes: HashMap<&str, HashSet<&str>> = HashMap::from([(
        "a",
        ALLOWED_LINK_ATTRIBUTES.iter().copied().collect(),
    )]);
    builder
        .tags(ALLOWED_TAGS.iter().copied().collect())
        .tag_attributes(tag_attributes)
        .attribute_filter(filter_link_rel);
    builder
}

fn strip_builder() -> Builder<'static> {
    let mut builder = base_builder();
    builder.tags(HashSet::new()).tag_attributes(HashMap::new());
    builder
}

/// Sanitize limited rich text: keep allow-listed formatting, drop everything else
pub fn sanitize_html(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    MARKUP_CLEANER.clean(input).to_string()
}

/// Strip all markup, keeping only text content (HTML-escaped where needed)
pub fn sanitize_stripped_text(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    STRIP_CLEANER.clean(input).to_string()
}

/// Null-preserving variant of [`sanitize_html`]
pub fn sanitize_html_opt(input: Option<&str>) -> Option<String> {
    input.map(sanitize_html)
}

/// Null-preserving variant of [`sanitize_stripped_text`]
pub fn sanitize_stripped_text_opt(input: Option<&str>) -> Option<String> {
    input.map(sanitize_stripped_text)
}
