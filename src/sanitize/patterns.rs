// Pattern library for the plain-text sanitizer
//
// The regex crate compiles to finite automata and never backtracks, which
// makes a single search linear. `replace_all` restarts after every match, so
// a rule is only linear overall if the text it scans past a match is bounded
// by what it consumes. Optional tails therefore stop at the next delimiter:
// the call rule's argument scan ends at the next paren of either kind.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Upper bound on removal passes before residue is neutralized by encoding
const MAX_REMOVAL_PASSES: usize = 8;

/// Category of dangerous construct a rule detects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    ScriptTag,
    EventHandler,
    UrlScheme,
    DangerousCall,
    EmbedTag,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::ScriptTag => "script_tag",
            RuleKind::EventHandler => "event_handler",
            RuleKind::UrlScheme => "url_scheme",
            RuleKind::DangerousCall => "dangerous_call",
            RuleKind::EmbedTag => "embed_tag",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single removal rule
pub struct Rule {
    pub kind: RuleKind,
    pub pattern: Regex,
    pub replacement: &'static str,
}

fn rule(kind: RuleKind, pattern: &str) -> Rule {
    Rule {
        kind,
        // Patterns are fixed literals covered by tests
        pattern: Regex::new(pattern).expect("built-in sanitizer pattern must compile"),
        replacement: "",
    }
}

/// Ordered rule table. Block removals come before single-tag removals so a
/// complete `<script>...</script>` takes its body with it.
pub static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        rule(RuleKind::ScriptTag, r"(?is)<\s*script\b[^>]*>.*?<\s*/\s*script\s*>"),
        rule(RuleKind::ScriptTag, r"(?i)<\s*script\b[^>]*>?"),
        rule(
            RuleKind::EventHandler,
            r#"(?i)on[a-z]+\s*=\s*(?:"[^"]*"?|'[^']*'?|[^\s>]*)"#,
        ),
        rule(RuleKind::UrlScheme, r"(?i)(?:java|vb)script\s*:"),
        rule(
            RuleKind::DangerousCall,
            r"(?i)(?:eval|expression)\s*\((?:[^()]*\))?",
        ),
        rule(RuleKind::EmbedTag, r"(?i)<\s*(?:iframe|object|embed)\b[^>]*>?"),
    ]
});

/// Tokens that must not survive removal. Used after the pass bound is hit.
static RESIDUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)on[a-z]+\s*=|(?:java|vb)script\s*:|(?:eval|expression)\s*\(")
        .expect("built-in residue pattern must compile")
});

/// Run every rule once, in order. Returns `None` when nothing matched.
fn apply_rules_once(input: &str) -> Option<String> {
    let mut text: Option<String> = None;
    for rule in RULES.iter() {
        let current = text.as_deref().unwrap_or(input);
        if rule.pattern.is_match(current) {
            let replaced = rule.pattern.replace_all(current, rule.replacement).into_owned();
            text = Some(replaced);
        }
    }
    text
}

/// Encode the trailing trigger character of a residual token
fn neutralize_token(token: &str) -> String {
    let mut out = String::with_capacity(token.len() + 5);
    let mut chars = token.chars();
    let last = chars.next_back();
    out.push_str(chars.as_str());
    match last {
        Some('=') => out.push_str("&#x3D;"),
        Some(':') => out.push_str("&#x3A;"),
        Some('(') => out.push_str("&#x28;"),
        Some(c) => out.push(c),
        None => {}
    }
    out
}

/// Remove every dangerous construct.
///
/// Rules are re-applied until a pass changes nothing, so removal cannot
/// splice two fragments into a new vector (`javajavascript:script:`).
/// Input needing more than `MAX_REMOVAL_PASSES` passes has its remaining
/// tokens defused by encoding their trigger character instead.
pub fn strip_dangerous(input: &str) -> String {
    let mut text = input.to_string();

    for _ in 0..MAX_REMOVAL_PASSES {
        match apply_rules_once(&text) {
            Some(next) => text = next,
            None => return text,
        }
    }

    // Each replacement removes one of `=`, `:` or `(` and adds none, so this ends
    while RESIDUE.is_match(&text) {
        text = RESIDUE
            .replace_all(&text, |caps: &regex::Captures<'_>| neutralize_token(&caps[0]))
            .into_owned();
    }

    text
}

/// Report which rule categories match the input, without modifying it
pub fn scan(input: &str) -> Vec<RuleKind> {
    let mut found: Vec<RuleKind> = RULES
        .iter()
        .filter(|rule| rule.pattern.is_match(input))
        .map(|rule| rule.kind)
        .collect();
    found.sort();
    found.dedup();
    found
}

/// True when any rule matches
pub fn is_dangerous(input: &str) -> bool {
    RULES.iter().any(|rule| rule.pattern.is_match(input))
}
