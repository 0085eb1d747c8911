//! Labelled field extraction from free text
//!
//! Each customer field is located by its own matcher, independently of the
//! others, so fields may appear in any order and be interleaved with unrelated
//! text. A field that cannot be found resolves to [`NOT_FOUND`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::customer::{CustomerRecord, NOT_FOUND};

/// A field of [`CustomerRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    FirstName,
    LastName,
    Address,
}

/// What to capture after a field label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureRule {
    /// Maximal run of word characters
    Token,
    /// Remainder of the line, trimmed
    RestOfLine,
}

impl CaptureRule {
    fn pattern(&self) -> &'static str {
        match self {
            Self::Token => r"(\w+)",
            Self::RestOfLine => r"(.+)",
        }
    }
}

/// Locates one field by its `"<label>: "` prefix
#[derive(Debug, Clone)]
pub struct FieldMatcher {
    field: RecordField,
    label: &'static str,
    rule: CaptureRule,
    pattern: Regex,
}

impl FieldMatcher {
    /// Build a matcher for `"<label>: "` followed by the capture rule
    pub fn new(
        field: RecordField,
        label: &'static str,
        rule: CaptureRule,
    ) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!("{}: {}", regex::escape(label), rule.pattern()))?;

        Ok(Self {
            field,
            label,
            rule,
            pattern,
        })
    }

    pub fn field(&self) -> RecordField {
        self.field
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn rule(&self) -> CaptureRule {
        self.rule
    }

    /// First match in the text, case-sensitive
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().trim())
    }
}

static STATEMENT_MATCHERS: Lazy<Vec<FieldMatcher>> = Lazy::new(|| {
    vec![
        FieldMatcher::new(RecordField::FirstName, "First Name", CaptureRule::Token).unwrap(),
        FieldMatcher::new(RecordField::LastName, "Last Name", CaptureRule::Token).unwrap(),
        FieldMatcher::new(RecordField::Address, "Address", CaptureRule::RestOfLine).unwrap(),
    ]
});

/// The matcher table used for bank statements
pub fn statement_matchers() -> &'static [FieldMatcher] {
    &STATEMENT_MATCHERS
}

/// Extract a customer record from free text using a matcher table
///
/// Never fails: unmatched fields hold [`NOT_FOUND`].
pub fn extract_fields(text: &str, matchers: &[FieldMatcher]) -> CustomerRecord {
    let lookup = |field: RecordField| -> String {
        matchers
            .iter()
            .filter(|matcher| matcher.field() == field)
            .find_map(|matcher| matcher.find(text))
            .unwrap_or(NOT_FOUND)
            .to_string()
    };

    CustomerRecord::new(
        lookup(RecordField::FirstName),
        lookup(RecordField::LastName),
        lookup(RecordField::Address),
    )
}

/// Extract a customer record using the statement matcher table
pub fn extract_statement_fields(text: &str) -> CustomerRecord {
    extract_fields(text, statement_matchers())
}
