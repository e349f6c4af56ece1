//! URL and standard-name patterns.
//!
//! Both `for_pages_matching` targets and `skip_standard` arguments are
//! patterns: either literal text or a `/.../` regular expression. Literal
//! patterns match as substrings, regex patterns via [`Regex::is_match`], so
//! matching is unanchored in both forms.

use std::fmt;

use regex::Regex;
use serde::{Serialize, Serializer};

/// A pattern matched against page URLs or standard names.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Literal text, matched as a substring.
    Literal(String),
    /// A `/.../` regular expression.
    Regex(Regex),
}

impl Pattern {
    /// Compiles a regex pattern from its source text (without delimiters).
    pub fn regex(source: &str) -> Result<Self, regex::Error> {
        Ok(Pattern::Regex(Regex::new(source)?))
    }

    /// Returns true if this pattern matches `text`.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Pattern::Literal(literal) => text.contains(literal.as_str()),
            Pattern::Regex(regex) => regex.is_match(text),
        }
    }

    /// The pattern's source text, without delimiters.
    pub fn as_str(&self) -> &str {
        match self {
            Pattern::Literal(literal) => literal,
            Pattern::Regex(regex) => regex.as_str(),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(literal) => f.write_str(literal),
            Pattern::Regex(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

// Regexes compare by source text, so two patterns are equal when they were
// written the same way.
impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Pattern::Literal(a), Pattern::Literal(b)) => a == b,
            (Pattern::Regex(a), Pattern::Regex(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl Eq for Pattern {}

impl From<&str> for Pattern {
    fn from(literal: &str) -> Self {
        Pattern::Literal(literal.to_string())
    }
}

impl From<String> for Pattern {
    fn from(literal: String) -> Self {
        Pattern::Literal(literal)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Pattern::Regex(regex)
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
