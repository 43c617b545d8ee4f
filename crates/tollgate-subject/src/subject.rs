//! Validated subject patterns.

use crate::matcher::{self, Token, tokenize};
use crate::{DELIMITER, FULL_WILDCARD};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tollgate_core::{Error, Result};

/// A well-formed subject pattern.
///
/// Construction through [`Subject::parse`] guarantees that the pattern is
/// non-empty, has no empty tokens, contains no whitespace, and uses `>` only
/// as its final token. Serializes as its plain string form and is validated
/// again on deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Subject(String);

impl Subject {
    /// Parses and validates a subject pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use tollgate_subject::Subject;
    ///
    /// assert!(Subject::parse("orders.*.created").is_ok());
    /// assert!(Subject::parse("orders.>").is_ok());
    /// assert!(Subject::parse("orders..created").is_err());
    /// assert!(Subject::parse("orders.>.created").is_err());
    /// ```
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if let Some(reason) = grammar_violation(&raw) {
            return Err(Error::invalid_subject(raw, reason));
        }
        Ok(Self(raw))
    }

    /// Returns the pattern as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the classified tokens of the pattern.
    pub fn tokens(&self) -> impl Iterator<Item = Token<'_>> {
        tokenize(&self.0)
    }

    /// Number of tokens in the pattern.
    pub fn token_count(&self) -> usize {
        self.tokens().count()
    }

    /// Returns `true` when the pattern contains `*` or `>`.
    pub fn has_wildcards(&self) -> bool {
        self.tokens().any(|token| token.is_wildcard())
    }

    /// Returns `true` when the pattern is a concrete subject.
    pub fn is_literal(&self) -> bool {
        !self.has_wildcards()
    }

    /// Whether this pattern and `other` admit a common concrete subject.
    pub fn overlaps(&self, other: &Subject) -> bool {
        matcher::overlaps(&self.0, &other.0)
    }

    /// Whether the concrete subject is matched by this pattern.
    pub fn matches(&self, subject: &str) -> bool {
        matcher::matches(&self.0, subject)
    }

    /// A concrete subject matched by both patterns, if they overlap.
    pub fn witness(&self, other: &Subject) -> Option<String> {
        matcher::witness(&self.0, &other.0)
    }

    /// The pattern matching exactly the subjects both patterns match, if
    /// they overlap.
    pub fn intersection(&self, other: &Subject) -> Option<Subject> {
        // tokens of two well-formed patterns recombine into a well-formed one
        matcher::intersection(&self.0, &other.0).map(Subject)
    }
}

fn grammar_violation(raw: &str) -> Option<&'static str> {
    if raw.is_empty() {
        return Some("subject is empty");
    }
    if raw.chars().any(char::is_whitespace) {
        return Some("subject contains whitespace");
    }

    let mut tokens = raw.split(DELIMITER).peekable();
    while let Some(token) = tokens.next() {
        if token.is_empty() {
            return Some("subject contains an empty token");
        }
        if token == FULL_WILDCARD && tokens.peek().is_some() {
            return Some("'>' wildcard must be the last token");
        }
    }
    None
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Subject {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Subject {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for Subject {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<Subject> for String {
    fn from(subject: Subject) -> Self {
        subject.0
    }
}

impl AsRef<str> for Subject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
