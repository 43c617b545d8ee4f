//! Token-level subject matching.
//!
//! These functions work on raw strings and never fail: malformed input is
//! compared token by token like anything else. Use [`Subject`](crate::Subject)
//! when the grammar must be enforced.

use crate::{DELIMITER, FULL_WILDCARD, SINGLE_WILDCARD};

/// Placeholder literal used when a witness position is unconstrained.
const WITNESS_TOKEN: &str = "x";

/// A single classified subject token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// A literal token, compared character by character.
    Literal(&'a str),
    /// `*`: exactly one token.
    Single,
    /// `>`: one or more trailing tokens.
    Full,
}

impl<'a> Token<'a> {
    /// Classifies a raw token.
    ///
    /// Only a token consisting solely of `*` or `>` is a wildcard; `f*o` is a
    /// literal.
    pub fn classify(raw: &'a str) -> Self {
        match raw {
            SINGLE_WILDCARD => Self::Single,
            FULL_WILDCARD => Self::Full,
            literal => Self::Literal(literal),
        }
    }

    /// Returns `true` for `*` and `>`.
    pub fn is_wildcard(&self) -> bool {
        !matches!(self, Self::Literal(_))
    }

    /// Returns the literal text, if any.
    pub fn literal(&self) -> Option<&'a str> {
        match self {
            Self::Literal(text) => Some(*text),
            _ => None,
        }
    }
}

/// Splits a subject into classified tokens.
pub(crate) fn tokenize(subject: &str) -> impl Iterator<Item = Token<'_>> {
    subject.split(DELIMITER).map(Token::classify)
}

/// Check whether two subject patterns admit at least one common concrete
/// subject.
///
/// Walks both token sequences pairwise from the left:
/// - a `>` on either side ends the walk with an overlap
/// - a `*` on either side is compatible with any single token
/// - two literals must be equal
/// - if one side runs out of tokens before the other, there is no overlap
///
/// The relation is symmetric, and every pattern overlaps itself.
///
/// # Examples
///
/// ```
/// use tollgate_subject::overlaps;
///
/// assert!(overlaps("help", "help"));
/// assert!(overlaps("*", "help"));
/// assert!(overlaps("a.>", "a.b.c"));
/// assert!(!overlaps("a.>", "a"));
/// assert!(!overlaps("a.*", "a.b.c"));
/// ```
pub fn overlaps(left: &str, right: &str) -> bool {
    if left == right {
        return true;
    }

    let mut left = tokenize(left);
    let mut right = tokenize(right);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(_), None) | (None, Some(_)) => return false,
            (Some(Token::Full), Some(_)) | (Some(_), Some(Token::Full)) => return true,
            (Some(Token::Single), Some(_)) | (Some(_), Some(Token::Single)) => continue,
            (Some(Token::Literal(l)), Some(Token::Literal(r))) => {
                if l != r {
                    return false;
                }
            }
        }
    }
}

/// Check whether a concrete subject is matched by a pattern.
///
/// A subject containing wildcard tokens is not concrete and never matches.
///
/// # Examples
///
/// ```
/// use tollgate_subject::matches;
///
/// assert!(matches("orders.*", "orders.eu"));
/// assert!(matches("orders.>", "orders.eu.created"));
/// assert!(!matches("orders.>", "orders"));
/// assert!(!matches("orders.*", "orders.*"));
/// ```
pub fn matches(pattern: &str, subject: &str) -> bool {
    if subject.is_empty() || tokenize(subject).any(|token| token.is_wildcard()) {
        return false;
    }
    overlaps(pattern, subject)
}

/// Produce a concrete subject matched by both patterns, if they overlap.
///
/// Positions left open by wildcards on both sides are filled with a
/// placeholder token. Useful for telling an operator *why* two patterns
/// collide.
///
/// # Examples
///
/// ```
/// use tollgate_subject::witness;
///
/// assert_eq!(witness("orders.*", "*.eu"), Some("orders.eu".to_string()));
/// assert_eq!(witness("help", "nohelp"), None);
/// ```
pub fn witness(left: &str, right: &str) -> Option<String> {
    if !overlaps(left, right) {
        return None;
    }

    let left: Vec<Token<'_>> = tokenize(left).collect();
    let right: Vec<Token<'_>> = tokenize(right).collect();
    let mut out: Vec<&str> = Vec::with_capacity(left.len().max(right.len()));

    for (i, (l, r)) in left.iter().zip(right.iter()).enumerate() {
        match (l, r) {
            (Token::Full, Token::Full) => {
                out.push(WITNESS_TOKEN);
                break;
            }
            (Token::Full, _) => {
                out.extend(right[i..].iter().map(concrete));
                break;
            }
            (_, Token::Full) => {
                out.extend(left[i..].iter().map(concrete));
                break;
            }
            (Token::Literal(text), _) | (_, Token::Literal(text)) => out.push(*text),
            (Token::Single, Token::Single) => out.push(WITNESS_TOKEN),
        }
    }

    Some(out.join(&DELIMITER.to_string()))
}

/// The pattern matching exactly the subjects matched by both patterns.
///
/// Returns `None` when the patterns do not overlap. Literals win over
/// wildcards, two `*` stay `*`, and a `>` adopts whatever remains on the
/// other side.
///
/// # Examples
///
/// ```
/// use tollgate_subject::intersection;
///
/// assert_eq!(intersection("*", "help"), Some("help".to_string()));
/// assert_eq!(intersection("a.>", "*.b.*"), Some("a.b.*".to_string()));
/// assert_eq!(intersection("a.*", "*.*"), Some("a.*".to_string()));
/// assert_eq!(intersection("help", "nohelp"), None);
/// ```
pub fn intersection(left: &str, right: &str) -> Option<String> {
    if !overlaps(left, right) {
        return None;
    }
    if left == right {
        return Some(left.to_string());
    }

    let left: Vec<&str> = left.split(DELIMITER).collect();
    let right: Vec<&str> = right.split(DELIMITER).collect();
    let mut out: Vec<&str> = Vec::with_capacity(left.len().max(right.len()));

    for (i, (l, r)) in left.iter().copied().zip(right.iter().copied()).enumerate() {
        match (Token::classify(l), Token::classify(r)) {
            (Token::Full, Token::Full) => {
                out.push(FULL_WILDCARD);
                break;
            }
            (Token::Full, _) => {
                out.extend_from_slice(&right[i..]);
                break;
            }
            (_, Token::Full) => {
                out.extend_from_slice(&left[i..]);
                break;
            }
            (Token::Literal(text), _) | (_, Token::Literal(text)) => out.push(text),
            (Token::Single, Token::Single) => out.push(SINGLE_WILDCARD),
        }
    }

    Some(out.join(&DELIMITER.to_string()))
}

fn concrete<'a>(token: &Token<'a>) -> &'a str {
    match token {
        Token::Literal(text) => *text,
        Token::Single | Token::Full => WITNESS_TOKEN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // overlaps tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_overlaps_identical_literals() {
        assert!(overlaps("help", "help"));
        assert!(overlaps("a.b.c", "a.b.c"));
    }

    #[test]
    fn test_overlaps_different_literals() {
        assert!(!overlaps("help", "nohelp"));
        assert!(!overlaps("a.b.c", "a.b.d"));
    }

    #[test]
    fn test_overlaps_single_wildcard() {
        assert!(overlaps("*", "help"));
        assert!(overlaps("help", "*"));
        assert!(overlaps("a.*.c", "a.b.c"));
        assert!(overlaps("a.*", "*.b"));
        assert!(!overlaps("*", "a.b"));
        assert!(!overlaps("a.*.c", "a.b.d"));
    }

    #[test]
    fn test_overlaps_full_wildcard() {
        assert!(overlaps(">", "a"));
        assert!(overlaps(">", "a.b.c"));
        assert!(overlaps("a.>", "a.b"));
        assert!(overlaps("a.>", "a.*.c.d"));
        assert!(overlaps("a.>", "*.b.>"));
        assert!(!overlaps("a.>", "b.>"));
    }

    #[test]
    fn test_overlaps_full_wildcard_needs_a_token() {
        assert!(!overlaps("a.>", "a"));
        assert!(!overlaps("a", "a.>"));
    }

    #[test]
    fn test_overlaps_length_mismatch() {
        assert!(!overlaps("a.b", "a.b.c"));
        assert!(!overlaps("*.*", "*"));
        assert!(!overlaps("a.*", "a.b.c"));
    }

    #[test]
    fn test_overlaps_wildcard_chars_inside_literal() {
        assert!(!overlaps("f*o", "foo"));
        assert!(overlaps("f*o", "*"));
    }

    #[test]
    fn test_overlaps_mismatch_before_full_wildcard() {
        assert!(!overlaps("a.b.>", "a.c.>"));
        assert!(!overlaps("x.>", "y.z"));
    }

    // -------------------------------------------------------------------------
    // matches tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_matches_concrete_subject() {
        assert!(matches("help", "help"));
        assert!(matches("*", "help"));
        assert!(matches(">", "a.b"));
        assert!(!matches("a.*", "a"));
    }

    #[test]
    fn test_matches_rejects_wildcard_subject() {
        assert!(!matches("*", "*"));
        assert!(!matches(">", "a.>"));
        assert!(!matches(">", ""));
    }

    // -------------------------------------------------------------------------
    // witness tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_witness_prefers_literals() {
        assert_eq!(witness("a.*.c", "*.b.*"), Some("a.b.c".to_string()));
    }

    #[test]
    fn test_witness_fills_open_positions() {
        assert_eq!(witness("*", "*"), Some("x".to_string()));
        assert_eq!(witness(">", ">"), Some("x".to_string()));
        assert_eq!(witness("a.>", "*.*.c"), Some("a.x.c".to_string()));
    }

    #[test]
    fn test_witness_expands_full_wildcard() {
        assert_eq!(witness("a.>", "a.b.c"), Some("a.b.c".to_string()));
        assert_eq!(witness("*.b.>", "a.>"), Some("a.b.x".to_string()));
    }

    #[test]
    fn test_witness_none_without_overlap() {
        assert_eq!(witness("a.b", "a.c"), None);
        assert_eq!(witness("a.>", "a"), None);
    }

    // -------------------------------------------------------------------------
    // intersection tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_intersection_narrows_wildcards() {
        assert_eq!(intersection("*", "help"), Some("help".to_string()));
        assert_eq!(intersection("a.*", "*.b"), Some("a.b".to_string()));
        assert_eq!(intersection("*.*", "*.*"), Some("*.*".to_string()));
    }

    #[test]
    fn test_intersection_full_wildcard() {
        assert_eq!(intersection(">", "a.*"), Some("a.*".to_string()));
        assert_eq!(intersection("a.>", "*.>"), Some("a.>".to_string()));
        assert_eq!(intersection("a.>", "*.b.>"), Some("a.b.>".to_string()));
    }

    #[test]
    fn test_intersection_none_without_overlap() {
        assert_eq!(intersection("help", "nohelp"), None);
        assert_eq!(intersection("a.>", "a"), None);
    }

    // -------------------------------------------------------------------------
    // Token tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_token_classify() {
        assert_eq!(Token::classify("*"), Token::Single);
        assert_eq!(Token::classify(">"), Token::Full);
        assert_eq!(Token::classify("foo"), Token::Literal("foo"));
        assert_eq!(Token::classify(">>"), Token::Literal(">>"));
        assert_eq!(Token::classify("foo").literal(), Some("foo"));
        assert!(Token::Single.is_wildcard());
    }
}
