//! # tollgate-subject
//!
//! Hierarchical subject patterns for account exports and imports.
//!
//! A subject is a sequence of tokens separated by `.`. Besides literal
//! tokens, two wildcards exist:
//!
//! - `*` matches exactly one token at its position
//! - `>` matches one or more trailing tokens and may only appear last
//!
//! The central question answered here is whether two patterns *overlap*,
//! i.e. admit at least one concrete subject in common.
//!
//! ```
//! use tollgate_subject::{overlaps, Subject};
//!
//! assert!(overlaps("orders.*", "orders.eu"));
//! assert!(!overlaps("help", "nohelp"));
//!
//! let wide = Subject::parse("orders.>").unwrap();
//! let narrow = Subject::parse("orders.*.created").unwrap();
//! assert!(wide.overlaps(&narrow));
//! ```

#![forbid(unsafe_code)]

pub mod matcher;
pub mod subject;

mod proptests;

pub use matcher::{intersection, matches, overlaps, witness, Token};
pub use subject::Subject;

/// Separator between subject tokens.
pub const DELIMITER: char = '.';

/// Wildcard matching exactly one token.
pub const SINGLE_WILDCARD: &str = "*";

/// Wildcard matching one or more trailing tokens.
pub const FULL_WILDCARD: &str = ">";
