//! # tollgate-cycle
//!
//! Configuration-time proof that account imports cannot forward traffic in
//! a loop.
//!
//! For every import, a depth-first search over the same-kind import graph
//! decides whether satisfying the import eventually depends on the importing
//! account itself. Subjects are followed through wildcard overlap and local
//! renames along the way.
//!
//! - [`detector`]: the per-import search ([`forms_cycle`])
//! - [`validate`]: whole-model validation and checked construction
//! - [`report`]: structured cycle diagnostics
//! - [`graph`]: a DOT view of the import graph for operators
//!
//! ```
//! use tollgate_account::AccountsConfig;
//! use tollgate_cycle::validate_no_cycles;
//!
//! let config = AccountsConfig::from_toml_str(r#"
//!     [accounts.A]
//!     exports = [ { service = "help" } ]
//!     imports = [ { service = { subject = "help", account = "B" } } ]
//!
//!     [accounts.B]
//!     exports = [ { service = "help" } ]
//!     imports = [ { service = { subject = "help", account = "A" } } ]
//! "#).unwrap();
//!
//! let model = config.build_model().unwrap();
//! let err = validate_no_cycles(&model).unwrap_err();
//! assert!(err.to_string().contains("import forms a cycle"));
//! ```

#![forbid(unsafe_code)]

pub mod detector;
pub mod error;
pub mod graph;
pub mod report;
pub mod validate;

pub use detector::forms_cycle;
pub use error::{Error, Result};
pub use graph::ImportGraph;
pub use report::{CycleError, CyclePath, Hop, ValidationReport};
pub use validate::{
    CheckedImport, ValidationPolicy, Validator, check_import, load_and_validate,
    validate_no_cycles, validate_no_cycles_exhaustive,
};
