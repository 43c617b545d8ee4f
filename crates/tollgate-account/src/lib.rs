//! # tollgate-account
//!
//! In-memory model of broker accounts and the subjects they share.
//!
//! - [`Kind`]: the two sharing kinds (stream, service)
//! - [`Export`] / [`Import`]: what an account offers and consumes
//! - [`Account`]: one tenant with its ordered exports and imports
//! - [`AccountModel`]: every account of one configuration load, with
//!   identifier-based lookup for import sources
//! - [`config`]: the declarative account document and `build_model`
//!
//! The model is append-only while a configuration is being assembled and
//! read-only afterwards.

#![forbid(unsafe_code)]

pub mod config;
pub mod kind;
pub mod model;

pub use config::AccountsConfig;
pub use kind::Kind;
pub use model::{Account, AccountModel, Export, Import};
