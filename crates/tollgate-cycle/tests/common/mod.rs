//! Common helpers for cycle detection tests.

#![allow(dead_code)]

use tollgate_account::{AccountModel, AccountsConfig};
use tollgate_cycle::{CycleError, validate_no_cycles};

/// Builds a model from an inline TOML account document.
pub fn model(toml: &str) -> AccountModel {
    AccountsConfig::from_toml_str(toml)
        .expect("valid account document")
        .build_model()
        .expect("model builds")
}

/// Validates an inline document, expecting a cycle.
pub fn expect_cycle(toml: &str) -> CycleError {
    match validate_no_cycles(&model(toml)) {
        Err(cycle) => cycle,
        Ok(()) => unreachable!("Expected an import cycle in:\n{toml}"),
    }
}

/// Validates an inline document, expecting no cycle.
pub fn expect_acyclic(toml: &str) {
    if let Err(cycle) = validate_no_cycles(&model(toml)) {
        unreachable!("Expected no import cycle but got: {cycle}");
    }
}
