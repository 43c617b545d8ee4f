//! Account topologies that must be rejected or accepted.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::{expect_acyclic, expect_cycle, model};
use tollgate_account::Kind;
use tollgate_cycle::{ValidationPolicy, Validator};

#[test]
fn test_service_mutual_import() {
    let cycle = expect_cycle(
        r#"
        [accounts.A]
        exports = [ { service = "help" } ]
        imports = [ { service = { subject = "help", account = "B" } } ]

        [accounts.B]
        exports = [ { service = "help" } ]
        imports = [ { service = { subject = "help", account = "A" } } ]
        "#,
    );
    assert_eq!(cycle.kind, Kind::Service);
    assert_eq!(cycle.account.as_str(), "A");
    assert_eq!(cycle.source_account.as_str(), "B");
    assert_eq!(cycle.path.to_string(), "A:help -> B:help -> A");
    assert!(cycle.to_string().contains("import forms a cycle"));
}

#[test]
fn test_service_wildcard_closes_loop() {
    let cycle = expect_cycle(
        r#"
        [accounts.A]
        exports = [ { service = "*" } ]
        imports = [ { service = { subject = "help", account = "B" } } ]

        [accounts.B]
        exports = [ { service = "help" } ]
        imports = [ { service = { subject = "*", account = "A" } } ]
        "#,
    );
    assert_eq!(cycle.path.to_string(), "A:help -> B:* -> A");
}

#[test]
fn test_service_three_account_loop() {
    let cycle = expect_cycle(
        r#"
        [accounts.A]
        exports = [ { service = "*" } ]
        imports = [ { service = { subject = "help", account = "B" } } ]

        [accounts.B]
        exports = [ { service = "help" } ]
        imports = [ { service = { subject = "help", account = "C" } } ]

        [accounts.C]
        exports = [ { service = "*" } ]
        imports = [ { service = { subject = "*", account = "A" } } ]
        "#,
    );
    assert_eq!(cycle.path.to_string(), "A:help -> B:help -> C:* -> A");
}

#[test]
fn test_service_literal_mismatch_breaks_chain() {
    expect_acyclic(
        r#"
        [accounts.A]
        exports = [ { service = "*" } ]
        imports = [ { service = { subject = "help", account = "B" } } ]

        [accounts.B]
        exports = [ { service = "help" } ]
        imports = [ { service = { subject = "nohelp", account = "C" } } ]

        [accounts.C]
        exports = [ { service = "*" } ]
        imports = [ { service = { subject = "*", account = "A" } } ]
        "#,
    );
}

#[test]
fn test_service_chain_terminates() {
    expect_acyclic(
        r#"
        [accounts.A]
        exports = [ { service = "help" } ]
        imports = [ { service = { subject = "help", account = "B" } } ]

        [accounts.B]
        exports = [ { service = "help" } ]
        imports = [ { service = { subject = "help", account = "C" } } ]

        [accounts.C]
        exports = [ { service = "help" } ]
        imports = [ { service = { subject = "help", account = "D" } } ]

        [accounts.D]
        exports = [ { service = "help" } ]
        "#,
    );
}

#[test]
fn test_stream_mutual_import() {
    let cycle = expect_cycle(
        r#"
        [accounts.A]
        exports = [ { stream = "strm" } ]
        imports = [ { stream = { subject = "strm", account = "B" } } ]

        [accounts.B]
        exports = [ { stream = "strm" } ]
        imports = [ { stream = { subject = "strm", account = "A" } } ]
        "#,
    );
    assert_eq!(cycle.kind, Kind::Stream);
}

#[test]
fn test_stream_rename_closes_loop() {
    let cycle = expect_cycle(
        r#"
        [accounts.A]
        exports = [ { stream = "*" } ]
        imports = [ { stream = { subject = "bar", account = "B" } } ]

        [accounts.B]
        exports = [ { stream = "bar" } ]
        imports = [ { stream = { subject = "foo", account = "A" }, to = "bar" } ]
        "#,
    );
    assert_eq!(cycle.account.as_str(), "A");
    assert_eq!(cycle.path.to_string(), "A:bar -> B:foo -> A");
}

#[test]
fn test_stream_renames_without_loop() {
    expect_acyclic(
        r#"
        [accounts.A]
        exports = [ { stream = "foo" } ]
        imports = [ { stream = { subject = "bar", account = "B" } } ]

        [accounts.B]
        exports = [ { stream = "bar" } ]
        imports = [ { stream = { subject = "baz", account = "C" }, to = "bar" } ]

        [accounts.C]
        exports = [ { stream = "baz" } ]
        imports = [ { stream = { subject = "foo", account = "A" }, to = "bar" } ]
        "#,
    );
}

#[test]
fn test_service_mutual_rename() {
    let cycle = expect_cycle(
        r#"
        [accounts.A]
        exports = [ { service = "a" } ]
        imports = [ { service = { subject = "b", account = "B" }, to = "a" } ]

        [accounts.B]
        exports = [ { service = "b" } ]
        imports = [ { service = { subject = "a", account = "A" }, to = "b" } ]
        "#,
    );
    assert_eq!(cycle.path.to_string(), "A:b -> B:a -> A");
}

#[test]
fn test_mixed_kinds_do_not_form_a_loop() {
    expect_acyclic(
        r#"
        [accounts.A]
        exports = [ { service = "help" } ]
        imports = [ { stream = { subject = "help", account = "B" } } ]

        [accounts.B]
        exports = [ { stream = "help" } ]
        imports = [ { service = { subject = "help", account = "A" } } ]
        "#,
    );
}

#[test]
fn test_full_wildcard_overlaps_deeper_subject() {
    let cycle = expect_cycle(
        r#"
        [accounts.A]
        exports = [ { stream = "orders.>" } ]
        imports = [ { stream = { subject = "orders.eu.created", account = "B" } } ]

        [accounts.B]
        exports = [ { stream = "orders.eu.created" } ]
        imports = [ { stream = { subject = "orders.>", account = "A" } } ]
        "#,
    );
    assert_eq!(cycle.kind, Kind::Stream);
}

#[test]
fn test_full_wildcard_needs_trailing_token() {
    expect_acyclic(
        r#"
        [accounts.A]
        exports = [ { stream = "orders" } ]
        imports = [ { stream = { subject = "orders", account = "B" } } ]

        [accounts.B]
        exports = [ { stream = "orders" } ]
        imports = [ { stream = { subject = "orders.>", account = "A" } } ]
        "#,
    );
}

#[test]
fn test_sub_loop_is_reported_from_its_own_import() {
    // B <-> C loop; A only leads into it.
    let model = model(
        r#"
        [accounts.A]
        imports = [ { service = { subject = "help", account = "B" } } ]

        [accounts.B]
        exports = [ { service = "help" } ]
        imports = [ { service = { subject = "help", account = "C" } } ]

        [accounts.C]
        exports = [ { service = "help" } ]
        imports = [ { service = { subject = "help", account = "B" } } ]
        "#,
    );
    let report = Validator::new(ValidationPolicy::Exhaustive).validate(&model);
    let origins: Vec<&str> = report.cycles.iter().map(|c| c.account.as_str()).collect();
    assert_eq!(origins, vec!["B", "C"]);
}

#[test]
fn test_exhaustive_report_serializes() {
    let model = model(
        r#"
        [accounts.A]
        imports = [ { stream = { subject = "x", account = "B" } } ]

        [accounts.B]
        imports = [ { stream = { subject = "x", account = "A" } } ]
        "#,
    );
    let report = Validator::new(ValidationPolicy::Exhaustive).validate(&model);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["accounts"], 2);
    assert_eq!(json["imports_checked"], 2);
    assert_eq!(json["cycles"].as_array().unwrap().len(), 2);
}
