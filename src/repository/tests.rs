//! Tests for the repository module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use test_case::test_case;

// ============================================================================
// Query Helpers
// ============================================================================

#[test_case("my-org", "my-org" ; "plain")]
#[test_case("name:value", "name%3Avalue" ; "colon")]
#[test_case("my app", "my+app" ; "space")]
#[test_case("a;b", "a%3Bb" ; "semicolon")]
#[test_case("", "" ; "empty")]
fn test_query_escape(input: &str, expected: &str) {
    assert_eq!(query_escape(input), expected);
}

#[test]
fn test_filter_query_single() {
    assert_eq!(filter_query(&[("name", "my-org")]), "q=name%3Amy-org");
}

#[test]
fn test_filter_query_multiple_joined_by_semicolon() {
    assert_eq!(
        filter_query(&[("label", "mysql"), ("provider", "acme corp")]),
        "q=label%3Amysql%3Bprovider%3Aacme+corp"
    );
}

// ============================================================================
// Target Scope
// ============================================================================

#[test]
fn test_scope_without_targets() {
    let scope = TargetScope::new();

    let err = scope.org_guid().unwrap_err();
    assert!(matches!(err, Error::NoTarget { ref kind } if kind == "org"));

    let err = scope.space_guid().unwrap_err();
    assert!(matches!(err, Error::NoTarget { ref kind } if kind == "space"));
}

#[test]
fn test_scope_with_targets() {
    let scope = TargetScope::new()
        .with_org("org-guid", "my-org")
        .with_space("space-guid", "dev");

    assert_eq!(scope.org_guid().unwrap(), "org-guid");
    assert_eq!(scope.space_guid().unwrap(), "space-guid");
    assert_eq!(scope.organization.unwrap().name, "my-org");
}

#[test]
fn test_scope_empty_guid_is_not_targeted() {
    let scope = TargetScope::new().with_org("", "my-org");
    assert!(scope.org_guid().is_err());
}

#[test]
fn test_no_target_message() {
    let err = TargetScope::new().space_guid().unwrap_err();
    assert_eq!(err.to_string(), "No space targeted");
}
