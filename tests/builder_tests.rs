// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the declaration builder.
//!
//! These tests verify that the builder produces well-formed declarations
//! and that malformed ones fail setup with the matching `SpecError`.

use reqargs::prelude::*;

#[test]
fn test_declaration_order_is_call_order() {
    let spec = ParamSpec::builder()
        .required("first")
        .optional("second")
        .required("third")
        .build()
        .unwrap();

    let names: Vec<&str> = spec.entries().iter().map(|e| e.name().as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn test_four_rule_kinds() {
    let g1 = ParamSpec::builder().build().unwrap();
    let g2 = ParamSpec::builder().build().unwrap();
    let spec = ParamSpec::builder()
        .required("rv")
        .optional("ov")
        .required_group("rg", g1)
        .optional_group("og", g2)
        .build()
        .unwrap();

    assert!(spec.entry("rv").unwrap().rule().is_required());
    assert!(!spec.entry("rv").unwrap().rule().is_group());
    assert!(!spec.entry("ov").unwrap().rule().is_required());
    assert!(spec.entry("rg").unwrap().rule().is_group());
    assert!(spec.entry("rg").unwrap().rule().is_required());
    assert!(spec.entry("og").unwrap().rule().is_group());
    assert!(!spec.entry("og").unwrap().rule().is_required());
}

#[test]
fn test_duplicate_name_fails_setup() {
    let err = ParamSpec::builder()
        .required("id")
        .required("id")
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        SpecError::DuplicateName {
            name: "id".to_string()
        }
    );
}

#[test]
fn test_non_null_set_over_unknown_name_fails_setup() {
    let err = ParamSpec::builder()
        .optional("phone")
        .non_null_set(&["phone", "fax"])
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        SpecError::UnknownSetMember {
            name: "fax".to_string()
        }
    );
}

#[test]
fn test_empty_non_null_set_fails_setup() {
    let err = ParamSpec::builder()
        .optional("phone")
        .non_null_set(&[])
        .build()
        .unwrap_err();
    assert_eq!(err, SpecError::EmptySet);
}

#[test]
fn test_duplicate_inside_nested_group_is_independent() {
    // The same name may appear at different nesting levels.
    let nested = ParamSpec::builder().required("id").build().unwrap();
    let spec = ParamSpec::builder()
        .required("id")
        .optional_group("owner", nested)
        .build()
        .unwrap();

    assert!(spec.is_declared("id"));
    match spec.entry("owner").unwrap().rule() {
        ParamRule::OptionalGroup { nested } => assert!(nested.is_declared("id")),
        other => panic!("unexpected rule: {:?}", other),
    }
}

#[test]
fn test_built_spec_is_reusable_across_resolutions() {
    let spec = ParamSpec::builder().required("id").build().unwrap();

    let mut first = RawParams::new();
    first.insert("id".to_string(), RawValue::from("1"));
    let mut second = RawParams::new();
    second.insert("id".to_string(), RawValue::from("2"));

    let p1 = Params::resolve(&first, &spec);
    let p2 = Params::resolve(&second, &spec);

    assert_eq!(p1.get("id").unwrap().as_value().unwrap().as_str(), "1");
    assert_eq!(p2.get("id").unwrap().as_value().unwrap().as_str(), "2");
}

#[test]
fn test_spec_is_cloneable_with_checks() {
    let spec = ParamSpec::builder()
        .required_with("n", |v: &ParamValue| {
            v.as_i32("n").map(|_| v.clone()).map_err(|e| e.to_string())
        })
        .build()
        .unwrap();
    let copy = spec.clone();

    let mut raw = RawParams::new();
    raw.insert("n".to_string(), RawValue::from("5"));
    assert!(Params::resolve(&raw, &copy).is_valid());
}
