// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests verify that the value newtypes and the resolution pass
//! handle arbitrary inputs correctly.

use proptest::prelude::*;
use reqargs::prelude::*;

// Test that ParamName round-trips any string
proptest! {
    #[test]
    fn test_param_name_from_any_string(s in "\\PC*") {
        let name = ParamName::from(s.clone());
        prop_assert_eq!(name.as_str(), s.as_str());
    }
}

// Test that ParamValue round-trips any string
proptest! {
    #[test]
    fn test_param_value_from_any_string(s in "\\PC*") {
        let value = ParamValue::from(s.clone());
        prop_assert_eq!(value.as_str(), s.as_str());
    }
}

// Integer parsing
proptest! {
    #[test]
    fn test_i32_parsing_valid(n in prop::num::i32::ANY) {
        let value = ParamValue::from(n.to_string());
        prop_assert_eq!(value.as_i32("n").unwrap(), n);
    }
}

proptest! {
    #[test]
    fn test_u64_parsing_valid(n in prop::num::u64::ANY) {
        let value = ParamValue::from(n.to_string());
        prop_assert_eq!(value.as_u64("n").unwrap(), n);
    }
}

proptest! {
    #[test]
    fn test_f64_parsing_valid(n in prop::num::f64::NORMAL) {
        let value = ParamValue::from(n.to_string());
        prop_assert_eq!(value.as_f64("n").unwrap(), n);
    }
}

// A required parameter is satisfied by any provided string, including
// the empty one
proptest! {
    #[test]
    fn test_required_satisfied_by_any_provided_string(s in "\\PC*") {
        let spec = ParamSpec::builder().required("field").build().unwrap();
        let mut raw = RawParams::new();
        raw.insert("field".to_string(), RawValue::from(s.clone()));

        let params = Params::resolve(&raw, &spec);
        prop_assert!(params.is_valid());
        prop_assert!(params.provided("field"));
        prop_assert_eq!(
            params.get("field").unwrap().as_value().unwrap().as_str(),
            s.as_str()
        );
    }
}

// Lookup of a resolved leaf always equals its exported value
proptest! {
    #[test]
    fn test_export_agrees_with_lookup(s in "\\PC*") {
        let spec = ParamSpec::builder().optional("field").build().unwrap();
        let mut raw = RawParams::new();
        raw.insert("field".to_string(), RawValue::from(s));

        let params = Params::resolve(&raw, &spec);
        let map = params.to_map();
        prop_assert_eq!(map[&ParamName::from("field")], params.get("field"));
    }
}

// Absent optional parameters never invalidate, whatever else is present
proptest! {
    #[test]
    fn test_optional_absent_never_invalidates(s in "\\PC*") {
        let spec = ParamSpec::builder()
            .required("present")
            .optional("absent")
            .build()
            .unwrap();
        let mut raw = RawParams::new();
        raw.insert("present".to_string(), RawValue::from(s));

        let params = Params::resolve(&raw, &spec);
        prop_assert!(params.is_valid());
        prop_assert!(params.get("absent").is_none());
    }
}
