// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw input mapping types.
//!
//! This module provides the `RawValue` type, the already-parsed shape that
//! request parameters arrive in: either a single scalar string or a nested
//! mapping of names to further raw values. How a caller obtains the mapping
//! (query string, form body, ...) is outside this crate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The top-level raw input mapping, keyed by parameter name.
pub type RawParams = BTreeMap<String, RawValue>;

/// One raw input value: a scalar string or a nested mapping.
///
/// The untagged serde representation lets a raw mapping be deserialized
/// directly from a request-body document whose values are strings or
/// objects.
///
/// # Examples
///
/// ```
/// use reqargs::domain::raw_value::{RawParams, RawValue};
///
/// let mut params = RawParams::new();
/// params.insert("name".to_string(), RawValue::from("zink"));
/// params.insert(
///     "address".to_string(),
///     RawValue::Map(RawParams::from([
///         ("city".to_string(), RawValue::from("Lisbon")),
///     ])),
/// );
///
/// assert_eq!(params["name"].as_scalar(), Some("zink"));
/// assert!(params["address"].as_map().is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A single string value.
    Scalar(String),
    /// A nested mapping of names to raw values.
    Map(BTreeMap<String, RawValue>),
}

impl RawValue {
    /// Returns the scalar string, or `None` for a nested mapping.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            RawValue::Scalar(s) => Some(s),
            RawValue::Map(_) => None,
        }
    }

    /// Returns the nested mapping, or `None` for a scalar.
    pub fn as_map(&self) -> Option<&BTreeMap<String, RawValue>> {
        match self {
            RawValue::Scalar(_) => None,
            RawValue::Map(m) => Some(m),
        }
    }

    /// Returns `true` if this value is a scalar.
    pub fn is_scalar(&self) -> bool {
        matches!(self, RawValue::Scalar(_))
    }

    /// Returns `true` if this value is a nested mapping.
    pub fn is_map(&self) -> bool {
        matches!(self, RawValue::Map(_))
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Scalar(s)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Scalar(s.to_string())
    }
}

impl From<BTreeMap<String, RawValue>> for RawValue {
    fn from(m: BTreeMap<String, RawValue>) -> Self {
        RawValue::Map(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_accessors() {
        let value = RawValue::from("hello");
        assert!(value.is_scalar());
        assert!(!value.is_map());
        assert_eq!(value.as_scalar(), Some("hello"));
        assert_eq!(value.as_map(), None);
    }

    #[test]
    fn test_map_accessors() {
        let value = RawValue::Map(RawParams::from([(
            "inner".to_string(),
            RawValue::from("v"),
        )]));
        assert!(value.is_map());
        assert!(!value.is_scalar());
        assert_eq!(value.as_scalar(), None);
        assert_eq!(value.as_map().unwrap().len(), 1);
    }

    #[test]
    fn test_from_string() {
        let value = RawValue::from("x".to_string());
        assert_eq!(value, RawValue::Scalar("x".to_string()));
    }

    #[test]
    fn test_from_map() {
        let value: RawValue = RawParams::new().into();
        assert_eq!(value, RawValue::Map(RawParams::new()));
    }

    #[test]
    fn test_nested_maps() {
        let inner = RawValue::Map(RawParams::from([(
            "zip".to_string(),
            RawValue::from("1000"),
        )]));
        let outer = RawValue::Map(RawParams::from([("address".to_string(), inner)]));

        let zip = outer.as_map().unwrap()["address"].as_map().unwrap()["zip"].as_scalar();
        assert_eq!(zip, Some("1000"));
    }
}
