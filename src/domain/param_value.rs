// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scalar parameter values.
//!
//! Request parameters arrive as strings. `ParamValue` keeps that string and
//! converts it to a concrete Rust type at the point of use, naming the
//! parameter in every conversion failure so the error can be reported
//! against the right entry.

use crate::domain::errors::{Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Spellings the boolean conversion accepts, in any ASCII casing.
const TRUE_WORDS: [&str; 4] = ["true", "yes", "1", "on"];
const FALSE_WORDS: [&str; 4] = ["false", "no", "0", "off"];

/// One scalar parameter value, as provided or as normalized by a check
/// function.
///
/// Lookups through [`Params::get`](crate::accessor::Params::get) hand out
/// `ParamValue`s for provided scalars; conversion happens where the value is
/// consumed, against the name it should be reported under.
///
/// # Examples
///
/// ```
/// use reqargs::domain::param_value::ParamValue;
///
/// let limit = ParamValue::from("25");
/// assert_eq!(limit.as_u32("limit").unwrap(), 25);
///
/// let err = ParamValue::from("lots").as_u32("limit").unwrap_err();
/// assert!(err.to_string().contains("limit"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamValue(String);

impl ParamValue {
    /// The value as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the value to a boolean.
    ///
    /// Accepts `true`/`yes`/`1`/`on` and `false`/`no`/`0`/`off`, in any
    /// casing.
    ///
    /// # Examples
    ///
    /// ```
    /// use reqargs::domain::param_value::ParamValue;
    ///
    /// assert!(ParamValue::from("Yes").as_bool("subscribed").unwrap());
    /// assert!(!ParamValue::from("off").as_bool("subscribed").unwrap());
    /// ```
    pub fn as_bool(&self, name: &str) -> Result<bool> {
        if TRUE_WORDS.iter().any(|w| self.0.eq_ignore_ascii_case(w)) {
            Ok(true)
        } else if FALSE_WORDS.iter().any(|w| self.0.eq_ignore_ascii_case(w)) {
            Ok(false)
        } else {
            self.convert(name, "boolean")
        }
    }

    /// Converts the value to an `i32`.
    pub fn as_i32(&self, name: &str) -> Result<i32> {
        self.convert(name, "integer")
    }

    /// Converts the value to a `u32`.
    pub fn as_u32(&self, name: &str) -> Result<u32> {
        self.convert(name, "integer")
    }

    /// Converts the value to a `u64`.
    pub fn as_u64(&self, name: &str) -> Result<u64> {
        self.convert(name, "integer")
    }

    /// Converts the value to an `f64`.
    pub fn as_f64(&self, name: &str) -> Result<f64> {
        self.convert(name, "float")
    }

    /// Parses the value into any type that implements `FromStr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use reqargs::domain::param_value::ParamValue;
    /// use std::net::IpAddr;
    ///
    /// let ip: IpAddr = ParamValue::from("127.0.0.1").parse("client_ip").unwrap();
    /// assert_eq!(ip.to_string(), "127.0.0.1");
    /// ```
    pub fn parse<T>(&self, name: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.convert(name, std::any::type_name::<T>())
    }

    /// Every conversion funnels through here, so every failure carries the
    /// parameter name and a target-type label.
    fn convert<T>(&self, name: &str, target_type: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.0
            .parse()
            .map_err(|err: T::Err| ValidationError::Conversion {
                name: name.to_string(),
                target_type: target_type.to_string(),
                message: err.to_string(),
            })
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue(s)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue(s.to_string())
    }
}
