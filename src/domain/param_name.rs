// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parameter name newtype for type-safe name handling.
//!
//! This module provides the `ParamName` type, a newtype wrapper around `String`
//! that identifies a declared parameter and prevents accidental string confusion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type-safe wrapper for parameter names.
///
/// `ParamName` wraps a `String` to provide type safety when working with
/// declared parameter names. Error maps and exports are keyed by `ParamName`,
/// so it is ordered and hashable.
///
/// # Examples
///
/// ```
/// use reqargs::domain::param_name::ParamName;
///
/// let name = ParamName::from("user_id");
/// assert_eq!(name.as_str(), "user_id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParamName(String);

impl ParamName {
    /// Creates a new `ParamName` from a `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use reqargs::domain::param_name::ParamName;
    ///
    /// let name = ParamName::new("email".to_string());
    /// assert_eq!(name.as_str(), "email");
    /// ```
    pub fn new(name: String) -> Self {
        ParamName(name)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ParamName` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ParamName {
    fn from(s: String) -> Self {
        ParamName(s)
    }
}

impl From<&str> for ParamName {
    fn from(s: &str) -> Self {
        ParamName(s.to_string())
    }
}

impl From<ParamName> for String {
    fn from(name: ParamName) -> Self {
        name.0
    }
}

impl AsRef<str> for ParamName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
