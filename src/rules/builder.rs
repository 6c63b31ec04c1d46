// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builder for parameter declarations.
//!
//! This module provides `ParamSpecBuilder`, the chained declaration API that
//! produces an immutable [`ParamSpec`]. The fatal configuration-shape checks
//! (duplicate names, malformed non-null sets) run in [`build`], so a
//! successfully built declaration is always well-formed.
//!
//! [`build`]: ParamSpecBuilder::build

use crate::domain::{ParamName, ParamValue, SpecError};
use crate::rules::{Check, ParamEntry, ParamRule, ParamSpec};
use std::sync::Arc;

/// Builder for [`ParamSpec`].
///
/// Declarations are added in call order, which is the order the resolution
/// pass walks them and the order `to_map` exports them.
///
/// # Examples
///
/// ```
/// use reqargs::prelude::*;
///
/// let address = ParamSpec::builder()
///     .required("city")
///     .optional("zip")
///     .build()
///     .unwrap();
///
/// let spec = ParamSpec::builder()
///     .required("name")
///     .optional_with("email", |v: &ParamValue| {
///         if v.as_str().contains('@') {
///             Ok(v.clone())
///         } else {
///             Err("missing @ sign".to_string())
///         }
///     })
///     .optional_group("address", address)
///     .build()
///     .unwrap();
///
/// assert_eq!(spec.entries().len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct ParamSpecBuilder {
    entries: Vec<ParamEntry>,
    non_null_sets: Vec<Vec<ParamName>>,
}

impl ParamSpecBuilder {
    /// Creates a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a required scalar parameter.
    pub fn required(mut self, name: impl Into<ParamName>) -> Self {
        self.entries.push(ParamEntry::new(
            name.into(),
            ParamRule::RequiredValue { check: None },
        ));
        self
    }

    /// Declares a required scalar parameter with a check function.
    ///
    /// The check receives the provided value and returns the coerced value
    /// to store, or a rejection message.
    pub fn required_with<F>(mut self, name: impl Into<ParamName>, check: F) -> Self
    where
        F: Fn(&ParamValue) -> Result<ParamValue, String> + Send + Sync + 'static,
    {
        self.entries.push(ParamEntry::new(
            name.into(),
            ParamRule::RequiredValue {
                check: Some(Arc::new(check) as Check),
            },
        ));
        self
    }

    /// Declares an optional scalar parameter.
    pub fn optional(mut self, name: impl Into<ParamName>) -> Self {
        self.entries.push(ParamEntry::new(
            name.into(),
            ParamRule::OptionalValue { check: None },
        ));
        self
    }

    /// Declares an optional scalar parameter with a check function.
    pub fn optional_with<F>(mut self, name: impl Into<ParamName>, check: F) -> Self
    where
        F: Fn(&ParamValue) -> Result<ParamValue, String> + Send + Sync + 'static,
    {
        self.entries.push(ParamEntry::new(
            name.into(),
            ParamRule::OptionalValue {
                check: Some(Arc::new(check) as Check),
            },
        ));
        self
    }

    /// Declares a required nested group, validated by its own declaration.
    pub fn required_group(mut self, name: impl Into<ParamName>, nested: ParamSpec) -> Self {
        self.entries.push(ParamEntry::new(
            name.into(),
            ParamRule::RequiredGroup { nested },
        ));
        self
    }

    /// Declares an optional nested group, validated by its own declaration.
    pub fn optional_group(mut self, name: impl Into<ParamName>, nested: ParamSpec) -> Self {
        self.entries.push(ParamEntry::new(
            name.into(),
            ParamRule::OptionalGroup { nested },
        ));
        self
    }

    /// Declares a non-null set over previously declared names.
    ///
    /// At least one member of the set must be provided in the input, or the
    /// resolution records an error keyed `non_null_set_{index}`.
    pub fn non_null_set(mut self, names: &[&str]) -> Self {
        self.non_null_sets
            .push(names.iter().map(|n| ParamName::from(*n)).collect());
        self
    }

    /// Consumes the builder and produces the declaration.
    ///
    /// # Errors
    ///
    /// Returns a [`SpecError`] if a name was declared twice, a non-null set
    /// names an undeclared parameter, or a non-null set is empty. These are
    /// programmer errors in the declaration itself, so setup should abort
    /// rather than report them per-field.
    pub fn build(self) -> Result<ParamSpec, SpecError> {
        for (i, entry) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|e| e.name() == entry.name()) {
                return Err(SpecError::DuplicateName {
                    name: entry.name().as_str().to_string(),
                });
            }
        }

        for set in &self.non_null_sets {
            if set.is_empty() {
                return Err(SpecError::EmptySet);
            }
            for member in set {
                if !self.entries.iter().any(|e| e.name() == member) {
                    return Err(SpecError::UnknownSetMember {
                        name: member.as_str().to_string(),
                    });
                }
            }
        }

        Ok(ParamSpec::new(self.entries, self.non_null_sets))
    }
}
