// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parameter declaration types.
//!
//! This module defines [`ParamRule`], the closed union of the four ways a
//! parameter can be declared, and [`ParamSpec`], the immutable ordered list
//! of declarations plus cross-field non-null sets. Declarations are authored
//! through [`ParamSpecBuilder`](crate::rules::builder::ParamSpecBuilder) and
//! consumed read-only by the resolution engine.

pub mod builder;

use crate::domain::{ParamName, ParamValue};
use std::fmt;
use std::sync::Arc;

pub use builder::ParamSpecBuilder;

/// A check function attached to a scalar declaration.
///
/// The function receives the provided value and either returns the coerced
/// value to store (it may normalize, e.g. trim or lowercase) or rejects it
/// with a message. Rejections are recorded against the parameter's name as
/// [`ValidationError::Invalid`](crate::domain::ValidationError::Invalid).
pub type Check = Arc<dyn Fn(&ParamValue) -> Result<ParamValue, String> + Send + Sync>;

/// One parameter's declaration rule.
///
/// The four variants are mutually exclusive and exhaustive, so the
/// resolution engine's dispatch is a single `match` checked by the
/// compiler.
#[derive(Clone)]
pub enum ParamRule {
    /// A scalar that must be present in the input.
    RequiredValue {
        /// Optional coercion/validation function applied to a present value.
        check: Option<Check>,
    },
    /// A scalar that may be absent.
    OptionalValue {
        /// Optional coercion/validation function applied to a present value.
        check: Option<Check>,
    },
    /// A nested group that must be present in the input.
    RequiredGroup {
        /// The declarations the group's sub-mapping is resolved against.
        nested: ParamSpec,
    },
    /// A nested group that may be absent.
    OptionalGroup {
        /// The declarations the group's sub-mapping is resolved against.
        nested: ParamSpec,
    },
}

impl ParamRule {
    /// Returns `true` for the group variants.
    pub fn is_group(&self) -> bool {
        matches!(
            self,
            ParamRule::RequiredGroup { .. } | ParamRule::OptionalGroup { .. }
        )
    }

    /// Returns `true` for the required variants.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            ParamRule::RequiredValue { .. } | ParamRule::RequiredGroup { .. }
        )
    }
}

impl fmt::Debug for ParamRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamRule::RequiredValue { check } => f
                .debug_struct("RequiredValue")
                .field("check", &check.is_some())
                .finish(),
            ParamRule::OptionalValue { check } => f
                .debug_struct("OptionalValue")
                .field("check", &check.is_some())
                .finish(),
            ParamRule::RequiredGroup { nested } => f
                .debug_struct("RequiredGroup")
                .field("nested", nested)
                .finish(),
            ParamRule::OptionalGroup { nested } => f
                .debug_struct("OptionalGroup")
                .field("nested", nested)
                .finish(),
        }
    }
}

/// One declared parameter: a name paired with its rule.
#[derive(Clone, Debug)]
pub struct ParamEntry {
    name: ParamName,
    rule: ParamRule,
}

impl ParamEntry {
    pub(crate) fn new(name: ParamName, rule: ParamRule) -> Self {
        Self { name, rule }
    }

    /// The declared name.
    pub fn name(&self) -> &ParamName {
        &self.name
    }

    /// The declaration rule.
    pub fn rule(&self) -> &ParamRule {
        &self.rule
    }
}

/// An immutable, ordered parameter declaration.
///
/// Holds the declared entries in declaration order plus zero or more
/// non-null sets, each an ordered list of declared names of which at least
/// one must be provided in the input. Built once via [`ParamSpec::builder`]
/// and consumed read-only by [`Params::resolve`](crate::accessor::Params::resolve).
///
/// # Examples
///
/// ```
/// use reqargs::prelude::*;
///
/// let spec = ParamSpec::builder()
///     .required("name")
///     .optional("nickname")
///     .non_null_set(&["name", "nickname"])
///     .build()
///     .unwrap();
///
/// assert_eq!(spec.entries().len(), 2);
/// assert_eq!(spec.non_null_sets().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct ParamSpec {
    entries: Vec<ParamEntry>,
    non_null_sets: Vec<Vec<ParamName>>,
}

impl ParamSpec {
    pub(crate) fn new(entries: Vec<ParamEntry>, non_null_sets: Vec<Vec<ParamName>>) -> Self {
        Self {
            entries,
            non_null_sets,
        }
    }

    /// Creates a new declaration builder.
    pub fn builder() -> ParamSpecBuilder {
        ParamSpecBuilder::new()
    }

    /// The declared entries, in declaration order.
    pub fn entries(&self) -> &[ParamEntry] {
        &self.entries
    }

    /// Looks up a declared entry by name.
    pub fn entry(&self, name: &str) -> Option<&ParamEntry> {
        self.entries.iter().find(|e| e.name().as_str() == name)
    }

    /// Returns `true` if a parameter of this name was declared.
    pub fn is_declared(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    /// The declared non-null sets, in declaration order.
    pub fn non_null_sets(&self) -> &[Vec<ParamName>] {
        &self.non_null_sets
    }
}
