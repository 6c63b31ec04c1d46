// SPDX-License-Identifier: MIT OR Apache-2.0

//! The resolution engine and typed accessor.
//!
//! This module provides [`Params`], the accessor produced by resolving a raw
//! input mapping against a [`ParamSpec`]. One type serves both the top level
//! and nested groups: a group entry resolves its sub-mapping with the same
//! pass, recursively. Resolution runs once at construction and never fails
//! for data problems; everything it finds wrong lands in the aggregated
//! error map, keyed by the offending entry's name.

mod resolved_value;

use crate::domain::{
    ErrorMap, ParamError, ParamName, ParamValue, RawParams, RawValue, ValidationError,
};
use crate::rules::{ParamEntry, ParamRule, ParamSpec};
use resolved_value::ResolvedValue;
use std::collections::BTreeMap;

/// One resolved entry: a scalar holder or a nested accessor.
#[derive(Clone, Debug, PartialEq, Eq)]
enum ResolvedNode {
    Value(ResolvedValue),
    Group(Params),
}

impl ResolvedNode {
    /// "Provided" for a leaf is the input-presence flag; for a group it is
    /// non-emptiness. Non-null sets use this notion for both kinds.
    fn provided(&self) -> bool {
        match self {
            ResolvedNode::Value(v) => v.provided(),
            ResolvedNode::Group(g) => !g.is_empty(),
        }
    }
}

/// A borrowed view of one resolved parameter, returned by [`Params::get`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamRef<'a> {
    /// A provided scalar, after coercion.
    Value(&'a ParamValue),
    /// A present, non-empty nested group.
    Group(&'a Params),
}

impl<'a> ParamRef<'a> {
    /// Returns the scalar value, or `None` for a group.
    pub fn as_value(self) -> Option<&'a ParamValue> {
        match self {
            ParamRef::Value(v) => Some(v),
            ParamRef::Group(_) => None,
        }
    }

    /// Returns the nested accessor, or `None` for a scalar.
    pub fn as_group(self) -> Option<&'a Params> {
        match self {
            ParamRef::Value(_) => None,
            ParamRef::Group(g) => Some(g),
        }
    }
}

/// A validated, typed view over a raw parameter mapping.
///
/// `Params` is built by a single resolution pass and is immutable afterward;
/// all queries are pure reads. Construction never fails for data problems:
/// every per-entry failure is captured into [`errors`](Params::errors)
/// instead, so one bad parameter never hides another.
///
/// # Examples
///
/// ```
/// use reqargs::prelude::*;
///
/// let spec = ParamSpec::builder()
///     .required("name")
///     .optional("age")
///     .build()
///     .unwrap();
///
/// let mut raw = RawParams::new();
/// raw.insert("name".to_string(), RawValue::from("zink"));
///
/// let params = Params::resolve(&raw, &spec);
/// assert!(params.is_valid());
///
/// match params.get("name") {
///     Some(ParamRef::Value(v)) => assert_eq!(v.as_str(), "zink"),
///     other => panic!("unexpected: {:?}", other),
/// }
/// // Absent optional parameters look up as None, with no error recorded.
/// assert!(params.get("age").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    /// Successfully resolved entries. Entries that failed are absent here
    /// and present in `errors` instead.
    nodes: BTreeMap<ParamName, ResolvedNode>,
    /// Aggregated errors of this level, keyed by entry name or synthesized
    /// non-null-set name.
    errors: ErrorMap,
    /// Declared names in declaration order, driving `to_map` and the
    /// declared-name check in `get`.
    order: Vec<ParamName>,
    /// True only for an optional group whose input value was absent.
    empty: bool,
}

impl Params {
    /// Resolves a raw mapping against a declaration.
    ///
    /// This is the single construct-then-freeze pass: every declared entry
    /// is resolved in declaration order, failures are captured per entry,
    /// nested group errors are propagated up under the group entry's name,
    /// and non-null sets are evaluated last. Validation problems never
    /// escape as errors from this function.
    pub fn resolve(raw: &RawParams, spec: &ParamSpec) -> Self {
        let mut nodes = BTreeMap::new();
        let mut errors = ErrorMap::new();

        for entry in spec.entries() {
            let raw_value = raw.get(entry.name().as_str());
            match resolve_entry(entry, raw_value) {
                Ok(node) => {
                    if let ResolvedNode::Group(group) = &node {
                        if !group.is_valid() {
                            tracing::debug!(
                                "group '{}' resolved with {} nested error(s)",
                                entry.name(),
                                group.errors().len()
                            );
                            errors
                                .insert(entry.name().clone(), ParamError::Nested(group.errors().clone()));
                        }
                    }
                    nodes.insert(entry.name().clone(), node);
                }
                Err(err) => {
                    tracing::debug!("parameter '{}' failed to resolve: {}", entry.name(), err);
                    errors.insert(entry.name().clone(), ParamError::Value(err));
                }
            }
        }

        let mut params = Self {
            nodes,
            errors,
            order: spec.entries().iter().map(|e| e.name().clone()).collect(),
            empty: false,
        };
        params.validate_non_null_sets(spec);
        params
    }

    /// Resolves a raw mapping, returning the error map as an `Err` when the
    /// resolution is invalid.
    ///
    /// Convenience over [`resolve`](Params::resolve) for callers that want
    /// to bail on invalid input rather than inspect the accessor.
    ///
    /// # Examples
    ///
    /// ```
    /// use reqargs::prelude::*;
    ///
    /// let spec = ParamSpec::builder().required("id").build().unwrap();
    ///
    /// let errors = Params::try_resolve(&RawParams::new(), &spec).unwrap_err();
    /// assert!(errors.contains_key(&ParamName::from("id")));
    /// ```
    pub fn try_resolve(raw: &RawParams, spec: &ParamSpec) -> Result<Self, ErrorMap> {
        let params = Self::resolve(raw, spec);
        if params.is_valid() {
            Ok(params)
        } else {
            Err(params.errors)
        }
    }

    /// The explicitly-empty accessor an absent optional group resolves to.
    fn empty_group() -> Self {
        Self {
            nodes: BTreeMap::new(),
            errors: ErrorMap::new(),
            order: Vec::new(),
            empty: true,
        }
    }

    /// Records an error for every non-null set with no provided member.
    ///
    /// Unsatisfied sets are keyed `non_null_set_{index}` by zero-based
    /// declaration position.
    fn validate_non_null_sets(&mut self, spec: &ParamSpec) {
        for (index, set) in spec.non_null_sets().iter().enumerate() {
            let satisfied = set
                .iter()
                .any(|name| self.nodes.get(name).is_some_and(ResolvedNode::provided));
            if !satisfied {
                let key = ParamName::from(format!("non_null_set_{}", index));
                let members = set.iter().map(|n| n.as_str().to_string()).collect();
                tracing::debug!("non-null set {} has no provided member", index);
                self.errors
                    .insert(key, ValidationError::NonNullSetEmpty { index, members }.into());
            }
        }
    }

    /// True iff the aggregated error map is empty.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The aggregated error map of this level.
    ///
    /// Keys are entry names, or `non_null_set_{index}` for unsatisfied
    /// non-null sets. A group entry whose children failed maps to a
    /// [`ParamError::Nested`] carrying the group's own error map.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// True iff this accessor is an optional group whose input was absent.
    ///
    /// The top-level accessor is never empty, and a group whose sub-mapping
    /// was present but contained no provided children is not empty either:
    /// emptiness tracks the absence of the group's own input value.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Looks up a declared parameter.
    ///
    /// Returns the coerced value for a provided scalar, the nested accessor
    /// for a present non-empty group, and `None` for an absent optional
    /// scalar, an empty optional group, or an entry whose resolution failed
    /// (its error is in [`errors`](Params::errors)).
    ///
    /// # Panics
    ///
    /// Panics if `name` was never declared. Asking for an undeclared name
    /// is a bug in the caller, not a data problem, so it is not reported
    /// through the error map.
    pub fn get(&self, name: &str) -> Option<ParamRef<'_>> {
        self.assert_declared(name);
        match self.nodes.get(name) {
            None => None,
            Some(ResolvedNode::Value(v)) => v.value().map(ParamRef::Value),
            Some(ResolvedNode::Group(g)) => {
                if g.is_empty() {
                    None
                } else {
                    Some(ParamRef::Group(g))
                }
            }
        }
    }

    /// True iff the input contained a value for the declared parameter.
    ///
    /// For scalars this is presence in the input, even of an empty string;
    /// for groups it is presence of a sub-mapping. Entries whose resolution
    /// failed report `false`.
    ///
    /// # Panics
    ///
    /// Panics if `name` was never declared, like [`get`](Params::get).
    pub fn provided(&self, name: &str) -> bool {
        self.assert_declared(name);
        self.nodes.get(name).is_some_and(ResolvedNode::provided)
    }

    /// Undeclared names are caller bugs, not data problems.
    fn assert_declared(&self, name: &str) {
        assert!(
            self.order.iter().any(|n| n.as_str() == name),
            "no parameter named `{}` is declared (typo?)",
            name
        );
    }

    /// Exports every declared name to its resolved value.
    ///
    /// Performs one [`get`](Params::get) per declared name at this level;
    /// group values are the accessors themselves, so recursing is the
    /// caller's choice per level.
    pub fn to_map(&self) -> BTreeMap<ParamName, Option<ParamRef<'_>>> {
        self.order
            .iter()
            .map(|name| (name.clone(), self.get(name.as_str())))
            .collect()
    }
}

/// Resolves one declared entry against its raw input value.
///
/// Pure per-entry step of the pass: the four rule variants dispatch
/// exhaustively, and every failure comes back as a value for the caller to
/// fold into the error map.
fn resolve_entry(
    entry: &ParamEntry,
    raw: Option<&RawValue>,
) -> Result<ResolvedNode, ValidationError> {
    match entry.rule() {
        ParamRule::RequiredValue { check } => {
            ResolvedValue::resolve(entry.name(), raw, true, check.as_ref()).map(ResolvedNode::Value)
        }
        ParamRule::OptionalValue { check } => {
            ResolvedValue::resolve(entry.name(), raw, false, check.as_ref())
                .map(ResolvedNode::Value)
        }
        ParamRule::RequiredGroup { nested } => {
            resolve_group(entry.name(), raw, nested, true).map(ResolvedNode::Group)
        }
        ParamRule::OptionalGroup { nested } => {
            resolve_group(entry.name(), raw, nested, false).map(ResolvedNode::Group)
        }
    }
}

/// Resolves one group entry: absent input is an error or an empty accessor
/// depending on requiredness; a present sub-mapping recurses into the same
/// pass with the group's own declaration.
fn resolve_group(
    name: &ParamName,
    raw: Option<&RawValue>,
    nested: &ParamSpec,
    required: bool,
) -> Result<Params, ValidationError> {
    match raw {
        None => {
            if required {
                Err(ValidationError::MissingGroup {
                    name: name.as_str().to_string(),
                })
            } else {
                Ok(Params::empty_group())
            }
        }
        Some(RawValue::Scalar(_)) => Err(ValidationError::ExpectedGroup {
            name: name.as_str().to_string(),
        }),
        Some(RawValue::Map(sub)) => Ok(Params::resolve(sub, nested)),
    }
}
