// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for parameter declaration and resolution.
//!
//! This module defines the error taxonomy of the crate: fatal declaration
//! errors (`SpecError`), recoverable per-parameter validation errors
//! (`ValidationError`), and the nested error tree (`ParamError`/`ErrorMap`)
//! built during a resolution pass. All errors use `thiserror` where a derived
//! `Display` fits.

use crate::domain::param_name::ParamName;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// A fatal error in a parameter declaration.
///
/// `SpecError` signals a malformed declaration, detected when a
/// [`ParamSpec`](crate::rules::ParamSpec) is built. It is a programmer
/// error: setup should abort rather than report it per-field, so it is
/// never placed in an [`ErrorMap`].
///
/// # Examples
///
/// ```
/// use reqargs::prelude::*;
///
/// let err = ParamSpec::builder()
///     .required("id")
///     .required("id")
///     .build()
///     .unwrap_err();
/// assert!(matches!(err, SpecError::DuplicateName { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SpecError {
    /// The same parameter name was declared more than once.
    #[error("parameter declared more than once: {name}")]
    DuplicateName {
        /// The duplicated name
        name: String,
    },

    /// A non-null set names a parameter that was never declared.
    #[error("non-null set references undeclared parameter: {name}")]
    UnknownSetMember {
        /// The undeclared name
        name: String,
    },

    /// A non-null set was declared with no member names.
    #[error("non-null set must name at least one parameter")]
    EmptySet,
}

/// A recoverable, per-parameter validation error.
///
/// These are the data problems a resolution pass captures into its error
/// map instead of failing: a required value or group missing from the
/// input, a shape mismatch between the declaration and the input, a check
/// function rejecting a present value, or a typed conversion failing at
/// the point of use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// A required scalar parameter was absent from the input.
    #[error("required parameter missing: {name}")]
    Missing {
        /// The missing parameter's name
        name: String,
    },

    /// A required group parameter was absent from the input.
    #[error("required group missing: {name}")]
    MissingGroup {
        /// The missing group's name
        name: String,
    },

    /// A scalar parameter received a nested map.
    #[error("parameter '{name}' must be a single value, not a nested map")]
    ExpectedScalar {
        /// The offending parameter's name
        name: String,
    },

    /// A group parameter received a single scalar value.
    #[error("parameter '{name}' must be a nested map, not a single value")]
    ExpectedGroup {
        /// The offending parameter's name
        name: String,
    },

    /// A check function rejected a present value.
    #[error("invalid value for parameter '{name}': {message}")]
    Invalid {
        /// The rejected parameter's name
        name: String,
        /// The check function's rejection message
        message: String,
    },

    /// A typed accessor failed to convert the value.
    #[error("failed to convert parameter '{name}' to {target_type}: {message}")]
    Conversion {
        /// The parameter being converted
        name: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error message
        message: String,
    },

    /// No member of a non-null set was provided in the input.
    #[error("must provide at least one of: {members:?}")]
    NonNullSetEmpty {
        /// Zero-based position of the set in declaration order
        index: usize,
        /// The set's member names, in declaration order
        members: Vec<String>,
    },
}

/// One node of the error tree built by a resolution pass.
///
/// An entry either failed on its own (`Value`) or resolved into a nested
/// group whose own error map is propagated one level up under the entry's
/// name (`Nested`). The nesting of the error tree mirrors the nesting of
/// the declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// The entry itself failed to resolve.
    Value(ValidationError),
    /// The entry resolved into a group carrying its own errors.
    Nested(ErrorMap),
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::Value(err) => write!(f, "{}", err),
            ParamError::Nested(map) => {
                write!(f, "{{")?;
                for (i, (name, err)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, err)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl std::error::Error for ParamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParamError::Value(err) => Some(err),
            ParamError::Nested(_) => None,
        }
    }
}

impl From<ValidationError> for ParamError {
    fn from(err: ValidationError) -> Self {
        ParamError::Value(err)
    }
}

/// The aggregated error mapping of one resolution level.
///
/// Keyed by the offending entry's name, or by the synthesized
/// `non_null_set_{index}` name for an unsatisfied non-null set.
pub type ErrorMap = BTreeMap<ParamName, ParamError>;

/// A specialized `Result` type for per-parameter validation.
pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_error() {
        let error = SpecError::DuplicateName {
            name: "id".to_string(),
        };
        assert_eq!(error.to_string(), "parameter declared more than once: id");
    }

    #[test]
    fn test_unknown_set_member_error() {
        let error = SpecError::UnknownSetMember {
            name: "ghost".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "non-null set references undeclared parameter: ghost"
        );
    }

    #[test]
    fn test_missing_error() {
        let error = ValidationError::Missing {
            name: "user_id".to_string(),
        };
        assert_eq!(error.to_string(), "required parameter missing: user_id");
    }

    #[test]
    fn test_missing_group_error() {
        let error = ValidationError::MissingGroup {
            name: "address".to_string(),
        };
        assert_eq!(error.to_string(), "required group missing: address");
    }

    #[test]
    fn test_invalid_error() {
        let error = ValidationError::Invalid {
            name: "email".to_string(),
            message: "no @ sign".to_string(),
        };
        assert!(error.to_string().contains("email"));
        assert!(error.to_string().contains("no @ sign"));
    }

    #[test]
    fn test_non_null_set_error_message() {
        let error = ValidationError::NonNullSetEmpty {
            index: 0,
            members: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(
            error.to_string(),
            r#"must provide at least one of: ["a", "b"]"#
        );
    }

    #[test]
    fn test_conversion_error_message() {
        let error = ValidationError::Conversion {
            name: "count".to_string(),
            target_type: "integer".to_string(),
            message: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "failed to convert parameter 'count' to integer: invalid digit found in string"
        );
    }

    #[test]
    fn test_param_error_display_value() {
        let err = ParamError::Value(ValidationError::Missing {
            name: "id".to_string(),
        });
        assert_eq!(err.to_string(), "required parameter missing: id");
    }

    #[test]
    fn test_param_error_display_nested() {
        let mut inner = ErrorMap::new();
        inner.insert(
            ParamName::from("city"),
            ParamError::Value(ValidationError::Missing {
                name: "city".to_string(),
            }),
        );
        let err = ParamError::Nested(inner);
        assert_eq!(err.to_string(), "{city: required parameter missing: city}");
    }

    #[test]
    fn test_param_error_from_validation_error() {
        let err: ParamError = ValidationError::Missing {
            name: "id".to_string(),
        }
        .into();
        assert!(matches!(err, ParamError::Value(_)));
    }
}
