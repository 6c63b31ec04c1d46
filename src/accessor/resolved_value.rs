// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolved scalar holder.
//!
//! One `ResolvedValue` is built per scalar declaration during a resolution
//! pass. It records whether the input actually contained a value (independent
//! of requiredness) and, when provided, the value after the declaration's
//! check function ran.

use crate::domain::{ParamName, ParamValue, RawValue, ValidationError};
use crate::rules::Check;

/// A resolved scalar parameter: the coerced value, or its absence.
///
/// `provided` is true iff the input mapping contained a value for the name,
/// even an empty string. An absent optional parameter resolves to a
/// not-provided holder with no error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ResolvedValue {
    value: Option<ParamValue>,
    provided: bool,
}

impl ResolvedValue {
    /// Resolves one scalar declaration against its raw input value.
    ///
    /// Fails when a required value is absent, when the input holds a nested
    /// map where a scalar was declared, or when the check function rejects
    /// the value. A passing check may replace the stored value, so checks
    /// double as normalizers.
    pub(crate) fn resolve(
        name: &ParamName,
        raw: Option<&RawValue>,
        required: bool,
        check: Option<&Check>,
    ) -> Result<Self, ValidationError> {
        match raw {
            None => {
                if required {
                    Err(ValidationError::Missing {
                        name: name.as_str().to_string(),
                    })
                } else {
                    Ok(Self {
                        value: None,
                        provided: false,
                    })
                }
            }
            Some(RawValue::Map(_)) => Err(ValidationError::ExpectedScalar {
                name: name.as_str().to_string(),
            }),
            Some(RawValue::Scalar(s)) => {
                let value = ParamValue::from(s.as_str());
                let value = match check {
                    Some(check) => check(&value).map_err(|message| ValidationError::Invalid {
                        name: name.as_str().to_string(),
                        message,
                    })?,
                    None => value,
                };
                Ok(Self {
                    value: Some(value),
                    provided: true,
                })
            }
        }
    }

    /// True iff the input contained a value for this parameter.
    pub(crate) fn provided(&self) -> bool {
        self.provided
    }

    /// The coerced value, or `None` for an absent optional parameter.
    pub(crate) fn value(&self) -> Option<&ParamValue> {
        self.value.as_ref()
    }
}
