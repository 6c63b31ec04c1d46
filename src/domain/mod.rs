// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the fundamental value types of the crate: parameter
//! names, scalar parameter values, the raw input shape, and the error
//! taxonomy. It is independent of the declaration and resolution layers.

pub mod errors;
pub mod param_name;
pub mod param_value;
pub mod raw_value;

// Re-export commonly used types
pub use errors::{ErrorMap, ParamError, Result, SpecError, ValidationError};
pub use param_name::ParamName;
pub use param_value::ParamValue;
pub use raw_value::{RawParams, RawValue};
