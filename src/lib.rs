// SPDX-License-Identifier: MIT OR Apache-2.0

//! A declarative request-parameter validation crate.
//!
//! This crate turns an already-parsed mapping of parameter names to string
//! values (possibly nested) into a validated, typed accessor. Parameters are
//! declared up front (required or optional, scalar or nested group, with
//! optional coercion checks), and one resolution pass validates the whole
//! input at once, aggregating every problem into a structured error map
//! instead of failing on the first one.
//!
//! # Architecture
//!
//! - **Domain Layer**: Core value types (`ParamName`, `ParamValue`,
//!   `RawValue`, errors)
//! - **Rules**: The declaration model (`ParamRule`, `ParamSpec`) and its
//!   builder
//! - **Accessor**: The resolution engine (`Params`), shared by the top level
//!   and nested groups
//!
//! # Error policy
//!
//! Data problems never escape as failures from a resolution: they are
//! captured per entry and exposed through `is_valid`/`errors`. Only
//! programmer errors escape immediately: a malformed declaration fails the
//! builder with a `SpecError`, and looking up an undeclared name panics.
//!
//! # Quick Start
//!
//! ```rust
//! use reqargs::prelude::*;
//!
//! # fn main() {
//! let address = ParamSpec::builder()
//!     .required("city")
//!     .optional("zip")
//!     .build()
//!     .unwrap();
//!
//! let spec = ParamSpec::builder()
//!     .required("name")
//!     .optional_with("age", |v: &ParamValue| {
//!         v.as_u32("age").map(|_| v.clone()).map_err(|e| e.to_string())
//!     })
//!     .optional_group("address", address)
//!     .build()
//!     .unwrap();
//!
//! let mut raw = RawParams::new();
//! raw.insert("name".to_string(), RawValue::from("zink"));
//! raw.insert("age".to_string(), RawValue::from("30"));
//!
//! let params = Params::resolve(&raw, &spec);
//! assert!(params.is_valid());
//!
//! let age = params.get("age").unwrap().as_value().unwrap();
//! assert_eq!(age.as_u32("age").unwrap(), 30);
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod accessor;
pub mod domain;
pub mod rules;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types for convenient access.
pub mod prelude {
    pub use crate::accessor::{ParamRef, Params};
    pub use crate::domain::{
        ErrorMap, ParamError, ParamName, ParamValue, RawParams, RawValue, Result, SpecError,
        ValidationError,
    };
    pub use crate::rules::{Check, ParamEntry, ParamRule, ParamSpec, ParamSpecBuilder};
}
