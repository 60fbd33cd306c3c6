//! Validation and filtering system
//!
//! This module provides a declarative approach to validating order drafts.
//! Rules are plain functions over field values, so they can run per field on
//! every edit or over the whole draft at submit time.

pub mod filters;
pub mod result;
pub mod schema;
pub mod validators;

pub use result::ValidationResult;
pub use schema::{FieldRules, OrderSchema};
