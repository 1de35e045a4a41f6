//! Request validation utilities for consistent validation across handlers
//!
//! Payloads implement [`RequestValidation`]; the macros below keep the
//! per-field checks to one line each and attribute failures to the field.

use crate::error::ApiError;

/// Trait for validating request payloads
///
/// # Example
///
/// ```rust
/// use heal_hub_server::{validate_field, validation::RequestValidation, ApiError};
///
/// struct LookupRequest {
///     specialty: String,
/// }
///
/// impl RequestValidation for LookupRequest {
///     fn validate(&self) -> Result<(), ApiError> {
///         validate_field!("specialty", !self.specialty.trim().is_empty(), "Specialty is required");
///         Ok(())
///     }
/// }
///
/// assert!(LookupRequest { specialty: String::new() }.validate().is_err());
/// ```
pub trait RequestValidation {
    /// Validates the request and returns an error if validation fails
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` naming the offending field.
    fn validate(&self) -> Result<(), ApiError>;
}

/// Macro for validating fields with custom predicates
///
/// # Usage
///
/// ```rust,ignore
/// validate_field!("symptoms", !self.symptoms.is_empty(), "Symptoms array is required");
/// ```
#[macro_export]
macro_rules! validate_field {
    ($field:literal, $predicate:expr, $message:expr) => {
        if !$predicate {
            return Err($crate::error::ApiError::validation_for_field($field, $message));
        }
    };
}

/// Macro for validating that an optional collection is present and non-empty
///
/// # Usage
///
/// ```rust,ignore
/// validate_present!("symptoms", self.symptoms, "Symptoms array is required");
/// ```
#[macro_export]
macro_rules! validate_present {
    ($field:literal, $value:expr, $message:expr) => {
        $crate::validate_field!(
            $field,
            $value.as_ref().is_some_and(|value| !value.is_empty()),
            $message
        );
    };
}
