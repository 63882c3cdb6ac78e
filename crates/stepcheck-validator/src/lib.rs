//! stepcheck validator - structural step rules for deployment process files
//!
//! Applies a fixed, ordered rule set to a parsed deployment process document:
//! minimum step count, required names for the first/second/last step, and a
//! required action type for those steps. Validation is a pass/fail oracle:
//! every failure resolves to an invalid [`ValidationResult`] carrying a
//! diagnostic, never an error.

pub mod diagnostic;
pub mod rules;
pub mod validator;

// Re-export main types
pub use diagnostic::{Diagnostic, ValidationResult};
pub use validator::StepValidator;

/// Convenience function to parse and validate raw OCL text
pub fn validate(source: &str) -> ValidationResult {
    StepValidator::new().validate_source(source)
}
