//! Validation diagnostics.

use serde::{Deserialize, Serialize};

/// A single diagnostic message from a failed check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable code for the failure class (e.g. "E002")
    pub code: String,

    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Result of validating one deployment process document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the document passed every check
    pub valid: bool,

    /// Diagnostics for failed checks. Validation is fail-fast, so this holds
    /// at most one entry.
    pub errors: Vec<Diagnostic>,

    /// Validation time in milliseconds
    pub validation_time_ms: u64,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success(validation_time_ms: u64) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            validation_time_ms,
        }
    }

    /// Create a failed validation result with a single diagnostic
    pub fn failure(error: Diagnostic, validation_time_ms: u64) -> Self {
        Self {
            valid: false,
            errors: vec![error],
            validation_time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic::new("E002", "The deployment process must have at least 3 steps");
        assert_eq!(
            diagnostic.to_string(),
            "E002: The deployment process must have at least 3 steps"
        );
    }

    #[test]
    fn test_result_constructors() {
        let ok = ValidationResult::success(1);
        assert!(ok.valid);
        assert!(ok.errors.is_empty());

        let failed = ValidationResult::failure(Diagnostic::new("E003", "mismatch"), 1);
        assert!(!failed.valid);
        assert_eq!(failed.errors.len(), 1);
        assert_eq!(failed.errors[0].code, "E003");
    }

    #[test]
    fn test_result_serializes_to_json() {
        let result = ValidationResult::failure(Diagnostic::new("E004", "name not found"), 3);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["valid"], serde_json::json!(false));
        assert_eq!(json["errors"][0]["code"], serde_json::json!("E004"));
        assert_eq!(json["errors"][0]["message"], serde_json::json!("name not found"));
    }
}
