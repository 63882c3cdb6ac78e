//! Step validator for deployment process documents.

use crate::diagnostic::{Diagnostic, ValidationResult};
use crate::rules::{
    StepCheck, StepRule, ACTION_BLOCK, ACTION_TYPE_ATTR, MIN_STEP_COUNT, NAME_ATTR, STEP_RULES,
};
use hcl_edit::structure::Block;
use std::time::Instant;
use stepcheck_ocl::{OclDocument, OclQuery};

/// Applies the fixed step rules to a deployment process document.
///
/// Checks run strictly in order and stop at the first failure, so a result
/// carries at most one diagnostic. Rule failures are data, not errors: the
/// caller maps [`ValidationResult::valid`] to an exit status.
pub struct StepValidator;

impl StepValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Parse raw OCL text and validate it.
    ///
    /// A parse failure is reported as an `E001` diagnostic so the caller
    /// gets the same pass/fail shape either way.
    pub fn validate_source(&self, source: &str) -> ValidationResult {
        let start = Instant::now();

        match OclDocument::parse(source) {
            Ok(document) => self.validate(&document),
            Err(e) => ValidationResult::failure(
                Diagnostic::new("E001", format!("Parse error: {}", e)),
                start.elapsed().as_millis() as u64,
            ),
        }
    }

    /// Validate a parsed document against the step rules.
    pub fn validate(&self, document: &OclDocument) -> ValidationResult {
        let start = Instant::now();
        let steps = document.steps();

        // The count check runs first so the rule table can index steps safely
        if steps.len() < MIN_STEP_COUNT {
            let diagnostic = Diagnostic::new(
                "E002",
                format!(
                    "The deployment process must have at least {} steps",
                    MIN_STEP_COUNT
                ),
            );
            return ValidationResult::failure(diagnostic, start.elapsed().as_millis() as u64);
        }

        for rule in STEP_RULES {
            if let Some(diagnostic) = Self::apply(rule, &steps) {
                log::debug!("step rule failed: {}", diagnostic);
                return ValidationResult::failure(diagnostic, start.elapsed().as_millis() as u64);
            }
        }

        ValidationResult::success(start.elapsed().as_millis() as u64)
    }

    /// Apply one rule to the document's steps, returning a diagnostic on
    /// failure.
    fn apply(rule: &StepRule, steps: &[&Block]) -> Option<Diagnostic> {
        let step = steps[rule.selector.index(steps.len())];

        match rule.check {
            StepCheck::NamePresent => {
                let name = OclQuery::unquoted_value(OclQuery::find_attribute(
                    Some(&step.body),
                    NAME_ATTR,
                ));
                name.is_none().then(|| {
                    Diagnostic::new(
                        "E004",
                        format!("Failed to find the name of the {}", rule.selector.noun()),
                    )
                })
            }
            StepCheck::NameEquals(expected) => {
                let actual = OclQuery::unquoted_value(OclQuery::find_attribute(
                    Some(&step.body),
                    NAME_ATTR,
                ));
                (actual.as_deref() != Some(expected)).then(|| {
                    Diagnostic::new(
                        "E003",
                        format!(
                            "{} must be called {} (was {})",
                            rule.selector.label(),
                            expected,
                            actual.as_deref().unwrap_or("not set"),
                        ),
                    )
                })
            }
            StepCheck::ActionTypeEquals(expected) => {
                let action = OclQuery::find_block(Some(&step.body), ACTION_BLOCK);
                let actual = OclQuery::unquoted_value(OclQuery::find_attribute(
                    action.map(|block| &block.body),
                    ACTION_TYPE_ATTR,
                ));
                (actual.as_deref() != Some(expected)).then(|| {
                    Diagnostic::new(
                        "E005",
                        format!(
                            "{} must be a script step (was {})",
                            rule.selector.label(),
                            actual.as_deref().unwrap_or("not set"),
                        ),
                    )
                })
            }
        }
    }
}

impl Default for StepValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_steps() {
        let source = r#"
step "generate-github-token" {
    name = "Generate GitHub Token"
}

step "vulnerability-scan" {
    name = "Vulnerability Scan"
}
"#;

        let result = StepValidator::new().validate_source(source);
        assert!(!result.valid);
        assert_eq!(result.errors[0].code, "E002");
        assert_eq!(
            result.errors[0].message,
            "The deployment process must have at least 3 steps"
        );
    }

    #[test]
    fn test_parse_failure_is_a_diagnostic() {
        let result = StepValidator::new().validate_source("step \"broken\" {");
        assert!(!result.valid);
        assert_eq!(result.errors[0].code, "E001");
    }

    #[test]
    fn test_missing_action_block_reported_as_action_type_failure() {
        let source = r#"
step "generate-github-token" {
    name = "Generate GitHub Token"
}

step "check-for-updates" {
    name = "Check for Updates"
}

step "vulnerability-scan" {
    name = "Vulnerability Scan"
}
"#;

        let result = StepValidator::new().validate_source(source);
        assert!(!result.valid);
        assert_eq!(result.errors[0].code, "E005");
        assert_eq!(
            result.errors[0].message,
            "First step must be a script step (was not set)"
        );
    }
}
