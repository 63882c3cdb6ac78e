//! Parser boundary error types

use thiserror::Error;

/// Error produced while turning raw file text into a document
#[derive(Error, Debug)]
pub enum ParseError {
    /// Syntax error reported by the OCL parser
    #[error("OCL syntax error: {0}")]
    Syntax(#[from] hcl_edit::parser::Error),
}

/// Result type for document parsing
pub type Result<T> = std::result::Result<T, ParseError>;
