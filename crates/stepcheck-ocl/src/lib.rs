//! stepcheck OCL - document boundary for the stepcheck validator
//!
//! This crate wraps the external `hcl-edit` parser and exposes the small
//! tree-query surface the validator needs:
//! - Document model (ordered top-level step blocks)
//! - Attribute/block lookup by name with last-occurrence-wins semantics
//! - Unquoting of attribute value text

pub mod document;
pub mod error;
pub mod query;

// Re-export main types
pub use document::OclDocument;
pub use error::{ParseError, Result};
pub use query::OclQuery;
