//! Parsed deployment process documents.

use crate::error::Result;
use hcl_edit::structure::{Block, Body};

/// A parsed deployment process file.
///
/// Wraps the syntax tree produced by the external OCL parser. The only
/// structure callers rely on is the ordered sequence of top-level blocks,
/// one per deployment step; everything else stays behind [`crate::OclQuery`]
/// lookups. Documents are immutable once parsed.
#[derive(Debug)]
pub struct OclDocument {
    body: Body,
}

impl OclDocument {
    /// Parse raw OCL text into a document.
    pub fn parse(source: &str) -> Result<Self> {
        let body = hcl_edit::parser::parse_body(source)?;
        log::debug!(
            "parsed OCL document with {} top-level nodes",
            body.iter().count()
        );
        Ok(Self { body })
    }

    /// Top-level step blocks, in file order.
    pub fn steps(&self) -> Vec<&Block> {
        self.body.iter().filter_map(|node| node.as_block()).collect()
    }
}
