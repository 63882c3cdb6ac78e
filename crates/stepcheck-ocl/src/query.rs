//! Tree query helpers over parsed OCL bodies.
//!
//! Lookups take an optional body so that navigation across possibly missing
//! blocks stays flat, and resolve repeated names by taking the last
//! occurrence (most recent wins).

use hcl_edit::structure::{Attribute, Block, Body};

/// Lookup utilities for named children within a block body
pub struct OclQuery;

impl OclQuery {
    /// Last attribute child with the given name, or `None` if the body is
    /// absent or has no match.
    pub fn find_attribute<'a>(body: Option<&'a Body>, name: &str) -> Option<&'a Attribute> {
        body?
            .iter()
            .filter_map(|node| node.as_attribute())
            .filter(|attr| attr.key.as_str() == name)
            .last()
    }

    /// Last block child with the given name, or `None` if the body is absent
    /// or has no match.
    pub fn find_block<'a>(body: Option<&'a Body>, name: &str) -> Option<&'a Block> {
        body?
            .iter()
            .filter_map(|node| node.as_block())
            .filter(|block| block.ident.as_str() == name)
            .last()
    }

    /// Raw source text of an attribute value, trimmed of surrounding trivia.
    ///
    /// Quoted string literals keep their quotes here; stripping them is the
    /// job of [`OclQuery::unquote`].
    pub fn value_text(attr: &Attribute) -> String {
        attr.value.to_string().trim().to_string()
    }

    /// Strip one pair of surrounding double quotes, if present.
    ///
    /// Idempotent on already-unquoted values.
    pub fn unquote(value: &str) -> &str {
        if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
            &value[1..value.len() - 1]
        } else {
            value
        }
    }

    /// Unquoted value text of an attribute, or `None` if the attribute is
    /// absent.
    pub fn unquoted_value(attr: Option<&Attribute>) -> Option<String> {
        attr.map(|attr| Self::unquote(&Self::value_text(attr)).to_string())
    }
}
