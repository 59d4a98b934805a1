//! Error types for conversion and golden-store operations

use std::fmt;

/// Errors that can occur while converting MathML or maintaining the golden set
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The MathML source was not well-formed XML
    ParseError(String),
    /// The golden-set store could not be persisted
    StoreError(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConvertError::StoreError(msg) => write!(f, "Golden store error: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
