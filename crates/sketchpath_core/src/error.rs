//! Error types for record decoding and path assembly

use thiserror::Error;

/// Errors produced while parsing a textual `{u, v}` coordinate pair
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PairError {
    /// The value is not wrapped in `{` and `}`
    #[error("expected a braced pair like \"{{u, v}}\", got {0:?}")]
    MissingBraces(String),

    /// The pair does not hold exactly two components
    #[error("expected 2 components, found {found} in {text:?}")]
    ComponentCount { found: usize, text: String },

    /// A component is not a finite decimal number
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
}

/// Errors that can occur when decoding curve points or building a path
#[derive(Error, Debug)]
pub enum PathError {
    /// A curve point record is missing a required field or holds a malformed value
    #[error("invalid record at index {index}: field `{field}` {reason}")]
    InvalidRecord {
        index: usize,
        field: &'static str,
        reason: String,
    },

    /// The ring holds no points
    #[error("cannot build a path from an empty ring")]
    EmptyRing,

    /// The input document is not valid JSON or has the wrong shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PathError {
    pub(crate) fn missing(index: usize, field: &'static str) -> Self {
        PathError::InvalidRecord {
            index,
            field,
            reason: "is missing".to_string(),
        }
    }

    pub(crate) fn malformed(index: usize, field: &'static str, err: PairError) -> Self {
        PathError::InvalidRecord {
            index,
            field,
            reason: err.to_string(),
        }
    }

    /// Ring position of the offending record, if the error is tied to one
    pub fn index(&self) -> Option<usize> {
        match self {
            PathError::InvalidRecord { index, .. } => Some(*index),
            _ => None,
        }
    }
}
