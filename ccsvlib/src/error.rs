//! Error types for ccsvlib

use thiserror::Error;

use crate::column::Kind;

/// Errors that can occur while building or printing columns
#[derive(Error, Debug)]
pub enum CcsvError {
    /// A kind tag or name outside the supported set
    #[error("unknown column type: {0}")]
    UnknownType(String),

    /// A column whose length differs from the first column's
    #[error("column {column} has {found} rows, expected {expected}")]
    ColumnLengthMismatch {
        column: usize,
        expected: usize,
        found: usize,
    },

    /// A requested column length larger than the backing buffer
    #[error("column length {requested} exceeds buffer of {available} elements")]
    LengthOutOfBounds { requested: usize, available: usize },

    /// A text value that does not parse as the column's kind
    #[error("invalid {kind} value '{value}' at position {index}: {reason}")]
    InvalidValue {
        kind: Kind,
        index: usize,
        value: String,
        reason: String,
    },

    /// The output sink rejected a write
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
