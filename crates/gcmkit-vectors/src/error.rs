use thiserror::Error;

use crate::record::RawRecord;

/// Failure decoding one field of an accepted record.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("required field {0} is missing")]
    Missing(&'static str),

    #[error("field {field} is not valid hex: {source}")]
    Hex {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },
}

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("line {line}: field {field} is not valid hex ({source}); {emitted} vectors emitted before it; record {record:?}")]
    Decode {
        line: usize,
        emitted: usize,
        field: &'static str,
        record: RawRecord,
        #[source]
        source: hex::FromHexError,
    },

    #[error("line {line}: required field {field} is missing; {emitted} vectors emitted before it; record {record:?}")]
    MissingField {
        line: usize,
        emitted: usize,
        field: &'static str,
        record: RawRecord,
    },

    #[error("line {line}: expected `KEY = value` inside a KAT record, got {text:?}")]
    MalformedKatLine { line: usize, text: String },

    #[error("line {line}: COUNT value {text:?} is not an integer")]
    BadCount { line: usize, text: String },

    #[error("line {line}: KAT field {field} is not valid hex: {source}")]
    KatDecode {
        line: usize,
        field: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl VectorError {
    pub(crate) fn from_field(err: FieldError, line: usize, emitted: usize, record: RawRecord) -> Self {
        match err {
            FieldError::Missing(field) => VectorError::MissingField { line, emitted, field, record },
            FieldError::Hex { field, source } => VectorError::Decode { line, emitted, field, record, source },
        }
    }
}
