use std::{io, num::ParseIntError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("line {line_no}: invalid UTF-8 (bytes: {bytes})")]
    InvalidUtf8 { line_no: u64, bytes: String },
    #[error("line {line_no}: malformed record {line:?}: {reason}")]
    MalformedRecord {
        line_no: u64,
        line: String,
        reason: &'static str,
    },
    #[error("line {line_no}: weight {weight:?} is not an integer")]
    InvalidWeight {
        line_no: u64,
        weight: String,
        #[source]
        source: ParseIntError,
    },
    #[error("batch '{key}': sum of weights overflows")]
    WeightOverflow { key: String },
}

pub type Result<T> = std::result::Result<T, Error>;
