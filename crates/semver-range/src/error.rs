//! Error type for version and range parsing

use thiserror::Error;

/// Errors produced while parsing versions and range expressions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Malformed version: {0}")]
    MalformedVersion(String),

    #[error("Malformed version range: {0}")]
    MalformedRange(String),

    /// An operator token with no evaluator. Only reachable when parsing an
    /// operator on its own; the clause grammar resolves operators up front.
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Upper bound of range \"{0}\" overflows")]
    BoundOverflow(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
