use thiserror::Error;

/// Decode failure, carrying the byte offset where parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonError {
    #[error("unexpected end of input at byte {0}")]
    UnexpectedEnd(usize),
    #[error("invalid JSON syntax at byte {0}")]
    InvalidSyntax(usize),
    #[error("invalid string literal at byte {0}")]
    InvalidString(usize),
    #[error("invalid number literal at byte {0}")]
    InvalidNumber(usize),
    #[error("trailing data after document at byte {0}")]
    TrailingData(usize),
}
