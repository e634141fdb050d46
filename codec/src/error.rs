use thiserror::Error;

/// Failure while parsing a request message. No partial request is ever
/// returned alongside an error; the free-text payload carries the detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed start line: {0}")]
    InvalidStartLine(String),

    #[error("malformed headers: {0}")]
    InvalidHeaders(String),
}

/// Failure while serializing a response message.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("failed to write response text: {0}")]
    Write(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, ParseError>;
