//! Error types for the session/speaker handlers.

use std::error::Error;
use std::fmt;

use crate::store::StoreError;

/// Failures surfaced by a handler. Callers always get one of these or a
/// well-formed success value; nothing propagates past the handler uncaught.
#[derive(Debug)]
pub enum HandlerError {
    /// Input rejected before any store call.
    Validation(String),
    /// Payload decode / deserialization failed.
    DecodeFailed(String),
    /// The store operation failed.
    Store(StoreError),
}

impl HandlerError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::Validation(_) => 400,
            HandlerError::DecodeFailed(_) => 400,
            HandlerError::Store(StoreError::Cancelled) => 499,
            HandlerError::Store(_) => 500,
        }
    }

    /// Stable name for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            HandlerError::Validation(_) => "validation",
            HandlerError::DecodeFailed(_) => "decode_failed",
            HandlerError::Store(store) => store.kind(),
        }
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::Validation(msg) => write!(f, "validation failed: {}", msg),
            HandlerError::DecodeFailed(msg) => write!(f, "decode failed: {}", msg),
            HandlerError::Store(source) => write!(f, "{}", source),
        }
    }
}

impl Error for HandlerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HandlerError::Store(source) => Some(source),
            _ => None,
        }
    }
}

impl From<StoreError> for HandlerError {
    fn from(error: StoreError) -> Self {
        HandlerError::Store(error)
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(error: serde_json::Error) -> Self {
        HandlerError::DecodeFailed(error.to_string())
    }
}
