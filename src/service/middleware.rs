//! Explicit middleware — validation and failure logging, composed in order
//! at each handler call site (validate → execute → log).

use std::future::Future;

use serde::Serialize;

use super::error::HandlerError;
use crate::domain::Record;

/// Reject a batch containing a blank record id. Runs before the store is
/// touched, so an invalid batch never produces partial writes.
pub fn validate_records<R: Record>(records: &[R]) -> Result<(), HandlerError> {
    for (index, record) in records.iter().enumerate() {
        if record.id().trim().is_empty() {
            return Err(HandlerError::Validation(format!(
                "record at index {} has an empty id",
                index
            )));
        }
    }
    Ok(())
}

/// Run an operation, logging full failure context before surfacing the error.
///
/// Logged fields: operation name, serialized input echo, error kind, error
/// message. Success passes through untouched; this is a side channel, not
/// part of the functional contract.
pub async fn logged<T, I, F>(operation: &str, input: &I, fut: F) -> Result<T, HandlerError>
where
    I: Serialize,
    F: Future<Output = Result<T, HandlerError>>,
{
    match fut.await {
        Ok(value) => Ok(value),
        Err(error) => {
            let input_echo = serde_json::to_string(input)
                .unwrap_or_else(|_| "<unserializable>".to_string());
            tracing::error!(
                operation,
                input = %input_echo,
                error_kind = error.kind(),
                error = %error,
                "operation failed"
            );
            Err(error)
        }
    }
}
