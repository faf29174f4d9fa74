use std::io;

use thiserror::Error;

/// Failure to emit a log entry.
///
/// Errors are never caught or retried inside the crate; when the sink is
/// unwritable no line is produced for that call and the caller decides
/// whether that is fatal.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The record could not be rendered as JSON.
    #[error("failed to serialize log record: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output sink rejected the serialized line.
    #[error("failed to write log record to the sink: {0}")]
    Write(#[from] io::Error),
}
