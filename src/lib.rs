//! Structured log entries emitted as single JSON lines.
//!
//! Each emitted entry is one JSON object per line carrying the fixed fields
//! `timestamp` (UTC, millisecond precision), `level` (uppercased) and
//! `message`, followed by any caller-supplied [`Details`]. See
//! [`JsonEmitter`] for the full contract and [`EmitterLayer`] for plugging
//! the same format into `tracing`.

mod details;
mod emitter;
mod error;
mod layer;
mod record;
mod visitor;
mod write_adaptor;


pub use details::Details;
pub use emitter::JsonEmitter;
pub use error::EmitError;
pub use layer::EmitterLayer;

/// Emits a log entry with no additional fields to stdout.
///
/// This is shorthand for [`JsonEmitter::stdout()`] followed by
/// [`emit`](JsonEmitter::emit); for anything beyond one-off calls, build a
/// [`JsonEmitter`] once and reuse it.
///
/// # Examples
///
/// ```rust
/// json_emitter::emit("info", "Server application starting.")?;
/// # Ok::<(), json_emitter::EmitError>(())
/// ```
///
/// # Errors
///
/// Returns [`EmitError::Write`] if stdout rejects the line; nothing is
/// written for that call.
pub fn emit(level: &str, message: &str) -> Result<(), EmitError> {
    JsonEmitter::stdout().emit(level, message)
}

/// Emits a log entry carrying the given additional fields to stdout.
///
/// # Examples
///
/// ```rust
/// use json_emitter::Details;
///
/// json_emitter::emit_with(
///     "error",
///     "Failed to write to file.",
///     Details::new()
///         .field("file_path", "/var/log/app.log")
///         .field("error", "Permission denied"),
/// )?;
/// # Ok::<(), json_emitter::EmitError>(())
/// ```
///
/// # Errors
///
/// Returns [`EmitError::Write`] if stdout rejects the line; nothing is
/// written for that call.
pub fn emit_with(level: &str, message: &str, details: Details) -> Result<(), EmitError> {
    JsonEmitter::stdout().emit_with(level, message, details)
}
