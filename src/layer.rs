use std::io;

use tracing_core::{Event, Subscriber};
use tracing_subscriber::{
    fmt::MakeWriter,
    layer::{Context, Layer},
    registry::LookupSpan,
};

use crate::{emitter::JsonEmitter, visitor::DetailsVisitor};

/// `tracing_subscriber` layer that forwards events through a [`JsonEmitter`].
///
/// Event fields become top-level extension fields and the `message` field
/// becomes the record message, so instrumented code produces the same lines
/// as direct [`emit`](crate::emit) calls. The severity token is taken from
/// the event metadata.
///
/// A layer has no caller to hand errors to. By default emit failures are
/// dropped; [`with_internal_error_logging`] makes the layer report them on
/// stderr instead.
///
/// # Examples
///
/// ```rust
/// use tracing_subscriber::prelude::*;
///
/// tracing_subscriber::registry()
///     .with(json_emitter::EmitterLayer::stdout())
///     .init();
///
/// tracing::info!(user_id = "user-1234", "User registration successful.");
/// ```
///
/// [`with_internal_error_logging`]: EmitterLayer::with_internal_error_logging
pub struct EmitterLayer<W = fn() -> io::Stdout> {
    emitter: JsonEmitter<W>,
    log_internal_errors: bool,
}

impl EmitterLayer {
    /// Creates a layer emitting to stdout.
    pub fn stdout() -> EmitterLayer<fn() -> io::Stdout> {
        EmitterLayer::new(JsonEmitter::stdout())
    }
}

impl Default for EmitterLayer {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W> EmitterLayer<W> {
    /// Wraps an emitter in a layer.
    pub fn new(emitter: JsonEmitter<W>) -> Self {
        Self {
            emitter,
            log_internal_errors: false,
        }
    }

    /// Sets whether emit failures are reported on stderr.
    pub fn with_internal_error_logging(self, log_internal_errors: bool) -> Self {
        Self {
            log_internal_errors,
            ..self
        }
    }
}

impl<S, W> Layer<S> for EmitterLayer<W>
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
    W: for<'writer> MakeWriter<'writer> + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = DetailsVisitor::default();
        event.record(&mut visitor);

        let message = visitor.message.unwrap_or_default();
        let level = event.metadata().level().as_str();

        if let Err(error) = self.emitter.emit_with(level, &message, visitor.details) {
            if self.log_internal_errors {
                eprintln!("[json-emitter] unable to write an event to the sink: {error}");
            }
        }
    }
}
