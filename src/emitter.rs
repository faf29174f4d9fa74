use std::{cell::RefCell, io};

use tracing_subscriber::fmt::MakeWriter;

use crate::{details::Details, error::EmitError, record::LogRecord};

/// Formats log entries as JSON lines and writes them to a sink.
///
/// Every emit call captures the current instant, builds one record out of
/// the three fixed fields (`timestamp`, `level`, `message`) and the caller's
/// [`Details`], serializes it into a per-thread buffer and writes the whole
/// line to the sink with a single `write_all`. Exactly one line is produced
/// per call and concurrent callers never interleave partial lines.
///
/// The sink is anything implementing [`MakeWriter`]; [`JsonEmitter::stdout`]
/// is the common case.
///
/// # Examples
///
/// ```rust
/// use json_emitter::{Details, JsonEmitter};
///
/// let emitter = JsonEmitter::stdout();
/// emitter.emit("info", "Server application starting.")?;
/// emitter.emit_with(
///     "warn",
///     "Database connection is slow.",
///     Details::new()
///         .field("duration_ms", 250)
///         .field("database", "user_db"),
/// )?;
/// # Ok::<(), json_emitter::EmitError>(())
/// ```
pub struct JsonEmitter<W = fn() -> io::Stdout> {
    make_writer: W,
}

impl JsonEmitter {
    /// Creates an emitter that writes to stdout.
    pub fn stdout() -> JsonEmitter<fn() -> io::Stdout> {
        JsonEmitter::new(io::stdout)
    }

    /// Creates an emitter that writes to stderr.
    pub fn stderr() -> JsonEmitter<fn() -> io::Stderr> {
        JsonEmitter::new(io::stderr)
    }

    /// Creates an emitter that writes to the given [`MakeWriter`].
    pub fn new<W>(make_writer: W) -> JsonEmitter<W>
    where
        W: for<'writer> MakeWriter<'writer>,
    {
        JsonEmitter { make_writer }
    }
}

impl Default for JsonEmitter {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W> JsonEmitter<W> {
    /// Replaces the sink, keeping everything else.
    pub fn with_writer<W2>(self, make_writer: W2) -> JsonEmitter<W2>
    where
        W2: for<'writer> MakeWriter<'writer>,
    {
        JsonEmitter { make_writer }
    }
}

impl<W> JsonEmitter<W>
where
    W: for<'writer> MakeWriter<'writer>,
{
    /// Emits an entry with no additional fields.
    ///
    /// Equivalent to [`emit_with`](JsonEmitter::emit_with) with an empty
    /// [`Details`] built fresh for this call.
    pub fn emit(&self, level: &str, message: &str) -> Result<(), EmitError> {
        self.emit_with(level, message, Details::new())
    }

    /// Emits an entry carrying the given additional fields.
    ///
    /// The severity token is uppercased but otherwise not validated; any
    /// token is accepted, the empty string included. Details keys named
    /// `timestamp`, `level` or `message` are dropped rather than allowed to
    /// shadow the fixed fields. Sink failures propagate as
    /// [`EmitError::Write`] and nothing is written for that call.
    pub fn emit_with(
        &self,
        level: &str,
        message: &str,
        details: Details,
    ) -> Result<(), EmitError> {
        thread_local! {
            static BUF: RefCell<String> = const { RefCell::new(String::new()) };
        }

        BUF.with(|buf| {
            let borrow = buf.try_borrow_mut();
            let mut a;
            let mut b;
            let buf = if let Ok(buf) = borrow {
                a = buf;
                &mut *a
            } else {
                b = String::new();
                &mut b
            };

            let result = self.write_line(level, message, &details, buf);
            buf.clear();
            result
        })
    }

    fn write_line(
        &self,
        level: &str,
        message: &str,
        details: &Details,
        buf: &mut String,
    ) -> Result<(), EmitError> {
        LogRecord::new(level, message, details).render(buf)?;

        let mut writer = self.make_writer.make_writer();
        io::Write::write_all(&mut writer, buf.as_bytes())?;
        Ok(())
    }
}
