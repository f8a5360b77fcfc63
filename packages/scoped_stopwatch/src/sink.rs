use std::fmt;
use std::io::{self, Write};

/// Where a stopwatch writes its report lines.
///
/// A sink never owns its destination. A borrowed writer must outlive every stopwatch that
/// reports to it, which the `'s` lifetime enforces.
///
/// Every line is terminated with a line break and followed by an explicit flush, so timing
/// lines appear promptly even when the destination is buffered. Write failures are not
/// reported to the stopwatch caller; they are logged as `tracing` warnings and the line is lost.
///
/// # Examples
///
/// ```
/// use scoped_stopwatch::{Sink, Stopwatch};
///
/// let mut report = Vec::new();
///
/// {
///     let _watch = Stopwatch::with_sink(&mut report, "load", true);
/// }
///
/// let report = String::from_utf8(report).unwrap();
/// assert!(report.starts_with("load: start\nload: stop "));
/// ```
#[derive(derive_more::Debug)]
pub struct Sink<'s> {
    kind: SinkKind<'s>,
}

#[derive(derive_more::Debug)]
enum SinkKind<'s> {
    Stdout,
    Writer(#[debug(ignore)] &'s mut dyn Write),
    Log,
    Discard,
}

impl<'s> Sink<'s> {
    /// Writes lines to the standard output of the process.
    #[must_use]
    pub const fn stdout() -> Self {
        Self {
            kind: SinkKind::Stdout,
        }
    }

    /// Writes lines to a caller-owned writer.
    #[must_use]
    pub fn writer<W: Write>(writer: &'s mut W) -> Self {
        Self {
            kind: SinkKind::Writer(writer),
        }
    }

    /// Emits each line as an INFO-level `tracing` event.
    ///
    /// The line is the event message; what happens to it is up to the installed subscriber.
    #[must_use]
    pub const fn log() -> Self {
        Self {
            kind: SinkKind::Log,
        }
    }

    /// Drops every line.
    #[must_use]
    pub const fn discard() -> Self {
        Self {
            kind: SinkKind::Discard,
        }
    }

    pub(crate) fn write_line(&mut self, line: fmt::Arguments<'_>) {
        let result = match &mut self.kind {
            SinkKind::Stdout => write_to_stdout(line),
            SinkKind::Writer(writer) => write_and_flush(&mut **writer, line),
            SinkKind::Log => {
                tracing::info!("{line}");
                Ok(())
            }
            SinkKind::Discard => Ok(()),
        };

        if let Err(error) = result {
            tracing::warn!(%error, "failed to write stopwatch report line");
        }
    }
}

#[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
fn write_to_stdout(line: fmt::Arguments<'_>) -> io::Result<()> {
    write_and_flush(&mut io::stdout().lock(), line)
}

fn write_and_flush(writer: &mut dyn Write, line: fmt::Arguments<'_>) -> io::Result<()> {
    writeln!(writer, "{line}")?;
    writer.flush()
}

impl Default for Sink<'_> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<'s, W: Write> From<&'s mut W> for Sink<'s> {
    fn from(writer: &'s mut W) -> Self {
        Self::writer(writer)
    }
}
