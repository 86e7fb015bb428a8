use std::io::Write;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Destination for a rendered quote summary (terminal, file, printer spool).
///
/// Sinks receive finished text and only deliver it.
pub trait SummarySink {
    /// Short description used in log messages, e.g. `"stdout"` or a path.
    fn describe(&self) -> String;

    fn deliver(
        &mut self,
        summary: &str,
    ) -> Result<(), SinkError>;
}

/// A sink over any [`Write`] implementation.
pub struct WriterSink<W: Write> {
    writer: W,
    description: String,
}

impl<W: Write> WriterSink<W> {
    pub fn new(
        writer: W,
        description: impl Into<String>,
    ) -> Self {
        Self {
            writer,
            description: description.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SummarySink for WriterSink<W> {
    fn describe(&self) -> String {
        self.description.clone()
    }

    fn deliver(
        &mut self,
        summary: &str,
    ) -> Result<(), SinkError> {
        self.writer.write_all(summary.as_bytes())?;
        if !summary.ends_with('\n') {
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        tracing::info!(sink = %self.description, bytes = summary.len(), "delivered quote summary");
        Ok(())
    }
}
