//! Concrete summary sinks registered by the binary.

use std::fs::File;
use std::io::{self, BufWriter};

use quote_core::output::{SinkConfig, SinkError, SinkFactory, SummarySink, WriterSink};

/// Writes the summary to standard output.
pub struct StdoutSinkFactory;

impl SinkFactory for StdoutSinkFactory {
    fn backend_name(&self) -> &'static str {
        "stdout"
    }

    fn create(
        &self,
        _config: &SinkConfig,
    ) -> Result<Box<dyn SummarySink>, SinkError> {
        Ok(Box::new(WriterSink::new(io::stdout(), "stdout")))
    }
}

/// Writes the summary to the file named by `SinkConfig::target`,
/// replacing any previous contents.
pub struct FileSinkFactory;

impl SinkFactory for FileSinkFactory {
    fn backend_name(&self) -> &'static str {
        "file"
    }

    fn create(
        &self,
        config: &SinkConfig,
    ) -> Result<Box<dyn SummarySink>, SinkError> {
        let path = config.target.as_ref().ok_or_else(|| {
            SinkError::Configuration("file sink requires an output path".to_string())
        })?;
        let file = File::create(path)?;
        Ok(Box::new(WriterSink::new(
            BufWriter::new(file),
            path.display().to_string(),
        )))
    }
}
