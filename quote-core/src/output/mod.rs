//! Delivery of finished quotes.
//!
//! Rendered summaries go to a [`SummarySink`] chosen by name through a
//! [`SinkRegistry`]; submitted requests go to a [`SubmissionHook`].

mod factory;
mod sink;
mod submission;

pub use factory::{SinkConfig, SinkFactory, SinkRegistry};
pub use sink::{SinkError, SummarySink, WriterSink};
pub use submission::{Acknowledgement, LoggingSubmissionHook, SubmissionError, SubmissionHook};
