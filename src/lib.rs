//! Log Merge library components
//!
//! This module exposes the core merge pipeline for testing,
//! benchmarking, and external usage.

pub mod error;
pub mod log_reader;
pub mod log_sink;
pub mod merge_config;
pub mod merge_engine;
pub mod record;

// Re-export commonly used types
pub use error::{MergeError, ParseError};
pub use log_reader::RecordStream;
pub use log_sink::LogSink;
pub use merge_config::MergeConfig;
pub use merge_engine::{merge_files, MergeEngine, MergeSummary};
pub use record::Record;
