//! Two-stream ordered merge
//!
//! The engine interleaves two pre-sorted record streams into one globally
//! ordered sequence by pairwise timestamp comparison. Tie-break: on an
//! exact timestamp tie the stream-B record is emitted first. This is
//! preserved exactly for compatibility with existing merged outputs.

use crate::error::MergeError;
use crate::log_reader::RecordStream;
use crate::log_sink::LogSink;
use crate::merge_config::MergeConfig;
use crate::record::Record;
use serde::Serialize;
use std::io;
use std::mem;

/// Counts reported by a completed merge run
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MergeSummary {
    pub records_a: usize,
    pub records_b: usize,
    pub records_written: usize,
}

/// Interleaves two record streams into one non-decreasing sequence
///
/// Holds one pending (peeked but not yet emitted) record per stream. Each
/// step emits the earlier pending record and refills that slot from its
/// stream; the run is drained when both slots are empty. Emits exactly
/// `len(a) + len(b)` records, each input record exactly once.
pub struct MergeEngine {
    stream_a: RecordStream,
    stream_b: RecordStream,
    pending_a: Option<Record>,
    pending_b: Option<Record>,
}

impl MergeEngine {
    /// Prime the engine by advancing each stream once
    pub fn new(mut stream_a: RecordStream, mut stream_b: RecordStream) -> Self {
        let pending_a = stream_a.next_record();
        let pending_b = stream_b.next_record();
        Self {
            stream_a,
            stream_b,
            pending_a,
            pending_b,
        }
    }

    /// Run the merge to completion, writing every record to `sink`
    ///
    /// Merging over already-loaded records cannot itself fail; the only
    /// error source is the sink. Returns the number of records written.
    pub fn run(mut self, sink: &mut LogSink) -> io::Result<usize> {
        let mut written = 0;

        loop {
            let emit_b = match (self.pending_a.as_ref(), self.pending_b.as_ref()) {
                // B wins exact ties: emit B whenever A is not strictly earlier
                (Some(a), Some(b)) => !a.is_before(b),
                (None, Some(_)) => true,
                (Some(_), None) => false,
                (None, None) => break,
            };

            let emitted = if emit_b {
                mem::replace(&mut self.pending_b, self.stream_b.next_record())
            } else {
                mem::replace(&mut self.pending_a, self.stream_a.next_record())
            };

            if let Some(record) = emitted {
                sink.write(&record)?;
                written += 1;
            }
        }

        Ok(written)
    }
}

/// Merge the two inputs named by `config` into its output file
///
/// Both streams are loaded in full before the output file is created, so a
/// parse or read failure aborts the run without producing any output. Touches
/// no process-global state beyond the paths in `config`.
pub fn merge_files(config: &MergeConfig) -> Result<MergeSummary, MergeError> {
    let stream_a = RecordStream::load(&config.input_a)?;
    let stream_b = RecordStream::load(&config.input_b)?;

    let records_a = stream_a.len();
    let records_b = stream_b.len();
    tracing::info!(
        records_a,
        records_b,
        "Merging {} records",
        records_a + records_b
    );

    let mut sink =
        LogSink::create(&config.output).map_err(|e| MergeError::output(&config.output, e))?;

    let engine = MergeEngine::new(stream_a, stream_b);
    let records_written = engine
        .run(&mut sink)
        .map_err(|e| MergeError::output(&config.output, e))?;
    sink.finish()
        .map_err(|e| MergeError::output(&config.output, e))?;

    tracing::info!("Saved {} records in \"{}\"", records_written, config.output.display());

    Ok(MergeSummary {
        records_a,
        records_b,
        records_written,
    })
}
