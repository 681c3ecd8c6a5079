//! Buffered JSONL output writer

use crate::record::Record;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes merged records to the output file, one JSON line per record
///
/// The order of [`write`](LogSink::write) calls determines the final file
/// order exactly. The buffered writer flushes on drop, so the handle is
/// released on every exit path; [`finish`](LogSink::finish) surfaces flush
/// errors on the success path.
pub struct LogSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl LogSink {
    /// Create (or truncate) the output file at `path`
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;

        // 8KB buffer size for OS-level write coalescing
        let writer = BufWriter::with_capacity(8192, file);

        Ok(Self {
            path: path.to_path_buf(),
            writer,
        })
    }

    /// Serialize one record and append it followed by a newline
    pub fn write(&mut self, record: &Record) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, record)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        self.writer.write_all(b"\n")
    }

    /// Flush and close the output file
    pub fn finish(mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// The output file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}
