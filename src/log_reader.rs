//! Eager loading of one JSONL input into an ordered record stream

use crate::error::MergeError;
use crate::record::Record;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One input source's full ordered sequence of records
///
/// The file is read and parsed in full at construction; the stream is then
/// consumed through an owning cursor. The underlying sequence is assumed
/// pre-sorted ascending by timestamp by whatever produced the file — the
/// merge does not verify this.
#[derive(Debug)]
pub struct RecordStream {
    records: std::vec::IntoIter<Record>,
}

impl RecordStream {
    /// Load every line of the file at `path`, parsing each into a [`Record`]
    ///
    /// Fails on the first malformed line with path and 1-based line number
    /// context — there is no skip-and-continue. Fails with an I/O error if
    /// the path cannot be opened or read.
    pub fn load(path: &Path) -> Result<Self, MergeError> {
        tracing::info!("Loading \"{}\"", path.display());

        let file = File::open(path).map_err(|e| MergeError::input(path, e))?;
        let reader = BufReader::new(file);

        let mut records = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| MergeError::input(path, e))?;
            let record =
                Record::parse(&line).map_err(|e| MergeError::malformed(path, index + 1, e))?;
            records.push(record);
        }

        Ok(Self::from_records(records))
    }

    /// Build a stream from already-parsed records
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records: records.into_iter(),
        }
    }

    /// Return the next record and advance the cursor
    ///
    /// `None` signals exhaustion: a terminal, permanent state. Calling
    /// again on an exhausted stream keeps returning `None`.
    pub fn next_record(&mut self) -> Option<Record> {
        self.records.next()
    }

    /// Number of records not yet consumed
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.len() == 0
    }
}
