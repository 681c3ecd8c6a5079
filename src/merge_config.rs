//! Resolved paths for one merge run
//!
//! The CLI boundary constructs this; the merge itself depends on nothing
//! but the paths carried here.

use std::path::{Path, PathBuf};

/// Default output file name when the caller gives no output path
pub const DEFAULT_OUTPUT_FILE: &str = "merged.jsonl";

/// Input and output paths for one merge run
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// First input log (stream A)
    pub input_a: PathBuf,
    /// Second input log (stream B)
    pub input_b: PathBuf,
    /// Destination for the merged output
    pub output: PathBuf,
}

impl MergeConfig {
    pub fn new(input_a: PathBuf, input_b: PathBuf, output: PathBuf) -> Self {
        Self {
            input_a,
            input_b,
            output,
        }
    }

    /// Build a config with the output defaulted next to the executable
    pub fn with_default_output(input_a: PathBuf, input_b: PathBuf) -> Self {
        Self::new(input_a, input_b, default_output_path())
    }
}

/// `merged.jsonl` in the directory holding the running executable,
/// falling back to a path relative to the working directory when the
/// executable location cannot be determined.
pub fn default_output_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .map(|dir| dir.join(DEFAULT_OUTPUT_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE))
}
