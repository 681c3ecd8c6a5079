//! Common test utilities and helpers

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write a JSONL file with the given lines into `dir`
pub fn write_jsonl(dir: &Path, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut file = BufWriter::new(File::create(&path).expect("Failed to create fixture file"));

    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write fixture line");
    }

    file.flush().expect("Failed to flush fixture file");
    path
}

/// Build one log line with a `timestamp`, a `source` tag, and a sequence number
pub fn log_line(timestamp: &str, source: &str, seq: usize) -> String {
    format!(
        r#"{{"timestamp":"{}","source":"{}","seq":{}}}"#,
        timestamp, source, seq
    )
}

/// Read an output file back as parsed JSON values, one per line
#[allow(dead_code)]
pub fn read_json_lines(path: &Path) -> Vec<serde_json::Value> {
    std::fs::read_to_string(path)
        .expect("Failed to read output file")
        .lines()
        .map(|line| serde_json::from_str(line).expect("Output line is not valid JSON"))
        .collect()
}

/// Extract the `timestamp` field of every output line, in file order
#[allow(dead_code)]
pub fn output_timestamps(path: &Path) -> Vec<String> {
    read_json_lines(path)
        .iter()
        .map(|value| value["timestamp"].as_str().unwrap().to_string())
        .collect()
}
