//! Run summary and statistics for conversion operations

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// One file that failed to convert, kept for reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedFile {
    /// Source file the failure relates to
    pub path: PathBuf,
    /// Human-readable error description
    pub error: String,
}

/// Summary of a whole conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionSummary {
    /// Number of files converted successfully
    pub converted: usize,
    /// Files that failed to read or write
    pub failed: Vec<FailedFile>,
    /// Total bytes copied into target files
    pub bytes_copied: u64,
    /// Wall-clock processing time in milliseconds
    pub elapsed_ms: u64,
    /// Timestamp of when the run finished
    pub finished_at: chrono::DateTime<chrono::Utc>,
}

impl Default for ConversionSummary {
    fn default() -> Self {
        Self {
            converted: 0,
            failed: Vec::new(),
            bytes_copied: 0,
            elapsed_ms: 0,
            finished_at: chrono::Utc::now(),
        }
    }
}

impl ConversionSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one successful conversion
    pub fn record_converted(&mut self, bytes: u64) {
        self.converted += 1;
        self.bytes_copied += bytes;
    }

    /// Record one skipped failure
    pub fn record_failed(&mut self, path: PathBuf, error: String) {
        self.failed.push(FailedFile { path, error });
    }

    /// Stamp elapsed time and completion timestamp
    pub fn finish(&mut self, elapsed: Duration) {
        self.elapsed_ms = elapsed.as_millis() as u64;
        self.finished_at = chrono::Utc::now();
    }

    /// True when no file failed to convert
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total number of source files the run attempted
    pub fn attempted(&self) -> usize {
        self.converted + self.failed.len()
    }
}
