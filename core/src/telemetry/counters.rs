//! telemetry/counters.rs
//! Mutable counters collected by the asset facade.
//!
//! Summary: Counts files and bytes moved through the codecs.
//! Converted into an immutable TelemetrySnapshot on request.
use serde::{Serialize, Deserialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub files_read: u64,
    pub files_written: u64,
    pub bytes_read: u64,
    pub bytes_written: u64,
    pub failures: u64,
}

impl TelemetryCounters {
    /// Record one decoded file of `len` bytes (length is preserved by every codec).
    pub fn add_read(&mut self, len: usize) {
        self.files_read += 1;
        self.bytes_read += len as u64;
    }

    /// Record one encoded file of `len` bytes.
    pub fn add_write(&mut self, len: usize) {
        self.files_written += 1;
        self.bytes_written += len as u64;
    }

    pub fn add_failure(&mut self) {
        self.failures += 1;
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.files_read += other.files_read;
        self.files_written += other.files_written;
        self.bytes_read += other.bytes_read;
        self.bytes_written += other.bytes_written;
        self.failures += other.failures;
    }
}
