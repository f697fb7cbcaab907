//! Record Writer
//!
//! Append-only JSONL logging of snapshots and step records.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use balloon_events::Record;

/// Writes one JSON record per line
pub struct RecordWriter {
    writer: Option<BufWriter<File>>,
    record_count: u64,
}

impl RecordWriter {
    /// Create a writer that truncates and writes to `path`
    pub fn new(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
            record_count: 0,
        })
    }

    /// Create a writer that only counts records
    pub fn null() -> Self {
        Self {
            writer: None,
            record_count: 0,
        }
    }

    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    pub fn log(&mut self, record: &Record) -> std::io::Result<()> {
        self.record_count += 1;
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(record)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for RecordWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
