//! Record extraction from the line-oriented activity export
//!
//! The export is a sequence of `Key: Value` blocks, each closed by a line
//! starting with `Adds yours text:`. The extractor turns the raw text into
//! an ordered sequence of flat string-to-string records.

use likegraph_common::RawRecord;
use tracing::debug;

/// Line prefix marking the end of one record's field block
pub const TERMINATOR_PREFIX: &str = "Adds yours text:";

/// Separator between a field name and its value (split at first occurrence)
const KEY_VALUE_SEPARATOR: &str = ": ";

/// Incremental record extractor
///
/// An explicit state machine with one mutable accumulator. Every trimmed
/// non-blank line is first tried as a `Key: Value` assignment into the
/// in-progress record, then independently tested against the terminator
/// prefix, which emits the record and resets the accumulator. Both rules
/// can fire on the same line, in that order; lines matching neither are
/// ignored.
#[derive(Debug, Default)]
pub struct RecordExtractor {
    current: RawRecord,
    records: Vec<RawRecord>,
}

impl RecordExtractor {
    /// Create a new extractor with an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw line into the state machine
    pub fn push_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        if let Some((key, value)) = line.split_once(KEY_VALUE_SEPARATOR) {
            // Last value wins on duplicate keys within one record.
            self.current.insert(key.to_string(), value.to_string());
        }

        if line.starts_with(TERMINATOR_PREFIX) {
            self.records.push(std::mem::take(&mut self.current));
        }
    }

    /// Finish the scan, returning records in terminator order
    ///
    /// A trailing record that never saw a terminator line is discarded,
    /// matching the framing of the source export.
    pub fn finish(self) -> Vec<RawRecord> {
        if !self.current.is_empty() {
            debug!(
                fields = self.current.len(),
                "discarding unterminated trailing record"
            );
        }
        self.records
    }
}

/// Extract every terminated record from a text export
pub fn extract(text: &str) -> Vec<RawRecord> {
    let mut extractor = RecordExtractor::new();
    for line in text.lines() {
        extractor.push_line(line);
    }
    let records = extractor.finish();
    debug!(count = records.len(), "extracted records from export");
    records
}
