//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, QueueEntryRow, RunSummaryRow};

/// Trait implemented by diagnostics writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of final queue entries.
    fn write_queue_entries(&mut self, rows: &[QueueEntryRow]) -> OutputResult<()>;

    /// Write the whole-run summary row.
    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
