//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `register_queues.csv`
//! - `run_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, QueueEntryRow, RunSummaryRow};

/// Writes run diagnostics to two CSV files.
pub struct CsvWriter {
    queues:   Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut queues = Writer::from_path(dir.join("register_queues.csv"))?;
        queues.write_record([
            "register",
            "position",
            "customer_id",
            "kind",
            "arrival_minute",
            "items",
            "ahead",
            "duration_minutes",
            "finish_minute",
        ])?;

        let mut summary = Writer::from_path(dir.join("run_summary.csv"))?;
        summary.write_record(["registers", "customers", "cohorts", "last_checkout_minute"])?;

        Ok(Self {
            queues,
            summary,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_queue_entries(&mut self, rows: &[QueueEntryRow]) -> OutputResult<()> {
        for row in rows {
            self.queues.write_record(&[
                row.register.to_string(),
                row.position.to_string(),
                row.customer_id.to_string(),
                row.kind.to_string(),
                row.arrival_minute.to_string(),
                row.items.to_string(),
                row.ahead.to_string(),
                row.duration_minutes.to_string(),
                row.finish_minute.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.registers.to_string(),
            row.customers.to_string(),
            row.cohorts.to_string(),
            row.last_checkout_minute.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.queues.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
