//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lane_core::Minute;
use lane_sim::{RegisterLedger, SimObserver, completion};

use crate::row::{QueueEntryRow, RunSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes the final register queues and a run summary
/// to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    cohorts:    u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            cohorts: 0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_cohort_start(&mut self, _arrival: Minute, _customers: usize) {
        self.cohorts += 1;
    }

    fn on_run_end(&mut self, ledger: &RegisterLedger, last_checkout: Minute) {
        let mut customers = 0u64;

        for register in ledger.register_ids() {
            let queue = ledger.queue_of(register);
            let finishes = completion::finish_times(queue);

            let rows: Vec<QueueEntryRow> = queue
                .iter()
                .zip(&finishes)
                .enumerate()
                .map(|(position, (customer, finish))| {
                    let routing = customer.routing();
                    QueueEntryRow {
                        register:         register.0,
                        position:         position as u32,
                        customer_id:      customer.id().0,
                        kind:             customer.kind().as_str(),
                        arrival_minute:   customer.arrival().0,
                        items:            customer.items(),
                        ahead:            routing.ahead,
                        duration_minutes: routing.duration,
                        finish_minute:    finish.0,
                    }
                })
                .collect();

            customers += rows.len() as u64;
            if !rows.is_empty() {
                let result = self.writer.write_queue_entries(&rows);
                self.store_err(result);
            }
        }

        let summary = RunSummaryRow {
            registers: ledger.register_count(),
            customers,
            cohorts: self.cohorts,
            last_checkout_minute: last_checkout.0,
        };
        let result = self.writer.write_summary(&summary);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
