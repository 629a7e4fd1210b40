//! The `Sim` struct and its cohort loop.

use lane_core::{Customer, Minute, SimConfig};
use lane_stream::{ArrivalBatcher, ArrivalRecord, sequence};

use crate::{NoopObserver, RegisterLedger, SimError, SimObserver, SimResult, completion, policy};

/// The simulation driver.
///
/// One `Sim` runs one customer stream to exhaustion:
///
/// 1. **Batch** — pull the next same-timestamp cohort from the stream.
/// 2. **Sequence** — order it (ascending items; kind A before kind B; arrival
///    order within a kind) and split it into sub-batches per equal-items run.
/// 3. **Reclaim** — once per sub-batch, before its first assignment, release
///    register capacity finished by the sub-batch's timestamp.
/// 4. **Route** — per customer, pick a register under its kind's policy and
///    assign it; later customers in the sub-batch see the updated loads.
/// 5. **Complete** — after exhaustion, walk every register's FIFO for the
///    final checkout minute.
///
/// The run is single-threaded and fully deterministic: identical
/// configuration and stream produce identical assignments and result.
pub struct Sim {
    config:  SimConfig,
    batcher: ArrivalBatcher,
    ledger:  RegisterLedger,
    cohorts: u64,
}

impl Sim {
    /// Validate `config` and wrap an ordered arrival stream.
    ///
    /// A zero register count is a configuration error, reported before any
    /// simulation work starts.
    pub fn new(config: SimConfig, records: Vec<ArrivalRecord>) -> SimResult<Self> {
        if config.registers == 0 {
            return Err(SimError::Config(
                "register count must be at least 1".to_string(),
            ));
        }
        let ledger = RegisterLedger::new(config.registers);
        Ok(Self {
            config,
            batcher: ArrivalBatcher::new(records),
            ledger,
            cohorts: 0,
        })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run the stream to exhaustion and return the last checkout minute.
    ///
    /// Calls observer hooks per cohort, per assignment, and once at the end
    /// of the run.  Use [`NoopObserver`] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> Minute {
        while let Some(cohort) = self.batcher.next_cohort() {
            self.cohorts += 1;
            // cohorts are non-empty by the batcher contract
            let arrival = cohort[0].arrival();
            observer.on_cohort_start(arrival, cohort.len());
            self.process_cohort(cohort, observer);
        }

        let last = completion::last_checkout(&self.ledger);
        observer.on_run_end(&self.ledger, last);
        last
    }

    /// Convenience wrapper for runs that don't need callbacks.
    pub fn run_to_completion(&mut self) -> Minute {
        self.run(&mut NoopObserver)
    }

    // ── Core cohort processing ────────────────────────────────────────────

    fn process_cohort<O: SimObserver>(&mut self, cohort: Vec<Customer>, observer: &mut O) {
        for sub_batch in sequence(cohort) {
            // ── Reclaim once per sub-batch, before any assignment ─────────
            self.ledger.reclaim(sub_batch.arrival);

            for customer in sub_batch.into_customers() {
                let register = policy::route(&self.ledger, customer.kind());
                let duration =
                    policy::processing_duration(&self.ledger, register, customer.items());
                let assigned = self.ledger.assign(customer, register, duration);
                observer.on_assign(assigned);
            }
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The register state — final once [`run`][Self::run] has returned.
    pub fn ledger(&self) -> &RegisterLedger {
        &self.ledger
    }

    /// Cohorts pulled from the stream so far.
    pub fn cohorts(&self) -> u64 {
        self.cohorts
    }
}
