//! Run observer trait for progress reporting and diagnostics collection.

use lane_core::{Customer, Minute};

use crate::RegisterLedger;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// cohort loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_cohort_start(&mut self, arrival: Minute, customers: usize) {
///         println!("{arrival}: {customers} customers walk in");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called when a cohort is pulled from the stream, before any routing.
    fn on_cohort_start(&mut self, _arrival: Minute, _customers: usize) {}

    /// Called after each customer is assigned; its routing fields are set.
    fn on_assign(&mut self, _customer: &Customer) {}

    /// Called once after the stream is exhausted, with the final ledger and
    /// the overall completion minute.  Output backends read the per-register
    /// FIFO contents from here.
    fn on_run_end(&mut self, _ledger: &RegisterLedger, _last_checkout: Minute) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
