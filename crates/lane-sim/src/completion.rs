//! Completion calculation — a pure, read-only pass over the final ledger.
//!
//! Runs once, after every customer has been assigned.  Reclamation state is
//! irrelevant here: the walk covers each register's full enqueue history.

use lane_core::{Customer, Minute};

use crate::RegisterLedger;

/// Finish time of every customer in one register's queue, in enqueue order.
///
/// The first customer finishes at `arrival + duration`; each later customer
/// starts at `max(own arrival, previous finish)` — it can start neither
/// before arriving nor before the register frees up.  The returned times are
/// therefore non-decreasing.
pub fn finish_times(queue: &[Customer]) -> Vec<Minute> {
    let mut finishes = Vec::with_capacity(queue.len());
    let mut register_free = Minute::ZERO;

    for customer in queue {
        let start = customer.arrival().max(register_free);
        register_free = start + customer.routing().duration;
        finishes.push(register_free);
    }
    finishes
}

/// The minute the last customer anywhere finishes checkout.
///
/// `Minute::ZERO` for a run with no customers.
pub fn last_checkout(ledger: &RegisterLedger) -> Minute {
    ledger
        .register_ids()
        .filter_map(|r| finish_times(ledger.queue_of(r)).last().copied())
        .max()
        .unwrap_or(Minute::ZERO)
}
