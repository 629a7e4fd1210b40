//! Intra-cohort sequencing: sort a cohort and split it into routing
//! sub-batches.
//!
//! # Ordering
//!
//! A cohort is routed in ascending item-count order; among customers with the
//! same item count, kind-A customers route before kind-B customers; within
//! the same kind, earlier arrivals (smaller ids) route first.  The sort key
//! `(items, id)` realises all three rules at once — ids ascend in stream
//! order within a cohort — and makes the in-place quicksort fully
//! deterministic despite its instability.
//!
//! # Sub-batches
//!
//! The sorted cohort is emitted as maximal runs of equal item count; each run
//! contributes an all-A sub-batch followed by an all-B sub-batch (either may
//! be absent).  Sub-batches matter to the engine: register capacity is
//! reclaimed once per sub-batch, not once per customer, so splitting the runs
//! differently would change routing outcomes.

use lane_core::{Customer, CustomerKind, Minute};

// ── SubBatch ──────────────────────────────────────────────────────────────────

/// A same-timestamp, same-kind slice of a cohort, routed as a unit.
#[derive(Clone, Debug)]
pub struct SubBatch {
    /// The cohort's common arrival timestamp.
    pub arrival: Minute,

    /// The kind every member shares.
    pub kind: CustomerKind,

    customers: Vec<Customer>,
}

impl SubBatch {
    fn new(arrival: Minute, kind: CustomerKind, customers: Vec<Customer>) -> Self {
        debug_assert!(
            customers.iter().all(|c| c.arrival() == arrival),
            "sub-batches never mix arrival timestamps"
        );
        debug_assert!(
            customers.iter().all(|c| c.kind() == kind),
            "sub-batches never mix customer kinds"
        );
        Self {
            arrival,
            kind,
            customers,
        }
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Members in routing order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Consume the sub-batch, yielding members in routing order.
    pub fn into_customers(self) -> Vec<Customer> {
        self.customers
    }
}

// ── Sequencing ────────────────────────────────────────────────────────────────

/// Order `cohort` and split it into routing sub-batches.
///
/// Returns an empty vec for an empty cohort.
pub fn sequence(mut cohort: Vec<Customer>) -> Vec<SubBatch> {
    if cohort.is_empty() {
        return Vec::new();
    }
    let last = cohort.len() - 1;
    sort_range(&mut cohort, 0, last);

    let arrival = cohort[0].arrival();
    let mut batches = Vec::new();
    let mut run_a: Vec<Customer> = Vec::new();
    let mut run_b: Vec<Customer> = Vec::new();
    let mut run_items: Option<u32> = None;

    for customer in cohort {
        if run_items != Some(customer.items()) {
            flush_run(&mut batches, arrival, &mut run_a, &mut run_b);
            run_items = Some(customer.items());
        }
        match customer.kind() {
            CustomerKind::A => run_a.push(customer),
            CustomerKind::B => run_b.push(customer),
        }
    }
    flush_run(&mut batches, arrival, &mut run_a, &mut run_b);
    batches
}

/// Emit the pending run's A sub-batch, then its B sub-batch.
fn flush_run(
    batches: &mut Vec<SubBatch>,
    arrival: Minute,
    run_a:   &mut Vec<Customer>,
    run_b:   &mut Vec<Customer>,
) {
    if !run_a.is_empty() {
        batches.push(SubBatch::new(arrival, CustomerKind::A, std::mem::take(run_a)));
    }
    if !run_b.is_empty() {
        batches.push(SubBatch::new(arrival, CustomerKind::B, std::mem::take(run_b)));
    }
}

// ── Quicksort ─────────────────────────────────────────────────────────────────

/// Sort key: item count first, then id (= arrival order within a cohort).
#[inline]
fn key(c: &Customer) -> (u32, u64) {
    (c.items(), c.id().0)
}

/// Recursive in-place quicksort over the inclusive range `[start, end]`.
///
/// Pivot is the middle of the range; average O(n log n), worst O(n²) on
/// adversarial inputs.  Cohorts are small relative to the whole stream, so
/// the worst case is not a concern.
fn sort_range(xs: &mut [Customer], start: usize, end: usize) {
    if start >= end {
        return;
    }
    let mid = start + (end - start) / 2;
    let pivot = partition(xs, start, end, mid);
    if pivot > start {
        sort_range(xs, start, pivot - 1);
    }
    if pivot < end {
        sort_range(xs, pivot + 1, end);
    }
}

/// Lomuto partition: park the pivot at `end`, sweep smaller keys to the
/// front, then restore the pivot at its final position and return it.
fn partition(xs: &mut [Customer], start: usize, end: usize, pivot_idx: usize) -> usize {
    let pivot = key(&xs[pivot_idx]);
    xs.swap(pivot_idx, end);
    let mut store = start;
    for i in start..end {
        if key(&xs[i]) < pivot {
            xs.swap(i, store);
            store += 1;
        }
    }
    xs.swap(store, end);
    store
}
