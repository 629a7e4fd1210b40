//! `ArrivalBatcher` — groups the arrival stream into same-timestamp cohorts.
//!
//! # Why this exists
//!
//! Routing decisions depend on who shows up *together*: everyone arriving at
//! the same minute is ordered and routed as one cohort before the stream
//! advances.  Each call to [`ArrivalBatcher::next_cohort`] consumes every
//! pending record that shares the first pending record's timestamp and
//! returns them as customers, in stream order, with freshly allocated ids.
//!
//! The batcher owns the run's [`CustomerIds`] generator, so ids are scoped to
//! one run and two identical runs produce identical ids.
//!
//! Timestamps are expected to be non-decreasing across cohorts — the loader
//! and generator both guarantee it.  The batcher takes the stream as given
//! and neither reorders nor rejects out-of-order input; enforcing order here
//! would mask a defect in the upstream layer.

use std::collections::VecDeque;

use lane_core::{Customer, CustomerIds};

use crate::ArrivalRecord;

/// Consumes an ordered arrival stream, one cohort at a time.
pub struct ArrivalBatcher {
    pending: VecDeque<ArrivalRecord>,
    ids:     CustomerIds,
}

impl ArrivalBatcher {
    /// Wrap an ordered record stream with a fresh id generator.
    pub fn new(records: Vec<ArrivalRecord>) -> Self {
        Self {
            pending: records.into(),
            ids:     CustomerIds::new(),
        }
    }

    /// All customers arriving at the next pending timestamp, in stream order.
    ///
    /// Returns `None` once the stream is exhausted.  A returned cohort is
    /// never empty.
    pub fn next_cohort(&mut self) -> Option<Vec<Customer>> {
        let stamp = self.pending.front()?.arrival;

        let mut cohort = Vec::new();
        while self.pending.front().map(|r| r.arrival) == Some(stamp) {
            // front() just matched, so pop_front() cannot come up empty
            if let Some(record) = self.pending.pop_front() {
                cohort.push(Customer::new(
                    self.ids.next_id(),
                    record.kind,
                    record.items,
                    record.arrival,
                ));
            }
        }
        Some(cohort)
    }

    /// Records not yet handed out as cohorts.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }

    /// Customers batched so far.
    pub fn batched(&self) -> u64 {
        self.ids.allocated()
    }
}
