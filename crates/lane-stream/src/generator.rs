//! Synthetic arrival stream generation.
//!
//! All generation is deterministic: the same [`GeneratorConfig`] and the same
//! seed always produce the same stream.  Timestamps are emitted
//! non-decreasing, which is the ordering precondition the batcher relies on.

use lane_core::{CustomerKind, Minute, SimRng};

use crate::ArrivalRecord;

/// Parameters for one synthetic stream.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct GeneratorConfig {
    /// Total customers to generate.
    pub customers: usize,

    /// Probability that a customer is kind `A` (the rest are kind `B`).
    pub kind_a_share: f64,

    /// Inclusive item-count range `(min, max)`, with `min ≥ 1`.
    pub items: (u32, u32),

    /// Maximum gap between consecutive arrivals, in minutes.  `0` makes the
    /// whole stream arrive at once; larger values thin the cohorts out.
    pub max_gap_minutes: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            customers:       100,
            kind_a_share:    0.5,
            items:           (1, 12),
            max_gap_minutes: 3,
        }
    }
}

/// Generate a synthetic arrival stream.
///
/// # Panics
/// Panics in debug mode on an empty or zero-based item range.
pub fn generate(config: &GeneratorConfig, rng: &mut SimRng) -> Vec<ArrivalRecord> {
    let (min_items, max_items) = config.items;
    debug_assert!(
        min_items >= 1 && min_items <= max_items,
        "item range must be positive and ordered"
    );

    let mut records = Vec::with_capacity(config.customers);
    let mut arrival = Minute::ZERO;

    for _ in 0..config.customers {
        let kind = if rng.gen_bool(config.kind_a_share) {
            CustomerKind::A
        } else {
            CustomerKind::B
        };
        records.push(ArrivalRecord::new(
            kind,
            arrival,
            rng.gen_range(min_items..=max_items),
        ));

        if config.max_gap_minutes > 0 {
            arrival = arrival + rng.gen_range(0..=config.max_gap_minutes);
        }
    }
    records
}
