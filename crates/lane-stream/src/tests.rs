//! Unit tests for lane-stream.

use lane_core::{Customer, CustomerId, CustomerKind, Minute};

use crate::{ArrivalBatcher, ArrivalRecord, GeneratorConfig, sequence};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn rec(kind: CustomerKind, arrival: u32, items: u32) -> ArrivalRecord {
    ArrivalRecord::new(kind, Minute(arrival), items)
}

fn customer(id: u64, kind: CustomerKind, items: u32, arrival: u32) -> Customer {
    Customer::new(CustomerId(id), kind, items, Minute(arrival))
}

use CustomerKind::{A, B};

// ── ArrivalBatcher ────────────────────────────────────────────────────────────

#[cfg(test)]
mod batcher {
    use super::*;

    #[test]
    fn groups_same_timestamp() {
        let mut batcher = ArrivalBatcher::new(vec![
            rec(A, 0, 2),
            rec(B, 0, 5),
            rec(A, 3, 1),
        ]);

        let first = batcher.next_cohort().unwrap();
        assert_eq!(first.len(), 2);
        assert!(first.iter().all(|c| c.arrival() == Minute(0)));

        let second = batcher.next_cohort().unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].arrival(), Minute(3));

        assert!(batcher.next_cohort().is_none());
        assert!(batcher.is_exhausted());
    }

    #[test]
    fn ids_follow_stream_order() {
        let mut batcher = ArrivalBatcher::new(vec![
            rec(B, 0, 5),
            rec(A, 0, 2),
            rec(A, 1, 1),
        ]);

        let first = batcher.next_cohort().unwrap();
        assert_eq!(first[0].id(), CustomerId(0));
        assert_eq!(first[0].kind(), B);
        assert_eq!(first[1].id(), CustomerId(1));

        let second = batcher.next_cohort().unwrap();
        assert_eq!(second[0].id(), CustomerId(2));
        assert_eq!(batcher.batched(), 3);
    }

    #[test]
    fn record_fields_carried_over() {
        let mut batcher = ArrivalBatcher::new(vec![rec(B, 7, 9)]);
        let cohort = batcher.next_cohort().unwrap();
        assert_eq!(cohort[0].kind(), B);
        assert_eq!(cohort[0].arrival(), Minute(7));
        assert_eq!(cohort[0].items(), 9);
        assert!(cohort[0].assignment().is_none());
    }

    #[test]
    fn empty_stream_is_exhausted_immediately() {
        let mut batcher = ArrivalBatcher::new(vec![]);
        assert!(batcher.next_cohort().is_none());
        assert_eq!(batcher.remaining(), 0);
    }

    #[test]
    fn out_of_order_cohorts_taken_as_given() {
        // Cross-cohort ordering is an upstream precondition, not enforced
        // here: a later-then-earlier stream yields two cohorts, as given.
        let mut batcher = ArrivalBatcher::new(vec![
            rec(A, 5, 1),
            rec(A, 5, 2),
            rec(A, 2, 3),
        ]);
        assert_eq!(batcher.next_cohort().unwrap().len(), 2);
        let late = batcher.next_cohort().unwrap();
        assert_eq!(late[0].arrival(), Minute(2));
    }

    #[test]
    fn separate_batchers_hand_out_identical_ids() {
        let records = vec![rec(A, 0, 1), rec(B, 0, 2)];
        let mut left = ArrivalBatcher::new(records.clone());
        let mut right = ArrivalBatcher::new(records);
        let left_ids: Vec<_> = left.next_cohort().unwrap().iter().map(Customer::id).collect();
        let right_ids: Vec<_> = right.next_cohort().unwrap().iter().map(Customer::id).collect();
        assert_eq!(left_ids, right_ids);
    }
}

// ── Sequencer ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sequencer {
    use super::*;

    /// Flatten sub-batches back into one routing-order customer list.
    fn routing_order(cohort: Vec<Customer>) -> Vec<Customer> {
        sequence(cohort)
            .into_iter()
            .flat_map(|sb| sb.into_customers())
            .collect()
    }

    #[test]
    fn empty_cohort_yields_no_batches() {
        assert!(sequence(vec![]).is_empty());
    }

    #[test]
    fn single_customer_single_batch() {
        let batches = sequence(vec![customer(0, A, 4, 2)]);
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].kind, A);
        assert_eq!(batches[0].arrival, Minute(2));
        assert_eq!(batches[0].len(), 1);
    }

    #[test]
    fn ascending_item_count_is_primary() {
        let ordered = routing_order(vec![
            customer(0, A, 9, 0),
            customer(1, A, 1, 0),
            customer(2, A, 4, 0),
        ]);
        let items: Vec<u32> = ordered.iter().map(Customer::items).collect();
        assert_eq!(items, vec![1, 4, 9]);
    }

    #[test]
    fn kind_a_routes_before_kind_b_within_run() {
        let batches = sequence(vec![
            customer(0, B, 3, 0),
            customer(1, A, 3, 0),
            customer(2, B, 3, 0),
            customer(3, A, 3, 0),
        ]);
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].kind, A);
        assert_eq!(batches[0].len(), 2);
        assert_eq!(batches[1].kind, B);
        assert_eq!(batches[1].len(), 2);
    }

    #[test]
    fn arrival_order_breaks_ties_within_kind() {
        // Same kind, same item count: earlier arrivals (smaller ids) first.
        let batches = sequence(vec![
            customer(5, A, 2, 0),
            customer(3, A, 2, 0),
            customer(8, A, 2, 0),
        ]);
        let ids: Vec<u64> = batches[0].customers().iter().map(|c| c.id().0).collect();
        assert_eq!(ids, vec![3, 5, 8]);
    }

    #[test]
    fn runs_split_on_item_count() {
        let batches = sequence(vec![
            customer(0, A, 1, 0),
            customer(1, B, 1, 0),
            customer(2, A, 2, 0),
            customer(3, B, 2, 0),
        ]);
        let shape: Vec<(CustomerKind, u32)> = batches
            .iter()
            .map(|sb| (sb.kind, sb.customers()[0].items()))
            .collect();
        assert_eq!(shape, vec![(A, 1), (B, 1), (A, 2), (B, 2)]);
    }

    #[test]
    fn absent_kind_produces_no_empty_batch() {
        let batches = sequence(vec![
            customer(0, B, 1, 0),
            customer(1, B, 2, 0),
        ]);
        assert_eq!(batches.len(), 2);
        assert!(batches.iter().all(|sb| sb.kind == B && !sb.is_empty()));
    }

    #[test]
    fn quicksort_handles_adverse_orderings() {
        // Reverse-sorted, then already-sorted, then all-equal inputs.
        for build in [
            (0..40).rev().collect::<Vec<u32>>(),
            (0..40).collect(),
            vec![7; 40],
        ] {
            let cohort: Vec<Customer> = build
                .iter()
                .enumerate()
                .map(|(i, &items)| customer(i as u64, A, items + 1, 0))
                .collect();
            let ordered = routing_order(cohort);
            assert!(
                ordered
                    .windows(2)
                    .all(|w| (w[0].items(), w[0].id()) <= (w[1].items(), w[1].id()))
            );
        }
    }

    #[test]
    #[should_panic(expected = "mix arrival timestamps")]
    fn mixed_timestamps_in_one_cohort_panic() {
        // The batcher never produces this; a mixed cohort is a defect.
        let _ = sequence(vec![customer(0, A, 1, 0), customer(1, A, 1, 5)]);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::load_arrivals_reader;

    use super::*;

    const CSV: &[u8] = b"\
kind,arrival_minute,items\n\
A,0,3\n\
B,0,1\n\
A,2,5\n\
";

    #[test]
    fn loads_records_in_file_order() {
        let records = load_arrivals_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], rec(A, 0, 3));
        assert_eq!(records[1], rec(B, 0, 1));
        assert_eq!(records[2], rec(A, 2, 5));
    }

    #[test]
    fn header_only_file_is_empty() {
        let records =
            load_arrivals_reader(Cursor::new(b"kind,arrival_minute,items\n".as_slice())).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn rejects_unknown_kind() {
        let bad = b"kind,arrival_minute,items\nC,0,3\n";
        let result = load_arrivals_reader(Cursor::new(bad.as_slice()));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_zero_items() {
        let bad = b"kind,arrival_minute,items\nA,0,0\n";
        let result = load_arrivals_reader(Cursor::new(bad.as_slice()));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_numeric_minute() {
        let bad = b"kind,arrival_minute,items\nA,soon,3\n";
        let result = load_arrivals_reader(Cursor::new(bad.as_slice()));
        assert!(result.is_err());
    }
}

// ── Generator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generator {
    use lane_core::SimRng;

    use crate::generate;

    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let config = GeneratorConfig::default();
        let left = generate(&config, &mut SimRng::new(42));
        let right = generate(&config, &mut SimRng::new(42));
        assert_eq!(left, right);
    }

    #[test]
    fn different_seed_different_stream() {
        let config = GeneratorConfig::default();
        let left = generate(&config, &mut SimRng::new(1));
        let right = generate(&config, &mut SimRng::new(2));
        assert_ne!(left, right);
    }

    #[test]
    fn arrivals_are_non_decreasing() {
        let config = GeneratorConfig {
            customers: 500,
            ..GeneratorConfig::default()
        };
        let records = generate(&config, &mut SimRng::new(7));
        assert_eq!(records.len(), 500);
        assert!(records.windows(2).all(|w| w[0].arrival <= w[1].arrival));
    }

    #[test]
    fn item_counts_stay_in_range() {
        let config = GeneratorConfig {
            customers: 200,
            items: (2, 6),
            ..GeneratorConfig::default()
        };
        let records = generate(&config, &mut SimRng::new(7));
        assert!(records.iter().all(|r| (2..=6).contains(&r.items)));
    }

    #[test]
    fn zero_gap_is_one_big_cohort() {
        let config = GeneratorConfig {
            customers: 50,
            max_gap_minutes: 0,
            ..GeneratorConfig::default()
        };
        let records = generate(&config, &mut SimRng::new(7));
        assert!(records.iter().all(|r| r.arrival == Minute(0)));
    }

    #[test]
    fn kind_share_extremes() {
        let all_a = GeneratorConfig {
            customers: 50,
            kind_a_share: 1.0,
            ..GeneratorConfig::default()
        };
        assert!(
            generate(&all_a, &mut SimRng::new(7))
                .iter()
                .all(|r| r.kind == A)
        );

        let all_b = GeneratorConfig {
            customers: 50,
            kind_a_share: 0.0,
            ..GeneratorConfig::default()
        };
        assert!(
            generate(&all_b, &mut SimRng::new(7))
                .iter()
                .all(|r| r.kind == B)
        );
    }
}
