//! `lane-stream` — the customer arrival stream: ingestion, batching, and
//! sequencing for the `lane` checkout simulator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`arrival`]   | `ArrivalRecord` (kind, minute, items)                   |
//! | [`batcher`]   | `ArrivalBatcher` — same-timestamp cohorts + fresh ids   |
//! | [`sequencer`] | `sequence`, `SubBatch` — cohort ordering for routing    |
//! | [`loader`]    | `load_arrivals_csv`, `load_arrivals_reader`             |
//! | [`generator`] | `generate`, `GeneratorConfig` — seeded synthetic streams|
//! | [`error`]     | `StreamError`, `StreamResult<T>`                        |
//!
//! # Flow (summary)
//!
//! ```text
//! CSV / generator → Vec<ArrivalRecord>           (validated, arrival order)
//! ArrivalBatcher::next_cohort  → Vec<Customer>   (one timestamp, fresh ids)
//! sequence(cohort)             → Vec<SubBatch>   (ascending items; per run:
//!                                                 kind A, then kind B)
//! ```
//!
//! The routing engine consumes sub-batches as units: register capacity is
//! reclaimed once per sub-batch, so the split produced here is part of the
//! simulation's semantics, not mere presentation.

pub mod arrival;
pub mod batcher;
pub mod error;
pub mod generator;
pub mod loader;
pub mod sequencer;

#[cfg(test)]
mod tests;

pub use arrival::ArrivalRecord;
pub use batcher::ArrivalBatcher;
pub use error::{StreamError, StreamResult};
pub use generator::{GeneratorConfig, generate};
pub use loader::{load_arrivals_csv, load_arrivals_reader};
pub use sequencer::{SubBatch, sequence};
