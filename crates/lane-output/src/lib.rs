//! `lane-output` — run diagnostics writers for the `lane` checkout simulator.
//!
//! The CSV backend creates two files in the configured output directory:
//!
//! | File                  | Contents                                        |
//! |-----------------------|-------------------------------------------------|
//! | `register_queues.csv` | one row per enqueued customer, per register     |
//! | `run_summary.csv`     | one row per run (registers, customers, result)  |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `lane_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lane_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{QueueEntryRow, RunSummaryRow};
pub use writer::OutputWriter;
