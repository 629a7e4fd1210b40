//! `lane-sim` — the routing engine for the `lane` checkout simulator.
//!
//! # Cohort loop
//!
//! ```text
//! while the stream has customers:
//!   ① Batch     — pull the next same-timestamp cohort.
//!   ② Sequence  — ascending item count; per equal-items run, kind A then
//!                 kind B, each as one sub-batch.
//!   ③ Reclaim   — once per sub-batch, release register capacity finished
//!                 by the sub-batch's timestamp (head-of-line only).
//!   ④ Route     — per customer: kind A takes the shortest line, kind B an
//!                 empty line or the lightest tail; assign immediately so
//!                 the next customer sees the updated load.
//! then:
//!   ⑤ Complete  — walk every register's FIFO for the last checkout minute.
//! ```
//!
//! The whole run is one deterministic, single-threaded pass: no clocks, no
//! randomness, no suspension points.  Identical configuration and stream
//! always produce identical assignments and the same final minute.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lane_core::SimConfig;
//! use lane_sim::{NoopObserver, Sim};
//! use lane_stream::load_arrivals_csv;
//!
//! let records = load_arrivals_csv(Path::new("arrivals.csv"))?;
//! let mut sim = Sim::new(SimConfig::new(4), records)?;
//! let last = sim.run(&mut NoopObserver);
//! println!("last customer checks out at {last}");
//! ```

pub mod completion;
pub mod error;
pub mod ledger;
pub mod observer;
pub mod policy;
pub mod sim;


pub use error::{SimError, SimResult};
pub use ledger::RegisterLedger;
pub use observer::{NoopObserver, SimObserver};
pub use policy::{processing_duration, route};
pub use sim::Sim;
