//! `lane-core` — foundational types for the `lane` checkout simulator.
//!
//! This crate is a dependency of every other `lane-*` crate.  It intentionally
//! has no `lane-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`ids`]      | `CustomerId`, `RegisterId`, `CustomerIds`         |
//! | [`time`]     | `Minute`                                          |
//! | [`customer`] | `CustomerKind`, `Assignment`, `Customer`          |
//! | [`config`]   | `SimConfig`                                       |
//! | [`rng`]      | `SimRng` (seeded, for synthetic streams)          |
//! | [`error`]    | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod customer;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use customer::{Assignment, Customer, CustomerKind};
pub use error::{CoreError, CoreResult};
pub use ids::{CustomerId, CustomerIds, RegisterId};
pub use rng::SimRng;
pub use time::Minute;
