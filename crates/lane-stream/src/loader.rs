//! CSV arrival loader.
//!
//! # CSV format
//!
//! One row per arrival, in arrival order (the simulation takes the stream in
//! file order):
//!
//! ```csv
//! kind,arrival_minute,items
//! A,0,3
//! B,0,1
//! A,2,5
//! ```
//!
//! | Column           | Meaning                              |
//! |------------------|--------------------------------------|
//! | `kind`           | `A` or `B`                           |
//! | `arrival_minute` | non-negative integer minute          |
//! | `items`          | positive item count                  |
//!
//! Malformed rows — unknown kind, zero items, unparseable numbers — are
//! rejected here with [`StreamError::Parse`].  The simulation core only ever
//! sees validated records; this boundary is where format errors stop.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lane_core::{CoreError, CustomerKind, Minute};

use crate::{ArrivalRecord, StreamError};

// ── CSV row ───────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ArrivalRow {
    kind:           String,
    arrival_minute: u32,
    items:          u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load arrival records from a CSV file.
pub fn load_arrivals_csv(path: &Path) -> Result<Vec<ArrivalRecord>, StreamError> {
    let file = std::fs::File::open(path).map_err(StreamError::Io)?;
    load_arrivals_reader(file)
}

/// Like [`load_arrivals_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded fixtures.
pub fn load_arrivals_reader<R: Read>(reader: R) -> Result<Vec<ArrivalRecord>, StreamError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for result in csv_reader.deserialize::<ArrivalRow>() {
        let row = result.map_err(|e| StreamError::Parse(e.to_string()))?;
        records.push(parse_row(row)?);
    }
    Ok(records)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_row(row: ArrivalRow) -> Result<ArrivalRecord, StreamError> {
    let kind: CustomerKind = row
        .kind
        .parse()
        .map_err(|e: CoreError| StreamError::Parse(e.to_string()))?;

    if row.items == 0 {
        return Err(StreamError::Parse(format!(
            "item count must be positive (kind {}, arrival minute {})",
            row.kind.trim(),
            row.arrival_minute
        )));
    }

    Ok(ArrivalRecord::new(kind, Minute(row.arrival_minute), row.items))
}
