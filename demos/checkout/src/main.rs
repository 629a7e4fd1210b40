//! checkout — end-to-end demo for the lane checkout simulator.
//!
//! Routes a morning's worth of customers across four registers (register 4 is
//! staffed by the trainee cashier), prints each register's final queue, and
//! reports the minute the last customer finishes checkout.
//!
//! Usage:
//!
//! ```text
//! checkout                          run the embedded arrival fixture
//! checkout <arrivals.csv> [N]       run a CSV stream on N registers
//! checkout gen <customers> [seed]   run a seeded synthetic stream
//! ```

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};

use lane_core::{SimConfig, SimRng};
use lane_output::{CsvWriter, SimOutputObserver};
use lane_sim::{Sim, completion};
use lane_stream::{ArrivalRecord, GeneratorConfig, generate, load_arrivals_csv, load_arrivals_reader};

// ── Constants ─────────────────────────────────────────────────────────────────

const REGISTERS:  u32  = 4;
const SEED:       u64  = 42;
const OUTPUT_DIR: &str = "output/checkout";

// ── Arrival fixture ───────────────────────────────────────────────────────────

// kind,arrival_minute,items — in arrival order.  A small morning rush: two
// cohorts of simultaneous arrivals, then a trickle.
const ARRIVALS_CSV: &str = "\
kind,arrival_minute,items\n\
A,0,9\n\
B,0,3\n\
A,0,3\n\
B,0,7\n\
A,2,1\n\
A,2,5\n\
B,2,5\n\
B,4,2\n\
A,7,6\n\
B,7,1\n\
A,7,1\n\
B,12,8\n\
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    // 1. Pick the arrival stream and register count from the arguments.
    let (records, registers) = parse_args()?;

    println!("=== checkout — lane register simulator ===");
    println!(
        "Registers: {registers} (register {registers} is the trainee)  |  Arrivals: {}",
        records.len()
    );
    println!();

    // 2. Build the sim.
    let mut sim = Sim::new(SimConfig::new(registers), records)?;

    // 3. Run with CSV diagnostics attached.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = SimOutputObserver::new(writer);
    let last = sim.run(&mut obs);
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Per-register queue tables.
    let ledger = sim.ledger();
    for register in ledger.register_ids() {
        let queue = ledger.queue_of(register);
        let finishes = completion::finish_times(queue);
        let label = if ledger.is_trainee(register) { " (trainee)" } else { "" };

        println!("register {}{label} — {} customers", register.0, queue.len());
        println!(
            "  {:<6} {:<5} {:<8} {:<6} {:<9} {:<7}",
            "id", "kind", "arrival", "items", "duration", "finish"
        );
        for (customer, finish) in queue.iter().zip(&finishes) {
            println!(
                "  {:<6} {:<5} {:<8} {:<6} {:<9} {:<7}",
                customer.id().0,
                customer.kind(),
                customer.arrival().0,
                customer.items(),
                customer.routing().duration,
                finish.0,
            );
        }
        println!();
    }

    // 5. Result.
    println!("Last customer checks out at minute {}", last.0);
    println!("Diagnostics written to {OUTPUT_DIR}/");

    Ok(())
}

// ── Argument parsing ──────────────────────────────────────────────────────────

fn parse_args() -> Result<(Vec<ArrivalRecord>, u32)> {
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        None => {
            let records = load_arrivals_reader(Cursor::new(ARRIVALS_CSV))?;
            Ok((records, REGISTERS))
        }

        Some("gen") => {
            let customers: usize = args
                .next()
                .map(|s| s.parse())
                .transpose()
                .context("customer count must be a positive integer")?
                .unwrap_or(200);
            let seed: u64 = args
                .next()
                .map(|s| s.parse())
                .transpose()
                .context("seed must be an integer")?
                .unwrap_or(SEED);

            let config = GeneratorConfig {
                customers,
                ..GeneratorConfig::default()
            };
            let records = generate(&config, &mut SimRng::new(seed));
            Ok((records, REGISTERS))
        }

        Some(path) => {
            let registers: u32 = args
                .next()
                .map(|s| s.parse())
                .transpose()
                .context("register count must be a positive integer")?
                .unwrap_or(REGISTERS);
            let records = load_arrivals_csv(Path::new(path))
                .with_context(|| format!("loading arrivals from {path}"))?;
            Ok((records, registers))
        }
    }
}
