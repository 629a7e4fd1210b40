//! `RegisterLedger` — the single owner of all per-register queue state.
//!
//! # Load vs. FIFO
//!
//! Each register keeps every customer ever assigned to it (the completion
//! pass and the diagnostics output read the full history) plus a count of how
//! many from the front have been reclaimed as finished.  The load the routing
//! policies see is `enqueued − reclaimed`, so it can never go negative and
//! always sums to exactly the unreclaimed population.
//!
//! # Reclamation granularity
//!
//! [`reclaim`][RegisterLedger::reclaim] looks at one customer per register
//! per call: the current head of the line.  A register with several finished
//! customers queued up sheds one per call — the loop driver calls it once per
//! sub-batch, so reclamation timing is part of the routing semantics, not an
//! implementation detail.  Draining every finished customer in a loop would
//! change which register looks shortest to the next sub-batch.

use lane_core::{Assignment, Customer, Minute, RegisterId};

// ── Per-register state ────────────────────────────────────────────────────────

/// One register's queue history and reclaimed-prefix counter.
#[derive(Clone, Debug, Default)]
struct RegisterQueue {
    /// Every customer ever assigned, in enqueue order.
    fifo: Vec<Customer>,

    /// How many from the front have been reclaimed as finished.
    reclaimed: usize,
}

impl RegisterQueue {
    fn load(&self) -> usize {
        self.fifo.len() - self.reclaimed
    }

    /// The first customer not yet reclaimed, if any.
    fn head(&self) -> Option<&Customer> {
        self.fifo.get(self.reclaimed)
    }
}

// ── RegisterLedger ────────────────────────────────────────────────────────────

/// Queue state for registers `1..=N`.
///
/// The register numbered `N` is the trainee register (two minutes per item);
/// all others are standard (one minute per item).
#[derive(Clone, Debug)]
pub struct RegisterLedger {
    queues: Vec<RegisterQueue>,
}

impl RegisterLedger {
    /// A ledger for registers `1..=registers`, all initially empty.
    ///
    /// # Panics
    /// Panics in debug mode on a zero register count — [`Sim::new`]
    /// rejects that configuration before a ledger ever exists.
    ///
    /// [`Sim::new`]: crate::Sim::new
    pub fn new(registers: u32) -> Self {
        debug_assert!(registers >= 1, "at least one register");
        Self {
            queues: vec![RegisterQueue::default(); registers as usize],
        }
    }

    // ── Register geometry ─────────────────────────────────────────────────

    pub fn register_count(&self) -> u32 {
        self.queues.len() as u32
    }

    /// All register ids, lowest first.
    pub fn register_ids(&self) -> impl Iterator<Item = RegisterId> {
        (1..=self.register_count()).map(RegisterId)
    }

    /// `true` if `register` is the trainee register (the highest-numbered).
    pub fn is_trainee(&self, register: RegisterId) -> bool {
        register.0 == self.register_count()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Current load: customers assigned and not yet reclaimed.
    ///
    /// # Panics
    /// Panics on a register id outside `[1, N]` — that is a defect in the
    /// caller, not a user-facing error.
    pub fn load_of(&self, register: RegisterId) -> usize {
        self.queues[register.index()].load()
    }

    /// The most recently enqueued customer ever, reclaimed or not.
    ///
    /// `None` only if no customer was ever assigned to `register`.
    pub fn last_customer_of(&self, register: RegisterId) -> Option<&Customer> {
        self.queues[register.index()].fifo.last()
    }

    /// Full enqueue-order history of one register, reclaimed customers
    /// included.
    pub fn queue_of(&self, register: RegisterId) -> &[Customer] {
        &self.queues[register.index()].fifo
    }

    /// Total customers assigned so far, across all registers.
    pub fn assigned(&self) -> usize {
        self.queues.iter().map(|q| q.fifo.len()).sum()
    }

    /// Sum of all current loads (= assigned − reclaimed).
    pub fn total_load(&self) -> usize {
        self.queues.iter().map(RegisterQueue::load).sum()
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    /// Release register capacity held by customers finished by `as_of`.
    ///
    /// Only the current head of each register is inspected: if its checkout
    /// (arrival + processing duration) ends at or before `as_of`, it leaves
    /// the load count but stays in the FIFO for final accounting.  At most
    /// one customer per register is reclaimed per call.
    pub fn reclaim(&mut self, as_of: Minute) {
        for queue in &mut self.queues {
            if let Some(head) = queue.head() {
                if head.arrival() + head.routing().duration <= as_of {
                    queue.reclaimed += 1;
                }
            }
        }
    }

    /// Append `customer` to `register`'s FIFO, recording its routing fields,
    /// and return a reference to the enqueued record.
    ///
    /// The recorded `ahead` count is the load the customer saw when it chose
    /// the line.  Assignment is final — it is never re-evaluated, and
    /// assigning the same customer twice panics.
    ///
    /// # Panics
    /// Panics on a register id outside `[1, N]`.
    pub fn assign(&mut self, mut customer: Customer, register: RegisterId, duration: u32) -> &Customer {
        let ahead = self.load_of(register) as u32;
        customer.assign(Assignment {
            register,
            ahead,
            duration,
        });

        let queue = &mut self.queues[register.index()];
        queue.fifo.push(customer);
        // just pushed, so the last index is in range
        &queue.fifo[queue.fifo.len() - 1]
    }
}
