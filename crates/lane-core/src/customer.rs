//! The customer record.
//!
//! A `Customer` is created once by the arrival batcher and is immutable except
//! for its routing fields: the register ledger sets those exactly once, when
//! the customer is assigned to a line.  After that the record lives in its
//! register's FIFO until the completion pass reads it — customers are never
//! deleted mid-run.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CustomerId, Minute, RegisterId};

// ── CustomerKind ──────────────────────────────────────────────────────────────

/// The two queue-selection behaviors a customer can have.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CustomerKind {
    /// Picks the line with the fewest customers.
    A,
    /// Picks an empty line, or failing that the line whose last customer has
    /// the fewest items.
    B,
}

impl CustomerKind {
    /// Single-letter form used in input files and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            CustomerKind::A => "A",
            CustomerKind::B => "B",
        }
    }
}

impl FromStr for CustomerKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, CoreError> {
        match s.trim() {
            "A" => Ok(CustomerKind::A),
            "B" => Ok(CustomerKind::B),
            other => Err(CoreError::Parse(format!(
                "unknown customer kind {other:?}: expected \"A\" or \"B\""
            ))),
        }
    }
}

impl fmt::Display for CustomerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Assignment ────────────────────────────────────────────────────────────────

/// Routing fields, written once when the customer is assigned to a register.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// The register the customer queued at.
    pub register: RegisterId,

    /// Customers counted in that register's load when the line was chosen.
    pub ahead: u32,

    /// Minutes the register needs to scan all items (doubled on the trainee
    /// register).
    pub duration: u32,
}

// ── Customer ──────────────────────────────────────────────────────────────────

/// One customer in the simulation.
///
/// Identity, kind, item count, and arrival are fixed at creation; the routing
/// fields are set exactly once by [`assign`][Customer::assign].
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    id:         CustomerId,
    kind:       CustomerKind,
    items:      u32,
    arrival:    Minute,
    assignment: Option<Assignment>,
}

impl Customer {
    /// Create an unrouted customer.
    ///
    /// # Panics
    /// Panics in debug mode if `items == 0` — item counts are positive by
    /// contract; zero-item rows are rejected by the ingestion layer.
    pub fn new(id: CustomerId, kind: CustomerKind, items: u32, arrival: Minute) -> Self {
        debug_assert!(items >= 1, "item counts are positive");
        Self {
            id,
            kind,
            items,
            arrival,
            assignment: None,
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn kind(&self) -> CustomerKind {
        self.kind
    }

    pub fn items(&self) -> u32 {
        self.items
    }

    pub fn arrival(&self) -> Minute {
        self.arrival
    }

    /// The routing fields, or `None` while the customer is still unrouted.
    pub fn assignment(&self) -> Option<&Assignment> {
        self.assignment.as_ref()
    }

    /// The routing fields of an assigned customer.
    ///
    /// # Panics
    /// Panics if the customer has not been assigned yet.  Everything past the
    /// routing policy (reclamation, completion, output) operates on assigned
    /// customers only, so a miss here is a defect in the caller.
    pub fn routing(&self) -> &Assignment {
        match &self.assignment {
            Some(a) => a,
            None => panic!("customer {} has no routing fields yet", self.id),
        }
    }

    /// Record the routing decision.  Called by the register ledger, exactly
    /// once per customer.
    ///
    /// # Panics
    /// Panics if the customer was already assigned — re-routing is a defect,
    /// never silently accepted.
    pub fn assign(&mut self, assignment: Assignment) {
        assert!(
            self.assignment.is_none(),
            "customer {} assigned twice",
            self.id
        );
        self.assignment = Some(assignment);
    }
}
