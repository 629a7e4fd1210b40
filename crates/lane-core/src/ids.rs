//! Strongly typed identifier wrappers and the customer id generator.
//!
//! Both IDs are `Copy + Ord + Hash` so they can be used as map keys and sort
//! keys without ceremony.  `RegisterId` is 1-based to match the checkout
//! floor's own numbering ("register 1" through "register N"); use
//! [`RegisterId::index`] when indexing 0-based storage.

use std::fmt;

// ── CustomerId ────────────────────────────────────────────────────────────────

/// Unique identifier of one customer, assigned at batching time.
///
/// Ids are allocated by [`CustomerIds`] in stream order, so within a run a
/// smaller id always means an earlier position in the input stream.  Ids are
/// never reused during a run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomerId(pub u64);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

// ── RegisterId ────────────────────────────────────────────────────────────────

/// Identifier of a checkout register, in `[1, N]`.
///
/// The register numbered `N` (the highest id on the floor) is the trainee
/// register: it takes two minutes per item instead of one.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisterId(pub u32);

impl RegisterId {
    /// Sentinel meaning "no register selected" — used by policy scans.
    pub const INVALID: RegisterId = RegisterId(u32::MAX);

    /// 0-based index into per-register storage.
    ///
    /// # Panics
    /// Panics in debug mode on id 0 (register ids start at 1).
    #[inline]
    pub fn index(self) -> usize {
        debug_assert!(self.0 >= 1, "register ids are 1-based");
        (self.0 - 1) as usize
    }
}

impl Default for RegisterId {
    /// Returns the `INVALID` sentinel so uninitialized ids are visibly invalid.
    #[inline]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for RegisterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

// ── CustomerIds ───────────────────────────────────────────────────────────────

/// Monotonic customer id generator, scoped to one simulation run.
///
/// Owned by the arrival batcher rather than living in process-global state:
/// every run starts its own generator at zero, so independent runs hand out
/// identical ids for identical streams and results stay reproducible.
#[derive(Debug, Default)]
pub struct CustomerIds {
    next: u64,
}

impl CustomerIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.  Never returns the same id twice.
    #[inline]
    pub fn next_id(&mut self) -> CustomerId {
        let id = CustomerId(self.next);
        self.next += 1;
        id
    }

    /// How many ids have been allocated so far.
    pub fn allocated(&self) -> u64 {
        self.next
    }
}
