//! Simulation time model.
//!
//! # Design
//!
//! Time is a logical minute counter derived entirely from the input arrival
//! timestamps.  There is no free-running clock: the simulation jumps from one
//! arrival cohort's timestamp to the next, so `Minute` is the only time type
//! needed.  Integer minutes keep all queue arithmetic exact (no floating-point
//! drift) and comparisons O(1).

use std::fmt;

// ── Minute ────────────────────────────────────────────────────────────────────

/// An absolute simulation timestamp, in minutes from the start of the run.
///
/// Stored as `u32`: at one-minute resolution that covers ~8,000 simulated
/// years, far beyond any conceivable arrival stream.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minute(pub u32);

impl Minute {
    pub const ZERO: Minute = Minute(0);

    /// Return the timestamp `n` minutes after `self`.
    #[inline]
    pub fn offset(self, n: u32) -> Minute {
        Minute(self.0 + n)
    }

    /// Minutes elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Minute) -> u32 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u32> for Minute {
    type Output = Minute;
    #[inline]
    fn add(self, rhs: u32) -> Minute {
        Minute(self.0 + rhs)
    }
}

impl std::ops::Sub for Minute {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: Minute) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}
