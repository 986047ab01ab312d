//! Hero identification.
//!
//! Every hero gets a `HeroId` from an `IdSequence`. Sequences start at 1,
//! only ever count up, and never hand out the same id twice.
//!
//! ## Usage
//!
//! ```
//! use hero_arena::core::{HeroId, IdSequence};
//!
//! let mut ids = IdSequence::new();
//! assert_eq!(ids.next_id(), HeroId(1));
//! assert_eq!(ids.next_id(), HeroId(2));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HeroId(pub u32);

impl HeroId {
    /// Create a hero ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for HeroId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for HeroId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic generator of hero IDs.
///
/// Owned by whoever assembles a roster (see `HeroFactory`), so two
/// independent rosters each start at 1 and tests get predictable ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    /// The first id handed out by a fresh sequence.
    pub const FIRST: HeroId = HeroId(1);

    /// Create a sequence starting at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: Self::FIRST.0 }
    }

    /// Take the next id and advance.
    pub fn next_id(&mut self) -> HeroId {
        let id = HeroId(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one() {
        let mut ids = IdSequence::new();
        assert_eq!(ids.next_id(), HeroId(1));
    }

    #[test]
    fn test_sequential() {
        let mut ids = IdSequence::new();
        let first = ids.next_id();
        let second = ids.next_id();
        assert_eq!(second.raw(), first.raw() + 1);
    }

    #[test]
    fn test_never_repeats() {
        let mut ids = IdSequence::new();
        let mut seen: Vec<_> = (0..100).map(|_| ids.next_id()).collect();
        seen.dedup();
        assert_eq!(seen.len(), 100);
    }

    #[test]
    fn test_independent_sequences() {
        let mut a = IdSequence::new();
        let mut b = IdSequence::new();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id(), HeroId(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", HeroId(42)), "#42");
    }

    #[test]
    fn test_serialization() {
        let id = HeroId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: HeroId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
