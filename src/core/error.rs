//! Arena error type.
//!
//! Only broken preconditions are errors. A lookup that finds nothing returns
//! `None`, and a round involving a defeated hero returns an ordinary
//! narrative; neither goes through this type.

/// Errors raised when the arena is asked to do something impossible.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArenaError {
    /// Picking two distinct heroes needs at least two of them.
    #[error("roster has {size} hero(es), at least 2 are needed for a duel")]
    RosterTooSmall { size: usize },

    /// A duel referenced a roster slot that does not exist.
    #[error("hero index {index} is out of range for a roster of {size}")]
    HeroIndexOutOfRange { index: usize, size: usize },

    /// A hero cannot duel itself.
    #[error("hero at index {index} cannot duel itself")]
    SameHero { index: usize },

    /// A stat range whose lower bound is above its upper bound.
    #[error("stat range min {min} exceeds max {max}")]
    InvalidStatRange { min: u32, max: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ArenaError::RosterTooSmall { size: 1 }.to_string(),
            "roster has 1 hero(es), at least 2 are needed for a duel"
        );
        assert_eq!(
            ArenaError::HeroIndexOutOfRange { index: 7, size: 6 }.to_string(),
            "hero index 7 is out of range for a roster of 6"
        );
        assert_eq!(
            ArenaError::SameHero { index: 2 }.to_string(),
            "hero at index 2 cannot duel itself"
        );
        assert_eq!(
            ArenaError::InvalidStatRange { min: 60, max: 50 }.to_string(),
            "stat range min 60 exceeds max 50"
        );
    }
}
