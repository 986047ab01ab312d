//! Hero classes and the attack kinds they fight with.

use serde::{Deserialize, Serialize};

/// A hero's class. Fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroClass {
    Warrior,
    Mage,
    Archer,
}

impl HeroClass {
    /// All classes, in declaration order.
    pub const ALL: [HeroClass; 3] = [HeroClass::Warrior, HeroClass::Mage, HeroClass::Archer];

    /// The attack kind every hero of this class uses.
    #[must_use]
    pub const fn attack_kind(self) -> AttackKind {
        match self {
            HeroClass::Warrior => AttackKind::Physical,
            HeroClass::Mage => AttackKind::Magical,
            HeroClass::Archer => AttackKind::Ranged,
        }
    }

    /// Display name, e.g. `"Warrior"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HeroClass::Warrior => "Warrior",
            HeroClass::Mage => "Mage",
            HeroClass::Archer => "Archer",
        }
    }
}

impl std::fmt::Display for HeroClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a hero delivers damage.
///
/// Purely descriptive: the damage rule treats all kinds the same.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackKind {
    Physical,
    Magical,
    Ranged,
}

impl AttackKind {
    /// Display name, e.g. `"Physical"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AttackKind::Physical => "Physical",
            AttackKind::Magical => "Magical",
            AttackKind::Ranged => "Ranged",
        }
    }
}

impl std::fmt::Display for AttackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HeroClass> for AttackKind {
    fn from(class: HeroClass) -> Self {
        class.attack_kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_kind_mapping() {
        assert_eq!(HeroClass::Warrior.attack_kind(), AttackKind::Physical);
        assert_eq!(HeroClass::Mage.attack_kind(), AttackKind::Magical);
        assert_eq!(HeroClass::Archer.attack_kind(), AttackKind::Ranged);
    }

    #[test]
    fn test_from_class() {
        for class in HeroClass::ALL {
            assert_eq!(AttackKind::from(class), class.attack_kind());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(HeroClass::Mage.to_string(), "Mage");
        assert_eq!(AttackKind::Ranged.to_string(), "Ranged");
    }
}
