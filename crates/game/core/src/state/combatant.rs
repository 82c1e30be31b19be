//! Combatants: the player character and the enemies it fights.
//!
//! Both share one capability set (name, element, HP, attack, luck, defense) so
//! the combat resolver is written once. Role-specific data hangs off
//! [`Role`].

use super::artifact::Artifact;
use super::skill::Skill;

/// Elemental affinity of a combatant or skill.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Element {
    Neutral,
    Fire,
    Water,
    Earth,
    Wind,
    Light,
    Dark,
}

/// Stable identifier of a playable class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassId(pub u8);

/// Damage mitigation worn by a combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Defense {
    pub name: String,
    /// Percentage of incoming damage removed, 0..=100.
    pub reduction: u8,
}

impl Defense {
    pub fn new(name: impl Into<String>, reduction: u8) -> Self {
        Self {
            name: name.into(),
            reduction: reduction.min(100),
        }
    }

    pub fn none() -> Self {
        Self::new("None", 0)
    }
}

/// Enemy tier, derived from the stage type the enemy was generated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EnemyRank {
    Normal,
    MiniBoss,
    Boss,
}

impl EnemyRank {
    /// Mini-bosses and bosses share the boss reward table.
    pub const fn is_boss(self) -> bool {
        matches!(self, Self::MiniBoss | Self::Boss)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerExtras {
    pub class: ClassId,
    /// Equipped hand, at most `GameConfig::hand_size` cards.
    pub equipped: Vec<Skill>,
    pub artifacts: Vec<Artifact>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyExtras {
    pub rank: EnemyRank,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Player(PlayerExtras),
    Enemy(EnemyExtras),
}

/// An entity that can attack and be attacked.
///
/// HP is private: every mutation goes through [`Combatant::set_hp`] or its
/// helpers, which clamp to `0..=max_hp`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub name: String,
    pub element: Element,
    hp: u32,
    max_hp: u32,
    pub attack: u32,
    pub luck: u32,
    pub defense: Defense,
    pub role: Role,
}

impl Combatant {
    pub fn player(
        name: impl Into<String>,
        element: Element,
        max_hp: u32,
        attack: u32,
        luck: u32,
        defense: Defense,
        extras: PlayerExtras,
    ) -> Self {
        Self {
            name: name.into(),
            element,
            hp: max_hp,
            max_hp,
            attack,
            luck,
            defense,
            role: Role::Player(extras),
        }
    }

    pub fn enemy(
        name: impl Into<String>,
        element: Element,
        max_hp: u32,
        attack: u32,
        luck: u32,
        rank: EnemyRank,
    ) -> Self {
        Self {
            name: name.into(),
            element,
            hp: max_hp,
            max_hp,
            attack,
            luck,
            defense: Defense::none(),
            role: Role::Enemy(EnemyExtras { rank }),
        }
    }

    #[must_use]
    pub fn with_defense(mut self, defense: Defense) -> Self {
        self.defense = defense;
        self
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    /// Sets HP, clamped to `0..=max_hp`.
    pub fn set_hp(&mut self, hp: u32) {
        self.hp = hp.min(self.max_hp);
    }

    /// Subtracts damage, saturating at zero. Returns the new HP.
    pub fn take_damage(&mut self, damage: u32) -> u32 {
        self.set_hp(self.hp.saturating_sub(damage));
        self.hp
    }

    /// Adds HP, capped at `max_hp`. Returns the new HP.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.set_hp(self.hp.saturating_add(amount));
        self.hp
    }

    pub fn restore_full(&mut self) {
        self.hp = self.max_hp;
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn is_player(&self) -> bool {
        matches!(self.role, Role::Player(_))
    }

    pub fn side(&self) -> super::Side {
        match self.role {
            Role::Player(_) => super::Side::Player,
            Role::Enemy(_) => super::Side::Enemy,
        }
    }

    pub fn as_player(&self) -> Option<&PlayerExtras> {
        match &self.role {
            Role::Player(extras) => Some(extras),
            Role::Enemy(_) => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut PlayerExtras> {
        match &mut self.role {
            Role::Player(extras) => Some(extras),
            Role::Enemy(_) => None,
        }
    }

    pub fn as_enemy(&self) -> Option<&EnemyExtras> {
        match &self.role {
            Role::Enemy(extras) => Some(extras),
            Role::Player(_) => None,
        }
    }

    /// Artifacts carried by this combatant (always empty for enemies).
    pub fn artifacts(&self) -> &[Artifact] {
        self.as_player()
            .map(|extras| extras.artifacts.as_slice())
            .unwrap_or_default()
    }

    pub fn rank(&self) -> Option<EnemyRank> {
        self.as_enemy().map(|extras| extras.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goblin() -> Combatant {
        Combatant::enemy("Goblin", Element::Earth, 30, 6, 0, EnemyRank::Normal)
    }

    #[test]
    fn hp_mutations_stay_within_bounds() {
        let mut enemy = goblin();

        assert_eq!(enemy.take_damage(12), 18);
        assert_eq!(enemy.take_damage(500), 0);
        assert!(!enemy.is_alive());

        assert_eq!(enemy.heal(10), 10);
        assert_eq!(enemy.heal(u32::MAX), 30);

        enemy.set_hp(99);
        assert_eq!(enemy.hp(), enemy.max_hp());
    }

    #[test]
    fn enemy_has_no_player_payload() {
        let enemy = goblin();
        assert!(enemy.as_player().is_none());
        assert!(enemy.artifacts().is_empty());
        assert_eq!(enemy.rank(), Some(EnemyRank::Normal));
        assert_eq!(enemy.side(), super::super::Side::Enemy);
    }

    #[test]
    fn defense_reduction_is_capped() {
        assert_eq!(Defense::new("Wall", 250).reduction, 100);
    }
}
