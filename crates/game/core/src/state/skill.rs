//! Skill cards the player equips and enemies synthesize for basic attacks.

use core::num::NonZeroU8;

use super::Element;
use super::status::StatusEffectKind;

/// Stable identifier of a card in the content catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillId(pub u32);

impl SkillId {
    /// Identifier reserved for enemy basic attacks synthesized at runtime.
    pub const BASIC_ATTACK: Self = Self(0);
}

/// Rarity tier. Only reward generation looks at it; combat ignores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Status effects a skill inflicts when at least one of its hits lands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillFlags {
    pub stun: bool,
    pub poison: bool,
    pub freeze: bool,
}

impl SkillFlags {
    pub const NONE: Self = Self {
        stun: false,
        poison: false,
        freeze: false,
    };

    /// Effect kinds enabled by these flags, in a fixed order.
    pub fn kinds(&self) -> impl Iterator<Item = StatusEffectKind> + '_ {
        [
            (self.stun, StatusEffectKind::Stun),
            (self.poison, StatusEffectKind::Poison),
            (self.freeze, StatusEffectKind::Freeze),
        ]
        .into_iter()
        .filter_map(|(enabled, kind)| enabled.then_some(kind))
    }

    pub fn is_empty(&self) -> bool {
        !(self.stun || self.poison || self.freeze)
    }
}

/// A named action with damage, element, hit count and infliction flags.
///
/// `hits` is stored as [`NonZeroU8`] so a zero-hit skill cannot exist;
/// builders clamp a requested zero to a single hit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    pub damage: u32,
    /// Element of the skill. `None` falls back to the attacker's element.
    pub element: Option<Element>,
    pub hits: Option<NonZeroU8>,
    pub flags: SkillFlags,
    pub rarity: Rarity,
}

impl Skill {
    pub fn new(id: SkillId, name: impl Into<String>, damage: u32, rarity: Rarity) -> Self {
        Self {
            id,
            name: name.into(),
            damage,
            element: None,
            hits: None,
            flags: SkillFlags::NONE,
            rarity,
        }
    }

    /// Basic attack used by enemies: attack-stat damage in the enemy's element.
    pub fn basic_attack(damage: u32, element: Element) -> Self {
        Self::new(SkillId::BASIC_ATTACK, "Attack", damage, Rarity::Common).with_element(element)
    }

    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    /// Sets the hit count. Zero is treated as a single hit.
    #[must_use]
    pub fn with_hits(mut self, hits: u8) -> Self {
        self.hits = Some(NonZeroU8::new(hits).unwrap_or(NonZeroU8::MIN));
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: SkillFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Number of independent hit attempts (absent means one).
    pub fn hit_count(&self) -> u8 {
        self.hits.map_or(1, NonZeroU8::get)
    }

    pub fn is_multi_hit(&self) -> bool {
        self.hit_count() > 1
    }
}
