//! Artifacts: passive modifiers owned by the player.
//!
//! The combat resolver only consumes them through the two transforms in
//! [`crate::combat::artifacts`]; the effect catalogue itself is content data.

use super::Element;
use super::skill::Rarity;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArtifactId(pub u32);

/// What an artifact does when damage flows through it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArtifactEffect {
    /// Adds a flat amount to outgoing skill damage.
    FlatDamage(u32),
    /// Raises outgoing damage by a percentage.
    PercentDamage(u32),
    /// Raises outgoing damage of skills in one element by a percentage.
    ElementDamage { element: Element, percent: u32 },
    /// Raises outgoing damage against bosses by a percentage.
    BossDamage(u32),
    /// Removes a percentage of incoming damage.
    DamageReduction(u32),
    /// Removes a flat amount of incoming damage.
    FlatBlock(u32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Artifact {
    pub id: ArtifactId,
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    pub effect: ArtifactEffect,
}

impl Artifact {
    pub fn new(
        id: ArtifactId,
        name: impl Into<String>,
        description: impl Into<String>,
        rarity: Rarity,
        effect: ArtifactEffect,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            rarity,
            effect,
        }
    }
}
