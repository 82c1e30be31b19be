use crate::state::{Artifact, ClassId, Combatant, Element, EnemyRank, EventTemplate, Skill};

use super::RandomSource;

/// Static definition of a playable class.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassDefinition {
    pub id: ClassId,
    pub name: String,
    pub description: String,
    pub element: Element,
    pub base_hp: u32,
    pub base_attack: u32,
    pub base_luck: u32,
}

/// Oracle providing content: classes, card pools, enemies, events, artifacts.
///
/// Generators receive the caller's [`RandomSource`] so every draw in a run
/// comes from one place.
pub trait ContentOracle: Send + Sync {
    fn classes(&self) -> &[ClassDefinition];

    fn class(&self, id: ClassId) -> Option<&ClassDefinition> {
        self.classes().iter().find(|class| class.id == id)
    }

    /// Every card the class can own, commons first.
    fn card_pool(&self, class: ClassId) -> &[Skill];

    /// Artifact choices offered right after character creation (may be empty).
    fn starting_artifacts(&self, class: ClassId) -> Vec<Artifact>;

    /// A regular enemy for the given layer.
    fn monster(&self, layer: u32, rng: &mut dyn RandomSource) -> Combatant;

    /// A boss or mini-boss for the given stage and layer.
    fn boss(&self, rank: EnemyRank, stage: u32, layer: u32, rng: &mut dyn RandomSource)
    -> Combatant;

    fn event(&self, rng: &mut dyn RandomSource) -> EventTemplate;

    /// Artifact choices after a kill, excluding artifacts in `owned`.
    fn artifact_drop(
        &self,
        class: ClassId,
        owned: &[Artifact],
        is_boss: bool,
        rng: &mut dyn RandomSource,
    ) -> Vec<Artifact>;
}
