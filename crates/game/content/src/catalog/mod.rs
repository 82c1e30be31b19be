//! Built-in content catalogue backing [`ContentOracle`].

mod artifacts;
mod cards;
mod classes;
mod enemies;
mod events;

use std::collections::BTreeMap;

pub use artifacts::ArtifactEntry;
pub use classes::{KNIGHT, MAGE, ROGUE};
pub use enemies::EnemyTemplate;

use game_core::{
    Artifact, ClassDefinition, ClassId, Combatant, ContentOracle, EnemyRank, EventTemplate,
    RandomSource, Rarity, Skill,
};

/// Maximum number of artifacts offered by one drop.
pub const DROP_CHOICES: usize = 3;

/// Static content for every class, enemy tier and event.
///
/// Every list is non-empty; generators index into them with draws from the
/// caller's [`RandomSource`].
#[derive(Clone, Debug)]
pub struct Catalog {
    classes: Vec<ClassDefinition>,
    pools: BTreeMap<ClassId, Vec<Skill>>,
    monsters: Vec<EnemyTemplate>,
    mini_bosses: Vec<EnemyTemplate>,
    bosses: Vec<EnemyTemplate>,
    events: Vec<EventTemplate>,
    artifacts: Vec<ArtifactEntry>,
}

impl Catalog {
    pub fn builtin() -> Self {
        let pools = BTreeMap::from([
            (KNIGHT, cards::knight()),
            (MAGE, cards::mage()),
            (ROGUE, cards::rogue()),
        ]);

        Self {
            classes: classes::classes(),
            pools,
            monsters: enemies::monsters(),
            mini_bosses: enemies::mini_bosses(),
            bosses: enemies::bosses(),
            events: events::events(),
            artifacts: artifacts::artifacts(),
        }
    }

    pub fn events(&self) -> &[EventTemplate] {
        &self.events
    }

    pub fn artifacts(&self) -> &[ArtifactEntry] {
        &self.artifacts
    }

    fn spawn(
        templates: &[EnemyTemplate],
        rank: EnemyRank,
        layer: u32,
        rng: &mut dyn RandomSource,
    ) -> Combatant {
        let template = &templates[pick(templates.len(), rng)];
        template.spawn(rank, layer)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Uniform index in `0..len` (0 when `len` is 0).
fn pick(len: usize, rng: &mut dyn RandomSource) -> usize {
    let upper = u32::try_from(len).unwrap_or(u32::MAX);
    (rng.below(upper) as usize).min(len.saturating_sub(1))
}

/// Normal kills only drop commons and rares; bosses can drop anything.
fn droppable(rarity: Rarity, is_boss: bool) -> bool {
    is_boss || matches!(rarity, Rarity::Common | Rarity::Rare)
}

impl ContentOracle for Catalog {
    fn classes(&self) -> &[ClassDefinition] {
        &self.classes
    }

    fn card_pool(&self, class: ClassId) -> &[Skill] {
        self.pools.get(&class).map_or(&[][..], Vec::as_slice)
    }

    fn starting_artifacts(&self, class: ClassId) -> Vec<Artifact> {
        let ids = artifacts::starting(class);
        self.artifacts
            .iter()
            .filter(|entry| ids.contains(&entry.artifact.id.0))
            .map(|entry| entry.artifact.clone())
            .collect()
    }

    fn monster(&self, layer: u32, rng: &mut dyn RandomSource) -> Combatant {
        Self::spawn(&self.monsters, EnemyRank::Normal, layer, rng)
    }

    fn boss(
        &self,
        rank: EnemyRank,
        _stage: u32,
        layer: u32,
        rng: &mut dyn RandomSource,
    ) -> Combatant {
        let templates = match rank {
            EnemyRank::Boss => &self.bosses,
            _ => &self.mini_bosses,
        };
        Self::spawn(templates, rank, layer, rng)
    }

    fn event(&self, rng: &mut dyn RandomSource) -> EventTemplate {
        self.events[pick(self.events.len(), rng)].clone()
    }

    fn artifact_drop(
        &self,
        class: ClassId,
        owned: &[Artifact],
        is_boss: bool,
        rng: &mut dyn RandomSource,
    ) -> Vec<Artifact> {
        let mut candidates: Vec<&Artifact> = self
            .artifacts
            .iter()
            .filter(|entry| entry.usable_by(class))
            .map(|entry| &entry.artifact)
            .filter(|artifact| droppable(artifact.rarity, is_boss))
            .filter(|artifact| owned.iter().all(|own| own.id != artifact.id))
            .collect();

        let wanted = DROP_CHOICES.min(candidates.len());
        let mut offer = Vec::with_capacity(wanted);
        while offer.len() < wanted {
            let index = pick(candidates.len(), rng);
            offer.push(candidates.swap_remove(index).clone());
        }
        offer
    }
}
