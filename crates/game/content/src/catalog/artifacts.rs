use game_core::{Artifact, ArtifactEffect, ArtifactId, ClassId, Element, Rarity};

use super::classes::{KNIGHT, MAGE, ROGUE};

/// An artifact plus the class allowed to find it (`None` for everyone).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactEntry {
    pub artifact: Artifact,
    pub class: Option<ClassId>,
}

impl ArtifactEntry {
    pub fn usable_by(&self, class: ClassId) -> bool {
        self.class.is_none_or(|only| only == class)
    }
}

fn entry(
    id: u32,
    name: &str,
    description: &str,
    rarity: Rarity,
    effect: ArtifactEffect,
    class: Option<ClassId>,
) -> ArtifactEntry {
    ArtifactEntry {
        artifact: Artifact::new(ArtifactId(id), name, description, rarity, effect),
        class,
    }
}

pub(super) fn artifacts() -> Vec<ArtifactEntry> {
    vec![
        entry(
            1,
            "Whetstone",
            "Skills deal 3 extra damage.",
            Rarity::Common,
            ArtifactEffect::FlatDamage(3),
            None,
        ),
        entry(
            2,
            "Buckler",
            "Blocks 2 damage from every hit.",
            Rarity::Common,
            ArtifactEffect::FlatBlock(2),
            None,
        ),
        entry(
            3,
            "War Banner",
            "Skills deal 10% more damage.",
            Rarity::Rare,
            ArtifactEffect::PercentDamage(10),
            None,
        ),
        entry(
            4,
            "Iron Skin",
            "Incoming damage is reduced by 15%.",
            Rarity::Rare,
            ArtifactEffect::DamageReduction(15),
            None,
        ),
        entry(
            5,
            "Ember Core",
            "Fire skills deal 25% more damage.",
            Rarity::Rare,
            ArtifactEffect::ElementDamage {
                element: Element::Fire,
                percent: 25,
            },
            Some(MAGE),
        ),
        entry(
            6,
            "Tide Pearl",
            "Water skills deal 25% more damage.",
            Rarity::Rare,
            ArtifactEffect::ElementDamage {
                element: Element::Water,
                percent: 25,
            },
            Some(MAGE),
        ),
        entry(
            7,
            "Stone Sigil",
            "Earth skills deal 25% more damage.",
            Rarity::Rare,
            ArtifactEffect::ElementDamage {
                element: Element::Earth,
                percent: 25,
            },
            Some(KNIGHT),
        ),
        entry(
            8,
            "Night Cloak",
            "Dark skills deal 25% more damage.",
            Rarity::Rare,
            ArtifactEffect::ElementDamage {
                element: Element::Dark,
                percent: 25,
            },
            Some(ROGUE),
        ),
        entry(
            9,
            "Giant Slayer",
            "Deal 30% more damage to bosses.",
            Rarity::Epic,
            ArtifactEffect::BossDamage(30),
            None,
        ),
        entry(
            10,
            "Crown of Ages",
            "Skills deal 25% more damage.",
            Rarity::Legendary,
            ArtifactEffect::PercentDamage(25),
            None,
        ),
    ]
}

/// Artifact ids each class may pick from when a run begins.
pub(super) fn starting(class: ClassId) -> &'static [u32] {
    match class {
        MAGE => &[5, 6],
        ROGUE => &[1, 8],
        _ => &[],
    }
}
