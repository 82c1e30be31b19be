//! Enemy templates and per-layer scaling.

use game_core::{Combatant, Element, EnemyRank};

/// Base stats of an enemy before layer scaling.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    pub element: Element,
    pub hp: u32,
    pub attack: u32,
    pub luck: u32,
}

impl EnemyTemplate {
    fn new(name: &str, element: Element, hp: u32, attack: u32, luck: u32) -> Self {
        Self {
            name: name.into(),
            element,
            hp,
            attack,
            luck,
        }
    }

    /// Each layer past the first adds 25% HP and 15% attack.
    pub fn spawn(&self, rank: EnemyRank, layer: u32) -> Combatant {
        let depth = layer.saturating_sub(1);
        let hp = scale(self.hp, 25, depth);
        let attack = scale(self.attack, 15, depth);
        Combatant::enemy(self.name.clone(), self.element, hp, attack, self.luck, rank)
    }
}

fn scale(base: u32, percent_per_layer: u32, depth: u32) -> u32 {
    let factor = 100u32.saturating_add(percent_per_layer.saturating_mul(depth));
    base.saturating_mul(factor) / 100
}

pub(super) fn monsters() -> Vec<EnemyTemplate> {
    vec![
        EnemyTemplate::new("Slime", Element::Water, 30, 6, 0),
        EnemyTemplate::new("Goblin", Element::Neutral, 40, 8, 5),
        EnemyTemplate::new("Wolf", Element::Wind, 45, 10, 10),
        EnemyTemplate::new("Skeleton", Element::Dark, 50, 9, 3),
        EnemyTemplate::new("Fire Imp", Element::Fire, 35, 11, 8),
    ]
}

pub(super) fn mini_bosses() -> Vec<EnemyTemplate> {
    vec![
        EnemyTemplate::new("Orc Chieftain", Element::Earth, 90, 14, 5),
        EnemyTemplate::new("Frost Witch", Element::Water, 80, 15, 10),
    ]
}

pub(super) fn bosses() -> Vec<EnemyTemplate> {
    vec![
        EnemyTemplate::new("Ancient Dragon", Element::Fire, 160, 20, 5),
        EnemyTemplate::new("Lich King", Element::Dark, 150, 22, 8),
    ]
}
