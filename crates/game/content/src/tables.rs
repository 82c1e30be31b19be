//! Balance tables: dodge curve, element chart, rewards and encounter odds.

use game_core::{Defense, Element, StageType, TablesOracle};

/// Element each element is strong against.
///
/// The four natural elements form a cycle (fire > wind > earth > water >
/// fire); light and dark are each strong against the other. Neutral has no
/// matchups.
pub const fn strong_against(element: Element) -> Option<Element> {
    match element {
        Element::Fire => Some(Element::Wind),
        Element::Wind => Some(Element::Earth),
        Element::Earth => Some(Element::Water),
        Element::Water => Some(Element::Fire),
        Element::Light => Some(Element::Dark),
        Element::Dark => Some(Element::Light),
        Element::Neutral => None,
    }
}

fn has_advantage(attacker: Element, defender: Element) -> bool {
    strong_against(attacker).is_some_and(|weak| weak == defender)
}

/// Tunable numbers behind [`TablesOracle`].
///
/// Every field has a default, so a TOML override only lists what it changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BalanceTables {
    /// Dodge chance (percent) at zero luck.
    pub dodge_base: u32,
    /// Extra dodge chance per point of luck.
    pub dodge_per_luck: u32,
    pub dodge_cap: u32,
    pub advantage_multiplier: f64,
    pub disadvantage_multiplier: f64,
    /// Enemies add `attack / attack_bonus_divisor` to every hit.
    pub attack_bonus_divisor: u32,
    pub combat_chance: u32,
    pub gold_per_kill: u32,
    pub gold_per_boss_kill: u32,
    pub drop_chance: u32,
    pub boss_drop_chance: u32,
    pub mini_boss_stage: u32,
    pub boss_stage: u32,
    pub starting_defense: Defense,
}

impl BalanceTables {
    pub fn new() -> Self {
        Self {
            dodge_base: 10,
            dodge_per_luck: 1,
            dodge_cap: 60,
            advantage_multiplier: 1.5,
            disadvantage_multiplier: 0.75,
            attack_bonus_divisor: 5,
            combat_chance: 70,
            gold_per_kill: 15,
            gold_per_boss_kill: 50,
            drop_chance: 10,
            boss_drop_chance: 50,
            mini_boss_stage: 5,
            boss_stage: 10,
            starting_defense: Defense::new("Leather Guard", 10),
        }
    }
}

impl Default for BalanceTables {
    fn default() -> Self {
        Self::new()
    }
}

impl TablesOracle for BalanceTables {
    fn dodge_rate(&self, luck: u32) -> u32 {
        let rate = self
            .dodge_base
            .saturating_add(luck.saturating_mul(self.dodge_per_luck));
        rate.min(self.dodge_cap).min(99)
    }

    fn element_multiplier(&self, attacker: Element, defender: Element) -> f64 {
        if has_advantage(attacker, defender) {
            self.advantage_multiplier
        } else if has_advantage(defender, attacker) {
            self.disadvantage_multiplier
        } else {
            1.0
        }
    }

    fn attack_bonus(&self, attack: u32) -> u32 {
        attack.checked_div(self.attack_bonus_divisor).unwrap_or(0)
    }

    fn combat_chance(&self) -> u32 {
        self.combat_chance.min(100)
    }

    fn stage_type(&self, stage: u32) -> StageType {
        if stage == self.boss_stage {
            StageType::Boss
        } else if stage == self.mini_boss_stage {
            StageType::MiniBoss
        } else {
            StageType::Normal
        }
    }

    fn gold_reward(&self, kills: u32, is_boss: bool) -> u32 {
        let per_kill = if is_boss {
            self.gold_per_boss_kill
        } else {
            self.gold_per_kill
        };
        kills.saturating_mul(per_kill)
    }

    fn artifact_drop_chance(&self, is_boss: bool) -> u32 {
        let chance = if is_boss {
            self.boss_drop_chance
        } else {
            self.drop_chance
        };
        chance.min(100)
    }

    fn default_defense(&self) -> Defense {
        self.starting_defense.clone()
    }
}
