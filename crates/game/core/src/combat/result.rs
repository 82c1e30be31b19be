//! Combat result types and attack resolution.

use crate::env::{RandomSource, TablesOracle};
use crate::state::{Combatant, Skill, StatusEffectKind};

use super::artifacts::{damage_with_artifacts, defense_with_artifacts};
use super::damage::{Effectiveness, apply_defense, apply_elemental, final_damage};
use super::hit::is_dodged;

/// Result of one hit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitResult {
    Dodged,
    Landed {
        damage: u32,
        effectiveness: Effectiveness,
    },
}

/// Outcome of one skill use, possibly spanning several hits.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    pub hits: Vec<HitResult>,
    pub total_damage: u32,
    pub hits_landed: u32,
    pub hits_attempted: u32,
    /// Effects to inflict on the defender's side (once, not per hit).
    pub inflicted: Vec<StatusEffectKind>,
    pub per_hit_messages: Vec<String>,
    pub summary: String,
}

impl AttackOutcome {
    pub fn any_hit(&self) -> bool {
        self.hits_landed > 0
    }
}

/// Resolve a complete skill use against `defender`.
///
/// For each of the skill's hits, independently:
/// 1. Draw a dodge check against the defender's luck; a dodged hit touches
///    nothing else.
/// 2. Start from the skill's damage. Player attacks pass through the
///    artifact damage transform; enemy attacks add the attack-stat bonus.
/// 3. Apply the elemental multiplier (skill element, falling back to the
///    attacker's element, against the defender's element).
/// 4. Apply the defender's defense. A player defender additionally routes
///    through its defensive artifacts.
/// 5. Floor to a non-negative integer.
///
/// Status flags on the skill are reported once if at least one hit landed.
pub fn resolve_attack(
    attacker: &Combatant,
    defender: &Combatant,
    skill: &Skill,
    tables: &(impl TablesOracle + ?Sized),
    rng: &mut (impl RandomSource + ?Sized),
) -> AttackOutcome {
    let attempts = skill.hit_count();
    let attack_element = skill.element.unwrap_or(attacker.element);
    let multiplier = tables.element_multiplier(attack_element, defender.element);
    let effectiveness = Effectiveness::from_multiplier(multiplier);

    let mut hits = Vec::with_capacity(usize::from(attempts));
    let mut per_hit_messages = Vec::with_capacity(usize::from(attempts));
    let mut total_damage = 0u32;
    let mut hits_landed = 0u32;

    for index in 1..=attempts {
        if is_dodged(defender.luck, tables, rng) {
            hits.push(HitResult::Dodged);
            per_hit_messages.push(format!(
                "Hit {index}/{attempts}: {} dodged!",
                defender.name
            ));
            continue;
        }

        let mut damage = f64::from(skill.damage);
        if attacker.is_player() {
            damage = damage_with_artifacts(damage, skill, attacker.artifacts(), defender);
        } else {
            damage += f64::from(tables.attack_bonus(attacker.attack));
        }

        damage = apply_elemental(damage, multiplier);

        damage = apply_defense(damage, defender.defense.reduction);
        if defender.is_player() {
            damage = defense_with_artifacts(damage, defender.artifacts());
        }

        let damage = final_damage(damage);
        total_damage = total_damage.saturating_add(damage);
        hits_landed += 1;

        hits.push(HitResult::Landed {
            damage,
            effectiveness,
        });
        per_hit_messages.push(format!(
            "Hit {index}/{attempts}: {damage} damage{}",
            effectiveness.log_suffix()
        ));
    }

    let inflicted = if hits_landed > 0 {
        skill.flags.kinds().collect()
    } else {
        Vec::new()
    };

    let hits_attempted = u32::from(attempts);
    let summary = if hits_landed == 0 {
        format!("{}: all hits missed!", skill.name)
    } else if skill.is_multi_hit() {
        format!(
            "{}: {hits_landed}/{hits_attempted} hits, {total_damage} total damage!",
            skill.name
        )
    } else {
        format!("{}: {total_damage} damage!", skill.name)
    };

    AttackOutcome {
        hits,
        total_damage,
        hits_landed,
        hits_attempted,
        inflicted,
        per_hit_messages,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ScriptedRandom, StageType};
    use crate::state::{
        ClassId, Defense, Element, EnemyRank, PlayerExtras, Rarity, SkillFlags, SkillId,
    };

    struct FlatTables;

    impl TablesOracle for FlatTables {
        fn dodge_rate(&self, luck: u32) -> u32 {
            10 + luck
        }
        fn element_multiplier(&self, attacker: Element, defender: Element) -> f64 {
            match (attacker, defender) {
                (Element::Water, Element::Fire) => 1.5,
                (Element::Fire, Element::Water) => 0.5,
                _ => 1.0,
            }
        }
        fn attack_bonus(&self, attack: u32) -> u32 {
            attack / 5
        }
        fn combat_chance(&self) -> u32 {
            100
        }
        fn stage_type(&self, _stage: u32) -> StageType {
            StageType::Normal
        }
        fn gold_reward(&self, kills: u32, _is_boss: bool) -> u32 {
            kills * 10
        }
        fn artifact_drop_chance(&self, _is_boss: bool) -> u32 {
            0
        }
        fn default_defense(&self) -> Defense {
            Defense::new("Cloth", 10)
        }
    }

    fn hero(element: Element) -> Combatant {
        Combatant::player(
            "Hero",
            element,
            100,
            10,
            5,
            Defense::new("Cloth", 10),
            PlayerExtras {
                class: ClassId(1),
                equipped: Vec::new(),
                artifacts: Vec::new(),
            },
        )
    }

    fn goblin(element: Element) -> Combatant {
        Combatant::enemy("Goblin", element, 50, 10, 0, EnemyRank::Normal)
    }

    #[test]
    fn all_dodged_deals_nothing_and_inflicts_nothing() {
        let skill = Skill::new(SkillId(1), "Bash", 10, Rarity::Common)
            .with_hits(2)
            .with_flags(SkillFlags {
                stun: true,
                ..SkillFlags::NONE
            });
        let mut rng = ScriptedRandom::new([0, 0]);

        let outcome = resolve_attack(
            &hero(Element::Neutral),
            &goblin(Element::Neutral),
            &skill,
            &FlatTables,
            &mut rng,
        );

        assert!(!outcome.any_hit());
        assert_eq!(outcome.total_damage, 0);
        assert_eq!(outcome.hits_attempted, 2);
        assert!(outcome.inflicted.is_empty());
        assert_eq!(outcome.summary, "Bash: all hits missed!");
    }

    #[test]
    fn status_flags_apply_once_for_multi_hit() {
        let skill = Skill::new(SkillId(1), "Flurry", 4, Rarity::Rare)
            .with_hits(3)
            .with_flags(SkillFlags {
                poison: true,
                ..SkillFlags::NONE
            });
        let mut rng = ScriptedRandom::new([50, 50, 50]);

        let outcome = resolve_attack(
            &hero(Element::Neutral),
            &goblin(Element::Neutral),
            &skill,
            &FlatTables,
            &mut rng,
        );

        assert_eq!(outcome.hits_landed, 3);
        assert_eq!(outcome.inflicted, vec![StatusEffectKind::Poison]);
        assert_eq!(outcome.total_damage, 12);
        assert_eq!(outcome.summary, "Flurry: 3/3 hits, 12 total damage!");
    }

    #[test]
    fn elemental_advantage_marks_hit_as_strong() {
        let skill = Skill::new(SkillId(1), "Tide", 10, Rarity::Common).with_element(Element::Water);
        let mut rng = ScriptedRandom::new([50]);

        let outcome = resolve_attack(
            &hero(Element::Fire),
            &goblin(Element::Fire),
            &skill,
            &FlatTables,
            &mut rng,
        );

        assert_eq!(outcome.total_damage, 15);
        assert_eq!(outcome.per_hit_messages, vec!["Hit 1/1: 15 damage (super effective!)"]);
        assert_eq!(outcome.summary, "Tide: 15 damage!");
    }

    #[test]
    fn enemy_attack_adds_bonus_and_respects_player_defense() {
        let enemy = goblin(Element::Neutral);
        let skill = Skill::basic_attack(enemy.attack, enemy.element);
        let mut rng = ScriptedRandom::new([50]);

        let outcome = resolve_attack(
            &enemy,
            &hero(Element::Neutral),
            &skill,
            &FlatTables,
            &mut rng,
        );

        // (10 + 10/5) * 0.9 = 10.8 -> 10
        assert_eq!(outcome.total_damage, 10);
    }

    #[test]
    fn skill_element_falls_back_to_attacker() {
        let skill = Skill::new(SkillId(1), "Punch", 10, Rarity::Common);
        let mut rng = ScriptedRandom::new([50]);

        let outcome = resolve_attack(
            &hero(Element::Fire),
            &goblin(Element::Water),
            &skill,
            &FlatTables,
            &mut rng,
        );

        assert_eq!(outcome.total_damage, 5);
        assert!(outcome.per_hit_messages[0].ends_with("(not very effective...)"));
    }
}
