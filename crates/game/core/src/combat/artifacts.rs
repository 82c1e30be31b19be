//! Artifact transforms.
//!
//! The resolver treats artifacts as two pure functions: one applied to the
//! player's outgoing damage, one to damage the player receives.

use crate::state::{Artifact, ArtifactEffect, Combatant, Skill};

/// Highest total percentage the defensive artifacts may remove.
pub const MAX_ARTIFACT_REDUCTION: u32 = 90;

/// Outgoing damage after the player's artifacts.
///
/// Flat bonuses are added first, then all applicable percentage bonuses are
/// summed and applied once.
pub fn damage_with_artifacts(
    base: f64,
    skill: &Skill,
    artifacts: &[Artifact],
    defender: &Combatant,
) -> f64 {
    let against_boss = defender.rank().is_some_and(|rank| rank.is_boss());

    let (flat, percent) =
        artifacts
            .iter()
            .fold((0u32, 0u32), |(flat, percent), artifact| match artifact.effect {
                ArtifactEffect::FlatDamage(amount) => (flat.saturating_add(amount), percent),
                ArtifactEffect::PercentDamage(bonus) => (flat, percent.saturating_add(bonus)),
                ArtifactEffect::ElementDamage { element, percent: bonus }
                    if skill.element == Some(element) =>
                {
                    (flat, percent.saturating_add(bonus))
                }
                ArtifactEffect::BossDamage(bonus) if against_boss => {
                    (flat, percent.saturating_add(bonus))
                }
                _ => (flat, percent),
            });

    (base + f64::from(flat)) * (100.0 + f64::from(percent)) / 100.0
}

/// Incoming damage after the player's defensive artifacts.
pub fn defense_with_artifacts(incoming: f64, artifacts: &[Artifact]) -> f64 {
    let (reduction, block) =
        artifacts
            .iter()
            .fold((0u32, 0u32), |(reduction, block), artifact| match artifact.effect {
                ArtifactEffect::DamageReduction(percent) => {
                    (reduction.saturating_add(percent), block)
                }
                ArtifactEffect::FlatBlock(amount) => (reduction, block.saturating_add(amount)),
                _ => (reduction, block),
            });

    let kept = 100 - reduction.min(MAX_ARTIFACT_REDUCTION);
    (incoming * f64::from(kept) / 100.0 - f64::from(block)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ArtifactId, Element, EnemyRank, Rarity, SkillId};

    fn artifact(id: u32, effect: ArtifactEffect) -> Artifact {
        Artifact::new(ArtifactId(id), "test", "", Rarity::Common, effect)
    }

    fn fire_skill() -> Skill {
        Skill::new(SkillId(1), "Ember", 10, Rarity::Common).with_element(Element::Fire)
    }

    #[test]
    fn no_artifacts_is_identity() {
        let boss = Combatant::enemy("Lich", Element::Dark, 200, 20, 3, EnemyRank::Boss);
        assert_eq!(damage_with_artifacts(10.0, &fire_skill(), &[], &boss), 10.0);
        assert_eq!(defense_with_artifacts(10.0, &[]), 10.0);
    }

    #[test]
    fn offensive_bonuses_stack_flat_then_percent() {
        let goblin = Combatant::enemy("Goblin", Element::Earth, 30, 5, 0, EnemyRank::Normal);
        let artifacts = [
            artifact(1, ArtifactEffect::FlatDamage(2)),
            artifact(2, ArtifactEffect::PercentDamage(50)),
            artifact(
                3,
                ArtifactEffect::ElementDamage {
                    element: Element::Fire,
                    percent: 50,
                },
            ),
            artifact(4, ArtifactEffect::BossDamage(100)),
        ];

        // (10 + 2) * 2.0, boss bonus not applicable
        assert_eq!(damage_with_artifacts(10.0, &fire_skill(), &artifacts, &goblin), 24.0);
    }

    #[test]
    fn defensive_artifacts_never_go_negative() {
        let artifacts = [
            artifact(1, ArtifactEffect::DamageReduction(200)),
            artifact(2, ArtifactEffect::FlatBlock(5)),
        ];
        assert_eq!(defense_with_artifacts(100.0, &artifacts), 5.0);
        assert_eq!(defense_with_artifacts(10.0, &artifacts), 0.0);
    }
}
