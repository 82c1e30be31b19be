//! Status effect tracker.
//!
//! Each combatant side carries one counter per [`StatusEffectKind`]. A counter
//! holds the number of remaining turns; zero means the effect is inactive.
//!
//! Counters change in exactly two ways:
//! - [`StatusEffects::inflict`] overwrites the counter (reapplying resets the
//!   timer rather than stacking).
//! - [`StatusEffects::decay`] lowers every active counter by one at the end of
//!   the side's own phase, saturating at zero.

use strum::{EnumCount, IntoEnumIterator};

/// Timed conditions a skill can inflict.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumCount,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum StatusEffectKind {
    /// Cannot act.
    Stun,
    /// Cannot act.
    Freeze,
    /// Tracked for display; does not gate actions.
    Poison,
}

impl StatusEffectKind {
    /// Whether an active effect of this kind prevents acting.
    pub const fn incapacitates(self) -> bool {
        matches!(self, Self::Stun | Self::Freeze)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Combatant side, used to address per-side status state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }
}

/// Remaining-turn counters for one side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    counters: [u32; StatusEffectKind::COUNT],
}

impl StatusEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `kind` to `turns`, replacing any remaining duration.
    pub fn inflict(&mut self, kind: StatusEffectKind, turns: u32) {
        self.counters[kind.index()] = turns;
    }

    pub fn remaining(&self, kind: StatusEffectKind) -> u32 {
        self.counters[kind.index()]
    }

    pub fn is_active(&self, kind: StatusEffectKind) -> bool {
        self.remaining(kind) > 0
    }

    /// True iff stun or freeze is active.
    pub fn is_incapacitated(&self) -> bool {
        StatusEffectKind::iter().any(|kind| kind.incapacitates() && self.is_active(kind))
    }

    /// Decrements every active counter by one.
    pub fn decay(&mut self) {
        for counter in &mut self.counters {
            *counter = counter.saturating_sub(1);
        }
    }

    /// Active effects with their remaining turns.
    pub fn active(&self) -> impl Iterator<Item = (StatusEffectKind, u32)> + '_ {
        StatusEffectKind::iter()
            .map(|kind| (kind, self.remaining(kind)))
            .filter(|(_, turns)| *turns > 0)
    }

    pub fn is_clear(&self) -> bool {
        self.counters.iter().all(|turns| *turns == 0)
    }
}

/// Status state for both sides of a combat session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideStatuses {
    pub player: StatusEffects,
    pub enemy: StatusEffects,
}

impl SideStatuses {
    pub fn side(&self, side: Side) -> &StatusEffects {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut StatusEffects {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    pub fn is_incapacitated(&self, side: Side) -> bool {
        self.side(side).is_incapacitated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inflict_overwrites_instead_of_stacking() {
        let mut effects = StatusEffects::new();
        effects.inflict(StatusEffectKind::Poison, 3);
        effects.decay();
        effects.inflict(StatusEffectKind::Poison, 3);
        assert_eq!(effects.remaining(StatusEffectKind::Poison), 3);

        effects.inflict(StatusEffectKind::Poison, 1);
        assert_eq!(effects.remaining(StatusEffectKind::Poison), 1);
    }

    #[test]
    fn decay_saturates_at_zero() {
        for initial in 0..5 {
            for steps in 0..8 {
                let mut effects = StatusEffects::new();
                effects.inflict(StatusEffectKind::Freeze, initial);
                for _ in 0..steps {
                    effects.decay();
                }
                assert_eq!(
                    effects.remaining(StatusEffectKind::Freeze),
                    initial.saturating_sub(steps)
                );
            }
        }
    }

    #[test]
    fn only_stun_and_freeze_incapacitate() {
        let mut effects = StatusEffects::new();
        effects.inflict(StatusEffectKind::Poison, 3);
        assert!(!effects.is_incapacitated());

        effects.inflict(StatusEffectKind::Stun, 1);
        assert!(effects.is_incapacitated());

        effects.decay();
        assert!(!effects.is_incapacitated());
        assert_eq!(effects.remaining(StatusEffectKind::Poison), 2);
    }

    #[test]
    fn sides_are_independent() {
        let mut statuses = SideStatuses::default();
        statuses
            .side_mut(Side::Enemy)
            .inflict(StatusEffectKind::Stun, 1);

        assert!(statuses.is_incapacitated(Side::Enemy));
        assert!(!statuses.is_incapacitated(Side::Player));
        assert_eq!(Side::Enemy.opponent(), Side::Player);
    }
}
