//! Combat session: the bounded state of one fight.

use super::combatant::Combatant;
use super::status::{Side, SideStatuses};

/// Phase of the turn controller within a session.
///
/// ```text
/// PlayerReady ─(skill)─▶ PlayerRolling ─(roll)─▶ EnemyPending ─▶ PlayerPending ─▶ PlayerReady
///      │                                  │             │
///      └─(incapacitated: skip)────────────┘             └─▶ Won | Lost
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TurnPhase {
    /// Waiting for the player to pick a skill.
    PlayerReady,
    /// A dice roll for the chosen equipped slot is in flight.
    PlayerRolling { slot: usize },
    /// The enemy phase is scheduled.
    EnemyPending,
    /// The enemy phase is over; the next player phase is scheduled.
    PlayerPending,
    /// Enemy HP reached zero.
    Won,
    /// Player HP reached zero.
    Lost,
}

impl TurnPhase {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatSession {
    pub enemy: Combatant,
    /// Append-only combat log, discarded with the session.
    pub log: Vec<String>,
    /// In-combat turn counter. Starts at 1, +1 per taken or skipped phase.
    pub turn: u32,
    pub phase: TurnPhase,
    pub statuses: SideStatuses,
}

impl CombatSession {
    pub fn new(enemy: Combatant) -> Self {
        Self {
            enemy,
            log: Vec::new(),
            turn: 1,
            phase: TurnPhase::PlayerReady,
            statuses: SideStatuses::default(),
        }
    }

    pub fn is_player_turn(&self) -> bool {
        matches!(
            self.phase,
            TurnPhase::PlayerReady | TurnPhase::PlayerRolling { .. }
        )
    }

    pub fn is_rolling(&self) -> bool {
        matches!(self.phase, TurnPhase::PlayerRolling { .. })
    }

    pub fn is_incapacitated(&self, side: Side) -> bool {
        self.statuses.is_incapacitated(side)
    }

    pub fn is_boss_fight(&self) -> bool {
        self.enemy.rank().is_some_and(|rank| rank.is_boss())
    }
}
