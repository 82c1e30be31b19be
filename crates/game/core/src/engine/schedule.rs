//! Deferred work requested by the engine.
//!
//! The engine never sleeps and never rolls dice. When a step has to wait for
//! pacing or for the dice service it returns a [`Scheduled`] task; the runtime
//! performs it and feeds the resulting [`Continuation`] back through
//! [`GameEngine::resume`](super::GameEngine::resume). Every task is stamped
//! with the store generation at scheduling time, and a continuation whose
//! generation no longer matches is dropped. A continuation that arrives while
//! the return-to-menu prompt is open comes back as [`Task::Hold`].

use crate::state::{Artifact, Change, Skill};

/// Pacing slots. The runtime maps each to a configurable delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Pacing {
    /// Between the player's action and the enemy phase.
    EnemyPhase,
    /// Between the enemy phase and the next player phase.
    PhaseSwitch,
    /// Victory screen before rewards.
    CombatReward,
    /// Defeat screen before the run resets.
    DefeatReset,
    /// Event outcome before moving on.
    EventResult,
    /// Trap roll outcome before moving on.
    TrapResult,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RollPurpose {
    /// The player's skill in this hand slot.
    Attack { slot: usize },
    /// A trap avoidance check.
    Trap,
}

/// Where the run goes once a combat or event is finished.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Route {
    ArtifactSelect(Vec<Artifact>),
    CardReward(Vec<Skill>),
    Advance,
}

/// Step the engine runs when a scheduled task completes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Continuation {
    Rolled { purpose: RollPurpose, value: u32 },
    EnemyPhase,
    PlayerPhase,
    ConcludeCombat(Route),
    ConcludeEvent(Route),
    ResetRun,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Task {
    /// Roll the dice, then resume with [`Continuation::Rolled`].
    Roll(RollPurpose),
    /// Wait for `pacing`, then resume with `then`.
    Delay { pacing: Pacing, then: Continuation },
    /// Clear any displayed dice result. Nothing to resume.
    ResetDice,
    /// Resume `then` once the return-to-menu prompt closes.
    Hold(Continuation),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scheduled {
    pub generation: u64,
    pub task: Task,
}

/// Changes applied by one engine step, in order, plus the work it scheduled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub changes: Vec<Change>,
    pub scheduled: Vec<Scheduled>,
}

impl Transition {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.scheduled.is_empty()
    }

    /// Continuations scheduled behind a delay, in order.
    pub fn delayed(&self) -> impl Iterator<Item = (Pacing, &Continuation)> {
        self.scheduled.iter().filter_map(|scheduled| match &scheduled.task {
            Task::Delay { pacing, then } => Some((*pacing, then)),
            _ => None,
        })
    }

    /// Rolls requested by this step.
    pub fn rolls(&self) -> impl Iterator<Item = RollPurpose> + '_ {
        self.scheduled.iter().filter_map(|scheduled| match scheduled.task {
            Task::Roll(purpose) => Some(purpose),
            _ => None,
        })
    }
}
