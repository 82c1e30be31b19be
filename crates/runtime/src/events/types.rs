//! Event types for different topics.

use game_core::{Change, ErrorSeverity, Pacing, RollPurpose, RunState};
use serde::{Deserialize, Serialize};

/// Events on the store topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StoreEvent {
    /// A transition was applied.
    Updated {
        /// Intent that caused it, or `None` for a resumed continuation.
        intent: Option<String>,
        changes: Vec<Change>,
        /// Store after the transition.
        state: Box<RunState>,
    },

    /// An intent was refused; the store is unchanged.
    Rejected {
        intent: String,
        error: String,
        severity: ErrorSeverity,
    },
}

/// Events on the dice topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DiceEvent {
    Rolling { purpose: RollPurpose },
    Rolled { purpose: RollPurpose, value: u32 },
    Reset,
}

/// Coarse run milestones derived from applied changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunEvent {
    RunStarted { class: String },
    CombatStarted { enemy: String, boss: bool },
    CombatWon { gold: u32 },
    CombatLost,
    StageAdvanced { stage: u32, layer: u32 },
    LayerCleared { layer: u32 },
    CardAdded { name: String },
    ArtifactAdded { name: String },
    RunDiscarded,
    /// A pacing delay was scheduled.
    Waiting { pacing: Pacing },
}
