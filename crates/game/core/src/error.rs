//! Common error infrastructure for game-core.
//!
//! Rejected intents surface as [`IntentError`]. The engine validates an intent
//! completely before emitting any change, so an error always means the store
//! was left untouched.

use crate::state::{ClassId, EventChoice, ModeKind};

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same intent may succeed later (e.g. once a roll lands)
/// - **Validation**: invalid input that should be rejected without retry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all game-core errors.
///
/// Provides a uniform interface for error classification so callers can pick
/// a log level without matching on every variant.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Reasons an [`Intent`](crate::Intent) is rejected as a no-op.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IntentError {
    #[error("{intent} is not available in {mode} mode")]
    WrongMode { intent: &'static str, mode: ModeKind },

    #[error("no run in progress")]
    NoRun,

    #[error("no combat session")]
    NoSession,

    #[error("it is not the player's turn")]
    NotPlayerTurn,

    #[error("a dice roll is already in flight")]
    RollInFlight,

    #[error("skill slot {slot} is empty (hand holds {equipped})")]
    InvalidSkillSlot { slot: usize, equipped: usize },

    #[error("selection {index} is out of range or repeated ({available} available)")]
    InvalidSelection { index: usize, available: usize },

    #[error("hand must hold between 1 and {limit} skills, got {requested}")]
    HandSize { requested: usize, limit: usize },

    #[error("choice {choice} does not apply to this event")]
    InvalidChoice { choice: EventChoice },

    #[error("event already resolved")]
    EventResolved,

    #[error("unknown class {0:?}")]
    UnknownClass(ClassId),

    #[error("no return-to-menu confirmation is pending")]
    NoPendingConfirmation,

    #[error("a return-to-menu confirmation is pending")]
    ConfirmationPending,
}

impl GameError for IntentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotPlayerTurn | Self::RollInFlight | Self::ConfirmationPending => {
                ErrorSeverity::Recoverable
            }
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::WrongMode { .. } => "WRONG_MODE",
            Self::NoRun => "NO_RUN",
            Self::NoSession => "NO_SESSION",
            Self::NotPlayerTurn => "NOT_PLAYER_TURN",
            Self::RollInFlight => "ROLL_IN_FLIGHT",
            Self::InvalidSkillSlot { .. } => "INVALID_SKILL_SLOT",
            Self::InvalidSelection { .. } => "INVALID_SELECTION",
            Self::HandSize { .. } => "HAND_SIZE",
            Self::InvalidChoice { .. } => "INVALID_CHOICE",
            Self::EventResolved => "EVENT_RESOLVED",
            Self::UnknownClass(_) => "UNKNOWN_CLASS",
            Self::NoPendingConfirmation => "NO_PENDING_CONFIRMATION",
            Self::ConfirmationPending => "CONFIRMATION_PENDING",
        }
    }
}
