//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and rejected intents so clients
//! can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::{ErrorSeverity, GameError, IntentError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("intent rejected: {0}")]
    Rejected(#[from] IntentError),

    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}

impl RuntimeError {
    /// The underlying rejection, if the engine refused the intent.
    pub fn as_rejection(&self) -> Option<&IntentError> {
        match self {
            Self::Rejected(error) => Some(error),
            _ => None,
        }
    }

    /// Rejections carry the engine's severity; channel failures are fatal.
    pub fn severity(&self) -> Option<ErrorSeverity> {
        self.as_rejection().map(|error| error.severity())
    }
}
