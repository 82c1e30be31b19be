//! Combat resolution and run progression for a turn-based dungeon crawl.
//!
//! `game-core` defines the canonical rules (data model, combat resolver,
//! turn controller, progression, run modes) as pure, synchronous APIs. All
//! state mutation flows through [`engine::GameEngine`] as [`Change`] values;
//! waiting (dice rolls, pacing delays) is handed back to the caller as
//! [`Scheduled`] work tagged with the store generation.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod intent;
pub mod state;

pub use combat::{AttackOutcome, Effectiveness, HitResult, resolve_attack};
pub use config::GameConfig;
pub use engine::{
    Continuation, GameEngine, Pacing, RollPurpose, Route, Scheduled, Task, Transition,
};
pub use env::{
    ClassDefinition, ContentOracle, GameEnv, RandomSource, ScriptedRandom, StageType,
    TablesOracle,
};
pub use error::{ErrorSeverity, GameError, IntentError};
pub use intent::Intent;
pub use state::{
    Artifact, ArtifactEffect, ArtifactId, ArtifactOffer, ArtifactOrigin, CardOffer, Change,
    ClassId, CombatSession, Combatant, Defense, Element, EnemyExtras, EnemyRank, EventChoice,
    EventEncounter, EventKind, EventTemplate, GameMode, ModeKind, PlayerExtras, Rarity, Role, Run,
    RunProgress, RunState, Side, SideStatuses, Skill, SkillFlags, SkillId, StatusEffectKind,
    StatusEffects, TurnPhase, ValueRange,
};
