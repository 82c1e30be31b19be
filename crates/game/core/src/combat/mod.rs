//! Combat resolution system.
//!
//! This module provides pure functions for resolving one skill use against a
//! defender. Randomness comes in through a [`RandomSource`] and nothing here
//! touches the run store; the turn controller folds the returned
//! [`AttackOutcome`] into state.
//!
//! # Core Functions
//!
//! - `resolve_attack`: Complete multi-hit resolution (dodge + damage + effects)
//! - `is_dodged`: Per-hit dodge check against the defender's luck
//! - `damage_with_artifacts` / `defense_with_artifacts`: Artifact transforms
//! - `apply_defense`, `apply_elemental`, `final_damage`: Damage pipeline steps
//!
//! [`RandomSource`]: crate::env::RandomSource

pub mod artifacts;
pub mod damage;
pub mod hit;
pub mod result;

pub use artifacts::{damage_with_artifacts, defense_with_artifacts};
pub use damage::{Effectiveness, apply_damage, apply_defense, apply_elemental, final_damage};
pub use hit::is_dodged;
pub use result::{AttackOutcome, HitResult, resolve_attack};
