//! Run state machine and turn pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`RunState`]. It routes
//! player intents and resumed continuations to the turn controller, the
//! progression engine and the run lifecycle, and records every mutation as a
//! [`Change`] so observers can replay them.
//!
//! Handlers validate first and emit afterwards: an intent that returns an
//! error has not touched the store.

mod events;
mod progression;
mod run;
mod schedule;
mod turns;

pub use schedule::{Continuation, Pacing, RollPurpose, Route, Scheduled, Task, Transition};

use crate::config::GameConfig;
use crate::env::{GameEnv, RandomSource};
use crate::error::IntentError;
use crate::intent::Intent;
use crate::state::{Change, GameMode, RunState};

/// Game engine that applies intents and continuations to the run store.
///
/// The engine is cheap to construct; the runtime builds one per step around
/// the store it owns.
pub struct GameEngine<'a> {
    state: &'a mut RunState,
    env: GameEnv<'a>,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut RunState, env: GameEnv<'a>, config: &'a GameConfig) -> Self {
        Self { state, env, config }
    }

    pub fn state(&self) -> &RunState {
        self.state
    }

    /// Applies a player intent.
    ///
    /// While a return-to-menu confirmation is pending only
    /// [`Intent::ConfirmMenu`] and [`Intent::CancelMenu`] are accepted.
    pub fn handle(
        &mut self,
        intent: Intent,
        rng: &mut dyn RandomSource,
    ) -> Result<Transition, IntentError> {
        if self.state.menu_prompt && !matches!(intent, Intent::ConfirmMenu | Intent::CancelMenu) {
            return Err(IntentError::ConfirmationPending);
        }

        let mut tx = Transition::default();
        match intent {
            Intent::StartGame => self.start_game(&mut tx)?,
            Intent::ChangeCharacter => self.change_character(&mut tx)?,
            Intent::SelectClass(class) => self.select_class(&mut tx, class)?,
            Intent::Proceed => self.proceed(&mut tx, rng)?,
            Intent::OpenSkillInventory => {
                self.open_inventory(&mut tx, "open_skill_inventory", GameMode::SkillInventory)?
            }
            Intent::OpenArtifactInventory => self.open_inventory(
                &mut tx,
                "open_artifact_inventory",
                GameMode::ArtifactInventory,
            )?,
            Intent::SelectSkill(slot) => self.select_skill(&mut tx, slot)?,
            Intent::ChooseEvent(choice) => self.choose_event(&mut tx, choice, rng)?,
            Intent::PickCard(index) => self.pick_card(&mut tx, Some(index))?,
            Intent::SkipCard => self.pick_card(&mut tx, None)?,
            Intent::PickArtifact(index) => self.pick_artifact(&mut tx, Some(index), rng)?,
            Intent::SkipArtifact => self.pick_artifact(&mut tx, None, rng)?,
            Intent::EquipSkills(indices) => self.equip_skills(&mut tx, &indices)?,
            Intent::CloseInventory => self.close_inventory(&mut tx)?,
            Intent::RequestMenu => self.request_menu(&mut tx)?,
            Intent::ConfirmMenu => self.confirm_menu(&mut tx)?,
            Intent::CancelMenu => self.cancel_menu(&mut tx)?,
        }
        Ok(tx)
    }

    /// Runs a continuation scheduled at `generation`.
    ///
    /// Returns `None` when the continuation is stale: the generation moved on
    /// (the run was discarded or restarted) or the store is no longer in the
    /// state the continuation was scheduled for. While the return-to-menu
    /// prompt is open nothing is applied and the continuation is handed back
    /// as [`Task::Hold`].
    pub fn resume(
        &mut self,
        generation: u64,
        continuation: Continuation,
        rng: &mut dyn RandomSource,
    ) -> Option<Transition> {
        if generation != self.state.generation {
            return None;
        }

        let mut tx = Transition::default();
        if self.state.menu_prompt {
            self.schedule(&mut tx, Task::Hold(continuation));
            return Some(tx);
        }

        let applied = match continuation {
            Continuation::Rolled {
                purpose: RollPurpose::Attack { slot },
                value,
            } => self.player_attack(&mut tx, slot, value, rng),
            Continuation::Rolled {
                purpose: RollPurpose::Trap,
                value,
            } => self.trap_rolled(&mut tx, value, rng),
            Continuation::EnemyPhase => self.enemy_phase(&mut tx, rng),
            Continuation::PlayerPhase => self.player_phase(&mut tx),
            Continuation::ConcludeCombat(route) => self.conclude_combat(&mut tx, route),
            Continuation::ConcludeEvent(route) => self.conclude_event(&mut tx, route),
            Continuation::ResetRun => self.reset_run(&mut tx),
        };
        applied.then_some(tx)
    }

    // ===== emission helpers =====

    fn emit(&mut self, tx: &mut Transition, change: Change) {
        self.state.apply(change.clone());
        tx.changes.push(change);
    }

    fn log(&mut self, tx: &mut Transition, line: impl Into<String>) {
        self.emit(tx, Change::AppendLog(line.into()));
    }

    fn schedule(&self, tx: &mut Transition, task: Task) {
        tx.scheduled.push(Scheduled {
            generation: self.state.generation,
            task,
        });
    }

    fn after(&self, tx: &mut Transition, pacing: Pacing, then: Continuation) {
        self.schedule(tx, Task::Delay { pacing, then });
    }

    fn wrong_mode(&self, intent: &'static str) -> IntentError {
        IntentError::WrongMode {
            intent,
            mode: self.state.mode.kind(),
        }
    }
}
