//! Named mutations of the run store.
//!
//! The engine never writes to [`RunState`] fields directly. Every mutation is
//! expressed as a [`Change`], applied with [`RunState::apply`], and recorded
//! so observers can re-render after each one.

use super::artifact::Artifact;
use super::combatant::ClassId;
use super::mode::GameMode;
use super::session::TurnPhase;
use super::skill::Skill;
use super::status::{Side, StatusEffectKind};
use super::{Run, RunState};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Change {
    // ===== run lifecycle =====
    SetMode(GameMode),
    BeginRun(Box<Run>),
    /// Drops the run (progress and any combat session) and returns to the menu.
    DiscardRun,
    RememberClass(ClassId),
    /// Invalidates every continuation scheduled so far.
    BumpGeneration,
    SetMenuPrompt(bool),

    // ===== combatants =====
    SetPlayerHp(u32),
    RestorePlayerHp,
    SetEnemyHp(u32),

    // ===== combat session =====
    AppendLog(String),
    SetPhase(TurnPhase),
    AdvanceCombatTurn,
    InflictStatus {
        side: Side,
        kind: StatusEffectKind,
        turns: u32,
    },
    DecayStatus(Side),

    // ===== events =====
    SetEventRolling(bool),
    ResolveEvent(String),

    // ===== progression =====
    AddGold(u32),
    RecordKill,
    CompleteAction,
    AdvanceStage,
    AdvanceLayer,

    // ===== collection =====
    AddSkill(Skill),
    EquipSkills(Vec<Skill>),
    AddArtifact(Artifact),
}

impl RunState {
    /// Applies a single change.
    ///
    /// Changes that target state which does not exist (e.g. enemy HP outside
    /// combat) are ignored; the engine validates before emitting them.
    pub fn apply(&mut self, change: Change) {
        match change {
            Change::SetMode(mode) => self.mode = mode,
            Change::BeginRun(run) => self.run = Some(*run),
            Change::DiscardRun => {
                self.run = None;
                self.menu_prompt = false;
                self.mode = GameMode::Menu;
            }
            Change::RememberClass(class) => self.selected_class = Some(class),
            Change::BumpGeneration => self.generation = self.generation.wrapping_add(1),
            Change::SetMenuPrompt(open) => self.menu_prompt = open,

            Change::SetPlayerHp(hp) => {
                if let Some(run) = self.run.as_mut() {
                    run.player.set_hp(hp);
                }
            }
            Change::RestorePlayerHp => {
                if let Some(run) = self.run.as_mut() {
                    run.player.restore_full();
                }
            }
            Change::SetEnemyHp(hp) => {
                if let Some(session) = self.mode.session_mut() {
                    session.enemy.set_hp(hp);
                }
            }

            Change::AppendLog(line) => {
                if let Some(session) = self.mode.session_mut() {
                    session.log.push(line);
                }
            }
            Change::SetPhase(phase) => {
                if let Some(session) = self.mode.session_mut() {
                    session.phase = phase;
                }
            }
            Change::AdvanceCombatTurn => {
                if let Some(session) = self.mode.session_mut() {
                    session.turn += 1;
                }
            }
            Change::InflictStatus { side, kind, turns } => {
                if let Some(session) = self.mode.session_mut() {
                    session.statuses.side_mut(side).inflict(kind, turns);
                }
            }
            Change::DecayStatus(side) => {
                if let Some(session) = self.mode.session_mut() {
                    session.statuses.side_mut(side).decay();
                }
            }

            Change::SetEventRolling(rolling) => {
                if let Some(encounter) = self.mode.event_mut() {
                    encounter.rolling = rolling;
                }
            }
            Change::ResolveEvent(outcome) => {
                if let Some(encounter) = self.mode.event_mut() {
                    encounter.rolling = false;
                    encounter.outcome = Some(outcome);
                }
            }

            Change::AddGold(amount) => {
                if let Some(run) = self.run.as_mut() {
                    run.progress.gold = run.progress.gold.saturating_add(amount);
                }
            }
            Change::RecordKill => {
                if let Some(run) = self.run.as_mut() {
                    run.progress.kill_count += 1;
                }
            }
            Change::CompleteAction => {
                if let Some(run) = self.run.as_mut() {
                    run.progress.total_turns += 1;
                }
            }
            Change::AdvanceStage => {
                if let Some(run) = self.run.as_mut() {
                    run.progress.stage += 1;
                }
            }
            Change::AdvanceLayer => {
                if let Some(run) = self.run.as_mut() {
                    run.progress.layer += 1;
                    run.progress.stage = 1;
                    run.player.restore_full();
                }
            }

            Change::AddSkill(skill) => {
                if let Some(run) = self.run.as_mut() {
                    run.inventory.push(skill);
                }
            }
            Change::EquipSkills(skills) => {
                if let Some(extras) = self.run.as_mut().and_then(|run| run.player.as_player_mut())
                {
                    extras.equipped = skills;
                }
            }
            Change::AddArtifact(artifact) => {
                if let Some(extras) = self.run.as_mut().and_then(|run| run.player.as_player_mut())
                {
                    extras.artifacts.push(artifact);
                }
            }
        }
    }
}
