//! Turn controller: alternating player and enemy phases inside one combat.
//!
//! Each phase ends at a turn boundary that advances the combat turn counter
//! once and decays the statuses of the side that just acted (or was skipped).
//! An incapacitated side is skipped without rolling, which still costs it a
//! boundary, so a one-turn stun blocks exactly one action.

use crate::combat::{AttackOutcome, apply_damage, resolve_attack};
use crate::env::RandomSource;
use crate::error::IntentError;
use crate::state::{Change, Combatant, ModeKind, Side, Skill, StatusEffectKind, TurnPhase};

use super::{Continuation, GameEngine, Pacing, RollPurpose, Task, Transition};

impl<'a> GameEngine<'a> {
    /// Starts the player's action: validates the slot and asks for a roll.
    pub(super) fn select_skill(
        &mut self,
        tx: &mut Transition,
        slot: usize,
    ) -> Result<(), IntentError> {
        if self.state.mode.kind() != ModeKind::Combat {
            return Err(self.wrong_mode("select_skill"));
        }
        let run = self.state.run.as_ref().ok_or(IntentError::NoRun)?;
        let session = self.state.session().ok_or(IntentError::NoSession)?;

        match session.phase {
            TurnPhase::PlayerReady => {}
            TurnPhase::PlayerRolling { .. } => return Err(IntentError::RollInFlight),
            _ => return Err(IntentError::NotPlayerTurn),
        }

        let equipped = run.equipped().len();
        if slot >= equipped {
            return Err(IntentError::InvalidSkillSlot { slot, equipped });
        }

        self.emit(tx, Change::SetPhase(TurnPhase::PlayerRolling { slot }));
        self.schedule(tx, Task::Roll(RollPurpose::Attack { slot }));
        Ok(())
    }

    /// The roll for the player's skill landed.
    pub(super) fn player_attack(
        &mut self,
        tx: &mut Transition,
        slot: usize,
        _roll: u32,
        rng: &mut dyn RandomSource,
    ) -> bool {
        let Some(session) = self.state.session() else {
            return false;
        };
        if session.phase != (TurnPhase::PlayerRolling { slot }) {
            return false;
        }
        let Some(run) = self.state.run.as_ref() else {
            return false;
        };
        let Some(skill) = run.equipped().get(slot).cloned() else {
            return false;
        };

        let turn = session.turn;
        let player = run.player.clone();
        let enemy = session.enemy.clone();

        self.log(tx, format!("[Turn {turn}] {} attacks!", player.name));
        let outcome = resolve_attack(&player, &enemy, &skill, self.env.tables(), rng);
        self.record_outcome(tx, &skill, &outcome, &enemy, Side::Enemy);

        let enemy_hp = apply_damage(enemy.hp(), outcome.total_damage);
        self.emit(tx, Change::SetEnemyHp(enemy_hp));

        if enemy_hp == 0 {
            self.combat_won(tx, &enemy, rng);
            return true;
        }

        self.end_phase(tx, Side::Player);
        true
    }

    /// Enemy phase: skipped when incapacitated, otherwise a basic attack.
    pub(super) fn enemy_phase(
        &mut self,
        tx: &mut Transition,
        rng: &mut dyn RandomSource,
    ) -> bool {
        let Some(session) = self.state.session() else {
            return false;
        };
        if session.phase != TurnPhase::EnemyPending {
            return false;
        }
        let Some(player) = self.state.player().cloned() else {
            return false;
        };

        let turn = session.turn;
        let enemy = session.enemy.clone();

        if session.is_incapacitated(Side::Enemy) {
            self.log(tx, format!("[Turn {turn}] {} cannot act!", enemy.name));
            self.end_phase(tx, Side::Enemy);
            return true;
        }

        self.log(tx, format!("[Turn {turn}] {} attacks!", enemy.name));
        let skill = Skill::basic_attack(enemy.attack, enemy.element);
        let outcome = resolve_attack(&enemy, &player, &skill, self.env.tables(), rng);
        self.record_outcome(tx, &skill, &outcome, &player, Side::Player);

        let player_hp = apply_damage(player.hp(), outcome.total_damage);
        self.emit(tx, Change::SetPlayerHp(player_hp));

        if player_hp == 0 {
            self.combat_lost(tx);
            return true;
        }

        self.end_phase(tx, Side::Enemy);
        true
    }

    /// Re-enters `PlayerReady`, skipping straight to the enemy if the player
    /// cannot act.
    pub(super) fn player_phase(&mut self, tx: &mut Transition) -> bool {
        let Some(session) = self.state.session() else {
            return false;
        };
        if session.phase != TurnPhase::PlayerPending {
            return false;
        }

        let turn = session.turn;
        let skipped = session.is_incapacitated(Side::Player);

        self.emit(tx, Change::SetPhase(TurnPhase::PlayerReady));
        if skipped {
            let name = self
                .state
                .player()
                .map(|player| player.name.clone())
                .unwrap_or_default();
            self.log(tx, format!("[Turn {turn}] {name} cannot act!"));
            self.end_phase(tx, Side::Player);
        }
        true
    }

    /// Turn boundary after `side` acted or was skipped.
    fn end_phase(&mut self, tx: &mut Transition, side: Side) {
        self.emit(tx, Change::AdvanceCombatTurn);
        self.emit(tx, Change::DecayStatus(side));
        match side {
            Side::Player => {
                self.emit(tx, Change::SetPhase(TurnPhase::EnemyPending));
                self.after(tx, Pacing::EnemyPhase, Continuation::EnemyPhase);
            }
            Side::Enemy => {
                self.emit(tx, Change::SetPhase(TurnPhase::PlayerPending));
                self.after(tx, Pacing::PhaseSwitch, Continuation::PlayerPhase);
            }
        }
    }

    /// Logs an attack and applies its status effects to `target_side`.
    fn record_outcome(
        &mut self,
        tx: &mut Transition,
        skill: &Skill,
        outcome: &AttackOutcome,
        target: &Combatant,
        target_side: Side,
    ) {
        if skill.is_multi_hit() {
            self.log(
                tx,
                format!("{} ({}-hit combo):", skill.name, outcome.hits_attempted),
            );
            for line in &outcome.per_hit_messages {
                self.log(tx, format!("  └ {line}"));
            }
        }
        self.log(tx, outcome.summary.clone());

        for &kind in &outcome.inflicted {
            let turns = self.config.status_turns(kind);
            self.emit(
                tx,
                Change::InflictStatus {
                    side: target_side,
                    kind,
                    turns,
                },
            );
            self.log(tx, status_line(&target.name, kind, turns));
        }
    }

    fn combat_lost(&mut self, tx: &mut Transition) {
        self.log(tx, "Game over...");
        self.log(tx, "=== Combat End ===");
        self.emit(tx, Change::SetPhase(TurnPhase::Lost));
        self.after(tx, Pacing::DefeatReset, Continuation::ResetRun);
    }
}

fn status_line(name: &str, kind: StatusEffectKind, turns: u32) -> String {
    let (verb, note) = match kind {
        StatusEffectKind::Stun => ("stunned", "cannot act"),
        StatusEffectKind::Freeze => ("frozen", "cannot act"),
        StatusEffectKind::Poison => ("poisoned", "lasts"),
    };
    let unit = if turns == 1 { "turn" } else { "turns" };
    format!("{name} is {verb}! ({note} for {turns} {unit})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_lines_pluralize_turns() {
        assert_eq!(
            status_line("Goblin", StatusEffectKind::Stun, 1),
            "Goblin is stunned! (cannot act for 1 turn)"
        );
        assert_eq!(
            status_line("Goblin", StatusEffectKind::Poison, 3),
            "Goblin is poisoned! (lasts for 3 turns)"
        );
    }
}
