//! Non-combat events: heal, trap, treasure.

use crate::env::RandomSource;
use crate::error::IntentError;
use crate::state::{Change, EventChoice, EventKind, ModeKind};

use super::{Continuation, GameEngine, Pacing, RollPurpose, Task, Transition};

impl<'a> GameEngine<'a> {
    pub(super) fn choose_event(
        &mut self,
        tx: &mut Transition,
        choice: EventChoice,
        rng: &mut dyn RandomSource,
    ) -> Result<(), IntentError> {
        if self.state.mode.kind() != ModeKind::Event {
            return Err(self.wrong_mode("choose_event"));
        }
        let player_hp = self.state.player().map(|player| player.hp()).ok_or(IntentError::NoRun)?;
        let encounter = self.state.event().ok_or(IntentError::NoRun)?;
        if encounter.rolling {
            return Err(IntentError::RollInFlight);
        }
        if encounter.is_resolved() {
            return Err(IntentError::EventResolved);
        }
        let kind = encounter.event.kind;
        if !kind.accepts(choice) {
            return Err(IntentError::InvalidChoice { choice });
        }

        let outcome = match (kind, choice) {
            (EventKind::Heal(range), EventChoice::Accept) => {
                let amount = rng.range(range.min, range.max);
                self.emit(tx, Change::SetPlayerHp(player_hp.saturating_add(amount)));
                format!("Recovered {amount} HP!")
            }
            (EventKind::Trap(_), EventChoice::Roll) => {
                self.emit(tx, Change::SetEventRolling(true));
                self.schedule(tx, Task::Roll(RollPurpose::Trap));
                return Ok(());
            }
            (EventKind::Trap(_), _) => "You carefully walk around the trap.".to_string(),
            (EventKind::Treasure(range), EventChoice::Open) => {
                let gold = rng.range(range.min, range.max);
                self.emit(tx, Change::AddGold(gold));
                format!("Found {gold} gold in the chest!")
            }
            (EventKind::Treasure(_), _) => "You leave the chest behind.".to_string(),
            (EventKind::Heal(_), _) => "You move on without resting.".to_string(),
        };

        self.finish_event(tx, outcome, Pacing::EventResult, rng);
        Ok(())
    }

    /// The trap roll landed: avoid on a high roll, otherwise take damage.
    pub(super) fn trap_rolled(
        &mut self,
        tx: &mut Transition,
        value: u32,
        rng: &mut dyn RandomSource,
    ) -> bool {
        let Some(encounter) = self.state.event() else {
            return false;
        };
        let EventKind::Trap(range) = encounter.event.kind else {
            return false;
        };
        if !encounter.rolling {
            return false;
        }
        let Some(player_hp) = self.state.player().map(|player| player.hp()) else {
            return false;
        };

        if value >= self.config.trap_avoid_threshold {
            let outcome = format!("Rolled {value}: you dodge the trap!");
            self.finish_event(tx, outcome, Pacing::TrapResult, rng);
            return true;
        }

        let damage = rng.range(range.min, range.max);
        let remaining = player_hp.saturating_sub(damage);
        self.emit(tx, Change::SetPlayerHp(remaining));
        let outcome = format!("Rolled {value}: the trap deals {damage} damage!");

        if remaining == 0 {
            self.emit(tx, Change::ResolveEvent(format!("{outcome} You collapse...")));
            self.after(tx, Pacing::DefeatReset, Continuation::ResetRun);
            return true;
        }

        self.finish_event(tx, outcome, Pacing::TrapResult, rng);
        true
    }

    /// Records the outcome, counts the action and schedules the way out.
    fn finish_event(
        &mut self,
        tx: &mut Transition,
        outcome: String,
        pacing: Pacing,
        rng: &mut dyn RandomSource,
    ) {
        self.emit(tx, Change::ResolveEvent(outcome));
        self.emit(tx, Change::CompleteAction);
        let route = self.route_after_action(rng);
        self.after(tx, pacing, Continuation::ConcludeEvent(route));
    }
}
