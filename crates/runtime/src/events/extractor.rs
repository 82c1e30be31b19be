//! Run milestones derived from applied changes.
//!
//! Turns the low-level [`Change`] list of one transition into the
//! [`RunEvent`]s presentation layers and logs care about.

use game_core::{Change, GameMode, RunState, TurnPhase};

use super::types::RunEvent;

/// Extract run milestones from one transition.
///
/// `state_after` is the store once every change has been applied; stage and
/// layer numbers are read from it.
pub fn extract_run_events(changes: &[Change], state_after: &RunState) -> Vec<RunEvent> {
    let mut events = Vec::new();
    let mut won = false;
    let progress = state_after.progress();

    for change in changes {
        match change {
            Change::BeginRun(run) => events.push(RunEvent::RunStarted {
                class: run.player.name.clone(),
            }),
            Change::SetMode(GameMode::Combat(session)) => events.push(RunEvent::CombatStarted {
                enemy: session.enemy.name.clone(),
                boss: session.is_boss_fight(),
            }),
            Change::SetPhase(TurnPhase::Won) => won = true,
            Change::SetPhase(TurnPhase::Lost) => events.push(RunEvent::CombatLost),
            Change::AddGold(gold) if won => {
                events.push(RunEvent::CombatWon { gold: *gold });
                won = false;
            }
            Change::AdvanceStage => {
                if let Some(progress) = progress {
                    events.push(RunEvent::StageAdvanced {
                        stage: progress.stage,
                        layer: progress.layer,
                    });
                }
            }
            Change::AdvanceLayer => {
                if let Some(progress) = progress {
                    events.push(RunEvent::LayerCleared {
                        layer: progress.layer.saturating_sub(1),
                    });
                    events.push(RunEvent::StageAdvanced {
                        stage: progress.stage,
                        layer: progress.layer,
                    });
                }
            }
            Change::AddSkill(skill) => events.push(RunEvent::CardAdded {
                name: skill.name.clone(),
            }),
            Change::AddArtifact(artifact) => events.push(RunEvent::ArtifactAdded {
                name: artifact.name.clone(),
            }),
            Change::DiscardRun => events.push(RunEvent::RunDiscarded),
            _ => {}
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gold_outside_a_win_is_not_a_combat_reward() {
        let state = RunState::new();
        let events = extract_run_events(&[Change::AddGold(30)], &state);
        assert!(events.is_empty());
    }

    #[test]
    fn win_then_gold_reports_the_reward() {
        let state = RunState::new();
        let events = extract_run_events(
            &[
                Change::SetPhase(TurnPhase::Won),
                Change::AppendLog("Goblin was defeated!".into()),
                Change::AddGold(15),
                Change::RecordKill,
            ],
            &state,
        );
        assert_eq!(events, vec![RunEvent::CombatWon { gold: 15 }]);
    }

    #[test]
    fn discard_is_reported() {
        let state = RunState::new();
        let events = extract_run_events(&[Change::DiscardRun, Change::BumpGeneration], &state);
        assert_eq!(events, vec![RunEvent::RunDiscarded]);
    }
}
