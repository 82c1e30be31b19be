//! Progression engine: encounters, rewards and stage advancement.
//!
//! A finished combat or event counts as exactly one completed action. The
//! card-reward cadence is checked right after that increment; an artifact
//! drop from combat defers the check until the artifact is picked or skipped.

use crate::env::{RandomSource, StageType};
use crate::error::IntentError;
use crate::state::{
    Artifact, ArtifactOffer, ArtifactOrigin, CardOffer, Change, CombatSession, Combatant,
    EnemyRank, EventEncounter, GameMode, ModeKind, Skill, TurnPhase,
};

use super::{Continuation, GameEngine, Pacing, Route, Task, Transition};

impl<'a> GameEngine<'a> {
    /// Rolls the next encounter for the current stage.
    pub(super) fn proceed(
        &mut self,
        tx: &mut Transition,
        rng: &mut dyn RandomSource,
    ) -> Result<(), IntentError> {
        if self.state.mode.kind() != ModeKind::Exploring {
            return Err(self.wrong_mode("proceed"));
        }
        let progress = self.state.progress().copied().ok_or(IntentError::NoRun)?;

        self.schedule(tx, Task::ResetDice);

        let tables = self.env.tables();
        let content = self.env.content();
        if rng.chance(tables.combat_chance()) {
            let enemy = match tables.stage_type(progress.stage) {
                StageType::Normal => content.monster(progress.layer, rng),
                StageType::MiniBoss => {
                    content.boss(EnemyRank::MiniBoss, progress.stage, progress.layer, rng)
                }
                StageType::Boss => {
                    content.boss(EnemyRank::Boss, progress.stage, progress.layer, rng)
                }
            };
            self.start_combat(tx, enemy);
        } else {
            let event = content.event(rng);
            self.emit(tx, Change::SetMode(GameMode::Event(EventEncounter::new(event))));
        }
        Ok(())
    }

    fn start_combat(&mut self, tx: &mut Transition, enemy: Combatant) {
        let name = enemy.name.clone();
        self.emit(tx, Change::SetMode(GameMode::Combat(CombatSession::new(enemy))));
        self.log(tx, "=== Combat Start ===");
        self.log(tx, format!("The battle with {name} begins!"));
    }

    /// Enemy HP reached zero: pay out, count the action, pick the route.
    pub(super) fn combat_won(
        &mut self,
        tx: &mut Transition,
        enemy: &Combatant,
        rng: &mut dyn RandomSource,
    ) {
        let is_boss = enemy.rank().is_some_and(EnemyRank::is_boss);
        let tables = self.env.tables();
        let gold = tables.gold_reward(1, is_boss);

        self.emit(tx, Change::SetPhase(TurnPhase::Won));
        self.log(tx, format!("{} was defeated!", enemy.name));
        self.log(tx, format!("Gained {gold} gold!"));
        self.emit(tx, Change::AddGold(gold));
        self.emit(tx, Change::RecordKill);
        self.emit(tx, Change::CompleteAction);

        let drop = if rng.chance(tables.artifact_drop_chance(is_boss)) {
            self.artifact_drop(is_boss, rng)
        } else {
            Vec::new()
        };

        let route = if drop.is_empty() {
            self.route_after_action(rng)
        } else {
            self.log(tx, "Found an artifact!");
            Route::ArtifactSelect(drop)
        };
        self.log(tx, "=== Combat End ===");
        self.after(tx, Pacing::CombatReward, Continuation::ConcludeCombat(route));
    }

    fn artifact_drop(&self, is_boss: bool, rng: &mut dyn RandomSource) -> Vec<Artifact> {
        let Some(run) = self.state.run.as_ref() else {
            return Vec::new();
        };
        let Some(class) = run.class() else {
            return Vec::new();
        };
        self.env
            .content()
            .artifact_drop(class, run.artifacts(), is_boss, rng)
    }

    /// Card reward when the cadence is due, otherwise plain advancement.
    pub(super) fn route_after_action(&self, rng: &mut dyn RandomSource) -> Route {
        let due = self
            .state
            .progress()
            .is_some_and(|progress| progress.card_reward_due(self.config.card_reward_cadence));
        if !due {
            return Route::Advance;
        }

        let cards = self.card_offer(rng);
        if cards.is_empty() {
            Route::Advance
        } else {
            Route::CardReward(cards)
        }
    }

    /// Up to `card_reward_size` distinct cards from the class pool.
    fn card_offer(&self, rng: &mut dyn RandomSource) -> Vec<Skill> {
        let Some(class) = self.state.run.as_ref().and_then(|run| run.class()) else {
            return Vec::new();
        };

        let mut pool: Vec<&Skill> = Vec::new();
        for skill in self.env.content().card_pool(class) {
            if !pool.iter().any(|seen| seen.id == skill.id) {
                pool.push(skill);
            }
        }

        let wanted = self.config.card_reward_size.min(pool.len());
        let mut offer = Vec::with_capacity(wanted);
        while offer.len() < wanted {
            let upper = u32::try_from(pool.len()).unwrap_or(u32::MAX);
            let index = (rng.below(upper) as usize).min(pool.len() - 1);
            offer.push(pool.swap_remove(index).clone());
        }
        offer
    }

    pub(super) fn conclude_combat(&mut self, tx: &mut Transition, route: Route) -> bool {
        let won = self
            .state
            .session()
            .is_some_and(|session| session.phase == TurnPhase::Won);
        if !won {
            return false;
        }
        self.follow_route(tx, route);
        true
    }

    pub(super) fn conclude_event(&mut self, tx: &mut Transition, route: Route) -> bool {
        if !self.state.event().is_some_and(|event| event.is_resolved()) {
            return false;
        }
        self.schedule(tx, Task::ResetDice);
        self.follow_route(tx, route);
        true
    }

    fn follow_route(&mut self, tx: &mut Transition, route: Route) {
        let mode = match route {
            Route::ArtifactSelect(artifacts) => GameMode::ArtifactSelect(ArtifactOffer {
                artifacts,
                origin: ArtifactOrigin::CombatDrop,
            }),
            Route::CardReward(cards) => GameMode::CardReward(CardOffer { cards }),
            Route::Advance => {
                self.advance_stage(tx);
                GameMode::Exploring
            }
        };
        self.emit(tx, Change::SetMode(mode));
    }

    /// Next stage, or the next layer (with a full heal) after the last one.
    fn advance_stage(&mut self, tx: &mut Transition) {
        let layer_end = self
            .state
            .progress()
            .is_some_and(|progress| progress.is_layer_end(self.config.stages_per_layer));
        if layer_end {
            self.emit(tx, Change::AdvanceLayer);
        } else {
            self.emit(tx, Change::AdvanceStage);
        }
    }

    /// Takes the offered card at `index`, or nothing when skipping.
    pub(super) fn pick_card(
        &mut self,
        tx: &mut Transition,
        index: Option<usize>,
    ) -> Result<(), IntentError> {
        let GameMode::CardReward(offer) = &self.state.mode else {
            return Err(self.wrong_mode(if index.is_some() { "pick_card" } else { "skip_card" }));
        };

        let card = match index {
            Some(index) => Some(offer.cards.get(index).cloned().ok_or(
                IntentError::InvalidSelection {
                    index,
                    available: offer.cards.len(),
                },
            )?),
            None => None,
        };

        if let Some(card) = card {
            self.emit(tx, Change::AddSkill(card));
        }
        self.emit(tx, Change::SetMode(GameMode::Exploring));
        Ok(())
    }

    /// Takes the offered artifact at `index`, or nothing when skipping.
    ///
    /// A combat drop resumes the progression it interrupted.
    pub(super) fn pick_artifact(
        &mut self,
        tx: &mut Transition,
        index: Option<usize>,
        rng: &mut dyn RandomSource,
    ) -> Result<(), IntentError> {
        let GameMode::ArtifactSelect(offer) = &self.state.mode else {
            return Err(self.wrong_mode(if index.is_some() {
                "pick_artifact"
            } else {
                "skip_artifact"
            }));
        };

        let artifact = match index {
            Some(index) => Some(offer.artifacts.get(index).cloned().ok_or(
                IntentError::InvalidSelection {
                    index,
                    available: offer.artifacts.len(),
                },
            )?),
            None => None,
        };
        let origin = offer.origin;

        if let Some(artifact) = artifact {
            self.emit(tx, Change::AddArtifact(artifact));
        }
        match origin {
            ArtifactOrigin::Starting => self.emit(tx, Change::SetMode(GameMode::Exploring)),
            ArtifactOrigin::CombatDrop => {
                let route = self.route_after_action(rng);
                self.follow_route(tx, route);
            }
        }
        Ok(())
    }
}
