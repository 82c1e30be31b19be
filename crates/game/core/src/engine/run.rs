//! Run lifecycle: menu, character creation, inventories, return to menu.

use crate::error::IntentError;
use crate::state::{
    ArtifactOffer, ArtifactOrigin, Change, ClassId, Combatant, GameMode, ModeKind, PlayerExtras,
    Rarity, Run, Skill,
};

use super::{GameEngine, Transition};

impl<'a> GameEngine<'a> {
    pub(super) fn start_game(&mut self, tx: &mut Transition) -> Result<(), IntentError> {
        if self.state.mode.kind() != ModeKind::Menu {
            return Err(self.wrong_mode("start_game"));
        }

        let remembered = self
            .state
            .selected_class
            .filter(|class| self.env.content().class(*class).is_some());
        match remembered {
            Some(class) => self.begin_run(tx, class),
            None => self.emit(tx, Change::SetMode(GameMode::CharacterSelect)),
        }
        Ok(())
    }

    pub(super) fn change_character(&mut self, tx: &mut Transition) -> Result<(), IntentError> {
        if self.state.mode.kind() != ModeKind::Menu {
            return Err(self.wrong_mode("change_character"));
        }
        self.emit(tx, Change::SetMode(GameMode::CharacterSelect));
        Ok(())
    }

    pub(super) fn select_class(
        &mut self,
        tx: &mut Transition,
        class: ClassId,
    ) -> Result<(), IntentError> {
        if self.state.mode.kind() != ModeKind::CharacterSelect {
            return Err(self.wrong_mode("select_class"));
        }
        if self.env.content().class(class).is_none() {
            return Err(IntentError::UnknownClass(class));
        }
        self.begin_run(tx, class);
        Ok(())
    }

    /// Creates the player from the class definition and starts a fresh run.
    ///
    /// The first commons of the class pool become both the inventory and the
    /// hand. Classes with starting artifacts go through an artifact pick first.
    fn begin_run(&mut self, tx: &mut Transition, class: ClassId) {
        let content = self.env.content();
        let Some(definition) = content.class(class) else {
            return;
        };

        let starting: Vec<Skill> = content
            .card_pool(class)
            .iter()
            .filter(|skill| skill.rarity == Rarity::Common)
            .take(self.config.starting_cards)
            .cloned()
            .collect();
        let hand = starting
            .iter()
            .take(self.config.hand_size)
            .cloned()
            .collect();

        let player = Combatant::player(
            definition.name.clone(),
            definition.element,
            definition.base_hp,
            definition.base_attack,
            definition.base_luck,
            self.env.tables().default_defense(),
            PlayerExtras {
                class,
                equipped: hand,
                artifacts: Vec::new(),
            },
        );

        self.emit(tx, Change::BumpGeneration);
        self.emit(tx, Change::RememberClass(class));
        self.emit(tx, Change::BeginRun(Box::new(Run::new(player, starting))));

        let artifacts = content.starting_artifacts(class);
        let mode = if artifacts.is_empty() {
            GameMode::Exploring
        } else {
            GameMode::ArtifactSelect(ArtifactOffer {
                artifacts,
                origin: ArtifactOrigin::Starting,
            })
        };
        self.emit(tx, Change::SetMode(mode));
    }

    pub(super) fn open_inventory(
        &mut self,
        tx: &mut Transition,
        intent: &'static str,
        inventory: GameMode,
    ) -> Result<(), IntentError> {
        if self.state.mode.kind() != ModeKind::Exploring {
            return Err(self.wrong_mode(intent));
        }
        self.emit(tx, Change::SetMode(inventory));
        Ok(())
    }

    pub(super) fn close_inventory(&mut self, tx: &mut Transition) -> Result<(), IntentError> {
        match self.state.mode.kind() {
            ModeKind::SkillInventory | ModeKind::ArtifactInventory => {
                self.emit(tx, Change::SetMode(GameMode::Exploring));
                Ok(())
            }
            _ => Err(self.wrong_mode("close_inventory")),
        }
    }

    /// Replaces the hand with distinct inventory cards and returns to exploring.
    pub(super) fn equip_skills(
        &mut self,
        tx: &mut Transition,
        indices: &[usize],
    ) -> Result<(), IntentError> {
        if self.state.mode.kind() != ModeKind::SkillInventory {
            return Err(self.wrong_mode("equip_skills"));
        }
        let run = self.state.run.as_ref().ok_or(IntentError::NoRun)?;

        let limit = self.config.hand_size;
        if indices.is_empty() || indices.len() > limit {
            return Err(IntentError::HandSize {
                requested: indices.len(),
                limit,
            });
        }

        let available = run.inventory.len();
        let mut hand = Vec::with_capacity(indices.len());
        for (position, &index) in indices.iter().enumerate() {
            if index >= available || indices[..position].contains(&index) {
                return Err(IntentError::InvalidSelection { index, available });
            }
            hand.push(run.inventory[index].clone());
        }

        self.emit(tx, Change::EquipSkills(hand));
        self.emit(tx, Change::SetMode(GameMode::Exploring));
        Ok(())
    }

    /// Opens the abandon-run prompt. Character select has nothing to abandon
    /// and goes straight back to the menu.
    pub(super) fn request_menu(&mut self, tx: &mut Transition) -> Result<(), IntentError> {
        if self.state.run.is_none() {
            if self.state.mode.kind() == ModeKind::CharacterSelect {
                self.emit(tx, Change::SetMode(GameMode::Menu));
                return Ok(());
            }
            return Err(IntentError::NoRun);
        }
        self.emit(tx, Change::SetMenuPrompt(true));
        Ok(())
    }

    /// Abandons the run. Anything scheduled for it becomes stale.
    pub(super) fn confirm_menu(&mut self, tx: &mut Transition) -> Result<(), IntentError> {
        if !self.state.menu_prompt {
            return Err(IntentError::NoPendingConfirmation);
        }
        self.emit(tx, Change::DiscardRun);
        self.emit(tx, Change::BumpGeneration);
        Ok(())
    }

    pub(super) fn cancel_menu(&mut self, tx: &mut Transition) -> Result<(), IntentError> {
        if !self.state.menu_prompt {
            return Err(IntentError::NoPendingConfirmation);
        }
        self.emit(tx, Change::SetMenuPrompt(false));
        Ok(())
    }

    /// Defeat: discard the run and go back to the menu.
    pub(super) fn reset_run(&mut self, tx: &mut Transition) -> bool {
        if self.state.run.is_none() {
            return false;
        }
        self.emit(tx, Change::DiscardRun);
        self.emit(tx, Change::BumpGeneration);
        true
    }
}
