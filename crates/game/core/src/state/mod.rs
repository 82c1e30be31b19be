//! Run store and the data model it holds.
//!
//! [`RunState`] is the single mutable store of a play session. The active
//! [`GameMode`] carries mode-specific payload (the combat session lives inside
//! `GameMode::Combat`), while [`Run`] holds everything that survives between
//! encounters. All mutation goes through [`Change`].
mod artifact;
mod change;
mod combatant;
mod event;
mod mode;
mod progress;
mod session;
mod skill;
mod status;

pub use artifact::{Artifact, ArtifactEffect, ArtifactId};
pub use change::Change;
pub use combatant::{
    ClassId, Combatant, Defense, Element, EnemyExtras, EnemyRank, PlayerExtras, Role,
};
pub use event::{EventChoice, EventEncounter, EventKind, EventTemplate, ValueRange};
pub use mode::{ArtifactOffer, ArtifactOrigin, CardOffer, GameMode, ModeKind};
pub use progress::RunProgress;
pub use session::{CombatSession, TurnPhase};
pub use skill::{Rarity, Skill, SkillFlags, SkillId};
pub use status::{Side, SideStatuses, StatusEffectKind, StatusEffects};

/// Everything that belongs to one run and is discarded with it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run {
    /// Always carries [`Role::Player`].
    pub player: Combatant,
    pub progress: RunProgress,
    /// Every card owned this run; the equipped hand is a subset.
    pub inventory: Vec<Skill>,
}

impl Run {
    pub fn new(player: Combatant, inventory: Vec<Skill>) -> Self {
        Self {
            player,
            progress: RunProgress::new(),
            inventory,
        }
    }

    pub fn equipped(&self) -> &[Skill] {
        self.player
            .as_player()
            .map(|extras| extras.equipped.as_slice())
            .unwrap_or_default()
    }

    pub fn artifacts(&self) -> &[Artifact] {
        self.player.artifacts()
    }

    pub fn class(&self) -> Option<ClassId> {
        self.player.as_player().map(|extras| extras.class)
    }
}

/// The store: current mode, the run in progress, and session bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunState {
    pub mode: GameMode,
    pub run: Option<Run>,
    /// Class picked most recently; survives run discards so the menu can
    /// start a new run without re-selecting.
    pub selected_class: Option<ClassId>,
    /// A return-to-menu confirmation is pending.
    pub menu_prompt: bool,
    /// Tag checked before applying any scheduled continuation.
    pub generation: u64,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&CombatSession> {
        self.mode.session()
    }

    pub fn event(&self) -> Option<&EventEncounter> {
        self.mode.event()
    }

    pub fn progress(&self) -> Option<&RunProgress> {
        self.run.as_ref().map(|run| &run.progress)
    }

    pub fn player(&self) -> Option<&Combatant> {
        self.run.as_ref().map(|run| &run.player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_run() -> Run {
        let extras = PlayerExtras {
            class: ClassId(1),
            equipped: Vec::new(),
            artifacts: Vec::new(),
        };
        let player = Combatant::player(
            "Hero",
            Element::Fire,
            100,
            10,
            5,
            Defense::new("Leather", 10),
            extras,
        );
        Run::new(player, Vec::new())
    }

    #[test]
    fn layer_advance_resets_stage_and_heals() {
        let mut state = RunState::new();
        state.apply(Change::BeginRun(Box::new(sample_run())));
        state.apply(Change::SetPlayerHp(40));
        state.apply(Change::AdvanceStage);
        state.apply(Change::AdvanceLayer);

        let run = state.run.as_ref().unwrap();
        assert_eq!(run.progress.stage, 1);
        assert_eq!(run.progress.layer, 2);
        assert_eq!(run.player.hp(), 100);
    }

    #[test]
    fn combat_changes_outside_combat_are_ignored() {
        let mut state = RunState::new();
        state.apply(Change::BeginRun(Box::new(sample_run())));
        state.apply(Change::SetMode(GameMode::Exploring));
        let before = state.clone();

        state.apply(Change::SetEnemyHp(1));
        state.apply(Change::AppendLog("ignored".into()));
        state.apply(Change::DecayStatus(Side::Enemy));

        assert_eq!(state, before);
    }

    #[test]
    fn discard_run_returns_to_menu_but_keeps_class() {
        let mut state = RunState::new();
        state.apply(Change::RememberClass(ClassId(1)));
        state.apply(Change::BeginRun(Box::new(sample_run())));
        state.apply(Change::SetMenuPrompt(true));
        state.apply(Change::DiscardRun);

        assert!(state.run.is_none());
        assert!(!state.menu_prompt);
        assert_eq!(state.mode.kind(), ModeKind::Menu);
        assert_eq!(state.selected_class, Some(ClassId(1)));
    }
}
