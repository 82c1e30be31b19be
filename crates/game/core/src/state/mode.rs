//! Top-level run modes.

use super::artifact::Artifact;
use super::event::EventEncounter;
use super::session::CombatSession;
use super::skill::Skill;

/// Why an artifact choice is being offered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ArtifactOrigin {
    /// Offered right after character creation.
    Starting,
    /// Dropped by a defeated enemy; stage advancement waits on it.
    CombatDrop,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArtifactOffer {
    pub artifacts: Vec<Artifact>,
    pub origin: ArtifactOrigin,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardOffer {
    pub cards: Vec<Skill>,
}

/// The active screen. Exactly one is active; each carries only its own payload.
#[derive(Clone, Debug, PartialEq, Eq, Default, strum::EnumDiscriminants)]
#[strum_discriminants(name(ModeKind), derive(Hash, strum::Display))]
#[strum_discriminants(strum(serialize_all = "snake_case"))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    strum_discriminants(derive(serde::Serialize, serde::Deserialize))
)]
pub enum GameMode {
    #[default]
    Menu,
    CharacterSelect,
    Exploring,
    Combat(CombatSession),
    Event(EventEncounter),
    CardReward(CardOffer),
    ArtifactSelect(ArtifactOffer),
    ArtifactInventory,
    SkillInventory,
}

impl GameMode {
    pub fn kind(&self) -> ModeKind {
        ModeKind::from(self)
    }

    pub fn session(&self) -> Option<&CombatSession> {
        match self {
            Self::Combat(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut CombatSession> {
        match self {
            Self::Combat(session) => Some(session),
            _ => None,
        }
    }

    pub fn event(&self) -> Option<&EventEncounter> {
        match self {
            Self::Event(encounter) => Some(encounter),
            _ => None,
        }
    }

    pub fn event_mut(&mut self) -> Option<&mut EventEncounter> {
        match self {
            Self::Event(encounter) => Some(encounter),
            _ => None,
        }
    }

    /// Modes that only exist while a run is in progress.
    pub fn requires_run(&self) -> bool {
        !matches!(self, Self::Menu | Self::CharacterSelect)
    }
}
