//! Player intents accepted by the engine.

use crate::state::{ClassId, EventChoice};

/// Everything the presentation layer can ask for.
///
/// Each intent is valid only in certain modes; anything else is rejected with
/// an [`IntentError`](crate::IntentError) and leaves the store untouched.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Intent {
    // ===== menu =====
    /// Start a run with the remembered class, or go pick one.
    StartGame,
    ChangeCharacter,
    SelectClass(ClassId),

    // ===== exploring =====
    /// Move on to the next encounter.
    Proceed,
    OpenSkillInventory,
    OpenArtifactInventory,

    // ===== combat =====
    /// Use the equipped skill in this hand slot.
    SelectSkill(usize),

    // ===== event =====
    ChooseEvent(EventChoice),

    // ===== rewards =====
    PickCard(usize),
    SkipCard,
    PickArtifact(usize),
    SkipArtifact,

    // ===== inventories =====
    /// Replace the hand with these inventory indices, in order.
    EquipSkills(Vec<usize>),
    CloseInventory,

    // ===== return to menu =====
    /// Ask to abandon the run; needs [`Intent::ConfirmMenu`].
    RequestMenu,
    ConfirmMenu,
    CancelMenu,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        self.into()
    }
}
