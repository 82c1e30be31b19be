/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Maximum number of equipped skills.
    pub hand_size: usize,
    /// Stages per layer; clearing the last one advances the layer.
    pub stages_per_layer: u32,
    /// A card reward is offered whenever completed actions hit a multiple of this.
    pub card_reward_cadence: u32,
    /// Number of distinct cards offered per card reward.
    pub card_reward_size: usize,
    /// Common cards granted and equipped at character creation.
    pub starting_cards: usize,
    pub stun_turns: u32,
    pub freeze_turns: u32,
    pub poison_turns: u32,
    /// Dice faces; trap rolls are in `1..=dice_sides`.
    pub dice_sides: u32,
    /// Trap rolls at or above this value avoid the trap.
    pub trap_avoid_threshold: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HAND_SIZE: usize = 4;
    pub const DEFAULT_STAGES_PER_LAYER: u32 = 10;
    pub const DEFAULT_CARD_REWARD_CADENCE: u32 = 3;
    pub const DEFAULT_CARD_REWARD_SIZE: usize = 3;
    pub const DEFAULT_STARTING_CARDS: usize = 4;
    pub const DEFAULT_STUN_TURNS: u32 = 1;
    pub const DEFAULT_FREEZE_TURNS: u32 = 2;
    pub const DEFAULT_POISON_TURNS: u32 = 3;
    pub const DEFAULT_DICE_SIDES: u32 = 6;
    pub const DEFAULT_TRAP_AVOID_THRESHOLD: u32 = 6;

    pub fn new() -> Self {
        Self {
            hand_size: Self::DEFAULT_HAND_SIZE,
            stages_per_layer: Self::DEFAULT_STAGES_PER_LAYER,
            card_reward_cadence: Self::DEFAULT_CARD_REWARD_CADENCE,
            card_reward_size: Self::DEFAULT_CARD_REWARD_SIZE,
            starting_cards: Self::DEFAULT_STARTING_CARDS,
            stun_turns: Self::DEFAULT_STUN_TURNS,
            freeze_turns: Self::DEFAULT_FREEZE_TURNS,
            poison_turns: Self::DEFAULT_POISON_TURNS,
            dice_sides: Self::DEFAULT_DICE_SIDES,
            trap_avoid_threshold: Self::DEFAULT_TRAP_AVOID_THRESHOLD,
        }
    }

    /// Duration applied when a skill inflicts `kind`.
    pub fn status_turns(&self, kind: crate::state::StatusEffectKind) -> u32 {
        use crate::state::StatusEffectKind;

        match kind {
            StatusEffectKind::Stun => self.stun_turns,
            StatusEffectKind::Freeze => self.freeze_turns,
            StatusEffectKind::Poison => self.poison_turns,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
