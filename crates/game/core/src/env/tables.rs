use crate::state::{Defense, Element};

/// Type of a stage within a layer, decided by its index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum StageType {
    Normal,
    MiniBoss,
    Boss,
}

impl StageType {
    pub const fn is_boss(self) -> bool {
        matches!(self, Self::MiniBoss | Self::Boss)
    }
}

/// Oracle providing game-balance formulas.
///
/// The engine relies only on the documented bounds, never on exact numbers:
/// - `dodge_rate` is monotonic non-decreasing in luck and lies in `0..100`.
/// - `element_multiplier` is total over [`Element`] pairs and positive.
/// - Percent-valued chances lie in `0..=100`.
pub trait TablesOracle: Send + Sync {
    /// Chance (percent) that a defender with `luck` dodges one hit.
    fn dodge_rate(&self, luck: u32) -> u32;

    /// Damage multiplier for `attacker` element hitting `defender` element.
    fn element_multiplier(&self, attacker: Element, defender: Element) -> f64;

    /// Flat bonus an enemy adds to its skill damage from its attack stat.
    fn attack_bonus(&self, attack: u32) -> u32;

    /// Chance (percent) that proceeding leads to combat rather than an event.
    fn combat_chance(&self) -> u32;

    fn stage_type(&self, stage: u32) -> StageType;

    /// Gold earned for `kills` defeated enemies.
    fn gold_reward(&self, kills: u32, is_boss: bool) -> u32;

    /// Chance (percent) that a defeated enemy drops an artifact choice.
    fn artifact_drop_chance(&self, is_boss: bool) -> u32;

    /// Defense given to a freshly created player.
    fn default_defense(&self) -> Defense;
}
