//! Run-wide counters.

/// Counters that persist across encounters within one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunProgress {
    /// Stage within the current layer, starting at 1.
    pub stage: u32,
    /// Layer (floor), starting at 1.
    pub layer: u32,
    /// Completed actions: one per finished combat or finished event.
    ///
    /// Drives the card-reward cadence. Distinct from the in-combat turn
    /// counter kept by the combat session.
    pub total_turns: u32,
    /// Enemies defeated (informational).
    pub kill_count: u32,
    pub gold: u32,
}

impl RunProgress {
    pub const fn new() -> Self {
        Self {
            stage: 1,
            layer: 1,
            total_turns: 0,
            kill_count: 0,
            gold: 0,
        }
    }

    /// True when the stage is the last one of its layer.
    pub const fn is_layer_end(&self, stages_per_layer: u32) -> bool {
        self.stage >= stages_per_layer
    }

    /// True when `total_turns` sits on a multiple of `cadence` (and is non-zero).
    pub const fn card_reward_due(&self, cadence: u32) -> bool {
        cadence > 0 && self.total_turns > 0 && self.total_turns % cadence == 0
    }
}

impl Default for RunProgress {
    fn default() -> Self {
        Self::new()
    }
}
