//! Damage pipeline steps.
//!
//! Intermediate values are `f64`; only [`final_damage`] converts back to an
//! integer, flooring and clamping at zero.

/// How the elemental multiplier changed a hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effectiveness {
    Neutral,
    Strong,
    Weak,
}

impl Effectiveness {
    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier > 1.0 {
            Self::Strong
        } else if multiplier < 1.0 {
            Self::Weak
        } else {
            Self::Neutral
        }
    }

    /// Suffix appended to a per-hit log line.
    pub const fn log_suffix(self) -> &'static str {
        match self {
            Self::Neutral => "",
            Self::Strong => " (super effective!)",
            Self::Weak => " (not very effective...)",
        }
    }
}

/// Multiplies by the elemental factor; negative factors count as zero.
pub fn apply_elemental(damage: f64, multiplier: f64) -> f64 {
    damage * multiplier.max(0.0)
}

/// Removes `reduction` percent of the damage.
pub fn apply_defense(damage: f64, reduction: u8) -> f64 {
    let kept = 100u8.saturating_sub(reduction.min(100));
    damage * f64::from(kept) / 100.0
}

/// Floors to a non-negative integer.
pub fn final_damage(damage: f64) -> u32 {
    if !damage.is_finite() || damage <= 0.0 {
        return 0;
    }
    damage.floor().min(f64::from(u32::MAX)) as u32
}

/// HP left after `damage`, never below 0.
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}
