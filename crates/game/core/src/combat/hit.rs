//! Dodge checks.

use crate::env::{RandomSource, TablesOracle};

/// Highest dodge chance honoured regardless of what the tables return.
pub const MAX_DODGE_RATE: u32 = 99;

/// Draws one independent dodge check for a defender with `luck`.
///
/// The hit lands iff the check fails.
pub fn is_dodged(
    luck: u32,
    tables: &(impl TablesOracle + ?Sized),
    rng: &mut (impl RandomSource + ?Sized),
) -> bool {
    let rate = tables.dodge_rate(luck).min(MAX_DODGE_RATE);
    rng.chance(rate)
}
