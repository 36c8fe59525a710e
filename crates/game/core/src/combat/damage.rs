//! Damage arithmetic shared by battle strategies and entities.
//!
//! # Formula
//!
//! ```text
//! raw        = round(max(attack, 0) × attack_multiplier)
//! reduction  = round(max(defense, 0) × defense_effectiveness)
//! mitigated  = max(raw − reduction, MIN_DAMAGE)
//! ```
//!
//! Rounding is half-to-even, so `4.5` rounds to `4`.

use crate::config::GameConfig;

/// Round half-to-even and convert to a non-negative integer.
#[inline]
pub fn round_stat(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.round_ties_even().min(u32::MAX as f64) as u32
}

/// Nominal damage an attacker produces before the target's defense.
///
/// Negative attack power counts as zero.
pub fn attack_damage(attack_power: i32, multiplier: f64) -> u32 {
    round_stat(attack_power.max(0) as f64 * multiplier)
}

/// Points of damage cancelled by `defense` at the given effectiveness.
pub fn defense_reduction(defense: i32, effectiveness: f64) -> u32 {
    round_stat(defense.max(0) as f64 * effectiveness)
}

/// Damage left after defense, never below [`GameConfig::MIN_DAMAGE`].
pub fn mitigate(nominal: u32, reduction: u32) -> u32 {
    nominal.saturating_sub(reduction).max(GameConfig::MIN_DAMAGE)
}

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_is_half_to_even() {
        assert_eq!(defense_reduction(3, 1.5), 4);
        assert_eq!(defense_reduction(5, 0.5), 2);
        assert_eq!(defense_reduction(7, 0.5), 4);
        assert_eq!(attack_damage(25, 1.2), 30);
        assert_eq!(attack_damage(25, 0.8), 20);
    }

    #[test]
    fn negative_stats_count_as_zero() {
        assert_eq!(attack_damage(-8, 1.2), 0);
        assert_eq!(defense_reduction(-3, 1.5), 0);
    }

    #[test]
    fn minimum_damage_survives_any_defense() {
        assert_eq!(mitigate(5, 40), 1);
        assert_eq!(mitigate(0, 0), 1);
        assert_eq!(mitigate(30, 4), 26);
    }
}
