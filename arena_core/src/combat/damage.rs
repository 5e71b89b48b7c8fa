//! Damage formula - zone multiplier, defense subtraction, crit bonus, floor

use super::constants::{MAX_CRIT_BONUS, MIN_DAMAGE};
use super::result::DamageOutcome;
use crate::types::HitZone;
use rand::Rng;

/// Calculate damage for an attack landing in `zone`, rolling the crit bonus from `rng`
///
/// `raw = attack_power * multiplier(zone) - defense_power`, plus
/// `crit_bonus * attack_power` on a crit, where `crit_bonus` is drawn from
/// `[0, MAX_CRIT_BONUS]`. The result is rounded and floored at 1.
///
/// The rng is only consumed for crits.
pub fn calculate_damage(
    attack_power: f64,
    defense_power: f64,
    zone: HitZone,
    rng: &mut impl Rng,
) -> DamageOutcome {
    let crit_bonus = if zone == HitZone::Crit {
        rng.gen_range(0.0..=MAX_CRIT_BONUS)
    } else {
        0.0
    };
    calculate_damage_with_bonus(attack_power, defense_power, zone, crit_bonus)
}

/// Calculate damage with a pre-sampled crit bonus
///
/// `crit_bonus` is expected in `[0, MAX_CRIT_BONUS]` and is ignored outside
/// the crit zone. Total over every input: NaN and negative results floor to
/// the minimum damage.
pub fn calculate_damage_with_bonus(
    attack_power: f64,
    defense_power: f64,
    zone: HitZone,
    crit_bonus: f64,
) -> DamageOutcome {
    let base_multiplier = zone.multiplier();
    let crit_bonus = if zone == HitZone::Crit { crit_bonus } else { 0.0 };

    let raw = attack_power * base_multiplier - defense_power + crit_bonus * attack_power;
    // f64::max returns the non-NaN operand
    let damage = raw.round().max(MIN_DAMAGE as f64) as i64;

    DamageOutcome {
        damage,
        base_multiplier,
        crit_bonus,
    }
}
