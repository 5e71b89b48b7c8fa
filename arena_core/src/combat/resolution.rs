//! Attack resolution - Aim angle + stat vectors → AttackResult

use super::damage::calculate_damage;
use super::hit_zone::{determine_hit_zone, HitBands};
use super::result::AttackResult;
use crate::stats::StatVector;
use rand::Rng;

/// Resolve an attack at a known aim angle
///
/// The attacker's `offense_power` is weighed against the defender's
/// `defense_power`. The rng is used for the crit bonus roll only.
pub fn resolve_attack(
    attacker: &StatVector,
    defender: &StatVector,
    angle_degrees: f64,
    bands: &HitBands,
    rng: &mut impl Rng,
) -> AttackResult {
    let zone = determine_hit_zone(angle_degrees, bands);
    let outcome = calculate_damage(attacker.offense_power, defender.defense_power, zone, rng);
    let result = AttackResult::new(angle_degrees, zone, outcome);

    tracing::debug!(
        angle = angle_degrees,
        zone = %zone,
        damage = outcome.damage,
        applied = result.applied_damage,
        "resolved attack"
    );

    result
}

/// Resolve an attack with the aim angle drawn from `rng`
pub fn resolve_random_attack(
    attacker: &StatVector,
    defender: &StatVector,
    bands: &HitBands,
    rng: &mut impl Rng,
) -> AttackResult {
    let angle = bands.sample_angle(rng);
    resolve_attack(attacker, defender, angle, bands, rng)
}
