//! Combat rating - Single-number power summary

use super::constants::{RATING_ATTACK_WEIGHT, RATING_DEFENSE_WEIGHT, RATING_HIT_POINTS_WEIGHT};

/// Weighted power score: `attack * 2 + defense * 1.5 + hit_points * 0.5`
///
/// Ratings are whole points; the fractional part left by the half-weights is
/// dropped.
pub fn calculate_combat_rating(attack_power: f64, defense_power: f64, hit_points: f64) -> f64 {
    let weighted = attack_power * RATING_ATTACK_WEIGHT
        + defense_power * RATING_DEFENSE_WEIGHT
        + hit_points * RATING_HIT_POINTS_WEIGHT;
    weighted.floor()
}
