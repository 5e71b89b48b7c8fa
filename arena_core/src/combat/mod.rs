//! Combat engine - Hit-zone classification, damage, combat rating

mod damage;
mod fallback;
mod hit_zone;
mod rating;
mod resolution;
mod result;

pub use damage::{calculate_damage, calculate_damage_with_bonus};
pub use fallback::{combat_rating_with_fallback, CombatRating, RatingAuthority, RatingSource};
pub use hit_zone::{determine_hit_zone, HitBands};
pub use rating::calculate_combat_rating;
pub use resolution::{resolve_attack, resolve_random_attack};
pub use result::{AttackResult, DamageOutcome};

/// Combat calculation constants
pub mod constants {
    /// Upper bound of the crit bonus roll, as a fraction of attack power
    pub const MAX_CRIT_BONUS: f64 = 1.0;

    /// Damage floor: every resolved attack deals at least this much
    pub const MIN_DAMAGE: i64 = 1;

    /// Degrees in a full aim circle
    pub const FULL_CIRCLE_DEGREES: f64 = 360.0;

    /// Combat rating weights: attack * 2 + defense * 1.5 + hit points * 0.5
    pub const RATING_ATTACK_WEIGHT: f64 = 2.0;
    pub const RATING_DEFENSE_WEIGHT: f64 = 1.5;
    pub const RATING_HIT_POINTS_WEIGHT: f64 = 0.5;
}
