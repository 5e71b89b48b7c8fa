//! Rating fallback - Prefer an authoritative rating, substitute the local formula on failure

use super::rating::calculate_combat_rating;
use crate::error::RatingError;
use serde::{Deserialize, Serialize};

/// An external, authoritative combat rating computation (e.g. a power index
/// maintained by the content store)
pub trait RatingAuthority {
    fn combat_rating(
        &self,
        attack_power: f64,
        defense_power: f64,
        hit_points: f64,
    ) -> Result<f64, RatingError>;
}

/// Where a rating came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingSource {
    Authoritative,
    Fallback,
}

/// A combat rating tagged with its source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatRating {
    pub value: f64,
    pub source: RatingSource,
}

/// Ask the authority for a rating; on any failure use [`calculate_combat_rating`]
///
/// A non-finite authoritative value counts as a failure.
pub fn combat_rating_with_fallback<A: RatingAuthority + ?Sized>(
    authority: &A,
    attack_power: f64,
    defense_power: f64,
    hit_points: f64,
) -> CombatRating {
    let authoritative = authority
        .combat_rating(attack_power, defense_power, hit_points)
        .and_then(|value| {
            if value.is_finite() {
                Ok(value)
            } else {
                Err(RatingError::NonFinite(value))
            }
        });

    match authoritative {
        Ok(value) => CombatRating {
            value,
            source: RatingSource::Authoritative,
        },
        Err(err) => {
            tracing::warn!(error = %err, "authoritative combat rating failed, using local formula");
            CombatRating {
                value: calculate_combat_rating(attack_power, defense_power, hit_points),
                source: RatingSource::Fallback,
            }
        }
    }
}
