//! Errors raised by the stats and combat engines

use crate::types::EquipmentSlot;
use thiserror::Error;

/// A rejected input to one of the engines
///
/// Every variant carries the offending value so callers can report it
/// without re-inspecting the input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("level must be positive (got {0})")]
    NonPositiveLevel(i32),
    #[error("base stats must sum to approximately 1.0 (got {sum:.4})")]
    BaseStatsSum { sum: f64 },
    #[error("cannot apply more than {max} materials (got {count})")]
    TooManyMaterials { count: usize, max: usize },
    #[error("invalid rarity: {0}")]
    InvalidRarity(String),
    #[error("material '{material}' modifiers must sum to approximately 0.0 (got {sum:.4})")]
    UnbalancedMaterial { material: String, sum: f64 },
    #[error("cannot equip more than {max} items (got {count})")]
    TooManyEquipped { count: usize, max: usize },
    #[error("duplicate equipment slot: {0}")]
    DuplicateSlot(EquipmentSlot),
    #[error("invalid equipment slot: {0}")]
    InvalidSlot(String),
}

/// Failure of the authoritative combat rating computation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RatingError {
    #[error("rating service unavailable: {0}")]
    Unavailable(String),
    #[error("rating service returned a non-finite rating: {0}")]
    NonFinite(f64),
}
