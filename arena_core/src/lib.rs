//! arena_core - Stat and combat engines for an equipment-driven RPG
//!
//! This library provides:
//! - StatVector: The four-component offense/defense stat record
//! - Item stats: Base template × level × rarity, plus material modifiers
//! - Equipment aggregation: Per-slot contributions and loadout totals
//! - Combat: Hit-zone classification, damage formula, combat rating
//! - Content: TOML loading and validation of items, materials and encounters
//!
//! Every engine call is a pure function. Randomness (the crit bonus roll and
//! sampled aim angles) always comes from a caller-supplied `rand::Rng`.

pub mod combat;
pub mod config;
pub mod error;
pub mod prelude;
pub mod stats;
pub mod types;

// Re-export core types for convenience
pub use combat::{
    calculate_combat_rating, calculate_damage, calculate_damage_with_bonus,
    combat_rating_with_fallback, determine_hit_zone, resolve_attack, resolve_random_attack,
    AttackResult, CombatRating, DamageOutcome, HitBands, RatingAuthority, RatingSource,
};
pub use config::{default_content, load_content, parse_content, ConfigError, ContentConfig, EncounterConfig};
pub use error::{RatingError, ValidationError};
pub use stats::{
    compute_equipment_stats, compute_item_stats, compute_item_stats_for_level,
    validate_material_modifiers, EquipmentStats, EquippedItem, ItemDefinition, MaterialModifier,
    StatVector,
};
pub use types::{EquipmentSlot, HitZone, Rarity, StatKind};
