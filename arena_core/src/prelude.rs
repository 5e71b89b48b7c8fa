//! Prelude module for convenient imports
//!
//! ```rust
//! use arena_core::prelude::*;
//! ```

// Core types
pub use crate::stats::{EquipmentStats, EquippedItem, ItemDefinition, MaterialModifier, StatVector};
pub use crate::types::{EquipmentSlot, HitZone, Rarity, StatKind};

// Stats engine
pub use crate::stats::{
    compute_equipment_stats, compute_item_stats, compute_item_stats_for_level,
    validate_material_modifiers,
};

// Combat engine
pub use crate::combat::{
    calculate_combat_rating, calculate_damage, combat_rating_with_fallback, determine_hit_zone,
    resolve_attack, AttackResult, DamageOutcome, HitBands, RatingAuthority,
};

// Errors
pub use crate::error::{RatingError, ValidationError};

// Config
pub use crate::config::{default_content, ContentConfig};
